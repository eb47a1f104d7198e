//! Eligibility pathway: occupation lookup and aggregate reporting over a
//! scored batch. The per-posting pathway score lives in `ranking::pathway_fit`.

pub mod occupation;
pub mod summary;

pub use occupation::{describe_occupation, OccupationGuesser, TitleOccupationGuesser};
pub use summary::{summarize, PathwaySummary};
