//! Posting ranking: six dimension scorers, the weighted composite, tier
//! classification and the batch engine that ties them together.

pub mod compensation;
pub mod composite;
pub mod engine;
pub mod handlers;
pub mod interview;
pub mod models;
pub mod pathway_fit;
pub mod reputation;
pub mod skills;
pub mod success;
pub mod tier;
