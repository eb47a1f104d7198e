use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use super::{Taxonomy, TaxonomyError};

/// Holds the active taxonomy snapshot.
///
/// Readers clone the `Arc` and score against it for as long as they need;
/// a reload builds and validates a complete `Taxonomy` first and only then
/// swaps the pointer, so no reader ever sees a half-loaded taxonomy.
#[derive(Debug)]
pub struct TaxonomyStore {
    current: RwLock<Arc<Taxonomy>>,
    source: Option<PathBuf>,
}

impl TaxonomyStore {
    pub fn new(taxonomy: Taxonomy, source: Option<PathBuf>) -> Self {
        Self {
            current: RwLock::new(Arc::new(taxonomy)),
            source,
        }
    }

    /// Loads the initial snapshot from `source`, or the bundled taxonomy when
    /// no path is configured. Callers treat an error here as fatal.
    pub fn open(source: Option<PathBuf>) -> Result<Self, TaxonomyError> {
        let taxonomy = read_source(source.as_ref())?;
        info!(
            "Taxonomy loaded from {} ({} skills)",
            describe(source.as_ref()),
            taxonomy.skills.len()
        );
        Ok(Self::new(taxonomy, source))
    }

    pub fn snapshot(&self) -> Arc<Taxonomy> {
        // The write side only ever assigns a fully built Arc, so a poisoned
        // lock still holds a consistent value.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn replace(&self, taxonomy: Taxonomy) -> Arc<Taxonomy> {
        let next = Arc::new(taxonomy);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::clone(&next);
        next
    }

    /// Re-reads the configured source. On failure the active snapshot is kept.
    pub fn reload(&self) -> Result<Arc<Taxonomy>, TaxonomyError> {
        match read_source(self.source.as_ref()) {
            Ok(taxonomy) => {
                info!(
                    "Taxonomy reloaded from {} ({} skills)",
                    describe(self.source.as_ref()),
                    taxonomy.skills.len()
                );
                Ok(self.replace(taxonomy))
            }
            Err(e) => {
                warn!("Taxonomy reload rejected, keeping current snapshot: {e}");
                Err(e)
            }
        }
    }
}

fn read_source(source: Option<&PathBuf>) -> Result<Taxonomy, TaxonomyError> {
    match source {
        Some(path) => Taxonomy::load(path),
        None => Taxonomy::builtin(),
    }
}

fn describe(source: Option<&PathBuf>) -> String {
    source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str =
        r#"{"user_strong": ["rust"], "user_moderate": [], "user_emerging": [], "user_weak": []}"#;

    #[test]
    fn test_open_without_path_uses_builtin() {
        let store = TaxonomyStore::open(None).unwrap();
        assert!(store.snapshot().skills.strong.contains("python"));
    }

    #[test]
    fn test_reload_swaps_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SMALL}").unwrap();
        let store = TaxonomyStore::open(Some(file.path().to_path_buf())).unwrap();
        let before = store.snapshot();
        assert_eq!(before.skills.len(), 1);

        let mut rewrite = std::fs::File::create(file.path()).unwrap();
        write!(
            rewrite,
            r#"{{"user_strong": ["rust", "sql"], "user_moderate": [], "user_emerging": [], "user_weak": []}}"#
        )
        .unwrap();

        store.reload().unwrap();
        assert_eq!(store.snapshot().skills.len(), 2);
        // readers holding the old snapshot are unaffected
        assert_eq!(before.skills.len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_current() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SMALL}").unwrap();
        let store = TaxonomyStore::open(Some(file.path().to_path_buf())).unwrap();

        std::fs::write(file.path(), "{ not json").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.snapshot().skills.len(), 1);
    }
}
