//! Seed dataset - the speaker roster handed to the store at startup.
//!
//! A default roster ships embedded in the binary; an alternative roster can
//! be loaded from a JSON file given on the command line.

use crate::models::Speaker;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Roster bundled with the binary
const EMBEDDED_SEED: &str = include_str!("../data/speakers.json");

/// Parse the embedded roster.
pub fn default_seed() -> Result<Vec<Speaker>> {
    let speakers: Vec<Speaker> =
        serde_json::from_str(EMBEDDED_SEED).context("embedded seed data is malformed")?;
    validate(&speakers)?;
    Ok(speakers)
}

/// Load a roster from a JSON file.
pub fn load_seed(path: &Path) -> Result<Vec<Speaker>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let speakers: Vec<Speaker> = serde_json::from_str(&content)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    validate(&speakers)?;
    Ok(speakers)
}

/// Records are unique by id; reject seeds that break that up front.
fn validate(speakers: &[Speaker]) -> Result<()> {
    let mut seen = HashSet::new();
    for speaker in speakers {
        if !seen.insert(speaker.id) {
            bail!("duplicate speaker id {} in seed data", speaker.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_seed_parses() {
        let speakers = default_seed().unwrap();
        assert!(!speakers.is_empty());
        // Seed records always start unfavorited
        assert!(speakers.iter().all(|s| !s.favorite));
    }

    #[test]
    fn test_load_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "first": "Grace", "last": "Hopper", "company": "Navy"}}]"#
        )
        .unwrap();

        let speakers = load_seed(file.path()).unwrap();
        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].id, 1);
        assert!(speakers[0].sessions.is_empty());
        assert!(!speakers[0].favorite);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 2, "first": "A", "last": "B", "company": "C"}},
                {{"id": 2, "first": "D", "last": "E", "company": "F"}}]"#
        )
        .unwrap();

        let err = load_seed(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate speaker id 2"));
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_seed(Path::new("/nonexistent/speakers.json")).is_err());
    }
}
