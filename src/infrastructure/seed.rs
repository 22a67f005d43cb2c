//! Seed file loading and discovery

use crate::error::{BylinesError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked for when no seed path is given
pub const SEED_FILE_NAME: &str = "bylines.toml";

/// Environment variable naming a seed file
pub const SEED_ENV_VAR: &str = "BYLINES_SEED";

/// Raw contents of a seed file, before any validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDocument {
    #[serde(default, rename = "author")]
    pub authors: Vec<AuthorSeed>,
    #[serde(default, rename = "magazine")]
    pub magazines: Vec<MagazineSeed>,
    #[serde(default, rename = "article")]
    pub articles: Vec<ArticleSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorSeed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MagazineSeed {
    pub name: String,
    pub category: String,
}

/// Article entry; author and magazine are referenced by name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleSeed {
    pub author: String,
    pub magazine: String,
    pub title: String,
}

impl SeedDocument {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Anything that can hand over a seed document
pub trait SeedSource {
    /// Human-readable origin, used in log lines
    fn origin(&self) -> String;

    fn load(&self) -> Result<SeedDocument>;
}

/// Seed document read from a TOML file on disk
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    pub path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: PathBuf) -> Self {
        FileSeedSource { path }
    }

    /// Locate the seed file.
    /// An explicit path wins, then BYLINES_SEED, then discovery from the
    /// current directory upward.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(FileSeedSource::new(path));
        }

        if let Ok(seed_path) = std::env::var(SEED_ENV_VAR) {
            let path = PathBuf::from(seed_path);
            if path.is_file() {
                return Ok(FileSeedSource::new(path));
            } else {
                return Err(BylinesError::SeedNotFound(path));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` looking for bylines.toml
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(SEED_FILE_NAME);
            if candidate.is_file() {
                return Ok(FileSeedSource::new(candidate));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BylinesError::SeedNotFound(start.to_path_buf())),
            }
        }
    }
}

impl SeedSource for FileSeedSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<SeedDocument> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BylinesError::SeedNotFound(self.path.clone())
            } else {
                BylinesError::Io(e)
            }
        })?;

        SeedDocument::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[[author]]
name = "Jane"

[[magazine]]
name = "Vogue"
category = "Fashion"

[[article]]
author = "Jane"
magazine = "Vogue"
title = "My Fashion Story"
"#;

    #[test]
    fn test_parse_sample() {
        let doc = SeedDocument::from_toml_str(SAMPLE).unwrap();
        assert_eq!(doc.authors, vec![AuthorSeed { name: "Jane".into() }]);
        assert_eq!(doc.magazines[0].category, "Fashion");
        assert_eq!(doc.articles[0].title, "My Fashion Story");
    }

    #[test]
    fn test_empty_document_is_valid() {
        let doc = SeedDocument::from_toml_str("").unwrap();
        assert_eq!(doc, SeedDocument::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = SeedDocument::from_toml_str("[[author]]\nname = \"Jane\"\nage = 3\n");
        assert!(matches!(result, Err(BylinesError::TomlDeserialize(_))));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SEED_FILE_NAME), SAMPLE).unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let source = FileSeedSource::discover_from(&nested).unwrap();
        assert_eq!(source.path, temp.path().join(SEED_FILE_NAME));
        assert_eq!(source.load().unwrap().authors.len(), 1);
    }

    #[test]
    fn test_discover_explicit_path_wins() {
        let source = FileSeedSource::discover(Some(PathBuf::from("elsewhere.toml"))).unwrap();
        assert_eq!(source.path, PathBuf::from("elsewhere.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let source = FileSeedSource::new(temp.path().join("missing.toml"));
        match source.load().unwrap_err() {
            BylinesError::SeedNotFound(path) => assert!(path.ends_with("missing.toml")),
            other => panic!("Expected SeedNotFound error, got {:?}", other),
        }
    }
}
