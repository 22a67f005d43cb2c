//! Build a catalog from a seed document

use crate::domain::{AuthorId, Catalog, MagazineId};
use crate::error::{BylinesError, Result};
use crate::infrastructure::{SeedDocument, SeedSource};
use log::{info, warn};
use std::collections::HashMap;

/// Service that reads a seed source and turns it into a catalog
pub struct LoadCatalogService<S: SeedSource> {
    source: S,
}

impl<S: SeedSource> LoadCatalogService<S> {
    pub fn new(source: S) -> Self {
        LoadCatalogService { source }
    }

    pub fn execute(&self) -> Result<Catalog> {
        let seed = self.source.load()?;
        let catalog = build_catalog(&seed)?;
        info!(
            "event=seed_loaded module=load_catalog origin={} authors={} magazines={} articles={}",
            self.source.origin(),
            seed.authors.len(),
            seed.magazines.len(),
            seed.articles.len()
        );
        Ok(catalog)
    }
}

/// Create every entity in the document: authors, then magazines, then
/// articles, each in file order.
///
/// Author and magazine names must be unique within the document so that
/// articles can refer to them by name. Positions in error messages are
/// 1-based.
pub fn build_catalog(seed: &SeedDocument) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    let mut authors: HashMap<&str, AuthorId> = HashMap::new();
    for (idx, entry) in seed.authors.iter().enumerate() {
        if authors.contains_key(entry.name.as_str()) {
            return Err(BylinesError::Seed(format!(
                "author #{} duplicates name '{}'",
                idx + 1,
                entry.name
            )));
        }
        let id = catalog
            .create_author(entry.name.as_str())
            .inspect_err(|_| reject("author", idx))?;
        authors.insert(entry.name.as_str(), id);
    }

    let mut magazines: HashMap<&str, MagazineId> = HashMap::new();
    for (idx, entry) in seed.magazines.iter().enumerate() {
        if magazines.contains_key(entry.name.as_str()) {
            return Err(BylinesError::Seed(format!(
                "magazine #{} duplicates name '{}'",
                idx + 1,
                entry.name
            )));
        }
        let id = catalog
            .create_magazine(entry.name.as_str(), entry.category.as_str())
            .inspect_err(|_| reject("magazine", idx))?;
        magazines.insert(entry.name.as_str(), id);
    }

    for (idx, entry) in seed.articles.iter().enumerate() {
        let author = *authors.get(entry.author.as_str()).ok_or_else(|| {
            BylinesError::Seed(format!(
                "article #{} names unknown author '{}'",
                idx + 1,
                entry.author
            ))
        })?;
        let magazine = *magazines.get(entry.magazine.as_str()).ok_or_else(|| {
            BylinesError::Seed(format!(
                "article #{} names unknown magazine '{}'",
                idx + 1,
                entry.magazine
            ))
        })?;
        catalog
            .create_article(author, magazine, entry.title.as_str())
            .inspect_err(|_| reject("article", idx))?;
    }

    Ok(catalog)
}

fn reject(kind: &str, idx: usize) {
    warn!(
        "event=seed_rejected module=load_catalog entry={}#{} reason=validation",
        kind,
        idx + 1
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::infrastructure::{ArticleSeed, AuthorSeed, MagazineSeed};

    fn article(author: &str, magazine: &str, title: &str) -> ArticleSeed {
        ArticleSeed {
            author: author.to_string(),
            magazine: magazine.to_string(),
            title: title.to_string(),
        }
    }

    fn seed() -> SeedDocument {
        SeedDocument {
            authors: vec![
                AuthorSeed { name: "Jane".into() },
                AuthorSeed { name: "John".into() },
            ],
            magazines: vec![MagazineSeed {
                name: "Vogue".into(),
                category: "Fashion".into(),
            }],
            articles: vec![
                article("Jane", "Vogue", "My Fashion Story"),
                article("John", "Vogue", "Street Style Notes"),
            ],
        }
    }

    struct StaticSource(SeedDocument);

    impl SeedSource for StaticSource {
        fn origin(&self) -> String {
            "static".to_string()
        }

        fn load(&self) -> Result<SeedDocument> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_build_catalog_links_articles() {
        let catalog = build_catalog(&seed()).unwrap();
        assert_eq!(catalog.articles().len(), 2);

        let vogue = catalog.find_magazine("Vogue").unwrap();
        assert_eq!(
            vogue.article_titles(),
            Some(vec!["My Fashion Story", "Street Style Notes"])
        );
        let jane = catalog.find_author("Jane").unwrap();
        assert_eq!(jane.articles()[0].title(), "My Fashion Story");
    }

    #[test]
    fn test_service_uses_source() {
        let catalog = LoadCatalogService::new(StaticSource(seed()))
            .execute()
            .unwrap();
        assert_eq!(catalog.authors().count(), 2);
    }

    #[test]
    fn test_duplicate_author_rejected() {
        let mut doc = seed();
        doc.authors.push(AuthorSeed { name: "Jane".into() });
        match build_catalog(&doc).unwrap_err() {
            BylinesError::Seed(msg) => assert_eq!(msg, "author #3 duplicates name 'Jane'"),
            other => panic!("Expected Seed error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_magazine_rejected() {
        let mut doc = seed();
        doc.articles.push(article("Jane", "Elle", "Another story"));
        match build_catalog(&doc).unwrap_err() {
            BylinesError::Seed(msg) => {
                assert_eq!(msg, "article #3 names unknown magazine 'Elle'")
            }
            other => panic!("Expected Seed error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_title_is_validation_error() {
        let mut doc = seed();
        doc.articles.push(article("Jane", "Vogue", "Hi"));
        let err = build_catalog(&doc).unwrap_err();
        assert!(matches!(
            err,
            BylinesError::Validation(ValidationError::TitleLength { length: 2 })
        ));
    }
}
