//! Report use cases
//!
//! Turns catalog queries into owned report rows for the CLI. "No data"
//! answers stay `None` all the way to the output layer.

use crate::domain::{AuthorView, Catalog, MagazineView};
use crate::error::{BylinesError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub authors: usize,
    pub magazines: usize,
    pub articles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLine {
    pub name: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagazineLine {
    pub name: String,
    pub category: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLine {
    pub title: String,
    pub magazine: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorReport {
    pub name: String,
    pub articles: Vec<ArticleLine>,
    pub magazines: Vec<String>,
    pub topic_areas: Option<Vec<String>>,
    pub contributing_authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagazineReport {
    pub name: String,
    pub category: String,
    pub article_titles: Option<Vec<String>>,
    pub contributors: Vec<String>,
    pub contributing_authors: Option<Vec<String>>,
}

/// Service answering report questions over a loaded catalog
pub struct ReportService {
    catalog: Catalog,
}

impl ReportService {
    pub fn new(catalog: Catalog) -> Self {
        ReportService { catalog }
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            authors: self.catalog.authors().count(),
            magazines: self.catalog.magazines().count(),
            articles: self.catalog.articles().len(),
        }
    }

    pub fn authors(&self) -> Vec<AuthorLine> {
        self.catalog
            .authors()
            .map(|author| AuthorLine {
                name: author.name().to_string(),
                article_count: author.article_ids().len(),
            })
            .collect()
    }

    pub fn magazines(&self) -> Vec<MagazineLine> {
        self.catalog.magazines().map(|m| magazine_line(&m)).collect()
    }

    pub fn author(&self, name: &str) -> Result<AuthorReport> {
        let author = self
            .catalog
            .find_author(name)
            .ok_or_else(|| BylinesError::AuthorNotFound(name.to_string()))?;
        Ok(self.author_report(&author))
    }

    pub fn magazine(&self, name: &str) -> Result<MagazineReport> {
        let magazine = self
            .catalog
            .find_magazine(name)
            .ok_or_else(|| BylinesError::MagazineNotFound(name.to_string()))?;

        Ok(MagazineReport {
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
            article_titles: magazine
                .article_titles()
                .map(|titles| titles.into_iter().map(str::to_string).collect()),
            contributors: magazine
                .contributors()
                .into_iter()
                .map(|author| author.name().to_string())
                .collect(),
            contributing_authors: magazine.contributing_authors().map(|authors| {
                authors
                    .into_iter()
                    .map(|author| author.name().to_string())
                    .collect()
            }),
        })
    }

    /// `None` when the catalog has no magazines
    pub fn top_publisher(&self) -> Option<MagazineLine> {
        self.catalog.top_publisher().map(|m| magazine_line(&m))
    }

    fn author_report(&self, author: &AuthorView<'_>) -> AuthorReport {
        let articles = author
            .articles()
            .into_iter()
            .map(|article| ArticleLine {
                title: article.title().to_string(),
                magazine: self
                    .catalog
                    .magazine(article.magazine())
                    .map(|m| m.name().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        AuthorReport {
            name: author.name().to_string(),
            articles,
            magazines: author
                .magazines()
                .into_iter()
                .map(|m| m.name().to_string())
                .collect(),
            topic_areas: author
                .topic_areas()
                .map(|topics| topics.into_iter().map(str::to_string).collect()),
            contributing_authors: author
                .contributing_authors()
                .into_iter()
                .map(|a| a.name().to_string())
                .collect(),
        }
    }
}

fn magazine_line(magazine: &MagazineView<'_>) -> MagazineLine {
    MagazineLine {
        name: magazine.name().to_string(),
        category: magazine.category().to_string(),
        article_count: magazine.article_ids().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ReportService {
        let mut catalog = Catalog::new();
        let jane = catalog.create_author("Jane").unwrap();
        let john = catalog.create_author("John").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let wired = catalog.create_magazine("Wired", "Tech").unwrap();
        catalog.create_magazine("Empty", "Nothing").unwrap();

        for title in ["First story", "Second story", "Third story"] {
            catalog.create_article(jane, vogue, title).unwrap();
        }
        catalog.create_article(john, vogue, "Guest column").unwrap();
        catalog.create_article(jane, wired, "Gadget review").unwrap();
        ReportService::new(catalog)
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            service().summary(),
            CatalogSummary {
                authors: 2,
                magazines: 3,
                articles: 5
            }
        );
    }

    #[test]
    fn test_author_report() {
        let report = service().author("Jane").unwrap();
        assert_eq!(report.articles.len(), 4);
        assert_eq!(report.articles[3].magazine, "Wired");
        assert_eq!(report.magazines, vec!["Vogue", "Wired"]);
        assert_eq!(
            report.topic_areas,
            Some(vec!["Fashion".to_string(), "Tech".to_string()])
        );
        assert_eq!(report.contributing_authors, vec!["Jane"]);
    }

    #[test]
    fn test_author_without_articles_has_no_topics() {
        let mut catalog = Catalog::new();
        catalog.create_author("Solo").unwrap();
        let report = ReportService::new(catalog).author("Solo").unwrap();
        assert!(report.topic_areas.is_none());
        assert!(report.articles.is_empty());
    }

    #[test]
    fn test_magazine_report() {
        let service = service();
        let vogue = service.magazine("Vogue").unwrap();
        assert_eq!(vogue.contributors, vec!["Jane", "John"]);
        assert_eq!(vogue.contributing_authors, Some(vec!["Jane".to_string()]));
        assert_eq!(vogue.article_titles.unwrap().len(), 4);

        let empty = service.magazine("Empty").unwrap();
        assert!(empty.article_titles.is_none());
        assert!(empty.contributing_authors.is_none());
    }

    #[test]
    fn test_unknown_names() {
        let service = service();
        assert!(matches!(
            service.author("Nobody"),
            Err(BylinesError::AuthorNotFound(_))
        ));
        assert!(matches!(
            service.magazine("Nothing"),
            Err(BylinesError::MagazineNotFound(_))
        ));
    }

    #[test]
    fn test_top_publisher() {
        let top = service().top_publisher().unwrap();
        assert_eq!(top.name, "Vogue");
        assert_eq!(top.article_count, 4);
        assert!(ReportService::new(Catalog::new()).top_publisher().is_none());
    }
}
