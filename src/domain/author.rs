//! Author entity

use crate::domain::ids::{ArticleId, AuthorId};
use crate::domain::text::AuthorName;
use std::fmt;

/// A writer of articles.
///
/// The name is fixed at construction. The article list only ever grows, and
/// only through [`Catalog::create_article`](crate::domain::Catalog::create_article).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: AuthorName) -> Self {
        Author {
            id,
            name,
            articles: Vec::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of this author's articles in insertion order
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn link(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(name='{}')", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_author_has_no_articles() {
        let author = Author::new(AuthorId::new(0), AuthorName::parse("Jane").unwrap());
        assert_eq!(author.name(), "Jane");
        assert!(author.article_ids().is_empty());
    }

    #[test]
    fn test_display() {
        let author = Author::new(AuthorId::new(0), AuthorName::parse("Jane").unwrap());
        assert_eq!(author.to_string(), "Author(name='Jane')");
    }
}
