//! Article entity

use crate::domain::ids::{ArticleId, AuthorId, MagazineId};
use crate::domain::text::Title;
use std::fmt;

/// Join entity linking one author to one magazine under a title.
///
/// All three fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: Title,
}

impl Article {
    pub(crate) fn new(id: ArticleId, author: AuthorId, magazine: MagazineId, title: Title) -> Self {
        Article {
            id,
            author,
            magazine,
            title,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article(title='{}')", self.title)
    }
}
