//! Magazine entity

use crate::domain::ids::{ArticleId, MagazineId};
use crate::domain::text::{Category, MagazineName};
use std::fmt;

/// A publication grouping articles under a topic category.
///
/// Name and category may be replaced after construction, but only with
/// values that passed validation. Articles hold the magazine's id, so a
/// rename is visible through every article that references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
    articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(id: MagazineId, name: MagazineName, category: Category) -> Self {
        Magazine {
            id,
            name,
            category,
            articles: Vec::new(),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ids of this magazine's articles in insertion order
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn set_name(&mut self, name: MagazineName) {
        self.name = name;
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub(crate) fn link(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}

impl fmt::Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Magazine(name='{}', category='{}')",
            self.name, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vogue() -> Magazine {
        Magazine::new(
            MagazineId::new(0),
            MagazineName::parse("Vogue").unwrap(),
            Category::parse("Fashion").unwrap(),
        )
    }

    #[test]
    fn test_setters_replace_values() {
        let mut magazine = vogue();
        magazine.set_name(MagazineName::parse("Vogue Paris").unwrap());
        magazine.set_category(Category::parse("Style").unwrap());
        assert_eq!(magazine.name(), "Vogue Paris");
        assert_eq!(magazine.category(), "Style");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            vogue().to_string(),
            "Magazine(name='Vogue', category='Fashion')"
        );
    }
}
