//! Catalog aggregate root
//!
//! The catalog owns every author, magazine and article and is the only place
//! relationships are created. It replaces any notion of a global registry:
//! callers create one at startup and drop it when done.
//!
//! # Invariants
//! - Every article id appears in exactly one author's list and exactly one
//!   magazine's list, and those are the ones the article references.
//! - Registries are append-only; nothing is ever removed.
//! - Validation and id checks run before any side effect, so a failed
//!   construction leaves the catalog untouched.

use crate::domain::article::Article;
use crate::domain::author::Author;
use crate::domain::ids::{ArticleId, AuthorId, MagazineId};
use crate::domain::magazine::Magazine;
use crate::domain::text::{AuthorName, Category, MagazineName, Title};
use crate::domain::views::{AuthorView, MagazineView};
use crate::error::{BylinesError, Result};
use log::debug;

/// In-memory store of authors, magazines and articles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Create an author. Fails when `name` is empty.
    pub fn create_author(&mut self, name: impl Into<String>) -> Result<AuthorId> {
        let name = AuthorName::parse(name)?;
        let id = AuthorId::new(self.authors.len());
        self.authors.push(Author::new(id, name));
        debug!("event=author_created module=catalog author={}", id);
        Ok(id)
    }

    /// Create a magazine and add it to the magazine registry.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId> {
        let name = MagazineName::parse(name)?;
        let category = Category::parse(category)?;
        let id = MagazineId::new(self.magazines.len());
        self.magazines.push(Magazine::new(id, name, category));
        debug!("event=magazine_created module=catalog magazine={}", id);
        Ok(id)
    }

    /// Create an article and link it into its author, its magazine and the
    /// article registry.
    ///
    /// # Errors
    /// - A validation error when the title is outside 5..=50 characters.
    /// - `UnknownAuthor`/`UnknownMagazine` when an id does not resolve here.
    ///
    /// Ids are scoped to the catalog that issued them. An id taken from a
    /// different catalog is only caught when its index is out of range here;
    /// otherwise it refers to whatever entity sits at that index.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        let title = Title::parse(title)?;
        self.require_author(author)?;
        self.require_magazine(magazine)?;

        let id = ArticleId::new(self.articles.len());
        self.articles.push(Article::new(id, author, magazine, title));
        self.authors[author.index()].link(id);
        self.magazines[magazine.index()].link(id);

        debug!(
            "event=article_created module=catalog article={} author={} magazine={}",
            id, author, magazine
        );
        Ok(id)
    }

    /// Replace a magazine's name after validating it.
    pub fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> Result<()> {
        let name = MagazineName::parse(name)?;
        self.require_magazine(id)?;
        self.magazines[id.index()].set_name(name);
        debug!("event=magazine_renamed module=catalog magazine={}", id);
        Ok(())
    }

    /// Replace a magazine's category after validating it.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> Result<()> {
        let category = Category::parse(category)?;
        self.require_magazine(id)?;
        self.magazines[id.index()].set_category(category);
        debug!("event=magazine_recategorized module=catalog magazine={}", id);
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Result<AuthorView<'_>> {
        let author = self.require_author(id)?;
        Ok(AuthorView::new(self, author))
    }

    /// Mutable handle used for the author-side convenience constructor.
    pub fn author_mut(&mut self, id: AuthorId) -> Result<AuthorEntry<'_>> {
        self.require_author(id)?;
        Ok(AuthorEntry { catalog: self, id })
    }

    pub fn magazine(&self, id: MagazineId) -> Result<MagazineView<'_>> {
        let magazine = self.require_magazine(id)?;
        Ok(MagazineView::new(self, magazine))
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id.index())
    }

    /// Every author in creation order
    pub fn authors(&self) -> impl Iterator<Item = AuthorView<'_>> {
        self.authors
            .iter()
            .map(move |author| AuthorView::new(self, author))
    }

    /// The magazine registry, in creation order
    pub fn magazines(&self) -> impl Iterator<Item = MagazineView<'_>> {
        self.magazines
            .iter()
            .map(move |magazine| MagazineView::new(self, magazine))
    }

    /// The article registry, in creation order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// First author whose name is exactly `name`
    pub fn find_author(&self, name: &str) -> Option<AuthorView<'_>> {
        self.authors().find(|author| author.name() == name)
    }

    /// First magazine whose current name is exactly `name`
    pub fn find_magazine(&self, name: &str) -> Option<MagazineView<'_>> {
        self.magazines().find(|magazine| magazine.name() == name)
    }

    /// Magazine with the most articles across the whole registry.
    ///
    /// `None` when no magazine exists. Ties go to the magazine created first.
    pub fn top_publisher(&self) -> Option<MagazineView<'_>> {
        let mut top: Option<&Magazine> = None;
        for magazine in &self.magazines {
            let count = magazine.article_ids().len();
            if top.map_or(true, |best| count > best.article_ids().len()) {
                top = Some(magazine);
            }
        }
        top.map(|magazine| MagazineView::new(self, magazine))
    }

    fn require_author(&self, id: AuthorId) -> Result<&Author> {
        self.authors
            .get(id.index())
            .ok_or(BylinesError::UnknownAuthor(id))
    }

    fn require_magazine(&self, id: MagazineId) -> Result<&Magazine> {
        self.magazines
            .get(id.index())
            .ok_or(BylinesError::UnknownMagazine(id))
    }
}

/// Mutable access to one author inside a catalog
#[derive(Debug)]
pub struct AuthorEntry<'a> {
    catalog: &'a mut Catalog,
    id: AuthorId,
}

impl AuthorEntry<'_> {
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Publish a new article by this author in `magazine`.
    ///
    /// Same as [`Catalog::create_article`] with this author filled in.
    pub fn add_article(
        &mut self,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        self.catalog.create_article(self.id, magazine, title)
    }
}
