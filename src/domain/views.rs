//! Read-side queries over authors and magazines
//!
//! A view pairs an entity with the catalog it lives in so that queries can
//! follow article ids back to authors and magazines. Views never mutate.

use crate::domain::article::Article;
use crate::domain::author::Author;
use crate::domain::catalog::Catalog;
use crate::domain::ids::{ArticleId, AuthorId};
use crate::domain::magazine::Magazine;
use std::collections::BTreeSet;
use std::ops::Deref;

/// An author must exceed this many articles in a scope to count as a
/// contributing author there.
pub const CONTRIBUTOR_THRESHOLD: usize = 2;

/// Borrowed author plus the catalog needed to answer queries about it
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, author: &'a Author) -> Self {
        AuthorView { catalog, author }
    }

    pub fn entity(&self) -> &'a Author {
        self.author
    }

    /// This author's articles in insertion order
    pub fn articles(&self) -> Vec<&'a Article> {
        resolve_articles(self.catalog, self.author.article_ids())
    }

    /// Distinct magazines this author has published in, first appearance first
    pub fn magazines(&self) -> Vec<&'a Magazine> {
        let mut magazines: Vec<&'a Magazine> = Vec::new();
        for article in self.articles() {
            if magazines.iter().any(|m| m.id() == article.magazine()) {
                continue;
            }
            if let Ok(magazine) = self.catalog.magazine(article.magazine()) {
                magazines.push(magazine.entity());
            }
        }
        magazines
    }

    /// Distinct categories of the magazines this author wrote for.
    ///
    /// `None` when the author has no articles at all.
    pub fn topic_areas(&self) -> Option<BTreeSet<&'a str>> {
        if self.author.article_ids().is_empty() {
            return None;
        }
        Some(
            self.magazines()
                .into_iter()
                .map(|magazine| magazine.category())
                .collect(),
        )
    }

    /// Authors credited on more than two of this author's own articles.
    ///
    /// Every article in the list is credited to this author, so the result is
    /// either empty or this author alone. Mirrors
    /// [`MagazineView::contributing_authors`] without its article-count gate.
    pub fn contributing_authors(&self) -> Vec<&'a Author> {
        authors_above_threshold(self.catalog, &self.articles())
    }
}

impl Deref for AuthorView<'_> {
    type Target = Author;

    fn deref(&self) -> &Author {
        self.author
    }
}

/// Borrowed magazine plus the catalog needed to answer queries about it
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, magazine: &'a Magazine) -> Self {
        MagazineView { catalog, magazine }
    }

    pub fn entity(&self) -> &'a Magazine {
        self.magazine
    }

    /// This magazine's articles in insertion order
    pub fn articles(&self) -> Vec<&'a Article> {
        resolve_articles(self.catalog, self.magazine.article_ids())
    }

    /// Distinct authors who published here, first appearance first
    pub fn contributors(&self) -> Vec<&'a Author> {
        let mut authors: Vec<&'a Author> = Vec::new();
        for article in self.articles() {
            if authors.iter().any(|a| a.id() == article.author()) {
                continue;
            }
            if let Ok(author) = self.catalog.author(article.author()) {
                authors.push(author.entity());
            }
        }
        authors
    }

    /// Titles in publication order, `None` when nothing was published
    pub fn article_titles(&self) -> Option<Vec<&'a str>> {
        let articles = self.articles();
        if articles.is_empty() {
            return None;
        }
        Some(articles.into_iter().map(|article| article.title()).collect())
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// Only computed once the magazine holds more than two articles in
    /// total; below that the answer is `None`, even if every article shares
    /// one author.
    pub fn contributing_authors(&self) -> Option<Vec<&'a Author>> {
        let articles = self.articles();
        if articles.len() <= CONTRIBUTOR_THRESHOLD {
            return None;
        }
        Some(authors_above_threshold(self.catalog, &articles))
    }
}

impl Deref for MagazineView<'_> {
    type Target = Magazine;

    fn deref(&self) -> &Magazine {
        self.magazine
    }
}

fn resolve_articles<'a>(catalog: &'a Catalog, ids: &[ArticleId]) -> Vec<&'a Article> {
    ids.iter().filter_map(|id| catalog.article(*id)).collect()
}

/// Authors credited on more than [`CONTRIBUTOR_THRESHOLD`] of `articles`,
/// in order of first appearance.
fn authors_above_threshold<'a>(
    catalog: &'a Catalog,
    articles: &[&'a Article],
) -> Vec<&'a Author> {
    let mut counts: Vec<(AuthorId, usize)> = Vec::new();
    for article in articles {
        match counts.iter_mut().find(|(id, _)| *id == article.author()) {
            Some((_, count)) => *count += 1,
            None => counts.push((article.author(), 1)),
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > CONTRIBUTOR_THRESHOLD)
        .filter_map(|(id, _)| catalog.author(id).ok().map(|view| view.entity()))
        .collect()
}
