//! Domain layer - Entities, validation rules and read-side queries

pub mod article;
pub mod author;
pub mod catalog;
pub mod ids;
pub mod magazine;
pub mod text;
pub mod views;

pub use article::Article;
pub use author::Author;
pub use catalog::{AuthorEntry, Catalog};
pub use ids::{ArticleId, AuthorId, MagazineId};
pub use magazine::Magazine;
pub use text::{AuthorName, Category, MagazineName, Title, MAGAZINE_NAME_LENGTH, TITLE_LENGTH};
pub use views::{AuthorView, MagazineView, CONTRIBUTOR_THRESHOLD};
