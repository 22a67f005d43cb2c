//! bylines - Authors, magazines and the articles that link them
//!
//! An in-memory catalog that validates every name, category and title,
//! wires each article to exactly one author and one magazine, and answers
//! read-side questions such as topic areas, contributors and the top
//! publisher.
//!
//! ```
//! use bylines::Catalog;
//!
//! let mut catalog = Catalog::new();
//! let jane = catalog.create_author("Jane").unwrap();
//! let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
//! catalog
//!     .author_mut(jane)
//!     .unwrap()
//!     .add_article(vogue, "My Fashion Story")
//!     .unwrap();
//!
//! assert_eq!(catalog.magazine(vogue).unwrap().articles().len(), 1);
//! assert_eq!(catalog.top_publisher().unwrap().id(), vogue);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{
    Article, ArticleId, Author, AuthorId, AuthorView, Catalog, Magazine, MagazineId, MagazineView,
};
pub use error::{BylinesError, Result, ValidationError};
