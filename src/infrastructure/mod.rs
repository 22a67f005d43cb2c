//! Infrastructure layer - Seed file I/O and logging

pub mod logging;
pub mod seed;

pub use logging::init_logging;
pub use seed::{ArticleSeed, AuthorSeed, FileSeedSource, MagazineSeed, SeedDocument, SeedSource};
