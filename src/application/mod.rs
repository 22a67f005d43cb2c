//! Application layer - Use cases and orchestration

pub mod load_catalog;
pub mod reports;

pub use load_catalog::{build_catalog, LoadCatalogService};
pub use reports::{
    ArticleLine, AuthorLine, AuthorReport, CatalogSummary, MagazineLine, MagazineReport,
    ReportService,
};
