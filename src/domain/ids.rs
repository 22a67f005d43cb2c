//! Typed handles into a [`Catalog`](crate::domain::Catalog)

use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                $name(index)
            }

            /// Position of the entity in its catalog registry.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

catalog_id!(
    /// Identifies an author within the catalog that created it
    AuthorId,
    "author"
);
catalog_id!(
    /// Identifies a magazine within the catalog that created it
    MagazineId,
    "magazine"
);
catalog_id!(
    /// Identifies an article within the catalog that created it
    ArticleId,
    "article"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_index() {
        assert_eq!(AuthorId::new(0).to_string(), "author#0");
        assert_eq!(MagazineId::new(3).to_string(), "magazine#3");
        assert_eq!(ArticleId::new(12).to_string(), "article#12");
    }

    #[test]
    fn test_ids_order_by_index() {
        assert!(ArticleId::new(1) < ArticleId::new(2));
        assert_eq!(MagazineId::new(4).index(), 4);
    }
}
