//! Validated text values
//!
//! Every piece of free text in the model goes through one of these newtypes.
//! Their only constructors run the validation rule, so an author name, a
//! magazine name, a category or a title that exists is always valid.
//!
//! Lengths count Unicode scalar values, not bytes.

use crate::error::ValidationError;
use std::fmt;
use std::ops::{Deref, RangeInclusive};
use std::str::FromStr;

/// Allowed article title length
pub const TITLE_LENGTH: RangeInclusive<usize> = 5..=50;

/// Allowed magazine name length
pub const MAGAZINE_NAME_LENGTH: RangeInclusive<usize> = 2..=16;

macro_rules! validated_text {
    ($(#[$meta:meta])* $name:ident, $check:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validate `value` and wrap it.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                $check(&value)?;
                Ok($name(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_text!(
    /// Author name: any non-empty text
    AuthorName,
    check_author_name
);
validated_text!(
    /// Magazine name: 2 to 16 characters inclusive
    MagazineName,
    check_magazine_name
);
validated_text!(
    /// Magazine category: any non-empty text
    Category,
    check_category
);
validated_text!(
    /// Article title: 5 to 50 characters inclusive
    Title,
    check_title
);

fn check_author_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

fn check_magazine_name(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !MAGAZINE_NAME_LENGTH.contains(&length) {
        return Err(ValidationError::MagazineNameLength { length });
    }
    Ok(())
}

fn check_category(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

fn check_title(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !TITLE_LENGTH.contains(&length) {
        return Err(ValidationError::TitleLength { length });
    }
    Ok(())
}
