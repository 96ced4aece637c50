//! Category slugs and category metadata.
//!
//! The remote catalog separates words in category slugs with hyphens
//! (`home-decoration`), while the exposed schema uses underscores
//! (`home_decoration`) so that slugs are valid GraphQL enum-like identifiers.
//! [`CategorySlug`] stores the remote form and converts on demand, so the
//! translation happens in exactly one place.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Separator used by the remote catalog.
const REMOTE_SEPARATOR: char = '-';

/// Separator used by the exposed schema.
const EXPOSED_SEPARATOR: char = '_';

/// Errors that can occur when parsing a [`CategorySlug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategorySlugError {
    /// The input string is empty.
    #[error("category slug cannot be empty")]
    Empty,
    /// The input contains a character that is not allowed in a slug.
    #[error("category slug contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A category slug, stored in the remote (hyphenated) form.
///
/// ## Examples
///
/// ```
/// use the_store_core::CategorySlug;
///
/// let slug = CategorySlug::from_exposed("home_decoration").unwrap();
/// assert_eq!(slug.as_remote(), "home-decoration");
/// assert_eq!(slug.to_exposed(), "home_decoration");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySlug(String);

impl CategorySlug {
    /// Parse a slug in the exposed (underscore) form.
    ///
    /// Hyphenated input is accepted as well, so a slug copied from the remote
    /// API still resolves to the same category.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains characters other
    /// than ASCII alphanumerics, `_`, and `-`.
    pub fn from_exposed(s: &str) -> Result<Self, CategorySlugError> {
        validate(s)?;
        Ok(Self(s.replace(EXPOSED_SEPARATOR, &REMOTE_SEPARATOR.to_string())))
    }

    /// Parse a slug in the remote (hyphen) form.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::from_exposed`].
    pub fn from_remote(s: &str) -> Result<Self, CategorySlugError> {
        validate(s)?;
        Ok(Self(s.to_owned()))
    }

    /// The slug as the remote catalog spells it.
    #[must_use]
    pub fn as_remote(&self) -> &str {
        &self.0
    }

    /// The slug as the exposed schema spells it.
    #[must_use]
    pub fn to_exposed(&self) -> String {
        self.0.replace(REMOTE_SEPARATOR, &EXPOSED_SEPARATOR.to_string())
    }
}

fn validate(s: &str) -> Result<(), CategorySlugError> {
    if s.is_empty() {
        return Err(CategorySlugError::Empty);
    }
    if let Some(c) = s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == REMOTE_SEPARATOR || *c == EXPOSED_SEPARATOR))
    {
        return Err(CategorySlugError::InvalidCharacter(c));
    }
    Ok(())
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_exposed())
    }
}

/// A product category with its representative image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique slug.
    pub slug: CategorySlug,
    /// Display name (e.g., "Home Decoration").
    pub name: String,
    /// Representative image URL, empty when the slug has no known image.
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exposed_to_remote() {
        let slug = CategorySlug::from_exposed("home_decoration").unwrap();
        assert_eq!(slug.as_remote(), "home-decoration");
    }

    #[test]
    fn test_round_trip_is_lossless() {
        for exposed in ["home_decoration", "mens_shirts", "kitchen_accessories", "laptops"] {
            let slug = CategorySlug::from_exposed(exposed).unwrap();
            assert_eq!(slug.to_exposed(), exposed);

            let back = CategorySlug::from_remote(slug.as_remote()).unwrap();
            assert_eq!(back, slug);
        }
    }

    #[test]
    fn test_remote_form_normalizes_to_underscores() {
        let slug = CategorySlug::from_remote("womens-jewellery").unwrap();
        assert_eq!(slug.to_exposed(), "womens_jewellery");
        assert_eq!(slug.to_string(), "womens_jewellery");
    }

    #[test]
    fn test_hyphenated_input_accepted_as_exposed() {
        let a = CategorySlug::from_exposed("skin-care").unwrap();
        let b = CategorySlug::from_exposed("skin_care").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(CategorySlug::from_exposed(""), Err(CategorySlugError::Empty));
    }

    #[test]
    fn test_invalid_character_rejected() {
        assert_eq!(
            CategorySlug::from_exposed("../admin"),
            Err(CategorySlugError::InvalidCharacter('.'))
        );
        assert!(CategorySlug::from_remote("a b").is_err());
    }
}
