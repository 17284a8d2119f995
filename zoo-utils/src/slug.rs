//! URL slug generation for category pages.

/// Build a URL-safe slug from a display name.
///
/// Lowercases ASCII letters, keeps digits, and collapses any run of other
/// characters into a single hyphen. Leading and trailing hyphens are dropped.
///
/// # Example
/// ```
/// use zoo_utils::slug::slugify;
///
/// assert_eq!(slugify("Big Cats & Friends"), "big-cats-friends");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Mammals"), "mammals");
        assert_eq!(slugify("Birds of Prey"), "birds-of-prey");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Big Cats & Friends"), "big-cats-friends");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_empty_and_symbols_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
