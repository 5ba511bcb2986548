//! Field checks for category input.
//!
//! Each check returns the messages for the rules it violates, in rule order,
//! so callers can show all of them at once.

pub const TITLE_MAX_CHARS: usize = 50;

pub const TITLE_REQUIRED: &str = "Enter category";
pub const TITLE_TOO_LONG: &str = "Category title must be less than 50 characters!";

/// Validate a category title: required, at most 50 characters.
pub fn validate_category_title(title: &str) -> Vec<String> {
    let mut errors = vec![];
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push(TITLE_REQUIRED.to_string());
    }
    // Characters, not bytes: the column is VARCHAR(50)
    if trimmed.chars().count() > TITLE_MAX_CHARS {
        errors.push(TITLE_TOO_LONG.to_string());
    }
    errors
}

/// Validate a login field that only has to be present.
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_titles_are_rejected() {
        assert_eq!(validate_category_title(""), vec![TITLE_REQUIRED]);
        assert_eq!(validate_category_title("   "), vec![TITLE_REQUIRED]);
    }

    #[test]
    fn title_length_boundary() {
        assert!(validate_category_title(&"a".repeat(50)).is_empty());
        assert_eq!(validate_category_title(&"a".repeat(51)), vec![TITLE_TOO_LONG]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let title = "é".repeat(50);
        assert_eq!(title.len(), 100);
        assert!(validate_category_title(&title).is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_not_counted() {
        let title = format!("  {}  ", "x".repeat(50));
        assert!(validate_category_title(&title).is_empty());
    }

    #[test]
    fn required_field() {
        assert_eq!(validate_required("", "Username").as_deref(), Some("Username is required"));
        assert!(validate_required("admin", "Username").is_none());
    }
}
