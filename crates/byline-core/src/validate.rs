//! Field validators for the blogging domain.
//!
//! Every validator here is a pure function over the candidate value. The one
//! storage-dependent rule (author name uniqueness) lives in the record
//! managers, where the repository handle is visible; the unique index on
//! `authors.name` remains the authoritative enforcement either way.

use crate::error::ValidationError;

/// Accepted post categories.
pub const CATEGORIES: [&str; 2] = ["Fiction", "Non-Fiction"];

/// Phrases a title must carry at least one of. Editorial policy, matched as
/// case-sensitive substrings.
pub const CLICKBAIT_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Minimum content length, counted in characters.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Maximum summary length, counted in characters.
pub const SUMMARY_MAX_CHARS: usize = 250;

const PHONE_NUMBER_DIGITS: usize = 10;

pub fn author_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "Name cannot be empty"));
    }
    Ok(())
}

/// The error for a name already taken by another author. Shared by the
/// record manager's pre-check and the mapping of storage-level unique
/// violations, so both paths surface identically to callers.
pub fn duplicate_author_name() -> ValidationError {
    ValidationError::new("name", "Author name must be unique")
}

pub fn author_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let valid = phone_number.len() == PHONE_NUMBER_DIGITS
        && phone_number.chars().all(|c| c.is_ascii_digit());
    if !valid {
        return Err(ValidationError::new(
            "phone_number",
            format!("Phone number must be exactly {PHONE_NUMBER_DIGITS} digits"),
        ));
    }
    Ok(())
}

pub fn post_title(title: &str) -> Result<(), ValidationError> {
    if !CLICKBAIT_PHRASES.iter().any(|phrase| title.contains(phrase)) {
        return Err(ValidationError::new(
            "title",
            "Title must contain clickbait phrases",
        ));
    }
    Ok(())
}

pub fn post_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() < CONTENT_MIN_CHARS {
        return Err(ValidationError::new(
            "content",
            format!("Content must be at least {CONTENT_MIN_CHARS} characters long"),
        ));
    }
    Ok(())
}

pub fn post_summary(summary: &str) -> Result<(), ValidationError> {
    if summary.chars().count() > SUMMARY_MAX_CHARS {
        return Err(ValidationError::new(
            "summary",
            format!("Summary must be at most {SUMMARY_MAX_CHARS} characters long"),
        ));
    }
    Ok(())
}

pub fn post_category(category: &str) -> Result<(), ValidationError> {
    if !CATEGORIES.contains(&category) {
        return Err(ValidationError::new(
            "category",
            format!("Category must be one of {}", CATEGORIES.join(", ")),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty_and_whitespace() {
        assert!(author_name("").is_err());
        assert!(author_name("   ").is_err());
        assert!(author_name("\t\n").is_err());
        assert!(author_name("Jane Doe").is_ok());
    }

    #[test]
    fn phone_number_accepts_exactly_ten_digits() {
        assert!(author_phone_number("5551234567").is_ok());
        assert!(author_phone_number("0000000000").is_ok());
    }

    #[test]
    fn phone_number_rejects_wrong_length_or_non_digits() {
        let err = author_phone_number("555-1234567").unwrap_err();
        assert_eq!(err.message, "Phone number must be exactly 10 digits");
        assert_eq!(err.field, "phone_number");

        assert!(author_phone_number("").is_err());
        assert!(author_phone_number("555123456").is_err());
        assert!(author_phone_number("55512345678").is_err());
        assert!(author_phone_number("555123456a").is_err());
        // Unicode digits are not decimal ASCII digits.
        assert!(author_phone_number("٥٥٥١٢٣٤٥٦٧").is_err());
    }

    #[test]
    fn title_requires_a_clickbait_phrase() {
        assert!(post_title("Top 10 Secrets").is_ok());
        assert!(post_title("You Won't Believe This").is_ok());
        assert!(post_title("The Secret Garden").is_ok());
        assert!(post_title("Guess Who's Back").is_ok());

        let err = post_title("A Great Day").unwrap_err();
        assert_eq!(err.message, "Title must contain clickbait phrases");
        // Substring match is case-sensitive: "laptop" does not contain "Top".
        assert!(post_title("my laptop review").is_err());
    }

    #[test]
    fn content_requires_250_characters() {
        assert!(post_content(&"x".repeat(249)).is_err());
        assert!(post_content(&"x".repeat(250)).is_ok());
        // Characters, not bytes.
        assert!(post_content(&"é".repeat(250)).is_ok());
    }

    #[test]
    fn summary_caps_at_250_characters() {
        assert!(post_summary("").is_ok());
        assert!(post_summary(&"x".repeat(250)).is_ok());
        assert!(post_summary(&"x".repeat(251)).is_err());
    }

    #[test]
    fn category_must_be_in_the_fixed_set() {
        assert!(post_category("Fiction").is_ok());
        assert!(post_category("Non-Fiction").is_ok());

        let err = post_category("Sci-Fi").unwrap_err();
        assert_eq!(err.message, "Category must be one of Fiction, Non-Fiction");
        // Exact match only.
        assert!(post_category("fiction").is_err());
        assert!(post_category("").is_err());
    }
}
