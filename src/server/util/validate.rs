//! Field validation shared by the services.
//!
//! Lengths are counted in characters, matching the column limits of the schema.

use crate::server::{error::validation::ValidationError, model::person::PersonFields};

pub const PERSON_FIELD_MAX: usize = 64;

/// Checks that `value` is non-empty and at most `max` characters long.
pub fn required(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    max_len(value, field, max)
}

/// Checks only the upper length limit.
pub fn max_len(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Required email address that must contain `@`.
pub fn email(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    required(value, field, max)?;

    if !value.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates the fields shared by contact persons and customer advisers.
pub fn person(fields: &PersonFields) -> Result<(), ValidationError> {
    required(&fields.first_name, "Vorname", PERSON_FIELD_MAX)?;
    required(&fields.last_name, "Nachname", PERSON_FIELD_MAX)?;
    email(&fields.email_address, "E-Mail-Adresse", PERSON_FIELD_MAX)?;
    required(&fields.phone_number, "Telefonnummer", PERSON_FIELD_MAX)?;

    Ok(())
}

/// Cuts `value` down to at most `max` characters.
pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_fields() -> PersonFields {
        PersonFields {
            first_name: "Erika".to_string(),
            last_name: "Mustermann".to_string(),
            email_address: "erika@example.com".to_string(),
            phone_number: "0621 4711".to_string(),
        }
    }

    #[test]
    fn rejects_empty_and_overlong_values() {
        assert_eq!(
            required("", "Kundennummer", 32),
            Err(ValidationError::Required("Kundennummer"))
        );
        assert_eq!(
            required(&"9".repeat(33), "Kundennummer", 32),
            Err(ValidationError::TooLong {
                field: "Kundennummer",
                max: 32
            })
        );
        assert!(required(&"9".repeat(32), "Kundennummer", 32).is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(max_len("Müller-Lüdenscheidt", "Name", 19).is_ok());
    }

    #[test]
    fn email_needs_at_sign() {
        assert_eq!(
            email("info.example.com", "E-Mail-Adresse", 64),
            Err(ValidationError::InvalidEmail)
        );
        assert!(email("info@example.com", "E-Mail-Adresse", 64).is_ok());
    }

    #[test]
    fn validates_person_fields() {
        assert!(person(&person_fields()).is_ok());

        let mut fields = person_fields();
        fields.last_name = String::new();
        assert_eq!(person(&fields), Err(ValidationError::Required("Nachname")));

        let mut fields = person_fields();
        fields.phone_number = "1".repeat(65);
        assert_eq!(
            person(&fields),
            Err(ValidationError::TooLong {
                field: "Telefonnummer",
                max: 64
            })
        );
    }

    #[test]
    fn truncates_to_character_limit() {
        assert_eq!(truncate("äöü", 2), "äö");
        assert_eq!(truncate("kurz", 2047), "kurz");
    }
}
