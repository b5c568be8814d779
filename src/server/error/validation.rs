//! User input validation errors.
//!
//! Every variant renders the German message shown to the user. Duplicate unique
//! values map to 409 Conflict, everything else to 400 Bad Request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bitte {0} angeben.")]
    Required(&'static str),

    #[error("{field} darf maximal {max} Zeichen lang sein.")]
    TooLong { field: &'static str, max: usize },

    /// Unique value already in use, e.g. `Taken("Diese Kundennummer")`.
    #[error("{0} ist bereits vergeben.")]
    Taken(&'static str),

    /// Referenced row does not exist, e.g. `UnknownReference("Kunde")`.
    #[error("{0} nicht gefunden.")]
    UnknownReference(&'static str),

    #[error("Bitte eine gültige E-Mail-Adresse angeben.")]
    InvalidEmail,

    #[error("Das Enddatum muss nach dem Startdatum liegen.")]
    EndBeforeStart,

    #[error("Eine Lizenz gilt entweder für einen Kunden oder für einen Standort.")]
    AmbiguousOwner,

    #[error("{0}")]
    InvalidReplacement(&'static str),

    #[error("Standort ist nicht eindeutig.")]
    AmbiguousLocation,

    #[error("Der Standort gehört nicht zum Kunden der Lizenz.")]
    LocationNotOfCustomer,

    #[error("Der Suchbegriff muss zwischen 3 und 64 Zeichen lang sein.")]
    SearchTermLength,

    #[error("Die Passwörter stimmen nicht überein.")]
    PasswordMismatch,

    #[error("Falsches Passwort.")]
    WrongPassword,

    #[error("Passwörter sind auf maximal 256 Zeichen begrenzt.")]
    PasswordTooLong,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Taken(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_field_messages() {
        assert_eq!(
            ValidationError::Required("Kundennummer").to_string(),
            "Bitte Kundennummer angeben."
        );
        assert_eq!(
            ValidationError::TooLong {
                field: "Benutzername",
                max: 150
            }
            .to_string(),
            "Benutzername darf maximal 150 Zeichen lang sein."
        );
        assert_eq!(
            ValidationError::Taken("Dieser Benutzername").to_string(),
            "Dieser Benutzername ist bereits vergeben."
        );
    }

    #[test]
    fn duplicates_map_to_conflict() {
        let response = ValidationError::Taken("Diese Kundennummer").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ValidationError::EndBeforeStart.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
