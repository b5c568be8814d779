use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or hash parsing failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to process password hash: {0}")]
    PasswordHash(String),

    /// A row written moments ago could not be read back.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite { entity: &'static str, id: i32 },

    /// A license row has both or neither owner column set.
    #[error("License {0} has no unique owner")]
    InvalidLicenseOwner(i32),
}
