use thiserror::Error;

/// Errors surfaced by the user operations. The `Display` text is what the
/// client sees in `{"error": ...}`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email provided")]
    InvalidEmail,
    #[error("Error while unmarshalling the data")]
    InvalidBody,
    #[error("User does not exist")]
    NotFound,
    #[error("User already exists")]
    AlreadyExists,
    #[error("failed to fetch records")]
    Fetch,
    #[error("Failed to unmarshal record")]
    Unmarshal,
    #[error("Error while inserting the data")]
    Insert,
    #[error("Error while deleting the data")]
    Delete,
}
