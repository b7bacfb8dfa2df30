use uuid::Uuid;

use crate::errors::AppError;

/// Parses an id taken from a request path.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::InvalidInput(format!("'{id}' is not a valid id")))
}
