use uuid::Uuid;

use crate::error::DomainError;

/// Parse a path segment into an entity id.
///
/// Anything that is not a well-formed UUID is a cast failure, which is
/// distinct from a well-formed id that matches nothing.
pub fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::Cast(raw.to_string()))
}
