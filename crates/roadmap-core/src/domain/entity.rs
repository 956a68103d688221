//! Domain Layer - Core Entity Trait
//!
//! Every roadmap entity is addressed by a stable string identifier.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    InvalidInput(String),
    Conflict(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::InvalidInput(err.to_string())
    }
}

/// Fails with `Conflict` on the first identifier seen twice.
pub fn ensure_unique_ids<'a, T, I>(kind: &str, entities: I) -> DomainResult<()>
where
    T: Entity + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = std::collections::HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(DomainError::Conflict(format!(
                "duplicate {} id '{}'",
                kind,
                entity.id()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Entity for Named {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_unique_ids_pass() {
        let entities = [Named("a"), Named("b")];
        assert!(ensure_unique_ids("thing", entities.iter()).is_ok());
    }

    #[test]
    fn test_duplicate_id_is_conflict() {
        let entities = [Named("a"), Named("b"), Named("a")];
        let err = ensure_unique_ids("thing", entities.iter()).unwrap_err();
        assert_eq!(err, DomainError::Conflict("duplicate thing id 'a'".to_string()));
        assert_eq!(err.to_string(), "Conflict: duplicate thing id 'a'");
    }

    #[test]
    fn test_json_error_maps_to_invalid_input() {
        let err: DomainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
