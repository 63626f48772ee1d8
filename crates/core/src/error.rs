use crate::types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Maximum {cap} {entity} allowed")]
    CapacityExceeded { entity: &'static str, cap: i64 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the not-found case, which every delete/update path hits.
    pub fn not_found(entity: &'static str, id: impl Into<RecordId>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::not_found("Testimonial", "abc-123");
        assert_eq!(err.to_string(), "Testimonial with id abc-123 not found");
    }

    #[test]
    fn capacity_display_matches_api_message() {
        let err = CoreError::CapacityExceeded {
            entity: "short videos",
            cap: 10,
        };
        assert_eq!(err.to_string(), "Maximum 10 short videos allowed");
    }
}
