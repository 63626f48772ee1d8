/// All records are keyed by an opaque string id (uuid v4, assigned at
/// creation, immutable thereafter).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record id.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC time, used for `created_at` assignment.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_unique() {
        assert_ne!(new_record_id(), new_record_id());
    }

    #[test]
    fn record_id_is_uuid_shaped() {
        let id = new_record_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }
}
