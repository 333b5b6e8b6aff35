// ── Common helpers shared across the domain model ──

use uuid::Uuid;

/// Generate a collection-unique entity id with a type prefix,
/// e.g. `"book-6f9619ff90e14aed..."`. The web client used
/// millisecond timestamps here, which collide under test; a v4 UUID
/// keeps the same prefixed-string shape without the collisions.
pub(crate) fn entity_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_are_prefixed_and_unique() {
        let a = entity_id("inq");
        let b = entity_id("inq");
        assert!(a.starts_with("inq-"));
        assert_ne!(a, b);
    }
}
