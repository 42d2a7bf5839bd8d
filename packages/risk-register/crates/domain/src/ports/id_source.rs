use crate::entities::risk::RiskId;

/// Supplies identifiers for newly created risks.
pub trait IdSource {
    fn next_id(&mut self) -> RiskId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> RiskId {
        RiskId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Predictable ids (`<prefix>-1`, `<prefix>-2`, ...).
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> RiskId {
        let id = RiskId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut source = UuidIdSource;
        assert_ne!(source.next_id(), source.next_id());
    }

    #[test]
    fn test_sequential_ids() {
        let mut source = SequentialIdSource::new("risk");
        assert_eq!(source.next_id().as_str(), "risk-1");
        assert_eq!(source.next_id().as_str(), "risk-2");
    }
}
