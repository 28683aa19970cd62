//! Identifier and clock sources for document identity attributes.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

/// Supplies the `dateiID` of each new document.
pub trait IdSource {
    fn next_id(&self) -> String;
}

/// Supplies the `erstellungszeitpunkt` of each new document.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Random version 4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same identifier.
#[derive(Debug, Clone)]
pub struct FixedIdSource(pub String);

impl FixedIdSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl IdSource for FixedIdSource {
    fn next_id(&self) -> String {
        self.0.clone()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique_and_hyphenated() {
        let a = UuidIdSource.next_id();
        let b = UuidIdSource.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a.matches('-').count(), 4);
    }
}
