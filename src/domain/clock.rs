use chrono::{DateTime, Utc};

/// Source of "now" for id assignment, creation stamps and age display.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
