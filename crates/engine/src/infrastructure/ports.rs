//! Port traits for infrastructure boundaries.
//!
//! The character catalog port lives in the domain crate because the aggregate
//! consumes it directly. Ports here exist for:
//! - Clock (for testing)

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
