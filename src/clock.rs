//! Injectable current-time source
//!
//! Reconciliation and the overdue sweep depend on "today". A swappable
//! clock keeps them deterministic under test. Calendar dates are taken in
//! UTC so overdue boundaries do not shift with the host timezone.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Clone)]
pub struct Clock {
    source: Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl Clock {
    /// The real system clock.
    pub fn system() -> Self {
        Self {
            source: Arc::new(Utc::now),
        }
    }

    /// A clock frozen at the given instant, for tests.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            source: Arc::new(move || at),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.source)()
    }

    /// Current UTC calendar date.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock").field("now", &self.now()).finish()
    }
}
