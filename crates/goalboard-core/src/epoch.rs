//! Request Epochs
//!
//! Monotonic request ids so only the latest response of a query is applied.

use crate::error::ApiError;

/// A response checked against its query's epoch
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    /// A newer request was issued; leave the state alone.
    Stale,
    /// Latest request failed; keep the previous value.
    Failed(ApiError),
    /// Latest request succeeded; replace the value.
    Fresh(T),
}

impl<T> Settled<T> {
    /// Whether loading flags of the query should be cleared
    pub fn is_current(&self) -> bool {
        !matches!(self, Settled::Stale)
    }
}

/// Tracks the most recently issued request of one stateful query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestEpoch {
    latest: u64,
}

impl RequestEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new epoch, invalidating every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.latest
    }

    pub fn settle<T>(&self, epoch: u64, result: Result<T, ApiError>) -> Settled<T> {
        if !self.is_current(epoch) {
            return Settled::Stale;
        }
        match result {
            Ok(value) => Settled::Fresh(value),
            Err(err) => Settled::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut epoch = RequestEpoch::new();
        let first = epoch.issue();
        let second = epoch.issue();
        assert!(second > first);
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));
    }

    #[test]
    fn test_settle() {
        let mut epoch = RequestEpoch::new();
        let first = epoch.issue();
        let second = epoch.issue();

        let late: Settled<u32> = epoch.settle(first, Ok(1));
        assert_eq!(late, Settled::Stale);
        assert!(!late.is_current());

        // a stale failure is dropped as well
        let late_err: Settled<u32> = epoch.settle(first, Err(ApiError::Transport("reset".into())));
        assert_eq!(late_err, Settled::Stale);

        assert_eq!(epoch.settle(second, Ok(2)), Settled::Fresh(2));
        let failed: Settled<u32> = epoch.settle(second, Err(ApiError::Http { status: 500, message: None }));
        assert!(failed.is_current());
        assert!(matches!(failed, Settled::Failed(ApiError::Http { status: 500, .. })));
    }

    #[test]
    fn test_nothing_issued() {
        let epoch = RequestEpoch::new();
        assert_eq!(epoch.latest(), 0);
        assert!(!epoch.is_current(1));
    }
}
