//! Claim window arithmetic over ledger timestamps.
//!
//! Nothing here reads the ledger: callers pass `now` explicitly so the state
//! machine can be exercised without a running environment.

use soroban_sdk::contracttype;

use crate::error::AirdropError;

/// Derived distributor state.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root is still the all-zero placeholder.
    Unconfigured,
    /// Start unset or not reached yet.
    Pending,
    /// `start <= now < end`.
    Active,
    /// `now >= end`.
    Closed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClaimWindow {
    pub start: Option<u64>,
    pub end: Option<u64>,
    /// Seconds after `end` before the owner may reclaim.
    pub reclaim_delay: u64,
}

impl ClaimWindow {
    /// Rejects a window whose bounds are both known and out of order.
    pub fn validate(&self) -> Result<(), AirdropError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start >= end => Err(AirdropError::InvalidWindow),
            _ => Ok(()),
        }
    }

    /// Window phase at `now`. An unset end leaves the window open once started.
    pub fn phase(&self, now: u64) -> Phase {
        match self.start {
            Some(start) if now >= start => {
                if self.end.is_some_and(|end| now >= end) {
                    Phase::Closed
                } else {
                    Phase::Active
                }
            }
            _ => Phase::Pending,
        }
    }

    pub fn is_active(&self, now: u64) -> bool {
        self.phase(now) == Phase::Active
    }

    /// The root is frozen from the first instant claims may be accepted.
    pub fn root_locked(&self, now: u64) -> bool {
        self.start.is_some_and(|start| now >= start)
    }

    pub fn reclaim_opens_at(&self) -> Option<u64> {
        self.end.map(|end| end.saturating_add(self.reclaim_delay))
    }

    pub fn can_reclaim(&self, now: u64) -> bool {
        self.reclaim_opens_at().is_some_and(|opens_at| now >= opens_at)
    }

    pub fn with_start(self, now: u64, start: u64) -> Result<Self, AirdropError> {
        if self.start.is_some() {
            return Err(AirdropError::StartAlreadySet);
        }
        if start <= now || self.end.is_some_and(|end| start >= end) {
            return Err(AirdropError::InvalidStart);
        }
        Ok(ClaimWindow {
            start: Some(start),
            ..self
        })
    }

    pub fn with_end(self, now: u64, end: u64) -> Result<Self, AirdropError> {
        if self.end.is_some() {
            return Err(AirdropError::EndAlreadySet);
        }
        if end <= now || self.start.is_some_and(|start| end <= start) {
            return Err(AirdropError::InvalidEnd);
        }
        Ok(ClaimWindow {
            end: Some(end),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: Option<u64>, end: Option<u64>) -> ClaimWindow {
        ClaimWindow {
            start,
            end,
            reclaim_delay: 50,
        }
    }

    #[test]
    fn bounds_are_inclusive_start_exclusive_end() {
        let w = window(Some(100), Some(200));
        assert_eq!(w.phase(99), Phase::Pending);
        assert_eq!(w.phase(100), Phase::Active);
        assert_eq!(w.phase(199), Phase::Active);
        assert_eq!(w.phase(200), Phase::Closed);
        assert!(!w.is_active(200));
    }

    #[test]
    fn unset_bounds() {
        assert_eq!(window(None, Some(200)).phase(150), Phase::Pending);
        assert_eq!(window(None, None).phase(u64::MAX), Phase::Pending);
        assert_eq!(window(Some(100), None).phase(u64::MAX), Phase::Active);
    }

    #[test]
    fn root_locks_at_start() {
        let w = window(Some(100), Some(200));
        assert!(!w.root_locked(99));
        assert!(w.root_locked(100));
        assert!(!window(None, Some(200)).root_locked(1_000));
    }

    #[test]
    fn reclaim_opens_after_end_plus_delay() {
        let w = window(Some(100), Some(200));
        assert_eq!(w.reclaim_opens_at(), Some(250));
        assert!(!w.can_reclaim(249));
        assert!(w.can_reclaim(250));

        assert!(!window(Some(100), None).can_reclaim(u64::MAX));

        let saturated = ClaimWindow {
            reclaim_delay: u64::MAX,
            ..w
        };
        assert_eq!(saturated.reclaim_opens_at(), Some(u64::MAX));
    }

    #[test]
    fn start_is_set_once_and_must_be_future() {
        let w = window(None, Some(200));
        assert_eq!(w.with_start(50, 50), Err(AirdropError::InvalidStart));
        assert_eq!(w.with_start(50, 200), Err(AirdropError::InvalidStart));

        let w = w.with_start(50, 60).unwrap();
        assert_eq!(w.start, Some(60));
        assert_eq!(w.with_start(50, 70), Err(AirdropError::StartAlreadySet));
    }

    #[test]
    fn end_is_set_once_and_must_follow_start() {
        let w = window(Some(100), None);
        assert_eq!(w.with_end(150, 150), Err(AirdropError::InvalidEnd));
        assert_eq!(w.with_end(10, 100), Err(AirdropError::InvalidEnd));

        let w = w.with_end(10, 300).unwrap();
        assert_eq!(w.end, Some(300));
        assert_eq!(w.with_end(10, 400), Err(AirdropError::EndAlreadySet));
    }

    #[test]
    fn validate_rejects_inverted_window() {
        assert_eq!(
            window(Some(200), Some(200)).validate(),
            Err(AirdropError::InvalidWindow)
        );
        assert!(window(Some(100), Some(200)).validate().is_ok());
        assert!(window(None, Some(1)).validate().is_ok());
    }
}
