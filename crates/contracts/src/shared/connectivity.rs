//! Online/offline mirror with a cosmetic "pending sync" counter.
//!
//! The tracker never replays anything: reconnecting only schedules one
//! notice and resets the counter once the host reports the delay elapsed.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityStatus {
    pub is_online: bool,
    pub pending_count: u32,
}

impl Default for ConnectivityStatus {
    fn default() -> Self {
        Self {
            is_online: true,
            pending_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncTicket(u64);

/// Returned by `went_online`: the host waits `delay_ms`, then calls
/// [`ConnectivityTracker::complete_sync`] with `ticket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncNotice {
    pub ticket: SyncTicket,
    pub pending_count: u32,
    pub delay_ms: u32,
}

/// What the host shows once a sync completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncNotification {
    pub synced_count: u32,
}

#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    status: ConnectivityStatus,
    sync_delay_ms: u32,
    outstanding: Option<SyncTicket>,
    next_ticket: u64,
}

impl ConnectivityTracker {
    pub fn new(is_online: bool, pending_count: u32, sync_delay_ms: u32) -> Self {
        Self {
            status: ConnectivityStatus {
                is_online,
                pending_count,
            },
            sync_delay_ms,
            outstanding: None,
            next_ticket: 1,
        }
    }

    pub fn status(&self) -> ConnectivityStatus {
        self.status
    }

    pub fn is_online(&self) -> bool {
        self.status.is_online
    }

    pub fn pending_count(&self) -> u32 {
        self.status.pending_count
    }

    /// Leaves the counter alone; drops any notice not yet delivered.
    pub fn went_offline(&mut self) {
        self.status.is_online = false;
        if self.outstanding.take().is_some() {
            debug!("connectivity: offline before sync notice, cancelled");
        }
    }

    pub fn went_online(&mut self) -> Option<SyncNotice> {
        self.status.is_online = true;
        if self.status.pending_count == 0 {
            return None;
        }
        if self.outstanding.is_some() {
            // already scheduled by an earlier online event
            return None;
        }
        let ticket = SyncTicket(self.next_ticket);
        self.next_ticket += 1;
        self.outstanding = Some(ticket);
        debug!(
            "connectivity: online with {} pending, notice in {} ms",
            self.status.pending_count, self.sync_delay_ms
        );
        Some(SyncNotice {
            ticket,
            pending_count: self.status.pending_count,
            delay_ms: self.sync_delay_ms,
        })
    }

    /// Count a write if it happened offline. Returns whether it was counted.
    pub fn record_write(&mut self) -> bool {
        if self.status.is_online {
            return false;
        }
        self.increment_pending();
        true
    }

    pub fn increment_pending(&mut self) -> u32 {
        self.status.pending_count = self.status.pending_count.saturating_add(1);
        self.status.pending_count
    }

    /// Delay elapsed: reset the counter and hand back the one notification.
    pub fn complete_sync(&mut self, ticket: SyncTicket) -> Option<SyncNotification> {
        if self.outstanding != Some(ticket) {
            return None;
        }
        self.outstanding = None;
        let synced_count = self.status.pending_count;
        self.status.pending_count = 0;
        debug!("connectivity: {} operations marked synced", synced_count);
        Some(SyncNotification { synced_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_online_with_pending_notifies_once() {
        let mut tracker = ConnectivityTracker::new(true, 0, 1000);
        tracker.went_offline();
        assert!(tracker.record_write());
        assert!(tracker.record_write());
        assert!(tracker.record_write());
        assert_eq!(tracker.pending_count(), 3);

        let notice = tracker.went_online().unwrap();
        assert_eq!(notice.pending_count, 3);
        assert_eq!(notice.delay_ms, 1000);
        assert!(tracker.went_online().is_none());

        let done = tracker.complete_sync(notice.ticket).unwrap();
        assert_eq!(done.synced_count, 3);
        assert_eq!(tracker.pending_count(), 0);
        assert!(tracker.complete_sync(notice.ticket).is_none());
    }

    #[test]
    fn test_online_without_pending_is_silent() {
        let mut tracker = ConnectivityTracker::new(true, 0, 1000);
        tracker.went_offline();
        assert!(!tracker.is_online());
        assert!(tracker.went_online().is_none());
        assert!(tracker.is_online());
    }

    #[test]
    fn test_online_writes_are_not_counted() {
        let mut tracker = ConnectivityTracker::new(true, 0, 1000);
        assert!(!tracker.record_write());
        assert_eq!(tracker.pending_count(), 0);
    }

    #[test]
    fn test_offline_keeps_count() {
        let mut tracker = ConnectivityTracker::new(false, 2, 1000);
        tracker.went_offline();
        assert_eq!(tracker.pending_count(), 2);
    }

    #[test]
    fn test_flapping_cancels_stale_notice() {
        let mut tracker = ConnectivityTracker::new(false, 2, 1000);
        let first = tracker.went_online().unwrap();
        tracker.went_offline();
        assert!(tracker.complete_sync(first.ticket).is_none());
        assert_eq!(tracker.pending_count(), 2);

        let second = tracker.went_online().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert_eq!(tracker.complete_sync(second.ticket).unwrap().synced_count, 2);
    }
}
