//! Dispatcher metrics for observability
//!
//! Sink failures never reach the caller of a dispatch. These counters are
//! the only programmatic way to observe them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing dispatcher activity
///
/// # Example
///
/// ```
/// use malalog::DispatcherMetrics;
///
/// let metrics = DispatcherMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_notification_failed();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.notification_failures(), 1);
/// ```
#[derive(Debug)]
pub struct DispatcherMetrics {
    /// Number of completed dispatch calls
    dispatched: AtomicU64,

    /// Notifications accepted by the remote endpoint
    notifications_sent: AtomicU64,

    /// Notifications that failed to deliver
    notification_failures: AtomicU64,

    /// Lines appended to the log file
    file_lines_written: AtomicU64,

    /// Lines that failed to append
    file_failures: AtomicU64,
}

impl DispatcherMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            notifications_sent: AtomicU64::new(0),
            notification_failures: AtomicU64::new(0),
            file_lines_written: AtomicU64::new(0),
            file_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn notifications_sent(&self) -> u64 {
        self.notifications_sent.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn notification_failures(&self) -> u64 {
        self.notification_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines_written(&self) -> u64 {
        self.file_lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_failures(&self) -> u64 {
        self.file_failures.load(Ordering::Relaxed)
    }

    /// Record a completed dispatch, returning the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_notification_sent(&self) -> u64 {
        self.notifications_sent.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_notification_failed(&self) -> u64 {
        self.notification_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_written(&self) -> u64 {
        self.file_lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_failed(&self) -> u64 {
        self.file_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Total sink failures across notification and file output
    pub fn total_failures(&self) -> u64 {
        self.notification_failures() + self.file_failures()
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.notifications_sent.store(0, Ordering::Relaxed);
        self.notification_failures.store(0, Ordering::Relaxed);
        self.file_lines_written.store(0, Ordering::Relaxed);
        self.file_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatcherMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatcherMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            notifications_sent: AtomicU64::new(self.notifications_sent()),
            notification_failures: AtomicU64::new(self.notification_failures()),
            file_lines_written: AtomicU64::new(self.file_lines_written()),
            file_failures: AtomicU64::new(self.file_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = DispatcherMetrics::new();
        assert_eq!(metrics.dispatched(), 0);
        assert_eq!(metrics.notifications_sent(), 0);
        assert_eq!(metrics.notification_failures(), 0);
        assert_eq!(metrics.file_lines_written(), 0);
        assert_eq!(metrics.file_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = DispatcherMetrics::new();
        assert_eq!(metrics.record_dispatched(), 0);
        assert_eq!(metrics.record_dispatched(), 1);
        assert_eq!(metrics.dispatched(), 2);
    }

    #[test]
    fn test_total_failures() {
        let metrics = DispatcherMetrics::new();
        metrics.record_notification_failed();
        metrics.record_file_failed();
        metrics.record_file_failed();
        metrics.record_file_written();
        assert_eq!(metrics.total_failures(), 3);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = DispatcherMetrics::new();
        metrics.record_dispatched();
        metrics.record_notification_sent();
        metrics.record_file_written();

        metrics.reset();

        assert_eq!(metrics.dispatched(), 0);
        assert_eq!(metrics.notifications_sent(), 0);
        assert_eq!(metrics.file_lines_written(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = DispatcherMetrics::new();
        metrics.record_dispatched();

        let snapshot = metrics.clone();
        metrics.record_dispatched();

        assert_eq!(metrics.dispatched(), 2);
        assert_eq!(snapshot.dispatched(), 1);
    }
}
