//! Observability and Metrics
//!
//! This module provides metrics collection and observability features
//! for monitoring codec throughput and health.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Global metrics collector for codec operations
#[derive(Debug)]
pub struct CodecMetrics {
    /// Total messages encoded
    pub messages_encoded: AtomicU64,
    /// Total messages decoded
    pub messages_decoded: AtomicU64,
    /// Total bytes produced by encode
    pub bytes_encoded: AtomicU64,
    /// Total bytes consumed by decode
    pub bytes_decoded: AtomicU64,
    /// Decodes abandoned on malformed input
    pub decode_errors: AtomicU64,
    /// Unknown fields stepped over during decode
    pub unknown_fields_skipped: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl CodecMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            messages_encoded: AtomicU64::new(0),
            messages_decoded: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            bytes_decoded: AtomicU64::new(0),
            decode_errors: AtomicU64::new(0),
            unknown_fields_skipped: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a finished encode
    pub fn message_encoded(&self, byte_count: u64) {
        self.messages_encoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a finished decode
    pub fn message_decoded(&self, byte_count: u64) {
        self.messages_decoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_decoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a decode abandoned on malformed input
    pub fn decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an unknown field stepped over
    pub fn unknown_field_skipped(&self) {
        self.unknown_fields_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages_encoded: self.messages_encoded.load(Ordering::Relaxed),
            messages_decoded: self.messages_decoded.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            bytes_decoded: self.bytes_decoded.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
            unknown_fields_skipped: self.unknown_fields_skipped.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            messages_encoded = snapshot.messages_encoded,
            messages_decoded = snapshot.messages_decoded,
            bytes_encoded = snapshot.bytes_encoded,
            bytes_decoded = snapshot.bytes_decoded,
            decode_errors = snapshot.decode_errors,
            unknown_fields_skipped = snapshot.unknown_fields_skipped,
            uptime_seconds = snapshot.uptime_seconds,
            "Codec metrics snapshot"
        );
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub messages_encoded: u64,
    pub messages_decoded: u64,
    pub bytes_encoded: u64,
    pub bytes_decoded: u64,
    pub decode_errors: u64,
    pub unknown_fields_skipped: u64,
    pub uptime_seconds: u64,
}

/// Global metrics instance (lazy static for simplicity)
static METRICS: once_cell::sync::Lazy<CodecMetrics> = once_cell::sync::Lazy::new(CodecMetrics::new);

/// Get the global metrics instance
pub fn global_metrics() -> &'static CodecMetrics {
    &METRICS
}

/// Timer for measuring operation duration
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = CodecMetrics::new();
        metrics.message_encoded(10);
        metrics.message_encoded(5);
        metrics.message_decoded(8);
        metrics.decode_error();
        metrics.unknown_field_skipped();
        metrics.unknown_field_skipped();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.messages_encoded, 2);
        assert_eq!(snapshot.bytes_encoded, 15);
        assert_eq!(snapshot.messages_decoded, 1);
        assert_eq!(snapshot.bytes_decoded, 8);
        assert_eq!(snapshot.decode_errors, 1);
        assert_eq!(snapshot.unknown_fields_skipped, 2);
    }

    #[test]
    fn test_global_instance_is_shared() {
        let a = global_metrics() as *const CodecMetrics;
        let b = global_metrics() as *const CodecMetrics;
        assert_eq!(a, b);
    }
}
