//! # Utility Modules
//!
//! Supporting utilities for logging and observability.
//!
//! ## Components
//! - **Logging**: Structured logging configuration
//! - **Metrics**: Thread-safe codec operation counters

pub mod logging;
pub mod metrics;

pub use metrics::{global_metrics, CodecMetrics, MetricsSnapshot};
