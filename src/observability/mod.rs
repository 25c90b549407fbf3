//! Observability for marquee
//!
//! - Structured logging (one JSON object per line)
//! - Typed lifecycle and catalogue events
//! - Counter metrics
//!
//! ```ignore
//! use marquee::observability::{Event, Logger, MetricsRegistry};
//!
//! Logger::info(Event::MovieCreated, &[("id", &movie.id)]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```
//!
//! Observability is read-only: logging a failure never replaces returning it.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
