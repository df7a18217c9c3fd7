//! Observability: process-local counters and the sink abstraction.
//!
//! Core resolution and view-building stay pure; instrumentation is emitted
//! by the facade at its boundary, never from inside the pure functions.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EntityCounters, ObsOps, ObsState, obs_report, obs_reset};
pub use sink::{ObsEvent, ObsSink, clear_sink_override, record, set_sink_override};
