//! Observation sink boundary.
//!
//! Resolution and view logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through ObsEvent and ObsSink; this module is
//! the only bridge between boundary code and the global counter state.

use crate::{obs::metrics, route::Experience};
use crmkit_schema::types::EntityKey;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Box<dyn ObsSink>>> = const { RefCell::new(None) };
}

///
/// ObsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum ObsEvent {
    Resolve { fallback: bool },
    Route { experience: Experience },
    ListBuilt { entity: EntityKey },
    ProfileBuilt { entity: EntityKey },
}

///
/// ObsSink
///

pub trait ObsSink {
    fn record(&self, event: ObsEvent);
}

/// GlobalObsSink
/// Default process-local sink that writes into the global counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalObsSink;

impl ObsSink for GlobalObsSink {
    fn record(&self, event: ObsEvent) {
        match event {
            ObsEvent::Resolve { fallback } => {
                metrics::with_state_mut(|m| {
                    if fallback {
                        m.ops.resolve_fallbacks = m.ops.resolve_fallbacks.saturating_add(1);
                    } else {
                        m.ops.resolve_hits = m.ops.resolve_hits.saturating_add(1);
                    }
                });
            }

            ObsEvent::Route { experience } => {
                metrics::with_state_mut(|m| match experience {
                    Experience::Legacy => {
                        m.ops.route_legacy = m.ops.route_legacy.saturating_add(1);
                    }
                    Experience::Partner => {
                        m.ops.route_partner = m.ops.route_partner.saturating_add(1);
                    }
                    Experience::Generic => {
                        m.ops.route_generic = m.ops.route_generic.saturating_add(1);
                    }
                });
            }

            ObsEvent::ListBuilt { entity } => {
                metrics::with_state_mut(|m| {
                    m.ops.lists_built = m.ops.lists_built.saturating_add(1);
                    let entry = m.entities.entry(entity.to_string()).or_default();
                    entry.lists_built = entry.lists_built.saturating_add(1);
                });
            }

            ObsEvent::ProfileBuilt { entity } => {
                metrics::with_state_mut(|m| {
                    m.ops.profiles_built = m.ops.profiles_built.saturating_add(1);
                    let entry = m.entities.entry(entity.to_string()).or_default();
                    entry.profiles_built = entry.profiles_built.saturating_add(1);
                });
            }
        }
    }
}

/// Record one event through the active sink.
pub fn record(event: ObsEvent) {
    SINK_OVERRIDE.with_borrow(|sink| match sink {
        Some(sink) => sink.record(event),
        None => GlobalObsSink.record(event),
    });
}

/// Install a scoped sink for the current thread (tests, custom exporters).
pub fn set_sink_override(sink: Box<dyn ObsSink>) {
    SINK_OVERRIDE.with_borrow_mut(|slot| *slot = Some(sink));
}

/// Remove the scoped sink, restoring the global counters.
pub fn clear_sink_override() {
    SINK_OVERRIDE.with_borrow_mut(|slot| *slot = None);
}

///
/// TESTS
///
