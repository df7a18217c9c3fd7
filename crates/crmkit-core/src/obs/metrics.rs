use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// ObsState
/// Ephemeral, in-memory counters for resolution and view building.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ObsState {
    pub ops: ObsOps,
    pub entities: BTreeMap<String, EntityCounters>,
}

///
/// ObsOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ObsOps {
    // Resolution
    pub resolve_hits: u64,
    pub resolve_fallbacks: u64,

    // Routing
    pub route_legacy: u64,
    pub route_partner: u64,
    pub route_generic: u64,

    // View builds
    pub lists_built: u64,
    pub profiles_built: u64,
}

///
/// EntityCounters
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntityCounters {
    pub lists_built: u64,
    pub profiles_built: u64,
}

thread_local! {
    static STATE: RefCell<ObsState> = RefCell::new(ObsState::default());
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut ObsState) -> R) -> R {
    STATE.with_borrow_mut(f)
}

/// Point-in-time snapshot of the counters.
#[must_use]
pub fn obs_report() -> ObsState {
    STATE.with_borrow(Clone::clone)
}

/// Reset all counters to zero.
pub fn obs_reset() {
    STATE.with_borrow_mut(|state| *state = ObsState::default());
}
