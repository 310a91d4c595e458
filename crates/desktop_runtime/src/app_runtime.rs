//! Per-window resource sessions owned by the desktop shell.
//!
//! Content registers disposers through its lifecycle service. A session is drained exactly once,
//! either by an explicit `DisposeWindow` effect or when a sync finds its window gone.

use std::collections::{BTreeSet, HashMap};

use desktop_app_contract::{Disposer, InstanceId};
use leptos::*;

use crate::window_store::WindowStore;

#[derive(Default)]
/// Runtime-owned resource sessions keyed by window instance.
pub struct AppRuntimeState {
    sessions: HashMap<InstanceId, Vec<Disposer>>,
}

impl AppRuntimeState {
    fn ensure_session(&mut self, instance_id: &InstanceId) {
        self.sessions.entry(instance_id.clone()).or_default();
    }

    /// Queues `dispose` for `instance_id`, or hands it back when the window has no session.
    fn register(&mut self, instance_id: &InstanceId, dispose: Disposer) -> Option<Disposer> {
        match self.sessions.get_mut(instance_id) {
            Some(session) => {
                session.push(dispose);
                None
            }
            None => Some(dispose),
        }
    }

    fn take_session(&mut self, instance_id: &InstanceId) -> Vec<Disposer> {
        self.sessions.remove(instance_id).unwrap_or_default()
    }

    fn sync_windows(&mut self, windows: &WindowStore) -> Vec<Disposer> {
        let active: BTreeSet<&InstanceId> = windows.list().map(|w| w.instance_id()).collect();
        for instance_id in &active {
            self.ensure_session(instance_id);
        }

        let stale: Vec<InstanceId> = self
            .sessions
            .keys()
            .filter(|instance_id| !active.contains(instance_id))
            .cloned()
            .collect();
        stale
            .iter()
            .flat_map(|instance_id| self.take_session(instance_id))
            .collect()
    }

    /// Number of disposers queued for `instance_id`.
    pub fn pending_disposers(&self, instance_id: &InstanceId) -> usize {
        self.sessions.get(instance_id).map_or(0, Vec::len)
    }

    /// Whether `instance_id` has a live session.
    pub fn has_session(&self, instance_id: &InstanceId) -> bool {
        self.sessions.contains_key(instance_id)
    }
}

fn run_disposers(disposers: Vec<Disposer>) {
    for dispose in disposers {
        dispose();
    }
}

/// Registers a disposer for a window. Runs it immediately when the window is already gone.
pub fn register_window_disposer(
    runtime_state: RwSignal<AppRuntimeState>,
    instance_id: &InstanceId,
    dispose: Disposer,
) {
    let mut orphan = None;
    runtime_state.update_untracked(|state| orphan = state.register(instance_id, dispose));
    if let Some(dispose) = orphan {
        dispose();
    }
}

/// Runs and forgets every disposer registered for `instance_id`.
pub fn dispose_window_session(runtime_state: RwSignal<AppRuntimeState>, instance_id: &InstanceId) {
    let mut disposers = Vec::new();
    runtime_state.update_untracked(|state| disposers = state.take_session(instance_id));
    run_disposers(disposers);
}

/// Opens sessions for new windows and disposes sessions whose window left the store.
pub fn sync_runtime_sessions(runtime_state: RwSignal<AppRuntimeState>, windows: &WindowStore) {
    let mut disposers = Vec::new();
    runtime_state.update_untracked(|state| disposers = state.sync_windows(windows));
    run_disposers(disposers);
}
