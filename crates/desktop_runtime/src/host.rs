//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Effect execution and desktop measurement live behind this boundary so the reducer stays pure
//! and the collaborators stay injectable.

mod boot;
mod effects;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::{html, Callback, NodeRef};
use platform_host::{HostServices, PlaylistSync, PrefsStore};

use crate::{
    model::DesktopBounds,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    playlists: Rc<dyn PlaylistSync>,
}

impl DesktopHostContext {
    /// Wraps the services injected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            playlists: services.playlists,
        }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured playlist backend.
    pub fn playlist_sync(&self) -> Rc<dyn PlaylistSync> {
        self.playlists.clone()
    }

    /// Installs boot hydration of the persisted theme.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Measures the rendered desktop surface, falling back to the browser viewport.
    pub fn desktop_bounds(&self, surface: NodeRef<html::Div>) -> DesktopBounds {
        host_ui::measure_desktop_bounds(surface)
    }
}
