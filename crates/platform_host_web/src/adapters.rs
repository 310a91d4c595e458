use std::rc::Rc;

use platform_host::{
    HostServices, MemoryPrefsStore, PrefsPlaylistSync, PrefsStore, PrefsStoreFuture,
};

use crate::{WebPrefsStore, WebProfileAuthGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// `localStorage`-backed adapters for the `wasm32` browser build.
    Browser,
    /// Process-local adapters for native builds (tests and tooling).
    InMemory,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::InMemory
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::InMemory => "in-memory",
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// Process-local preferences.
    InMemory(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::InMemory(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::InMemory(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::InMemory(store) => store.delete_pref(key),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::InMemory => PrefsStoreAdapter::InMemory(MemoryPrefsStore::default()),
    }
}

/// Builds the playlist backend, layered over `prefs`.
pub fn playlist_sync(prefs: PrefsStoreAdapter) -> PrefsPlaylistSync<PrefsStoreAdapter> {
    PrefsPlaylistSync::new(prefs)
}

/// Builds the full host service bundle consumed by the desktop runtime.
pub fn build_host_services() -> HostServices {
    let prefs = prefs_store();
    HostServices::new(
        Rc::new(prefs.clone()),
        Rc::new(playlist_sync(prefs)),
        Rc::new(WebProfileAuthGate::default()),
    )
}
