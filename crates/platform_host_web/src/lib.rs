//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for preferences, the playlist
//! library, and the local sign-in profile. Native builds (tests, tooling) get in-memory
//! equivalents through the same factories.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod auth;
pub mod storage;

pub use adapters::{
    build_host_services, host_strategy_name, playlist_sync, prefs_store, selected_host_strategy,
    HostStrategy, PrefsStoreAdapter,
};
pub use auth::WebProfileAuthGate;
pub use storage::local_prefs::WebPrefsStore;
