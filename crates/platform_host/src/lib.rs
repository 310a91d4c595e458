//! Typed host-domain contracts shared by the desktop runtime, hosted apps, and browser adapters.
//!
//! This crate is the API-first boundary for collaborators the window manager does not own:
//! wall-clock time, lightweight preference storage, the playlist library and its cloud sync
//! seam, and the sign-in gate. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod host;
pub mod playlists;
pub mod storage;
pub mod time;

pub use auth::{
    user_id_for_email, validate_credentials, AuthError, AuthFuture, AuthGate, MemoryAuthGate,
    UserSession,
};
pub use host::HostServices;
pub use playlists::{
    playlists_pref_key, MemoryPlaylistSync, PlaylistError, PlaylistLibrary, PlaylistSync,
    PlaylistSyncFuture, PrefsPlaylistSync, Track,
};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
    THEME_PREF_KEY,
};
pub use time::{local_clock_time, next_monotonic_timestamp_ms, unix_time_ms_now, ClockTime};
