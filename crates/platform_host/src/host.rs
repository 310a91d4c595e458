//! Host service bundle injected into the desktop runtime by the entry layer.

use std::rc::Rc;

use crate::{
    auth::{AuthGate, MemoryAuthGate},
    playlists::{MemoryPlaylistSync, PlaylistSync},
    storage::prefs::{MemoryPrefsStore, PrefsStore},
};

#[derive(Clone)]
/// Collaborator services the desktop depends on but does not own.
pub struct HostServices {
    /// Preference storage (active theme).
    pub prefs: Rc<dyn PrefsStore>,
    /// Playlist library backend.
    pub playlists: Rc<dyn PlaylistSync>,
    /// Sign-in gate.
    pub auth: Rc<dyn AuthGate>,
}

impl HostServices {
    /// Bundles concrete services.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        playlists: Rc<dyn PlaylistSync>,
        auth: Rc<dyn AuthGate>,
    ) -> Self {
        Self {
            prefs,
            playlists,
            auth,
        }
    }

    /// In-memory services for tests and non-browser builds.
    pub fn in_memory(auth: MemoryAuthGate) -> Self {
        Self::new(
            Rc::new(MemoryPrefsStore::default()),
            Rc::new(MemoryPlaylistSync::default()),
            Rc::new(auth),
        )
    }
}
