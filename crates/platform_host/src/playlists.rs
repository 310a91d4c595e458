//! Playlist library model and the sync seam to whichever backend stores it.
//!
//! [`PlaylistLibrary`] is the in-memory source of truth that widgets mutate synchronously.
//! After each mutation the caller hands the full library to a [`PlaylistSync`] implementation
//! without waiting on the result, mirroring a fire-and-forget cloud write.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::prefs::{load_pref_with, save_pref_with, PrefsStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One playable entry in a playlist.
pub struct Track {
    /// Provider video/track identifier.
    pub video_id: String,
    /// Display title.
    pub title: String,
    /// Track length in seconds; `0` when the provider did not report one.
    #[serde(default)]
    pub duration_secs: u32,
}

impl Track {
    /// Creates a track entry.
    pub fn new(video_id: impl Into<String>, title: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            duration_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected playlist library mutations.
pub enum PlaylistError {
    /// Playlist names must contain at least one non-whitespace character.
    #[error("playlist name must not be empty")]
    EmptyName,
    /// The named playlist does not exist.
    #[error("playlist `{0}` not found")]
    NotFound(String),
    /// A playlist with the target name already exists.
    #[error("playlist `{0}` already exists")]
    AlreadyExists(String),
    /// The track index is past the end of the playlist.
    #[error("playlist `{name}` has no track at index {index}")]
    TrackIndexOutOfRange {
        /// Playlist name.
        name: String,
        /// Requested index.
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// Named playlists keyed by playlist name.
pub struct PlaylistLibrary {
    playlists: BTreeMap<String, Vec<Track>>,
}

fn validated_name(name: &str) -> Result<String, PlaylistError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PlaylistError::EmptyName);
    }
    Ok(trimmed.to_string())
}

impl PlaylistLibrary {
    /// Returns every playlist in name order.
    pub fn playlists(&self) -> &BTreeMap<String, Vec<Track>> {
        &self.playlists
    }

    /// Returns the tracks of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&[Track]> {
        self.playlists.get(name).map(Vec::as_slice)
    }

    /// Returns the number of playlists.
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Returns `true` when no playlists exist.
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Creates an empty playlist.
    ///
    /// Returns `Ok(false)` without touching anything when the name is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::EmptyName`] for blank names.
    pub fn create_playlist(&mut self, name: &str) -> Result<bool, PlaylistError> {
        let name = validated_name(name)?;
        if self.playlists.contains_key(&name) {
            return Ok(false);
        }
        self.playlists.insert(name, Vec::new());
        Ok(true)
    }

    /// Replaces (or creates) a playlist with `tracks`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::EmptyName`] for blank names.
    pub fn save_playlist(&mut self, name: &str, tracks: Vec<Track>) -> Result<(), PlaylistError> {
        let name = validated_name(name)?;
        self.playlists.insert(name, tracks);
        Ok(())
    }

    /// Removes a playlist, returning its tracks when it existed.
    pub fn remove_playlist(&mut self, name: &str) -> Option<Vec<Track>> {
        self.playlists.remove(name)
    }

    /// Moves a playlist's tracks under a new name.
    ///
    /// # Errors
    ///
    /// Returns an error when the new name is blank, the source is missing, or the target name
    /// is taken by a different playlist.
    pub fn rename_playlist(&mut self, old_name: &str, new_name: &str) -> Result<(), PlaylistError> {
        let new_name = validated_name(new_name)?;
        if !self.playlists.contains_key(old_name) {
            return Err(PlaylistError::NotFound(old_name.to_string()));
        }
        if new_name == old_name {
            return Ok(());
        }
        if self.playlists.contains_key(&new_name) {
            return Err(PlaylistError::AlreadyExists(new_name));
        }
        if let Some(tracks) = self.playlists.remove(old_name) {
            self.playlists.insert(new_name, tracks);
        }
        Ok(())
    }

    /// Appends `track` to `name`, creating the playlist when missing.
    ///
    /// Returns the new track count.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::EmptyName`] for blank names.
    pub fn add_song_to_playlist(&mut self, name: &str, track: Track) -> Result<usize, PlaylistError> {
        let name = validated_name(name)?;
        let tracks = self.playlists.entry(name).or_default();
        tracks.push(track);
        Ok(tracks.len())
    }

    /// Removes the track at `index` from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the playlist or index does not exist.
    pub fn remove_song_from_playlist(
        &mut self,
        name: &str,
        index: usize,
    ) -> Result<Track, PlaylistError> {
        let tracks = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;
        if index >= tracks.len() {
            return Err(PlaylistError::TrackIndexOutOfRange {
                name: name.to_string(),
                index,
            });
        }
        Ok(tracks.remove(index))
    }
}

/// Object-safe boxed future used by [`PlaylistSync`] async methods.
pub type PlaylistSyncFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend that stores a user's playlist library.
pub trait PlaylistSync {
    /// Loads the full library for `user_id`; a user with no data gets an empty library.
    fn load_playlists<'a>(
        &'a self,
        user_id: &'a str,
    ) -> PlaylistSyncFuture<'a, Result<PlaylistLibrary, String>>;

    /// Replaces the stored library for `user_id`.
    fn save_playlists<'a>(
        &'a self,
        user_id: &'a str,
        library: &'a PlaylistLibrary,
    ) -> PlaylistSyncFuture<'a, Result<(), String>>;

    /// Deletes one playlist from the stored library for `user_id`.
    fn remove_playlist<'a>(
        &'a self,
        user_id: &'a str,
        name: &'a str,
    ) -> PlaylistSyncFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// Process-local playlist backend. Clones share the same storage.
pub struct MemoryPlaylistSync {
    inner: Rc<RefCell<HashMap<String, PlaylistLibrary>>>,
}

impl PlaylistSync for MemoryPlaylistSync {
    fn load_playlists<'a>(
        &'a self,
        user_id: &'a str,
    ) -> PlaylistSyncFuture<'a, Result<PlaylistLibrary, String>> {
        Box::pin(async move {
            Ok(self
                .inner
                .borrow()
                .get(user_id)
                .cloned()
                .unwrap_or_default())
        })
    }

    fn save_playlists<'a>(
        &'a self,
        user_id: &'a str,
        library: &'a PlaylistLibrary,
    ) -> PlaylistSyncFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(user_id.to_string(), library.clone());
            Ok(())
        })
    }

    fn remove_playlist<'a>(
        &'a self,
        user_id: &'a str,
        name: &'a str,
    ) -> PlaylistSyncFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if let Some(library) = self.inner.borrow_mut().get_mut(user_id) {
                library.remove_playlist(name);
            }
            Ok(())
        })
    }
}

/// Preference key under which [`PrefsPlaylistSync`] stores a user's library.
pub fn playlists_pref_key(user_id: &str) -> String {
    format!("playlists.{user_id}")
}

#[derive(Debug, Clone)]
/// Playlist backend layered over a [`PrefsStore`], one JSON document per user.
pub struct PrefsPlaylistSync<S> {
    prefs: S,
}

impl<S: PrefsStore> PrefsPlaylistSync<S> {
    /// Wraps a preference store.
    pub fn new(prefs: S) -> Self {
        Self { prefs }
    }
}

impl<S: PrefsStore> PlaylistSync for PrefsPlaylistSync<S> {
    fn load_playlists<'a>(
        &'a self,
        user_id: &'a str,
    ) -> PlaylistSyncFuture<'a, Result<PlaylistLibrary, String>> {
        Box::pin(async move {
            let key = playlists_pref_key(user_id);
            Ok(load_pref_with::<S, PlaylistLibrary>(&self.prefs, &key)
                .await?
                .unwrap_or_default())
        })
    }

    fn save_playlists<'a>(
        &'a self,
        user_id: &'a str,
        library: &'a PlaylistLibrary,
    ) -> PlaylistSyncFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let key = playlists_pref_key(user_id);
            save_pref_with(&self.prefs, &key, library).await
        })
    }

    fn remove_playlist<'a>(
        &'a self,
        user_id: &'a str,
        name: &'a str,
    ) -> PlaylistSyncFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let key = playlists_pref_key(user_id);
            let Some(mut library) = load_pref_with::<S, PlaylistLibrary>(&self.prefs, &key).await?
            else {
                return Ok(());
            };
            if library.remove_playlist(name).is_some() {
                save_pref_with(&self.prefs, &key, &library).await?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::prefs::MemoryPrefsStore;

    fn track(id: &str) -> Track {
        Track::new(id, format!("Song {id}"), 180)
    }

    #[test]
    fn create_playlist_is_a_noop_when_the_name_exists() {
        let mut library = PlaylistLibrary::default();
        assert_eq!(library.create_playlist("Road Trip"), Ok(true));
        library
            .add_song_to_playlist("Road Trip", track("a"))
            .expect("add");

        assert_eq!(library.create_playlist("Road Trip"), Ok(false));
        assert_eq!(library.get("Road Trip").map(<[Track]>::len), Some(1));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut library = PlaylistLibrary::default();
        assert_eq!(library.create_playlist("   "), Err(PlaylistError::EmptyName));
        assert_eq!(
            library.save_playlist("", Vec::new()),
            Err(PlaylistError::EmptyName)
        );
        assert!(library.is_empty());
    }

    #[test]
    fn add_song_creates_missing_playlist() {
        let mut library = PlaylistLibrary::default();
        assert_eq!(library.add_song_to_playlist("Fresh", track("a")), Ok(1));
        assert_eq!(library.add_song_to_playlist("Fresh", track("b")), Ok(2));
        assert_eq!(library.get("Fresh"), Some(&[track("a"), track("b")][..]));
    }

    #[test]
    fn rename_moves_tracks_and_refuses_collisions() {
        let mut library = PlaylistLibrary::default();
        library.save_playlist("Old", vec![track("a")]).expect("save");
        library.save_playlist("Taken", Vec::new()).expect("save");

        assert_eq!(
            library.rename_playlist("Old", "Taken"),
            Err(PlaylistError::AlreadyExists("Taken".to_string()))
        );
        assert_eq!(
            library.rename_playlist("Missing", "Other"),
            Err(PlaylistError::NotFound("Missing".to_string()))
        );

        library.rename_playlist("Old", "New").expect("rename");
        assert_eq!(library.get("Old"), None);
        assert_eq!(library.get("New"), Some(&[track("a")][..]));
    }

    #[test]
    fn remove_song_checks_bounds() {
        let mut library = PlaylistLibrary::default();
        library
            .save_playlist("Mix", vec![track("a"), track("b")])
            .expect("save");

        assert_eq!(library.remove_song_from_playlist("Mix", 0), Ok(track("a")));
        assert_eq!(
            library.remove_song_from_playlist("Mix", 5),
            Err(PlaylistError::TrackIndexOutOfRange {
                name: "Mix".to_string(),
                index: 5,
            })
        );
        assert_eq!(library.get("Mix"), Some(&[track("b")][..]));
    }

    #[test]
    fn library_serializes_as_a_plain_name_map() {
        let mut library = PlaylistLibrary::default();
        library.save_playlist("Mix", vec![track("a")]).expect("save");
        let json = serde_json::to_value(&library).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "Mix": [{ "video_id": "a", "title": "Song a", "duration_secs": 180 }]
            })
        );
    }

    #[test]
    fn memory_sync_scopes_libraries_per_user() {
        let sync = MemoryPlaylistSync::default();
        let mut library = PlaylistLibrary::default();
        library.save_playlist("Mine", vec![track("a")]).expect("save");

        block_on(sync.save_playlists("ada", &library)).expect("save");
        assert_eq!(block_on(sync.load_playlists("ada")).expect("load"), library);
        assert!(block_on(sync.load_playlists("grace"))
            .expect("load")
            .is_empty());

        block_on(sync.remove_playlist("ada", "Mine")).expect("remove");
        assert!(block_on(sync.load_playlists("ada")).expect("load").is_empty());
    }

    #[test]
    fn prefs_sync_persists_under_user_key() {
        let prefs = MemoryPrefsStore::default();
        let sync = PrefsPlaylistSync::new(prefs.clone());
        let mut library = PlaylistLibrary::default();
        library.save_playlist("A", vec![track("a")]).expect("save");
        library.save_playlist("B", Vec::new()).expect("save");

        block_on(sync.save_playlists("ada", &library)).expect("save");
        assert!(block_on(prefs.load_pref(&playlists_pref_key("ada")))
            .expect("load raw")
            .is_some());

        block_on(sync.remove_playlist("ada", "A")).expect("remove");
        let reloaded = block_on(sync.load_playlists("ada")).expect("load");
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get("B").is_some());
    }
}
