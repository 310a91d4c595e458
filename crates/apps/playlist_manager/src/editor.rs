use platform_host::{PlaylistError, PlaylistLibrary, Track};
use serde_json::{json, Value};

/// Window size requested for player windows spawned by "Play".
pub(crate) const PLAYER_WINDOW_WIDTH: i32 = 376;
pub(crate) const PLAYER_WINDOW_HEIGHT: i32 = 535;
pub(crate) const PLAYER_WINDOW_TITLE: &str = "OldRadioPlayer";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ManagerState {
    library: PlaylistLibrary,
    selected: Option<String>,
}

impl ManagerState {
    pub(crate) fn library(&self) -> &PlaylistLibrary {
        &self.library
    }

    /// Swaps in a freshly loaded library, keeping the selection only if it still exists.
    pub(crate) fn replace_library(&mut self, library: PlaylistLibrary) {
        self.library = library;
        if let Some(name) = &self.selected {
            if self.library.get(name).is_none() {
                self.selected = None;
            }
        }
    }

    pub(crate) fn summaries(&self) -> Vec<(String, usize)> {
        self.library
            .playlists()
            .iter()
            .map(|(name, tracks)| (name.clone(), tracks.len()))
            .collect()
    }

    pub(crate) fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn selected_tracks(&self) -> Vec<Track> {
        self.selected
            .as_deref()
            .and_then(|name| self.library.get(name))
            .map(<[Track]>::to_vec)
            .unwrap_or_default()
    }

    pub(crate) fn select(&mut self, name: &str) {
        if self.library.get(name).is_some() {
            self.selected = Some(name.to_string());
        }
    }

    /// Returns `Ok(false)` when the name was already taken.
    pub(crate) fn create(&mut self, name: &str) -> Result<bool, PlaylistError> {
        self.library.create_playlist(name)
    }

    pub(crate) fn delete(&mut self, name: &str) -> bool {
        let removed = self.library.remove_playlist(name).is_some();
        if removed && self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        removed
    }

    pub(crate) fn rename_selected(&mut self, new_name: &str) -> Result<(), PlaylistError> {
        let Some(old_name) = self.selected.clone() else {
            return Err(PlaylistError::NotFound(String::new()));
        };
        self.library.rename_playlist(&old_name, new_name)?;
        self.selected = Some(new_name.trim().to_string());
        Ok(())
    }

    pub(crate) fn add_to_selected(&mut self, track: Track) -> Result<usize, PlaylistError> {
        let Some(name) = self.selected.clone() else {
            return Err(PlaylistError::NotFound(String::new()));
        };
        self.library.add_song_to_playlist(&name, track)
    }

    pub(crate) fn remove_from_selected(&mut self, index: usize) -> Result<Track, PlaylistError> {
        let Some(name) = self.selected.clone() else {
            return Err(PlaylistError::NotFound(String::new()));
        };
        self.library.remove_song_from_playlist(&name, index)
    }

    /// Launch props for a player window, or `None` when the playlist is missing or empty.
    pub(crate) fn player_props(&self, name: &str) -> Option<Value> {
        let tracks = self.library.get(name).filter(|tracks| !tracks.is_empty())?;
        Some(json!({ "playlist": tracks, "current_index": 0 }))
    }
}

/// Parses `m:ss` or a plain number of seconds; blank input means unknown length.
pub(crate) fn parse_duration(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    match raw.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes.trim().parse().ok()?;
            let seconds: u32 = seconds.trim().parse().ok()?;
            if seconds >= 60 {
                return None;
            }
            minutes.checked_mul(60)?.checked_add(seconds)
        }
        None => raw.parse().ok(),
    }
}

/// Builds a track from the add form, or the message to show inline.
pub(crate) fn track_from_form(video_id: &str, title: &str, duration: &str) -> Result<Track, String> {
    let video_id = video_id.trim();
    if video_id.is_empty() {
        return Err("Enter a video id for the track.".to_string());
    }
    let Some(duration_secs) = parse_duration(duration) else {
        return Err(format!("`{}` is not a track length; use m:ss.", duration.trim()));
    };
    let title = match title.trim() {
        "" => video_id,
        title => title,
    };
    Ok(Track::new(video_id, title, duration_secs))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state_with(name: &str, titles: &[&str]) -> ManagerState {
        let mut state = ManagerState::default();
        let mut library = PlaylistLibrary::default();
        library
            .save_playlist(
                name,
                titles
                    .iter()
                    .map(|title| Track::new(format!("id-{title}"), *title, 180))
                    .collect(),
            )
            .expect("save playlist");
        state.replace_library(library);
        state
    }

    #[test]
    fn create_ignores_taken_names_and_rejects_blank_ones() {
        let mut state = state_with("Road Trip", &[]);
        assert_eq!(state.create("Road Trip"), Ok(false));
        assert_eq!(state.create("   "), Err(PlaylistError::EmptyName));
        assert_eq!(state.create("Jazz"), Ok(true));
        assert_eq!(
            state.summaries(),
            vec![("Jazz".to_string(), 0), ("Road Trip".to_string(), 0)]
        );
    }

    #[test]
    fn deleting_the_selected_playlist_clears_the_selection() {
        let mut state = state_with("Road Trip", &["a"]);
        state.select("Road Trip");
        assert!(state.delete("Road Trip"));
        assert_eq!(state.selected(), None);
        assert!(!state.delete("Road Trip"));
    }

    #[test]
    fn selection_follows_a_rename() {
        let mut state = state_with("Road Trip", &["a", "b"]);
        state.select("Road Trip");
        state.rename_selected(" Drive ").expect("rename");
        assert_eq!(state.selected(), Some("Drive"));
        assert_eq!(state.selected_tracks().len(), 2);
    }

    #[test]
    fn track_edits_apply_to_the_selected_playlist() {
        let mut state = state_with("Road Trip", &["a", "b"]);
        assert!(state.add_to_selected(Track::new("x", "x", 1)).is_err());

        state.select("Road Trip");
        assert_eq!(state.add_to_selected(Track::new("c", "c", 60)), Ok(3));
        let removed = state.remove_from_selected(0).expect("remove first");
        assert_eq!(removed.title, "a");
        assert_eq!(
            state.remove_from_selected(9),
            Err(PlaylistError::TrackIndexOutOfRange {
                name: "Road Trip".to_string(),
                index: 9,
            })
        );
        let titles: Vec<_> = state.selected_tracks().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn player_props_need_a_non_empty_playlist() {
        let mut state = state_with("Road Trip", &["a"]);
        state.create("Empty").expect("create");

        assert_eq!(state.player_props("Empty"), None);
        assert_eq!(state.player_props("Missing"), None);
        assert_eq!(
            state.player_props("Road Trip"),
            Some(json!({
                "playlist": [{ "video_id": "id-a", "title": "a", "duration_secs": 180 }],
                "current_index": 0,
            }))
        );
    }

    #[test]
    fn reload_drops_a_selection_that_no_longer_exists() {
        let mut state = state_with("Road Trip", &[]);
        state.select("Road Trip");
        state.replace_library(PlaylistLibrary::default());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn durations_accept_minutes_or_seconds() {
        assert_eq!(parse_duration("3:05"), Some(185));
        assert_eq!(parse_duration("240"), Some(240));
        assert_eq!(parse_duration(""), Some(0));
        assert_eq!(parse_duration("1:75"), None);
        assert_eq!(parse_duration("soon"), None);
    }

    #[test]
    fn track_form_defaults_the_title_to_the_video_id() {
        assert_eq!(
            track_from_form(" dQw4 ", "", "3:33"),
            Ok(Track::new("dQw4", "dQw4", 213))
        );
        assert!(track_from_form("", "Song", "1:00").is_err());
        assert!(track_from_form("id", "Song", "x").is_err());
    }
}
