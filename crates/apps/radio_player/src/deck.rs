use platform_host::Track;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RadioPlayerProps {
    #[serde(default)]
    pub(crate) playlist: Vec<Track>,
    #[serde(default)]
    pub(crate) current_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PlaybackDeck {
    tracks: Vec<Track>,
    current: usize,
    playing: bool,
    position_secs: u32,
}

impl PlaybackDeck {
    pub(crate) fn new(tracks: Vec<Track>, start_index: usize) -> Self {
        let current = if start_index < tracks.len() {
            start_index
        } else {
            0
        };
        Self {
            tracks,
            current,
            playing: false,
            position_secs: 0,
        }
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current
    }

    pub(crate) fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn position_secs(&self) -> u32 {
        self.position_secs
    }

    pub(crate) fn duration_secs(&self) -> u32 {
        self.current_track().map_or(0, |track| track.duration_secs)
    }

    pub(crate) fn now_playing_text(&self) -> String {
        match self.current_track() {
            Some(track) => format!("Now Playing: {}", track.title),
            None => "Now Playing: nothing queued".to_string(),
        }
    }

    pub(crate) fn toggle_play(&mut self) {
        self.playing = !self.playing && !self.tracks.is_empty();
    }

    pub(crate) fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.jump_to((self.current + 1) % self.tracks.len());
    }

    pub(crate) fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let len = self.tracks.len();
        self.jump_to((self.current + len - 1) % len);
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.jump_to(index);
        }
    }

    pub(crate) fn seek(&mut self, secs: u32) {
        self.position_secs = secs.min(self.duration_secs());
    }

    /// One second of playback. Tracks without a known length never end on their own.
    pub(crate) fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.position_secs = self.position_secs.saturating_add(1);
        let duration = self.duration_secs();
        if duration > 0 && self.position_secs >= duration {
            self.track_ended();
        }
    }

    /// Advances past a finished track; the last track stays selected and stops.
    pub(crate) fn track_ended(&mut self) {
        if self.current + 1 < self.tracks.len() {
            self.jump_to(self.current + 1);
        } else {
            self.position_secs = self.duration_secs();
            self.playing = false;
        }
    }

    fn jump_to(&mut self, index: usize) {
        self.current = index;
        self.position_secs = 0;
    }
}

pub(crate) fn format_position(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
