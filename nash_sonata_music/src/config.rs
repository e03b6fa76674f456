// Output configuration for rendered games.
//
// `RenderConfig` holds the few knobs of the MIDI output: resolution, tempo,
// where files go and whether the track is named. It loads from JSON; any
// field missing from the file keeps its default, so `{}` is a valid config.
//
// The musical content itself (scales, chords, durations in ticks) is fixed
// and not configurable. Changing `ticks_per_beat` therefore changes how long
// the rendered durations last, not the durations themselves: at the default
// 128 a 256-tick chord is two beats.

use crate::error::MusicError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// MIDI resolution (pulses per quarter note).
    pub ticks_per_beat: u16,
    /// Quarter notes per minute, written as a tempo meta event.
    pub tempo_bpm: u16,
    /// Directory the per-game `.mid` files are written to.
    pub output_dir: PathBuf,
    /// Write the game's title as the track name.
    pub track_name: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            ticks_per_beat: 128,
            tempo_bpm: 120,
            output_dir: PathBuf::from("."),
            track_name: true,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MusicError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(json: &str) -> Result<Self, MusicError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Microseconds per quarter note for the tempo meta event, clamped to
    /// the 24 bits the event can hold.
    pub fn tempo_micros(&self) -> u32 {
        (60_000_000 / u32::from(self.tempo_bpm.max(1))).min(0x00FF_FFFF)
    }
}
