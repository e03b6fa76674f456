// Errors for rendering, encoding and writing games.
//
// Game construction errors come from `nash_sonata_game` and are wrapped as
// they are. The encoder refuses values MIDI cannot hold instead of
// truncating them, and I/O failures from writing output are passed through
// to the caller without retrying.

use nash_sonata_game::GameError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MusicError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("pitch {pitch} at tick {tick} is outside the MIDI range 0..=127")]
    PitchOutOfRange { pitch: i32, tick: u32 },

    #[error("velocity {velocity} at tick {tick} is above 127")]
    VelocityOutOfRange { velocity: u8, tick: u32 },

    #[error("channel {channel} at tick {tick} is outside the MIDI range 0..=15")]
    ChannelOutOfRange { channel: u8, tick: u32 },

    /// MIDI resolution must be between 1 and 32767 ticks per quarter note.
    #[error("{ticks_per_beat} ticks per beat is outside the MIDI range 1..=32767")]
    ResolutionOutOfRange { ticks_per_beat: u16 },

    /// The timeline is longer than a MIDI delta time can express.
    #[error("tick {tick} is beyond the MIDI time range")]
    TickOutOfRange { tick: u32 },

    #[error("unknown game `{0}` (expected one of: prisoners, chicken, rps)")]
    UnknownGame(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
