// The note timeline: a cursor plus an append-only list of note events.
//
// Renderers never touch anything but a `RenderContext`. Each game run builds
// a fresh context, renderers append events and advance the cursor, and the
// finished event list is handed to midi.rs. There is no shared or global
// timeline state between runs.
//
// Times are in ticks at the MIDI encoder's resolution (128 per beat by
// default, so a chord of 256 lasts two beats).

use serde::{Deserialize, Serialize};

/// The single MIDI channel everything is rendered on.
pub const CHANNEL: u8 = 0;

/// Velocity used unless a renderer asks for another one.
pub const DEFAULT_VELOCITY: u8 = 90;

/// One sounding note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteEvent {
    pub channel: u8,
    /// MIDI pitch. Signed because scale arithmetic can leave the MIDI range;
    /// the encoder rejects anything outside 0..=127.
    pub pitch: i32,
    /// Absolute start tick.
    pub start: u32,
    /// Length in ticks.
    pub duration: u32,
    pub velocity: u8,
}

impl NoteEvent {
    /// Tick at which the note is released.
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }
}

/// Mutable rendering state for one game run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    cursor: u32,
    events: Vec<NoteEvent>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current timeline position in ticks.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// Append a note starting `offset` ticks after the cursor. Does not move
    /// the cursor; grouped notes (chords) share one start.
    pub fn push(&mut self, pitch: i32, offset: u32, duration: u32, velocity: u8) {
        self.events.push(NoteEvent {
            channel: CHANNEL,
            pitch,
            start: self.cursor + offset,
            duration,
            velocity,
        });
    }

    /// Move the cursor forward by `ticks`.
    pub fn advance(&mut self, ticks: u32) {
        self.cursor += ticks;
    }

    /// Finish the run and take the events.
    pub fn into_events(self) -> Vec<NoteEvent> {
        self.events
    }
}
