// Triads and the ways they are played.
//
// A triad is built from scale degrees root, root+2, root+4, each folded into
// the scale's reference octave. It can be written to the timeline as:
//
// - a block chord: every member starts at the cursor with the same duration,
//   then the cursor moves past it
// - a spread: four back-to-back quarter-length notes on members 0, 2, 1, 2
//   (root, fifth, third, fifth), used to mark equilibrium replays
//
// A chord with an explicit velocity only applies it to the first member; the
// others sound at the default velocity. `quiet_chord` relies on that for its
// soft echo.

use crate::scale::Scale;
use crate::timeline::{DEFAULT_VELOCITY, RenderContext};

/// Velocity of the first note of an echo chord.
pub const QUIET_VELOCITY: u8 = 30;

/// Root, third and fifth pitches.
pub type Triad = [i32; 3];

/// Triad on scale degree `root`.
pub fn triad(root: i32, scale: &Scale) -> Triad {
    [
        scale.degree(root, true),
        scale.degree(root + 2, true),
        scale.degree(root + 4, true),
    ]
}

/// Block chord at the default velocity.
pub fn chord(ctx: &mut RenderContext, notes: &Triad, duration: u32) {
    chord_with_velocity(ctx, notes, duration, DEFAULT_VELOCITY);
}

/// Block chord whose first note sounds at `velocity`.
pub fn chord_with_velocity(ctx: &mut RenderContext, notes: &Triad, duration: u32, velocity: u8) {
    for (i, &pitch) in notes.iter().enumerate() {
        let v = if i == 0 { velocity } else { DEFAULT_VELOCITY };
        ctx.push(pitch, 0, duration, v);
    }
    ctx.advance(duration);
}

/// Soft echo of a chord.
pub fn quiet_chord(ctx: &mut RenderContext, notes: &Triad, duration: u32) {
    chord_with_velocity(ctx, notes, duration, QUIET_VELOCITY);
}

/// Arpeggiate a triad over `duration` ticks as root, fifth, third, fifth.
///
/// Each step is `duration / 4` long; the last one takes any remainder so the
/// cursor always ends exactly `duration` later.
pub fn spread(ctx: &mut RenderContext, notes: &Triad, duration: u32) {
    let step = duration / 4;
    let pattern = [notes[0], notes[2], notes[1], notes[2]];
    for (i, &pitch) in pattern.iter().enumerate() {
        let length = if i == pattern.len() - 1 {
            duration - step * 3
        } else {
            step
        };
        note(ctx, pitch, length, 0);
    }
}

/// A single note after a rest of `delay` ticks.
pub fn note(ctx: &mut RenderContext, pitch: i32, duration: u32, delay: u32) {
    ctx.push(pitch, delay, duration, DEFAULT_VELOCITY);
    ctx.advance(delay + duration);
}
