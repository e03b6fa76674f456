// Outcome renderers: what each strategy sounds like.
//
// The driver calls one renderer per player for every matrix cell it visits,
// and again for every equilibrium during the replay. A renderer sees only an
// `OutcomeContext` (replay or not, first/last cell, whether its player came
// out ahead) and writes to the `RenderContext`; it keeps no state of its own.
//
// `Progression` is the closed set of renderers used by the bundled games:
//
// - `Cadence` (prisoner's dilemma): I V vi IV I as block chords in the
//   strategy's scale; on replay, I V vi IV arpeggiated
// - `Alternation` (chicken): two triads in C major, the second one optionally
//   split into two halves; block chords normally, arpeggios on replay
// - `Skirmish` (rock-paper-scissors): a grace note below the root, a triad
//   and a soft echo, in major when the player came out ahead and minor
//   otherwise; the first and last cells of the sweep are shaped differently
//
// See driver.rs for when each flag is set.

use crate::chord::{Triad, chord, note, quiet_chord, spread, triad};
use crate::scale::{Degree, NOTE_C, Scale};
use crate::timeline::RenderContext;
use serde::{Deserialize, Serialize};

/// Whole-cadence chord length in ticks (two beats).
const LONG: u32 = 256;
/// Half-length chord.
const SHORT: u32 = 128;

/// What a renderer knows about the cell it is rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomeContext {
    /// Set while replaying discovered equilibria after the sweep.
    pub equilibrium_replay: bool,
    /// First cell of the sweep (only ever set for player 1).
    pub first_cell: bool,
    /// Last cell of the sweep (only ever set for player 2).
    pub last_cell: bool,
    /// This player's payoff is at least the opponent's.
    pub dominates: bool,
}

impl OutcomeContext {
    /// Context for an equilibrium replay: every other flag is cleared.
    pub fn replay() -> Self {
        OutcomeContext {
            equilibrium_replay: true,
            ..Default::default()
        }
    }
}

/// Renders one player's side of an outcome onto the timeline.
pub trait OutcomeRenderer {
    fn render(&self, ctx: &mut RenderContext, outcome: OutcomeContext);
}

/// The renderers used by the bundled games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progression {
    /// I V vi IV I in a fixed scale.
    Cadence { scale: Scale },
    /// `first` then `second` in C major; `split` plays `second` as two
    /// half-length chords.
    Alternation {
        first: Degree,
        second: Degree,
        split: bool,
    },
    /// Grace note, triad on `root`, echo. Major on `tonic` when the player
    /// dominates, minor otherwise.
    Skirmish { root: Degree, tonic: i32 },
}

impl OutcomeRenderer for Progression {
    fn render(&self, ctx: &mut RenderContext, outcome: OutcomeContext) {
        match *self {
            Progression::Cadence { scale } => cadence(ctx, &scale, outcome),
            Progression::Alternation {
                first,
                second,
                split,
            } => alternation(ctx, first, second, split, outcome),
            Progression::Skirmish { root, tonic } => skirmish(ctx, root, tonic, outcome),
        }
    }
}

fn cadence(ctx: &mut RenderContext, scale: &Scale, outcome: OutcomeContext) {
    let chord_on = |degree: Degree| triad(degree.offset(), scale);
    if outcome.equilibrium_replay {
        for degree in [
            Degree::Tonic,
            Degree::Dominant,
            Degree::Submediant,
            Degree::Subdominant,
        ] {
            spread(ctx, &chord_on(degree), LONG);
        }
    } else {
        chord(ctx, &chord_on(Degree::Tonic), LONG);
        chord(ctx, &chord_on(Degree::Dominant), SHORT);
        chord(ctx, &chord_on(Degree::Submediant), SHORT);
        chord(ctx, &chord_on(Degree::Subdominant), LONG);
        chord(ctx, &chord_on(Degree::Tonic), LONG);
    }
}

fn alternation(
    ctx: &mut RenderContext,
    first: Degree,
    second: Degree,
    split: bool,
    outcome: OutcomeContext,
) {
    let scale = Scale::major(NOTE_C);
    let play: fn(&mut RenderContext, &Triad, u32) = if outcome.equilibrium_replay {
        spread
    } else {
        chord
    };

    play(ctx, &triad(first.offset(), &scale), LONG);
    let second = triad(second.offset(), &scale);
    if split {
        play(ctx, &second, SHORT);
        play(ctx, &second, SHORT);
    } else {
        play(ctx, &second, LONG);
    }
}

fn skirmish(ctx: &mut RenderContext, root: Degree, tonic: i32, outcome: OutcomeContext) {
    const GRACE: u32 = 64;
    const BREATH: u32 = 48;

    let scale = if outcome.dominates {
        Scale::major(tonic)
    } else {
        Scale::minor(tonic)
    };
    let root = root.offset();
    let grace = scale.degree(root - 1, false);
    let notes = triad(root, &scale);

    if outcome.last_cell {
        note(ctx, grace, GRACE, BREATH);
        chord(ctx, &notes, 192);
    } else if outcome.first_cell {
        note(ctx, grace, GRACE, 0);
        chord(ctx, &notes, 96);
        quiet_chord(ctx, &notes, 48);
    } else {
        note(ctx, grace, GRACE, BREATH);
        chord(ctx, &notes, 96);
        quiet_chord(ctx, &notes, 48);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::QUIET_VELOCITY;
    use crate::scale::NOTE_A;

    fn render(progression: Progression, outcome: OutcomeContext) -> RenderContext {
        let mut ctx = RenderContext::new();
        progression.render(&mut ctx, outcome);
        ctx
    }

    #[test]
    fn cadence_plays_five_block_chords() {
        let ctx = render(
            Progression::Cadence {
                scale: Scale::minor(NOTE_C),
            },
            OutcomeContext::default(),
        );
        assert_eq!(ctx.events().len(), 15);
        assert_eq!(ctx.cursor(), 256 + 128 + 128 + 256 + 256);
        // C minor tonic triad: C Eb G
        let first: Vec<i32> = ctx.events()[..3].iter().map(|e| e.pitch).collect();
        assert_eq!(first, vec![60, 63, 67]);
    }

    #[test]
    fn cadence_replay_arpeggiates_four_chords() {
        let ctx = render(
            Progression::Cadence {
                scale: Scale::major(NOTE_A),
            },
            OutcomeContext::replay(),
        );
        assert_eq!(ctx.events().len(), 16);
        assert_eq!(ctx.cursor(), 4 * 256);
    }

    #[test]
    fn alternation_split_repeats_the_second_chord() {
        let split = Progression::Alternation {
            first: Degree::Submediant,
            second: Degree::Subdominant,
            split: true,
        };
        let ctx = render(split, OutcomeContext::default());
        assert_eq!(ctx.events().len(), 9);
        assert_eq!(ctx.cursor(), 512);
        assert_eq!(ctx.events()[3].start, 256);
        assert_eq!(ctx.events()[6].start, 384);

        let replay = render(split, OutcomeContext::replay());
        assert_eq!(replay.events().len(), 12);
        assert_eq!(replay.cursor(), 512);
    }

    #[test]
    fn alternation_unsplit_holds_the_second_chord() {
        let ctx = render(
            Progression::Alternation {
                first: Degree::Supertonic,
                second: Degree::Tonic,
                split: false,
            },
            OutcomeContext::default(),
        );
        assert_eq!(ctx.events().len(), 6);
        assert_eq!(ctx.events()[3].duration, 256);
    }

    #[test]
    fn skirmish_quality_follows_dominance() {
        let skirmish = Progression::Skirmish {
            root: Degree::Tonic,
            tonic: NOTE_C,
        };
        let won = render(
            skirmish,
            OutcomeContext {
                dominates: true,
                ..Default::default()
            },
        );
        let lost = render(skirmish, OutcomeContext::default());
        // Triad third: E in major, Eb in minor.
        assert_eq!(won.events()[2].pitch, 64);
        assert_eq!(lost.events()[2].pitch, 63);
        // Grace note a step below the root: B in major, Bb in minor.
        assert_eq!(won.events()[0].pitch, 59);
        assert_eq!(lost.events()[0].pitch, 58);
    }

    #[test]
    fn skirmish_middle_cell_breathes_then_echoes() {
        let ctx = render(
            Progression::Skirmish {
                root: Degree::Dominant,
                tonic: NOTE_A,
            },
            OutcomeContext::default(),
        );
        let events = ctx.events();
        assert_eq!(events.len(), 7);
        assert_eq!(events[0].start, 48);
        assert_eq!(events[1].start, 112);
        assert_eq!(events[4].start, 208);
        assert_eq!(events[4].velocity, QUIET_VELOCITY);
        assert_eq!(ctx.cursor(), 48 + 64 + 96 + 48);
    }

    #[test]
    fn skirmish_first_cell_starts_without_a_rest() {
        let ctx = render(
            Progression::Skirmish {
                root: Degree::Subdominant,
                tonic: NOTE_C,
            },
            OutcomeContext {
                first_cell: true,
                ..Default::default()
            },
        );
        assert_eq!(ctx.events()[0].start, 0);
        assert_eq!(ctx.events().len(), 7);
        assert_eq!(ctx.cursor(), 64 + 96 + 48);
    }

    #[test]
    fn skirmish_last_cell_holds_without_echo() {
        let ctx = render(
            Progression::Skirmish {
                root: Degree::Tonic,
                tonic: NOTE_A,
            },
            OutcomeContext {
                last_cell: true,
                ..Default::default()
            },
        );
        let events = ctx.events();
        assert_eq!(events.len(), 4);
        assert!(events[1..].iter().all(|e| e.duration == 192));
        assert_eq!(ctx.cursor(), 48 + 64 + 192);
    }
}
