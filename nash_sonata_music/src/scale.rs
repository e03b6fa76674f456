// Diatonic scales as functions from scale degree to MIDI pitch.
//
// A `Scale` is a root pitch plus a 7-step semitone pattern. Degree 0 is the
// root; positive degrees walk up the pattern, negative degrees walk down it
// starting from the last step. Both qualities come from the same generator,
// only the step pattern differs.
//
// Octave wrapping folds a pitch back towards a reference octave anchored at
// or just below the root: `base = floor((root - 24) / 12) * 12 + 24`, then
// `base + (pitch - base) rem 12`. The remainder is truncated, not Euclidean,
// so a pitch that fell below the base stays below it. Chord building always
// wraps (triads stay compact); single melody notes do not.
//
// Used by chord.rs for triads and by progression.rs for grace notes.

use serde::{Deserialize, Serialize};

/// Middle C.
pub const NOTE_C: i32 = 60;
/// The A above middle C.
pub const NOTE_A: i32 = 69;

/// Scale quality, defined by its step pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// W W H W W W H
    Major,
    /// Natural minor: W H W W H W W
    Minor,
}

impl Quality {
    /// Semitone steps between consecutive degrees; sums to 12.
    pub fn steps(self) -> [i32; 7] {
        match self {
            Quality::Major => [2, 2, 1, 2, 2, 2, 1],
            Quality::Minor => [2, 1, 2, 2, 1, 2, 2],
        }
    }
}

/// Named scale degrees, counted from 0 at the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    Tonic = 0,
    Supertonic = 1,
    Mediant = 2,
    Subdominant = 3,
    Dominant = 4,
    Submediant = 5,
    Leading = 6,
}

impl Degree {
    pub fn offset(self) -> i32 {
        self as i32
    }
}

/// A diatonic scale on a fixed root pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub quality: Quality,
    /// MIDI pitch of degree 0.
    pub root: i32,
}

impl Scale {
    pub fn new(quality: Quality, root: i32) -> Self {
        Scale { quality, root }
    }

    pub fn major(root: i32) -> Self {
        Scale::new(Quality::Major, root)
    }

    pub fn minor(root: i32) -> Self {
        Scale::new(Quality::Minor, root)
    }

    /// Semitone size of step `n`; the pattern repeats every 7 steps in both
    /// directions, so step -1 is the last entry.
    fn step(&self, n: i32) -> i32 {
        self.quality.steps()[n.rem_euclid(7) as usize]
    }

    /// Lowest pitch of the reference octave used by wrapping.
    pub fn octave_base(&self) -> i32 {
        (self.root - 24).div_euclid(12) * 12 + 24
    }

    /// Pitch of scale degree `index`, optionally folded into the reference
    /// octave.
    pub fn degree(&self, index: i32, octave_wrap: bool) -> i32 {
        let mut pitch = self.root;
        if index >= 0 {
            for i in 0..index {
                pitch += self.step(i);
            }
        } else {
            for i in (index..=-1).rev() {
                pitch -= self.step(i);
            }
        }

        if octave_wrap {
            let base = self.octave_base();
            pitch = base + (pitch - base) % 12;
        }
        pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_span_one_octave() {
        assert_eq!(Quality::Major.steps().iter().sum::<i32>(), 12);
        assert_eq!(Quality::Minor.steps().iter().sum::<i32>(), 12);
    }

    #[test]
    fn c_major_degrees() {
        let scale = Scale::major(NOTE_C);
        let pitches: Vec<i32> = (0..8).map(|d| scale.degree(d, false)).collect();
        // C D E F G A B C
        assert_eq!(pitches, vec![60, 62, 64, 65, 67, 69, 71, 72]);
    }

    #[test]
    fn a_minor_degrees() {
        let scale = Scale::minor(NOTE_A);
        let pitches: Vec<i32> = (0..8).map(|d| scale.degree(d, false)).collect();
        // A B C D E F G A
        assert_eq!(pitches, vec![69, 71, 72, 74, 76, 77, 79, 81]);
    }

    #[test]
    fn negative_degrees_walk_down_from_the_last_step() {
        let scale = Scale::major(NOTE_C);
        assert_eq!(scale.degree(-1, false), 59); // B below
        assert_eq!(scale.degree(-3, false), 55); // G below
        assert_eq!(scale.degree(-7, false), 48);

        let minor = Scale::minor(NOTE_A);
        assert_eq!(minor.degree(-1, false), 67); // G
    }

    #[test]
    fn up_then_down_returns_to_the_root() {
        for scale in [Scale::major(NOTE_C), Scale::minor(NOTE_A), Scale::major(53)] {
            for n in -14..=14 {
                // Seven steps in either direction is exactly one octave.
                assert_eq!(scale.degree(n + 7, false) - scale.degree(n, false), 12);
            }
            assert_eq!(scale.degree(7, false) - 12, scale.root);
            assert_eq!(scale.degree(-7, false) + 12, scale.root);
        }
    }

    #[test]
    fn degree_zero_with_wrap_is_the_root() {
        for root in 24..=108 {
            assert_eq!(Scale::major(root).degree(0, true), root);
            assert_eq!(Scale::minor(root).degree(0, true), root);
        }
    }

    #[test]
    fn wrapping_folds_into_the_reference_octave() {
        let scale = Scale::major(NOTE_C);
        assert_eq!(scale.octave_base(), 60);
        // A above the octave: E5 (76) folds to E4 (64)
        assert_eq!(scale.degree(9, false), 76);
        assert_eq!(scale.degree(9, true), 64);

        // Minor on A anchors at C, so E5 folds down to E4.
        let minor = Scale::minor(NOTE_A);
        assert_eq!(minor.octave_base(), 60);
        assert_eq!(minor.degree(4, true), 64);
    }

    #[test]
    fn wrap_keeps_pitches_below_the_base() {
        // Truncated remainder: B3 (59) is 1 below the base and stays there.
        let scale = Scale::major(NOTE_C);
        assert_eq!(scale.degree(-1, true), 59);
    }
}
