// Nash Sonata music generator
//
// Turns a two-player game into music. Every strategy pairing of the payoff
// matrix is played as a short progression per player, chosen by the
// strategies and colored by who won the cell; after the sweep, every pure
// Nash equilibrium found along the way is replayed as arpeggios. The result
// is a single-track MIDI file per game.
//
// Architecture:
// - scale.rs: major/minor scales as degree -> pitch functions, octave folding
// - chord.rs: triads, block chords, quiet echoes and arpeggiated spreads
// - timeline.rs: `NoteEvent` and the `RenderContext` cursor + event buffer
// - progression.rs: `OutcomeRenderer` contract and the `Progression` renderers
// - driver.rs: sweep/replay state machine driving solver and renderers
// - games.rs: the bundled games (prisoner's dilemma, chicken, rock-paper-
//   scissors) and the `BundledGame` registry
// - midi.rs: SMF encoding and file output
// - config.rs: `RenderConfig` (resolution, tempo, output directory)
// - error.rs: `MusicError`
//
// Game definitions and the equilibrium solver live in `nash_sonata_game`.
// Output is fully deterministic: the same game always renders the same bytes.

pub mod chord;
pub mod config;
pub mod driver;
pub mod error;
pub mod games;
pub mod midi;
pub mod progression;
pub mod scale;
pub mod timeline;

pub use error::MusicError;
