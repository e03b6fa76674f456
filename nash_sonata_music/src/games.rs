// The bundled games and their musical bindings.
//
// Three classic two-player games, each with its own strategy enum, payoff
// table and per-role progressions:
//
// - Prisoner's dilemma: cooperating plays a minor cadence, defecting a major
//   one; player 1 on C, player 2 on A.
// - Chicken: each strategy picks a pair of C-major triads; player 1's second
//   triad is split into two halves.
// - Rock-paper-scissors: each hand picks a root degree; player 1 on C,
//   player 2 on A, major or minor by who came out ahead.
//
// Each game is available as a bare matrix (computation only) or with its
// renderers attached. `BundledGame` names the three for the CLI and erases
// their strategy types into a `GameReport`.

use crate::config::RenderConfig;
use crate::driver::{Invocations, perform};
use crate::error::MusicError;
use crate::midi::write_midi;
use crate::progression::Progression;
use crate::scale::{Degree, NOTE_A, NOTE_C, Scale};
use crate::timeline::NoteEvent;
use nash_sonata_game::{GameDefinition, GameError, RoleBinding, Strategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Prisoner's dilemma
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dilemma {
    Cooperate,
    Defect,
}

impl Dilemma {
    pub const ALL: [Dilemma; 2] = [Dilemma::Cooperate, Dilemma::Defect];
}

impl fmt::Display for Dilemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dilemma::Cooperate => write!(f, "cooperate"),
            Dilemma::Defect => write!(f, "defect"),
        }
    }
}

impl Strategy for Dilemma {}

pub fn prisoners_dilemma_matrix() -> Result<GameDefinition<Dilemma, Progression>, GameError> {
    use Dilemma::*;
    GameDefinition::new(
        BundledGame::PrisonersDilemma.title(),
        Dilemma::ALL.to_vec(),
        [
            ((Cooperate, Cooperate), (-1, -1)),
            ((Cooperate, Defect), (-10, 0)),
            ((Defect, Cooperate), (0, -10)),
            ((Defect, Defect), (-5, -5)),
        ],
    )
}

fn prisoners_dilemma_renderers() -> [(Dilemma, RoleBinding<Progression>); 2] {
    let cadence = |scale| Progression::Cadence { scale };
    [
        (
            Dilemma::Cooperate,
            RoleBinding::new(
                cadence(Scale::minor(NOTE_C)),
                cadence(Scale::minor(NOTE_A)),
            ),
        ),
        (
            Dilemma::Defect,
            RoleBinding::new(
                cadence(Scale::major(NOTE_C)),
                cadence(Scale::major(NOTE_A)),
            ),
        ),
    ]
}

pub fn prisoners_dilemma() -> Result<GameDefinition<Dilemma, Progression>, GameError> {
    prisoners_dilemma_matrix()?.with_renderers(prisoners_dilemma_renderers())
}

// ---------------------------------------------------------------------------
// Chicken
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chicken {
    Flight,
    Fight,
}

impl Chicken {
    pub const ALL: [Chicken; 2] = [Chicken::Flight, Chicken::Fight];
}

impl fmt::Display for Chicken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chicken::Flight => write!(f, "flight"),
            Chicken::Fight => write!(f, "fight"),
        }
    }
}

impl Strategy for Chicken {}

pub fn chicken_matrix() -> Result<GameDefinition<Chicken, Progression>, GameError> {
    use Chicken::*;
    GameDefinition::new(
        BundledGame::Chicken.title(),
        Chicken::ALL.to_vec(),
        [
            ((Flight, Flight), (0, 0)),
            ((Flight, Fight), (-1, 1)),
            ((Fight, Flight), (1, -1)),
            ((Fight, Fight), (-10, -10)),
        ],
    )
}

fn chicken_renderers() -> [(Chicken, RoleBinding<Progression>); 2] {
    let alternation = |first, second, split| Progression::Alternation {
        first,
        second,
        split,
    };
    [
        (
            Chicken::Flight,
            RoleBinding::new(
                alternation(Degree::Submediant, Degree::Subdominant, true),
                alternation(Degree::Supertonic, Degree::Tonic, false),
            ),
        ),
        (
            Chicken::Fight,
            RoleBinding::new(
                alternation(Degree::Subdominant, Degree::Dominant, true),
                alternation(Degree::Mediant, Degree::Supertonic, false),
            ),
        ),
    ]
}

pub fn chicken() -> Result<GameDefinition<Chicken, Progression>, GameError> {
    chicken_matrix()?.with_renderers(chicken_renderers())
}

// ---------------------------------------------------------------------------
// Rock-paper-scissors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Paper,
    Scissors,
    Rock,
}

impl Hand {
    /// Sweep order: paper, scissors, rock.
    pub const ALL: [Hand; 3] = [Hand::Paper, Hand::Scissors, Hand::Rock];

    /// The degree this hand's triad is built on.
    pub fn root(self) -> Degree {
        match self {
            Hand::Paper => Degree::Subdominant,
            Hand::Scissors => Degree::Dominant,
            Hand::Rock => Degree::Tonic,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Paper => write!(f, "paper"),
            Hand::Scissors => write!(f, "scissors"),
            Hand::Rock => write!(f, "rock"),
        }
    }
}

impl Strategy for Hand {}

pub fn rock_paper_scissors_matrix() -> Result<GameDefinition<Hand, Progression>, GameError> {
    use Hand::*;
    GameDefinition::new(
        BundledGame::RockPaperScissors.title(),
        Hand::ALL.to_vec(),
        [
            ((Paper, Paper), (0, 0)),
            ((Paper, Scissors), (-1, 1)),
            ((Paper, Rock), (1, -1)),
            ((Scissors, Paper), (1, -1)),
            ((Scissors, Scissors), (0, 0)),
            ((Scissors, Rock), (-1, 1)),
            ((Rock, Paper), (-1, 1)),
            ((Rock, Scissors), (1, -1)),
            ((Rock, Rock), (0, 0)),
        ],
    )
}

fn rock_paper_scissors_renderers() -> [(Hand, RoleBinding<Progression>); 3] {
    Hand::ALL.map(|hand| {
        let skirmish = |tonic| Progression::Skirmish {
            root: hand.root(),
            tonic,
        };
        (hand, RoleBinding::new(skirmish(NOTE_C), skirmish(NOTE_A)))
    })
}

pub fn rock_paper_scissors() -> Result<GameDefinition<Hand, Progression>, GameError> {
    rock_paper_scissors_matrix()?.with_renderers(rock_paper_scissors_renderers())
}

// ---------------------------------------------------------------------------
// Bundled game registry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BundledGame {
    PrisonersDilemma,
    Chicken,
    RockPaperScissors,
}

impl BundledGame {
    pub const ALL: [BundledGame; 3] = [
        BundledGame::PrisonersDilemma,
        BundledGame::Chicken,
        BundledGame::RockPaperScissors,
    ];

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            BundledGame::PrisonersDilemma => "prisoners",
            BundledGame::Chicken => "chicken",
            BundledGame::RockPaperScissors => "rps",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BundledGame::PrisonersDilemma => "Prisoner's Dilemma",
            BundledGame::Chicken => "Chicken",
            BundledGame::RockPaperScissors => "Rock Paper Scissors",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            BundledGame::PrisonersDilemma => "prisoners.mid",
            BundledGame::Chicken => "chicken.mid",
            BundledGame::RockPaperScissors => "psr.mid",
        }
    }

    /// Solve and render the game. With `solve_only`, the game is run without
    /// renderers and the report has no events.
    pub fn perform(self, solve_only: bool) -> Result<GameReport, MusicError> {
        match self {
            BundledGame::PrisonersDilemma => run(
                self,
                prisoners_dilemma_matrix()?,
                prisoners_dilemma_renderers(),
                solve_only,
            ),
            BundledGame::Chicken => run(self, chicken_matrix()?, chicken_renderers(), solve_only),
            BundledGame::RockPaperScissors => run(
                self,
                rock_paper_scissors_matrix()?,
                rock_paper_scissors_renderers(),
                solve_only,
            ),
        }
    }
}

impl FromStr for BundledGame {
    type Err = MusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        BundledGame::ALL
            .into_iter()
            .find(|g| g.name() == name)
            .ok_or(MusicError::UnknownGame(s.to_string()))
    }
}

fn run<S: Strategy, const N: usize>(
    game: BundledGame,
    matrix: GameDefinition<S, Progression>,
    renderers: [(S, RoleBinding<Progression>); N],
    solve_only: bool,
) -> Result<GameReport, MusicError> {
    let definition = if solve_only {
        matrix
    } else {
        matrix.with_renderers(renderers)?
    };
    let performance = perform(&definition);
    Ok(GameReport {
        game,
        equilibria: performance
            .equilibria
            .iter()
            .map(|e| (e.player1.to_string(), e.player2.to_string()))
            .collect(),
        events: performance.events,
        invocations: performance.invocations,
    })
}

/// The outcome of one bundled game run, with strategies as labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game: BundledGame,
    /// (player 1, player 2) labels in discovery order.
    pub equilibria: Vec<(String, String)>,
    pub events: Vec<NoteEvent>,
    pub invocations: Invocations,
}

impl GameReport {
    /// Where this report's MIDI file goes under `config`.
    pub fn output_path(&self, config: &RenderConfig) -> PathBuf {
        config.output_dir.join(self.game.file_name())
    }

    /// Write the timeline as a MIDI file. Returns the path written.
    pub fn write_midi(&self, config: &RenderConfig) -> Result<PathBuf, MusicError> {
        let path = self.output_path(config);
        write_midi(&self.events, self.game.title(), config, &path)?;
        log::debug!("wrote {} ({} notes)", path.display(), self.events.len());
        Ok(path)
    }
}
