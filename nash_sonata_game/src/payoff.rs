// Payoffs and the dense payoff matrix.
//
// The matrix is stored row-major as a flat `Vec<Payoff>` indexed by strategy
// position: `cells[row * n + column]`. It is built from explicit
// `((row, column), payoff)` entries and must cover the full cross product of
// the strategy list, so lookups by position can never miss.

use crate::error::GameError;
use crate::strategy::{Role, Strategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The payoff pair for one cell of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payoff {
    pub player1: i32,
    pub player2: i32,
}

impl Payoff {
    pub const fn new(player1: i32, player2: i32) -> Self {
        Payoff { player1, player2 }
    }

    /// The payoff received by `role`.
    pub fn of(self, role: Role) -> i32 {
        match role {
            Role::Player1 => self.player1,
            Role::Player2 => self.player2,
        }
    }

    /// True when `role` did at least as well as the opponent in this cell.
    /// Both players "dominate" a cell with equal payoffs.
    pub fn dominates(self, role: Role) -> bool {
        self.of(role) >= self.of(role.opponent())
    }
}

impl From<(i32, i32)> for Payoff {
    fn from((player1, player2): (i32, i32)) -> Self {
        Payoff { player1, player2 }
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.player1, self.player2)
    }
}

/// A total n×n payoff table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredMatrix")]
pub struct PayoffMatrix {
    size: usize,
    cells: Vec<Payoff>,
}

/// Serialized form of a matrix, checked before it becomes a `PayoffMatrix`.
#[derive(Deserialize)]
struct StoredMatrix {
    size: usize,
    cells: Vec<Payoff>,
}

impl TryFrom<StoredMatrix> for PayoffMatrix {
    type Error = GameError;

    fn try_from(stored: StoredMatrix) -> Result<Self, GameError> {
        if stored.size.checked_mul(stored.size) != Some(stored.cells.len()) {
            return Err(GameError::MalformedMatrix {
                size: stored.size,
                cells: stored.cells.len(),
            });
        }
        Ok(PayoffMatrix {
            size: stored.size,
            cells: stored.cells,
        })
    }
}

impl PayoffMatrix {
    /// Build the matrix for `strategies` from explicit cell entries.
    ///
    /// Fails if an entry names a strategy that is not in the list, or if any
    /// (row, column) pair is left without a payoff. A pair given twice keeps
    /// the later entry.
    pub fn from_entries<S, I, P>(
        game: &str,
        strategies: &[S],
        entries: I,
    ) -> Result<Self, GameError>
    where
        S: Strategy,
        I: IntoIterator<Item = ((S, S), P)>,
        P: Into<Payoff>,
    {
        let size = strategies.len();
        let position = |s: S| {
            strategies
                .iter()
                .position(|&t| t == s)
                .ok_or_else(|| GameError::UnknownStrategy {
                    game: game.to_string(),
                    strategy: s.to_string(),
                })
        };

        let mut slots: Vec<Option<Payoff>> = vec![None; size * size];
        for ((row, column), payoff) in entries {
            let index = position(row)? * size + position(column)?;
            slots[index] = Some(payoff.into());
        }

        let mut cells = Vec::with_capacity(size * size);
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(payoff) => cells.push(payoff),
                None => {
                    return Err(GameError::MissingPayoff {
                        game: game.to_string(),
                        row: strategies[index / size].to_string(),
                        column: strategies[index % size].to_string(),
                    });
                }
            }
        }

        Ok(PayoffMatrix { size, cells })
    }

    /// Number of strategies per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Payoff at (row, column) by strategy position. Panics if either
    /// position is outside the matrix.
    pub fn get(&self, row: usize, column: usize) -> Payoff {
        assert!(
            row < self.size && column < self.size,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            column,
            self.size,
            self.size
        );
        self.cells[row * self.size + column]
    }

    /// Iterate cells in row-major order as `(row, column, payoff)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Payoff)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &p)| (i / self.size, i % self.size, p))
    }
}
