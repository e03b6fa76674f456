// Pure-strategy Nash equilibrium search.
//
// Single pass over the matrix, one row at a time. For row `i` (player 1's
// candidate strategy) the columns are scanned left to right while tracking
// the best payoff to player 2 seen so far in the row:
//
// - a cell that is the first in the row, or strictly beats that running
//   maximum, becomes player 2's tentative best response; the previous row
//   candidate is dropped at this point
// - the tentative cell is then checked from player 1's side: if any other
//   row scores strictly more for player 1 in the same column, it is rejected
// - a cell that only ties the running maximum is never re-examined
//
// At most one equilibrium comes out of each row. With no ties for player 2
// inside a row this is exactly the textbook pure-strategy Nash set; with
// ties, the first tying column decides and a rejected first tie is final.
// `RowScan` exposes the scan one column at a time so the music driver can
// interleave it with rendering; `solve` runs it over the whole matrix.

use crate::game::GameDefinition;
use crate::payoff::{Payoff, PayoffMatrix};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// A strategy pair from which neither player gains by deviating alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equilibrium<S> {
    pub player1: S,
    pub player2: S,
    /// Position of `player1` in the strategy list.
    pub row: usize,
    /// Position of `player2` in the strategy list.
    pub column: usize,
}

impl<S: Strategy> Equilibrium<S> {
    /// The equilibrium at cell (row, column) of `game`.
    pub fn at<R>(game: &GameDefinition<S, R>, row: usize, column: usize) -> Self {
        Equilibrium {
            player1: game.strategy(row),
            player2: game.strategy(column),
            row,
            column,
        }
    }
}

/// Incremental best-response scan of a single row.
#[derive(Debug, Clone)]
pub struct RowScan<'a> {
    payoffs: &'a PayoffMatrix,
    row: usize,
    next_column: usize,
    /// Best payoff to player 2 so far; `None` before the first column.
    max_p2: Option<i32>,
    /// Column of the surviving candidate, if any.
    candidate: Option<usize>,
}

impl<'a> RowScan<'a> {
    pub fn new(payoffs: &'a PayoffMatrix, row: usize) -> Self {
        RowScan {
            payoffs,
            row,
            next_column: 0,
            max_p2: None,
            candidate: None,
        }
    }

    /// Feed the next column of the row to the scan. Returns the cell's payoff.
    ///
    /// Columns must be fed in order, starting from 0.
    pub fn visit(&mut self, column: usize) -> Payoff {
        debug_assert_eq!(column, self.next_column, "columns must be scanned in order");
        self.next_column = column + 1;

        let cell = self.payoffs.get(self.row, column);
        let improves = match self.max_p2 {
            None => true,
            Some(max) => cell.player2 > max,
        };
        if !improves {
            return cell;
        }

        self.max_p2 = Some(cell.player2);
        self.candidate = None;
        let beaten = (0..self.payoffs.size())
            .filter(|&k| k != self.row)
            .any(|k| self.payoffs.get(k, column).player1 > cell.player1);
        if !beaten {
            self.candidate = Some(column);
        }
        cell
    }

    /// The current surviving candidate column.
    pub fn candidate(&self) -> Option<usize> {
        self.candidate
    }

    /// Best player-2 payoff seen so far in this row.
    pub fn max_p2(&self) -> Option<i32> {
        self.max_p2
    }

    /// End the row. Returns the equilibrium column, if the row has one.
    pub fn finish(self) -> Option<usize> {
        debug_assert_eq!(
            self.next_column,
            self.payoffs.size(),
            "row finished before every column was scanned"
        );
        self.candidate
    }
}

/// Find every pure-strategy equilibrium of `game`, in row order.
pub fn solve<S: Strategy, R>(game: &GameDefinition<S, R>) -> Vec<Equilibrium<S>> {
    let n = game.size();
    let mut found = Vec::new();
    for row in 0..n {
        let mut scan = RowScan::new(game.payoffs(), row);
        for column in 0..n {
            scan.visit(column);
        }
        if let Some(column) = scan.finish() {
            found.push(Equilibrium::at(game, row, column));
        }
    }
    found
}
