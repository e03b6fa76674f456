// The game driver: sweep every cell, then replay every equilibrium.
//
// Phases run strictly in order, `Sweep -> Replay -> Done`:
//
// - Sweep visits the matrix row-major. Each cell is fed to the row's
//   `RowScan` and rendered once per player: player 1 with its row strategy's
//   renderer (may be flagged as the first cell), player 2 with its column
//   strategy's renderer (may be flagged as the last cell). A row's
//   equilibrium, if any, is recorded when the row ends.
// - Replay renders each recorded equilibrium in discovery order, player 1
//   then player 2, with only the replay flag set. It runs even when nothing
//   was found.
//
// A computation-only game (no renderers) goes through the same phases and
// returns its equilibria with an empty timeline.

use crate::progression::{OutcomeContext, OutcomeRenderer};
use crate::timeline::{NoteEvent, RenderContext};
use nash_sonata_game::{Equilibrium, GameDefinition, Role, RowScan, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Sweep,
    Replay,
    Done,
}

/// Renderer calls made in each phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocations {
    pub sweep: usize,
    pub replay: usize,
}

/// Everything one run of a game produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance<S> {
    pub equilibria: Vec<Equilibrium<S>>,
    pub events: Vec<NoteEvent>,
    pub invocations: Invocations,
}

/// Drives one game through its phases. Owns the run's timeline.
pub struct GameDriver<'a, S, R> {
    game: &'a GameDefinition<S, R>,
    phase: Phase,
    ctx: RenderContext,
    equilibria: Vec<Equilibrium<S>>,
    invocations: Invocations,
}

impl<'a, S: Strategy, R: OutcomeRenderer> GameDriver<'a, S, R> {
    pub fn new(game: &'a GameDefinition<S, R>) -> Self {
        GameDriver {
            game,
            phase: Phase::Sweep,
            ctx: RenderContext::new(),
            equilibria: Vec::new(),
            invocations: Invocations::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Equilibria recorded so far.
    pub fn equilibria(&self) -> &[Equilibrium<S>] {
        &self.equilibria
    }

    /// Run the current phase to completion and move to the next one.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Sweep => {
                self.sweep();
                Phase::Replay
            }
            Phase::Replay => {
                self.replay();
                Phase::Done
            }
            Phase::Done => Phase::Done,
        };
        log::debug!("game `{}` entered {:?}", self.game.name(), self.phase);
        self.phase
    }

    /// Run all remaining phases.
    pub fn run(mut self) -> Performance<S> {
        while self.step() != Phase::Done {}
        Performance {
            equilibria: self.equilibria,
            events: self.ctx.into_events(),
            invocations: self.invocations,
        }
    }

    fn sweep(&mut self) {
        let game = self.game;
        let n = game.size();
        for row in 0..n {
            let mut scan = RowScan::new(game.payoffs(), row);
            for column in 0..n {
                let payoff = scan.visit(column);
                log::info!(
                    "player 1: {}, player 2: {}, payoff: {}",
                    game.strategy(row),
                    game.strategy(column),
                    payoff
                );

                self.invoke(
                    row,
                    Role::Player1,
                    OutcomeContext {
                        equilibrium_replay: false,
                        first_cell: row == 0 && column == 0,
                        last_cell: false,
                        dominates: payoff.dominates(Role::Player1),
                    },
                );
                self.invoke(
                    column,
                    Role::Player2,
                    OutcomeContext {
                        equilibrium_replay: false,
                        first_cell: false,
                        last_cell: row == n - 1 && column == n - 1,
                        dominates: payoff.dominates(Role::Player2),
                    },
                );
            }

            if let Some(column) = scan.finish() {
                let found = Equilibrium::at(game, row, column);
                log::info!(
                    "nash equilibrium found! player 1: {}, player 2: {}",
                    found.player1,
                    found.player2
                );
                self.equilibria.push(found);
            }
        }
    }

    fn replay(&mut self) {
        for i in 0..self.equilibria.len() {
            let found = self.equilibria[i];
            self.invoke(found.row, Role::Player1, OutcomeContext::replay());
            self.invoke(found.column, Role::Player2, OutcomeContext::replay());
        }
    }

    fn invoke(&mut self, index: usize, role: Role, outcome: OutcomeContext) {
        let game = self.game;
        let Some(renderer) = game.renderer(index, role) else {
            return;
        };
        renderer.render(&mut self.ctx, outcome);
        match self.phase {
            Phase::Sweep => self.invocations.sweep += 1,
            _ => self.invocations.replay += 1,
        }
    }
}

/// Run `game` from start to finish.
pub fn perform<S: Strategy, R: OutcomeRenderer>(game: &GameDefinition<S, R>) -> Performance<S> {
    GameDriver::new(game).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nash_sonata_game::RoleBinding;
    use std::fmt;

    /// Writes one marker note per call. The velocity packs the outcome
    /// flags so tests can read back exactly what the driver passed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Marker(i32);

    impl Marker {
        const REPLAY: u8 = 1;
        const FIRST: u8 = 2;
        const LAST: u8 = 4;
        const DOMINATES: u8 = 8;
    }

    impl OutcomeRenderer for Marker {
        fn render(&self, ctx: &mut RenderContext, outcome: OutcomeContext) {
            let mut flags = 0;
            if outcome.equilibrium_replay {
                flags |= Marker::REPLAY;
            }
            if outcome.first_cell {
                flags |= Marker::FIRST;
            }
            if outcome.last_cell {
                flags |= Marker::LAST;
            }
            if outcome.dominates {
                flags |= Marker::DOMINATES;
            }
            ctx.push(self.0, 0, 1, flags);
            ctx.advance(1);
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Move {
        Flight,
        Fight,
    }

    impl fmt::Display for Move {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Move::Flight => write!(f, "flight"),
                Move::Fight => write!(f, "fight"),
            }
        }
    }

    impl Strategy for Move {}

    fn chicken() -> GameDefinition<Move, Marker> {
        GameDefinition::new(
            "chicken",
            vec![Move::Flight, Move::Fight],
            [
                ((Move::Flight, Move::Flight), (0, 0)),
                ((Move::Flight, Move::Fight), (-1, 1)),
                ((Move::Fight, Move::Flight), (1, -1)),
                ((Move::Fight, Move::Fight), (-10, -10)),
            ],
        )
        .unwrap()
    }

    fn rendered_chicken() -> GameDefinition<Move, Marker> {
        // Player 1 markers in the 10s, player 2 markers in the 20s.
        chicken()
            .with_renderers([
                (Move::Flight, RoleBinding::new(Marker(10), Marker(20))),
                (Move::Fight, RoleBinding::new(Marker(11), Marker(21))),
            ])
            .unwrap()
    }

    #[test]
    fn phases_run_in_order() {
        let game = rendered_chicken();
        let mut driver = GameDriver::new(&game);
        assert_eq!(driver.phase(), Phase::Sweep);
        assert_eq!(driver.step(), Phase::Replay);
        assert_eq!(driver.equilibria().len(), 2);
        assert_eq!(driver.step(), Phase::Done);
        assert_eq!(driver.step(), Phase::Done);
    }

    #[test]
    fn sweep_and_replay_call_counts() {
        let performance = perform(&rendered_chicken());
        let n = 2;
        assert_eq!(performance.invocations.sweep, 2 * n * n);
        assert_eq!(
            performance.invocations.replay,
            2 * performance.equilibria.len()
        );
        assert_eq!(performance.events.len(), 2 * n * n + 4);
    }

    #[test]
    fn sweep_passes_cell_flags() {
        let performance = perform(&rendered_chicken());
        let calls: Vec<(i32, u8)> = performance
            .events
            .iter()
            .map(|e| (e.pitch, e.velocity))
            .collect();
        let (d, f, l, r) = (Marker::DOMINATES, Marker::FIRST, Marker::LAST, Marker::REPLAY);
        assert_eq!(
            calls,
            vec![
                // (flight, flight) 0,0: both dominate on a tie
                (10, f | d),
                (20, d),
                // (flight, fight) -1,1
                (10, 0),
                (21, d),
                // (fight, flight) 1,-1
                (11, d),
                (20, 0),
                // (fight, fight) -10,-10
                (11, d),
                (21, l | d),
                // replay (flight, fight), then (fight, flight)
                (10, r),
                (21, r),
                (11, r),
                (20, r),
            ]
        );
    }

    #[test]
    fn computation_only_game_renders_nothing() {
        let game = chicken();
        let performance = perform(&game);
        assert_eq!(performance.equilibria.len(), 2);
        assert!(performance.events.is_empty());
        assert_eq!(performance.invocations, Invocations::default());
    }

    #[test]
    fn identical_runs_are_identical() {
        let game = rendered_chicken();
        assert_eq!(perform(&game), perform(&game));
    }
}
