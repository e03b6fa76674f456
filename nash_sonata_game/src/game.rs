// Game definitions: strategy list, payoff matrix, renderer bindings.
//
// A `GameDefinition` is assembled once from static data and then only read.
// Construction validates everything the solver and the driver rely on:
//
// - at least two strategies, no duplicates (order is significant: it is the
//   sweep order and the solver's tie-break order)
// - a payoff for every (row, column) pair
// - if renderers are attached at all, a binding for every strategy, with one
//   renderer per player role
//
// The renderer type `R` is opaque here. A game with no renderers is a
// computation-only game: it still solves, but nothing is ever rendered.

use crate::error::GameError;
use crate::payoff::{Payoff, PayoffMatrix};
use crate::strategy::{Role, Strategy};

/// The pair of renderers bound to one strategy, one per player role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBinding<R> {
    pub player1: R,
    pub player2: R,
}

impl<R> RoleBinding<R> {
    pub fn new(player1: R, player2: R) -> Self {
        RoleBinding { player1, player2 }
    }

    pub fn get(&self, role: Role) -> &R {
        match role {
            Role::Player1 => &self.player1,
            Role::Player2 => &self.player2,
        }
    }
}

/// A fully specified two-player game.
#[derive(Debug, Clone)]
pub struct GameDefinition<S, R = ()> {
    name: String,
    strategies: Vec<S>,
    payoffs: PayoffMatrix,
    /// Indexed by strategy position. `None` for computation-only games.
    renderers: Option<Vec<RoleBinding<R>>>,
}

impl<S: Strategy, R> GameDefinition<S, R> {
    /// Build a computation-only game from its strategy list and payoff
    /// entries. Attach renderers afterwards with [`with_renderers`].
    ///
    /// [`with_renderers`]: GameDefinition::with_renderers
    pub fn new<I, P>(
        name: impl Into<String>,
        strategies: Vec<S>,
        payoffs: I,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = ((S, S), P)>,
        P: Into<Payoff>,
    {
        let name = name.into();
        if strategies.len() < 2 {
            return Err(GameError::TooFewStrategies {
                game: name,
                count: strategies.len(),
            });
        }
        for (i, s) in strategies.iter().enumerate() {
            if strategies[..i].contains(s) {
                return Err(GameError::DuplicateStrategy {
                    game: name,
                    strategy: s.to_string(),
                });
            }
        }
        let payoffs = PayoffMatrix::from_entries(&name, &strategies, payoffs)?;
        log::debug!(
            "defined game `{}` with {} strategies",
            name,
            strategies.len()
        );
        Ok(GameDefinition {
            name,
            strategies,
            payoffs,
            renderers: None,
        })
    }

    /// Attach a renderer binding to every strategy.
    ///
    /// The mapping must be total over the strategy list; a strategy bound
    /// twice keeps the later binding.
    pub fn with_renderers<I>(mut self, bindings: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (S, RoleBinding<R>)>,
    {
        let mut slots: Vec<Option<RoleBinding<R>>> =
            (0..self.strategies.len()).map(|_| None).collect();
        for (strategy, binding) in bindings {
            let index = self
                .position(strategy)
                .ok_or_else(|| GameError::UnknownStrategy {
                    game: self.name.clone(),
                    strategy: strategy.to_string(),
                })?;
            slots[index] = Some(binding);
        }

        let mut renderers = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(binding) => renderers.push(binding),
                None => {
                    return Err(GameError::MissingRenderer {
                        game: self.name.clone(),
                        strategy: self.strategies[index].to_string(),
                    });
                }
            }
        }
        self.renderers = Some(renderers);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.strategies.len()
    }

    /// The strategy at `index` in sweep order. Panics if out of range.
    pub fn strategy(&self, index: usize) -> S {
        self.strategies[index]
    }

    /// Position of `strategy` in the strategy list.
    pub fn position(&self, strategy: S) -> Option<usize> {
        self.strategies.iter().position(|&s| s == strategy)
    }

    pub fn payoffs(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    /// Payoff at (row, column) by strategy position.
    pub fn payoff(&self, row: usize, column: usize) -> Payoff {
        self.payoffs.get(row, column)
    }

    /// True when the game has no renderers and only produces equilibria.
    pub fn is_computation_only(&self) -> bool {
        self.renderers.is_none()
    }

    /// The renderer for the strategy at `index` when played by `role`, or
    /// `None` for a computation-only game.
    pub fn renderer(&self, index: usize, role: Role) -> Option<&R> {
        self.renderers
            .as_ref()
            .map(|bindings| bindings[index].get(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Stag {
        Stag,
        Hare,
    }

    impl fmt::Display for Stag {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Stag::Stag => write!(f, "stag"),
                Stag::Hare => write!(f, "hare"),
            }
        }
    }

    impl Strategy for Stag {}

    fn stag_hunt() -> GameDefinition<Stag, &'static str> {
        GameDefinition::new(
            "stag hunt",
            vec![Stag::Stag, Stag::Hare],
            [
                ((Stag::Stag, Stag::Stag), (4, 4)),
                ((Stag::Stag, Stag::Hare), (0, 3)),
                ((Stag::Hare, Stag::Stag), (3, 0)),
                ((Stag::Hare, Stag::Hare), (3, 3)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn computation_only_by_default() {
        let game = stag_hunt();
        assert!(game.is_computation_only());
        assert_eq!(game.renderer(0, Role::Player1), None);
        assert_eq!(game.size(), 2);
        assert_eq!(game.position(Stag::Hare), Some(1));
        assert_eq!(game.payoff(1, 0), Payoff::new(3, 0));
    }

    #[test]
    fn renderers_resolve_by_role() {
        let game = stag_hunt()
            .with_renderers([
                (Stag::Hare, RoleBinding::new("hare-1", "hare-2")),
                (Stag::Stag, RoleBinding::new("stag-1", "stag-2")),
            ])
            .unwrap();

        assert!(!game.is_computation_only());
        assert_eq!(game.renderer(0, Role::Player1), Some(&"stag-1"));
        assert_eq!(game.renderer(1, Role::Player2), Some(&"hare-2"));
    }

    #[test]
    fn missing_renderer_is_refused() {
        let err = stag_hunt()
            .with_renderers([(Stag::Stag, RoleBinding::new("stag-1", "stag-2"))])
            .unwrap_err();

        assert_eq!(
            err,
            GameError::MissingRenderer {
                game: "stag hunt".into(),
                strategy: "hare".into(),
            }
        );
    }

    #[test]
    fn single_strategy_is_refused() {
        let err = GameDefinition::<Stag, ()>::new(
            "solitaire",
            vec![Stag::Stag],
            [((Stag::Stag, Stag::Stag), (1, 1))],
        )
        .unwrap_err();

        assert_eq!(
            err,
            GameError::TooFewStrategies {
                game: "solitaire".into(),
                count: 1,
            }
        );
    }

    #[test]
    fn duplicate_strategy_is_refused() {
        let err = GameDefinition::<Stag, ()>::new(
            "echo",
            vec![Stag::Hare, Stag::Hare],
            [((Stag::Hare, Stag::Hare), (1, 1))],
        )
        .unwrap_err();

        assert!(matches!(err, GameError::DuplicateStrategy { strategy, .. } if strategy == "hare"));
    }
}
