// Construction-time errors for game definitions.
//
// A `GameDefinition` is either fully specified or it does not exist: every
// failure here is raised while building the definition, before the solver or
// any renderer runs. Strategy names are carried as their display labels so
// the error type stays non-generic.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game needs at least two strategies to have anything to compare.
    #[error("game `{game}` has {count} strategies; at least 2 are required")]
    TooFewStrategies { game: String, count: usize },

    #[error("game `{game}` lists strategy `{strategy}` more than once")]
    DuplicateStrategy { game: String, strategy: String },

    /// A payoff or renderer entry names a strategy outside the game's list.
    #[error("game `{game}` has no strategy `{strategy}`")]
    UnknownStrategy { game: String, strategy: String },

    /// The payoff matrix is partial: the solver refuses to run on it.
    #[error("game `{game}` has no payoff for ({row}, {column})")]
    MissingPayoff {
        game: String,
        row: String,
        column: String,
    },

    /// A stored matrix whose cell count does not match its size.
    #[error("payoff matrix of size {size} has {cells} cells, expected size squared")]
    MalformedMatrix { size: usize, cells: usize },

    #[error("game `{game}` has no renderer binding for strategy `{strategy}`")]
    MissingRenderer { game: String, strategy: String },
}
