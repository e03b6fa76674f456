// Strategy labels and player roles.
//
// Each game defines its own closed enum of strategies (e.g. cooperate/defect)
// and implements `Strategy` for it. The enum itself carries no ordering
// meaning: the order that matters (iteration and tie-break order) is the
// order of the game's strategy list in `GameDefinition`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A strategy label from a game's finite strategy set.
///
/// Implemented by small `Copy` enums. `Display` provides the label used in
/// trace output and error messages.
pub trait Strategy: Copy + Eq + Hash + fmt::Debug + fmt::Display {}

/// Which side of the payoff matrix a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Chooses the row; receives `Payoff::player1`.
    Player1 = 0,
    /// Chooses the column; receives `Payoff::player2`.
    Player2 = 1,
}

impl Role {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The other player.
    pub fn opponent(self) -> Role {
        match self {
            Role::Player1 => Role::Player2,
            Role::Player2 => Role::Player1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Player1 => write!(f, "player 1"),
            Role::Player2 => write!(f, "player 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_index_in_matrix_order() {
        assert_eq!(Role::Player1.index(), 0);
        assert_eq!(Role::Player2.index(), 1);
        assert_eq!(Role::Player1.opponent(), Role::Player2);
        assert_eq!(Role::Player2.opponent().opponent(), Role::Player2);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::Player1.to_string(), "player 1");
        assert_eq!(Role::Player2.to_string(), "player 2");
    }
}
