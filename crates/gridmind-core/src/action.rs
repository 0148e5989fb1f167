use crate::GridPos;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pending action of one agent for one turn.
///
/// A decision root writes at most one action per turn; the external resolver
/// consumes it and resets the slot to `Nop`. Actions never queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    #[default]
    Nop,
    MoveLeft,
    MoveRight,
    MoveDown,
    MoveUp,
    Attack,
    HealSelf,
}

impl Action {
    /// The four cardinal moves, in a fixed order for deterministic draws.
    pub const MOVES: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::MoveUp,
    ];

    /// Directional inverse: left/right and up/down swap, everything else is
    /// unchanged. Applying it twice yields the original action.
    pub fn inverse(self) -> Action {
        match self {
            Action::MoveLeft => Action::MoveRight,
            Action::MoveRight => Action::MoveLeft,
            Action::MoveUp => Action::MoveDown,
            Action::MoveDown => Action::MoveUp,
            other => other,
        }
    }
}

/// Single step from `from` toward `to`.
///
/// The dominant axis wins; on a tie the Y axis is taken.
pub fn move_towards(from: GridPos, to: GridPos) -> Action {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() > dy.abs() {
        if dx > 0 {
            Action::MoveRight
        } else {
            Action::MoveLeft
        }
    } else if dy > 0 {
        Action::MoveUp
    } else {
        Action::MoveDown
    }
}
