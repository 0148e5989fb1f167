use crate::{Action, AgentId, GridPos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; subsystems define extension traits on top of this seam.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}

/// Team identifier. Agents on different teams are enemies.
pub type TeamId = i32;

/// Landmark and pickup tags the decision layer can search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Marker {
    Heal,
    Powerup,
    Market,
    Sleep,
    Craft,
    Eat,
    Hive,
}

/// Discrete input flags. The input layer edge-triggers them; the decision
/// layer reads them as levels during its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputKey {
    Jump,
    Act,
    Alt,
}

/// Grid-game reads consumed by the decision engines.
///
/// The component accessors return `None` when the entity does not carry the
/// component, mirroring a sparse store. Optional capabilities (markers,
/// input, patrol anchors, waypoint rings) default to "absent" so minimal
/// worlds stay small.
pub trait GridWorldView: WorldView {
    fn position(&self, agent: Self::Agent) -> Option<GridPos>;

    fn team(&self, agent: Self::Agent) -> Option<TeamId>;

    fn hitpoints(&self, agent: Self::Agent) -> Option<f32>;

    /// Every agent holding a position and a team, in stable id order.
    fn combatants(&self) -> Box<dyn Iterator<Item = Self::Agent> + '_>;

    /// Whether the handle still refers to a live entity.
    ///
    /// Blackboard-held handles are weak; consumers re-validate them here
    /// before every use.
    fn is_alive(&self, agent: Self::Agent) -> bool {
        self.position(agent).is_some()
    }

    /// Every entity bearing `marker`, in stable id order.
    fn tagged(&self, _marker: Marker) -> Box<dyn Iterator<Item = Self::Agent> + '_> {
        Box::new(core::iter::empty())
    }

    /// Whether any input-bearing entity currently holds `key` pressed.
    fn input_pressed(&self, _key: InputKey) -> bool {
        false
    }

    /// Patrol anchor assigned to `agent`, when the game gives it one.
    fn patrol_anchor(&self, _agent: Self::Agent) -> Option<GridPos> {
        None
    }

    /// Current waypoint of `agent` on its waypoint ring.
    fn current_waypoint(&self, _agent: Self::Agent) -> Option<Self::Agent> {
        None
    }

    /// Successor of `waypoint` on its ring.
    fn next_waypoint(&self, _waypoint: Self::Agent) -> Option<Self::Agent> {
        None
    }
}

/// Grid-game effects the decision engines may request.
///
/// The optional effects default to no-ops, matching a store that drops
/// writes to components an entity does not carry.
pub trait GridWorldMut: WorldMut + GridWorldView {
    /// Overwrite the agent's pending action for this turn.
    fn set_action(&mut self, agent: Self::Agent, action: Action);

    /// Add `amount` to the agent's hitpoints. Worlds that track hitpoints
    /// must override this.
    fn heal(&mut self, _agent: Self::Agent, _amount: f32) {}

    /// Advance the agent's current waypoint. Worlds with waypoint rings must
    /// override this.
    fn set_current_waypoint(&mut self, _agent: Self::Agent, _waypoint: Self::Agent) {}
}
