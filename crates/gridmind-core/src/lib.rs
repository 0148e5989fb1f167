//! Deterministic, engine-agnostic decision kernel for turn-based grid games.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod blackboard;
pub mod brain;
pub mod policy;
pub mod pos;
pub mod rng;
pub mod spatial;
pub mod tick;
pub mod world;

pub use action::{move_towards, Action};
pub use agent::AgentId;
pub use blackboard::{BbSlot, Blackboard};
pub use brain::{tick_brains, Brain};
pub use policy::Policy;
pub use pos::GridPos;
pub use rng::{DeterministicRng, SplitMix64};
pub use spatial::{nearest_enemy, nearest_tagged};
pub use tick::TickContext;
pub use world::{GridWorldMut, GridWorldView, InputKey, Marker, TeamId, WorldMut, WorldView};
