//! Behavior tree runtime built on `gridmind-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod leaves;
pub mod nodes;
pub mod policy;
pub mod utility;

pub use bt::{BtNode, BtStatus};
pub use leaves::{
    FindEnemy, FindTagged, FindWaypoint, Flee, IsLowHp, MoveToEntity, PatchUp, Patrol,
};
pub use nodes::{Condition, Not, Or, Parallel, Selector, Sequence};
pub use policy::BehaviorTree;
pub use utility::{UtilityFn, UtilitySelector, WeightedUtilitySelector};
