//! Hierarchical finite state machine runtime built on `gridmind-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod machine;
pub mod predicate;
pub mod state;
pub mod states;

pub use machine::{StateId, StateMachine};
pub use predicate::{
    AllOf, Always, AnyOf, EnemyAvailable, HitpointsLessThan, InputPressed, Never, Not, Predicate,
};
pub use state::State;
pub use states::{
    Activity, ActivityKind, FleeFromEnemy, MoveToEnemy, MoveToTagged, Nop, Patrol, SelfHeal,
};
