//! Umbrella crate that re-exports the `gridmind-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint: pick the decision
//! style per mob (state machine, behavior tree, influence map) and wire
//! them all to the same world traits.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use gridmind_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use gridmind_tools as tools;

#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub use gridmind_fsm as fsm;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use gridmind_bt as bt;

#[cfg(feature = "dmap")]
#[cfg_attr(docsrs, doc(cfg(feature = "dmap")))]
pub use gridmind_dmap as dmap;
