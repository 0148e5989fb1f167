//! Influence maps over tile grids.
//!
//! A small, deliberately simple field generator: seed tiles at zero, relax
//! until every floor tile holds its walkable distance to the nearest seed,
//! then let agents follow the downhill gradient. Recomputed per call, no
//! caching.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod dmap;
pub mod tiles;

pub use dmap::{approach_map, archer_map, flee_map, hive_map, InfluenceMap, UNREACHED};
pub use tiles::{Tile, TileGrid};
