//! Tooling primitives for deterministic roguelike AI.
//!
//! This crate is intentionally lightweight and engine-agnostic. Higher-level integrations
//! (debug overlays, inspectors, replay viewers) should live in dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    emit, install_log, install_sink, log, TraceEvent, TraceLog, TraceSink, TRACE_LOG, TRACE_SINK,
};
