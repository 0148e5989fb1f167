#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use gridmind_core::{BbSlot, Blackboard};

/// One record on the decision trace.
///
/// An event is plain data: the turn it happened on, a tag naming what happened, and two
/// payload words whose meaning depends on the tag. Static tags borrow, so tracing a
/// decision costs no allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

/// Receives events as they happen, for streaming consumers that do not
/// want the in-memory [`TraceLog`].
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Slot name for collecting events in-memory.
pub const TRACE_LOG: &str = "trace.log";
/// Slot name for streaming events into a user-provided sink.
pub const TRACE_SINK: &str = "trace.sink";

/// Registers the in-memory log channel and resets it to an empty log.
pub fn install_log(blackboard: &mut Blackboard) -> BbSlot<TraceLog> {
    let slot = blackboard.register::<TraceLog>(TRACE_LOG);
    blackboard.set(slot, TraceLog::default());
    slot
}

/// Registers the streaming channel and stores `sink` there.
pub fn install_sink(
    blackboard: &mut Blackboard,
    sink: Box<dyn TraceSink>,
) -> BbSlot<Box<dyn TraceSink>> {
    let slot = blackboard.register::<Box<dyn TraceSink>>(TRACE_SINK);
    blackboard.set(slot, sink);
    slot
}

/// Delivers `event` to whichever trace channels the blackboard carries.
///
/// A blackboard with no installed channel swallows the event, so decision code can trace
/// unconditionally.
pub fn emit(blackboard: &mut Blackboard, event: TraceEvent) {
    if let Some(slot) = blackboard.lookup::<TraceLog>(TRACE_LOG) {
        if let Some(log) = blackboard.get_mut(slot) {
            log.push(event.clone());
        }
    }
    if let Some(slot) = blackboard.lookup::<Box<dyn TraceSink>>(TRACE_SINK) {
        if let Some(sink) = blackboard.get_mut(slot) {
            sink.emit(event);
        }
    }
}

/// Reads the in-memory log, if one is installed.
pub fn log(blackboard: &Blackboard) -> Option<&TraceLog> {
    let slot = blackboard.lookup::<TraceLog>(TRACE_LOG)?;
    blackboard.get(slot)
}
