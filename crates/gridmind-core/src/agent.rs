use core::fmt::Debug;

/// Stable identifier for an agent.
///
/// Deterministic turn replay requires:
/// - stable ordering (`Ord`) so brains tick in the same order every run
/// - a stable numeric ID (`stable_id`) for seeding and trace output
///
/// Handles are plain values; storing one never keeps the agent alive.
pub trait AgentId: Copy + Ord + Eq + Debug + 'static {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
