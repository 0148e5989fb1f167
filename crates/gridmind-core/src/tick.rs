use crate::{rng, AgentId, SplitMix64};

/// Per-turn inputs shared by every decision root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    /// Turn counter, starting at 0.
    pub tick: u64,
    /// Global simulation seed. All per-agent randomness derives from it.
    pub seed: u64,
}

impl TickContext {
    /// Fresh generator for `agent` on this turn.
    ///
    /// The turn counter is mixed into the derivation so per-turn draws do not
    /// repeat across turns; `stream` separates independent consumers within
    /// one turn.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        let turn_seed = self.seed ^ rng::mix64(self.tick);
        let seed = rng::derive_seed(turn_seed, agent.stable_id(), stream);
        SplitMix64::new(seed)
    }
}
