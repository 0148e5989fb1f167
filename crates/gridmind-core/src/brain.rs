use crate::{AgentId, Blackboard, Policy, TickContext, WorldMut};

/// One agent's decision bundle: identity, scratchpad, decision root.
pub struct Brain<W>
where
    W: WorldMut + 'static,
{
    pub agent: W::Agent,
    pub blackboard: Blackboard,
    pub policy: Box<dyn Policy<W>>,
}

impl<W> Brain<W>
where
    W: WorldMut + 'static,
{
    pub fn new(agent: W::Agent, policy: Box<dyn Policy<W>>) -> Self {
        Self {
            agent,
            blackboard: Blackboard::new(),
            policy,
        }
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) {
        self.policy.act(ctx, self.agent, world, &mut self.blackboard);
    }
}

/// Run one turn for every brain, in stable agent order.
pub fn tick_brains<W>(ctx: &TickContext, world: &mut W, brains: &mut [Brain<W>])
where
    W: WorldMut + 'static,
{
    brains.sort_by_key(|b| b.agent.stable_id());
    for brain in brains.iter_mut() {
        brain.tick(ctx, world);
    }
}
