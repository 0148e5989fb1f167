use crate::{Blackboard, TickContext, WorldMut};

/// A decision root: a state machine, a behavior tree, or anything else that
/// picks an action once per turn.
///
/// `act` is invoked exactly once per agent per turn and must not block;
/// "keep going" is expressed by acting again next turn.
pub trait Policy<W>: 'static
where
    W: WorldMut + 'static,
{
    fn act(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    );
}
