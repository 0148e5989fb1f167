use gridmind_core::{Blackboard, GridWorldMut, TickContext};

/// One state of a machine.
///
/// `enter`/`exit` fire on the edges of a transition; `act` runs once per
/// turn on the active state. The hooks default to no-ops so leaf states
/// only implement what they use.
pub trait State<W>: 'static
where
    W: GridWorldMut + 'static,
{
    fn enter(&mut self) {}

    fn exit(&mut self) {}

    fn act(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    );
}
