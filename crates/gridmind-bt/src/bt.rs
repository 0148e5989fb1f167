use gridmind_core::{Blackboard, GridWorldMut, TickContext};

/// Result of one node tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

/// One node of a behavior tree.
///
/// Composites re-scan from their first child every tick; the only state
/// carried across turns is documented per node (the weighted selector's
/// heats). Leaves may write side effects on any status, including Failure
/// and Running, so every node must be safe to tick every turn.
pub trait BtNode<W>: 'static
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus;
}
