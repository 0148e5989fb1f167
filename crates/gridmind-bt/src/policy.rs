use gridmind_core::{Blackboard, GridWorldMut, Policy, TickContext};

use crate::bt::{BtNode, BtStatus};

/// Behavior tree decision root.
///
/// Ticks the root node once per turn and remembers the result. The tree
/// is never reset from outside: nodes that carry state across turns own
/// that state and document it.
pub struct BehaviorTree<W>
where
    W: GridWorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    last: BtStatus,
}

impl<W> BehaviorTree<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self {
            root,
            last: BtStatus::Running,
        }
    }

    /// Result of the most recent tick. `Running` before the first tick.
    pub fn last_status(&self) -> BtStatus {
        self.last
    }
}

impl<W> Policy<W> for BehaviorTree<W>
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        self.last = self.root.tick(ctx, agent, world, blackboard);
    }
}
