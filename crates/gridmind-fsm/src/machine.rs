use gridmind_core::{Blackboard, GridWorldMut, Policy, TickContext};
use gridmind_tools::{emit, TraceEvent};

use crate::predicate::Predicate;
use crate::state::State;

/// Index of a state within its owning machine.
pub type StateId = usize;

struct Edge<W>
where
    W: GridWorldMut + 'static,
{
    guard: Box<dyn Predicate<W>>,
    to: StateId,
}

/// State machine with guarded transitions.
///
/// Each turn the machine takes at most one transition (the first edge of
/// the active state whose guard holds, in insertion order) and then runs
/// the active state's `act` exactly once. Machines nest: a machine is
/// itself a [`State`], and a nested machine resumes where it left off when
/// the outer machine returns to it.
pub struct StateMachine<W>
where
    W: GridWorldMut + 'static,
{
    states: Vec<Box<dyn State<W>>>,
    edges: Vec<Vec<Edge<W>>>,
    current: StateId,
}

impl<W> StateMachine<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            edges: Vec::new(),
            current: 0,
        }
    }

    pub fn add_state(&mut self, state: Box<dyn State<W>>) -> StateId {
        let id = self.states.len();
        self.states.push(state);
        self.edges.push(Vec::new());
        id
    }

    pub fn add_transition(
        &mut self,
        guard: Box<dyn Predicate<W>>,
        from: StateId,
        to: StateId,
    ) {
        assert!(from < self.states.len(), "transition from unknown state {from}");
        assert!(to < self.states.len(), "transition to unknown state {to}");
        self.edges[from].push(Edge { guard, to });
    }

    /// The active state. Starts at the first added state.
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Runs one turn: at most one transition, then the active state.
    ///
    /// A stale index (the machine was rebuilt underneath) resets to the
    /// initial state and skips acting for one turn.
    pub fn act(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        if self.current >= self.states.len() {
            self.current = 0;
            return;
        }

        let mut next = None;
        for edge in &self.edges[self.current] {
            if edge.guard.eval(ctx, agent, &*world) {
                next = Some(edge.to);
                break;
            }
        }
        if let Some(to) = next {
            let from = self.current;
            self.states[from].exit();
            self.current = to;
            self.states[to].enter();
            emit(
                blackboard,
                TraceEvent::new(ctx.tick, "fsm.transition")
                    .with_a(from as u64)
                    .with_b(to as u64),
            );
        }

        self.states[self.current].act(ctx, agent, world, blackboard);
    }
}

impl<W> Default for StateMachine<W>
where
    W: GridWorldMut + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> State<W> for StateMachine<W>
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
        StateMachine::act(self, ctx, agent, world, blackboard);
    }
}

impl<W> Policy<W> for StateMachine<W>
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
        StateMachine::act(self, ctx, agent, world, blackboard);
    }
}
