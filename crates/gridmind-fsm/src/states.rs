use gridmind_core::{
    move_towards, nearest_enemy, nearest_tagged, Action, AgentId, Blackboard, DeterministicRng,
    GridWorldMut, Marker, TickContext,
};
use gridmind_tools::{emit, TraceEvent};

use crate::state::State;

/// Stream tag for patrol random walks.
const PATROL_STREAM: u64 = 1;

/// Steps toward the nearest enemy. Does nothing when no enemy exists.
#[derive(Debug, Default)]
pub struct MoveToEnemy;

impl<W> State<W> for MoveToEnemy
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
        let Some(pos) = world.position(agent) else {
            return;
        };
        let Some((enemy, _)) = nearest_enemy(&*world, agent) else {
            return;
        };
        let Some(enemy_pos) = world.position(enemy) else {
            return;
        };
        world.set_action(agent, move_towards(pos, enemy_pos));
    }
}

/// Steps away from the nearest enemy. Does nothing when no enemy exists.
#[derive(Debug, Default)]
pub struct FleeFromEnemy;

impl<W> State<W> for FleeFromEnemy
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
        let Some(pos) = world.position(agent) else {
            return;
        };
        let Some((enemy, _)) = nearest_enemy(&*world, agent) else {
            return;
        };
        let Some(enemy_pos) = world.position(enemy) else {
            return;
        };
        world.set_action(agent, move_towards(pos, enemy_pos).inverse());
    }
}

/// Steps toward the nearest entity bearing a marker.
#[derive(Debug, Clone, Copy)]
pub struct MoveToTagged {
    marker: Marker,
}

impl MoveToTagged {
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }
}

impl<W> State<W> for MoveToTagged
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
        let Some(pos) = world.position(agent) else {
            return;
        };
        let Some((target, _)) = nearest_tagged(&*world, agent, self.marker) else {
            return;
        };
        let Some(target_pos) = world.position(target) else {
            return;
        };
        world.set_action(agent, move_towards(pos, target_pos));
    }
}

/// Wanders near the world-assigned patrol anchor.
///
/// Outside `radius` the state walks back toward the anchor; inside it takes
/// a uniformly random cardinal step.
#[derive(Debug, Clone, Copy)]
pub struct Patrol {
    radius: f32,
}

impl Patrol {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl<W> State<W> for Patrol
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
        let Some(pos) = world.position(agent) else {
            return;
        };
        let Some(anchor) = world.patrol_anchor(agent) else {
            return;
        };
        let action = if pos.dist(anchor) > self.radius {
            // Recovery walk back into the patrol circle.
            move_towards(pos, anchor)
        } else {
            let mut rng = ctx.rng_for_agent(agent, PATROL_STREAM);
            Action::MOVES[rng.next_index(Action::MOVES.len())]
        };
        world.set_action(agent, action);
    }
}

/// Restores a fixed amount of the agent's hitpoints each turn.
#[derive(Debug, Clone, Copy)]
pub struct SelfHeal {
    amount: f32,
}

impl SelfHeal {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }
}

impl<W> State<W> for SelfHeal
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
        world.heal(agent, self.amount);
    }
}

/// Stationary activities. On the grid they differ only by the trace tag
/// they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Craft,
    Eat,
    Sleep,
    Market,
}

impl ActivityKind {
    fn tag(self) -> &'static str {
        match self {
            ActivityKind::Craft => "state.craft",
            ActivityKind::Eat => "state.eat",
            ActivityKind::Sleep => "state.sleep",
            ActivityKind::Market => "state.market",
        }
    }
}

/// Performs a stationary activity, reporting it on the trace channel.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    kind: ActivityKind,
}

impl Activity {
    pub fn new(kind: ActivityKind) -> Self {
        Self { kind }
    }
}

impl<W> State<W> for Activity
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        _world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        emit(
            blackboard,
            TraceEvent::new(ctx.tick, self.kind.tag()).with_a(agent.stable_id()),
        );
    }
}

/// Does nothing. Useful as an initial or terminal state.
#[derive(Debug, Default)]
pub struct Nop;

impl<W> State<W> for Nop
where
    W: GridWorldMut + 'static,
{
    fn act(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
    }
}
