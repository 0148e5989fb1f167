use gridmind_core::{
    move_towards, nearest_enemy, nearest_tagged, Action, BbSlot, Blackboard, DeterministicRng,
    GridPos, GridWorldMut, GridWorldView, Marker, TickContext,
};

use crate::bt::{BtNode, BtStatus};

/// Stream tag for patrol random walks.
const PATROL_STREAM: u64 = 1;

/// Success when the agent's hitpoints are strictly below the threshold.
/// An agent without hitpoints is never low.
#[derive(Debug, Clone, Copy)]
pub struct IsLowHp {
    threshold: f32,
}

impl IsLowHp {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> BtNode<W> for IsLowHp
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        match world.hitpoints(agent) {
            Some(hp) if hp < self.threshold => BtStatus::Success,
            _ => BtStatus::Failure,
        }
    }
}

/// Publishes the nearest enemy within `range` to the blackboard.
///
/// Failure when no enemy exists or the nearest one is out of range; the
/// slot keeps its old value either way, so readers must gate on this
/// node's Success.
pub struct FindEnemy<W>
where
    W: GridWorldView + 'static,
{
    range: f32,
    slot: BbSlot<W::Agent>,
}

impl<W> FindEnemy<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(blackboard: &mut Blackboard, name: &str, range: f32) -> Self {
        Self {
            range,
            slot: blackboard.register(name),
        }
    }
}

impl<W> BtNode<W> for FindEnemy<W>
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        match nearest_enemy(&*world, agent) {
            Some((enemy, dist)) if dist <= self.range => {
                blackboard.set(self.slot, enemy);
                BtStatus::Success
            }
            _ => BtStatus::Failure,
        }
    }
}

/// Publishes the nearest entity bearing `marker` within `range` to the
/// blackboard.
pub struct FindTagged<W>
where
    W: GridWorldView + 'static,
{
    marker: Marker,
    range: f32,
    slot: BbSlot<W::Agent>,
}

impl<W> FindTagged<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(blackboard: &mut Blackboard, name: &str, marker: Marker, range: f32) -> Self {
        Self {
            marker,
            range,
            slot: blackboard.register(name),
        }
    }
}

impl<W> BtNode<W> for FindTagged<W>
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        match nearest_tagged(&*world, agent, self.marker) {
            Some((target, dist)) if dist <= self.range => {
                blackboard.set(self.slot, target);
                BtStatus::Success
            }
            _ => BtStatus::Failure,
        }
    }
}

/// Steps toward the blackboard-published target, one tile per tick.
///
/// Running while under way, Success on arrival at the target's tile,
/// Failure when the slot is empty or the handle has gone stale.
pub struct MoveToEntity<W>
where
    W: GridWorldView + 'static,
{
    slot: BbSlot<W::Agent>,
}

impl<W> MoveToEntity<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(blackboard: &mut Blackboard, name: &str) -> Self {
        Self {
            slot: blackboard.register(name),
        }
    }
}

impl<W> BtNode<W> for MoveToEntity<W>
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(&target) = blackboard.get(self.slot) else {
            return BtStatus::Failure;
        };
        if !world.is_alive(target) {
            return BtStatus::Failure;
        }
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some(target_pos) = world.position(target) else {
            return BtStatus::Failure;
        };
        if pos == target_pos {
            return BtStatus::Success;
        }
        world.set_action(agent, move_towards(pos, target_pos));
        BtStatus::Running
    }
}

/// Steps away from the blackboard-published threat.
///
/// Never terminates on its own: Running as long as the threat is live,
/// Failure once the handle goes stale.
pub struct Flee<W>
where
    W: GridWorldView + 'static,
{
    slot: BbSlot<W::Agent>,
}

impl<W> Flee<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(blackboard: &mut Blackboard, name: &str) -> Self {
        Self {
            slot: blackboard.register(name),
        }
    }
}

impl<W> BtNode<W> for Flee<W>
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(&threat) = blackboard.get(self.slot) else {
            return BtStatus::Failure;
        };
        if !world.is_alive(threat) {
            return BtStatus::Failure;
        }
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some(threat_pos) = world.position(threat) else {
            return BtStatus::Failure;
        };
        world.set_action(agent, move_towards(pos, threat_pos).inverse());
        BtStatus::Running
    }
}

/// Wanders near an anchor captured at construction time.
///
/// The anchor is the agent's position when the tree is built, stored on
/// the blackboard rather than in the world. Outside `radius` the leaf
/// walks back toward the anchor; inside it takes a uniformly random
/// cardinal step. Always Running.
pub struct Patrol {
    radius: f32,
    slot: BbSlot<GridPos>,
}

impl Patrol {
    /// Registers the anchor slot and snapshots the agent's current
    /// position into it.
    pub fn new<W>(
        blackboard: &mut Blackboard,
        world: &W,
        agent: W::Agent,
        name: &str,
        radius: f32,
    ) -> Self
    where
        W: GridWorldView,
    {
        let slot = blackboard.register(name);
        if let Some(pos) = world.position(agent) {
            blackboard.set(slot, pos);
        }
        Self { radius, slot }
    }
}

impl<W> BtNode<W> for Patrol
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some(&anchor) = blackboard.get(self.slot) else {
            return BtStatus::Failure;
        };
        let action = if pos.dist(anchor) > self.radius {
            // Recovery walk back into the patrol circle.
            move_towards(pos, anchor)
        } else {
            let mut rng = ctx.rng_for_agent(agent, PATROL_STREAM);
            Action::MOVES[rng.next_index(Action::MOVES.len())]
        };
        world.set_action(agent, action);
        BtStatus::Running
    }
}

/// Heals until hitpoints reach the threshold.
///
/// Success once hitpoints are at or above the threshold, Running while
/// the heal action is pending, Failure for an agent without hitpoints.
#[derive(Debug, Clone, Copy)]
pub struct PatchUp {
    threshold: f32,
}

impl PatchUp {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> BtNode<W> for PatchUp
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(hp) = world.hitpoints(agent) else {
            return BtStatus::Failure;
        };
        if hp >= self.threshold {
            return BtStatus::Success;
        }
        world.set_action(agent, Action::HealSelf);
        BtStatus::Running
    }
}

/// Publishes the agent's current waypoint, advancing the ring first when
/// the agent is standing on it.
///
/// The advance writes back through the world, so progress survives even
/// if a higher-priority branch preempts the follow-up move.
pub struct FindWaypoint<W>
where
    W: GridWorldView + 'static,
{
    slot: BbSlot<W::Agent>,
}

impl<W> FindWaypoint<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(blackboard: &mut Blackboard, name: &str) -> Self {
        Self {
            slot: blackboard.register(name),
        }
    }
}

impl<W> BtNode<W> for FindWaypoint<W>
where
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some(mut waypoint) = world.current_waypoint(agent) else {
            return BtStatus::Failure;
        };
        if world.position(waypoint) == Some(pos) {
            if let Some(next) = world.next_waypoint(waypoint) {
                waypoint = next;
                world.set_current_waypoint(agent, waypoint);
            }
        }
        if !world.is_alive(waypoint) {
            return BtStatus::Failure;
        }
        blackboard.set(self.slot, waypoint);
        BtStatus::Success
    }
}
