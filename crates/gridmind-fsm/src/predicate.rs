use gridmind_core::{nearest_enemy, GridWorldView, InputKey, TickContext};

/// Boolean transition guard evaluated against a read-only world.
///
/// Guards are stateless; all transition state lives in the owning machine.
pub trait Predicate<W>: 'static
where
    W: GridWorldView + 'static,
{
    fn eval(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool;
}

/// True while any input-bearing entity holds `key` down.
#[derive(Debug, Clone, Copy)]
pub struct InputPressed(pub InputKey);

impl<W> Predicate<W> for InputPressed
where
    W: GridWorldView + 'static,
{
    fn eval(&self, _ctx: &TickContext, _agent: W::Agent, world: &W) -> bool {
        world.input_pressed(self.0)
    }
}

/// True when some enemy sits within `radius` (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct EnemyAvailable {
    radius: f32,
}

impl EnemyAvailable {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl<W> Predicate<W> for EnemyAvailable
where
    W: GridWorldView + 'static,
{
    fn eval(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        match nearest_enemy(world, agent) {
            Some((_, dist)) => dist <= self.radius,
            None => false,
        }
    }
}

/// True when the agent's hitpoints are strictly below `threshold`.
///
/// An agent without hitpoints never matches.
#[derive(Debug, Clone, Copy)]
pub struct HitpointsLessThan {
    threshold: f32,
}

impl HitpointsLessThan {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> Predicate<W> for HitpointsLessThan
where
    W: GridWorldView + 'static,
{
    fn eval(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        world
            .hitpoints(agent)
            .map(|hp| hp < self.threshold)
            .unwrap_or(false)
    }
}

/// Unconditional transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<W> Predicate<W> for Always
where
    W: GridWorldView + 'static,
{
    fn eval(&self, _ctx: &TickContext, _agent: W::Agent, _world: &W) -> bool {
        true
    }
}

/// Transition that never fires. Placeholder for edges still being designed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl<W> Predicate<W> for Never
where
    W: GridWorldView + 'static,
{
    fn eval(&self, _ctx: &TickContext, _agent: W::Agent, _world: &W) -> bool {
        false
    }
}

/// Negates the wrapped guard.
pub struct Not<W>
where
    W: GridWorldView + 'static,
{
    inner: Box<dyn Predicate<W>>,
}

impl<W> Not<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(inner: Box<dyn Predicate<W>>) -> Self {
        Self { inner }
    }
}

impl<W> Predicate<W> for Not<W>
where
    W: GridWorldView + 'static,
{
    fn eval(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        !self.inner.eval(ctx, agent, world)
    }
}

/// Conjunction over two or more guards. Evaluation short-circuits on the
/// first false operand.
pub struct AllOf<W>
where
    W: GridWorldView + 'static,
{
    operands: Vec<Box<dyn Predicate<W>>>,
}

impl<W> AllOf<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(operands: Vec<Box<dyn Predicate<W>>>) -> Self {
        assert!(operands.len() >= 2, "AllOf needs at least two operands");
        Self { operands }
    }
}

impl<W> Predicate<W> for AllOf<W>
where
    W: GridWorldView + 'static,
{
    fn eval(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        self.operands.iter().all(|p| p.eval(ctx, agent, world))
    }
}

/// Disjunction over two or more guards. Evaluation short-circuits on the
/// first true operand.
pub struct AnyOf<W>
where
    W: GridWorldView + 'static,
{
    operands: Vec<Box<dyn Predicate<W>>>,
}

impl<W> AnyOf<W>
where
    W: GridWorldView + 'static,
{
    pub fn new(operands: Vec<Box<dyn Predicate<W>>>) -> Self {
        assert!(operands.len() >= 2, "AnyOf needs at least two operands");
        Self { operands }
    }
}

impl<W> Predicate<W> for AnyOf<W>
where
    W: GridWorldView + 'static,
{
    fn eval(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        self.operands.iter().any(|p| p.eval(ctx, agent, world))
    }
}
