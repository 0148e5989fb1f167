use gridmind_core::{Blackboard, DeterministicRng, GridWorldMut, TickContext};
use gridmind_tools::{emit, TraceEvent};

use crate::bt::{BtNode, BtStatus};

/// Scores a child against the blackboard. Higher wins.
pub type UtilityFn = Box<dyn Fn(&Blackboard) -> f32>;

const DRAW_STREAM: u64 = 2;

/// Ranks children by score each tick and runs them in descending order
/// until one returns something other than Failure.
///
/// The sort is stable, so equal scores fall back to child order. A NaN
/// score ranks below every finite score.
pub struct UtilitySelector<W>
where
    W: GridWorldMut + 'static,
{
    children: Vec<(Box<dyn BtNode<W>>, UtilityFn)>,
}

impl<W> UtilitySelector<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(children: Vec<(Box<dyn BtNode<W>>, UtilityFn)>) -> Self {
        assert!(
            !children.is_empty(),
            "utility selector needs at least one child"
        );
        Self { children }
    }
}

impl<W> BtNode<W> for UtilitySelector<W>
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
        let mut order: Vec<(f32, usize)> = self
            .children
            .iter()
            .enumerate()
            .map(|(i, (_, utility))| {
                let score = utility(&*blackboard);
                let score = if score.is_nan() { f32::NEG_INFINITY } else { score };
                (score, i)
            })
            .collect();
        order.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, i) in order {
            let status = self.children[i].0.tick(ctx, agent, world, blackboard);
            if status != BtStatus::Failure {
                emit(
                    blackboard,
                    TraceEvent::new(ctx.tick, "bt.utility.pick").with_a(i as u64),
                );
                return status;
            }
        }
        BtStatus::Failure
    }
}

/// Draws children at random, weighted by score plus a heat bonus that
/// rewards sticking with the previous pick.
///
/// Heat starts at [`Self::MAX_HEAT`] when a child is first picked and
/// decays by [`Self::HEAT_STEP`] each consecutive re-pick; switching
/// resets the old child's heat to zero. A child that fails sits out the
/// rest of the turn's draws, so a tick makes at most one attempt per
/// child.
pub struct WeightedUtilitySelector<W>
where
    W: GridWorldMut + 'static,
{
    children: Vec<(Box<dyn BtNode<W>>, UtilityFn)>,
    heats: Vec<f32>,
    last: Option<usize>,
}

impl<W> WeightedUtilitySelector<W>
where
    W: GridWorldMut + 'static,
{
    pub const MAX_HEAT: f32 = 200.0;
    pub const HEAT_STEP: f32 = 25.0;

    pub fn new(children: Vec<(Box<dyn BtNode<W>>, UtilityFn)>) -> Self {
        assert!(
            !children.is_empty(),
            "weighted utility selector needs at least one child"
        );
        let heats = vec![0.0; children.len()];
        Self {
            children,
            heats,
            last: None,
        }
    }

    /// Current heat bonus for the child at `index`.
    pub fn heat(&self, index: usize) -> f32 {
        self.heats[index]
    }

    /// Index of the child whose tick last returned Success or Running.
    pub fn last_choice(&self) -> Option<usize> {
        self.last
    }
}

impl<W> BtNode<W> for WeightedUtilitySelector<W>
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
        let weights: Vec<f32> = self
            .children
            .iter()
            .enumerate()
            .map(|(i, (_, utility))| {
                let w = utility(&*blackboard) + self.heats[i];
                if w.is_nan() || w < 0.0 {
                    0.0
                } else {
                    w
                }
            })
            .collect();

        let mut rng = ctx.rng_for_agent(agent, DRAW_STREAM);
        let mut pool: Vec<usize> = (0..self.children.len()).collect();
        while !pool.is_empty() {
            let slot = draw_slot(&mut rng, &pool, &weights);
            let pick = pool[slot];
            emit(
                blackboard,
                TraceEvent::new(ctx.tick, "bt.utility.draw").with_a(pick as u64),
            );
            let status = self.children[pick].0.tick(ctx, agent, world, blackboard);
            if status == BtStatus::Failure {
                // Failed child sits out the rest of this turn's draws.
                pool.remove(slot);
                continue;
            }
            match self.last {
                Some(prev) if prev == pick => {
                    self.heats[pick] -= Self::HEAT_STEP;
                }
                Some(prev) => {
                    self.heats[prev] = 0.0;
                    self.heats[pick] = Self::MAX_HEAT;
                    self.last = Some(pick);
                }
                None => {
                    self.heats[pick] = Self::MAX_HEAT;
                    self.last = Some(pick);
                }
            }
            return status;
        }
        BtStatus::Failure
    }
}

/// Draws one pool slot, weighted by each member's weight. When every
/// weight in the pool is zero the draw falls back to uniform.
fn draw_slot<R: DeterministicRng>(rng: &mut R, pool: &[usize], weights: &[f32]) -> usize {
    let total: f32 = pool.iter().map(|&i| weights[i]).sum();
    if total <= 0.0 {
        return rng.next_index(pool.len());
    }
    let mut r = rng.next_f32_unit() * total;
    for (slot, &i) in pool.iter().enumerate() {
        r -= weights[i];
        if r <= 0.0 {
            return slot;
        }
    }
    pool.len() - 1
}
