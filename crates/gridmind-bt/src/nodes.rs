use gridmind_core::{Blackboard, GridWorldMut, TickContext};

use crate::bt::{BtNode, BtStatus};

/// Runs children in order; stops at and returns the first non-Success
/// result, else Success.
pub struct Sequence<W>
where
    W: GridWorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Sequence<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        assert!(!children.is_empty(), "sequence needs at least one child");
        Self { children }
    }
}

impl<W> BtNode<W> for Sequence<W>
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
        for child in self.children.iter_mut() {
            let status = child.tick(ctx, agent, world, blackboard);
            if status != BtStatus::Success {
                return status;
            }
        }
        BtStatus::Success
    }
}

/// Runs children in order; stops at and returns the first non-Failure
/// result, else Failure.
pub struct Selector<W>
where
    W: GridWorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Selector<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        assert!(!children.is_empty(), "selector needs at least one child");
        Self { children }
    }
}

impl<W> BtNode<W> for Selector<W>
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
        for child in self.children.iter_mut() {
            let status = child.tick(ctx, agent, world, blackboard);
            if status != BtStatus::Failure {
                return status;
            }
        }
        BtStatus::Failure
    }
}

/// Runs every child every tick, with no short-circuit.
///
/// Success if any child succeeded, else Running if any ran, else Failure.
/// Later children tick regardless of earlier results, so their side
/// effects do not depend on sibling outcomes.
pub struct Or<W>
where
    W: GridWorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Or<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        assert!(!children.is_empty(), "or needs at least one child");
        Self { children }
    }
}

impl<W> BtNode<W> for Or<W>
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
        let mut any_success = false;
        let mut any_running = false;
        for child in self.children.iter_mut() {
            match child.tick(ctx, agent, world, blackboard) {
                BtStatus::Success => any_success = true,
                BtStatus::Running => any_running = true,
                BtStatus::Failure => {}
            }
        }
        if any_success {
            BtStatus::Success
        } else if any_running {
            BtStatus::Running
        } else {
            BtStatus::Failure
        }
    }
}

/// Swaps Failure and Success; Running passes through.
pub struct Not<W>
where
    W: GridWorldMut + 'static,
{
    child: Box<dyn BtNode<W>>,
}

impl<W> Not<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self { child }
    }
}

impl<W> BtNode<W> for Not<W>
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
        match self.child.tick(ctx, agent, world, blackboard) {
            BtStatus::Success => BtStatus::Failure,
            BtStatus::Failure => BtStatus::Success,
            BtStatus::Running => BtStatus::Running,
        }
    }
}

/// Runs every child every tick.
///
/// Failure if any child failed, else Running if any ran, else Success.
pub struct Parallel<W>
where
    W: GridWorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Parallel<W>
where
    W: GridWorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        assert!(!children.is_empty(), "parallel needs at least one child");
        Self { children }
    }
}

impl<W> BtNode<W> for Parallel<W>
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
        let mut any_failure = false;
        let mut any_running = false;
        for child in self.children.iter_mut() {
            match child.tick(ctx, agent, world, blackboard) {
                BtStatus::Failure => any_failure = true,
                BtStatus::Running => any_running = true,
                BtStatus::Success => {}
            }
        }
        if any_failure {
            BtStatus::Failure
        } else if any_running {
            BtStatus::Running
        } else {
            BtStatus::Success
        }
    }
}

/// Closure condition leaf: Success when the closure returns true.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, W> BtNode<W> for Condition<F>
where
    F: FnMut(&TickContext, W::Agent, &W, &Blackboard) -> bool + 'static,
    W: GridWorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        if (self.cond)(ctx, agent, &*world, &*blackboard) {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}
