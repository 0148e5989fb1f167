use std::cell::Cell;
use std::rc::Rc;

use gridmind_bt::{BtNode, BtStatus, Condition, Not, Or, Parallel, Selector, Sequence};
use gridmind_core::{
    Action, Blackboard, GridPos, GridWorldMut, GridWorldView, TeamId, TickContext, WorldMut,
    WorldView,
};

#[derive(Debug, Default)]
struct TestWorld;

impl WorldView for TestWorld {
    type Agent = u64;
}

impl WorldMut for TestWorld {}

impl GridWorldView for TestWorld {
    fn position(&self, _agent: u64) -> Option<GridPos> {
        None
    }

    fn team(&self, _agent: u64) -> Option<TeamId> {
        None
    }

    fn hitpoints(&self, _agent: u64) -> Option<f32> {
        None
    }

    fn combatants(&self) -> Box<dyn Iterator<Item = u64> + '_> {
        Box::new(core::iter::empty())
    }
}

impl GridWorldMut for TestWorld {
    fn set_action(&mut self, _agent: u64, _action: Action) {}
}

/// Leaf that returns a fixed status and counts its ticks.
struct Stub {
    status: BtStatus,
    calls: Rc<Cell<u32>>,
}

impl BtNode<TestWorld> for Stub {
    fn tick(
        &mut self,
        _ctx: &TickContext,
        _agent: u64,
        _world: &mut TestWorld,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        self.calls.set(self.calls.get() + 1);
        self.status
    }
}

fn stub(status: BtStatus) -> (Box<dyn BtNode<TestWorld>>, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let node = Box::new(Stub {
        status,
        calls: Rc::clone(&calls),
    });
    (node, calls)
}

fn tick(node: &mut dyn BtNode<TestWorld>) -> BtStatus {
    let ctx = TickContext { tick: 0, seed: 7 };
    let mut world = TestWorld;
    let mut bb = Blackboard::new();
    node.tick(&ctx, 1, &mut world, &mut bb)
}

#[test]
fn sequence_stops_at_the_first_non_success() {
    let (a, a_calls) = stub(BtStatus::Success);
    let (b, b_calls) = stub(BtStatus::Running);
    let (c, c_calls) = stub(BtStatus::Success);
    let mut seq = Sequence::new(vec![a, b, c]);

    assert_eq!(tick(&mut seq), BtStatus::Running);
    assert_eq!(a_calls.get(), 1);
    assert_eq!(b_calls.get(), 1);
    assert_eq!(c_calls.get(), 0);
}

#[test]
fn sequence_of_successes_succeeds() {
    let (a, _) = stub(BtStatus::Success);
    let (b, b_calls) = stub(BtStatus::Success);
    let mut seq = Sequence::new(vec![a, b]);

    assert_eq!(tick(&mut seq), BtStatus::Success);
    assert_eq!(b_calls.get(), 1);
}

#[test]
fn selector_stops_at_the_first_non_failure() {
    let (a, a_calls) = stub(BtStatus::Failure);
    let (b, b_calls) = stub(BtStatus::Running);
    let (c, c_calls) = stub(BtStatus::Success);
    let mut sel = Selector::new(vec![a, b, c]);

    assert_eq!(tick(&mut sel), BtStatus::Running);
    assert_eq!(a_calls.get(), 1);
    assert_eq!(b_calls.get(), 1);
    assert_eq!(c_calls.get(), 0);
}

#[test]
fn selector_of_failures_fails() {
    let (a, _) = stub(BtStatus::Failure);
    let (b, b_calls) = stub(BtStatus::Failure);
    let mut sel = Selector::new(vec![a, b]);

    assert_eq!(tick(&mut sel), BtStatus::Failure);
    assert_eq!(b_calls.get(), 1);
}

#[test]
fn or_ticks_every_child_even_after_a_success() {
    let (a, a_calls) = stub(BtStatus::Success);
    let (b, b_calls) = stub(BtStatus::Failure);
    let (c, c_calls) = stub(BtStatus::Running);
    let mut or = Or::new(vec![a, b, c]);

    assert_eq!(tick(&mut or), BtStatus::Success);
    assert_eq!(a_calls.get(), 1);
    assert_eq!(b_calls.get(), 1);
    assert_eq!(c_calls.get(), 1);
}

#[test]
fn or_runs_when_nothing_succeeded() {
    let (a, _) = stub(BtStatus::Failure);
    let (b, _) = stub(BtStatus::Running);
    let mut or = Or::new(vec![a, b]);

    assert_eq!(tick(&mut or), BtStatus::Running);
}

#[test]
fn or_of_failures_fails() {
    let (a, _) = stub(BtStatus::Failure);
    let (b, _) = stub(BtStatus::Failure);
    let mut or = Or::new(vec![a, b]);

    assert_eq!(tick(&mut or), BtStatus::Failure);
}

#[test]
fn not_swaps_success_and_failure() {
    let (inner, _) = stub(BtStatus::Success);
    let mut not = Not::new(inner);
    assert_eq!(tick(&mut not), BtStatus::Failure);

    let (inner, _) = stub(BtStatus::Failure);
    let mut not = Not::new(inner);
    assert_eq!(tick(&mut not), BtStatus::Success);
}

#[test]
fn not_passes_running_through() {
    let (inner, _) = stub(BtStatus::Running);
    let mut not = Not::new(inner);
    assert_eq!(tick(&mut not), BtStatus::Running);
}

#[test]
fn parallel_ticks_every_child_and_any_failure_wins() {
    let (a, _) = stub(BtStatus::Success);
    let (b, _) = stub(BtStatus::Failure);
    let (c, c_calls) = stub(BtStatus::Running);
    let mut par = Parallel::new(vec![a, b, c]);

    assert_eq!(tick(&mut par), BtStatus::Failure);
    assert_eq!(c_calls.get(), 1);
}

#[test]
fn parallel_runs_while_any_child_runs() {
    let (a, _) = stub(BtStatus::Success);
    let (b, _) = stub(BtStatus::Running);
    let mut par = Parallel::new(vec![a, b]);

    assert_eq!(tick(&mut par), BtStatus::Running);
}

#[test]
fn parallel_of_successes_succeeds() {
    let (a, _) = stub(BtStatus::Success);
    let (b, _) = stub(BtStatus::Success);
    let mut par = Parallel::new(vec![a, b]);

    assert_eq!(tick(&mut par), BtStatus::Success);
}

#[test]
fn condition_maps_the_closure_onto_success_and_failure() {
    let flag = Rc::new(Cell::new(false));
    let read = Rc::clone(&flag);
    let mut cond = Condition::new(
        move |_: &TickContext, _: u64, _: &TestWorld, _: &Blackboard| read.get(),
    );

    assert_eq!(tick(&mut cond), BtStatus::Failure);
    flag.set(true);
    assert_eq!(tick(&mut cond), BtStatus::Success);
}

#[test]
#[should_panic(expected = "sequence needs at least one child")]
fn sequence_rejects_an_empty_child_list() {
    Sequence::<TestWorld>::new(Vec::new());
}

#[test]
#[should_panic(expected = "selector needs at least one child")]
fn selector_rejects_an_empty_child_list() {
    Selector::<TestWorld>::new(Vec::new());
}

#[test]
#[should_panic(expected = "or needs at least one child")]
fn or_rejects_an_empty_child_list() {
    Or::<TestWorld>::new(Vec::new());
}

#[test]
#[should_panic(expected = "parallel needs at least one child")]
fn parallel_rejects_an_empty_child_list() {
    Parallel::<TestWorld>::new(Vec::new());
}
