use std::collections::BTreeMap;

use gridmind::core::{
    tick_brains, Action, Blackboard, Brain, GridPos, GridWorldMut, GridWorldView, Policy, TeamId,
    TickContext, WorldMut, WorldView,
};
use gridmind::dmap::{approach_map, Tile, TileGrid};
use gridmind::tools::install_log;
use gridmind::{bt, fsm};

#[derive(Debug, Default)]
struct Dungeon {
    positions: BTreeMap<u64, GridPos>,
    teams: BTreeMap<u64, TeamId>,
    hitpoints: BTreeMap<u64, f32>,
    actions: BTreeMap<u64, Action>,
}

impl Dungeon {
    fn spawn_combatant(&mut self, id: u64, pos: GridPos, team: TeamId, hp: f32) {
        self.positions.insert(id, pos);
        self.teams.insert(id, team);
        self.hitpoints.insert(id, hp);
    }

    fn action(&self, id: u64) -> Action {
        self.actions.get(&id).copied().unwrap_or_default()
    }

    /// Moves every agent by its recorded action, then clears the turn.
    fn apply(&mut self) {
        let moves: Vec<(u64, Action)> = self.actions.iter().map(|(a, act)| (*a, *act)).collect();
        for (agent, action) in moves {
            let Some(pos) = self.positions.get(&agent).copied() else {
                continue;
            };
            let next = match action {
                Action::MoveLeft => GridPos::new(pos.x - 1, pos.y),
                Action::MoveRight => GridPos::new(pos.x + 1, pos.y),
                Action::MoveDown => GridPos::new(pos.x, pos.y - 1),
                Action::MoveUp => GridPos::new(pos.x, pos.y + 1),
                _ => pos,
            };
            self.positions.insert(agent, next);
        }
        self.actions.clear();
    }
}

impl WorldView for Dungeon {
    type Agent = u64;
}

impl WorldMut for Dungeon {}

impl GridWorldView for Dungeon {
    fn position(&self, agent: u64) -> Option<GridPos> {
        self.positions.get(&agent).copied()
    }

    fn team(&self, agent: u64) -> Option<TeamId> {
        self.teams.get(&agent).copied()
    }

    fn hitpoints(&self, agent: u64) -> Option<f32> {
        self.hitpoints.get(&agent).copied()
    }

    fn combatants(&self) -> Box<dyn Iterator<Item = u64> + '_> {
        Box::new(
            self.positions
                .keys()
                .copied()
                .filter(move |a| self.teams.contains_key(a)),
        )
    }
}

impl GridWorldMut for Dungeon {
    fn set_action(&mut self, agent: u64, action: Action) {
        self.actions.insert(agent, action);
    }
}

fn ctx(tick: u64) -> TickContext {
    TickContext { tick, seed: 42 }
}

/// Melee stalker: recompute the approach field every turn and walk downhill.
struct Stalker {
    grid: TileGrid,
}

impl Policy<Dungeon> for Stalker {
    fn act(&mut self, _ctx: &TickContext, agent: u64, world: &mut Dungeon, _bb: &mut Blackboard) {
        let map = approach_map(world, &self.grid, 0);
        let Some(pos) = world.position(agent) else {
            return;
        };
        if let Some(step) = map.descend(&self.grid, pos) {
            world.set_action(agent, step);
        }
    }
}

#[test]
fn stalker_walks_the_approach_field_around_a_wall() {
    let mut grid = TileGrid::open(9, 7);
    grid.set(4, 2, Tile::Wall);
    grid.set(4, 3, Tile::Wall);
    grid.set(4, 4, Tile::Wall);

    let mut world = Dungeon::default();
    world.spawn_combatant(1, GridPos::new(0, 3), 0, 100.0);
    world.spawn_combatant(4, GridPos::new(8, 3), 1, 100.0);

    let mut brains: Vec<Brain<Dungeon>> =
        vec![Brain::new(4, Box::new(Stalker { grid: grid.clone() }))];

    // The wall sits dead ahead, so the first leg detours upward.
    tick_brains(&ctx(0), &mut world, &mut brains);
    assert_eq!(world.action(4), Action::MoveUp);
    world.apply();

    // Walkable distance is 12; one downhill step per turn closes it.
    for turn in 1..12u64 {
        tick_brains(&ctx(turn), &mut world, &mut brains);
        world.apply();
        let pos = world.positions[&4];
        assert!(grid.is_floor(pos.x, pos.y));
    }
    assert_eq!(world.positions[&4], GridPos::new(0, 3));

    // Standing on the quarry there is no downhill left.
    tick_brains(&ctx(12), &mut world, &mut brains);
    assert_eq!(world.action(4), Action::Nop);
}

/// Minotaur tree as wired in the original dungeon: bolt, gore, prowl.
fn minotaur_tree(bb: &mut Blackboard, world: &Dungeon) -> bt::BehaviorTree<Dungeon> {
    let bolt: Box<dyn bt::BtNode<Dungeon>> = Box::new(bt::Sequence::new(vec![
        Box::new(bt::IsLowHp::new(40.0)),
        Box::new(bt::FindEnemy::<Dungeon>::new(bb, "minotaur.enemy", 6.0)),
        Box::new(bt::Flee::<Dungeon>::new(bb, "minotaur.enemy")),
    ]));
    let gore: Box<dyn bt::BtNode<Dungeon>> = Box::new(bt::Sequence::new(vec![
        Box::new(bt::FindEnemy::<Dungeon>::new(bb, "minotaur.enemy", 4.0)),
        Box::new(bt::MoveToEntity::<Dungeon>::new(bb, "minotaur.enemy")),
    ]));
    let prowl: Box<dyn bt::BtNode<Dungeon>> =
        Box::new(bt::Patrol::new(bb, world, 2, "minotaur.lair", 3.0));
    bt::BehaviorTree::new(Box::new(bt::Selector::new(vec![bolt, gore, prowl])))
}

/// Crafter machine: keep the stall open while a monster is close, patrol
/// otherwise.
fn crafter_machine() -> fsm::StateMachine<Dungeon> {
    let mut sm = fsm::StateMachine::new();
    let patrol = sm.add_state(Box::new(fsm::Patrol::new(3.0)));
    let stall = sm.add_state(Box::new(fsm::Activity::new(fsm::ActivityKind::Market)));
    sm.add_transition(Box::new(fsm::EnemyAvailable::new(3.0)), patrol, stall);
    sm.add_transition(
        Box::new(fsm::Not::new(Box::new(fsm::EnemyAvailable::new(5.0)))),
        stall,
        patrol,
    );
    sm
}

#[test]
fn one_turn_runs_every_brain_in_stable_agent_order() {
    let grid = TileGrid::open(9, 7);

    let mut world = Dungeon::default();
    world.spawn_combatant(1, GridPos::new(0, 3), 0, 100.0);
    world.spawn_combatant(2, GridPos::new(6, 1), 1, 100.0);
    world.spawn_combatant(3, GridPos::new(2, 5), 1, 100.0);
    world.spawn_combatant(4, GridPos::new(8, 3), 1, 100.0);

    let mut minotaur_bb = Blackboard::new();
    let minotaur_policy = minotaur_tree(&mut minotaur_bb, &world);

    let mut crafter_bb = Blackboard::new();
    install_log(&mut crafter_bb);

    // Deliberately out of order; tick_brains sorts by stable id.
    let mut brains: Vec<Brain<Dungeon>> = vec![
        Brain::new(4, Box::new(Stalker { grid })),
        Brain {
            agent: 3,
            blackboard: crafter_bb,
            policy: Box::new(crafter_machine()),
        },
        Brain {
            agent: 2,
            blackboard: minotaur_bb,
            policy: Box::new(minotaur_policy),
        },
    ];

    tick_brains(&ctx(0), &mut world, &mut brains);

    let order: Vec<u64> = brains.iter().map(|b| b.agent).collect();
    assert_eq!(order, [2, 3, 4]);

    // Minotaur: the player is well out of range, so it prowls the lair.
    assert!(Action::MOVES.contains(&world.action(2)));

    // Crafter: the player two and a bit tiles away keeps the stall open.
    let tags: Vec<&str> = gridmind::tools::log(&brains[1].blackboard)
        .unwrap()
        .events
        .iter()
        .map(|e| e.tag.as_ref())
        .collect();
    assert!(tags.contains(&"fsm.transition"));
    assert!(tags.contains(&"state.market"));

    // Stalker: open field, straight line at the player.
    assert_eq!(world.action(4), Action::MoveLeft);
}
