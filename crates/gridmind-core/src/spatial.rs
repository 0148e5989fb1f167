//! Nearest-entity searches shared by the decision engines.
//!
//! Ties resolve to the first candidate in iteration order, which the world
//! contract fixes to stable id order, so results are deterministic.

use crate::{GridWorldView, Marker};

/// Nearest agent on a different team, with its distance.
pub fn nearest_enemy<W: GridWorldView>(world: &W, agent: W::Agent) -> Option<(W::Agent, f32)> {
    let pos = world.position(agent)?;
    let team = world.team(agent)?;

    let mut closest = None;
    let mut closest_dist = f32::MAX;
    for other in world.combatants() {
        if world.team(other) == Some(team) {
            continue;
        }
        let Some(other_pos) = world.position(other) else {
            continue;
        };
        let d = pos.dist(other_pos);
        if d < closest_dist {
            closest_dist = d;
            closest = Some(other);
        }
    }
    closest.map(|enemy| (enemy, closest_dist))
}

/// Nearest entity bearing `marker`, with its distance.
pub fn nearest_tagged<W: GridWorldView>(
    world: &W,
    agent: W::Agent,
    marker: Marker,
) -> Option<(W::Agent, f32)> {
    let pos = world.position(agent)?;

    let mut closest = None;
    let mut closest_dist = f32::MAX;
    for entity in world.tagged(marker) {
        let Some(entity_pos) = world.position(entity) else {
            continue;
        };
        let d = pos.dist(entity_pos);
        if d < closest_dist {
            closest_dist = d;
            closest = Some(entity);
        }
    }
    closest.map(|entity| (entity, closest_dist))
}
