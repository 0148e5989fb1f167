use gridmind_core::{move_towards, Action, GridPos};

#[test]
fn move_towards_takes_the_dominant_axis() {
    let from = GridPos::new(0, 0);
    assert_eq!(move_towards(from, GridPos::new(3, 1)), Action::MoveRight);
    assert_eq!(move_towards(from, GridPos::new(-3, 1)), Action::MoveLeft);
    assert_eq!(move_towards(from, GridPos::new(1, 3)), Action::MoveUp);
    assert_eq!(move_towards(from, GridPos::new(1, -3)), Action::MoveDown);
}

#[test]
fn axis_ties_break_to_y() {
    let from = GridPos::new(0, 0);
    assert_eq!(move_towards(from, GridPos::new(2, 2)), Action::MoveUp);
    assert_eq!(move_towards(from, GridPos::new(2, -2)), Action::MoveDown);
    assert_eq!(move_towards(from, GridPos::new(-2, 2)), Action::MoveUp);
}

#[test]
fn inverse_swaps_directions_and_is_an_involution() {
    assert_eq!(Action::MoveLeft.inverse(), Action::MoveRight);
    assert_eq!(Action::MoveUp.inverse(), Action::MoveDown);
    assert_eq!(Action::Attack.inverse(), Action::Attack);

    for action in [
        Action::Nop,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::MoveUp,
        Action::Attack,
        Action::HealSelf,
    ] {
        assert_eq!(action.inverse().inverse(), action);
    }
}

#[test]
fn the_cardinal_move_order_is_fixed() {
    // Random walks index into this table; reordering it would change
    // every replay.
    assert_eq!(
        Action::MOVES,
        [
            Action::MoveLeft,
            Action::MoveRight,
            Action::MoveDown,
            Action::MoveUp,
        ]
    );
}

#[test]
fn grid_distance_is_euclidean() {
    let a = GridPos::new(0, 0);
    let b = GridPos::new(3, 4);
    assert_eq!(a.dist_sq(b), 25.0);
    assert_eq!(a.dist(b), 5.0);
    assert_eq!(b.dist(a), 5.0);
}
