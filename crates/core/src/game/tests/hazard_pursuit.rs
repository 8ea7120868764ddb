//! Tests for hazard chase direction, sweep ordering and the move/skip cadence.

use super::support::*;

#[test]
fn chase_prefers_horizontal_until_column_aligned() {
    let hazard = Pos { y: 2, x: 2 };
    let direction = chase_direction(hazard, Pos { y: 5, x: 5 });
    assert_eq!(direction, Some(Direction::Right));
    assert_eq!(hazard.offset(Direction::Right.delta()), Pos { y: 2, x: 3 });

    let hazard = Pos { y: 2, x: 5 };
    let direction = chase_direction(hazard, Pos { y: 7, x: 5 });
    assert_eq!(direction, Some(Direction::Up));
    assert_eq!(hazard.offset(Direction::Up.delta()), Pos { y: 3, x: 5 });

    assert_eq!(chase_direction(Pos { y: 6, x: 4 }, Pos { y: 1, x: 4 }), Some(Direction::Down));
    assert_eq!(chase_direction(Pos { y: 1, x: 4 }, Pos { y: 9, x: 1 }), Some(Direction::Left));
    assert_eq!(chase_direction(Pos { y: 3, x: 3 }, Pos { y: 3, x: 3 }), None);
}

#[test]
fn hazard_steps_towards_controlled_during_its_phase() {
    let mut game = ready_level(100);
    let stalker = add_hazard(&mut game, Pos { y: 4, x: 4 }, HazardKind::Stalker);
    // Down from (1, 1) bumps the border, so the target stays put.
    let outcome = play_turn(&mut game, Direction::Down);
    assert!(matches!(outcome, MoveOutcome::Blocked { obstruction: Obstruction::Boundary, .. }));
    assert_eq!(game.state.entities[stalker].pos, Pos { y: 4, x: 3 });
}

#[test]
fn hazard_rests_one_turn_after_every_attempt() {
    let mut game = ready_level(100);
    let stalker = add_hazard(&mut game, Pos { y: 5, x: 6 }, HazardKind::Stalker);

    let mut positions = Vec::new();
    let mut actions = Vec::new();
    for _ in 0..4 {
        game.drain_events();
        play_turn(&mut game, Direction::Down);
        positions.push(game.state.entities[stalker].pos);
        actions.extend(hazard_actions(game.events()));
    }

    assert_eq!(
        positions,
        vec![Pos { y: 5, x: 5 }, Pos { y: 5, x: 5 }, Pos { y: 5, x: 4 }, Pos { y: 5, x: 4 }]
    );
    assert!(matches!(
        actions[0],
        (id, HazardAction::Attempted(outcome)) if id == stalker && outcome.moved()
    ));
    assert_eq!(actions[1], (stalker, HazardAction::Skipped));
    assert!(matches!(actions[2].1, HazardAction::Attempted(_)));
    assert_eq!(actions[3], (stalker, HazardAction::Skipped));
}

#[test]
fn every_hazard_acts_once_per_sweep_in_registration_order() {
    let mut game = ready_level(100);
    let first = add_hazard(&mut game, Pos { y: 6, x: 6 }, HazardKind::Brute);
    let second = add_hazard(&mut game, Pos { y: 3, x: 7 }, HazardKind::Stalker);
    let third = add_hazard(&mut game, Pos { y: 7, x: 2 }, HazardKind::Stalker);

    game.drain_events();
    play_turn(&mut game, Direction::Down);
    let acted: Vec<EntityId> = hazard_actions(game.events()).into_iter().map(|(id, _)| id).collect();
    assert_eq!(acted, vec![first, second, third]);

    game.drain_events();
    play_turn(&mut game, Direction::Down);
    let skipped = hazard_actions(game.events())
        .into_iter()
        .filter(|(_, action)| *action == HazardAction::Skipped)
        .count();
    assert_eq!(skipped, 3);
}

#[test]
fn hazard_hit_drains_the_resource_by_its_damage() {
    let mut game = ready_level(100);
    add_hazard(&mut game, Pos { y: 1, x: 2 }, HazardKind::Stalker);

    play_turn(&mut game, Direction::Down);
    assert_eq!(game.resource(), 100 - 1 - 10);
    assert!(game.events().contains(&GameEvent::Cue(AudioCue::Hit)));

    play_turn(&mut game, Direction::Down);
    assert_eq!(game.resource(), 88, "resting turn deals no damage");

    play_turn(&mut game, Direction::Down);
    assert_eq!(game.resource(), 77);
}

#[test]
fn controlled_bumping_a_hazard_does_not_interact() {
    let mut game = ready_level(100);
    let stalker = add_hazard(&mut game, Pos { y: 1, x: 2 }, HazardKind::Stalker);
    let outcome = game.submit_input(InputSignal::new(1, 0)).expect("accepted");
    assert_eq!(
        outcome,
        Some(MoveOutcome::Blocked {
            obstruction: Obstruction::Entity { id: stalker, capability: Capability::Hazard },
            interacted: false,
        })
    );
    assert_eq!(game.resource(), 99);
    assert_eq!(game.state.controlled_pos(), Pos { y: 1, x: 1 });
}

#[test]
fn fatal_hit_stops_the_sweep() {
    let mut game = ready_level(15);
    let brute = add_hazard(&mut game, Pos { y: 1, x: 2 }, HazardKind::Brute);
    let bystander = add_hazard(&mut game, Pos { y: 6, x: 6 }, HazardKind::Stalker);

    game.drain_events();
    play_turn(&mut game, Direction::Down);
    assert_eq!(game.turn_state(), TurnState::GameOver);
    assert_eq!(game.resource(), 15 - 1 - 20);
    let acted: Vec<EntityId> = hazard_actions(game.events()).into_iter().map(|(id, _)| id).collect();
    assert_eq!(acted, vec![brute]);
    assert_eq!(game.state.entities[bystander].pos, Pos { y: 6, x: 6 });
}

#[test]
fn hazard_stalls_against_an_obstacle_and_still_rests() {
    let mut game = ready_level(100);
    let stalker = add_hazard(&mut game, Pos { y: 3, x: 3 }, HazardKind::Stalker);
    let wall = add_obstacle(&mut game, Pos { y: 3, x: 2 });

    game.drain_events();
    play_turn(&mut game, Direction::Down);
    assert_eq!(game.state.entities[stalker].pos, Pos { y: 3, x: 3 });
    assert_eq!(hp_of(&game, wall), Some(3));
    assert!(matches!(
        hazard_actions(game.events()).as_slice(),
        [(_, HazardAction::Attempted(MoveOutcome::Blocked { interacted: false, .. }))]
    ));

    game.drain_events();
    play_turn(&mut game, Direction::Down);
    assert_eq!(hazard_actions(game.events()), vec![(stalker, HazardAction::Skipped)]);
}

#[test]
fn next_hazard_waits_out_the_previous_pause() {
    let mut game = ready_level(100);
    let first = add_hazard(&mut game, Pos { y: 5, x: 5 }, HazardKind::Stalker);
    let second = add_hazard(&mut game, Pos { y: 7, x: 3 }, HazardKind::Stalker);
    let turn_delay = game.config.turn_delay;
    let move_duration = game.config.move_duration;

    // Down from (1, 1) bumps the border, so no controlled motion overlaps the sweep.
    game.submit_input(InputSignal::new(0, -1)).expect("accepted");
    game.drain_events();

    let dt = 0.01;
    let mut elapsed = 0.0_f32;
    let mut acted_at = Vec::new();
    while game.turn_state() == TurnState::HazardPhase && elapsed < 1.0 {
        game.tick(dt);
        elapsed += dt;
        for (id, _) in hazard_actions(&game.drain_events()) {
            acted_at.push((id, elapsed));
        }
    }

    let order: Vec<EntityId> = acted_at.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![first, second]);
    let (first_at, second_at) = (acted_at[0].1, acted_at[1].1);
    assert!(first_at >= turn_delay - 1e-4, "first hazard acted at {first_at}");
    assert!(first_at < turn_delay + 3.0 * dt, "first hazard acted late at {first_at}");
    assert!(
        second_at - first_at >= move_duration - 1e-4,
        "second hazard acted {}s after the first",
        second_at - first_at
    );
}
