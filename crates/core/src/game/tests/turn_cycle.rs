//! Tests for the turn machine: setup gating, input hand-off and terminal states.

use super::support::*;

#[test]
fn setup_rejects_moves_until_intro_delay_elapses() {
    let mut game = empty_level(100);
    let controlled = game.state.controlled;
    assert_eq!(game.turn_state(), TurnState::Setup);
    assert_eq!(
        game.submit_input(InputSignal::new(1, 0)),
        Err(GameError::StateViolation { state: TurnState::Setup })
    );
    assert_eq!(
        game.attempt_move(controlled, Direction::Right.delta(), Capability::Obstacle),
        Err(GameError::StateViolation { state: TurnState::Setup })
    );
    assert_eq!(game.resource(), 100);

    game.tick(1.0);
    assert_eq!(game.turn_state(), TurnState::Setup);
    game.tick(1.0);
    assert_eq!(game.turn_state(), TurnState::ControlledTurn);
    assert!(game.events().contains(&GameEvent::TurnChanged {
        from: TurnState::Setup,
        to: TurnState::ControlledTurn,
    }));
}

#[test]
fn controlled_input_hands_the_turn_to_hazards() {
    let mut game = ready_level(100);
    let outcome = game.submit_input(InputSignal::new(1, 0)).expect("accepted");
    assert_eq!(
        outcome,
        Some(MoveOutcome::Moved { from: Pos { y: 1, x: 1 }, to: Pos { y: 1, x: 2 } })
    );
    assert_eq!(game.turn_state(), TurnState::HazardPhase);
    assert_eq!(
        game.submit_input(InputSignal::new(0, 1)),
        Err(GameError::StateViolation { state: TurnState::HazardPhase })
    );

    settle(&mut game);
    assert_eq!(game.turn_state(), TurnState::ControlledTurn);
    assert_eq!(game.state.controlled_pos(), Pos { y: 1, x: 2 });
    assert_eq!(game.turns_taken(), 1);
}

#[test]
fn every_controlled_step_costs_one_and_yields_to_hazards() {
    let mut game = ready_level(100);
    for step in 1..=3 {
        let outcome = game.submit_input(InputSignal::new(1, 0)).expect("accepted");
        assert!(outcome.is_some_and(|outcome| outcome.moved()));
        assert_eq!(game.turn_state(), TurnState::HazardPhase, "step {step}");
        assert_eq!(game.resource(), 100 - step);

        // Time alone never hands the controlled entity a free second move.
        game.tick(0.5);
        assert!(game.accepts_input());
        assert_eq!(game.resource(), 100 - step);
    }
    assert_eq!(game.state.controlled_pos(), Pos { y: 1, x: 4 });
    assert_eq!(game.turns_taken(), 3);
}

#[test]
fn empty_registry_still_observes_the_double_pause() {
    let mut game = ready_level(100);
    game.submit_input(InputSignal::new(0, 1)).expect("accepted");
    game.tick(0.15);
    assert_eq!(game.turn_state(), TurnState::HazardPhase, "one turn delay is not enough");
    game.tick(0.1);
    assert_eq!(game.turn_state(), TurnState::ControlledTurn);
}

#[test]
fn diagonal_input_moves_only_horizontally() {
    let mut game = ready_level(100);
    place_controlled(&mut game, Pos { y: 4, x: 4 });
    let outcome = game.submit_input(InputSignal::new(-1, 1)).expect("accepted");
    assert_eq!(
        outcome,
        Some(MoveOutcome::Moved { from: Pos { y: 4, x: 4 }, to: Pos { y: 4, x: 3 } })
    );
    settle(&mut game);
    assert_eq!(game.state.controlled_pos(), Pos { y: 4, x: 3 });
}

#[test]
fn idle_signal_is_not_a_turn() {
    let mut game = ready_level(100);
    assert_eq!(game.submit_input(InputSignal::IDLE), Ok(None));
    assert_eq!(game.resource(), 100);
    assert_eq!(game.turn_state(), TurnState::ControlledTurn);
    assert_eq!(game.turns_taken(), 0);
}

#[test]
fn motion_is_interpolated_before_commit() {
    let mut game = ready_level(100);
    let controlled = game.state.controlled;
    game.submit_input(InputSignal::new(1, 0)).expect("accepted");
    game.tick(0.05);
    assert!(game.is_moving());
    assert_eq!(game.state.controlled_pos(), Pos { y: 1, x: 1 });
    let (x, y) = game.render_position(controlled).expect("controlled exists");
    assert!(x > 1.0 && x < 2.0 && y == 1.0, "mid-motion at ({x}, {y})");
    game.tick(0.05);
    game.tick(0.01);
    assert!(!game.is_moving());
    assert_eq!(game.render_position(controlled), Some((2.0, 1.0)));
}

#[test]
fn exhausted_resource_ends_the_game_and_rejects_everything() {
    let mut game = ready_level(1);
    let food = add_collectible(&mut game, Pos { y: 1, x: 2 }, CollectibleKind::Food);
    let controlled = game.state.controlled;

    game.submit_input(InputSignal::new(1, 0)).expect("accepted");
    assert_eq!(game.turn_state(), TurnState::GameOver);
    assert_eq!(game.final_level(), Some(1));
    assert!(game.events().contains(&GameEvent::Cue(AudioCue::GameOver)));
    assert!(game.events().contains(&GameEvent::GameOver { levels_survived: 1 }));

    game.tick(1.0);
    assert_eq!(game.state.controlled_pos(), Pos { y: 1, x: 2 });
    assert!(game.state.entities.contains_key(food), "pickups stop once the game is over");
    assert_eq!(game.resource(), 0);

    assert_eq!(
        game.submit_input(InputSignal::new(-1, 0)),
        Err(GameError::StateViolation { state: TurnState::GameOver })
    );
    assert_eq!(
        game.attempt_move(controlled, Direction::Left.delta(), Capability::Obstacle),
        Err(GameError::StateViolation { state: TurnState::GameOver })
    );
}

#[test]
fn reaching_the_exit_completes_the_level_after_restart_delay() {
    let mut game = ready_level(50);
    place_controlled(&mut game, Pos { y: 7, x: 8 });
    play_turn(&mut game, Direction::Up);

    assert_eq!(game.turn_state(), TurnState::LevelComplete);
    assert!(game.events().contains(&GameEvent::LevelCompleted { level: 1, resource: 49 }));
    assert!(!game.restart_ready());
    game.tick(0.5);
    assert!(!game.restart_ready());
    game.tick(0.6);
    assert!(game.restart_ready());
    assert_eq!(game.carryover(), RunCarryover { level: 1, resource: 49 });
    assert_eq!(
        game.submit_input(InputSignal::new(1, 0)),
        Err(GameError::StateViolation { state: TurnState::LevelComplete })
    );
}

#[test]
fn attempt_move_guards_mover_kind_and_direction() {
    let mut game = ready_level(100);
    let hazard = add_hazard(&mut game, Pos { y: 5, x: 5 }, HazardKind::Stalker);
    assert_eq!(
        game.attempt_move(hazard, Direction::Left.delta(), Capability::Controlled),
        Err(GameError::StateViolation { state: TurnState::ControlledTurn })
    );

    let controlled = game.state.controlled;
    assert_eq!(
        game.attempt_move(controlled, Delta { dx: 1, dy: 1 }, Capability::Obstacle),
        Err(GameError::InvalidDirection { dx: 1, dy: 1 })
    );
    assert_eq!(
        game.attempt_move(controlled, Delta { dx: 0, dy: 0 }, Capability::Obstacle),
        Err(GameError::InvalidDirection { dx: 0, dy: 0 })
    );
    assert!(!game.is_moving());

    game.state.entities.remove(hazard);
    assert_eq!(
        game.attempt_move(hazard, Direction::Left.delta(), Capability::Controlled),
        Err(GameError::UnknownEntity)
    );
}

#[test]
fn level_bootstrap_reports_every_placement() {
    let game = empty_level(100);
    let placed = |category| {
        game.events()
            .iter()
            .filter(|event| matches!(event, GameEvent::Placed { category: c, .. } if *c == category))
            .count()
    };
    assert_eq!(placed(Category::Floor), 8 * 8);
    assert_eq!(placed(Category::Boundary), 12 * 12 - 8 * 8);
    assert_eq!(placed(Category::Exit), 1);
    assert_eq!(placed(Category::Controlled), 1);
    assert_eq!(game.events().first(), Some(&GameEvent::LevelStarted { level: 1 }));
}
