use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Dec16, ScreenPoint, SplineType};

use super::map_intent_to_commands;

#[test]
fn primary_press_on_point_begins_drag() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &mut state,
        AppIntent::PrimaryPressed {
            pos: ScreenPoint::new(798, 2),
        },
    );

    assert_eq!(commands, vec![AppCommand::BeginDrag { index: 1 }]);
}

#[test]
fn primary_press_on_curve_maps_to_insert() {
    let mut state = AppState::new();
    let pos = ScreenPoint::new(400, 401);

    let commands = map_intent_to_commands(&mut state, AppIntent::PrimaryPressed { pos });

    assert_eq!(commands, vec![AppCommand::InsertPoint { index: 1, pos }]);
}

#[test]
fn primary_press_on_empty_area_maps_to_nothing() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &mut state,
        AppIntent::PrimaryPressed {
            pos: ScreenPoint::new(100, 100),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn secondary_press_is_ignored_while_dragging() {
    let mut state = AppState::new();
    let pos = ScreenPoint::new(0, 800);

    let commands = map_intent_to_commands(&mut state, AppIntent::SecondaryPressed { pos });
    assert_eq!(commands, vec![AppCommand::RemovePoint { index: 0 }]);

    state.drag_point = Some(1);
    let commands = map_intent_to_commands(&mut state, AppIntent::SecondaryPressed { pos });
    assert!(commands.is_empty());
}

#[test]
fn pointer_move_updates_drag_only_while_dragging() {
    let mut state = AppState::new();
    let pos = ScreenPoint::new(10, 10);

    assert!(map_intent_to_commands(&mut state, AppIntent::PointerMoved { pos }).is_empty());

    state.drag_point = Some(0);
    let commands = map_intent_to_commands(&mut state, AppIntent::PointerMoved { pos });
    assert!(matches!(commands[0], AppCommand::UpdateDrag { .. }));
}

#[test]
fn user_bounds_follow_raw_value_mode() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &mut state,
        AppIntent::UserBoundsChanged {
            x: [0, 100],
            y: [-10, 10],
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::SetUserBounds {
            x: [Dec16::ZERO, Dec16::from_int(100)],
            y: [Dec16::from_int(-10), Dec16::from_int(10)],
        }]
    );

    state.options.raw_values = true;
    let commands = map_intent_to_commands(
        &mut state,
        AppIntent::UserBoundsChanged {
            x: [0, 65536],
            y: [-10, 10],
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::SetUserBounds {
            x: [Dec16::ZERO, Dec16::ONE],
            y: [Dec16::from_raw(-10), Dec16::from_raw(10)],
        }]
    );
}

#[test]
fn user_bounds_outside_fixed_range_are_clamped() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &mut state,
        AppIntent::UserBoundsChanged {
            x: [0, 40000],
            y: [-40000, 100],
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetUserBounds {
            x: [Dec16::ZERO, Dec16::from_int(Dec16::INT_MAX)],
            y: [Dec16::from_int(Dec16::INT_MIN), Dec16::from_int(100)],
        }]
    );
}

#[test]
fn spline_type_change_maps_to_command() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &mut state,
        AppIntent::SplineTypeChanged {
            spline_type: SplineType::Parametric,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetSplineType {
            spline_type: SplineType::Parametric
        }
    ));
}
