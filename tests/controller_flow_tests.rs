use spline_gen::{
    format_point_list, AppCommand, AppController, AppIntent, AppState, EditorOptions, Point,
    ScreenPoint, SplineType,
};

fn load(controller: &mut AppController, state: &mut AppState, x: &str, y: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::LoadPointsRequested {
                x_text: x.to_string(),
                y_text: y.to_string(),
            },
        )
        .expect("LoadPointsRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_click_on_curve_inserts_and_drags_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                pos: ScreenPoint::new(400, 401),
            },
        )
        .expect("PrimaryPressed sollte ohne Fehler durchlaufen");
    assert_eq!(state.window_points().len(), 3);
    assert_eq!(state.drag_point, Some(1));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: ScreenPoint::new(600, 200),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::PrimaryReleased)
        .expect("PrimaryReleased sollte ohne Fehler durchlaufen");

    assert!(state.drag_point.is_none());
    assert_eq!(state.window_points()[1], ScreenPoint::new(600, 200));
    assert_eq!(state.user_points()[1], Point::from_ints(75, 75));
}

#[test]
fn test_dragged_border_point_keeps_its_x() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                pos: ScreenPoint::new(2, 798),
            },
        )
        .expect("PrimaryPressed sollte ohne Fehler durchlaufen");
    assert_eq!(state.drag_point, Some(0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: ScreenPoint::new(300, 1000),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert_eq!(state.window_points()[0], ScreenPoint::new(0, 800));
}

#[test]
fn test_secondary_press_removes_interior_point_only() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, "0, 50, 100", "0, 50, 100");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                pos: ScreenPoint::new(0, 800),
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");
    assert_eq!(state.window_points().len(), 3);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                pos: ScreenPoint::new(401, 399),
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");
    assert_eq!(
        state.window_points(),
        &[ScreenPoint::new(0, 800), ScreenPoint::new(800, 0)]
    );
}

#[test]
fn test_invalid_point_list_reports_error_and_keeps_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.window_points().to_vec();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadPointsRequested {
            x_text: "0, zehn".to_string(),
            y_text: "0, 10".to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.window_points(), before.as_slice());

    // zu eng beieinander liegende Punkte werden ebenfalls abgewiesen
    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadPointsRequested {
            x_text: "0, 1, 100".to_string(),
            y_text: "0, 50, 100".to_string(),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.window_points(), before.as_slice());
}

#[test]
fn test_out_of_order_insert_command_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(
            &mut state,
            AppCommand::InsertPoint {
                index: 1,
                pos: ScreenPoint::new(0, 400),
            },
        )
        .expect("InsertPoint sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.window_points(),
        &[ScreenPoint::new(0, 800), ScreenPoint::new(800, 0)]
    );
    assert!(state.drag_point.is_none());
    assert_eq!(state.curve_polyline().len(), 101);
}

#[test]
fn test_user_bounds_beyond_fixed_range_are_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::UserBoundsChanged {
                x: [0, 40000],
                y: [0, 100],
            },
        )
        .expect("UserBoundsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.options.user_x_range, [0, 32767]);
    assert_eq!(state.user_points()[1].x.to_int(), 32767);
}

#[test]
fn test_leaving_parametric_mode_resets_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SplineTypeChanged {
                spline_type: SplineType::Parametric,
            },
        )
        .expect("SplineTypeChanged sollte ohne Fehler durchlaufen");
    load(&mut controller, &mut state, "0, 100, 0", "0, 50, 100");
    assert_eq!(state.window_points().len(), 3);
    assert!(state.curve_polyline().len() >= 101);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SplineTypeChanged {
                spline_type: SplineType::Linear,
            },
        )
        .expect("SplineTypeChanged sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.user_points(),
        &[Point::from_ints(0, 0), Point::from_ints(100, 100)]
    );
}

#[test]
fn test_window_resize_keeps_user_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, "0, 25, 100", "0, 50, 100");

    controller
        .handle_intent(
            &mut state,
            AppIntent::WindowResized {
                width: 400,
                height: 200,
            },
        )
        .expect("WindowResized sollte ohne Fehler durchlaufen");

    assert_eq!(state.window_points()[1], ScreenPoint::new(100, 100));
    let (x, y) = format_point_list(state.user_points(), false);
    assert_eq!(x, "0, 25, 100");
    assert_eq!(y, "0, 50, 100");
}

#[test]
fn test_user_bounds_change_reinterprets_window_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::UserBoundsChanged {
                x: [0, 200],
                y: [-50, 50],
            },
        )
        .expect("UserBoundsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.window_points()[1], ScreenPoint::new(800, 0));
    assert_eq!(
        state.user_points(),
        &[Point::from_ints(0, -50), Point::from_ints(200, 50)]
    );
    assert_eq!(state.options.user_x_range, [0, 200]);
}

#[test]
fn test_reset_settings_restores_defaults() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for intent in [
        AppIntent::ResolutionChanged { resolution: 7 },
        AppIntent::PointSizeChanged { size: 12 },
        AppIntent::RawValuesToggled { enabled: true },
        AppIntent::RefLinesToggled { enabled: true },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Einstellungs-Intent sollte ohne Fehler durchlaufen");
    }
    // 7 Schritte à 100/7 verfehlen das Ende knapp, es wird angehängt
    assert_eq!(state.curve_polyline().len(), 9);

    controller
        .handle_intent(&mut state, AppIntent::ResetSettingsRequested)
        .expect("ResetSettingsRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.options, EditorOptions::default());
}

#[test]
fn test_save_options_writes_loadable_toml() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join("spline_gen_controller_flow_options.toml");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SplineTypeChanged {
                spline_type: SplineType::Cubic,
            },
        )
        .expect("SplineTypeChanged sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveOptionsRequested { path: path.clone() },
        )
        .expect("SaveOptionsRequested sollte ohne Fehler durchlaufen");

    let loaded = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, state.options);
    assert_eq!(loaded.spline_type, SplineType::Cubic);
}
