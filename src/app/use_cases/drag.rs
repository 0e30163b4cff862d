//! Use-Case-Funktionen für das Ziehen eines Kontrollpunkts.

use crate::app::AppState;
use crate::core::{BoundsRect, ScreenPoint};
use crate::shared::{point_restrict_x, point_to_point_collide};

/// Beschränkt die gewünschte Position eines gezogenen Punkts.
///
/// Die Position wird zuerst ins Fenster geklemmt. Parametrisch hält der Punkt
/// `min_delta` Abstand zum Vorgänger und danach zum Nachfolger. Sonst bleibt die
/// X-Reihenfolge erhalten: innere Punkte werden in X zwischen den Nachbarn gehalten,
/// Randpunkte bewegen sich nur in Y.
pub fn drag_constrain(
    points: &[ScreenPoint],
    index: usize,
    proposed: ScreenPoint,
    min_delta: i32,
    is_parametric: bool,
    window: &BoundsRect,
) -> ScreenPoint {
    let current = points[index];
    let mut constrained = ScreenPoint::new(
        proposed.x.clamp(window.x_min.to_int(), window.x_max.to_int()),
        proposed.y.clamp(window.y_min.to_int(), window.y_max.to_int()),
    );
    let last = points.len() - 1;

    if is_parametric {
        if index != 0 {
            constrained = point_to_point_collide(constrained, points[index - 1], min_delta);
        }
        if index != last {
            constrained = point_to_point_collide(constrained, points[index + 1], min_delta);
        }
        // Zweites Wegschieben kann auf dem Vorgänger landen
        let on_prev = index != 0 && constrained == points[index - 1];
        let on_next = index != last && constrained == points[index + 1];
        if on_prev || on_next {
            constrained = current;
        }
    } else if index != 0 && index != last {
        let (x_left, x_right) = (points[index - 1].x, points[index + 1].x);
        constrained = point_restrict_x(constrained, x_right, x_left, min_delta);
        // Zu enge Lücke: X-Ordnung geht vor, Punkt bleibt in X stehen
        if constrained.x <= x_left || constrained.x >= x_right {
            constrained.x = current.x;
        }
    } else {
        constrained.x = current.x;
    }
    constrained
}

/// Bewegt den gerade gezogenen Punkt Richtung `pos`. Ohne laufenden Drag: No-op.
pub fn update_drag(state: &mut AppState, pos: ScreenPoint) {
    let Some(index) = state.drag_point else {
        return;
    };
    if index >= state.window_points().len() {
        log::warn!("Drag-Index {} außerhalb der Punktliste, Drag beendet", index);
        state.drag_point = None;
        return;
    }

    let constrained = drag_constrain(
        state.window_points(),
        index,
        pos,
        state.options.min_point_delta,
        state.is_parametric(),
        &state.window_bounds,
    );
    state.modify_points(|points| points[index] = constrained);
}
