//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Dec16;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Der State wird nur gelesen; `&mut` wird für die zwischengespeicherten
/// Benutzer-Punkte beim Kurven-Treffertest gebraucht.
pub fn map_intent_to_commands(state: &mut AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PrimaryPressed { pos } => {
            if let Some(index) = state.hovered_point(pos) {
                return vec![AppCommand::BeginDrag { index }];
            }
            match use_cases::points::insertion_target(state, pos) {
                Some(index) => vec![AppCommand::InsertPoint { index, pos }],
                None => vec![],
            }
        }
        AppIntent::PrimaryReleased => vec![AppCommand::EndDrag],
        AppIntent::SecondaryPressed { pos } => {
            if state.drag_point.is_some() {
                return vec![];
            }
            state
                .hovered_point(pos)
                .map(|index| vec![AppCommand::RemovePoint { index }])
                .unwrap_or_default()
        }
        AppIntent::PointerMoved { pos } => {
            if state.drag_point.is_some() {
                vec![AppCommand::UpdateDrag { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::WindowResized { width, height } => {
            vec![AppCommand::SetWindowSize { width, height }]
        }
        AppIntent::SplineTypeChanged { spline_type } => {
            vec![AppCommand::SetSplineType { spline_type }]
        }
        AppIntent::UserBoundsChanged { x, y } => {
            let to_dec = |value: i32| {
                if state.options.raw_values {
                    Dec16::from_raw(value)
                } else {
                    Dec16::saturating_from_int(value)
                }
            };
            vec![AppCommand::SetUserBounds {
                x: x.map(to_dec),
                y: y.map(to_dec),
            }]
        }
        AppIntent::ResetPointsRequested => vec![AppCommand::ResetPoints],
        AppIntent::ResetSettingsRequested => vec![AppCommand::ResetSettings],
        AppIntent::LoadPointsRequested { x_text, y_text } => {
            vec![AppCommand::LoadPoints { x_text, y_text }]
        }
        AppIntent::RawValuesToggled { enabled } => vec![AppCommand::SetRawValues { enabled }],
        AppIntent::RefLinesToggled { enabled } => vec![AppCommand::SetDrawRefLines { enabled }],
        AppIntent::ResolutionChanged { resolution } => {
            vec![AppCommand::SetResolution { resolution }]
        }
        AppIntent::PointSizeChanged { size } => vec![AppCommand::SetPointSize { size }],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}

#[cfg(test)]
mod tests;
