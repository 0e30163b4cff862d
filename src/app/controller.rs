//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &mut AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        log::debug!("Command: {:?}", command);

        match command {
            // === Punkte ===
            AppCommand::BeginDrag { index } => handlers::points::begin_drag(state, index),
            AppCommand::UpdateDrag { pos } => handlers::points::update_drag(state, pos),
            AppCommand::EndDrag => handlers::points::end_drag(state),
            AppCommand::InsertPoint { index, pos } => handlers::points::insert(state, index, pos),
            AppCommand::RemovePoint { index } => handlers::points::remove(state, index),
            AppCommand::ResetPoints => handlers::points::reset(state),
            AppCommand::LoadPoints { x_text, y_text } => {
                handlers::points::load(state, &x_text, &y_text)?
            }

            // === Einstellungen ===
            AppCommand::SetSplineType { spline_type } => {
                handlers::settings::set_spline_type(state, spline_type)
            }
            AppCommand::SetUserBounds { x, y } => handlers::settings::set_user_bounds(state, x, y),
            AppCommand::SetWindowSize { width, height } => {
                handlers::settings::set_window_size(state, width, height)
            }
            AppCommand::ResetSettings => handlers::settings::reset(state),
            AppCommand::SetRawValues { enabled } => {
                handlers::settings::set_raw_values(state, enabled)
            }
            AppCommand::SetDrawRefLines { enabled } => {
                handlers::settings::set_draw_ref_lines(state, enabled)
            }
            AppCommand::SetResolution { resolution } => {
                handlers::settings::set_resolution(state, resolution)
            }
            AppCommand::SetPointSize { size } => handlers::settings::set_point_size(state, size),
            AppCommand::SaveOptions { path } => handlers::settings::save_options(state, &path)?,
        }

        Ok(())
    }
}
