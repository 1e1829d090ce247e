//! Toolbar, status bar, and the masked parameter field.

pub mod hud;
pub mod numeric_field;
pub mod theme;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<numeric_field::ParameterInput>().add_systems(
            Update,
            (
                numeric_field::parameter_field_input,
                hud::handle_toolbar_actions,
                hud::update_button_states,
                hud::update_status_bar,
                hud::update_parameter_display,
                hud::update_mode_button_label,
            ),
        );
    }
}
