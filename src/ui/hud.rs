//! Toolbar and status bar
//!
//! A top toolbar with the three workflow buttons (load, compute, save),
//! the sizing-mode toggle and the masked parameter field, plus a bottom
//! status bar that always shows the latest status message. Buttons mirror
//! the workspace state: a step is clickable only once its inputs exist,
//! and everything that triggers the hull computation stays disabled while
//! one is running.

use bevy::prelude::*;

use crate::core::settings::{settings_path, FormatSettings};
use crate::core::state::{AppState, StatusEvent};
use crate::editing::highlight::{HighlightChanged, HighlightState};
use crate::hull::ActiveHullTask;
use crate::io::{load_points, save_ring};
use crate::ui::numeric_field::ParameterInput;
use crate::ui::theme::*;

/// What a toolbar button does when pressed.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    LoadPoints,
    ComputeHull,
    SaveResult,
    ToggleSizingMode,
}

#[derive(Component)]
pub struct StatusBarText;

#[derive(Component)]
pub struct ParameterFieldText;

#[derive(Component)]
pub struct ModeButtonText;

/// Spawns all HUD elements: the toolbar and the status bar.
pub fn spawn_hud(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            padding: UiRect::all(Val::Px(8.0)),
            column_gap: Val::Px(8.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|toolbar| {
            spawn_button(toolbar, "Load points", ToolbarAction::LoadPoints);
            spawn_button(toolbar, "Compute hull", ToolbarAction::ComputeHull);
            spawn_button(toolbar, "Save result", ToolbarAction::SaveResult);
            spawn_button(
                toolbar,
                "Mode: edge-length ratio",
                ToolbarAction::ToggleSizingMode,
            );

            toolbar.spawn((
                Text::new("Parameter:"),
                TextFont {
                    font_size: TOOLBAR_FONT_SIZE,
                    ..default()
                },
                TextColor(DIM_TEXT_COLOR),
            ));
            toolbar
                .spawn((
                    Node {
                        min_width: Val::Px(80.0),
                        padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(FIELD_BACKGROUND),
                ))
                .with_children(|field| {
                    field.spawn((
                        ParameterFieldText,
                        Text::new("0.3"),
                        TextFont {
                            font_size: TOOLBAR_FONT_SIZE,
                            ..default()
                        },
                        TextColor(FIELD_TEXT_COLOR),
                    ));
                });
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|bar| {
            bar.spawn((
                StatusBarText,
                Text::new("Ready"),
                TextFont {
                    font_size: STATUS_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    action: ToolbarAction,
) {
    let mut button = parent.spawn((
        Button,
        action,
        Node {
            padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
            border: UiRect::all(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(NORMAL_BUTTON),
        BorderColor(BUTTON_OUTLINE_COLOR),
    ));
    button.with_children(|inner| {
        let mut text = inner.spawn((
            Text::new(label),
            TextFont {
                font_size: TOOLBAR_FONT_SIZE,
                ..default()
            },
            TextColor(TEXT_COLOR),
        ));
        if action == ToolbarAction::ToggleSizingMode {
            text.insert(ModeButtonText);
        }
    });
}

/// Is this action currently available?
fn action_enabled(
    action: ToolbarAction,
    state: &AppState,
    task: &ActiveHullTask,
) -> bool {
    match action {
        ToolbarAction::LoadPoints => {
            state.workspace.source_path.is_some() && !task.is_running()
        }
        ToolbarAction::ComputeHull => {
            state.workspace.has_points() && !task.is_running()
        }
        ToolbarAction::SaveResult => state.workspace.has_ring(),
        ToolbarAction::ToggleSizingMode => true,
    }
}

/// Dispatch toolbar clicks.
#[allow(clippy::too_many_arguments)]
pub fn handle_toolbar_actions(
    interactions: Query<(&Interaction, &ToolbarAction), Changed<Interaction>>,
    mut state: ResMut<AppState>,
    mut task: ResMut<ActiveHullTask>,
    mut field: ResMut<ParameterInput>,
    mut highlight: ResMut<HighlightState>,
    mut highlight_events: EventWriter<HighlightChanged>,
    mut status: EventWriter<StatusEvent>,
) {
    for (interaction, action) in interactions.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if !action_enabled(*action, &state, &task) {
            continue;
        }
        match action {
            ToolbarAction::LoadPoints => load_action(
                &mut state,
                &mut highlight,
                &mut highlight_events,
                &mut status,
            ),
            ToolbarAction::ComputeHull => {
                compute_action(&state, &field, &mut task, &mut status)
            }
            ToolbarAction::SaveResult => save_action(&state, &mut status),
            ToolbarAction::ToggleSizingMode => {
                field.use_length_ratio = !field.use_length_ratio;
                field.reset_for_mode();
                let mode = if field.use_length_ratio {
                    "edge-length ratio in [0, 1]"
                } else {
                    "maximum edge length"
                };
                status.write(StatusEvent(format!("Sizing mode: {mode}")));
            }
        }
    }
}

/// Load (or reload) the configured input file into the workspace.
pub fn load_action(
    state: &mut AppState,
    highlight: &mut HighlightState,
    highlight_events: &mut EventWriter<HighlightChanged>,
    status: &mut EventWriter<StatusEvent>,
) {
    let Some(path) = state.workspace.source_path.clone() else {
        status.write(StatusEvent(
            "No input file selected; start with --load <file>".to_string(),
        ));
        return;
    };
    let format = state.workspace.format;

    match load_points(&path, &format) {
        Ok(loaded) if loaded.coords.is_empty() => {
            // Keep the previous point set; an empty parse is not a load
            status.write(StatusEvent(format!(
                "No coordinates found in '{}' ({} rows skipped)",
                path.display(),
                loaded.skipped.len()
            )));
        }
        Ok(loaded) => {
            let message = format!(
                "Loaded {} points from '{}' as {} ({} rows skipped)",
                loaded.coords.len(),
                path.display(),
                loaded.encoding_name,
                loaded.skipped.len()
            );
            info!("{message}");
            status.write(StatusEvent(message));

            state.workspace.set_points(loaded, path);
            if highlight.index().is_some() {
                highlight.clear();
                highlight_events.write(HighlightChanged(None));
            }

            // Remember the format that worked
            if let Err(err) =
                FormatSettings::from_format(&format).save(&settings_path())
            {
                warn!("Could not persist format settings: {err:#}");
            }
        }
        Err(err) => {
            error!("Load failed: {err:#}");
            status.write(StatusEvent(format!("Error loading points: {err:#}")));
        }
    }
}

fn compute_action(
    state: &AppState,
    field: &ParameterInput,
    task: &mut ActiveHullTask,
    status: &mut EventWriter<StatusEvent>,
) {
    let sizing = match field.sizing() {
        Ok(sizing) => sizing,
        Err(err) => {
            status.write(StatusEvent(format!("{err:#}")));
            return;
        }
    };

    let points = state.workspace.points.clone();
    status.write(StatusEvent(format!(
        "Computing concave hull of {} points...",
        points.len()
    )));
    task.spawn(points, sizing);
}

fn save_action(state: &AppState, status: &mut EventWriter<StatusEvent>) {
    let workspace = &state.workspace;
    let Some(ring) = &workspace.ring else {
        return;
    };
    let Some(path) = workspace.export_path() else {
        status.write(StatusEvent("Nowhere to save: no input file".into()));
        return;
    };

    match save_ring(
        &path,
        ring,
        &workspace.format,
        &workspace.header_x,
        &workspace.header_y,
    ) {
        Ok(()) => {
            let message =
                format!("Boundary saved to '{}'", path.display());
            info!("{message}");
            status.write(StatusEvent(message));
        }
        Err(err) => {
            error!("Save failed: {err:#}");
            status.write(StatusEvent(format!("Error saving result: {err:#}")));
        }
    }
}

/// Recolor buttons from their interaction and enablement.
pub fn update_button_states(
    state: Res<AppState>,
    task: Res<ActiveHullTask>,
    mut buttons: Query<
        (&Interaction, &ToolbarAction, &mut BackgroundColor),
        With<Button>,
    >,
) {
    for (interaction, action, mut color) in buttons.iter_mut() {
        let next = if !action_enabled(*action, &state, &task) {
            DISABLED_BUTTON
        } else {
            match interaction {
                Interaction::Pressed => PRESSED_BUTTON,
                Interaction::Hovered => HOVERED_BUTTON,
                Interaction::None => NORMAL_BUTTON,
            }
        };
        *color = BackgroundColor(next);
    }
}

/// Show the newest status message.
pub fn update_status_bar(
    mut events: EventReader<StatusEvent>,
    mut query: Query<&mut Text, With<StatusBarText>>,
) {
    let Some(latest) = events.read().last() else {
        return;
    };
    for mut text in query.iter_mut() {
        text.0 = latest.0.clone();
    }
}

/// Keep the parameter field display in sync with the masked input.
pub fn update_parameter_display(
    field: Res<ParameterInput>,
    mut query: Query<&mut Text, With<ParameterFieldText>>,
) {
    if !field.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        text.0 = field.text.clone();
    }
}

/// Relabel the mode toggle when the sizing mode flips.
pub fn update_mode_button_label(
    field: Res<ParameterInput>,
    mut query: Query<&mut Text, With<ModeButtonText>>,
) {
    if !field.is_changed() {
        return;
    }
    let label = if field.use_length_ratio {
        "Mode: edge-length ratio"
    } else {
        "Mode: max edge length"
    };
    for mut text in query.iter_mut() {
        text.0 = label.to_string();
    }
}
