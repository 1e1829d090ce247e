//! Creates the app and adds the plugins and systems

use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_pancam::PanCamPlugin;

use crate::core::cli::CliArgs;
use crate::core::pointer::PointerPlugin;
use crate::core::settings::{settings_path, FormatSettings};
use crate::core::state::{AppState, StatusEvent};
use crate::editing::highlight::{HighlightChanged, HighlightState};
use crate::editing::EditingPlugin;
use crate::hull::HullPlugin;
use crate::io::encoding::fallback_by_label;
use crate::rendering::cameras::spawn_canvas_camera;
use crate::rendering::{spawn_canvas_backdrop, RenderingPlugin};
use crate::ui::hud::{load_action, spawn_hud};
use crate::ui::numeric_field::ParameterInput;
use crate::ui::theme::{BACKGROUND_COLOR, GIZMO_LINE_WIDTH};
use crate::ui::UiPlugin;

/// Create the app and add the plugins and systems.
pub fn create_app(args: CliArgs) -> App {
    let mut app = App::new();

    let window_config = Window {
        title: "Hullview".into(),
        resolution: (1024., 768.).into(),
        ..default()
    };

    app.insert_resource(WinitSettings::desktop_app())
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(args)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config),
                    ..default()
                })
                // The custom logger in `logger.rs` replaces Bevy's
                .build()
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_plugins(PanCamPlugin::default())
        .add_plugins(HullviewSystems);
    app
}

/// Main application plugin that bundles all internal plugins
pub struct HullviewSystems;

impl Plugin for HullviewSystems {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppState>()
            .add_event::<StatusEvent>()
            .add_plugins((
                PointerPlugin,
                RenderingPlugin,
                EditingPlugin,
                HullPlugin,
                UiPlugin,
            ))
            .add_systems(Startup, (setup, initial_load).chain());
    }
}

/// Initial setup system that runs on startup.
fn setup(
    mut commands: Commands,
    args: Res<CliArgs>,
    mut state: ResMut<AppState>,
    mut field: ResMut<ParameterInput>,
    mut status: EventWriter<StatusEvent>,
    mut gizmo_store: ResMut<GizmoConfigStore>,
) {
    // Persisted format settings, overridden by whatever the CLI pins down
    let mut settings = FormatSettings::load(&settings_path());
    if let Some(delimiter) = args.delimiter {
        settings.delimiter = delimiter;
    }
    if let Some(separator) = args.decimal_separator {
        settings.decimal_separator = separator;
    }
    if args.has_header {
        settings.has_header = true;
    }
    if let Some(label) = &args.fallback_encoding {
        if fallback_by_label(label).is_some() {
            settings.fallback_encoding = label.clone();
        } else {
            warn!(
                "Unknown encoding label '{label}', keeping '{}'",
                settings.fallback_encoding
            );
        }
    }

    let format = settings.to_format();
    let format = match format.validate() {
        Ok(()) => format,
        Err(err) => {
            status.write(StatusEvent(format!(
                "Invalid file format settings: {err:#}; using defaults"
            )));
            Default::default()
        }
    };

    state.workspace.format = format;
    state.workspace.source_path = args.input.clone();
    state.workspace.output_path = args.output.clone();

    field.separator = format.decimal_separator;
    field.reset_for_mode();

    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = GIZMO_LINE_WIDTH;

    if args.debug {
        info!(
            "Format: delimiter {:?}, decimal separator {:?}, header: {}, \
             fallback encoding {}",
            format.delimiter,
            format.decimal_separator,
            format.has_header,
            format.fallback_encoding.name()
        );
    }

    spawn_canvas_camera(&mut commands);
    spawn_canvas_backdrop(&mut commands);
    spawn_hud(&mut commands);

    status.write(StatusEvent("Ready".to_string()));
}

/// Load the file named on the command line, if any, as soon as the app
/// starts.
fn initial_load(
    mut state: ResMut<AppState>,
    mut highlight: ResMut<HighlightState>,
    mut highlight_events: EventWriter<HighlightChanged>,
    mut status: EventWriter<StatusEvent>,
) {
    if state.workspace.source_path.is_none() {
        return;
    }
    load_action(
        &mut state,
        &mut highlight,
        &mut highlight_events,
        &mut status,
    );
}
