//! Process-wide style constants
//!
//! Rendering and UI styling lives here as plain constants; draw code takes
//! these as configuration instead of owning mutable shared brushes.

use bevy::prelude::Color;

// Background Color
pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);
pub const CANVAS_COLOR: Color = Color::srgb(0.16, 0.16, 0.18);

// Point Cloud
pub const POINT_COLOR: Color = Color::srgb(0.25, 0.5, 1.0);
pub const POINT_SIZE: f32 = 2.0;

// Hull Outline
pub const RING_COLOR: Color = Color::srgb(0.9, 0.1, 0.1);
pub const HIGHLIGHT_COLOR: Color = Color::srgb(0.86, 0.08, 0.24);
pub const HIGHLIGHT_VERTEX_RADIUS: f32 = 6.0;
pub const GIZMO_LINE_WIDTH: f32 = 2.0;

// UI Colors
pub const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(1.0, 0.6, 0.0);
pub const DISABLED_BUTTON: Color = Color::srgb(0.12, 0.12, 0.12);
pub const BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

// Text
pub const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const DIM_TEXT_COLOR: Color = Color::srgb(0.55, 0.55, 0.55);
pub const TOOLBAR_FONT_SIZE: f32 = 16.0;
pub const STATUS_FONT_SIZE: f32 = 14.0;

// Parameter Field
pub const FIELD_BACKGROUND: Color = Color::srgb(0.08, 0.08, 0.08);
pub const FIELD_TEXT_COLOR: Color = Color::srgb(1.0, 0.85, 0.4);
