//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - light wood
pub const BOARD_BG: Color32 = Color32::from_rgb(240, 217, 181);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 60, 40);
pub const STAR_POINT: Color32 = Color32::from_rgb(90, 60, 40);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(45, 45, 45);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(95, 95, 95);
pub const WHITE_STONE: Color32 = Color32::from_rgb(240, 240, 240);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn last_move_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 80, 80, 180)
}

pub fn hover_preview(turn: crate::Stone) -> Color32 {
    match turn {
        crate::Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
        _ => Color32::from_rgba_unmultiplied(45, 45, 45, 90),
    }
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(42, 45, 50);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_HUMAN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_AI: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 90, 90);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS_RATIO: f32 = 0.43;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_RING_WIDTH: f32 = 2.0;

// Star point positions (0-indexed)
pub const STAR_POINTS: [(u8, u8); 9] = [
    (3, 3), (3, 7), (3, 11),
    (7, 3), (7, 7), (7, 11),
    (11, 3), (11, 7), (11, 11),
];
