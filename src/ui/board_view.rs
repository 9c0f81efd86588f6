//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// `preview` is the human's color while a click would be accepted;
    /// it enables the hover stone and click reporting.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        preview: Option<Stone>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let turn = preview?;
        let board_pos = self.screen_to_board(response.hover_pos()?)?;
        if !board.is_empty(board_pos) {
            return None;
        }

        painter.circle_filled(
            self.board_to_screen(board_pos),
            self.cell_size * STONE_RADIUS_RATIO,
            hover_preview(turn),
        );
        response.clicked().then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied().iter_ones() {
            self.draw_stone(painter, pos, board.get(pos));
        }
    }

    /// Draw a single stone with a drop shadow
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius, Stroke::new(1.0, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    /// Ring around the most recent stone
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(LAST_MOVE_RING_WIDTH, last_move_marker()),
        );
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &pos in line {
            let center = self.board_to_screen(pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Nearest intersection to a screen point, if it lies on the board
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        cell_at(relative, self.cell_size)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Round a point relative to the board's top-left corner to the nearest
/// intersection.
fn cell_at(relative: Vec2, cell_size: f32) -> Option<Pos> {
    let col = ((relative.x - BOARD_MARGIN + cell_size * 0.5) / cell_size).floor();
    let row = ((relative.y - BOARD_MARGIN + cell_size * 0.5) / cell_size).floor();
    Pos::try_new(row as i32, col as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f32 = 40.0;

    fn at(row: f32, col: f32) -> Vec2 {
        Vec2::new(BOARD_MARGIN + col * CELL, BOARD_MARGIN + row * CELL)
    }

    #[test]
    fn test_exact_intersections() {
        assert_eq!(cell_at(at(0.0, 0.0), CELL), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(at(7.0, 7.0), CELL), Some(Pos::new(7, 7)));
        assert_eq!(cell_at(at(14.0, 3.0), CELL), Some(Pos::new(14, 3)));
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(cell_at(at(2.4, 5.6), CELL), Some(Pos::new(2, 6)));
        assert_eq!(cell_at(at(2.6, 5.4), CELL), Some(Pos::new(3, 5)));
        assert_eq!(cell_at(at(-0.4, 14.4), CELL), Some(Pos::new(0, 14)));
    }

    #[test]
    fn test_off_board() {
        assert_eq!(cell_at(at(-0.6, 0.0), CELL), None);
        assert_eq!(cell_at(at(0.0, 14.6), CELL), None);
        assert_eq!(cell_at(at(15.0, 15.0), CELL), None);
    }
}
