//! Main application for the Gomoku GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameOutcome, GameState};
use super::theme::*;
use crate::{ConfigError, EngineConfig, Stone};

const RULES_TEXT: &str = "Place stones on the intersections. \
The first player to get five or more in a row, horizontally, \
vertically or diagonally, wins.";

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    /// Whether the end-of-game window is still open
    show_result: bool,
}

impl GomokuApp {
    /// Create the app with the given engine settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config)?,
            board_view: BoardView::default(),
            show_result: false,
        })
    }

    fn new_game(&mut self) {
        self.state.reset();
        self.show_result = false;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let side = if self.state.human == Stone::Black {
                        "Black"
                    } else {
                        "White"
                    };
                    ui.label(format!("You: {side}"));
                });
            });
        });
    }

    /// Render the side panel with rules, status and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                Self::card_frame().show(ui, |ui| {
                    ui.label(RichText::new("RULES").size(10.0).color(TEXT_MUTED));
                    ui.add_space(4.0);
                    ui.label(RichText::new(RULES_TEXT).size(12.0).color(TEXT_SECONDARY));
                });
                ui.add_space(10.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_search_card(ui);

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(STATUS_LOSS));
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn status_color(&self) -> egui::Color32 {
        match self.state.result.as_ref().map(|r| r.outcome) {
            Some(GameOutcome::HumanWins) => WIN_HIGHLIGHT,
            Some(GameOutcome::ComputerWins) => STATUS_LOSS,
            Some(GameOutcome::Draw) => TEXT_SECONDARY,
            None if self.state.is_human_turn() => STATUS_HUMAN,
            None => STATUS_AI,
        }
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);
            ui.label(
                RichText::new(self.state.status())
                    .size(18.0)
                    .strong()
                    .color(self.status_color()),
            );
            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    /// Statistics of the computer's last move
    fn render_search_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST AI MOVE").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("-").size(11.0).color(TEXT_MUTED));
                return;
            };

            if let Some(pos) = result.best_move {
                ui.label(RichText::new(format!("{pos}")).size(13.0).strong().color(TEXT_PRIMARY));
            }
            ui.label(
                RichText::new(format!("{:?}, score {}", result.search_type, result.score))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self
                .state
                .result
                .as_ref()
                .and_then(|r| r.winning_line.as_deref());
            let preview = (self.state.is_human_turn() && !self.state.is_ai_thinking())
                .then_some(self.state.human);

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                winning_line,
                preview,
            );

            if let Some(pos) = clicked {
                match self.state.try_place_stone(pos) {
                    Ok(()) => self.show_result = self.state.is_game_over(),
                    Err(err) => log::debug!("rejected click at {pos}: {err}"),
                }
            }
        });
    }

    /// Modal window announcing the outcome
    fn render_result_window(&mut self, ctx: &Context) {
        if !self.show_result {
            return;
        }
        let Some(outcome) = self.state.result.as_ref().map(|r| r.outcome) else {
            return;
        };
        let title = match outcome {
            GameOutcome::HumanWins => "Congratulations",
            GameOutcome::ComputerWins | GameOutcome::Draw => "Game Over",
        };

        let status = self.state.status();
        let color = self.status_color();

        let mut new_game = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(status).size(24.0).strong().color(color));
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("New Game").clicked() {
                            new_game = true;
                        }
                        if ui.button("OK").clicked() {
                            self.show_result = false;
                        }
                    });
                });
            });

        if new_game {
            self.new_game();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let was_over = self.state.is_game_over();
        let busy = self.state.tick(Instant::now());
        if !was_over && self.state.is_game_over() {
            self.show_result = true;
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_result_window(ctx);

        if busy {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
