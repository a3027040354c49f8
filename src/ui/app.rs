//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::session::Session;
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{GameStatus, HUMAN};
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        tracing::info!("new game");
        Self {
            session: Session::new(&config),
            board_view: BoardView::default(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: Black  |  Computer: White");
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("15 × 15, five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, or who won
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let game = &self.session.game;
        let status = game.status();

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let stone = match status {
                    GameStatus::InProgress(turn) | GameStatus::Won(turn) => Some(turn),
                    GameStatus::Draw => None,
                };
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                match stone {
                    Some(Stone::Black) => {
                        ui.painter().circle_filled(rect.center(), 20.0, BLACK_STONE);
                    }
                    Some(Stone::White) => {
                        ui.painter().circle_filled(rect.center(), 20.0, WHITE_STONE);
                    }
                    _ => {
                        ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, TEXT_MUTED));
                    }
                }

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let headline = game.message().to_string();
                    let color = if status.is_terminal() { WIN_HIGHLIGHT } else { TEXT_PRIMARY };
                    ui.label(RichText::new(headline).size(18.0).strong().color(color));

                    let detail = match status {
                        GameStatus::InProgress(turn) if turn == HUMAN => ("Click an empty point", STATUS_OK),
                        GameStatus::InProgress(_) => ("Computer is thinking...", STATUS_WAIT),
                        GameStatus::Won(winner) if winner == HUMAN => ("You made five!", STATUS_OK),
                        GameStatus::Won(_) => ("The computer made five", STATUS_WAIT),
                        GameStatus::Draw => ("The board is full", TEXT_SECONDARY),
                    };
                    ui.label(RichText::new(detail.0).size(12.0).color(detail.1));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let restart = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(RichText::new("🔄 Restart").size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                })
                .inner;
            if restart {
                self.session.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Details of the computer's last choice
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.session.game.last_ai_result() {
                Some(result) => {
                    let col = (b'A' + result.best_move.col) as char;
                    let row = crate::BOARD_SIZE as u8 - result.best_move.row;
                    ui.label(RichText::new(format!("→ {}{}", col, row)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("{} tied cells, {}ms", result.candidates, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
                None => {
                    ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let game = &self.session.game;
                let input_for = (game.is_human_turn() && !self.session.is_ai_pending()).then_some(HUMAN);

                let clicked = self.board_view.show(
                    ui,
                    BoardFrame {
                        board: game.board(),
                        input_for,
                        last_move: game.last_move(),
                        winning_line: game.winning_line(),
                    },
                );

                if let Some(pos) = clicked {
                    self.session.try_place_stone(pos, Instant::now());
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.session.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.session.tick(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up in time to play the pending computer move
        if let Some(remaining) = self.session.ai_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
