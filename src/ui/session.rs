//! Session state for the Gomoku GUI

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::engine::AIEngine;
use crate::game::GameController;
use crate::{GameError, Pos};

/// One window's game plus the computer move waiting to be played
pub struct Session {
    pub game: GameController,
    /// When the computer is due to answer
    pending_ai: Option<Instant>,
    ai_delay: Duration,
    /// Last rejection, shown until the next accepted move
    pub message: Option<String>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };
        Self {
            game: GameController::with_engine(engine),
            pending_ai: None,
            ai_delay: config.ai_delay(),
            message: None,
        }
    }

    /// Restart. A computer move still waiting is dropped.
    pub fn reset(&mut self) {
        self.game.reset();
        self.pending_ai = None;
        self.message = None;
    }

    pub fn is_ai_pending(&self) -> bool {
        self.pending_ai.is_some()
    }

    /// Time left before the pending computer move, if any
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending_ai.map(|due| due.saturating_duration_since(now))
    }

    /// Handle a click on `pos`
    pub fn try_place_stone(&mut self, pos: Pos, now: Instant) {
        if self.is_ai_pending() {
            self.message = Some("Computer is thinking".to_string());
            return;
        }

        match self.game.human_move(pos.x(), pos.y()) {
            Ok(_) => {
                self.message = None;
                if self.game.is_computer_turn() {
                    self.pending_ai = Some(now + self.ai_delay);
                }
            }
            Err(err) => {
                tracing::debug!(%err, "placement rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Play the computer's move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.pending_ai else {
            return;
        };
        if now < due {
            return;
        }

        self.pending_ai = None;
        match self.game.trigger_computer_move() {
            Ok(_) | Err(GameError::NoMoveAvailable) => {}
            Err(err) => tracing::debug!(%err, "computer move skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Stone};

    fn session(delay_ms: u64) -> Session {
        let config = AppConfig {
            seed: Some(11),
            ai_delay_ms: delay_ms,
            ..AppConfig::default()
        };
        Session::new(&config)
    }

    #[test]
    fn test_computer_waits_for_delay() {
        let mut s = session(500);
        let t0 = Instant::now();
        s.try_place_stone(Pos::new(7, 7), t0);
        assert!(s.is_ai_pending());
        assert_eq!(s.ai_remaining(t0), Some(Duration::from_millis(500)));

        s.tick(t0 + Duration::from_millis(100));
        assert_eq!(s.game.status(), GameStatus::InProgress(Stone::White));
        assert_eq!(s.game.move_count(), 1);

        s.tick(t0 + Duration::from_millis(500));
        assert!(!s.is_ai_pending());
        assert_eq!(s.game.status(), GameStatus::InProgress(Stone::Black));
        assert_eq!(s.game.move_count(), 2);
    }

    #[test]
    fn test_click_while_pending_ignored() {
        let mut s = session(500);
        let t0 = Instant::now();
        s.try_place_stone(Pos::new(7, 7), t0);
        s.try_place_stone(Pos::new(8, 8), t0);
        assert_eq!(s.game.move_count(), 1);
        assert!(s.message.is_some());
    }

    #[test]
    fn test_reset_drops_pending_move() {
        let mut s = session(500);
        let t0 = Instant::now();
        s.try_place_stone(Pos::new(7, 7), t0);
        s.reset();
        s.tick(t0 + Duration::from_secs(1));
        assert!(s.game.board().is_board_empty());
        assert_eq!(s.game.status(), GameStatus::InProgress(Stone::Black));
    }

    #[test]
    fn test_rejection_sets_message() {
        let mut s = session(0);
        let t0 = Instant::now();
        s.try_place_stone(Pos::new(7, 7), t0);
        s.tick(t0);
        s.try_place_stone(Pos::new(7, 7), t0);
        assert_eq!(s.message.as_deref(), Some("cell (7, 7) is already occupied"));
        assert_eq!(s.game.move_count(), 2);
    }
}
