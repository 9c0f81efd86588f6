//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::{
    is_winning_move, AIEngine, Board, ConfigError, EngineConfig, GameError, MoveResult, Pos, Stone,
};

/// Pause between the human's move and the computer starting to think
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(300);

/// How a finished game ended, from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    HumanWins,
    ComputerWins,
    Draw,
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    /// Stones of the completed run, absent on a draw
    pub winning_line: Option<Vec<Pos>>,
}

/// AI computation state
pub enum AiState {
    Idle,
    /// Human just moved; the computer waits before thinking
    Waiting { since: Instant },
    /// The engine runs on a worker thread and comes back with its answer
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub human: Stone,
    pub computer: Stone,
    pub current_turn: Stone,
    pub result: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    ai_state: AiState,
    engine: Option<AIEngine>,
    config: EngineConfig,
}

impl GameState {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let engine = AIEngine::with_config(config.clone())?;
        let computer = config.computer;
        log::info!("new game: human plays {:?}", computer.opponent());
        Ok(Self {
            board: Board::new(),
            human: computer.opponent(),
            computer,
            current_turn: Stone::Black,
            result: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            message: None,
            ai_state: AiState::Idle,
            engine: Some(engine),
            config,
        })
    }

    /// Start a new game with the same sides and engine settings.
    ///
    /// A search still running on the worker thread is abandoned.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Stone::Black;
        self.result = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.message = None;
        self.ai_state = AiState::Idle;
        if self.engine.is_none() {
            self.engine = Some(self.rebuild_engine());
        }
        log::info!("new game: human plays {:?}", self.human);
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_game_over() && self.current_turn == self.human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && self.current_turn == self.computer
    }

    /// Check if the AI is waiting out its delay or searching
    pub fn is_ai_thinking(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    /// Status line shown next to the board
    pub fn status(&self) -> &'static str {
        match self.result.as_ref().map(|r| r.outcome) {
            Some(GameOutcome::HumanWins) => "You Win!",
            Some(GameOutcome::ComputerWins) => "AI Wins!",
            Some(GameOutcome::Draw) => "Draw",
            None if self.current_turn == self.human => "Your Turn",
            None => "AI Thinking...",
        }
    }

    /// Human move at `pos`.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_human_turn() || self.is_ai_thinking() {
            return Err(GameError::NotYourTurn);
        }

        self.board.place(pos, self.human)?;
        self.message = None;
        self.record_move(pos, self.human);
        Ok(())
    }

    /// Bookkeeping after a stone has been placed on the board
    fn record_move(&mut self, pos: Pos, color: Stone) {
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        log::info!("move {}: {:?} at {pos}", self.move_history.len(), color);

        if is_winning_move(&self.board, pos, color) {
            let outcome = if color == self.human {
                GameOutcome::HumanWins
            } else {
                GameOutcome::ComputerWins
            };
            let winning_line = crate::rules::winning_line(&self.board, pos, color);
            self.finish(GameResult {
                outcome,
                winning_line,
            });
            return;
        }

        if self.board.is_full() {
            self.finish(GameResult {
                outcome: GameOutcome::Draw,
                winning_line: None,
            });
            return;
        }

        self.current_turn = color.opponent();
    }

    fn finish(&mut self, result: GameResult) {
        log::info!(
            "game over after {} moves: {:?}",
            self.move_history.len(),
            result.outcome
        );
        self.result = Some(result);
        self.ai_state = AiState::Idle;
    }

    /// Advance the computer's turn: wait out [`AI_MOVE_DELAY`], start the
    /// search on a worker thread, then apply its move once it arrives.
    ///
    /// Call once per frame. Returns true while the computer is busy so the
    /// caller knows to keep repainting.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.ai_state {
            AiState::Idle => {
                if self.is_ai_turn() {
                    self.ai_state = AiState::Waiting { since: now };
                }
            }
            AiState::Waiting { since } => {
                if now.saturating_duration_since(*since) >= AI_MOVE_DELAY {
                    self.start_ai_thinking(now);
                }
            }
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok((engine, result)) => {
                    self.engine = Some(engine);
                    self.ai_state = AiState::Idle;
                    self.apply_ai_result(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    log::warn!("AI worker stopped without a move");
                    self.ai_state = AiState::Idle;
                    self.engine = Some(self.rebuild_engine());
                    self.message = Some("AI error".to_string());
                }
            },
        }
        self.is_ai_thinking()
    }

    /// Time since the computer started searching
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }

    fn start_ai_thinking(&mut self, now: Instant) {
        let mut engine = match self.engine.take() {
            Some(engine) => engine,
            None => self.rebuild_engine(),
        };
        let board = self.board.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board);
            // The receiver is gone when the game was reset meanwhile
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: now,
        };
    }

    fn apply_ai_result(&mut self, result: MoveResult) {
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        let placed = best_move
            .ok_or(GameError::NoLegalMove)
            .and_then(|pos| self.board.place(pos, self.computer).map(|()| pos));
        match placed {
            Ok(pos) => self.record_move(pos, self.computer),
            Err(GameError::NoLegalMove) => self.finish(GameResult {
                outcome: GameOutcome::Draw,
                winning_line: None,
            }),
            Err(err) => {
                log::warn!("AI produced an illegal move: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    fn rebuild_engine(&self) -> AIEngine {
        AIEngine::with_config(self.config.clone()).unwrap_or_else(|err| {
            log::warn!("invalid engine config ({err}), using defaults");
            AIEngine::new()
        })
    }

    /// Run the computer's move on the calling thread, skipping the delay.
    #[cfg(test)]
    fn play_ai_move_now(&mut self) {
        assert!(self.is_ai_turn());
        let mut engine = self.engine.take().unwrap();
        let result = engine.get_move_with_stats(&self.board);
        self.engine = Some(engine);
        self.apply_ai_result(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(EngineConfig::deterministic(3)).unwrap()
    }

    fn wait_for_ai(state: &mut GameState) {
        let start = Instant::now();
        state.tick(start);
        state.tick(start + AI_MOVE_DELAY);
        while state.tick(Instant::now()) {
            assert!(start.elapsed() < Duration::from_secs(60), "AI never answered");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_new_game() {
        let state = state();
        assert_eq!(state.human, Stone::Black);
        assert_eq!(state.computer, Stone::White);
        assert!(state.is_human_turn());
        assert_eq!(state.status(), "Your Turn");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            threads: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            GameState::new(config),
            Err(ConfigError::ZeroThreads)
        ));
    }

    #[test]
    fn test_human_move_switches_turn() {
        let mut state = state();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(state.last_move, Some(Pos::new(7, 7)));
        assert!(state.is_ai_turn());
        assert_eq!(state.status(), "AI Thinking...");
    }

    #[test]
    fn test_rejected_moves() {
        let mut state = state();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(
            state.try_place_stone(Pos::new(7, 8)),
            Err(GameError::NotYourTurn)
        );

        state.play_ai_move_now();
        assert!(matches!(
            state.try_place_stone(Pos::new(7, 7)),
            Err(GameError::InvalidMove { row: 7, col: 7, .. })
        ));
        assert_eq!(state.move_history.len(), 2);
    }

    #[test]
    fn test_ai_waits_before_thinking() {
        let mut state = state();
        state.try_place_stone(Pos::new(7, 7)).unwrap();

        let start = Instant::now();
        assert!(state.tick(start));
        assert!(matches!(state.ai_state, AiState::Waiting { .. }));
        state.tick(start + AI_MOVE_DELAY / 2);
        assert!(matches!(state.ai_state, AiState::Waiting { .. }));
        state.tick(start + AI_MOVE_DELAY);
        assert!(matches!(state.ai_state, AiState::Thinking { .. }));
    }

    #[test]
    fn test_ai_answers_on_worker_thread() {
        let mut state = state();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        wait_for_ai(&mut state);

        assert_eq!(state.move_history.len(), 2);
        let (pos, stone) = state.move_history[1];
        assert_eq!(stone, Stone::White);
        assert_eq!(pos.chebyshev(Pos::new(7, 7)), 1);
        assert!(state.is_human_turn());
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_human_wins() {
        let mut state = state();
        for col in 0..4 {
            state.board.place_stone(Pos::new(0, col), Stone::Black);
            state.board.place_stone(Pos::new(14, col * 2), Stone::White);
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();

        let result = state.result.clone().unwrap();
        assert_eq!(result.outcome, GameOutcome::HumanWins);
        assert_eq!(result.winning_line.map(|l| l.len()), Some(5));
        assert_eq!(state.status(), "You Win!");
        assert!(!state.is_ai_turn());
        assert_eq!(
            state.try_place_stone(Pos::new(5, 5)),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_computer_wins() {
        let mut state = state();
        for col in 5..9 {
            state.board.place_stone(Pos::new(5, col), Stone::White);
        }
        state.board.place_stone(Pos::new(9, 9), Stone::Black);
        state.board.place_stone(Pos::new(10, 10), Stone::Black);
        state.try_place_stone(Pos::new(11, 11)).unwrap();
        state.play_ai_move_now();

        let result = state.result.clone().unwrap();
        assert_eq!(result.outcome, GameOutcome::ComputerWins);
        assert_eq!(state.status(), "AI Wins!");
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = state();
        let last = Pos::new(14, 14);
        for pos in Pos::all().filter(|&p| p != last) {
            // Pairs of columns keep every row, column and diagonal short of five
            let stone = if (pos.col / 2 + pos.row) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            state.board.place_stone(pos, stone);
        }
        state.try_place_stone(last).unwrap();

        let result = state.result.clone().unwrap();
        assert_eq!(result.outcome, GameOutcome::Draw);
        assert_eq!(result.winning_line, None);
        assert_eq!(state.status(), "Draw");
    }

    #[test]
    fn test_ai_without_move_is_draw() {
        let mut state = state();
        for (i, pos) in Pos::all().enumerate() {
            state
                .board
                .place_stone(pos, if i % 2 == 0 { Stone::Black } else { Stone::White });
        }
        state.current_turn = Stone::White;
        state.play_ai_move_now();
        assert_eq!(state.result.map(|r| r.outcome), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_reset_during_search() {
        let mut state = state();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        let start = Instant::now();
        state.tick(start);
        state.tick(start + AI_MOVE_DELAY);
        assert!(state.is_ai_thinking());

        state.reset();
        assert!(!state.is_ai_thinking());
        assert!(state.board.is_board_empty());
        assert!(state.move_history.is_empty());
        assert!(state.is_human_turn());

        state.try_place_stone(Pos::new(3, 3)).unwrap();
        wait_for_ai(&mut state);
        assert_eq!(state.move_history.len(), 2);
    }

    #[test]
    fn test_computer_opens_as_black() {
        let config = EngineConfig {
            computer: Stone::Black,
            ..EngineConfig::deterministic(1)
        };
        let mut state = GameState::new(config).unwrap();
        assert!(state.is_ai_turn());
        assert_eq!(
            state.try_place_stone(Pos::new(0, 0)),
            Err(GameError::NotYourTurn)
        );

        state.play_ai_move_now();
        assert_eq!(state.board.get(Pos::center()), Stone::Black);
        assert!(state.is_human_turn());
    }
}
