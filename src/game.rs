//! Game session: the turn state machine driving board and engine
//!
//! ```text
//! AwaitingHuman --valid X move--> AwaitingOpponent --O move--> AwaitingHuman
//!       |                               |
//!       +--------- terminal ------------+--> Finished(Won | Draw)
//! ```
//!
//! The opponent's reply is computed synchronously inside
//! [`Game::human_move`], so callers only ever observe `AwaitingHuman` or
//! `Finished` between calls.

use tracing::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::engine::{Engine, MoveResult};
use crate::error::MoveError;
use crate::rules::{GameStatus, WinningLine};

/// Mark played by the human
pub const HUMAN: Mark = Mark::X;

/// Whose move it is, or how the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingOpponent,
    Finished(GameStatus),
}

impl Phase {
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

/// One game of human (X) against the engine (O)
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: Engine,
    phase: Phase,
    last_move: Option<Pos>,
    last_engine_result: Option<MoveResult>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            engine: Engine::with_side(HUMAN.opponent()),
            phase: Phase::AwaitingHuman,
            last_move: None,
            last_engine_result: None,
        }
    }

    /// Start over on an empty board with the human to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = Phase::AwaitingHuman;
        self.last_move = None;
        self.last_engine_result = None;
        info!("new game");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status recomputed from the board
    #[inline]
    pub fn status(&self) -> GameStatus {
        Engine::terminal_status(&self.board)
    }

    #[inline]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status().winning_line()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    #[inline]
    pub fn last_engine_result(&self) -> Option<&MoveResult> {
        self.last_engine_result.as_ref()
    }

    /// True if a click on `pos` would be accepted
    pub fn can_play(&self, pos: Pos) -> bool {
        self.phase == Phase::AwaitingHuman && pos.is_on_board() && self.board.is_empty(pos)
    }

    /// Play the human's mark at `pos`, then let the engine reply.
    ///
    /// Returns the phase after both moves. On error nothing changes.
    pub fn human_move(&mut self, pos: Pos) -> Result<Phase, MoveError> {
        match self.phase {
            Phase::AwaitingHuman => {}
            Phase::Finished(_) => return Err(MoveError::GameOver),
            Phase::AwaitingOpponent => return Err(MoveError::NotHumanTurn),
        }

        self.board.try_place(pos, HUMAN)?;
        self.last_move = Some(pos);
        debug!(%pos, "human move");

        if self.update_phase(Phase::AwaitingOpponent) {
            return Ok(self.phase);
        }

        self.opponent_move();
        Ok(self.phase)
    }

    /// Compute and apply the engine's move
    fn opponent_move(&mut self) {
        let result = self.engine.best_move_with_stats(&self.board);
        self.last_engine_result = Some(result);

        // The phase is only AwaitingOpponent on a non-terminal board, so a
        // move always exists here.
        if let Some(pos) = result.best_move {
            self.board.place(pos, self.engine.side());
            self.last_move = Some(pos);
            debug!(%pos, score = result.score, "opponent move");
        }

        self.update_phase(Phase::AwaitingHuman);
    }

    /// Move to `Finished` if the board is terminal, else to `next`.
    /// Returns true when the game ended.
    fn update_phase(&mut self, next: Phase) -> bool {
        let status = self.status();
        if status.is_terminal() {
            info!(?status, moves = self.move_count(), "game over");
            self.phase = Phase::Finished(status);
            true
        } else {
            self.phase = next;
            false
        }
    }

    /// Status line shown above the board
    pub fn status_text(&self) -> &'static str {
        match self.phase {
            Phase::AwaitingHuman => "Your turn (X)",
            Phase::AwaitingOpponent => "Bot's turn (O)",
            Phase::Finished(GameStatus::Won { winner, .. }) if winner == HUMAN => "You win!",
            Phase::Finished(GameStatus::Won { .. }) => "Bot wins!",
            Phase::Finished(_) => "Draw!",
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_awaits_human() {
        let game = Game::new();
        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.status_text(), "Your turn (X)");
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_human_move_gets_reply() {
        let mut game = Game::new();
        let phase = game.human_move(Pos::new(1, 1)).unwrap();

        assert_eq!(phase, Phase::AwaitingHuman);
        assert_eq!(game.board().mark_count(Mark::X), 1);
        assert_eq!(game.board().mark_count(Mark::O), 1);
        assert!(game.last_engine_result().is_some());
        assert_ne!(game.last_move(), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new();
        game.human_move(Pos::new(0, 0)).unwrap();
        let before = *game.board();

        assert_eq!(
            game.human_move(Pos::new(0, 0)),
            Err(MoveError::Occupied(Pos::new(0, 0)))
        );
        assert_eq!(*game.board(), before);
        assert!(!game.can_play(Pos::new(0, 0)));
    }

    #[test]
    fn test_reset_restarts() {
        let mut game = Game::new();
        game.human_move(Pos::new(2, 2)).unwrap();
        game.reset();

        assert_eq!(game.phase(), Phase::AwaitingHuman);
        assert!(game.board().is_board_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.last_move().is_none());
        assert!(game.last_engine_result().is_none());
    }

    #[test]
    fn test_moves_rejected_after_finish() {
        let mut game = Game::new();
        // Always play the first open cell until the game ends.
        while !game.phase().is_finished() {
            let pos = game.board().empty_cells().next().unwrap();
            game.human_move(pos).unwrap();
        }

        let before = *game.board();
        let first_open = game.board().empty_cells().next();
        if let Some(pos) = first_open {
            assert_eq!(game.human_move(pos), Err(MoveError::GameOver));
            assert!(!game.can_play(pos));
        }
        assert_eq!(*game.board(), before);
        assert_ne!(game.status_text(), "You win!");
    }

    #[test]
    fn test_engine_never_loses_to_edge_play() {
        let mut game = Game::new();
        // X opens in a corner, then always takes the last open cell.
        game.human_move(Pos::new(0, 0)).unwrap();
        let mut guard = 0;
        while !game.phase().is_finished() && guard < 5 {
            let pos = game.board().empty_cells().last().unwrap();
            game.human_move(pos).unwrap();
            guard += 1;
        }
        assert!(game.phase().is_finished());
        assert_ne!(game.status().winner(), Some(Mark::X));
    }

    #[test]
    fn test_status_text_on_finish() {
        let mut game = Game::new();
        while !game.phase().is_finished() {
            let pos = game.board().empty_cells().next().unwrap();
            game.human_move(pos).unwrap();
        }
        match game.status() {
            GameStatus::Won { winner: Mark::O, line } => {
                assert_eq!(game.status_text(), "Bot wins!");
                assert_eq!(game.winning_line(), Some(line));
            }
            GameStatus::Draw => assert_eq!(game.status_text(), "Draw!"),
            other => panic!("unexpected status {:?}", other),
        }
    }
}
