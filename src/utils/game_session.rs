//! Turn-by-turn game driver for a presentation layer.
//!
//! `GameSession` owns the position and whose turn it is. It validates
//! submitted moves against the generated destinations, applies them, keeps
//! the captured pieces of each side and decides when the game is over.
//! Engine turns go through any `Engine` implementation.

use log::{debug, info};
use thiserror::Error;

use crate::engines::engine_trait::{Engine, EngineError, GoParams};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove, ApplyMoveError};
use crate::move_generation::legal_move_checks::{is_in_check, king_count};
use crate::move_generation::legal_move_generator::{generate_moves, legal_destinations};

/// When a game counts as decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VictoryRule {
    /// A captured king or a king left in check ends the game.
    #[default]
    CaptureOrCheck,
    /// Only capturing the king ends the game.
    CaptureOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub victory_rule: VictoryRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    KingCaptured,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Side, reason: WinReason },
    /// `side` was to move and had no move.
    NoLegalMoves { side: Side },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the game is over: {0:?}")]
    GameOver(GameOutcome),
    #[error("no piece on board {} at {square}", .board.number())]
    NoPiece { board: BoardId, square: Square },
    #[error("the piece on board {} at {square} is not {side}'s", .board.number())]
    NotYourPiece {
        side: Side,
        board: BoardId,
        square: Square,
    },
    #[error("{0} is not a legal move")]
    IllegalMove(Move),
    #[error("engine found no move for {0}")]
    EngineNoMove(Side),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Apply(#[from] ApplyMoveError),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    side_to_move: Side,
    config: SessionConfig,
    // [side index] pieces of that side taken by the opponent.
    captured: [Vec<Piece>; 2],
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Standard start position, White to move.
    pub fn new(config: SessionConfig) -> Self {
        Self::from_position(Position::new_game(), Side::White, config)
    }

    pub fn from_position(position: Position, side_to_move: Side, config: SessionConfig) -> Self {
        let outcome = decide_outcome(&position, side_to_move, config.victory_rule);
        Self {
            position,
            side_to_move,
            config,
            captured: [Vec::new(), Vec::new()],
            outcome,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Pieces of `side` lost so far, in order: captured ones and those
    /// overwritten by a piece landing on the other board.
    #[inline]
    pub fn captured_pieces(&self, side: Side) -> &[Piece] {
        &self.captured[side.index()]
    }

    /// Destinations of the side-to-move's piece on `board` at `square`.
    pub fn select(&self, board: BoardId, square: Square) -> SessionResult<Vec<Square>> {
        self.ensure_in_progress()?;
        let piece = self.own_piece(board, square)?;
        Ok(legal_destinations(piece.kind, square, board, &self.position))
    }

    /// Validate and play `mv` for the side to move.
    pub fn submit_move(&mut self, mv: Move) -> SessionResult<AppliedMove> {
        self.ensure_in_progress()?;
        let piece = self.own_piece(mv.board, mv.from)?;
        if !legal_destinations(piece.kind, mv.from, mv.board, &self.position).contains(&mv.to) {
            return Err(SessionError::IllegalMove(mv));
        }
        self.commit(mv)
    }

    /// Ask `engine` for the side-to-move's move and play it.
    pub fn play_engine_turn(
        &mut self,
        engine: &mut dyn Engine,
        params: &GoParams,
    ) -> SessionResult<AppliedMove> {
        self.ensure_in_progress()?;
        let side = self.side_to_move;
        let output = engine.choose_move(&self.position, side, params)?;
        for line in &output.info_lines {
            debug!("{}: {line}", engine.name());
        }
        let mv = output.best_move.ok_or(SessionError::EngineNoMove(side))?;
        self.submit_move(mv)
    }

    fn commit(&mut self, mv: Move) -> SessionResult<AppliedMove> {
        let applied = apply_move(&mut self.position, mv)?;
        if let Some(victim) = applied.captured() {
            info!("{} captures {:?} with {mv}", self.side_to_move, victim.kind);
            self.captured[victim.side.index()].push(victim);
        }
        if let Some(lost) = applied.displaced {
            info!("{mv} lands on {} {:?} on the other board", lost.side, lost.kind);
            self.captured[lost.side.index()].push(lost);
        }

        self.side_to_move = self.side_to_move.opposite();
        self.outcome = decide_outcome(&self.position, self.side_to_move, self.config.victory_rule);
        if let Some(outcome) = self.outcome {
            info!("game over after {mv}: {outcome:?}");
        }
        Ok(applied)
    }

    fn ensure_in_progress(&self) -> SessionResult<()> {
        match self.outcome {
            Some(outcome) => Err(SessionError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    fn own_piece(&self, board: BoardId, square: Square) -> SessionResult<Piece> {
        let piece = self
            .position
            .piece_at(board, square)
            .ok_or(SessionError::NoPiece { board, square })?;
        if piece.side != self.side_to_move {
            return Err(SessionError::NotYourPiece {
                side: self.side_to_move,
                board,
                square,
            });
        }
        Ok(piece)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Decide whether the game is over with `side_to_move` to play.
///
/// A missing king decides first (White's king is checked first). Under
/// `CaptureOrCheck` the first king found in check, scanning Board-1 then
/// Board-2 in row-major order, loses. Otherwise a side with no move ends the
/// game without a winner.
pub fn decide_outcome(
    position: &Position,
    side_to_move: Side,
    rule: VictoryRule,
) -> Option<GameOutcome> {
    for side in [Side::White, Side::Black] {
        if king_count(position, side) == 0 {
            return Some(GameOutcome::Win {
                winner: side.opposite(),
                reason: WinReason::KingCaptured,
            });
        }
    }

    if rule == VictoryRule::CaptureOrCheck {
        let checked = position.pieces().find(|(board, square, piece)| {
            piece.kind == PieceKind::King && is_in_check(position, *square, *board)
        });
        if let Some((_, _, king)) = checked {
            return Some(GameOutcome::Win {
                winner: king.side.opposite(),
                reason: WinReason::Check,
            });
        }
    }

    if generate_moves(position, side_to_move).is_empty() {
        return Some(GameOutcome::NoLegalMoves { side: side_to_move });
    }
    None
}
