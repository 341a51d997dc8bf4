//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through a
//! `GameSession`, with an optional seeded random opening prefix, and
//! aggregates series statistics.

use std::time::Instant;

use chrono::{DateTime, Local};
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use crate::engines::engine_trait::{Engine, EngineError, GoParams};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{generate_moves, is_legal_move};
use crate::utils::algebraic::move_to_notation;
use crate::utils::game_session::{GameOutcome, GameSession, SessionConfig, SessionError, WinReason};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("{engine} returned illegal move {mv}")]
    IllegalEngineMove { engine: String, mv: Move },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin(WinReason),
    BlackWin(WinReason),
    NoLegalMoves(Side),
    DrawMaxPlies,
}

impl From<GameOutcome> for MatchOutcome {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Win {
                winner: Side::White,
                reason,
            } => MatchOutcome::WhiteWin(reason),
            GameOutcome::Win {
                winner: Side::Black,
                reason,
            } => MatchOutcome::BlackWin(reason),
            GameOutcome::NoLegalMoves { side } => MatchOutcome::NoLegalMoves(side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin {
        player: PlayerId,
        side: Side,
        reason: WinReason,
    },
    NoLegalMoves {
        player: PlayerId,
    },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub session: SessionConfig,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            session: SessionConfig::default(),
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub undecided: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
    pub finished_at: Option<DateTime<Local>>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let finished = self
            .finished_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_owned());
        format!(
            "[{finished}] games={} player1_wins={} player2_wins={} undecided={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.undecided,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded match from the start position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    engine_white.new_game();
    engine_black.new_game();

    let mut session = GameSession::new(config.session);
    let opening_moves = apply_seeded_random_opening(
        &mut session,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_position: Position::new_empty(),
        opening_moves,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if session.outcome().is_some() {
            break;
        }

        let mover = session.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Side::White => &mut *engine_white,
            Side::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine.choose_move(session.position(), mover, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move else {
            warn!("{} gave no move for {mover}", engine.name());
            return Err(SessionError::EngineNoMove(mover).into());
        };
        if !is_legal_move(session.position(), chosen) {
            return Err(MatchError::IllegalEngineMove {
                engine: engine.name().to_owned(),
                mv: chosen,
            });
        }

        result.played_moves.push(move_to_notation(chosen));
        session.submit_move(chosen)?;
    }

    if let Some(outcome) = session.outcome() {
        result.outcome = outcome.into();
    }
    result.final_position = session.position().clone();
    Ok(result)
}

/// Play a series of matches and aggregate the results.
///
/// Player1 takes White in even-numbered games and Black in odd ones. Game `i`
/// uses seed `base_seed + i` for its opening.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, MatchError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_white = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            "game {}/{} seed={} white={} black={}",
            i + 1,
            config.games,
            seed,
            if player1_is_white { "Player1" } else { "Player2" },
            if player1_is_white { "Player2" } else { "Player1" },
        );

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let player_for = |side: Side| {
            if (side == Side::White) == player1_is_white {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        };
        let mapped = match result.outcome {
            MatchOutcome::WhiteWin(reason) => SeriesOutcome::PlayerWin {
                player: player_for(Side::White),
                side: Side::White,
                reason,
            },
            MatchOutcome::BlackWin(reason) => SeriesOutcome::PlayerWin {
                player: player_for(Side::Black),
                side: Side::Black,
                reason,
            },
            MatchOutcome::NoLegalMoves(side) => SeriesOutcome::NoLegalMoves {
                player: player_for(side),
            },
            MatchOutcome::DrawMaxPlies => SeriesOutcome::DrawMaxPlies,
        };
        match mapped {
            SeriesOutcome::PlayerWin {
                player: PlayerId::Player1,
                ..
            } => stats.player1_wins += 1,
            SeriesOutcome::PlayerWin {
                player: PlayerId::Player2,
                ..
            } => stats.player2_wins += 1,
            _ => stats.undecided += 1,
        }
        stats.outcomes.push(mapped);

        info!(
            "game {}/{} result={:?} p1_wins={} p2_wins={} undecided={}",
            i + 1,
            config.games,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.undecided
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);
    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);
    stats.finished_at = Some(Local::now());

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play a seeded number of uniformly random plies through `session`,
/// stopping early if the game ends.
fn apply_seeded_random_opening(
    session: &mut GameSession,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<Vec<String>, MatchError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    let mut opening_moves = Vec::new();
    for _ in 0..target_plies {
        if session.outcome().is_some() {
            break;
        }
        let moves = generate_moves(session.position(), session.side_to_move());
        if moves.is_empty() {
            break;
        }
        let chosen = moves[rng.random_range(0..moves.len())];
        opening_moves.push(move_to_notation(chosen));
        session.submit_move(chosen)?;
    }
    Ok(opening_moves)
}
