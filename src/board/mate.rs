//! Exhaustive forced-mate solver.

use super::error::BoardError;
use super::{Color, Move, Position};

/// Find the shortest forced mate for `side` within `max_ply` half-moves.
///
/// A mate in N needs `max_ply >= 2N - 1`. The returned line alternates
/// attacker and defender moves and ends with the mating move; at each
/// defender turn it follows the reply that resists longest (earliest
/// generated on ties). A defender stalemate or any drawn position along
/// the way refutes the line.
///
/// If `side` is not the side to move, the solver runs on a copy with the
/// turn handed to `side`.
pub fn find_forced_mate(
    position: &mut Position,
    side: Color,
    max_ply: usize,
) -> Result<Option<Vec<Move>>, BoardError> {
    position.board().validate()?;

    let line = if position.side_to_move() == side {
        MateSolver { position }.attack(max_ply)
    } else {
        let mut local = position.clone();
        local.set_side_to_move(side);
        MateSolver {
            position: &mut local,
        }
        .attack(max_ply)
    };

    match &line {
        Some(line) => log_debug!(
            "mate: {} mates in {} ({})",
            side,
            line.len().div_ceil(2),
            line.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        ),
        None => log_trace!("mate: none for {} within {} plies", side, max_ply),
    }
    Ok(line)
}

struct MateSolver<'a> {
    position: &'a mut Position,
}

impl MateSolver<'_> {
    /// Shortest mating line for the side to move within `plies`.
    fn attack(&mut self, plies: usize) -> Option<Vec<Move>> {
        let attacker = self.position.side_to_move();
        let defender = attacker.opponent();
        let moves = self.position.legal_moves(attacker);

        for budget in (1..=plies).step_by(2) {
            for &mv in &moves {
                let Ok(record) = self.position.apply(mv) else {
                    continue;
                };
                let rest = if self.position.is_checkmate(defender) {
                    Some(Vec::new())
                } else if budget >= 3 && !self.position.is_draw() {
                    self.defend(budget - 1)
                } else {
                    None
                };
                self.position.unapply(record);

                if let Some(rest) = rest {
                    let mut line = Vec::with_capacity(rest.len() + 1);
                    line.push(mv);
                    line.extend(rest);
                    return Some(line);
                }
            }
        }
        None
    }

    /// Every defender reply must still lose within `plies`. Returns the
    /// longest of the forced lines.
    fn defend(&mut self, plies: usize) -> Option<Vec<Move>> {
        let defender = self.position.side_to_move();
        let replies = self.position.legal_moves(defender);
        if replies.is_empty() {
            // Stalemate; checkmate was handled by the attacker
            return None;
        }

        let mut longest: Option<(Move, Vec<Move>)> = None;
        for &reply in &replies {
            let Ok(record) = self.position.apply(reply) else {
                continue;
            };
            let line = if self.position.is_draw() {
                None
            } else {
                self.attack(plies - 1)
            };
            self.position.unapply(record);

            let line = line?;
            if longest
                .as_ref()
                .map_or(true, |(_, best)| line.len() > best.len())
            {
                longest = Some((reply, line));
            }
        }

        longest.map(|(reply, rest)| {
            let mut line = Vec::with_capacity(rest.len() + 1);
            line.push(reply);
            line.extend(rest);
            line
        })
    }
}
