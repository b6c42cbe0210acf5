use super::super::{Board, Color, Move, MoveList, Offset, Square};

impl Board {
    /// Single-step moves along `offsets` (knight and king patterns).
    pub(crate) fn generate_leaps(
        &self,
        from: Square,
        color: Color,
        offsets: &[Offset],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some(target) if target.color != color => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
    }

    /// Ray moves: walk each direction until the edge or a blocker.
    ///
    /// A friendly blocker ends the ray without its square; an enemy blocker
    /// ends it with a capture.
    pub(crate) fn generate_rays(
        &self,
        from: Square,
        color: Color,
        directions: &[Offset],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(target) => {
                        if target.color != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
