use super::Position;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(self.side_to_move());
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let Ok(record) = self.apply(m) else {
                continue;
            };
            nodes += self.perft(depth - 1);
            self.unapply(record);
        }

        nodes
    }
}
