use serde::{Deserialize, Serialize};

/// Round-robin turn tracking. `turn` is always in `[0, players)`; `round`
/// increments exactly when the turn wraps back to player 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    pub players: usize,
    pub round: u32,
    pub turn: usize,
}

impl TableState {
    pub fn new(players: usize) -> Self {
        Self {
            players,
            round: 0,
            turn: 0,
        }
    }

    pub fn advance_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players;
        if self.turn == 0 {
            self.round += 1;
        }
    }
}
