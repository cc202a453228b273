use crate::{Card, CardColor, CardKind, RngState};

pub const DECK_SIZE: usize = 52;
pub const MAX_RANK: u8 = 10;
pub const BONUS_COPIES: usize = 4;

/// The shuffled draw pile. The card vector is immutable after the shuffle;
/// a monotonically increasing cursor marks the next undealt slot. Rejected
/// draws advance the cursor like any other, so a slot is consumed at most
/// once for the whole session.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub cards: Vec<Card>,
    pub cursor: usize,
}

impl Deck {
    /// 44 numbered cards (four colors, ranks 0..=10, one each) followed by
    /// four multiply and four square cards.
    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for color in CardColor::NUMERIC {
            for rank in 0..=MAX_RANK {
                cards.push(Card::num(rank, color));
            }
        }
        for kind in [CardKind::Multiply, CardKind::Square] {
            for _ in 0..BONUS_COPIES {
                cards.push(Card::operator(kind));
            }
        }
        Self { cards, cursor: 0 }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }
}
