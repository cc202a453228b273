use crate::{Card, CardKind};
use serde::{Deserialize, Serialize};

/// The operator cards every player starts the session with.
pub const SETUP_KINDS: [CardKind; 3] = [CardKind::Plus, CardKind::Minus, CardKind::Divide];

/// One player's cards: the open hand in deal order, plus the hidden card
/// assigned once at setup and never altered afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub hidden: Card,
}

impl Hand {
    pub fn starting(hidden: Card) -> Self {
        Self {
            cards: SETUP_KINDS.map(Card::operator).to_vec(),
            hidden,
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn has_kind(&self, kind: CardKind) -> bool {
        self.cards.iter().any(|card| card.kind == kind)
    }

    /// Drops every card of `kind`, keeping the relative order of the rest.
    /// Returns how many were removed.
    pub fn remove_kind(&mut self, kind: CardKind) -> usize {
        let before = self.cards.len();
        self.cards.retain(|card| card.kind != kind);
        before - self.cards.len()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
