use crate::{Card, ReplacementKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    /// A draw rejected by the re-deal rules; the slot is consumed for good.
    Redealt { player: usize, card: Card },
    CardDealt { player: usize, card: Card },
    CardsRemoved {
        player: usize,
        kind: ReplacementKind,
        count: usize,
    },
    /// The bonus draw skipped over another bonus-kind card.
    BonusSkipped { player: usize, card: Card },
    BonusDealt { player: usize, card: Card },
    TurnAdvanced { round: u32, turn: usize },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
