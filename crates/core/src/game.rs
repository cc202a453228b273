use crate::{
    Card, CardKind, Deck, Event, EventBus, Hand, HandSink, ReplacementChooser, ReplacementKind,
    RngState, TableState,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealError {
    #[error("deck exhausted")]
    DeckExhausted,
    #[error("invalid player count {0}")]
    InvalidPlayerCount(usize),
    #[error("persist failed: {0}")]
    Persist(String),
}

/// What a single `deal` call did, beyond its hand mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealOutcome {
    pub player: usize,
    pub card: Card,
    pub redeals: u32,
    pub removed: Option<(ReplacementKind, usize)>,
    pub bonus: Option<Card>,
}

/// One game session. Fields are public so callers and tests can compose
/// deterministic setups directly.
#[derive(Debug)]
pub struct Game {
    pub rng: RngState,
    pub deck: Deck,
    pub hands: Vec<Hand>,
    pub state: TableState,
}

impl Game {
    /// Builds and shuffles the standard deck, then runs the initial deal:
    /// every player receives the setup operators and a hidden card.
    pub fn new(players: usize, mut rng: RngState) -> Result<Self, DealError> {
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        Self::from_parts(players, deck, rng)
    }

    /// Same initialization over a caller-supplied deck, left unshuffled.
    pub fn with_deck(players: usize, deck: Deck, rng: RngState) -> Result<Self, DealError> {
        Self::from_parts(players, deck, rng)
    }

    fn from_parts(players: usize, mut deck: Deck, rng: RngState) -> Result<Self, DealError> {
        if players == 0 {
            return Err(DealError::InvalidPlayerCount(players));
        }
        let mut hands = Vec::with_capacity(players);
        for _ in 0..players {
            // Hidden cards are always numeric: skip forward past operator
            // cards, each skip consuming its slot.
            let hidden = loop {
                let card = deck.draw().ok_or(DealError::DeckExhausted)?;
                if card.is_num() {
                    break card;
                }
            };
            hands.push(Hand::starting(hidden));
        }
        Ok(Self {
            rng,
            deck,
            hands,
            state: TableState::new(players),
        })
    }

    pub fn players(&self) -> usize {
        self.state.players
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn turn(&self) -> usize {
        self.state.turn
    }

    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Deals one card to the player on turn, applying the re-deal rules,
    /// the multiply-triggered replacement and the bonus draw, persisting the
    /// hand after every mutation. Advances the turn on success.
    pub fn deal(
        &mut self,
        sink: &mut dyn HandSink,
        chooser: &mut dyn ReplacementChooser,
        events: &mut EventBus,
    ) -> Result<DealOutcome, DealError> {
        let player = self.state.turn;

        let mut redeals = 0u32;
        let card = loop {
            let card = self.deck.draw().ok_or(DealError::DeckExhausted)?;
            if self.rejects(player, card) {
                redeals += 1;
                events.push(Event::Redealt { player, card });
                continue;
            }
            break card;
        };

        self.hands[player].push(card);
        self.persist(sink, player)?;
        events.push(Event::CardDealt { player, card });

        let mut removed = None;
        if card.kind == CardKind::Multiply {
            // Blocking, exactly-once request: the caller answers before the
            // deal proceeds. An invalid token surfaces as `None` and removes
            // nothing; the hand is persisted again either way.
            if let Some(kind) = chooser.choose_removal(player, &self.hands[player]) {
                let count = self.hands[player].remove_kind(kind.card_kind());
                events.push(Event::CardsRemoved {
                    player,
                    kind,
                    count,
                });
                removed = Some((kind, count));
            }
            self.persist(sink, player)?;
        }

        let mut bonus = None;
        if card.kind.is_bonus() {
            let extra = loop {
                let candidate = self.deck.draw().ok_or(DealError::DeckExhausted)?;
                if candidate.is_bonus_kind() {
                    events.push(Event::BonusSkipped {
                        player,
                        card: candidate,
                    });
                    continue;
                }
                break candidate;
            };
            self.hands[player].push(extra);
            self.persist(sink, player)?;
            events.push(Event::BonusDealt {
                player,
                card: extra,
            });
            bonus = Some(extra);
        }

        self.state.advance_turn();
        events.push(Event::TurnAdvanced {
            round: self.state.round,
            turn: self.state.turn,
        });

        Ok(DealOutcome {
            player,
            card,
            redeals,
            removed,
            bonus,
        })
    }

    /// The re-deal rules, applied in order:
    /// 1. a multiply may not land on an untouched setup hand (size exactly 3,
    ///    the proxy for "first draw this round");
    /// 2. a multiply may not join a hand already holding a bonus kind;
    /// 3. a square may not join a hand already holding a bonus kind.
    fn rejects(&self, player: usize, card: Card) -> bool {
        let hand = &self.hands[player];
        match card.kind {
            CardKind::Multiply if hand.len() == 3 => true,
            CardKind::Multiply => {
                hand.has_kind(CardKind::Multiply) || hand.has_kind(CardKind::Square)
            }
            CardKind::Square => {
                hand.has_kind(CardKind::Square) || hand.has_kind(CardKind::Multiply)
            }
            _ => false,
        }
    }

    fn persist(&self, sink: &mut dyn HandSink, player: usize) -> Result<(), DealError> {
        sink.persist_hand(player, &self.hands[player])
            .map_err(DealError::Persist)
    }
}
