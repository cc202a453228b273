use crate::{Game, Hand, ReplacementKind};

/// Durable sink for one player's hand. Each call overwrites the player's
/// whole record; persisting an unchanged hand twice yields identical records.
pub trait HandSink {
    fn persist_hand(&mut self, player: usize, hand: &Hand) -> Result<(), String>;
}

/// Answers the replacement request raised by a freshly dealt multiply card.
/// `None` means remove nothing.
pub trait ReplacementChooser {
    fn choose_removal(&mut self, player: usize, hand: &Hand) -> Option<ReplacementKind>;
}

/// `HandSink` that drops everything, for callers that manage persistence
/// themselves.
#[derive(Debug, Default)]
pub struct NullSink;

impl HandSink for NullSink {
    fn persist_hand(&mut self, _player: usize, _hand: &Hand) -> Result<(), String> {
        Ok(())
    }
}

/// Chooser returning the same answer every time.
#[derive(Debug, Default)]
pub struct FixedChooser(pub Option<ReplacementKind>);

impl ReplacementChooser for FixedChooser {
    fn choose_removal(&mut self, _player: usize, _hand: &Hand) -> Option<ReplacementKind> {
        self.0
    }
}

fn record_line(card: &crate::Card) -> String {
    match card.rank {
        Some(rank) if card.is_num() => format!("{rank}\t{}", card.color.name()),
        _ => card.kind.symbol().to_string(),
    }
}

/// The persisted per-player record: hidden card first, then the open hand
/// in deal order, one line each.
pub fn hand_record(hand: &Hand) -> String {
    let mut out = String::from("Hidden: ");
    out.push_str(&record_line(&hand.hidden));
    out.push('\n');
    for card in &hand.cards {
        out.push_str(&record_line(card));
        out.push('\n');
    }
    out
}

/// Every player's revealed cards; hidden cards print as a literal
/// placeholder and are never shown.
pub fn public_view(game: &Game) -> String {
    let mut out = String::new();
    for (player, hand) in game.hands.iter().enumerate() {
        out.push_str(&format!("Player {player}: "));
        for card in &hand.cards {
            match card.rank {
                Some(rank) if card.is_num() => {
                    out.push_str(&format!("{rank} {}\t", card.color.name()));
                }
                _ => {
                    out.push_str(card.kind.symbol());
                    out.push('\t');
                }
            }
        }
        out.push_str("*Hidden*\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, CardColor, CardKind, Deck, Game, RngState};

    #[test]
    fn hand_record_shapes() {
        let mut hand = Hand::starting(Card::num(5, CardColor::Gold));
        hand.push(Card::num(10, CardColor::Black));
        assert_eq!(
            hand_record(&hand),
            "Hidden: 5\tGOLD\n+\n-\n÷\n10\tBLACK\n"
        );
    }

    #[test]
    fn hand_record_is_idempotent() {
        let mut hand = Hand::starting(Card::num(3, CardColor::Silver));
        hand.push(Card::operator(CardKind::Square));
        assert_eq!(hand_record(&hand), hand_record(&hand));
    }

    #[test]
    fn public_view_masks_the_hidden_card() {
        let deck = Deck::from_cards(vec![
            Card::num(5, CardColor::Gold),
            Card::num(3, CardColor::Silver),
        ]);
        let game = Game::with_deck(2, deck, RngState::from_seed(0)).expect("init");
        let view = public_view(&game);
        assert_eq!(
            view,
            "Player 0: +\t-\t÷\t*Hidden*\nPlayer 1: +\t-\t÷\t*Hidden*\n"
        );
        assert!(!view.contains("GOLD"));
        assert!(!view.contains("SILVER"));
    }
}
