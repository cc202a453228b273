use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardColor {
    Gold,
    Silver,
    Bronze,
    Black,
    Red,
}

impl CardColor {
    /// The four colors carried by numbered cards. Operator cards are always red.
    pub const NUMERIC: [CardColor; 4] = [
        CardColor::Gold,
        CardColor::Silver,
        CardColor::Bronze,
        CardColor::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Gold => "GOLD",
            CardColor::Silver => "SILVER",
            CardColor::Bronze => "BRONZE",
            CardColor::Black => "BLACK",
            CardColor::Red => "RED",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Num,
    Plus,
    Minus,
    Multiply,
    Divide,
    Square,
}

impl CardKind {
    pub fn symbol(self) -> &'static str {
        match self {
            CardKind::Num => "NUM",
            CardKind::Plus => "+",
            CardKind::Minus => "-",
            CardKind::Multiply => "x",
            CardKind::Divide => "÷",
            CardKind::Square => "√",
        }
    }

    /// Multiply and square are the bonus kinds: mutually exclusive within a
    /// hand, and each triggers an extra draw when dealt.
    pub fn is_bonus(self) -> bool {
        matches!(self, CardKind::Multiply | CardKind::Square)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Option<u8>,
    pub color: CardColor,
    pub kind: CardKind,
}

impl Card {
    pub fn num(rank: u8, color: CardColor) -> Self {
        Self {
            rank: Some(rank),
            color,
            kind: CardKind::Num,
        }
    }

    pub fn operator(kind: CardKind) -> Self {
        Self {
            rank: None,
            color: CardColor::Red,
            kind,
        }
    }

    pub fn is_num(&self) -> bool {
        self.kind == CardKind::Num
    }

    pub fn is_bonus_kind(&self) -> bool {
        self.kind.is_bonus()
    }
}

/// The card kinds a player may purge after drawing a multiply card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReplacementKind {
    Plus,
    Minus,
    Multiply,
}

impl ReplacementKind {
    /// Maps the single-token prompt answer. Anything outside `+`, `-`, `x`
    /// is an invalid token and removes nothing.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(ReplacementKind::Plus),
            "-" => Some(ReplacementKind::Minus),
            "x" => Some(ReplacementKind::Multiply),
            _ => None,
        }
    }

    pub fn card_kind(self) -> CardKind {
        match self {
            ReplacementKind::Plus => CardKind::Plus,
            ReplacementKind::Minus => CardKind::Minus,
            ReplacementKind::Multiply => CardKind::Multiply,
        }
    }
}
