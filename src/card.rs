use std::fmt::Display;

/// A suitless card, stored by face value (Ace = 14 down to 6).
///
/// Face values outside the nine-rank domain are representable on purpose:
/// boards are accepted as given, and an unknown card simply never extends
/// or lands on a run.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Card(pub u8);

impl Card {
    pub const ACE: Card = Card(14);
    pub const KING: Card = Card(13);
    pub const QUEEN: Card = Card(12);
    pub const JACK: Card = Card(11);
    pub const TEN: Card = Card(10);
    pub const NINE: Card = Card(9);
    pub const EIGHT: Card = Card(8);
    pub const SEVEN: Card = Card(7);
    pub const SIX: Card = Card(6);

    /// The full run, highest first.
    pub const RUN: [Card; 9] = [
        Card::ACE,
        Card::KING,
        Card::QUEEN,
        Card::JACK,
        Card::TEN,
        Card::NINE,
        Card::EIGHT,
        Card::SEVEN,
        Card::SIX,
    ];

    pub fn value(self) -> u8 {
        self.0
    }

    /// Parses a single card token. Letters follow the usual English faces,
    /// with `T`, `D` and `V` accepted for Ace, Queen and Jack as printed on
    /// some decks. Bare numbers are taken as face values as-is.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_uppercase().as_str() {
            "A" | "T" => Some(Card::ACE),
            "K" => Some(Card::KING),
            "Q" | "D" => Some(Card::QUEEN),
            "J" | "V" => Some(Card::JACK),
            digits => digits.parse::<u8>().ok().map(Card),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Card::ACE => write!(f, "A"),
            Card::KING => write!(f, "K"),
            Card::QUEEN => write!(f, "Q"),
            Card::JACK => write!(f, "J"),
            Card(value) => write!(f, "{}", value),
        }
    }
}
