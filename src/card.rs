use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat card identifier in `[0, 52 * num_decks)`.
///
/// Rank and suit are derived, not stored: `suit = id % 4`,
/// `rank = (id % 52) / 4`. Ids from different decks map to the same card.
pub type CardId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

impl Rank {
    /// Blackjack value of the rank. Aces count as 11 here; the hand
    /// evaluator demotes them to 1 as needed.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Rank::Ace)
    }

    fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Suit {
    fn symbol(&self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn from_id(id: CardId) -> Self {
        Card {
            rank: RANKS[(id % 52) / 4],
            suit: SUITS[id % 4],
        }
    }

    /// Id of this card within the first deck.
    pub fn id(&self) -> CardId {
        self.rank as CardId * 4 + self.suit as CardId
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_first_deck() {
        assert_eq!(
            Card::from_id(0),
            Card {
                rank: Rank::Two,
                suit: Suit::Clubs
            }
        );
        assert_eq!(
            Card::from_id(3),
            Card {
                rank: Rank::Two,
                suit: Suit::Spades
            }
        );
        assert_eq!(
            Card::from_id(32),
            Card {
                rank: Rank::Ten,
                suit: Suit::Clubs
            }
        );
        assert_eq!(
            Card::from_id(51),
            Card {
                rank: Rank::Ace,
                suit: Suit::Spades
            }
        );
    }

    #[test]
    fn test_from_id_wraps_across_decks() {
        // Second deck repeats the same 52 cards.
        assert_eq!(Card::from_id(52), Card::from_id(0));
        assert_eq!(Card::from_id(103), Card::from_id(51));
    }

    #[test]
    fn test_id_roundtrip() {
        for id in 0..52 {
            assert_eq!(Card::from_id(id).id(), id);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::from_id(0).to_string(), "2♣");
        assert_eq!(Card::from_id(51).to_string(), "A♠");
        assert_eq!(
            Card {
                rank: Rank::Ten,
                suit: Suit::Hearts
            }
            .to_string(),
            "10♥"
        );
    }

    #[test]
    fn test_face_card_values() {
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Two.value(), 2);
    }
}
