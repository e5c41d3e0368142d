use crate::card::{Card, CardId};
use serde::{Deserialize, Serialize};

/// Best total for a hand and whether an ace is still counted as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    pub total: u8,
    pub is_soft: bool,
}

/// Value a hand under blackjack rules.
///
/// Aces start at 11 and are demoted to 1 one at a time whenever the
/// running total exceeds 21, so an ace added early can be demoted by a
/// card added later. Bust (`total > 21`) is derived by the caller.
pub fn hand_value(cards: &[CardId]) -> HandValue {
    let mut total = 0u8;
    let mut soft_aces = 0u8;

    for &id in cards {
        let card = Card::from_id(id);
        total += card.value();
        if card.rank.is_ace() {
            soft_aces += 1;
        }
        while total > 21 && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
    }

    HandValue {
        total,
        is_soft: soft_aces > 0,
    }
}

/// Ordered cards held by one participant for the current round.
/// Append-only between deals; cleared by the next deal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<CardId>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, id: CardId) {
        self.cards.push(id);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> HandValue {
        hand_value(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        self.value().total > 21
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cid(rank: Rank, suit: Suit) -> CardId {
        Card { rank, suit }.id()
    }

    #[test]
    fn test_no_aces_sums_card_values() {
        let cards = vec![cid(Rank::Two, Suit::Clubs), cid(Rank::Nine, Suit::Hearts)];
        let value = hand_value(&cards);
        assert_eq!(value.total, 11);
        assert!(!value.is_soft);
    }

    #[test]
    fn test_lone_ace_is_soft_eleven() {
        let cards = vec![cid(Rank::Ace, Suit::Spades)];
        let value = hand_value(&cards);
        assert_eq!(value.total, 11);
        assert!(value.is_soft);
    }

    #[test]
    fn test_ace_seven_is_soft_eighteen() {
        let cards = vec![cid(Rank::Ace, Suit::Spades), cid(Rank::Seven, Suit::Clubs)];
        let value = hand_value(&cards);
        assert_eq!(value.total, 18);
        assert!(value.is_soft);
    }

    #[test]
    fn test_later_card_demotes_earlier_ace() {
        let cards = vec![
            cid(Rank::Ace, Suit::Spades),
            cid(Rank::Seven, Suit::Clubs),
            cid(Rank::Five, Suit::Diamonds),
        ];
        let value = hand_value(&cards);
        assert_eq!(value.total, 13);
        assert!(!value.is_soft);
    }

    #[test]
    fn test_two_aces_is_soft_twelve() {
        let cards = vec![cid(Rank::Ace, Suit::Spades), cid(Rank::Ace, Suit::Hearts)];
        let value = hand_value(&cards);
        assert_eq!(value.total, 12);
        assert!(value.is_soft);
    }

    #[test]
    fn test_face_cards_count_ten_regardless_of_suit() {
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            for rank in [Rank::Jack, Rank::Queen, Rank::King] {
                let value = hand_value(&[cid(rank, suit)]);
                assert_eq!(value.total, 10);
                assert!(!value.is_soft);
            }
        }
    }

    #[test]
    fn test_busted_hand() {
        let mut hand = Hand::new();
        hand.add_card(cid(Rank::King, Suit::Clubs));
        hand.add_card(cid(Rank::King, Suit::Diamonds));
        assert!(!hand.is_busted());
        hand.add_card(cid(Rank::Five, Suit::Clubs));
        assert_eq!(hand.value().total, 25);
        assert!(hand.is_busted());
    }

    #[test]
    fn test_clear_empties_hand() {
        let mut hand = Hand::new();
        hand.add_card(cid(Rank::Two, Suit::Clubs));
        hand.add_card(cid(Rank::Three, Suit::Diamonds));
        assert_eq!(hand.len(), 2);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.value().total, 0);
    }
}
