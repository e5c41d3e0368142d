use crate::card::CardId;
use crate::error::GameError;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// The pool of undealt cards for the session, spanning one or more
/// 52-card decks. Holds ids only; rank/suit derive from the id.
///
/// Drawing from an empty shoe silently replaces it with a fresh shuffled
/// one, so a draw always succeeds.
#[derive(Debug)]
pub struct Shoe {
    num_decks: u8,
    cards: Vec<CardId>,
    rng: ChaCha8Rng,
}

impl Shoe {
    pub fn new(num_decks: u8) -> Result<Self, GameError> {
        Self::with_rng(num_decks, ChaCha8Rng::from_entropy())
    }

    /// Seeded shoe for reproducible sessions.
    pub fn with_seed(num_decks: u8, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(num_decks, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(num_decks: u8, rng: ChaCha8Rng) -> Result<Self, GameError> {
        if num_decks == 0 {
            return Err(GameError::InvalidDeckCount(num_decks));
        }
        let mut shoe = Self {
            num_decks,
            cards: Vec::new(),
            rng,
        };
        shoe.refill();
        Ok(shoe)
    }

    fn refill(&mut self) {
        self.cards = (0..DECK_SIZE * self.num_decks as usize).collect();
        self.cards.shuffle(&mut self.rng);
    }

    /// Remove and return the front card. An empty shoe is refilled and
    /// reshuffled first; the caller never sees the reshuffle.
    pub fn draw(&mut self) -> CardId {
        loop {
            if let Some(id) = self.cards.pop() {
                return id;
            }
            log::debug!("shoe exhausted, reshuffling {} deck(s)", self.num_decks);
            self.refill();
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Place cards on top of the shoe so the next draws yield them in
    /// slice order. Test scaffolding for scripted rounds.
    #[cfg(test)]
    pub(crate) fn stack(&mut self, cards: &[CardId]) {
        self.cards.extend(cards.iter().rev());
    }
}
