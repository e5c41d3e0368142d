use crate::card::CardId;
use crate::error::GameError;
use crate::hand::{Hand, HandValue};
use crate::session::SessionRecord;
use crate::shoe::Shoe;
use serde::{Deserialize, Serialize};

/// Current phase of the round. `Idle` and `Resolved` are the stable rest
/// points; only an explicit deal leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// Which participant a hand query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Dealer,
}

/// Result of a resolved round. A push moves neither counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

/// One increment of the dealer's mandatory draw protocol. The client
/// owns the pacing between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerStep {
    /// Dealer drew a card; call again for the next step.
    Card(CardId),
    /// Protocol finished and the round is resolved.
    Resolved(Outcome),
}

const RESULT_PLAYER_BUST: &str = "You bust";
const RESULT_DEALER_BUST: &str = "Dealer busts, you win!";
const RESULT_LOSS: &str = "You lose";
const RESULT_WIN: &str = "You win!";
const RESULT_PUSH: &str = "Tie";

/// One table running deal-to-resolution rounds against a shared shoe.
///
/// The shoe and the session tally live for the whole table; the two
/// hands and the phase are per-round and superseded by each deal.
/// Commands in the wrong phase are rejected with
/// [`GameError::OutOfTurn`], never a panic.
#[derive(Debug)]
pub struct Table {
    shoe: Shoe,
    dealer_hand: Hand,
    player_hand: Hand,
    hole_hidden: bool,
    phase: Phase,
    last_result: Option<&'static str>,
    outcome: Option<Outcome>,
    session: SessionRecord,
}

impl Table {
    pub fn new(num_decks: u8) -> Result<Self, GameError> {
        Ok(Self::with_shoe(Shoe::new(num_decks)?))
    }

    /// Seeded table for reproducible sessions.
    pub fn with_seed(num_decks: u8, seed: u64) -> Result<Self, GameError> {
        Ok(Self::with_shoe(Shoe::with_seed(num_decks, seed)?))
    }

    fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            dealer_hand: Hand::new(),
            player_hand: Hand::new(),
            hole_hidden: false,
            phase: Phase::Idle,
            last_result: None,
            outcome: None,
            session: SessionRecord::new(),
        }
    }

    /// Start a new round: two cards to the dealer (the first stays
    /// hidden), two to the player. Rejected while a round is in play.
    pub fn deal(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Idle | Phase::Resolved => {}
            phase => {
                return Err(GameError::OutOfTurn {
                    action: "deal",
                    phase,
                })
            }
        }

        self.dealer_hand.clear();
        self.player_hand.clear();
        self.last_result = None;
        self.outcome = None;

        self.dealer_hand.add_card(self.shoe.draw());
        self.dealer_hand.add_card(self.shoe.draw());
        self.player_hand.add_card(self.shoe.draw());
        self.player_hand.add_card(self.shoe.draw());

        self.hole_hidden = true;
        self.phase = Phase::PlayerTurn;
        log::debug!("round dealt, {} cards left in shoe", self.shoe.len());
        Ok(())
    }

    /// Draw one card to the player. Busting resolves the round as an
    /// immediate loss; otherwise the player may act again.
    pub fn hit(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::PlayerTurn {
            return Err(GameError::OutOfTurn {
                action: "hit",
                phase: self.phase,
            });
        }

        self.player_hand.add_card(self.shoe.draw());
        if self.player_hand.is_busted() {
            self.hole_hidden = false;
            self.resolve(Outcome::Loss, RESULT_PLAYER_BUST);
        }
        Ok(())
    }

    /// End the player's turn: reveal the hole card and hand control to
    /// the dealer. Drive the dealer with [`Table::dealer_step`] or
    /// [`Table::play_dealer`].
    pub fn stand(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::PlayerTurn {
            return Err(GameError::OutOfTurn {
                action: "stand",
                phase: self.phase,
            });
        }

        self.hole_hidden = false;
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Advance the dealer protocol by one step: draw while below 17 or
    /// on soft 17, otherwise settle the round.
    pub fn dealer_step(&mut self) -> Result<DealerStep, GameError> {
        if self.phase != Phase::DealerTurn {
            return Err(GameError::OutOfTurn {
                action: "dealer_step",
                phase: self.phase,
            });
        }

        if self.dealer_must_hit() {
            let id = self.shoe.draw();
            self.dealer_hand.add_card(id);
            log::debug!("dealer draws, total now {}", self.dealer_hand.value().total);
            return Ok(DealerStep::Card(id));
        }

        let dealer = self.dealer_hand.value().total;
        let player = self.player_hand.value().total;
        let (outcome, text) = if dealer > 21 {
            (Outcome::Win, RESULT_DEALER_BUST)
        } else if dealer > player {
            (Outcome::Loss, RESULT_LOSS)
        } else if player > dealer {
            (Outcome::Win, RESULT_WIN)
        } else {
            (Outcome::Push, RESULT_PUSH)
        };
        self.resolve(outcome, text);
        Ok(DealerStep::Resolved(outcome))
    }

    /// Run the dealer protocol to completion, for clients that do not
    /// pace the draws.
    pub fn play_dealer(&mut self) -> Result<Outcome, GameError> {
        loop {
            if let DealerStep::Resolved(outcome) = self.dealer_step()? {
                return Ok(outcome);
            }
        }
    }

    fn dealer_must_hit(&self) -> bool {
        let HandValue { total, is_soft } = self.dealer_hand.value();
        total < 17 || (total == 17 && is_soft)
    }

    fn resolve(&mut self, outcome: Outcome, text: &'static str) {
        match outcome {
            Outcome::Win => self.session.record_win(),
            Outcome::Loss => self.session.record_loss(),
            Outcome::Push => {}
        }
        self.outcome = Some(outcome);
        self.last_result = Some(text);
        self.phase = Phase::Resolved;
        log::info!(
            "round resolved: {text} (dealer {}, player {})",
            self.dealer_hand.value().total,
            self.player_hand.value().total,
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_cards(&self) -> &[CardId] {
        self.player_hand.cards()
    }

    /// All dealer cards, hole card included. For rendering during the
    /// player's turn use [`Table::visible_dealer_cards`].
    pub fn dealer_cards(&self) -> &[CardId] {
        self.dealer_hand.cards()
    }

    pub fn hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Dealer cards a renderer may show: the hole card is suppressed
    /// until it is revealed.
    pub fn visible_dealer_cards(&self) -> &[CardId] {
        let cards = self.dealer_hand.cards();
        if self.hole_hidden && !cards.is_empty() {
            &cards[1..]
        } else {
            cards
        }
    }

    pub fn hand_value(&self, seat: Seat) -> HandValue {
        match seat {
            Seat::Player => self.player_hand.value(),
            Seat::Dealer => self.dealer_hand.value(),
        }
    }

    /// Result text of the last resolved round, cleared by the next deal.
    pub fn last_result(&self) -> Option<&'static str> {
        self.last_result
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn session(&self) -> (u32, u32) {
        self.session.snapshot()
    }

    /// Cards left in the shoe, for display.
    pub fn shoe_len(&self) -> usize {
        self.shoe.len()
    }
}
