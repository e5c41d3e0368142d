mod card;
mod error;
mod hand;
mod session;
mod shoe;
mod table;

pub use card::{Card, CardId, Rank, Suit};
pub use error::GameError;
pub use hand::{hand_value, Hand, HandValue};
pub use session::SessionRecord;
pub use shoe::{Shoe, DECK_SIZE};
pub use table::{DealerStep, Outcome, Phase, Seat, Table};
