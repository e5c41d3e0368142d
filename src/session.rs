use serde::{Deserialize, Serialize};

/// Win/loss tally for the whole session. Counters only ever go up and are
/// never reset by a new deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    wins: u32,
    losses: u32,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn snapshot(&self) -> (u32, u32) {
        (self.wins, self.losses)
    }
}
