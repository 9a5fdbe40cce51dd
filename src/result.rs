//! Round outcome types.

use crate::hand::Hand;
use crate::round::Seat;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// The dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Both totals are equal.
    Tie,
}

impl Outcome {
    /// Returns the winning seat, or `None` for a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::PlayerWins => Some(Seat::Player),
            Self::DealerWins => Some(Seat::Dealer),
            Self::Tie => None,
        }
    }

    /// Compares two non-busted totals.
    #[must_use]
    pub const fn from_totals(player: u16, dealer: u16) -> Self {
        if player > dealer {
            Self::PlayerWins
        } else if player < dealer {
            Self::DealerWins
        } else {
            Self::Tie
        }
    }
}

/// A settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final hand.
    pub player_hand: Hand,
    /// The dealer's final hand.
    pub dealer_hand: Hand,
    /// The player's final total.
    pub player_value: u16,
    /// The dealer's final total.
    pub dealer_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Change applied to the player's balance (positive = won).
    pub net: isize,
    /// The player's balance after settlement.
    pub balance: usize,
}
