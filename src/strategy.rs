//! Hit/stay decision policies.
//!
//! A round never asks who is sitting in a seat. It only calls
//! [`Strategy::decide`], so a human at a terminal and the scripted dealer
//! are interchangeable from its point of view.

extern crate alloc;

use alloc::string::String;
use core::str::FromStr;

use crate::error::{DecisionError, StrategyError};
use crate::hand::Hand;
use crate::round::Seat;
use crate::view::HandView;

/// Default threshold at which the scripted dealer stops drawing.
pub const DEALER_STANDS_AT: u8 = 17;

/// A participant's choice at a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Stop drawing for the rest of the round.
    Stay,
}

impl FromStr for Decision {
    type Err = DecisionError;

    /// Parses `h`, `hit`, `s` or `stay`, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("h") || token.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("stay") {
            Ok(Self::Stay)
        } else {
            Err(DecisionError::Unrecognized)
        }
    }
}

/// What a participant sees when asked to decide.
#[derive(Debug, Clone)]
pub struct TurnView<'a> {
    /// The seat that is deciding.
    pub seat: Seat,
    /// The deciding participant's own hand.
    pub hand: &'a Hand,
    /// The other participant's hand as visible from the table.
    pub opponent: HandView,
}

/// A hit/stay policy, chosen when a participant is seated.
pub trait Strategy {
    /// Decides the next action for the hand in `view`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InputClosed`] if the policy depends on input
    /// that is no longer available.
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, StrategyError>;
}

/// The scripted dealer policy: hit below a threshold, stay at or above it.
///
/// The policy only looks at its own total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerStrategy {
    stands_at: u8,
}

impl DealerStrategy {
    /// Creates a policy that stays once the total reaches `stands_at`.
    #[must_use]
    pub const fn new(stands_at: u8) -> Self {
        Self { stands_at }
    }

    /// Returns the total at which the policy stays.
    #[must_use]
    pub const fn stands_at(&self) -> u8 {
        self.stands_at
    }

    /// Returns the action the policy takes for `hand`.
    #[must_use]
    pub fn next_action(&self, hand: &Hand) -> Decision {
        if hand.value() < u16::from(self.stands_at) {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }
}

impl Default for DealerStrategy {
    fn default() -> Self {
        Self::new(DEALER_STANDS_AT)
    }
}

impl Strategy for DealerStrategy {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, StrategyError> {
        Ok(self.next_action(view.hand))
    }
}

/// A source of free-text decision lines, typically a terminal.
pub trait Prompt {
    /// Shows `view` and reads one line of input.
    ///
    /// `rejected` holds the previous line when it was not a valid decision.
    /// Returns `None` when no more input is available.
    fn ask(&mut self, view: &TurnView<'_>, rejected: Option<&str>) -> Option<String>;
}

impl<F> Prompt for F
where
    F: FnMut(&TurnView<'_>, Option<&str>) -> Option<String>,
{
    fn ask(&mut self, view: &TurnView<'_>, rejected: Option<&str>) -> Option<String> {
        self(view, rejected)
    }
}

/// The human-controlled policy.
///
/// Lines that are not a hit or stay token are rejected and the prompt is
/// asked again; a rejected line never advances the turn.
#[derive(Debug, Clone)]
pub struct PlayerStrategy<P> {
    prompt: P,
}

impl<P: Prompt> PlayerStrategy<P> {
    /// Creates a policy reading decisions from `prompt`.
    #[must_use]
    pub const fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Returns the underlying prompt.
    pub fn into_inner(self) -> P {
        self.prompt
    }
}

impl<F> PlayerStrategy<F>
where
    F: FnMut(&TurnView<'_>, Option<&str>) -> Option<String>,
{
    /// Creates a policy reading decisions from a closure.
    #[must_use]
    pub const fn from_fn(prompt: F) -> Self {
        Self { prompt }
    }
}

impl<P: Prompt> Strategy for PlayerStrategy<P> {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, StrategyError> {
        let mut rejected: Option<String> = None;

        loop {
            let line = self
                .prompt
                .ask(view, rejected.as_deref())
                .ok_or(StrategyError::InputClosed)?;

            match line.parse::<Decision>() {
                Ok(decision) => return Ok(decision),
                Err(_) => {
                    log::trace!("rejected decision input {line:?}");
                    rejected = Some(line);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_tokens_in_any_case() {
        for token in ["h", "H", "hit", "HiT", "  hit\n"] {
            assert_eq!(token.parse::<Decision>(), Ok(Decision::Hit), "{token:?}");
        }
        for token in ["s", "S", "stay", "STAY", "\ts "] {
            assert_eq!(token.parse::<Decision>(), Ok(Decision::Stay), "{token:?}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for token in ["", "x", "hs", "stand", "hitt", "y", "h s"] {
            assert_eq!(
                token.parse::<Decision>(),
                Err(DecisionError::Unrecognized),
                "{token:?}"
            );
        }
    }
}
