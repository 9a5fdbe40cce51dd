//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur when parsing a hit/stay token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The token is neither hit nor stay.
    #[error("unrecognized decision, expected h/hit or s/stay")]
    Unrecognized,
}

/// Errors that can occur during round actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The card source could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors a strategy can report instead of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The decision input ended before a valid decision was read.
    #[error("decision input closed")]
    InputClosed,
}

/// Errors that can occur while playing a round to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// A strategy failed to decide.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        Self::Action(ActionError::Deck(err))
    }
}

/// Errors that can occur at the match level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The match has already reached one of its money limits.
    #[error("the match is over")]
    MatchOver,
    /// The round has not reached an outcome yet.
    #[error("the round is still in progress")]
    RoundInProgress,
    /// Playing the round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl From<DeckError> for MatchError {
    fn from(err: DeckError) -> Self {
        Self::Round(err.into())
    }
}
