//! A Twenty-One card game engine with optional `no_std` support.
//!
//! The crate provides the pieces of a two-seat game against a scripted
//! dealer: a seedable [`Deck`], ace-flexible [`Hand`] scoring, hit/stay
//! [`Strategy`] policies, the [`Round`] turn state machine and the
//! money-bounded [`Match`]. It never reads input or formats text; a front
//! end renders [`RoundSnapshot`]s and feeds decisions through a [`Prompt`].
//!
//! # Example
//!
//! ```
//! use twentyone::{DealerStrategy, GameOptions, Match};
//!
//! let mut game = Match::new(GameOptions::default(), 42);
//! let mut player = DealerStrategy::new(16);
//! let mut dealer = game.dealer_strategy();
//!
//! let result = game.play_round(&mut player, &mut dealer).unwrap();
//! assert!(result.balance == 4 || result.balance == 5 || result.balance == 6);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod strategy;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardSource, Deck};
pub use error::{ActionError, DeckError, DecisionError, MatchError, RoundError, StrategyError};
pub use game::{Match, MatchStatus};
pub use hand::{BUST_LIMIT, Hand, Score};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use round::{Round, RoundSnapshot, RoundState, Seat, TurnStatus};
pub use strategy::{Decision, DealerStrategy, PlayerStrategy, Prompt, Strategy, TurnView};
pub use view::{CardView, HandView, visible_view};
