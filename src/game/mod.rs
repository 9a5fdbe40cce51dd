//! Match engine: a sequence of rounds bounded by the player's balance.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::MatchError;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::round::Round;
use crate::strategy::{DealerStrategy, Strategy};

mod settle;
pub mod state;

pub use state::MatchStatus;

/// A Twenty-One match.
///
/// The balance is the only state carried from one round to the next. Every
/// round gets a fresh deck, seeded from the match's own generator, and
/// fresh hands. The match ends when the balance reaches either limit in
/// [`GameOptions`].
///
/// # Example
///
/// ```
/// use twentyone::{DealerStrategy, GameOptions, Match, MatchStatus};
///
/// let mut game = Match::new(GameOptions::default(), 42);
/// let mut player = DealerStrategy::new(15);
/// let mut dealer = game.dealer_strategy();
///
/// while !game.is_over() {
///     game.play_round(&mut player, &mut dealer).unwrap();
/// }
/// assert_ne!(game.status(), MatchStatus::InProgress);
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    /// Match options.
    options: GameOptions,
    /// Player balance.
    balance: usize,
    /// Number of settled rounds.
    rounds_played: u32,
    /// Random number generator seeding each round's deck.
    rng: ChaCha8Rng,
}

impl Match {
    /// Creates a new match with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            balance: options.starting_money,
            options,
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns where the match stands.
    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        if self.balance <= self.options.money_low_limit {
            MatchStatus::Eliminated
        } else if self.balance >= self.options.money_high_limit {
            MatchStatus::TargetReached
        } else {
            MatchStatus::InProgress
        }
    }

    /// Returns whether the balance has reached one of the limits.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the dealer policy configured by the options.
    #[must_use]
    pub const fn dealer_strategy(&self) -> DealerStrategy {
        DealerStrategy::new(self.options.dealer_stands_at)
    }

    /// Deals a new round from a fresh deck.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MatchOver`] if the match has ended, or a deck
    /// error if the starting deal needs more than 52 cards.
    pub fn start_round(&mut self) -> Result<Round<Deck>, MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver);
        }

        let deck = Deck::new(self.rng.next_u64());
        log::debug!(
            "starting round {} with balance {}",
            self.rounds_played + 1,
            self.balance
        );

        Ok(Round::deal(deck, self.options.starting_cards)?)
    }

    /// Deals, plays and settles one round.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has ended, a strategy fails or the
    /// deck runs out.
    pub fn play_round<P, D>(
        &mut self,
        player: &mut P,
        dealer: &mut D,
    ) -> Result<RoundResult, MatchError>
    where
        P: Strategy + ?Sized,
        D: Strategy + ?Sized,
    {
        let mut round = self.start_round()?;
        round.play(player, dealer)?;
        self.settle(round)
    }
}
