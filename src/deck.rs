//! The deck a round draws from.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A supply of cards that a round draws from.
pub trait CardSource {
    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no card is left.
    fn draw(&mut self) -> Result<Card, DeckError>;

    /// Returns the number of cards still available.
    fn remaining(&self) -> usize;
}

/// A single 52-card deck.
///
/// Cards are not shuffled up front. Each [`draw`](Deck::draw) removes a
/// uniformly random card from the ones that remain, so a deck never hands
/// out the same card twice.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a full deck drawing with a seeded `ChaCha8` generator.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{CardSource, Deck, DECK_SIZE};
    ///
    /// let mut deck = Deck::new(7);
    /// let card = deck.draw().unwrap();
    /// assert_eq!(deck.remaining(), DECK_SIZE - 1);
    /// assert!(!deck.cards().contains(&card));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a full deck drawing with the given random source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::from_cards(full_deck(), rng)
    }

    /// Creates a deck holding exactly `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>, rng: R) -> Self {
        Self { cards, rng }
    }

    /// Removes and returns a uniformly random remaining card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Exhausted);
        }

        let index = self.rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Returns the cards that have not been drawn yet.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<R: RngCore> CardSource for Deck<R> {
    fn draw(&mut self) -> Result<Card, DeckError> {
        Self::draw(self)
    }

    fn remaining(&self) -> usize {
        self.len()
    }
}

/// Returns all 52 rank and suit combinations in rank-major order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}
