//! Hands and ace-flexible scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can have without busting.
pub const BUST_LIMIT: u16 = 21;

/// The value of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    /// Point total after soft-ace reduction.
    pub total: u16,
    /// Number of aces still counted as 11.
    pub soft_aces: u16,
}

impl Score {
    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BUST_LIMIT
    }

    /// Returns whether at least one ace is still counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }
}

/// Scores `cards` under the soft-ace rule.
///
/// Every ace starts at 11. While the total is over 21 and some ace is still
/// worth 11, one such ace is demoted to 1. Which ace gets demoted does not
/// change the total, so the result depends only on the multiset of cards.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, Suit, hand::score};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// let score = score(&cards);
/// assert_eq!(score.total, 21);
/// assert!(!score.is_bust());
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> Score {
    let mut total: u16 = 0;
    let mut soft_aces: u16 = 0;

    for card in cards {
        if card.rank.is_ace() {
            soft_aces = soft_aces.saturating_add(1);
        }
        total = total.saturating_add(u16::from(card.rank.max_value()));
    }

    while total > BUST_LIMIT && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    Score { total, soft_aces }
}

/// The cards held by one participant during a round.
///
/// A hand only stores its cards. The total and bust flag are recomputed on
/// every read, so they can never disagree with the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    #[must_use]
    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.score().total
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score().is_soft()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
