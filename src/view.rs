//! Read-only projections of hands for a presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// One card slot as seen from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// The card is face up.
    Shown(Card),
    /// The card is face down.
    Hidden,
}

/// A hand as seen from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Card slots in the order the cards were received.
    pub cards: Vec<CardView>,
    /// Point total, or `None` while any card is face down.
    pub total: Option<u16>,
    /// Whether the hand is bust, or `None` while any card is face down.
    pub bust: Option<bool>,
}

impl HandView {
    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.cards.iter().all(|card| matches!(card, CardView::Shown(_)))
    }
}

/// Projects `hand` for display.
///
/// With `reveal_all` the whole hand and its total are visible. Otherwise
/// only the first card is shown and the rest of the hand, including its
/// total, stays hidden.
///
/// # Example
///
/// ```
/// use twentyone::{Card, CardView, Hand, Rank, Suit, visible_view};
///
/// let hand: Hand = [
///     Card::new(Rank::King, Suit::Clubs),
///     Card::new(Rank::Seven, Suit::Hearts),
/// ]
/// .into_iter()
/// .collect();
///
/// let hidden = visible_view(&hand, false);
/// assert_eq!(hidden.cards[1], CardView::Hidden);
/// assert_eq!(hidden.total, None);
///
/// let shown = visible_view(&hand, true);
/// assert_eq!(shown.total, Some(17));
/// ```
#[must_use]
pub fn visible_view(hand: &Hand, reveal_all: bool) -> HandView {
    let cards = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(index, &card)| {
            if reveal_all || index == 0 {
                CardView::Shown(card)
            } else {
                CardView::Hidden
            }
        })
        .collect::<Vec<_>>();

    let revealed = reveal_all || hand.len() <= 1;
    let score = hand.score();

    HandView {
        cards,
        total: revealed.then_some(score.total),
        bust: revealed.then_some(score.is_bust()),
    }
}
