//! Match configuration options.

use crate::strategy::DEALER_STANDS_AT;

/// Configuration options for a Twenty-One match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_money(3)
///     .with_money_high_limit(6)
///     .with_dealer_stands_at(18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Balance the player starts the match with.
    pub starting_money: usize,
    /// The match ends once the balance drops to this amount.
    pub money_low_limit: usize,
    /// The match ends once the balance climbs to this amount.
    pub money_high_limit: usize,
    /// Amount won or lost on a decided round.
    pub win_amount: usize,
    /// Cards dealt to each participant before the first turn.
    pub starting_cards: u8,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_at: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_money: 5,
            money_low_limit: 0,
            money_high_limit: 10,
            win_amount: 1,
            starting_cards: 2,
            dealer_stands_at: DEALER_STANDS_AT,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(7);
    /// assert_eq!(options.starting_money, 7);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the balance at which the player is eliminated.
    #[must_use]
    pub const fn with_money_low_limit(mut self, limit: usize) -> Self {
        self.money_low_limit = limit;
        self
    }

    /// Sets the balance at which the player has reached the target.
    #[must_use]
    pub const fn with_money_high_limit(mut self, limit: usize) -> Self {
        self.money_high_limit = limit;
        self
    }

    /// Sets the amount won or lost per decided round.
    ///
    /// A step that would cross a money limit stops at the limit.
    #[must_use]
    pub const fn with_win_amount(mut self, amount: usize) -> Self {
        self.win_amount = amount;
        self
    }

    /// Sets the number of cards dealt to each participant.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_cards(3);
    /// assert_eq!(options.starting_cards, 3);
    /// ```
    #[must_use]
    pub const fn with_starting_cards(mut self, cards: u8) -> Self {
        self.starting_cards = cards;
        self
    }

    /// Sets the total at which the dealer stays.
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }
}
