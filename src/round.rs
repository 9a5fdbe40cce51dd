//! The turn and outcome state machine for one round.

use crate::card::Card;
use crate::deck::{CardSource, Deck};
use crate::error::{ActionError, DeckError, RoundError};
use crate::hand::Hand;
use crate::result::Outcome;
use crate::strategy::{Decision, Strategy, TurnView};
use crate::view::{HandView, visible_view};

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human-controlled participant.
    Player,
    /// The scripted participant.
    Dealer,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Dealer,
            Self::Dealer => Self::Player,
        }
    }
}

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's decisions.
    PlayerTurn,
    /// Waiting for the dealer's decisions.
    DealerTurn,
    /// The round has an outcome.
    Complete(Outcome),
}

/// Where a seat's turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The turn has not finished yet.
    Active,
    /// The participant stayed.
    Stayed,
    /// The hand went over 21.
    Busted,
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Round state.
    pub state: RoundState,
    /// The player's hand, fully visible.
    pub player: HandView,
    /// The dealer's hand, with the hole cards hidden during the player's turn.
    pub dealer: HandView,
    /// The player's turn status.
    pub player_status: TurnStatus,
    /// The dealer's turn status.
    pub dealer_status: TurnStatus,
}

/// One deal-to-outcome cycle.
///
/// The round owns its card source and both hands. The player acts first;
/// if the player busts the dealer never acts.
///
/// # Example
///
/// ```
/// use twentyone::{Deck, DealerStrategy, Round, RoundState};
///
/// let mut round = Round::deal(Deck::new(3), 2).unwrap();
/// assert_eq!(round.state(), RoundState::PlayerTurn);
///
/// round.stay().unwrap();
/// assert_eq!(round.state(), RoundState::DealerTurn);
///
/// round.play_turn(&mut DealerStrategy::default()).unwrap();
/// assert!(round.outcome().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Round<S = Deck> {
    source: S,
    player: Hand,
    dealer: Hand,
    player_status: TurnStatus,
    dealer_status: TurnStatus,
    state: RoundState,
}

impl<S: CardSource> Round<S> {
    /// Deals `starting_cards` to each seat, alternating player then dealer,
    /// and opens the player's turn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if `source` runs out while dealing.
    pub fn deal(mut source: S, starting_cards: u8) -> Result<Self, DeckError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..starting_cards {
            player.add_card(source.draw()?);
            dealer.add_card(source.draw()?);
        }

        log::debug!(
            "dealt {starting_cards} cards each, {} left in the deck",
            source.remaining()
        );

        let mut round = Self {
            source,
            player,
            dealer,
            player_status: TurnStatus::Active,
            dealer_status: TurnStatus::Active,
            state: RoundState::PlayerTurn,
        };
        round.open_turn(Seat::Player);
        Ok(round)
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome once the round is complete.
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns whether the round has an outcome.
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, RoundState::Complete(_))
    }

    /// Returns the seat whose turn it is, if any.
    pub const fn current_seat(&self) -> Option<Seat> {
        match self.state {
            RoundState::PlayerTurn => Some(Seat::Player),
            RoundState::DealerTurn => Some(Seat::Dealer),
            RoundState::Complete(_) => None,
        }
    }

    /// Returns the hand in `seat`.
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the turn status of `seat`.
    pub const fn status(&self, seat: Seat) -> TurnStatus {
        match seat {
            Seat::Player => self.player_status,
            Seat::Dealer => self.dealer_status,
        }
    }

    /// Returns the card source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Draws a card for the seat whose turn it is.
    ///
    /// A bust ends the round at once with the other seat winning.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is open or the card source is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let seat = self.current_seat().ok_or(ActionError::InvalidState)?;
        let card = self.source.draw()?;

        let hand = self.hand_mut(seat);
        hand.add_card(card);
        let value = hand.value();
        log::debug!("{seat:?} hits {card:?}, total {value}");

        if self.hand(seat).is_bust() {
            self.bust(seat);
        }

        Ok(card)
    }

    /// Ends the current seat's turn without drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is open.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        let seat = self.current_seat().ok_or(ActionError::InvalidState)?;
        log::debug!("{seat:?} stays on {}", self.hand(seat).value());
        *self.status_mut(seat) = TurnStatus::Stayed;

        match seat {
            Seat::Player => self.open_turn(Seat::Dealer),
            Seat::Dealer => {
                let outcome = Outcome::from_totals(self.player.value(), self.dealer.value());
                self.finish(outcome);
            }
        }

        Ok(())
    }

    /// Applies a decision for the current seat.
    ///
    /// Returns the drawn card for [`Decision::Hit`].
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is open or the card source is empty.
    pub fn apply(&mut self, decision: Decision) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Hit => self.hit().map(Some),
            Decision::Stay => self.stay().map(|()| None),
        }
    }

    /// Returns what `seat` sees at the table.
    ///
    /// The dealer's hole cards stay hidden from the player until the
    /// player's turn is over.
    pub fn turn_view(&self, seat: Seat) -> TurnView<'_> {
        let opponent = seat.opponent();
        let reveal = opponent == Seat::Player || self.state != RoundState::PlayerTurn;

        TurnView {
            seat,
            hand: self.hand(seat),
            opponent: visible_view(self.hand(opponent), reveal),
        }
    }

    /// Asks `strategy` for decisions until the current seat's turn ends.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is open, the strategy fails or the card
    /// source is empty.
    pub fn play_turn<T>(&mut self, strategy: &mut T) -> Result<TurnStatus, RoundError>
    where
        T: Strategy + ?Sized,
    {
        let seat = self.current_seat().ok_or(ActionError::InvalidState)?;

        while self.current_seat() == Some(seat) {
            let decision = strategy.decide(&self.turn_view(seat))?;
            self.apply(decision)?;
        }

        Ok(self.status(seat))
    }

    /// Plays the remaining turns and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy fails or the card source is empty.
    pub fn play<P, D>(&mut self, player: &mut P, dealer: &mut D) -> Result<Outcome, RoundError>
    where
        P: Strategy + ?Sized,
        D: Strategy + ?Sized,
    {
        if self.state == RoundState::PlayerTurn {
            self.play_turn(player)?;
        }
        if self.state == RoundState::DealerTurn {
            self.play_turn(dealer)?;
        }

        self.outcome()
            .ok_or_else(|| ActionError::InvalidState.into())
    }

    /// Returns a read-only picture of the table.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            player: visible_view(&self.player, true),
            dealer: visible_view(&self.dealer, self.state != RoundState::PlayerTurn),
            player_status: self.player_status,
            dealer_status: self.dealer_status,
        }
    }

    /// Consumes the round, returning both hands and the card source.
    pub fn into_parts(self) -> (Hand, Hand, S) {
        (self.player, self.dealer, self.source)
    }

    const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    const fn status_mut(&mut self, seat: Seat) -> &mut TurnStatus {
        match seat {
            Seat::Player => &mut self.player_status,
            Seat::Dealer => &mut self.dealer_status,
        }
    }

    /// Starts `seat`'s turn, or resolves it at once if the hand is
    /// already over 21.
    fn open_turn(&mut self, seat: Seat) {
        self.state = match seat {
            Seat::Player => RoundState::PlayerTurn,
            Seat::Dealer => RoundState::DealerTurn,
        };

        if self.hand(seat).is_bust() {
            self.bust(seat);
        }
    }

    fn bust(&mut self, seat: Seat) {
        log::debug!("{seat:?} busts with {}", self.hand(seat).value());
        *self.status_mut(seat) = TurnStatus::Busted;

        let outcome = match seat {
            Seat::Player => Outcome::DealerWins,
            Seat::Dealer => Outcome::PlayerWins,
        };
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: Outcome) {
        log::debug!(
            "round complete: {outcome:?} (player {}, dealer {})",
            self.player.value(),
            self.dealer.value()
        );
        self.state = RoundState::Complete(outcome);
    }
}
