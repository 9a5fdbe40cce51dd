use crate::deck::CardSource;
use crate::error::MatchError;
use crate::result::{Outcome, RoundResult};
use crate::round::Round;

use super::Match;

impl Match {
    /// Applies a completed round to the balance.
    ///
    /// A player win adds the configured win amount, a dealer win takes it
    /// away, and a tie changes nothing. The balance never leaves the range
    /// between the two money limits. The round is consumed so it cannot be
    /// settled twice.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RoundInProgress`] if the round has no outcome
    /// yet, or [`MatchError::MatchOver`] if the match already ended.
    pub fn settle<S: CardSource>(&mut self, round: Round<S>) -> Result<RoundResult, MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver);
        }
        let outcome = round.outcome().ok_or(MatchError::RoundInProgress)?;

        let before = self.balance;
        let moved = match outcome {
            Outcome::PlayerWins => self.balance.saturating_add(self.options.win_amount),
            Outcome::DealerWins => self.balance.saturating_sub(self.options.win_amount),
            Outcome::Tie => self.balance,
        };
        self.balance = moved
            .min(self.options.money_high_limit)
            .max(self.options.money_low_limit);
        self.rounds_played += 1;

        #[expect(
            clippy::cast_possible_wrap,
            reason = "balances stay far below isize::MAX"
        )]
        let net = self.balance as isize - before as isize;

        log::debug!(
            "round {} settled: {outcome:?}, balance {before} -> {}",
            self.rounds_played,
            self.balance
        );

        let (player_hand, dealer_hand, _) = round.into_parts();
        let player_score = player_hand.score();
        let dealer_score = dealer_hand.score();

        Ok(RoundResult {
            outcome,
            player_value: player_score.total,
            dealer_value: dealer_score.total,
            player_bust: player_score.is_bust(),
            dealer_bust: dealer_score.is_bust(),
            player_hand,
            dealer_hand,
            net,
            balance: self.balance,
        })
    }
}
