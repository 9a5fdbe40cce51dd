//! Round and match integration tests.

use std::collections::VecDeque;

use twentyone::{
    ActionError, Card, CardSource, CardView, DealerStrategy, Decision, DeckError, GameOptions,
    Hand, Match, MatchError, MatchStatus, Outcome, PlayerStrategy, Prompt, Rank, Round, RoundError,
    RoundState, Seat, Strategy, StrategyError, Suit, TurnStatus, TurnView,
};

/// Draws cards in the given order.
#[derive(Debug)]
struct Stacked(VecDeque<Card>);

impl Stacked {
    fn new(ranks: &[Rank]) -> Self {
        Self(
            ranks
                .iter()
                .zip(Suit::ALL.iter().cycle())
                .map(|(&rank, &suit)| Card::new(rank, suit))
                .collect(),
        )
    }
}

impl CardSource for Stacked {
    fn draw(&mut self) -> Result<Card, DeckError> {
        self.0.pop_front().ok_or(DeckError::Exhausted)
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

/// Feeds canned lines and records what was rejected.
#[derive(Default)]
struct Script {
    lines: VecDeque<String>,
    rejected: Vec<String>,
    asked: usize,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|&line| line.to_owned()).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for Script {
    fn ask(&mut self, _view: &TurnView<'_>, rejected: Option<&str>) -> Option<String> {
        self.asked += 1;
        if let Some(line) = rejected {
            self.rejected.push(line.to_owned());
        }
        self.lines.pop_front()
    }
}

/// Fails the test if it is ever asked to decide.
struct NeverAsked;

impl Strategy for NeverAsked {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, StrategyError> {
        panic!("{:?} should not have been asked to decide", view.seat);
    }
}

fn player(lines: &[&str]) -> PlayerStrategy<Script> {
    PlayerStrategy::new(Script::new(lines))
}

#[test]
fn deal_alternates_between_seats() {
    use Rank::{Five, King, Queen, Two};

    let round = Round::deal(Stacked::new(&[King, Two, Queen, Five]), 2).unwrap();
    let player: Vec<_> = round.player_hand().cards().iter().map(|c| c.rank).collect();
    let dealer: Vec<_> = round.dealer_hand().cards().iter().map(|c| c.rank).collect();

    assert_eq!(player, [King, Queen]);
    assert_eq!(dealer, [Two, Five]);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.source().remaining(), 0);
}

#[test]
fn higher_total_wins_when_nobody_busts() {
    use Rank::{King, Nine, Queen, Ten};

    let mut round = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();
    let outcome = round
        .play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();

    assert_eq!(round.player_hand().value(), 20);
    assert_eq!(round.dealer_hand().value(), 19);
    assert_eq!(outcome, Outcome::PlayerWins);
    assert_eq!(round.status(Seat::Player), TurnStatus::Stayed);
    assert_eq!(round.status(Seat::Dealer), TurnStatus::Stayed);
}

#[test]
fn totals_are_compared_when_both_stay() {
    use Rank::{Eight, Jack, King, Seven, Ten};

    let mut round = Round::deal(Stacked::new(&[King, Ten, Seven, Eight, Jack]), 2).unwrap();
    // Dealer holds 18 and stays; player holds 17.
    round.stay().unwrap();
    round.play_turn(&mut DealerStrategy::default()).unwrap();
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));

    let mut round = Round::deal(Stacked::new(&[King, Ten, Eight, Eight]), 2).unwrap();
    let outcome = round
        .play(&mut player(&["stay"]), &mut DealerStrategy::default())
        .unwrap();
    assert_eq!(outcome, Outcome::Tie);
    assert_eq!(outcome.winner(), None);
}

#[test]
fn player_bust_skips_dealer_turn() {
    use Rank::{Five, Four, Seven, Six, Ten};

    // Player 5+6 = 11, hits 4 (15), hits 7 (22).
    let mut round = Round::deal(Stacked::new(&[Five, Ten, Six, Seven, Four, Seven]), 2).unwrap();
    let outcome = round
        .play(&mut player(&["h", "HIT"]), &mut NeverAsked)
        .unwrap();

    assert_eq!(outcome, Outcome::DealerWins);
    assert_eq!(round.player_hand().value(), 22);
    assert!(round.player_hand().is_bust());
    assert_eq!(round.status(Seat::Player), TurnStatus::Busted);
    assert_eq!(round.status(Seat::Dealer), TurnStatus::Active);
    assert_eq!(round.dealer_hand().len(), 2);
}

#[test]
fn dealer_bust_gives_player_the_round() {
    use Rank::{Four, King, Queen, Six, Two};

    // Dealer 6+4 = 10, hits 2 (12), hits King (22).
    let mut round = Round::deal(Stacked::new(&[Queen, Six, Two, Four, Two, King]), 2).unwrap();
    let outcome = round
        .play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();

    assert_eq!(outcome, Outcome::PlayerWins);
    assert_eq!(round.dealer_hand().value(), 22);
    assert_eq!(round.status(Seat::Dealer), TurnStatus::Busted);
}

#[test]
fn dealer_hits_below_threshold_and_stays_at_it() {
    use Rank::{Ace, Seven, Six, Ten};

    let dealer = DealerStrategy::default();
    let sixteen: Hand = [Card::new(Ten, Suit::Spades), Card::new(Six, Suit::Clubs)]
        .into_iter()
        .collect();
    let seventeen: Hand = [Card::new(Ten, Suit::Spades), Card::new(Seven, Suit::Clubs)]
        .into_iter()
        .collect();
    let soft_seventeen: Hand = [Card::new(Ace, Suit::Spades), Card::new(Six, Suit::Clubs)]
        .into_iter()
        .collect();

    assert_eq!(dealer.next_action(&sixteen), Decision::Hit);
    assert_eq!(dealer.next_action(&seventeen), Decision::Stay);
    assert_eq!(dealer.next_action(&soft_seventeen), Decision::Stay);
    assert_eq!(DealerStrategy::new(18).next_action(&seventeen), Decision::Hit);
}

#[test]
fn invalid_input_is_reprompted_without_advancing() {
    use Rank::{Five, Nine, Seven, Six, Ten};

    let mut round = Round::deal(Stacked::new(&[Five, Ten, Six, Nine, Seven]), 2).unwrap();
    let mut human = player(&["x", "hitt", "", "h", "nope", "S"]);

    let status = round.play_turn(&mut human).unwrap();

    assert_eq!(status, TurnStatus::Stayed);
    assert_eq!(round.player_hand().len(), 3);
    assert_eq!(round.state(), RoundState::DealerTurn);

    let script = human.into_inner();
    assert_eq!(script.asked, 6);
    assert_eq!(script.rejected, ["x", "hitt", "", "nope"]);
}

#[test]
fn closed_input_stops_the_round() {
    use Rank::{Five, Nine, Six, Ten};

    let mut round = Round::deal(Stacked::new(&[Five, Ten, Six, Nine]), 2).unwrap();
    let err = round
        .play(&mut player(&["maybe"]), &mut DealerStrategy::default())
        .unwrap_err();

    assert_eq!(err, RoundError::Strategy(StrategyError::InputClosed));
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn closures_can_prompt() {
    use Rank::{Five, Nine, Six, Ten};

    let mut seen_hidden = false;
    let mut human = PlayerStrategy::from_fn(|view, _| {
        seen_hidden = view.opponent.cards.contains(&CardView::Hidden);
        Some(String::from("stay"))
    });

    let mut round = Round::deal(Stacked::new(&[Five, Ten, Six, Nine]), 2).unwrap();
    round.play_turn(&mut human).unwrap();
    drop(human);

    assert!(seen_hidden);
}

#[test]
fn dealing_from_a_short_supply_fails() {
    use Rank::{Five, Six, Ten};

    let err = Round::deal(Stacked::new(&[Five, Ten, Six]), 2).unwrap_err();
    assert_eq!(err, DeckError::Exhausted);
}

#[test]
fn hitting_an_empty_supply_is_reported() {
    use Rank::{Five, Nine, Six, Ten};

    let mut round = Round::deal(Stacked::new(&[Five, Ten, Six, Nine]), 2).unwrap();
    assert_eq!(
        round.hit().unwrap_err(),
        ActionError::Deck(DeckError::Exhausted)
    );
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn actions_after_completion_are_rejected() {
    use Rank::{King, Nine, Queen, Ten};

    let mut round = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();
    round.stay().unwrap();
    round.stay().unwrap();

    assert!(round.is_complete());
    assert_eq!(round.current_seat(), None);
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stay().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        round.play_turn(&mut DealerStrategy::default()).unwrap_err(),
        RoundError::Action(ActionError::InvalidState)
    );
}

#[test]
fn bust_on_the_deal_ends_the_round() {
    use Rank::{Five, Four, King, Queen, Three, Two};

    let round = Round::deal(Stacked::new(&[King, Two, Queen, Three, Five, Four]), 3).unwrap();

    assert_eq!(round.player_hand().value(), 25);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
    assert_eq!(round.status(Seat::Player), TurnStatus::Busted);
}

#[test]
fn snapshot_hides_dealer_hole_card_until_player_is_done() {
    use Rank::{Five, King, Seven, Ten};

    let mut round = Round::deal(Stacked::new(&[Five, King, Ten, Seven]), 2).unwrap();

    let during = round.snapshot();
    assert_eq!(during.player.total, Some(15));
    assert_eq!(
        during.dealer.cards,
        [
            CardView::Shown(Card::new(King, Suit::Clubs)),
            CardView::Hidden
        ]
    );
    assert_eq!(during.dealer.total, None);
    assert!(!during.dealer.is_revealed());

    round.stay().unwrap();

    let after = round.snapshot();
    assert!(after.dealer.is_revealed());
    assert_eq!(after.dealer.total, Some(17));
    assert_eq!(after.dealer.bust, Some(false));
    assert_eq!(after.player_status, TurnStatus::Stayed);
}

#[test]
fn dealer_sees_the_full_player_hand() {
    use Rank::{Five, King, Seven, Ten};

    let mut round = Round::deal(Stacked::new(&[Five, King, Ten, Seven]), 2).unwrap();
    round.stay().unwrap();

    let view = round.turn_view(Seat::Dealer);
    assert_eq!(view.hand.value(), 17);
    assert!(view.opponent.is_revealed());
    assert_eq!(view.opponent.total, Some(15));
}

#[test]
fn settling_moves_the_balance() {
    use Rank::{Eight, King, Nine, Queen, Ten};

    let mut game = Match::new(GameOptions::default(), 1);

    let mut won = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();
    won.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    let result = game.settle(won).unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.net, 1);
    assert_eq!(result.balance, 6);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 19);

    let mut tied = Round::deal(Stacked::new(&[King, Ten, Eight, Eight]), 2).unwrap();
    tied.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    let result = game.settle(tied).unwrap();
    assert_eq!(result.net, 0);
    assert_eq!(game.balance(), 6);

    let mut lost = Round::deal(Stacked::new(&[Nine, Ten, Eight, King]), 2).unwrap();
    lost.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    let result = game.settle(lost).unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.net, -1);
    assert_eq!(game.balance(), 5);
    assert_eq!(game.rounds_played(), 3);
}

#[test]
fn unfinished_round_cannot_be_settled() {
    use Rank::{King, Nine, Queen, Ten};

    let mut game = Match::new(GameOptions::default(), 1);
    let round = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();

    assert_eq!(game.settle(round).unwrap_err(), MatchError::RoundInProgress);
    assert_eq!(game.balance(), 5);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn match_ends_at_either_limit() {
    use Rank::{Eight, King, Nine, Queen, Ten};

    let options = GameOptions::default()
        .with_starting_money(1)
        .with_money_high_limit(2);

    let mut game = Match::new(options, 1);
    let mut lost = Round::deal(Stacked::new(&[Nine, Ten, Eight, King]), 2).unwrap();
    lost.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    game.settle(lost).unwrap();
    assert_eq!(game.status(), MatchStatus::Eliminated);
    assert!(game.is_over());
    assert_eq!(game.start_round().unwrap_err(), MatchError::MatchOver);

    let mut game = Match::new(options, 1);
    let mut won = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();
    won.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    game.settle(won).unwrap();
    assert_eq!(game.status(), MatchStatus::TargetReached);

    let mut extra = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();
    extra.stay().unwrap();
    extra.stay().unwrap();
    assert_eq!(game.settle(extra).unwrap_err(), MatchError::MatchOver);
    assert_eq!(game.balance(), 2);
}

#[test]
fn large_steps_stop_at_the_money_limits() {
    use Rank::{Eight, King, Nine, Queen, Ten};

    let options = GameOptions::default()
        .with_win_amount(3)
        .with_money_low_limit(3);

    let mut game = Match::new(options, 1);
    let mut lost = Round::deal(Stacked::new(&[Nine, Ten, Eight, King]), 2).unwrap();
    lost.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    let result = game.settle(lost).unwrap();
    assert_eq!(result.balance, 3);
    assert_eq!(result.net, -2);
    assert_eq!(game.status(), MatchStatus::Eliminated);

    let mut game = Match::new(options.with_starting_money(8), 1);
    let mut won = Round::deal(Stacked::new(&[King, Ten, Queen, Nine]), 2).unwrap();
    won.play(&mut player(&["s"]), &mut DealerStrategy::default())
        .unwrap();
    let result = game.settle(won).unwrap();
    assert_eq!(result.balance, 10);
    assert_eq!(result.net, 2);
    assert_eq!(game.status(), MatchStatus::TargetReached);
}

#[test]
fn match_runs_until_a_limit_is_reached() {
    let mut game = Match::new(GameOptions::default(), 2024);
    let mut player = DealerStrategy::new(15);
    let mut dealer = game.dealer_strategy();

    let mut last_balance = game.balance();
    while !game.is_over() {
        let result = game.play_round(&mut player, &mut dealer).unwrap();
        assert_eq!(result.balance.abs_diff(last_balance), result.net.unsigned_abs());
        assert!(result.player_hand.len() >= 2);
        last_balance = result.balance;
    }

    assert!(game.balance() == 0 || game.balance() == 10);
    assert!(game.rounds_played() >= 5);
}

#[test]
fn same_seed_plays_the_same_match() {
    let play = |seed| {
        let mut game = Match::new(GameOptions::default(), seed);
        let mut player = DealerStrategy::new(14);
        let mut dealer = game.dealer_strategy();
        let mut outcomes = Vec::new();
        while !game.is_over() {
            outcomes.push(game.play_round(&mut player, &mut dealer).unwrap().outcome);
        }
        (outcomes, game.status())
    };

    assert_eq!(play(9), play(9));
}

#[test]
fn starting_cards_option_controls_the_deal() {
    let mut game = Match::new(GameOptions::default().with_starting_cards(1), 5);
    let round = game.start_round().unwrap();

    assert_eq!(round.player_hand().len(), 1);
    assert_eq!(round.dealer_hand().len(), 1);
    assert_eq!(round.source().len(), 50);
}
