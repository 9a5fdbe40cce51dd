//! CLI Twenty-One example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Card, CardView, DealerStrategy, Decision, GameOptions, HandView, Match, MatchError,
    MatchStatus, Outcome, PlayerStrategy, Rank, RoundError, RoundResult, Seat, Strategy,
    StrategyError, Suit, TurnView, visible_view,
};

/// The dealer policy, paused so the player can follow each draw.
struct Watched {
    inner: DealerStrategy,
    balance: usize,
}

impl Strategy for Watched {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, StrategyError> {
        print_turn(self.balance, view);
        prompt_line("Press enter to continue...").ok_or(StrategyError::InputClosed)?;
        self.inner.decide(view)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Match::new(options, seed);

    print_welcome(&options);
    if prompt_line(">> Press enter to start the game.").is_none() {
        return;
    }

    loop {
        let balance = game.balance();
        let mut player = PlayerStrategy::from_fn(|view, rejected| {
            print_turn(balance, view);
            if rejected.is_some() {
                println!("Invalid entry! Enter H to hit, S to stay.");
            }
            prompt_line("[H]it or [S]tay? ")
        });
        let mut dealer = Watched {
            inner: game.dealer_strategy(),
            balance,
        };

        match game.play_round(&mut player, &mut dealer) {
            Ok(result) => print_result(&result),
            Err(MatchError::Round(RoundError::Strategy(StrategyError::InputClosed))) => break,
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }

        if game.is_over() || !play_again() {
            break;
        }
    }

    print_goodbye(game.status());
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = input.trim().to_string();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                None
            } else {
                Some(line)
            }
        }
    }
}

fn play_again() -> bool {
    println!();
    let mut prompt = "Play again? Enter Y to play again, N to quit. ";
    loop {
        let Some(choice) = prompt_line(prompt) else {
            return false;
        };
        if choice.eq_ignore_ascii_case("y") {
            return true;
        }
        if choice.eq_ignore_ascii_case("n") {
            return false;
        }
        prompt = "Invalid input! Enter Y to play again, N to quit. ";
    }
}

fn print_welcome(options: &GameOptions) {
    println!("--> Welcome to Twenty-One <--");
    println!(
        "You start with {} dollars. You gain {} for winning, and lose {} for losing.",
        options.starting_money, options.win_amount, options.win_amount
    );
    println!(
        "The game ends when you run out of money, get to {} dollars, or decide not to keep playing.",
        options.money_high_limit
    );
    println!("Type 'q' at any prompt to quit.");
}

fn print_goodbye(status: MatchStatus) {
    println!();
    match status {
        MatchStatus::Eliminated => println!("You ran out of money! Game over."),
        MatchStatus::TargetReached => println!("You got too much money! Game over."),
        MatchStatus::InProgress => println!("Goodbye!"),
    }
}

fn print_turn(balance: usize, view: &TurnView<'_>) {
    println!("\nMoney left: {balance} dollar(s)\n");

    let own = visible_view(view.hand, true);
    let (player, dealer) = match view.seat {
        Seat::Player => (&own, &view.opponent),
        Seat::Dealer => (&view.opponent, &own),
    };
    println!("Dealer cards: {}", format_view(dealer));
    println!("Player cards: {}", format_view(player));
    println!();
}

fn print_result(result: &RoundResult) {
    println!();
    println!(
        "Dealer cards: {}",
        format_view(&visible_view(&result.dealer_hand, true))
    );
    println!(
        "Player cards: {}",
        format_view(&visible_view(&result.player_hand, true))
    );
    println!();

    let message = match result.outcome {
        Outcome::DealerWins if result.player_bust => "You busted - the dealer won!",
        Outcome::PlayerWins if result.dealer_bust => "The dealer busted - you won!",
        Outcome::PlayerWins => "You won!",
        Outcome::DealerWins => "The dealer won!",
        Outcome::Tie => "It was a tie.",
    };
    println!("{message}");
    println!("Money left: {} dollar(s)", result.balance);
}

fn format_view(view: &HandView) -> String {
    let cards = view
        .cards
        .iter()
        .map(|card| match card {
            CardView::Shown(card) => format_card(card),
            CardView::Hidden => "[hidden]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");

    match view.total {
        Some(total) => format!("{cards} ({total} points)"),
        None => cards,
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("Hearts", "31"),
        Suit::Diamonds => ("Diamonds", "31"),
        Suit::Clubs => ("Clubs", "32"),
        Suit::Spades => ("Spades", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A",
        Rank::King => "K",
        Rank::Queen => "Q",
        Rank::Jack => "J",
        Rank::Ten => "10",
        Rank::Nine => "9",
        Rank::Eight => "8",
        Rank::Seven => "7",
        Rank::Six => "6",
        Rank::Five => "5",
        Rank::Four => "4",
        Rank::Three => "3",
        Rank::Two => "2",
    };

    format!("{rank} of {}", colorize(suit, color_code))
}
