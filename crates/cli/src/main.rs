use std::error::Error;

use api_types::simulator::SimulationResponse;
use clap::{Args, Parser, Subcommand};
use engine::{Action, Simulation};
use serde_json::Number;

#[derive(Parser, Debug)]
#[command(name = "reignscore_cli")]
#[command(about = "Run ReignScore credit-score simulations offline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one action and print the result as JSON.
    Simulate(SimulateArgs),
    /// List the actions the simulator understands.
    Actions,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Starting score (defaults to 700 when omitted or 0).
    #[arg(long, value_parser = parse_number)]
    score: Option<Number>,
    /// One of pay_off_debt, increase_limit, new_card, miss_payment.
    #[arg(long)]
    action: String,
    /// Debt paid off, only used by pay_off_debt.
    #[arg(long, value_parser = parse_number)]
    amount: Option<Number>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn parse_number(raw: &str) -> Result<Number, String> {
    serde_json::from_str::<Number>(raw.trim()).map_err(|_| format!("not a number: {raw}"))
}

fn simulate(args: &SimulateArgs) -> SimulationResponse {
    let outcome = engine::simulate(&Simulation {
        current_score: args.score.as_ref().and_then(Number::as_f64),
        action: Action::from(args.action.as_str()),
        amount: args.amount.as_ref().and_then(Number::as_f64),
    });

    SimulationResponse {
        original_score: args.score.clone(),
        simulated_score: outcome.simulated_score,
        change: outcome.change,
        message: outcome.message,
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(args) => {
            let response = simulate(&args);
            let output = if args.pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{output}");
        }
        Command::Actions => {
            for code in Action::SUPPORTED.iter().filter_map(|action| action.code()) {
                println!("{code}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SimulateArgs {
        let cli = Cli::try_parse_from(
            std::iter::once("reignscore_cli")
                .chain(std::iter::once("simulate"))
                .chain(args.iter().copied()),
        )
        .unwrap();
        match cli.command {
            Command::Simulate(args) => args,
            Command::Actions => panic!("expected simulate"),
        }
    }

    #[test]
    fn simulate_echoes_integer_score() {
        let response = simulate(&parse(&["--score", "840", "--action", "new_card"]));
        assert_eq!(response.original_score, Some(840.into()));
        assert_eq!(response.simulated_score, 835);
        assert_eq!(response.change, -5);
    }

    #[test]
    fn simulate_passes_amount() {
        let response = simulate(&parse(&[
            "--score",
            "500",
            "--action",
            "pay_off_debt",
            "--amount",
            "200",
        ]));
        assert_eq!(response.change, 6);
        assert_eq!(response.simulated_score, 506);
    }

    #[test]
    fn rejects_non_numeric_score() {
        let result = Cli::try_parse_from([
            "reignscore_cli",
            "simulate",
            "--score",
            "high",
            "--action",
            "new_card",
        ]);
        assert!(result.is_err());
    }
}
