//! Credit-score simulator.
//!
//! Given a starting score and a hypothetical [`Action`], [`simulate`] estimates
//! how the score would move. The estimate is a heuristic scaled by the
//! starting score's [`Tier`]: high scores move less on good news and more on
//! bad news, low scores the other way round.
//!
//! The simulator is total. Missing or nonsensical input is normalised, never
//! rejected, and the same input always yields the same outcome.
//!
//! ```rust
//! use engine::{Action, Simulation, simulate};
//!
//! let outcome = simulate(&Simulation {
//!     current_score: Some(800.0),
//!     action: Action::MissPayment,
//!     amount: None,
//! });
//! assert_eq!(outcome.change, -100);
//! assert_eq!(outcome.simulated_score, 700);
//! ```

pub use action::Action;
pub use score::{DEFAULT_SCORE, MAX_SCORE, MIN_SCORE};
pub use tier::Tier;

mod action;
mod score;
mod tier;

/// Points earned for every full step of debt paid off.
const DEBT_STEP: f64 = 50.0;

/// Upper bound on the gain from a single debt payoff.
const MAX_PAYOFF_GAIN: i64 = 100;

/// Input of a single simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simulation {
    /// Starting score. `None`, `0` and `NaN` mean [`DEFAULT_SCORE`].
    pub current_score: Option<f64>,
    pub action: Action,
    /// Amount of debt paid off. Only read for [`Action::PayOffDebt`].
    pub amount: Option<f64>,
}

/// Result of a single simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationOutcome {
    /// Projected score, always within `[MIN_SCORE, MAX_SCORE]`.
    pub simulated_score: i64,
    /// Delta computed for the action, *before* clamping.
    ///
    /// When the projection hits a bound, `starting score + change` differs
    /// from `simulated_score`.
    pub change: i64,
    pub message: String,
}

/// Run the simulation.
pub fn simulate(simulation: &Simulation) -> SimulationOutcome {
    let base = score::base_score(simulation.current_score);
    let tier = Tier::of(base);

    let (change, message) = match simulation.action {
        Action::PayOffDebt => pay_off_debt(tier, simulation.amount),
        Action::IncreaseLimit => increase_limit(tier),
        Action::NewCard => new_card(tier),
        Action::MissPayment => miss_payment(tier),
        Action::Unknown => (0, "No action selected.".to_string()),
    };

    let simulated_score = score::clamp_score(base + change as f64);

    tracing::debug!(
        %tier,
        action = %simulation.action,
        change,
        simulated_score,
        "score simulated"
    );

    SimulationOutcome {
        simulated_score,
        change,
        message,
    }
}

fn pay_off_debt(tier: Tier, amount: Option<f64>) -> (i64, String) {
    let amount = match amount {
        Some(amount) if !amount.is_nan() => amount,
        _ => 0.0,
    };
    let base_points = (amount / DEBT_STEP).floor();
    let multiplier = match tier {
        Tier::Low => 1.5,
        Tier::Mid => 1.0,
        Tier::High => 0.5,
    };
    let change = (score::round_half_up(base_points * multiplier) as i64).min(MAX_PAYOFF_GAIN);

    let message = if change == 0 {
        format!(
            "Paying off ${amount} has a negligible immediate impact on your score, \
             but every bit of debt repaid counts over time."
        )
    } else {
        format!(
            "Paying off ${amount} heavily reduces your credit utilization, \
             one of the biggest factors in your score."
        )
    };

    (change, message)
}

fn increase_limit(tier: Tier) -> (i64, String) {
    let change = if tier == Tier::High { 5 } else { 20 };
    let message = "A higher credit limit lowers your utilization ratio, \
                   as long as you keep your balances where they are."
        .to_string();

    (change, message)
}

fn new_card(tier: Tier) -> (i64, String) {
    let change: i64 = if tier == Tier::High { -5 } else { -15 };
    let message = format!(
        "Opening a new card triggers a hard inquiry, which costs about {} points in the short term.",
        change.abs()
    );

    (change, message)
}

fn miss_payment(tier: Tier) -> (i64, String) {
    let change = match tier {
        Tier::High => -100,
        Tier::Mid => -80,
        Tier::Low => -40,
    };
    let message = if tier == Tier::High {
        "A missed payment is catastrophic for a high score and can cost 100+ points.".to_string()
    } else {
        "Missing a payment is the most damaging action you can take for your score.".to_string()
    };

    (change, message)
}
