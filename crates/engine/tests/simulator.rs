use engine::{Action, MAX_SCORE, MIN_SCORE, Simulation, SimulationOutcome, simulate};

fn simulate_score(score: i64, action: Action, amount: Option<f64>) -> SimulationOutcome {
    simulate(&Simulation {
        current_score: Some(score as f64),
        action,
        amount,
    })
}

#[test]
fn reference_scenarios() {
    let cases = [
        (750, Action::MissPayment, None, -80, 670),
        (800, Action::MissPayment, None, -100, 700),
        (500, Action::MissPayment, None, -40, 460),
        (500, Action::PayOffDebt, Some(200.0), 6, 506),
        (840, Action::NewCard, None, -5, 835),
        (830, Action::MissPayment, None, -100, 730),
        (330, Action::MissPayment, None, -40, 300),
    ];

    for (score, action, amount, change, simulated) in cases {
        let outcome = simulate_score(score, action, amount);
        assert_eq!(outcome.change, change, "{score} {action}");
        assert_eq!(outcome.simulated_score, simulated, "{score} {action}");
    }
}

#[test]
fn projection_stays_in_bounds() {
    let actions = Action::SUPPORTED.into_iter().chain([Action::Unknown]);
    for action in actions {
        for score in MIN_SCORE..=MAX_SCORE {
            for amount in [None, Some(0.0), Some(75.0), Some(5_000.0), Some(1e9)] {
                let outcome = simulate_score(score, action, amount);
                assert!(
                    (MIN_SCORE..=MAX_SCORE).contains(&outcome.simulated_score),
                    "{score} {action} {amount:?} -> {}",
                    outcome.simulated_score
                );
            }
        }
    }
}

#[test]
fn direction_of_change() {
    for score in MIN_SCORE..=MAX_SCORE {
        assert!(simulate_score(score, Action::MissPayment, None).change < 0);
        assert!(simulate_score(score, Action::IncreaseLimit, None).change >= 0);
        for amount in [1.0, 50.0, 333.0, 10_000.0] {
            assert!(simulate_score(score, Action::PayOffDebt, Some(amount)).change >= 0);
        }
    }
}

#[test]
fn tier_boundaries_are_strict() {
    assert_eq!(simulate_score(750, Action::NewCard, None).change, -15);
    assert_eq!(simulate_score(751, Action::NewCard, None).change, -5);
    assert_eq!(simulate_score(600, Action::MissPayment, None).change, -80);
    assert_eq!(simulate_score(599, Action::MissPayment, None).change, -40);
}

#[test]
fn unknown_action_leaves_score() {
    for score in MIN_SCORE..=MAX_SCORE {
        let outcome = simulate_score(score, Action::from("refinance"), Some(100.0));
        assert_eq!(outcome.change, 0);
        assert_eq!(outcome.simulated_score, score);
        assert_eq!(outcome.message, "No action selected.");
    }
}

#[test]
fn simulation_is_deterministic() {
    let simulation = Simulation {
        current_score: Some(612.0),
        action: Action::PayOffDebt,
        amount: Some(1234.0),
    };
    let first = simulate(&simulation);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let simulation = simulation.clone();
            std::thread::spawn(move || simulate(&simulation))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), first);
    }
}
