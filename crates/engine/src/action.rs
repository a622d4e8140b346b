use std::fmt;

/// Hypothetical financial event to simulate.
///
/// Any string the simulator does not recognise maps to [`Action::Unknown`],
/// which leaves the score untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Action {
    PayOffDebt,
    IncreaseLimit,
    NewCard,
    MissPayment,
    #[default]
    Unknown,
}

impl Action {
    /// Canonical wire name, `None` for [`Action::Unknown`].
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Action::PayOffDebt => Some("pay_off_debt"),
            Action::IncreaseLimit => Some("increase_limit"),
            Action::NewCard => Some("new_card"),
            Action::MissPayment => Some("miss_payment"),
            Action::Unknown => None,
        }
    }

    /// Every action with a score effect.
    pub const SUPPORTED: [Action; 4] = [
        Action::PayOffDebt,
        Action::IncreaseLimit,
        Action::NewCard,
        Action::MissPayment,
    ];
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        match value {
            "pay_off_debt" => Action::PayOffDebt,
            "increase_limit" => Action::IncreaseLimit,
            "new_card" => Action::NewCard,
            "miss_payment" => Action::MissPayment,
            _ => Action::Unknown,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        for action in Action::SUPPORTED {
            let code = action.code().unwrap();
            assert_eq!(Action::from(code), action);
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Action::from("MISS_PAYMENT"), Action::Unknown);
        assert_eq!(Action::from(" new_card"), Action::Unknown);
        assert_eq!(Action::from(""), Action::Unknown);
    }
}
