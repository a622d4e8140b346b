use std::fmt;

/// Risk band of a starting score.
///
/// Both thresholds are strict: a score of exactly `750` is [`Tier::Mid`], and so
/// is a score of exactly `600`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    const HIGH_ABOVE: f64 = 750.0;
    const LOW_BELOW: f64 = 600.0;

    /// Band of `score`, evaluated on the unclamped starting score.
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score > Self::HIGH_ABOVE {
            Tier::High
        } else if score < Self::LOW_BELOW {
            Tier::Low
        } else {
            Tier::Mid
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Mid => "mid",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
