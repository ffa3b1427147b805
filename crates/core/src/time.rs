use chrono::{DateTime, Utc};

/// Source of session timestamps (`started_at`, `completed_at`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock UTC.
    #[default]
    System,
    /// Always the same instant; keeps timestamps comparable in tests.
    Frozen(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn frozen_at(at: DateTime<Utc>) -> Self {
        Self::Frozen(at)
    }

    #[must_use]
    pub fn now(self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Frozen(at) => at,
        }
    }
}

/// 2023-11-14T22:13:20Z
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// Frozen clock at [`fixed_now`], for tests.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::frozen_at(fixed_now())
}
