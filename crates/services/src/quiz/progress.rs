/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub is_complete: bool,
}

impl QuizProgress {
    /// `position / total`, in `(0, 1]` for any live session.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64
    }

    /// Fraction as a whole percentage, rounded down.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.position.min(self.total) * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

/// Final result of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: usize,
}
