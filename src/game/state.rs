//! Match state types.

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// The balance is strictly between the limits; more rounds can be played.
    InProgress,
    /// The balance fell to the low limit.
    Eliminated,
    /// The balance reached the high limit.
    TargetReached,
}

impl MatchStatus {
    /// Returns whether no further rounds can be played.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
