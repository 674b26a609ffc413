use std::fmt;

/// Errors raised when a search is configured incompletely or inconsistently.
///
/// All of these are reported before the first node is expanded. Running out
/// of nodes without reaching a target is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// No distance function was supplied.
    MissingDistance,
    /// No neighbor function was supplied.
    MissingNeighbors,
    /// A path search was requested without a target element.
    MissingTarget,
    /// A range search was requested without a cost budget.
    MissingRange,
    /// The cost budget is negative or NaN.
    InvalidRange(f64),
    /// An expansion limit of zero would never expand the start node.
    ZeroExpansionLimit,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDistance => write!(f, "search config: no distance function"),
            Self::MissingNeighbors => write!(f, "search config: no neighbor function"),
            Self::MissingTarget => write!(f, "path search needs a target element"),
            Self::MissingRange => write!(f, "range search needs a cost range"),
            Self::InvalidRange(r) => write!(f, "invalid search range {r}: must be >= 0"),
            Self::ZeroExpansionLimit => write!(f, "search config: expansion limit must be > 0"),
        }
    }
}

impl std::error::Error for SearchError {}
