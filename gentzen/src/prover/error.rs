use thiserror::Error;

/// The reasons a proof search may give up before reaching a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search went deeper than the limit of {limit} nested sequents")]
    DepthExceeded { limit: usize },

    #[error("search visited more than the limit of {limit} sequents")]
    StepBudgetExceeded { limit: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
