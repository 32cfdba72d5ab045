//! Load state of the catalog

use crate::error::FetchFailure;

/// Lifecycle state of the catalog fetch.
///
/// ```text
/// Idle --initialize--> Loading
/// Loading --success--> Ready
/// Loading --failure--> Failed
/// Ready --search/filter/sort--> Ready
/// Failed --(terminal until re-initialize)--
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// The fetch is in flight.
    Loading,
    /// Records are installed and browsable.
    Ready,
    /// The fetch failed; browsing is unavailable until re-initialization.
    Failed(FetchFailure),
}

impl LoadState {
    /// Returns `true` while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` once records are installed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns the fetch failure, if the fetch failed.
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
