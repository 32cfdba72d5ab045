//! Catalog browser state machine

use url::Url;

use super::LoadState;
use super::SelectionChange;
use super::SelectionSet;
use crate::client::SearchProvider;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::FetchFailure;
use crate::error::SelectionError;
use crate::handoff::HandoffEntry;
use crate::handoff::HandoffStore;
use crate::handoff::SELECTED_RECORDS_KEY;
use crate::model::SatelliteRecord;
use crate::nav::Navigator;
use crate::query::ActivePredicate;
use crate::query::FilterCriteria;
use crate::query::SearchCriteria;
use crate::query::SortCriterion;

/// Relative path of the view the selection is forwarded to.
pub const SELECTED_VIEW_PATH: &str = "/selectedData";

/// State machine behind a browsable satellite-catalog page.
///
/// Owns the full record set (populated once per lifetime by
/// [`initialize`](Self::initialize)), the displayed subset derived from it,
/// the active predicate and effective sort, and the bounded selection.
///
/// Search and filter are mutually overriding: each re-derives the displayed
/// subset from the full set and replaces whatever predicate was active
/// before. The sort criterion is effective: it is re-applied after every
/// derivation, not just when it changes. Selection is keyed by record
/// identity and survives any re-derivation.
///
/// All operations other than `initialize` and `proceed` are synchronous and
/// run to completion, so no two state mutations ever interleave.
///
/// # Example
///
/// ```ignore
/// use satcat_lib::browse::CatalogBrowser;
/// use satcat_lib::query::SearchCriteria;
///
/// let mut browser = CatalogBrowser::new();
/// browser.initialize(&client).await;
///
/// browser.apply_search(SearchCriteria::new().with_name("star"));
/// for record in browser.displayed() {
///     println!("{}", record.name);
/// }
/// ```
#[derive(Debug, Default)]
pub struct CatalogBrowser {
    records: Vec<SatelliteRecord>,
    displayed: Vec<SatelliteRecord>,
    predicate: ActivePredicate,
    sort: SortCriterion,
    selection: SelectionSet,
    state: LoadState,
}

impl CatalogBrowser {
    /// Creates an idle browser with nothing fetched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Performs the one fetch of the page lifetime.
    ///
    /// Resets all state, enters `Loading`, and asks the provider for the
    /// catalog. On a success discriminant the records are sorted by the
    /// default criterion and installed as both the full set and the
    /// displayed subset. On a failure discriminant, or a provider error,
    /// the failure's status and message are captured and the browser stays
    /// empty in the terminal `Failed` state. No retry is attempted; calling
    /// `initialize` again is the only way out of `Failed`.
    pub async fn initialize(&mut self, provider: &dyn SearchProvider) {
        self.records.clear();
        self.displayed.clear();
        self.predicate = ActivePredicate::None;
        self.sort = SortCriterion::default();
        self.selection.clear();
        self.state = LoadState::Loading;

        match provider.search().await {
            Ok(response) if response.is_success() => {
                let mut records = response.into_records();
                self.sort.sort(&mut records);
                log::debug!("catalog fetch returned {} records", records.len());
                self.displayed = records.clone();
                self.records = records;
                self.state = LoadState::Ready;
            }
            Ok(response) => {
                let failure = FetchFailure::from_response(&response);
                log::warn!("catalog fetch rejected: {failure}");
                self.state = LoadState::Failed(failure);
            }
            Err(err) => {
                let failure = FetchFailure::from(&err);
                log::warn!("catalog fetch failed: {failure}");
                self.state = LoadState::Failed(failure);
            }
        }
    }

    /// Applies a text search, replacing any active filter.
    ///
    /// The search runs against the full record set, not the currently
    /// displayed subset. Selection is untouched.
    pub fn apply_search(&mut self, criteria: SearchCriteria) {
        self.predicate = ActivePredicate::Search(criteria);
        self.rederive();
    }

    /// Applies a multi-value filter, replacing any active search.
    ///
    /// A no-op when both dimensions are empty; the triggering control is
    /// expected to be disabled in that case. Otherwise the filter runs
    /// against the full record set. Selection is untouched.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        if criteria.is_empty() {
            return;
        }
        self.predicate = ActivePredicate::Filter(criteria);
        self.rederive();
    }

    /// Changes the effective sort and re-sorts the displayed subset.
    ///
    /// The criterion stays effective for every later derivation, so a
    /// subsequent search or filter keeps this ordering.
    pub fn change_sort(&mut self, criterion: SortCriterion) {
        self.sort = criterion;
        self.sort.sort(&mut self.displayed);
    }

    fn rederive(&mut self) {
        self.displayed = self.predicate.apply(&self.records);
        self.sort.sort(&mut self.displayed);
        log::debug!(
            "derivation kept {} of {} records",
            self.displayed.len(),
            self.records.len()
        );
    }

    /// Toggles a record in or out of the selection.
    ///
    /// `position` must be the record's position in the CURRENT displayed
    /// subset; it is kept only as a rendering anchor, while record identity
    /// is the selection key. Selection persists across search, filter, and
    /// sort operations.
    pub fn toggle_selection(
        &mut self,
        record: &SatelliteRecord,
        position: usize,
    ) -> Result<SelectionChange, SelectionError> {
        self.selection.toggle(record, position)
    }

    /// Positions of the selected records within the current displayed
    /// subset, recomputed on every call.
    ///
    /// This is what the rendering collaborator should highlight; selected
    /// records currently filtered out of view are simply absent.
    pub fn selected_positions(&self) -> Vec<usize> {
        self.displayed
            .iter()
            .enumerate()
            .filter(|(_, record)| self.selection.contains(&record.id))
            .map(|(position, _)| position)
            .collect()
    }

    /// Serializes the selection into the handoff store, then opens the
    /// follow-up view.
    ///
    /// The store write only happens for a non-empty selection, under
    /// [`SELECTED_RECORDS_KEY`]. The view at [`SELECTED_VIEW_PATH`] (joined
    /// onto `origin`) is opened regardless of whether the selection is
    /// empty or the write succeeded; a write failure is logged and reported
    /// to the caller only after the navigation attempt.
    pub async fn proceed(
        &self,
        store: &dyn HandoffStore,
        navigator: &dyn Navigator,
        origin: &Url,
    ) -> Result<(), Error> {
        let mut stored: Result<(), Error> = Ok(());

        if !self.selection.is_empty() {
            match HandoffEntry::from_records(self.selection.records()) {
                Ok(entry) => {
                    if let Err(err) = store.set(SELECTED_RECORDS_KEY, entry).await {
                        log::warn!("failed to persist selection before handoff: {err}");
                        stored = Err(err.into());
                    }
                }
                Err(err) => {
                    log::warn!("failed to serialize selection for handoff: {err}");
                    stored = Err(err.into());
                }
            }
        }

        let target = origin
            .join(SELECTED_VIEW_PATH)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        navigator.open(target.as_str()).map_err(Error::Nav)?;

        stored
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the full record set.
    pub fn records(&self) -> &[SatelliteRecord] {
        &self.records
    }

    /// Returns the currently displayed subset.
    pub fn displayed(&self) -> &[SatelliteRecord] {
        &self.displayed
    }

    /// Returns the size of the displayed subset.
    pub fn shown_count(&self) -> usize {
        self.displayed.len()
    }

    /// Returns the predicate currently deriving the displayed subset.
    pub fn active_predicate(&self) -> &ActivePredicate {
        &self.predicate
    }

    /// Returns the effective sort criterion.
    pub fn sort_criterion(&self) -> SortCriterion {
        self.sort
    }

    /// Returns the selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the inline selection error, if the most recent rejected
    /// toggle has not been followed by a successful one.
    pub fn selection_error(&self) -> Option<&SelectionError> {
        self.selection.error()
    }

    /// Returns the load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns `true` while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns the fetch failure, if the fetch failed.
    pub fn fetch_failure(&self) -> Option<&FetchFailure> {
        self.state.failure()
    }
}
