//! Browse session state
//!
//! A [`Session`] owns the dataset plus the transient browse state (search
//! term, tag filter, current page) and derives every view from current inputs
//! on demand, so nothing stale is ever handed to the presentation layer. The
//! invariants live here: any filter change resets the page to 1, and page
//! selection is clamped to the valid range.

use crate::dataset::Dataset;
use crate::page::{self, Page, PageMark};
use crate::pick;
use crate::query::{self, FilterState, TagFilter};
use crate::Scenario;

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView<'a> {
    /// The visible slice of the filtered sequence
    pub scenarios: Vec<&'a Scenario>,
    /// Tag filter choices derived from the dataset
    pub vocabulary: Vec<String>,
    /// Size of the whole filtered sequence, across all pages
    pub total_matches: usize,
    /// Current page number (1-based)
    pub current_page: usize,
    /// Total page count for the filtered sequence
    pub total_pages: usize,
    /// Page-index row for the pagination footer
    pub marks: Vec<PageMark>,
    /// Filter used to derive this view, for match highlighting
    pub filter: FilterState,
}

/// One interactive browse session over a read-only dataset
///
/// The dataset never changes after construction; filter and page state are
/// plain values fed to the pure engine functions on each derivation.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    filter: FilterState,
    page_size: usize,
    current_page: usize,
}

impl Session {
    /// Start a session with the default page size
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self::with_page_size(dataset, page::DEFAULT_PAGE_SIZE)
    }

    /// Start a session with a custom page size
    #[must_use]
    pub fn with_page_size(dataset: Dataset, page_size: usize) -> Self {
        Self {
            dataset,
            filter: FilterState::default(),
            page_size,
            current_page: 1,
        }
    }

    /// The underlying dataset
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active filter
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current page number
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Set the search term, resetting to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.current_page = 1;
    }

    /// Set the tag filter, resetting to page 1
    pub fn set_tag_filter(&mut self, tag: TagFilter) {
        self.filter.tag = tag;
        self.current_page = 1;
    }

    /// Replace the whole filter, resetting to page 1
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.current_page = 1;
    }

    /// Jump to a page, clamped to `[1, max(total_pages, 1)]`
    pub fn set_page(&mut self, page_number: usize) {
        let total = self.total_pages();
        self.current_page = page_number.clamp(1, total.max(1));
    }

    /// Move to the next page, if any
    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    /// Move to the previous page, if any
    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// The filtered sequence for the current filter state
    #[must_use]
    pub fn filtered(&self) -> Vec<&Scenario> {
        query::query(&self.dataset, &self.filter)
    }

    /// Total pages for the current filter state
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.filtered().len().div_ceil(self.page_size)
        }
    }

    /// Derive the complete view for the current state
    ///
    /// Recomputed from current inputs on every call; vocabulary, filtered
    /// sequence, and visible slice are always mutually consistent.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        let filtered = self.filtered();
        let Page {
            items,
            total_pages,
            number,
        } = page::paginate(&filtered, self.page_size, self.current_page);

        SessionView {
            scenarios: items.to_vec(),
            vocabulary: self.dataset.vocabulary(),
            total_matches: filtered.len(),
            current_page: number,
            total_pages,
            marks: page::page_marks(number, total_pages),
            filter: self.filter.clone(),
        }
    }

    /// Draw a uniformly random scenario from the filtered pool, falling back
    /// to the full dataset when the pool is empty
    ///
    /// `None` only when the dataset itself is empty.
    #[must_use]
    pub fn pick_random(&self) -> Option<&Scenario> {
        pick::pick(&self.filtered(), self.dataset.scenarios())
    }

    /// Seedable variant of [`Session::pick_random`]
    pub fn pick_random_with<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<&Scenario> {
        pick::pick_from(&self.filtered(), self.dataset.scenarios(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::KeywordTable;

    fn session_with(count: u64, page_size: usize) -> Session {
        let table = KeywordTable::builtin();
        let raw: Vec<Scenario> = (1..=count)
            .map(|id| {
                Scenario::new(
                    id,
                    format!("Scenario {id}"),
                    "A server was compromised".to_string(),
                    vec![],
                )
            })
            .collect();
        Session::with_page_size(Dataset::normalize(raw, &table), page_size)
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut session = session_with(10, 2);
        session.set_page(4);
        assert_eq!(session.current_page(), 4);

        session.set_search_term("server");
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_tag_change_resets_page() {
        let mut session = session_with(10, 2);
        session.set_page(3);

        session.set_tag_filter(TagFilter::Tag("breach".to_string()));
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_set_page_clamps_to_valid_range() {
        let mut session = session_with(10, 2);

        session.set_page(99);
        assert_eq!(session.current_page(), 5);

        session.set_page(0);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_set_page_on_empty_filtered_set_stays_at_one() {
        let mut session = session_with(10, 2);
        session.set_search_term("no such phrase anywhere");

        session.set_page(3);
        assert_eq!(session.current_page(), 1);
        assert!(session.view().scenarios.is_empty());
    }

    #[test]
    fn test_next_and_previous_page_stop_at_bounds() {
        let mut session = session_with(5, 2);

        session.previous_page();
        assert_eq!(session.current_page(), 1);

        session.next_page();
        session.next_page();
        session.next_page();
        assert_eq!(session.current_page(), 3);
    }

    #[test]
    fn test_view_is_consistent_with_state() {
        let mut session = session_with(7, 3);
        session.set_page(3);
        let view = session.view();

        assert_eq!(view.total_matches, 7);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.scenarios.len(), 1);
        assert_eq!(view.scenarios[0].id, 7);
    }

    #[test]
    fn test_concatenated_pages_reconstruct_filtered_sequence() {
        let mut session = session_with(65, 30);
        let filtered_ids: Vec<u64> = session.filtered().iter().map(|s| s.id).collect();

        let mut reassembled = Vec::new();
        for number in 1..=session.total_pages() {
            session.set_page(number);
            reassembled.extend(session.view().scenarios.iter().map(|s| s.id));
        }
        assert_eq!(reassembled, filtered_ids);
    }

    #[test]
    fn test_random_pick_respects_filter_pool() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let table = KeywordTable::builtin();
        let dataset = Dataset::normalize(
            vec![
                Scenario::new(
                    1,
                    "Ransomware at Acme".to_string(),
                    "A wiper hit the finance server".to_string(),
                    vec![],
                ),
                Scenario::new(
                    2,
                    "Vendor leak".to_string(),
                    "third-party exposed records".to_string(),
                    vec![],
                ),
            ],
            &table,
        );
        let mut session = Session::new(dataset);
        session.set_tag_filter(TagFilter::Tag("vendor".to_string()));

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(session.pick_random_with(&mut rng).map(|s| s.id), Some(2));
        }
    }

    #[test]
    fn test_random_pick_falls_back_to_full_dataset() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut session = session_with(4, 2);
        session.set_search_term("matches nothing at all");
        assert!(session.filtered().is_empty());

        let mut rng = StdRng::seed_from_u64(9);
        let picked = session.pick_random_with(&mut rng);
        assert!(picked.is_some());
    }

    #[test]
    fn test_random_pick_none_on_empty_dataset() {
        let table = KeywordTable::builtin();
        let session = Session::new(Dataset::normalize(vec![], &table));

        assert!(session.pick_random().is_none());
    }
}
