//! Search-match navigation.
//!
//! The navigator owns the query string, the match count last reported by
//! the tree view, and the focus index into that match sequence. It never
//! enumerates matches itself: the tree view decides what matches and in
//! what order (depth-first document order), and the navigator only steps
//! an index through that externally defined sequence.

/// Tracks the active query and the focused position in the match set.
///
/// `focus_index` is meaningful only while `match_count > 0`; with no
/// matches it is pinned at 0 and navigation is inert.
#[derive(Debug, Clone, Default)]
pub struct SearchNavigator {
    query: String,
    focus_index: usize,
    match_count: usize,
}

impl SearchNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active query.
    ///
    /// Match recomputation happens downstream; the count and focus stay
    /// as they are until the tree view reports through
    /// [`on_matches_updated`](Self::on_matches_updated).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Accept a fresh match count from the tree view.
    ///
    /// Wraps a now-out-of-range focus back into range; with zero matches
    /// the focus pins to 0 so later navigation stays inert.
    pub fn on_matches_updated(&mut self, match_count: usize) {
        self.match_count = match_count;
        if match_count > 0 {
            self.focus_index %= match_count;
        } else {
            self.focus_index = 0;
        }
    }

    /// Step focus to the next match, wrapping past the end
    pub fn select_next(&mut self) {
        if self.match_count == 0 {
            return;
        }
        self.focus_index = (self.focus_index + 1) % self.match_count;
    }

    /// Step focus to the previous match, wrapping past the start
    pub fn select_prev(&mut self) {
        if self.match_count == 0 {
            return;
        }
        self.focus_index = (self.match_count + self.focus_index - 1) % self.match_count;
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn has_matches(&self) -> bool {
        self.match_count > 0
    }
}
