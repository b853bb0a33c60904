/*
[INPUT]:  Video identifiers toggled by the caller
[OUTPUT]: Current selection membership and count
[POS]:    Session state - selected search results
[UPDATE]: When selection rules change
*/

use std::collections::HashSet;

/// Set of video ids selected within one session.
///
/// Membership is not validated against search results; callers only offer
/// toggles for ids they currently display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for a video id; returns whether it is now selected
    pub fn toggle(&mut self, video_id: &str) -> bool {
        if self.ids.remove(video_id) {
            false
        } else {
            self.ids.insert(video_id.to_string());
            true
        }
    }

    /// Check membership
    pub fn contains(&self, video_id: &str) -> bool {
        self.ids.contains(video_id)
    }

    /// Number of selected ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every selected id
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterate over the selected ids (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
