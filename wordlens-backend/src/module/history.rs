//! Append-only history of image result-sets with a movable cursor for
//! back/forward navigation.

use wordlens_common::ImageResultSet;

/// Past search results, oldest first. The sequence is never truncated or
/// rewritten; `record` always appends at the tail and the cursor jumps to
/// the new entry, whatever it pointed at before.
#[derive(Debug, Default)]
pub struct ImageHistory {
    sets: Vec<ImageResultSet>,
    /// Index of the currently displayed set; `None` until the first record
    cursor: Option<usize>,
}

impl ImageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result set and move the cursor to it
    pub fn record(&mut self, set: ImageResultSet) {
        self.sets.push(set);
        self.cursor = Some(self.sets.len() - 1);
    }

    /// Step backward; `None` (cursor unchanged) when already at the oldest set
    pub fn back(&mut self) -> Option<&ImageResultSet> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.sets.get(cursor - 1)
    }

    /// Step forward; `None` (cursor unchanged) when already at the newest set
    pub fn forward(&mut self) -> Option<&ImageResultSet> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.sets.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.sets.get(cursor + 1)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    #[cfg(test)]
    fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlens_common::ImageResult;

    fn set(tag: &str) -> ImageResultSet {
        vec![ImageResult {
            thumb: format!("https://images.example/{tag}-medium.jpg"),
            full: format!("https://images.example/{tag}.jpg"),
            alt: tag.to_string(),
            photographer: "Test Photographer".to_string(),
            profile: "https://images.example/photographer".to_string(),
        }]
    }

    #[test]
    fn test_record_moves_cursor_to_tail() {
        let mut history = ImageHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);

        for (i, tag) in ["a", "b", "c"].iter().enumerate() {
            history.record(set(tag));
            assert_eq!(history.cursor(), Some(i));
            assert_eq!(history.len(), i + 1);
        }
    }

    #[test]
    fn test_back_then_forward_restores_position() {
        let mut history = ImageHistory::new();
        history.record(set("a"));
        history.record(set("b"));

        let before = history.cursor();
        let back = history.back().cloned();
        assert_eq!(back, Some(set("a")));

        let forward = history.forward().cloned();
        assert_eq!(forward, Some(set("b")));
        assert_eq!(history.cursor(), before);
    }

    #[test]
    fn test_navigation_noops_at_boundaries() {
        let mut history = ImageHistory::new();

        // Empty history: both directions are no-ops
        assert!(history.back().is_none());
        assert!(history.forward().is_none());
        assert_eq!(history.cursor(), None);

        history.record(set("a"));

        assert!(history.back().is_none());
        assert_eq!(history.cursor(), Some(0));
        assert!(history.forward().is_none());
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_record_after_back_appends_without_truncating() {
        let mut history = ImageHistory::new();
        history.record(set("a"));
        history.record(set("b"));
        history.back();

        // Recording while not at the head discards nothing
        history.record(set("c"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));

        // Walking back still reaches both older sets
        assert_eq!(history.back().cloned(), Some(set("b")));
        assert_eq!(history.back().cloned(), Some(set("a")));
    }
}
