// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HISTORY_CAPACITY_DEFAULT;
use std::collections::VecDeque;

/// Bounded list of accepted lines, oldest first, with up/down navigation.
///
/// - Appending past `capacity` evicts the oldest entry.
/// - A line equal to the most recent entry isn't appended again. Only the most recent
///   entry is checked, so `A, B, A` keeps all three.
/// - Navigation clamps at both ends and never wraps around. "Past the newest entry" is
///   the fresh line the user was typing before pressing up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    /// [None] is the fresh line, past the newest entry.
    current_position: Option<usize>,
}

impl Default for History {
    fn default() -> Self { Self::new(HISTORY_CAPACITY_DEFAULT) }
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY_DEFAULT)),
            capacity,
            current_position: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_at_fresh_line(&self) -> bool { self.current_position.is_none() }

    pub fn reset_navigation(&mut self) { self.current_position = None; }

    /// Record an accepted line. Empty lines and repeats of the most recent entry are
    /// skipped. Navigation goes back to the fresh line either way.
    pub fn append(&mut self, line: &str) {
        self.reset_navigation();

        if line.is_empty() || self.entries.back().map(String::as_str) == Some(line) {
            return;
        }
        if self.capacity == 0 {
            return;
        }

        self.entries.push_back(line.to_owned());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Move one entry towards the oldest. Stays on the oldest entry once there. Returns
    /// [None] only when there is no history at all.
    pub fn navigate_prev(&mut self) -> Option<&str> {
        let last_index = self.entries.len().checked_sub(1)?;
        let index = match self.current_position {
            None => last_index,
            Some(index) => index.saturating_sub(1),
        };
        self.current_position = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Move one entry towards the newest. Moving past the newest entry returns to the
    /// fresh line, which is reported as [None].
    pub fn navigate_next(&mut self) -> Option<&str> {
        let index = self.current_position? + 1;
        if index < self.entries.len() {
            self.current_position = Some(index);
            self.entries.get(index).map(String::as_str)
        } else {
            self.current_position = None;
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.reset_navigation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history_with(capacity: usize, lines: &[&str]) -> History {
        let mut history = History::new(capacity);
        for line in lines {
            history.append(line);
        }
        history
    }

    fn entries(history: &History) -> Vec<&str> { history.entries().collect() }

    #[test]
    fn test_eviction_keeps_newest() {
        let history = history_with(3, &["A", "B", "C", "D"]);
        assert_eq!(entries(&history), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_capacity_plus_one_evicts_first() {
        let lines: Vec<String> = (0..=HISTORY_CAPACITY_DEFAULT)
            .map(|it| format!("select {it};"))
            .collect();
        let mut history = History::default();
        for line in &lines {
            history.append(line);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY_DEFAULT);
        assert!(!history.entries().any(|it| it == lines[0]));
    }

    #[test]
    fn test_consecutive_duplicate_is_skipped() {
        let history = history_with(10, &["X", "X"]);
        assert_eq!(entries(&history), vec!["X"]);
    }

    #[test]
    fn test_only_most_recent_entry_is_checked_for_duplicates() {
        let history = history_with(10, &["A", "B", "A"]);
        assert_eq!(entries(&history), vec!["A", "B", "A"]);
    }

    #[test]
    fn test_empty_line_is_skipped() {
        let history = history_with(10, &["", "A", ""]);
        assert_eq!(entries(&history), vec!["A"]);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut history = history_with(0, &["A", "B"]);
        assert!(history.is_empty());
        assert_eq!(history.navigate_prev(), None);
    }

    #[test]
    fn test_navigate_empty_history() {
        let mut history = History::new(5);
        assert_eq!(history.navigate_prev(), None);
        assert_eq!(history.navigate_next(), None);
        assert!(history.is_at_fresh_line());
    }

    #[test]
    fn test_navigate_prev_clamps_at_oldest() {
        let mut history = history_with(5, &["A", "B", "C"]);
        assert_eq!(history.navigate_prev(), Some("C"));
        assert_eq!(history.navigate_prev(), Some("B"));
        assert_eq!(history.navigate_prev(), Some("A"));
        assert_eq!(history.navigate_prev(), Some("A"));
        assert_eq!(history.navigate_prev(), Some("A"));
    }

    #[test]
    fn test_navigate_next_returns_to_fresh_line() {
        let mut history = history_with(5, &["A", "B", "C"]);
        history.navigate_prev();
        history.navigate_prev();
        assert_eq!(history.navigate_next(), Some("C"));
        assert_eq!(history.navigate_next(), None);
        assert!(history.is_at_fresh_line());
        // Stays at the fresh line, no wraparound.
        assert_eq!(history.navigate_next(), None);
        assert_eq!(history.navigate_prev(), Some("C"));
    }

    #[test]
    fn test_n_prev_then_n_next_is_fresh_line() {
        for n in 1..=6 {
            let mut history = history_with(4, &["A", "B", "C", "D"]);
            for _ in 0..n {
                history.navigate_prev();
            }
            for _ in 0..n {
                history.navigate_next();
            }
            assert!(history.is_at_fresh_line(), "n = {n}");
        }
    }

    #[test]
    fn test_navigation_is_monotonic() {
        let mut history = history_with(5, &["A", "B", "C", "D", "E"]);
        let seen: Vec<String> = (0..8)
            .filter_map(|_| history.navigate_prev().map(str::to_owned))
            .collect();
        assert_eq!(seen, vec!["E", "D", "C", "B", "A", "A", "A", "A"]);

        let seen: Vec<Option<String>> = (0..6)
            .map(|_| history.navigate_next().map(str::to_owned))
            .collect();
        assert_eq!(
            seen,
            vec![
                Some("B".to_owned()),
                Some("C".to_owned()),
                Some("D".to_owned()),
                Some("E".to_owned()),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_append_resets_navigation() {
        let mut history = history_with(5, &["A", "B"]);
        history.navigate_prev();
        assert!(!history.is_at_fresh_line());

        // Duplicate append is a no-op for entries but still resets navigation.
        history.append("B");
        assert!(history.is_at_fresh_line());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = history_with(5, &["A", "B"]);
        history.navigate_prev();
        history.clear();
        assert!(history.is_empty());
        assert!(history.is_at_fresh_line());
        assert_eq!(history.capacity(), 5);
    }
}
