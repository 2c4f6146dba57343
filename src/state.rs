use std::time::{Duration, Instant};

use crate::system::sort::SortKey;

/// How long a status message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
    pub created: Instant,
}

/// Sort key, selected row and the transient message.
///
/// Owned by the loop driver and handed to the renderer and the input
/// controller by reference.
#[derive(Debug, Clone)]
pub struct DashboardState {
    sort_key: SortKey,
    selected: usize,
    visible_rows: usize,
    message: Option<Message>,
    message_ttl: Duration,
}

impl DashboardState {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            sort_key: SortKey::default(),
            selected: 0,
            visible_rows,
            message: None,
            message_ttl: MESSAGE_TTL,
        }
    }

    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Also moves the selection back to the top row.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.selected = 0;
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, delta: isize, process_count: usize) {
        let last = self.last_row(process_count);
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(last);
    }

    /// Pulls the selection back inside the table after it shrank.
    pub fn clamp_selection(&mut self, process_count: usize) {
        self.selected = self.selected.min(self.last_row(process_count));
    }

    fn last_row(&self, process_count: usize) -> usize {
        self.visible_rows.min(process_count).saturating_sub(1)
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.set_message_at(text, MessageLevel::Info, Instant::now());
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_message_at(text, MessageLevel::Error, Instant::now());
    }

    pub fn set_message_at(&mut self, text: impl Into<String>, level: MessageLevel, now: Instant) {
        self.message = Some(Message {
            text: text.into(),
            level,
            created: now,
        });
    }

    pub fn current_message(&mut self) -> Option<&Message> {
        self.current_message_at(Instant::now())
    }

    /// Returns the live message, dropping it once its window has passed.
    pub fn current_message_at(&mut self, now: Instant) -> Option<&Message> {
        if let Some(message) = &self.message
            && now.saturating_duration_since(message.created) >= self.message_ttl
        {
            self.message = None;
        }
        self.message.as_ref()
    }

    /// Stored message without the expiry check.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_sorted_by_cpu_at_top() {
        let state = DashboardState::new(10);
        assert_eq!(state.sort_key(), SortKey::ByCpu);
        assert_eq!(state.selected_index(), 0);
        assert!(state.message().is_none());
    }

    #[test]
    fn set_sort_key_resets_selection() {
        let mut state = DashboardState::new(10);
        state.move_selection(3, 20);
        assert_eq!(state.selected_index(), 3);
        state.set_sort_key(SortKey::ByPid);
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.sort_key(), SortKey::ByPid);
    }

    #[test]
    fn selection_stops_at_visible_rows() {
        let mut state = DashboardState::new(3);
        for _ in 0..10 {
            state.move_selection(1, 50);
        }
        assert_eq!(state.selected_index(), 2);
        state.move_selection(-5, 50);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn selection_stops_at_process_count() {
        let mut state = DashboardState::new(10);
        state.move_selection(8, 4);
        assert_eq!(state.selected_index(), 3);
    }

    #[test]
    fn empty_table_pins_selection_to_zero() {
        let mut state = DashboardState::new(10);
        state.move_selection(1, 0);
        assert_eq!(state.selected_index(), 0);
        state.move_selection(-1, 0);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn clamp_follows_shrinking_table() {
        let mut state = DashboardState::new(10);
        state.move_selection(7, 10);
        state.clamp_selection(5);
        assert_eq!(state.selected_index(), 4);
        state.clamp_selection(0);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn message_expires_after_window() {
        let mut state = DashboardState::new(10);
        let t = Instant::now();
        state.set_message_at("hello", MessageLevel::Info, t);

        let visible = state.current_message_at(t + Duration::from_secs(2));
        assert_eq!(visible.map(|m| m.text.as_str()), Some("hello"));

        assert!(state.current_message_at(t + Duration::from_secs(4)).is_none());
        assert!(state.message().is_none());
    }

    #[test]
    fn message_boundary_is_expired() {
        let mut state = DashboardState::new(10);
        let t = Instant::now();
        state.set_message_at("edge", MessageLevel::Error, t);
        assert!(state.current_message_at(t + MESSAGE_TTL).is_none());
    }

    #[test]
    fn newer_message_replaces_older() {
        let mut state = DashboardState::new(10);
        let t = Instant::now();
        state.set_message_at("first", MessageLevel::Info, t);
        state.set_message_at("second", MessageLevel::Error, t + Duration::from_secs(2));
        let current = state
            .current_message_at(t + Duration::from_secs(4))
            .cloned();
        assert_eq!(current.map(|m| (m.text, m.level)), Some(("second".to_string(), MessageLevel::Error)));
    }

    proptest! {
        #[test]
        fn selection_never_leaves_range(
            rows in 1usize..40,
            count in 0usize..80,
            moves in prop::collection::vec(-5isize..=5, 0..50),
        ) {
            let mut state = DashboardState::new(rows);
            for delta in moves {
                state.move_selection(delta, count);
                let last = rows.min(count).saturating_sub(1);
                prop_assert!(state.selected_index() <= last);
            }
        }
    }
}
