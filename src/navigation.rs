//! Back-stack of visited screens.
//!
//! The last entry is the current screen. Forward navigation and initial
//! loads push, back pops and peeks, deep links clear and push.

/// Ordered history of screen ids for one session.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    stack: Vec<String>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `screen_id` the current screen.
    pub fn push(&mut self, screen_id: &str) {
        self.stack.push(screen_id.to_string());
        tracing::info!(
            screen = %screen_id,
            depth = self.stack.len(),
            "Pushed screen onto back-stack"
        );
    }

    /// Drop the current screen and return the one now on top.
    ///
    /// Returns `None` and leaves the stack untouched when there is nothing
    /// to go back to.
    pub fn pop(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            tracing::debug!(depth = self.stack.len(), "Back ignored, nothing to pop");
            return None;
        }
        let removed = self.stack.pop();
        tracing::info!(
            removed = ?removed,
            depth = self.stack.len(),
            "Popped screen from back-stack"
        );
        self.peek()
    }

    /// Current screen, if any screen has loaded.
    pub fn peek(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Clear the history and start over from `screen_id`.
    pub fn reset_to(&mut self, screen_id: &str) {
        let dropped = self.stack.len();
        self.stack.clear();
        self.stack.push(screen_id.to_string());
        tracing::info!(screen = %screen_id, dropped, "Reset back-stack");
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether `screen_id` is anywhere on the stack.
    pub fn contains(&self, screen_id: &str) -> bool {
        self.stack.iter().any(|entry| entry == screen_id)
    }

    /// Entries from oldest to current.
    pub fn entries(&self) -> &[String] {
        &self.stack
    }
}
