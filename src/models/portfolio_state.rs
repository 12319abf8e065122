use leptos::prelude::*;

/// Page-level reactive state (Leptos signals).
/// Owned by `App` and shared with child components via `use_context()`.
#[derive(Clone, Copy)]
pub struct PortfolioState {
    /// True once the visitor dismissed the terminal with the close chord
    pub terminal_closed: RwSignal<bool>,
}

impl PortfolioState {
    /// Create a new page state with the terminal open
    pub fn new() -> Self {
        Self {
            terminal_closed: RwSignal::new(false),
        }
    }

    /// Dismiss the terminal view
    pub fn close(&self) {
        self.terminal_closed.set(true);
    }

    /// Show the terminal again, remounting a fresh session
    pub fn reopen(&self) {
        self.terminal_closed.set(false);
    }

    pub fn is_closed(&self) -> bool {
        self.terminal_closed.get()
    }

    /// Non-tracking variant for event handlers
    pub fn is_closed_untracked(&self) -> bool {
        self.terminal_closed.get_untracked()
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one mounted terminal session. Dropped with the session,
/// so reopening starts from scratch.
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Has the intro animation finished?
    pub typing_complete: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            typing_complete: RwSignal::new(false),
        }
    }

    /// Flip the reveal flag. Returns `false` if it was already set.
    pub fn mark_typing_complete(&self) -> bool {
        if self.typing_complete.get_untracked() {
            return false;
        }
        self.typing_complete.set(true);
        true
    }

    pub fn is_typing_complete(&self) -> bool {
        self.typing_complete.get()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
