/// The parts of a `keydown` event that matter for the close chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress<'_> {
    /// Ctrl+C, or Cmd+C on macOS.
    pub fn is_close_chord(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "c"
    }
}

/// Decide whether a key press should close the terminal.
///
/// A non-empty selection leaves the chord to the browser so native copy keeps working.
pub fn should_close(press: KeyPress<'_>, selection: &str, closed: bool) -> bool {
    !closed && press.is_close_chord() && selection.is_empty()
}
