pub mod closed_screen;
pub mod copy_button;
pub mod terminal;
pub mod terminal_session;
pub mod typed_lines;

pub use closed_screen::ClosedScreen;
pub use copy_button::CopyButton;
pub use terminal::Terminal;
pub use terminal_session::TerminalSession;
pub use typed_lines::TypedLines;
