pub mod close_chord;
pub mod copy_feedback;
pub mod portfolio_state;
pub mod typewriter;
pub mod typing_script;

pub use close_chord::{should_close, KeyPress};
pub use copy_feedback::{CopyFeedback, COPY_ACK_MS};
pub use portfolio_state::{PortfolioState, SessionState};
pub use typewriter::{Tick, Typewriter};
pub use typing_script::{Step, TypingScript};
