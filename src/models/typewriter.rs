use crate::models::{Step, TypingScript};

/// What the driver should do after a call to [`Typewriter::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Text was committed; advance again after `delay_ms`
    Typed { delay_ms: u32 },
    /// A pause marker was consumed; advance again after `delay_ms`
    Paused { delay_ms: u32 },
    /// Every step has been processed. Returned exactly once.
    Complete,
    /// Nothing left to do
    Idle,
}

impl Tick {
    /// Delay before the next advance, if another one is needed.
    pub const fn next_delay(self) -> Option<u32> {
        match self {
            Self::Typed { delay_ms } | Self::Paused { delay_ms } => Some(delay_ms),
            Self::Complete | Self::Idle => None,
        }
    }
}

/// Single-pass, non-looping typing state machine.
///
/// Holds no timers itself; the caller decides when to advance.
#[derive(Debug, Clone)]
pub struct Typewriter {
    steps: Vec<Step>,
    next: usize,
    rendered: String,
    type_speed_ms: u32,
    completed: bool,
}

impl Typewriter {
    pub fn new(script: TypingScript, type_speed_ms: u32) -> Self {
        Self {
            steps: script.into_steps(),
            next: 0,
            rendered: String::new(),
            type_speed_ms,
            completed: false,
        }
    }

    /// Process the next step.
    pub fn advance(&mut self) -> Tick {
        if let Some(step) = self.steps.get(self.next) {
            self.next += 1;
            match step {
                Step::Type(c) => {
                    self.rendered.push(*c);
                    Tick::Typed {
                        delay_ms: self.type_speed_ms,
                    }
                }
                Step::Chunk(chunk) => {
                    self.rendered.push_str(chunk);
                    Tick::Typed {
                        delay_ms: self.type_speed_ms,
                    }
                }
                Step::Pause(delay_ms) => Tick::Paused {
                    delay_ms: *delay_ms,
                },
            }
        } else if self.completed {
            Tick::Idle
        } else {
            self.completed = true;
            Tick::Complete
        }
    }

    /// Text committed so far.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    #[cfg(test)]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_complete_follows_every_step(
            lines in prop::collection::vec("[a-z .^0-9]{0,30}", 1..5),
            speed in 1u32..200
        ) {
            let script = TypingScript::parse(&lines);
            let expected = script.plain_text();
            let step_count = script.steps().len();
            let mut tw = Typewriter::new(script, speed);

            let mut completions = 0;
            let mut advances = 0;
            for _ in 0..=step_count + 3 {
                match tw.advance() {
                    Tick::Complete => {
                        completions += 1;
                        prop_assert_eq!(tw.rendered(), expected.as_str());
                    }
                    Tick::Idle => {}
                    Tick::Typed { delay_ms } => {
                        prop_assert_eq!(delay_ms, speed);
                        prop_assert_eq!(completions, 0);
                        advances += 1;
                    }
                    Tick::Paused { .. } => {
                        prop_assert_eq!(completions, 0);
                        advances += 1;
                    }
                }
            }

            prop_assert_eq!(completions, 1);
            prop_assert_eq!(advances, step_count);
        }
    }
}
