/// One unit of the intro animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Append a single character
    Type(char),
    /// Append a run of text in one go (backtick-quoted in the source)
    Chunk(String),
    /// Wait before continuing, emits nothing
    Pause(u32),
}

/// Parsed intro script.
///
/// Source lines are joined with newlines. Inside a line, `^<digits>` is a
/// pause in milliseconds and `` `text` `` is typed as a single chunk. A caret
/// without digits or an unterminated backtick is kept as a literal character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingScript {
    steps: Vec<Step>,
}

impl TypingScript {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            steps: parse_steps(&joined),
        }
    }

    #[cfg(test)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// The text visible once the whole script has been typed.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for step in &self.steps {
            match step {
                Step::Type(c) => text.push(*c),
                Step::Chunk(chunk) => text.push_str(chunk),
                Step::Pause(_) => {}
            }
        }
        text
    }
}

fn parse_steps(source: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut rest = source;

    while let Some(c) = rest.chars().next() {
        match c {
            '^' => {
                let digits = rest[1..]
                    .find(|ch: char| !ch.is_ascii_digit())
                    .unwrap_or(rest.len() - 1);
                if digits > 0 {
                    let pause_ms = rest[1..=digits].parse().unwrap_or(u32::MAX);
                    steps.push(Step::Pause(pause_ms));
                    rest = &rest[1 + digits..];
                    continue;
                }
            }
            '`' => {
                if let Some(end) = rest[1..].find('`') {
                    let chunk = &rest[1..=end];
                    if !chunk.is_empty() {
                        steps.push(Step::Chunk(chunk.to_string()));
                    }
                    rest = &rest[end + 2..];
                    continue;
                }
            }
            _ => {}
        }

        steps.push(Step::Type(c));
        rest = &rest[c.len_utf8()..];
    }

    steps
}
