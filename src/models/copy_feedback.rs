/// How long the "copied" acknowledgment stays visible.
pub const COPY_ACK_MS: u32 = 2000;

/// Visual state of the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Ready,
    Copied,
}

impl CopyFeedback {
    pub const fn from_copied(copied: bool) -> Self {
        if copied {
            Self::Copied
        } else {
            Self::Ready
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ready => "📋",
            Self::Copied => "✓",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Copy SSH Command",
            Self::Copied => "Copied!",
        }
    }

    /// Get the CSS class for styling the button
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Ready => "copy-button",
            Self::Copied => "copy-button copied",
        }
    }
}
