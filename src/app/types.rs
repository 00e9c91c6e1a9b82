use std::time::{Duration, Instant};

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Viewer,
    Help,
}

/// The four buttons of the control bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Back,
    Next,
    End,
}

impl Control {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "|< Start",
            Control::Back => "< Back",
            Control::Next => "Next >",
            Control::End => "End >|",
        }
    }
}

/// Board rendering switches that can be toggled at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    pub show_notation: bool,
    pub unicode_pieces: bool,
    pub flipped: bool,
}

impl From<crate::config::BoardConfig> for BoardOptions {
    fn from(config: crate::config::BoardConfig) -> Self {
        Self {
            show_notation: config.show_notation,
            unicode_pieces: config.unicode_pieces,
            flipped: config.flipped,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}
