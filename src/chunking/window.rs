// WHY: sentence-window output mode; a contiguous slice of N sentences from either end

use serde::{Deserialize, Serialize};

/// Which end of the text the window is counted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Window selection parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Maximum number of sentences returned
    pub count: usize,
    pub direction: Direction,
    /// Sentences skipped at the counted end before the window starts
    pub offset: usize,
}

impl WindowSpec {
    /// First `count` sentences
    pub fn forward(count: usize) -> Self {
        Self {
            count,
            direction: Direction::Forward,
            offset: 0,
        }
    }

    /// Last `count` sentences
    pub fn reverse(count: usize) -> Self {
        Self {
            count,
            direction: Direction::Reverse,
            offset: 0,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Select the window, always returned in document order
/// Running past either end just yields fewer sentences
pub fn select_window<'a>(sentences: &'a [String], spec: &WindowSpec) -> Vec<&'a str> {
    match spec.direction {
        Direction::Forward => sentences
            .iter()
            .skip(spec.offset)
            .take(spec.count)
            .map(String::as_str)
            .collect(),
        Direction::Reverse => {
            let mut window: Vec<&str> = sentences
                .iter()
                .rev()
                .skip(spec.offset)
                .take(spec.count)
                .map(String::as_str)
                .collect();
            window.reverse();
            window
        }
    }
}

/// Join a window with single spaces
pub fn join_window(window: &[&str]) -> String {
    window.join(" ")
}
