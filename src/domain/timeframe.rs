// Display-granularity selector for graph panels

use serde::{Deserialize, Serialize};

/// Selects how densely a day of samples is drawn and how the
/// time axis is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    #[default]
    Day,
    Week,
    Month,
}

impl TimeFrame {
    /// Culling stride: every Nth sample is kept for display.
    pub fn stride(&self) -> usize {
        match self {
            TimeFrame::Day => 1,
            TimeFrame::Week => 6,
            TimeFrame::Month => 24,
        }
    }

    /// Whether the sample at `index` survives culling. Purely a
    /// function of the index, so repeated passes agree.
    pub fn keeps(&self, index: usize) -> bool {
        index % self.stride() == 0
    }

    /// strftime pattern for time-axis tick labels at this granularity.
    pub fn tick_format(&self) -> &'static str {
        match self {
            TimeFrame::Day => "%H:%M",
            TimeFrame::Week => "%a %H:%M",
            TimeFrame::Month => "%m-%d",
        }
    }
}
