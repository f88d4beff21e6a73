//! Display formatting for layout rectangles and statistics.
//!
//! Tables, exports and search output all render numbers the same way:
//!
//! - percentages as whole numbers: `67%`
//! - distances with two decimals: `12.50 km`
//! - ratios as `attended/total (pct)`: `3/4 (75%)`
//! - pixel offsets with one decimal: `90.0`
//!
//! ## Examples
//!
//! ```rust
//! use poolside::libs::formatter::{format_km, format_percentage};
//!
//! assert_eq!(format_percentage(67), "67%");
//! assert_eq!(format_km(12.5), "12.50 km");
//! ```

use crate::libs::attendance::Ratio;
use crate::libs::highlight::Segment;
use crate::libs::layout::Rect;
use crate::libs::session::Session;
use serde::{Deserialize, Serialize};

/// Highlight marker wrapped around matched text in plain-text output.
pub const HIGHLIGHT_OPEN: &str = "\x1b[1;33m";
pub const HIGHLIGHT_CLOSE: &str = "\x1b[0m";

pub fn format_percentage(percentage: u32) -> String {
    format!("{}%", percentage)
}

pub fn format_km(km: f64) -> String {
    format!("{:.2} km", km)
}

pub fn format_ratio(ratio: &Ratio) -> String {
    format!("{}/{} ({})", ratio.attended, ratio.total, format_percentage(ratio.percentage))
}

pub fn format_px(px: f64) -> String {
    format!("{:.1}", px)
}

/// Joins highlight segments, wrapping matches in `open`/`close`.
pub fn format_segments(segments: &[Segment], open: &str, close: &str) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.highlighted {
                format!("{}{}{}", open, segment.text, close)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

/// A placed session with every value pre-rendered, for tables and exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedPlacement {
    pub session_id: i64,
    pub date: String,
    pub time: String,
    pub squad: String,
    pub focus: String,
    pub top: String,
    pub height: String,
    pub left: String,
    pub width: String,
}

impl FormattedPlacement {
    pub fn new(session: &Session, squad: &str, rect: &Rect) -> Self {
        Self {
            session_id: session.id,
            date: session.date.format("%Y-%m-%d").to_string(),
            time: format!("{}-{}", session.start_time, session.end_time),
            squad: squad.to_string(),
            focus: session.focus.label().to_string(),
            top: format_px(rect.top),
            height: format_px(rect.height),
            left: format!("{:.1}%", rect.left),
            width: format!("{:.1}%", rect.width),
        }
    }
}
