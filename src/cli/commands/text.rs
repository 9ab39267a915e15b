//! Text command

use moulberry_utils::output::{OutputMode, TextResult};
use moulberry_utils::text::capitalize_fully;

/// Print `text` with every word capitalized
pub fn capitalize(text: &str, mode: OutputMode) {
    TextResult {
        text: capitalize_fully(text),
    }
    .render(mode);
}
