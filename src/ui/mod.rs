//! Pure formatting. Every function here maps a payload plus the current
//! presentation context to lines of text and holds no state of its own.

pub mod failure_tree;
pub mod heading;
pub mod summary;
pub mod test_line;
pub mod theme;

use std::time::Duration;

use theme::Painter;

pub const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub colors: bool,
    /// Terminal width in columns, used for full-width banners.
    pub width: usize,
}

impl RenderOptions {
    pub fn painter(&self) -> Painter {
        Painter::new(self.colors)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colors: false,
            width: 80,
        }
    }
}

/// Human readable elapsed time for a duration in milliseconds.
pub fn format_elapsed(millis: f64) -> String {
    let millis = if millis.is_finite() {
        millis.max(0.0)
    } else {
        0.0
    };
    let elapsed = Duration::from_millis(millis.round() as u64);
    humantime::format_duration(elapsed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_rounded_to_milliseconds() {
        assert_eq!(format_elapsed(1234.4), "1s 234ms");
        assert_eq!(format_elapsed(0.0), "0s");
        assert_eq!(format_elapsed(-5.0), "0s");
        assert_eq!(format_elapsed(f64::NAN), "0s");
    }
}
