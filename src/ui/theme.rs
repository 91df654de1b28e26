use std::fmt::Display;

use crossterm::style::{Color, Stylize};

// Catppuccin Mocha palette
pub const BASE: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 46,
};
pub const OVERLAY0: Color = Color::Rgb {
    r: 108,
    g: 112,
    b: 134,
};
pub const RED: Color = Color::Rgb {
    r: 243,
    g: 139,
    b: 168,
};
pub const GREEN: Color = Color::Rgb {
    r: 166,
    g: 227,
    b: 161,
};
pub const YELLOW: Color = Color::Rgb {
    r: 249,
    g: 226,
    b: 175,
};
pub const BLUE: Color = Color::Rgb {
    r: 137,
    g: 180,
    b: 250,
};
pub const TEAL: Color = Color::Rgb {
    r: 148,
    g: 226,
    b: 213,
};
pub const MAUVE: Color = Color::Rgb {
    r: 203,
    g: 166,
    b: 247,
};
pub const PEACH: Color = Color::Rgb {
    r: 250,
    g: 179,
    b: 135,
};

/// Applies palette colors, or returns plain text when colors are off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn fg(&self, text: impl Display, color: Color) -> String {
        if self.enabled {
            text.to_string().with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: impl Display) -> String {
        if self.enabled {
            text.to_string().dim().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: impl Display) -> String {
        if self.enabled {
            text.to_string().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dark text on a colored background.
    pub fn badge(&self, text: impl Display, background: Color) -> String {
        if self.enabled {
            let text = text.to_string();
            text.with(BASE).on(background).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
