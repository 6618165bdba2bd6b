//! Colors for the layout panel.

use crossterm::style::Color as TermColor;
use ratatui::style::Color;

use super::symbols::SlotState;

/// Slot colors, mainly visible in ASCII mode where glyphs carry no color
#[derive(Debug, Clone, Copy)]
pub struct SlotColors {
    pub occupied: Color,
    pub empty: Color,
    pub recommended: Color,
}

impl SlotColors {
    pub fn get(&self, state: SlotState) -> Color {
        match state {
            SlotState::Occupied => self.occupied,
            SlotState::Empty => self.empty,
            SlotState::Recommended => self.recommended,
        }
    }
}

pub const SLOT_COLORS: SlotColors = SlotColors {
    occupied: Color::Rgb(255, 80, 80),     // Red - taken
    empty: Color::Rgb(150, 150, 150),      // Gray - free
    recommended: Color::Rgb(0, 200, 100),  // Green - go here
};

pub const BORDER_COLOR: Color = Color::Rgb(100, 150, 255);
pub const LEGEND_COLOR: Color = Color::Rgb(100, 100, 100);

/// Map a ratatui color onto crossterm for direct stdout printing.
///
/// Returns `None` for `Reset`, meaning the terminal default.
pub fn to_terminal_color(color: Color) -> Option<TermColor> {
    let mapped = match color {
        Color::Reset => return None,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    };
    Some(mapped)
}
