//! Slot glyphs with Unicode and ASCII fallbacks
//!
//! Modern terminals get the emoji glyphs; limited environments (or `--ascii`)
//! get single ASCII characters that keep the row readable.

/// What a single slot in the layout row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Occupied,
    Empty,
    Recommended,
}

/// Symbol with Unicode and ASCII fallback
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    /// Unicode character for modern terminals
    pub unicode: char,
    /// ASCII fallback for limited terminals
    pub ascii: char,
}

impl Symbol {
    pub const fn new(unicode: char, ascii: char) -> Self {
        Self { unicode, ascii }
    }

    /// Render the appropriate character based on Unicode support
    pub fn render(&self, use_unicode: bool) -> char {
        if use_unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Glyph set for the three slot states
pub struct SlotSymbols {
    pub occupied: Symbol,
    pub empty: Symbol,
    pub recommended: Symbol,
}

impl SlotSymbols {
    pub fn get(&self, state: SlotState) -> &Symbol {
        match state {
            SlotState::Occupied => &self.occupied,
            SlotState::Empty => &self.empty,
            SlotState::Recommended => &self.recommended,
        }
    }

    /// Bottom legend, e.g. `🚹=Occupied ⬜=Empty ✨=Recommended`
    pub fn legend(&self, use_unicode: bool) -> String {
        format!(
            "{}=Occupied {}=Empty {}=Recommended",
            self.occupied.render(use_unicode),
            self.empty.render(use_unicode),
            self.recommended.render(use_unicode),
        )
    }
}

pub const SLOT_SYMBOLS: SlotSymbols = SlotSymbols {
    occupied: Symbol::new('\u{1F6B9}', 'X'),    // U+1F6B9 Mens Symbol (🚹)
    empty: Symbol::new('\u{2B1C}', '_'),       // U+2B1C White Large Square (⬜)
    recommended: Symbol::new('\u{2728}', '*'), // U+2728 Sparkles (✨)
};
