//! The "Urinal Layout" panel.
//!
//! The panel is a ratatui widget drawn into an off-screen buffer and then
//! printed line by line, so the console keeps its normal scrollback instead
//! of switching to an alternate screen.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::selection::{Capacity, Layout, OccupiedSet};

use super::colors::{to_terminal_color, BORDER_COLOR, LEGEND_COLOR, SLOT_COLORS};
use super::symbols::{SlotState, SLOT_SYMBOLS};

const TITLE: &str = "Urinal Layout";

/// Borders plus one cell of padding on each side
const HORIZONTAL_CHROME: u16 = 4;

/// State of every slot in order. Occupied wins over recommended.
pub fn slot_states(
    capacity: Capacity,
    occupied: &OccupiedSet,
    recommended: Option<u8>,
) -> Vec<SlotState> {
    capacity
        .slots()
        .map(|slot| {
            if occupied.contains(slot) {
                SlotState::Occupied
            } else if recommended == Some(slot) {
                SlotState::Recommended
            } else {
                SlotState::Empty
            }
        })
        .collect()
}

/// Plain-text row, one glyph per slot separated by spaces
pub fn layout_row(
    capacity: Capacity,
    occupied: &OccupiedSet,
    recommended: Option<u8>,
    use_unicode: bool,
) -> String {
    slot_states(capacity, occupied, recommended)
        .into_iter()
        .map(|state| SLOT_SYMBOLS.get(state).render(use_unicode).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bordered panel showing one layout row with a title and legend
#[derive(Debug, Clone, Copy)]
pub struct LayoutPanel<'a> {
    capacity: Capacity,
    occupied: &'a OccupiedSet,
    recommended: Option<u8>,
    use_unicode: bool,
}

impl<'a> LayoutPanel<'a> {
    pub fn new(capacity: Capacity, occupied: &'a OccupiedSet) -> Self {
        Self {
            capacity,
            occupied,
            recommended: None,
            use_unicode: true,
        }
    }

    /// Panel for a resolved layout, highlighting its recommendation
    pub fn for_layout(layout: &'a Layout) -> Self {
        Self::new(layout.capacity, &layout.occupied).recommended(Some(layout.optimal))
    }

    pub fn recommended(mut self, slot: Option<u8>) -> Self {
        self.recommended = slot;
        self
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }

    fn row_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, state) in slot_states(self.capacity, self.occupied, self.recommended)
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let glyph = SLOT_SYMBOLS.get(state).render(self.use_unicode);
            spans.push(Span::styled(
                glyph.to_string(),
                Style::default().fg(SLOT_COLORS.get(state)),
            ));
        }
        Line::from(spans)
    }

    fn legend_line(&self) -> Line<'static> {
        Line::styled(
            SLOT_SYMBOLS.legend(self.use_unicode),
            Style::default().fg(LEGEND_COLOR),
        )
    }

    /// Narrowest width that fits the row, title and legend
    pub fn width(&self) -> u16 {
        let content = self
            .row_line()
            .width()
            .max(self.legend_line().width())
            .max(TITLE.len());
        content as u16 + HORIZONTAL_CHROME
    }

    pub fn height(&self) -> u16 {
        3
    }

    /// Draw the panel into a fresh buffer of its natural size
    pub fn to_buffer(&self) -> Buffer {
        let area = Rect::new(0, 0, self.width(), self.height());
        let mut buf = Buffer::empty(area);
        (*self).render(area, &mut buf);
        buf
    }
}

impl Widget for LayoutPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(Line::from(TITLE).centered())
            .title_bottom(self.legend_line().centered());

        Paragraph::new(self.row_line())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// Iterate a buffer row as (symbol, style) pairs, skipping the cells hidden
/// behind double-width glyphs.
fn visible_cells(buf: &Buffer, y: u16) -> Vec<(&str, Style)> {
    let area = buf.area;
    let mut cells = Vec::new();
    let mut skip = 0usize;

    for x in area.x..area.x + area.width {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        let cell = &buf[(x, y)];
        let symbol = cell.symbol();
        skip = Span::raw(symbol).width().saturating_sub(1);
        cells.push((symbol, cell.style()));
    }

    cells
}

/// Print a rendered buffer, with its foreground colors when `use_color` is set.
///
/// Color changes are only emitted when the color differs from the previous
/// cell, so runs of equally styled text stay contiguous.
pub fn print_buffer<W: Write>(out: &mut W, buf: &Buffer, use_color: bool) -> io::Result<()> {
    let area = buf.area;
    for y in area.y..area.y + area.height {
        if !use_color {
            for (symbol, _) in visible_cells(buf, y) {
                queue!(out, Print(symbol))?;
            }
            queue!(out, Print("\n"))?;
            continue;
        }

        let mut current = None;
        for (symbol, style) in visible_cells(buf, y) {
            let color = style.fg.and_then(to_terminal_color);
            if current != Some(color) {
                match color {
                    Some(color) => queue!(out, SetForegroundColor(color))?,
                    None => queue!(out, ResetColor)?,
                }
                current = Some(color);
            }
            queue!(out, Print(symbol))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

pub fn print_panel<W: Write>(
    out: &mut W,
    panel: &LayoutPanel<'_>,
    use_color: bool,
) -> io::Result<()> {
    print_buffer(out, &panel.to_buffer(), use_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                visible_cells(buf, y)
                    .into_iter()
                    .map(|(symbol, _)| symbol)
                    .collect::<String>()
            })
            .collect()
    }

    fn occupied(capacity: Capacity, slots: &[i64]) -> OccupiedSet {
        OccupiedSet::from_positions(slots.iter().copied(), capacity).unwrap()
    }

    #[test]
    fn test_slot_states() {
        let capacity = Capacity::new(4).unwrap();
        let taken = occupied(capacity, &[2]);
        assert_eq!(
            slot_states(capacity, &taken, Some(4)),
            vec![
                SlotState::Empty,
                SlotState::Occupied,
                SlotState::Empty,
                SlotState::Recommended,
            ]
        );
    }

    #[test]
    fn test_occupied_beats_recommended() {
        let capacity = Capacity::new(2).unwrap();
        let taken = occupied(capacity, &[1]);
        assert_eq!(
            slot_states(capacity, &taken, Some(1)),
            vec![SlotState::Occupied, SlotState::Empty]
        );
    }

    #[test]
    fn test_layout_row_ascii() {
        let capacity = Capacity::new(5).unwrap();
        let taken = occupied(capacity, &[1, 3]);
        assert_eq!(layout_row(capacity, &taken, None, false), "X _ X _ _");
        assert_eq!(layout_row(capacity, &taken, Some(5), false), "X _ X _ *");
    }

    #[test]
    fn test_layout_row_unicode() {
        let capacity = Capacity::new(3).unwrap();
        let taken = occupied(capacity, &[2]);
        assert_eq!(
            layout_row(capacity, &taken, Some(1), true),
            "\u{2728} \u{1F6B9} \u{2B1C}"
        );
    }

    #[test]
    fn test_panel_buffer_ascii() {
        let capacity = Capacity::new(3).unwrap();
        let taken = occupied(capacity, &[2]);
        let panel = LayoutPanel::new(capacity, &taken)
            .recommended(Some(1))
            .use_unicode(false);

        let lines = buffer_lines(&panel.to_buffer());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[0].contains(TITLE));
        assert!(lines[1].contains("* X _"));
        assert!(lines[2].contains("X=Occupied _=Empty *=Recommended"));
        assert!(lines.iter().all(|line| line.chars().count() == panel.width() as usize));
    }

    #[test]
    fn test_panel_width_grows_with_capacity() {
        let small = Capacity::new(2).unwrap();
        let large = Capacity::new(20).unwrap();
        let none = OccupiedSet::default();

        let small_width = LayoutPanel::new(small, &none).use_unicode(true).width();
        let large_width = LayoutPanel::new(large, &none).use_unicode(true).width();
        // 20 double-width glyphs plus 19 separators outgrow the legend.
        assert_eq!(large_width, 59 + HORIZONTAL_CHROME);
        assert!(small_width < large_width);
    }

    #[test]
    fn test_print_panel_writes_every_row() {
        let capacity = Capacity::new(4).unwrap();
        let taken = occupied(capacity, &[4]);
        let panel = LayoutPanel::new(capacity, &taken).use_unicode(false);

        let mut out = Vec::new();
        print_panel(&mut out, &panel, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.contains(TITLE));
        assert!(text.contains('X'));
    }

    #[test]
    fn test_print_panel_without_color_is_plain_text() {
        let capacity = Capacity::new(3).unwrap();
        let taken = occupied(capacity, &[3]);
        let panel = LayoutPanel::new(capacity, &taken)
            .recommended(Some(1))
            .use_unicode(false);

        let mut out = Vec::new();
        print_panel(&mut out, &panel, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains('\u{1b}'));
        let expected: String = buffer_lines(&panel.to_buffer())
            .into_iter()
            .map(|line| line + "\n")
            .collect();
        assert_eq!(text, expected);
        assert!(text.contains("* _ X"));
    }

    #[test]
    fn test_for_layout_highlights_optimal() {
        let layout = crate::selection::recommend(6, &[1]).unwrap();
        let lines = buffer_lines(&LayoutPanel::for_layout(&layout).use_unicode(false).to_buffer());
        assert!(lines[1].contains("X _ _ _ _ *"));
    }
}
