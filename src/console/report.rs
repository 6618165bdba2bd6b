use std::io::{self, Write};

use crossterm::style::Stylize;
use tracing::debug;

use crate::render::{layout_row, print_panel, Appearance, LayoutPanel};
use crate::selection::Layout;

/// Print the layout without and then with its recommendation.
pub fn report<W: Write>(out: &mut W, layout: &Layout, appearance: Appearance) -> io::Result<()> {
    debug!(
        row = %layout_row(layout.capacity, &layout.occupied, Some(layout.optimal), false),
        "reporting layout"
    );

    writeln!(out, "\nCurrent layout:")?;
    let before =
        LayoutPanel::new(layout.capacity, &layout.occupied).use_unicode(appearance.use_unicode);
    print_panel(out, &before, appearance.use_color)?;

    writeln!(
        out,
        "\n{} {}",
        appearance.paint("Recommended position:", |s| s.green()),
        layout.optimal
    )?;

    writeln!(out, "\nFinal layout with recommendation:")?;
    let after = LayoutPanel::for_layout(layout).use_unicode(appearance.use_unicode);
    print_panel(out, &after, appearance.use_color)
}
