use crate::capability::UnavailableReason;
use crate::globe::Globe;
use crate::input::CellSize;
use crate::state::YawPitch;
use crate::widget::GlobeWidget;
use std::io::Write;

/// Used when the terminal size cannot be read
const DEFAULT_COLS: usize = 80;
const DEFAULT_ROWS: usize = 24;

/// Writes a single frame of the globe at rest, followed by why the
/// interactive view is not running.
pub fn render_static(
    out: &mut impl Write,
    globe: Globe,
    size: Option<(u16, u16)>,
    cell_size: CellSize,
    reason: UnavailableReason,
) -> std::io::Result<()> {
    let (cols, rows) = size
        .map(|(cols, rows)| (usize::from(cols).max(1), usize::from(rows).max(2)))
        .unwrap_or((DEFAULT_COLS, DEFAULT_ROWS));

    let mut widget = GlobeWidget::new(globe, cols, rows - 1, cell_size);
    widget.paint(YawPitch::ZERO);

    writeln!(out, "{}", widget.canvas().to_text())?;
    writeln!(out, "(static globe: {reason})")?;
    out.flush()
}
