use crossterm::tty::IsTty;
use std::fmt;

/// Terminal area available to the interactive view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub cols: u16,
    pub rows: u16,
}

/// Smallest terminal that can host the interactive globe
pub const MIN_SURFACE: Surface = Surface { cols: 24, rows: 12 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Output is redirected to a file or pipe
    NotATerminal,
    SizeUnknown,
    TooSmall { cols: u16, rows: u16, min: Surface },
    /// Static output was requested
    Disabled,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NotATerminal => write!(f, "output is not a terminal"),
            UnavailableReason::SizeUnknown => write!(f, "terminal size is unknown"),
            UnavailableReason::TooSmall { cols, rows, min } => write!(
                f,
                "terminal is {cols}x{rows}, need at least {}x{}",
                min.cols, min.rows
            ),
            UnavailableReason::Disabled => write!(f, "static output requested"),
        }
    }
}

/// Result of the one-time setup check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available(Surface),
    Unavailable(UnavailableReason),
}

/// Probes stdout once at startup
pub fn probe(force_static: bool, min_size: Surface) -> Capability {
    let is_tty = std::io::stdout().is_tty();
    let size = termsize::get().map(|size| (size.cols, size.rows));
    classify(force_static, is_tty, size, min_size)
}

pub fn classify(
    force_static: bool,
    is_tty: bool,
    size: Option<(u16, u16)>,
    min_size: Surface,
) -> Capability {
    if force_static {
        return Capability::Unavailable(UnavailableReason::Disabled);
    }
    if !is_tty {
        return Capability::Unavailable(UnavailableReason::NotATerminal);
    }
    match size {
        None => Capability::Unavailable(UnavailableReason::SizeUnknown),
        Some((cols, rows)) if cols < min_size.cols || rows < min_size.rows => {
            Capability::Unavailable(UnavailableReason::TooSmall {
                cols,
                rows,
                min: min_size,
            })
        }
        Some((cols, rows)) => Capability::Available(Surface { cols, rows }),
    }
}
