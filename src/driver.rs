//! Terminal render loop: event dispatch, per-frame advance, drawing.

use crate::capability::Surface;
use crate::controller::RotationController;
use crate::error::Error;
use crate::graphics::Cell;
use crate::input::{Command, PointerAdapter};
use crate::state::YawPitch;
use crate::widget::GlobeWidget;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const FRONT_COLOR: Color = Color::Rgb {
    r: 0x20,
    g: 0x60,
    b: 0x90,
};
const BACK_COLOR: Color = Color::DarkGrey;

/// Puts the terminal into interactive mode and restores it on drop
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalGuard { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            self.stdout,
            cursor::Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            warn!(error = %e, "failed to restore terminal screen");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "failed to leave raw mode");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Everything the render loop owns
pub struct Driver {
    controller: RotationController,
    widget: GlobeWidget,
    adapter: PointerAdapter,
    reduced_motion: bool,
    frame_interval: Duration,
    last_angles: YawPitch,
}

impl Driver {
    pub fn new(
        controller: RotationController,
        widget: GlobeWidget,
        adapter: PointerAdapter,
        reduced_motion: bool,
        frame_interval: Duration,
    ) -> Self {
        Driver {
            controller,
            widget,
            adapter,
            reduced_motion,
            frame_interval,
            last_angles: YawPitch::ZERO,
        }
    }

    /// Runs until the user quits.
    pub fn run(mut self, surface: Surface) -> Result<(), Error> {
        let mut guard = TerminalGuard::enter()?;
        info!(cols = surface.cols, rows = surface.rows, "interactive globe started");

        let mut next_frame = Instant::now();
        loop {
            let now = Instant::now();
            if now < next_frame {
                if event::poll(next_frame - now)? && self.dispatch(&event::read()?) == Flow::Quit {
                    break;
                }
                continue;
            }

            // Everything that arrived before this frame is applied first.
            while event::poll(Duration::ZERO)? {
                if self.dispatch(&event::read()?) == Flow::Quit {
                    info!("quit requested");
                    return Ok(());
                }
            }

            self.last_angles = self.controller.advance();
            self.widget.paint(self.last_angles);
            self.draw(&mut guard.stdout)?;

            next_frame += self.frame_interval;
            if next_frame < now {
                // Fell behind (suspended terminal, slow draw); don't try to catch up.
                next_frame = now + self.frame_interval;
            }
        }
        info!("quit requested");
        Ok(())
    }

    fn dispatch(&mut self, event: &event::Event) -> Flow {
        for command in self.adapter.translate(event) {
            if self.apply(command) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Start(contact, position) => {
                self.controller.on_interaction_start(contact, position)
            }
            Command::Move(contact, position) => {
                self.controller.on_interaction_move(contact, position)
            }
            Command::End(contact) => {
                self.controller.on_interaction_end(contact);
            }
            Command::ToggleReducedMotion => {
                self.reduced_motion = !self.reduced_motion;
                self.controller.on_motion_preference_changed(self.reduced_motion);
            }
            Command::ToggleDebug => self.widget.debug = !self.widget.debug,
            Command::Resize { cols, rows } => {
                let globe_rows = rows.saturating_sub(1);
                debug!(cols, rows, "terminal resized");
                self.adapter.resize(cols, globe_rows);
                self.widget.resize(usize::from(cols), usize::from(globe_rows));
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let canvas = self.widget.canvas();
        for y in 0..canvas.height() {
            queue!(out, cursor::MoveTo(0, y as u16))?;
            let mut run = String::new();
            let mut run_cell = Cell::Empty;
            for &cell in canvas.row(y) {
                if cell != run_cell && !run.is_empty() {
                    write_run(out, run_cell, &run)?;
                    run.clear();
                }
                run_cell = cell;
                run.push(cell.glyph());
            }
            write_run(out, run_cell, &run)?;
        }

        let status = self
            .widget
            .status_line(self.last_angles, self.reduced_motion);
        let width = canvas.width();
        let status: String = status.chars().take(width).collect();
        queue!(
            out,
            cursor::MoveTo(0, canvas.height() as u16),
            SetAttribute(Attribute::Dim),
            Print(format!("{status:<width$}")),
            SetAttribute(Attribute::Reset)
        )?;
        out.flush()
    }
}

fn write_run(out: &mut impl Write, cell: Cell, text: &str) -> io::Result<()> {
    match cell {
        Cell::Empty => queue!(out, Print(text)),
        Cell::Back => queue!(out, SetForegroundColor(BACK_COLOR), Print(text), ResetColor),
        Cell::Front => queue!(out, SetForegroundColor(FRONT_COLOR), Print(text), ResetColor),
    }
}
