//! Normalizes raw terminal events into controller calls and driver commands.

use crate::state::{ContactId, Position};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Size of one character cell in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CellSize {
    fn default() -> Self {
        CellSize {
            width: 8.0,
            height: 16.0,
        }
    }
}

/// What the driver should do in response to one terminal event
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start(ContactId, Position),
    Move(ContactId, Position),
    End(ContactId),
    ToggleReducedMotion,
    ToggleDebug,
    Resize { cols: u16, rows: u16 },
    Quit,
}

/// Translates crossterm events for the globe surface.
///
/// The surface is the top `rows` rows of the terminal; the status line below
/// it is not interactive.
pub struct PointerAdapter {
    cols: u16,
    rows: u16,
    cell_size: CellSize,
    /// Buttons currently held down, in press order
    held: Vec<ContactId>,
}

impl PointerAdapter {
    pub fn new(cols: u16, rows: u16, cell_size: CellSize) -> Self {
        PointerAdapter {
            cols,
            rows,
            cell_size,
            held: Vec::new(),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    pub fn translate(&mut self, event: &Event) -> Vec<Command> {
        match event {
            Event::Mouse(mouse) => self.translate_mouse(mouse).into_iter().collect(),
            Event::Key(key) => translate_key(key).into_iter().collect(),
            Event::FocusLost => self.held.drain(..).map(Command::End).collect(),
            Event::Resize(cols, rows) => vec![Command::Resize {
                cols: *cols,
                rows: *rows,
            }],
            _ => Vec::new(),
        }
    }

    fn translate_mouse(&mut self, mouse: &MouseEvent) -> Option<Command> {
        let inside = self.contains(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) if inside => {
                let contact = contact_for(button);
                if !self.held.contains(&contact) {
                    self.held.push(contact);
                }
                Some(Command::Start(contact, self.to_pixels(mouse)))
            }
            MouseEventKind::Drag(button) => {
                let contact = contact_for(button);
                if !self.held.contains(&contact) {
                    return None;
                }
                if inside {
                    Some(Command::Move(contact, self.to_pixels(mouse)))
                } else {
                    // Leaving the surface counts as a release.
                    self.release(contact)
                }
            }
            MouseEventKind::Up(button) => self.release(contact_for(button)),
            _ => None,
        }
    }

    fn release(&mut self, contact: ContactId) -> Option<Command> {
        let index = self.held.iter().position(|held| *held == contact)?;
        self.held.remove(index);
        Some(Command::End(contact))
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column < self.cols && row < self.rows
    }

    /// Cell center in pixel units
    fn to_pixels(&self, mouse: &MouseEvent) -> Position {
        Position::new(
            (f64::from(mouse.column) + 0.5) * self.cell_size.width,
            (f64::from(mouse.row) + 0.5) * self.cell_size.height,
        )
    }
}

fn contact_for(button: MouseButton) -> ContactId {
    match button {
        MouseButton::Left => ContactId(0),
        MouseButton::Right => ContactId(1),
        MouseButton::Middle => ContactId(2),
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleReducedMotion),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::ToggleDebug),
        _ => None,
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
