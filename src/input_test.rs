use super::*;

const LEFT: ContactId = ContactId(0);
const RIGHT: ContactId = ContactId(1);

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn adapter() -> PointerAdapter {
    PointerAdapter::new(80, 23, CellSize::default())
}

#[test]
fn press_drag_release_inside_surface() {
    let mut adapter = adapter();

    let start = adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
    assert_eq!(start, vec![Command::Start(LEFT, Position::new(84.0, 88.0))]);

    let moved = adapter.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5));
    assert_eq!(moved, vec![Command::Move(LEFT, Position::new(100.0, 88.0))]);

    let end = adapter.translate(&mouse(MouseEventKind::Up(MouseButton::Left), 12, 5));
    assert_eq!(end, vec![Command::End(LEFT)]);
}

#[test]
fn one_cell_step_is_one_cell_of_pixels() {
    let mut adapter = PointerAdapter::new(80, 23, CellSize { width: 10.0, height: 20.0 });
    let a = adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 3));
    let b = adapter.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 4, 4));
    let (Command::Start(_, a), Command::Move(_, b)) = (&a[0], &b[0]) else {
        panic!("unexpected commands {a:?} {b:?}");
    };
    assert_eq!(b.x - a.x, 10.0);
    assert_eq!(b.y - a.y, 20.0);
}

#[test]
fn press_on_status_line_is_ignored() {
    let mut adapter = adapter();
    assert!(adapter
        .translate(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 23))
        .is_empty());
    assert!(adapter
        .translate(&mouse(MouseEventKind::Up(MouseButton::Left), 10, 23))
        .is_empty());
}

#[test]
fn dragging_off_the_surface_releases_once() {
    let mut adapter = adapter();
    adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 20));

    let left = adapter.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 23));
    assert_eq!(left, vec![Command::End(LEFT)]);

    // Further motion and the eventual button-up produce nothing.
    assert!(adapter
        .translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 10))
        .is_empty());
    assert!(adapter
        .translate(&mouse(MouseEventKind::Up(MouseButton::Left), 10, 10))
        .is_empty());
}

#[test]
fn focus_loss_ends_every_held_contact() {
    let mut adapter = adapter();
    adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
    adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Right), 2, 2));

    assert_eq!(
        adapter.translate(&Event::FocusLost),
        vec![Command::End(LEFT), Command::End(RIGHT)]
    );
    assert!(adapter.translate(&Event::FocusLost).is_empty());
}

#[test]
fn second_button_is_forwarded_as_its_own_contact() {
    let mut adapter = adapter();
    adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
    let second = adapter.translate(&mouse(MouseEventKind::Down(MouseButton::Right), 5, 5));
    assert_eq!(second, vec![Command::Start(RIGHT, Position::new(44.0, 88.0))]);
}

#[test]
fn resize_shrinks_the_surface() {
    let mut adapter = adapter();
    assert_eq!(
        adapter.translate(&Event::Resize(40, 12)),
        vec![Command::Resize { cols: 40, rows: 12 }]
    );
    adapter.resize(40, 11);
    assert!(adapter
        .translate(&mouse(MouseEventKind::Down(MouseButton::Left), 50, 5))
        .is_empty());
}

#[test]
fn keys_map_to_commands() {
    let mut adapter = adapter();
    assert_eq!(adapter.translate(&key(KeyCode::Char('q'))), vec![Command::Quit]);
    assert_eq!(adapter.translate(&key(KeyCode::Esc)), vec![Command::Quit]);
    assert_eq!(
        adapter.translate(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))),
        vec![Command::Quit]
    );
    assert_eq!(
        adapter.translate(&key(KeyCode::Char('m'))),
        vec![Command::ToggleReducedMotion]
    );
    assert_eq!(adapter.translate(&key(KeyCode::Char('d'))), vec![Command::ToggleDebug]);
    assert!(adapter.translate(&key(KeyCode::Char('x'))).is_empty());
}

#[test]
fn hover_and_scroll_are_ignored() {
    let mut adapter = adapter();
    assert!(adapter.translate(&mouse(MouseEventKind::Moved, 3, 3)).is_empty());
    assert!(adapter.translate(&mouse(MouseEventKind::ScrollUp, 3, 3)).is_empty());
}
