//! Sessions rendered through `TerminalSurface` on ratatui's `TestBackend`.
//!
//! Verifies what actually lands in the terminal buffer: blank keypad, masked
//! PIN field, cursor over the selected cell.

use std::{collections::VecDeque, io};

use blindpin_app::{Cursor, PinEntry, PinError, Runtime, Surface};
use blindpin_tui::{EventSource, TerminalError, TerminalSurface};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, layout::Position};

/// Replays scripted events; a drained script reads as end of input.
struct ScriptedEvents(VecDeque<Event>);

impl EventSource for ScriptedEvents {
    fn read(&mut self) -> io::Result<Event> {
        self.0.pop_front().ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn surface(width: u16, height: u16, events: &[Event]) -> TerminalSurface<TestBackend, ScriptedEvents> {
    let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    TerminalSurface::new(terminal, ScriptedEvents(events.iter().cloned().collect()))
}

/// Buffer contents with trailing blanks removed.
fn screen(surface: &TerminalSurface<TestBackend, ScriptedEvents>) -> String {
    let buffer = surface.terminal().backend().buffer();
    let area = buffer.area;

    let lines: Vec<String> = (0..area.height)
        .map(|y| {
            let line: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
            line.trim_end().to_owned()
        })
        .collect();

    lines.join("\n").trim_end().to_owned()
}

#[test]
fn masked_frame_after_two_digits() {
    let mut surface = surface(50, 15, &[
        key(KeyCode::Char(' ')),
        key(KeyCode::Down),
        key(KeyCode::Char(' ')),
        key(KeyCode::Enter),
    ]);

    let pin = Runtime::new(&mut surface, PinEntry::new("Enter PIN:"))
        .run()
        .expect("session should submit");

    assert_eq!(pin, "52");
    assert_snapshot!(screen(&surface), @r"
Enter PIN:

   ●●●
   ●●●
   ●●●

PIN: ●●


[Arrow keys]: move cursor
[Space]:      press button under cursor
[Backspace]:  delete
[Enter]:      submit PIN
[q]:          exit without submitting PIN
");

    let cursor = surface.terminal_mut().get_cursor_position().expect("cursor position");
    assert_eq!(cursor, Position::new(4, 4));
}

#[test]
fn ctrl_c_cancels() {
    let interrupt = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let mut surface = surface(50, 15, &[key(KeyCode::Char(' ')), interrupt]);

    let result = Runtime::new(&mut surface, PinEntry::new("Enter PIN:")).run();

    assert!(matches!(result, Err(PinError::Cancelled)));
}

#[test]
fn closed_input_is_surface_error() {
    let mut surface = surface(50, 15, &[key(KeyCode::Up)]);

    let result = Runtime::new(&mut surface, PinEntry::with_cursor("", Cursor::ORIGIN)).run();

    assert!(matches!(result, Err(PinError::Surface(TerminalError::Io(_)))));
}

#[test]
fn text_is_clipped_to_the_screen() {
    let mut surface = surface(8, 3, &[]);

    surface.clear().expect("clear");
    surface.draw_text(5, 1, "abcdef");
    surface.draw_text(0, 10, "off screen");
    surface.draw_text(u16::MAX, 0, "edge");
    surface.set_cursor_position(2, 2);
    surface.flush().expect("flush");

    assert_eq!(screen(&surface), "\n     abc");
}

#[test]
fn multibyte_chars_take_one_column_each() {
    let mut surface = surface(10, 1, &[]);

    surface.clear().expect("clear");
    surface.draw_text(0, 0, "●é●x");
    surface.flush().expect("flush");

    assert_eq!(screen(&surface), "●é●x");
}

#[test]
fn wide_chars_keep_the_text_after_them() {
    let mut surface = surface(20, 1, &[]);

    surface.clear().expect("clear");
    surface.draw_text(0, 0, "中x");
    surface.flush().expect("flush");

    let buffer = surface.terminal().backend().buffer();
    assert_eq!(buffer[Position::new(0, 0)].symbol(), "中");
    assert_eq!(buffer[Position::new(2, 0)].symbol(), "x");
}

#[test]
fn wide_char_prompt_is_shown_verbatim() {
    let mut surface = surface(50, 15, &[key(KeyCode::Enter)]);

    let pin = Runtime::new(&mut surface, PinEntry::new("输入PIN码:"))
        .run()
        .expect("session should submit");
    assert!(pin.is_empty());

    let buffer = surface.terminal().backend().buffer();
    let expected: [(u16, &str); 7] = [(0, "输"), (2, "入"), (4, "P"), (5, "I"), (6, "N"), (7, "码"), (9, ":")];
    for (x, symbol) in expected {
        assert_eq!(buffer[Position::new(x, 0)].symbol(), symbol, "column {x}");
    }
}

#[test]
fn control_chars_are_not_written() {
    let mut surface = surface(10, 2, &[]);

    surface.clear().expect("clear");
    surface.draw_text(0, 0, "a\tb\nc");
    surface.flush().expect("flush");

    assert_eq!(screen(&surface), "abc");
}

#[test]
fn resize_is_picked_up_on_next_frame() {
    let mut surface = surface(20, 4, &[]);
    surface.terminal_mut().backend_mut().resize(30, 6);

    surface.clear().expect("clear");
    surface.draw_text(25, 5, "end");
    surface.flush().expect("flush");

    assert_eq!(screen(&surface).lines().last(), Some("                         end"));
}
