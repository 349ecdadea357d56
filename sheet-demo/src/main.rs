//! Terminal host for the bottom-sheet motion controller.
//!
//! Renders the sheet as filled rows in an alternate screen, feeds mouse
//! drags and key presses into the controller, and steps the spring on a
//! frame timer while an animation is ongoing.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bottom_sheet::{Dismiss, DragTarget, Key, PointerId, Sheet};
use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, execute, queue};
use sheet_config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// The single mouse pointer a terminal gives us.
const POINTER: PointerId = PointerId(0);

/// Frame cadence while the spring is running.
const FRAME: Duration = Duration::from_millis(16);

/// Idle poll timeout; nothing moves without input, so this only bounds how
/// long quit takes to notice a closed stdin.
const IDLE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(author, version, about = "Draggable bottom sheet in your terminal")]
struct Cli {
    /// Path to a config file in KDL format.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// What sits under a pointer-down.
///
/// The top row of the sheet hosts the Full/Half/Close buttons; pressing it
/// activates a button instead of starting a drag.
struct SheetRow {
    on_controls: bool,
}

impl DragTarget for SheetRow {
    fn is_interactive(&self) -> bool {
        false
    }

    fn in_control_region(&self) -> bool {
        self.on_controls
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path).map_err(|err| anyhow::anyhow!("{err:?}"))?,
        None => Config::default(),
    };

    let (cols, rows) = terminal::size().context("error querying the terminal size")?;
    let mut sheet = Sheet::new(&config, f64::from(rows))?;
    debug!(cols, rows, offsets = ?sheet.snap_offsets(), "starting demo");

    let _guard = TerminalGuard::enter()?;
    run(&mut sheet, cols, rows)
}

fn run(sheet: &mut Sheet, mut cols: u16, mut rows: u16) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    loop {
        draw(&mut stdout, sheet, cols, rows)?;

        let timeout = if sheet.are_animations_ongoing() {
            FRAME
        } else {
            IDLE
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Esc => {
                        if sheet.key_pressed(Key::Escape).should_notify() {
                            break;
                        }
                    }
                    KeyCode::Char('q') => break,
                    KeyCode::Char('f') => {
                        let _ = sheet.snap_to(0);
                    }
                    KeyCode::Char('h') => {
                        if sheet.snap_offsets().len() > 2 {
                            let _ = sheet.snap_to(1);
                        }
                    }
                    KeyCode::Char('c') => {
                        if close(sheet).should_notify() {
                            break;
                        }
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if on_mouse(sheet, mouse, cols).should_notify() {
                        break;
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    (cols, rows) = (new_cols, new_rows);
                    sheet.viewport_resized(f64::from(rows));
                }
                _ => {}
            }
        }

        sheet.advance_animations();
    }
    Ok(())
}

fn close(sheet: &mut Sheet) -> Dismiss {
    let closed = sheet.snaps().closed_index();
    sheet.snap_to(closed)
}

fn on_mouse(sheet: &mut Sheet, mouse: MouseEvent, cols: u16) -> Dismiss {
    let y = f64::from(mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let top = sheet.offset().round().max(0.) as u16;
            let target = SheetRow {
                on_controls: mouse.row == top,
            };
            if target.in_control_region() {
                // Thirds of the control row map to the Full/Half/Close
                // buttons, left to right.
                let len = sheet.snap_offsets().len();
                let index = match 3 * usize::from(mouse.column) / usize::from(cols.max(1)) {
                    0 => 0,
                    1 if len > 2 => 1,
                    _ => len - 1,
                };
                return sheet.snap_to(index);
            }
            sheet.pointer_down(POINTER, y, &target);
            Dismiss::None
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            sheet.pointer_move(POINTER, y);
            Dismiss::None
        }
        MouseEventKind::Up(MouseButton::Left) => sheet.pointer_up(POINTER),
        _ => Dismiss::None,
    }
}

fn draw(stdout: &mut io::Stdout, sheet: &Sheet, cols: u16, rows: u16) -> anyhow::Result<()> {
    let top = sheet.offset().round().max(0.).min(f64::from(rows)) as u16;
    let width = usize::from(cols);

    // The backdrop dims as the sheet opens.
    let backdrop = if sheet.openness() > 0.5 { "░" } else { " " };

    queue!(stdout, Clear(ClearType::All))?;
    for row in 0..rows {
        queue!(stdout, MoveTo(0, row))?;
        if row < top {
            queue!(stdout, Print(backdrop.repeat(width)))?;
        } else if row == top {
            queue!(stdout, Print(control_row(width)))?;
        } else {
            queue!(stdout, Print("█".repeat(width)))?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn control_row(width: usize) -> String {
    let mut row = String::from("──  [F]ull   [H]alf   [C]lose   drag me, Esc closes, q quits  ");
    if row.chars().count() > width {
        row = row.chars().take(width).collect();
    } else {
        let pad = width - row.chars().count();
        row.push_str(&"─".repeat(pad));
    }
    row
}

/// Raw-mode guard; restores the terminal even on an error path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("error entering raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
