mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use invaders::compute::{init_state, tick};
use invaders::config::Config;
use invaders::entities::{GameState, GameStatus};
use invaders::input::{self, Command};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Translate one key event into a simulation command, if any.
fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Char(' ') => Some(Command::Fire),
        _ => None,
    }
}

// ── Game loop ────────────────────────────────────────────────────────────────

/// Run until the user quits. Commands accumulated between frames are
/// drained into the simulation once per tick, then the state advances and
/// is rendered. Once the state is terminal the loop stops ticking and
/// keeps the final frame up.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = StdRng::from_entropy();
    let mut commands: Vec<Command> = Vec::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ────────────────────
        commands.clear();
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            // Repeats count as presses; classic terminals deliver OS
            // key-repeat that way.
            if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(());
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                _ => {
                    if let Some(cmd) = command_for(code) {
                        commands.push(cmd);
                    }
                }
            }
        }

        // ── Apply the command queue, then advance the simulation ─────────────
        for &cmd in &commands {
            *state = input::apply(state, cmd);
        }
        if state.status == GameStatus::Running {
            *state = tick(state, &mut rng);
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, state, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut state = init_state(Config::default());
    log::info!("simulation started");
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
