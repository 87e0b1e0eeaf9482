mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use splash_shooter::entities::GameStatus;
use splash_shooter::presenter::Presenter;
use splash_shooter::{Game, GameConfig};

use display::TerminalPresenter;

const LOG_FILE: &str = "splash_shooter.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is owned by the game, so log lines go to a file in the temp dir.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match std::fs::File::create(std::env::temp_dir().join(LOG_FILE)) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns once the player quits.
///
/// Input is drained without blocking at the top of every frame, then the session
/// advances one tick and the surface is written out. The loop keeps presenting while
/// idle or after game over so the modal stays on screen.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> splash_shooter::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalPresenter::new(cols, rows, config);
    let (width, height) = surface.world_size();
    let mut game = Game::new(width, height, config);
    let mut rng = thread_rng();
    let frame = config.frame_duration();

    log::info!(
        "Surface {}x{} cells, {:.0}x{:.0} world units",
        cols,
        rows,
        width,
        height
    );

    // Idle shows the same modal as game over, with zero points
    surface.show_game_over(0);

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S')
                        if game.status() != GameStatus::Running =>
                    {
                        game.start(&mut surface);
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if let Some(pos) = surface.cell_to_world(column, row) {
                        game.pointer_down(pos);
                    }
                }
                Event::Resize(c, r) => {
                    log::debug!("Resize to {}x{} ignored; surface is fixed per session", c, r);
                }
                _ => {}
            }
        }

        game.frame(&mut surface, &mut rng);
        surface.flush(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> splash_shooter::Result<()> {
    init_logging();
    let config = GameConfig::load()?;
    log::info!("Splash Shooter starting with {:?}", config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::warn!("Input thread stopped: {}", err);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &config, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("Exiting with error: {}", err);
    }
    result
}
