use crossterm::event::{self, Event};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use runner::build_info::{BUILD_COMMIT, BUILD_DATE};
use runner::input::{map_key, map_mouse, process_input, InputResult, RunnerInput};
use runner::terminal::{self, TerminalGuard};
use runner::{logging, ui, GameSession, RunnerConfig};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type RunnerTerminal = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let log_path = logging::init()?;
    info!("endless runner {} ({})", BUILD_DATE, BUILD_COMMIT);

    // Bad tunables are fatal before the terminal is touched
    let config = RunnerConfig::default();
    let mut session = GameSession::new(config).map_err(|e| {
        error!("invalid config: {}", e);
        io::Error::from(e)
    })?;
    info!("config: {:?}", session.config());

    terminal::install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(&mut terminal, &mut session);
    drop(guard);

    if let Err(ref e) = result {
        error!("game loop failed: {}", e);
    }
    info!("shutting down at score {}", session.score);
    if let Some(path) = log_path {
        println!("Log written to {}", path.display());
    }

    result
}

fn run(terminal: &mut RunnerTerminal, session: &mut GameSession) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();
    let mut retry_button: Option<Rect> = None;

    loop {
        terminal.draw(|frame| {
            retry_button = ui::draw_ui(frame, session, &mut rng);
        })?;

        // Wait at most one tick for input, then drain whatever is pending
        let tick = Duration::from_millis(session.config().tick_interval_ms);
        if event::poll(tick)? {
            loop {
                let input = match event::read()? {
                    Event::Key(key) => map_key(key),
                    Event::Mouse(mouse) => map_mouse(mouse),
                    _ => RunnerInput::Other,
                };
                if process_input(session, input, retry_button) == InputResult::Quit {
                    return Ok(());
                }
                if !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        session.advance(elapsed_ms, &mut rng);
    }
}
