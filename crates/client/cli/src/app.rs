//! Event loop tying terminal input, the session and rendering together.
use anyhow::{Context, Result};
use crossterm::event::{self as term_event, Event as TermEvent};
use ratatui::layout::Rect;
use tokio::time::{self, Duration};

use crate::config::CliConfig;
use crate::input::InputHandler;
use crate::presentation::{Theme, terminal, terminal::Tui, ui};
use crate::session::{Command, Session};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct CliApp {
    config: CliConfig,
    theme: Theme,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Self {
        Self {
            config,
            theme: Theme::default(),
        }
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("hexcrawl starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let CliApp { config, theme } = self;
        let input = InputHandler::new(config.layout());
        let mut session = Session::new(config);

        let size = terminal.size().context("Failed to query terminal size")?;
        let area = Rect::new(0, 0, size.width, size.height);
        session.initialize(ui::viewport_size(area, &session.config().ui))?;
        ui::render(&mut terminal, &session, &theme)?;

        loop {
            time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;

            let mut redraw = false;
            while term_event::poll(Duration::from_millis(0))? {
                let Some(command) = decode(term_event::read()?, &input, &session) else {
                    continue;
                };

                let outcome = session.apply(command)?;
                if outcome.quit {
                    tracing::info!("hexcrawl exiting");
                    return Ok(());
                }
                redraw |= outcome.redraw;
            }

            if redraw {
                render(&mut terminal, &session, &theme)?;
            }
        }
    }
}

/// Maps a terminal event to a session command.
fn decode(event: TermEvent, input: &InputHandler, session: &Session) -> Option<Command> {
    match event {
        TermEvent::Key(key) => input.handle_key(key),
        TermEvent::Resize(width, height) => {
            let area = Rect::new(0, 0, width, height);
            Some(Command::Resize(ui::viewport_size(
                area,
                &session.config().ui,
            )))
        }
        _ => None,
    }
}

fn render(terminal: &mut Tui, session: &Session, theme: &Theme) -> Result<()> {
    ui::render(terminal, session, theme).context("Failed to draw frame")
}
