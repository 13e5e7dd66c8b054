use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{error, info};

use score_tui::app::App;
use score_tui::cli::{parse_args, VERSION};
use score_tui::client::{CourseClient, ScoreSource};
use score_tui::input::{map_key, Action};
use score_tui::logging;
use score_tui::refresh::Poller;
use score_tui::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();
    let log_path = logging::init(args.log_file.clone()).context("failed to set up logging")?;
    info!(version = VERSION, log = %log_path.display(), "score-tui starting");

    // No course id means no panel at all
    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "cannot start");
            return Err(err.into());
        }
    };
    info!(course_id = config.course_id, "course resolved");

    let source: Arc<dyn ScoreSource> = Arc::new(CourseClient::new(&config.client)?);
    let mut poller = Poller::spawn(source, config.refresh_interval);
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, &mut poller);
    poller.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("score-tui stopped");
    Ok(result?)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    poller: &mut Poller,
) -> io::Result<()> {
    loop {
        while let Ok(event) = poller.events.try_recv() {
            app.apply(event);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match map_key(key.code, key.modifiers) {
                    Some(Action::Quit) => break,
                    Some(Action::TogglePanel) => app.toggle_panel(),
                    Some(Action::ScrollUp) => app.scroll_up(),
                    Some(Action::ScrollDown) => app.scroll_down(),
                    Some(Action::Refresh) => poller.request_refresh(),
                    None => {}
                }
            }
        }
    }

    Ok(())
}
