// Core modules
pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::ViewState;
pub use view::ScoresView;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::data_provider::ScoresDataProvider;
use crate::types::GameDate;

/// Main entry point for TUI mode
pub async fn run(
    client: Arc<dyn ScoresDataProvider>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));
    let mut runtime = Runtime::new(ViewState::new(GameDate::today()), data_effects);

    // Trigger initial data load
    runtime.dispatch(Action::Refresh);

    let result = event_loop(&mut terminal, &mut runtime, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
    config: &Config,
) -> Result<(), io::Error> {
    loop {
        // Process any completions FIRST so loaded data renders right away
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            f.render_widget(ScoresView::new(runtime.state(), &config.theme), area);
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key, runtime.state()) {
            Some(Action::Quit) => {
                tracing::debug!("ACTION: Quitting application");
                return Ok(());
            }
            Some(action) => runtime.dispatch(action),
            None => {}
        }
    }
}
