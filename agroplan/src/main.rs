//! AgroPlan dashboard binary
//!
//! Runs the usual loop:
//! 1. Event (keyboard) -> Dashboard.handle_event() -> Actions
//! 2. Actions dispatched to the EffectStore
//! 3. Reducer updates state and returns effects
//! 4. Effects run as keyed tasks that send result actions back
//! 5. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! # IP-based location against a local forecast service
//! agroplan --forecast-url http://localhost:8000
//!
//! # Fixed coordinates, resolve once and print JSON
//! agroplan --lat 9.86 --lon -83.92 --once
//! ```

use std::cell::RefCell;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use agroplan_runtime::{
    EffectContext, EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome,
    LoggingMiddleware,
};
use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use agroplan::action::Action;
use agroplan::components::{Component, Dashboard, DashboardProps};
use agroplan::config::{Args, DashboardConfig, DashboardResolver};
use agroplan::effect::{Effect, FORECAST_TASK, LOCATE_TASK};
use agroplan::logging::{self, LogTarget};
use agroplan::reducer::reducer;
use agroplan::state::{AppState, LOADING_ANIM_TICK_MS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::try_from(Args::parse())?;
    logging::init(LogTarget::for_run(config.log_file.as_deref(), config.once))?;

    let resolver = Arc::new(config.build_resolver()?);
    tracing::info!(
        forecast_url = %config.forecast_url,
        location = ?config.location,
        "Starting dashboard"
    );

    if config.once {
        let state = resolver.resolve().await;
        let json = serde_json::to_string_pretty(&state).context("serializing forecast state")?;
        println!("{}", json);
        return Ok(());
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, resolver).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("dashboard loop failed")
}

struct DashboardUi {
    root: Dashboard,
}

impl DashboardUi {
    fn new() -> Self {
        Self { root: Dashboard }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        self.root.render(frame, area, props);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(..) = event {
            return EventOutcome::ignored().with_render();
        }

        let props = DashboardProps {
            state,
            is_focused: true,
        };
        EventOutcome::from_actions(self.root.handle_event(event, props))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    resolver: Arc<DashboardResolver>,
) -> io::Result<()> {
    let store = EffectStoreWithMiddleware::new(AppState::new(), reducer, LoggingMiddleware::new());
    let mut runtime = EffectRuntime::from_store(store);

    // Spinner frames while the farm conditions resolve
    runtime.interval(Duration::from_millis(LOADING_ANIM_TICK_MS), || Action::Tick);

    runtime.enqueue(Action::ResolveStart);

    let ui = RefCell::new(DashboardUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(&resolver, effect, ctx),
        )
        .await
}

/// Run effects as keyed tasks; results come back as `*Did*` actions.
fn handle_effect(
    resolver: &Arc<DashboardResolver>,
    effect: Effect,
    ctx: &mut EffectContext<Action>,
) {
    match effect {
        Effect::Locate => {
            let resolver = Arc::clone(resolver);
            ctx.tasks().spawn(LOCATE_TASK, async move {
                match resolver.locate().await {
                    Ok(coordinates) => Action::LocationDidResolve(coordinates),
                    Err(failure) => Action::LocationDidFail(failure),
                }
            });
        }
        Effect::FetchForecast(coordinates) => {
            let resolver = Arc::clone(resolver);
            ctx.tasks().spawn(FORECAST_TASK, async move {
                match resolver.fetch(coordinates).await {
                    Ok(reading) => Action::ForecastDidLoad(reading),
                    Err(failure) => Action::ForecastDidFail(failure),
                }
            });
        }
    }
}
