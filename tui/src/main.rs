mod config;
mod events;
mod logging;
mod message;
mod model;
mod route;
mod tasks;
mod update;
mod view;

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use freebies_api::{CatalogClient, CatalogSource, GeminiClient, StubCatalog, Summarizer};
use ratatui::{backend::CrosstermBackend, layout::Rect, prelude::Color, Terminal};
use tachyonfx::fx::EvolveSymbolSet;
use tachyonfx::pattern::RadialPattern;
use tachyonfx::{fx, Effect, EffectTimer, Interpolation, Motion};

use config::Config;
use message::Message;
use model::Model;
use route::Route;
use tasks::{Services, TaskManager};

/// Free and upcoming free games from the Epic Games Store
#[derive(Debug, Parser)]
#[command(name = "freebies", version, about)]
struct Cli {
    /// Route to open first: `/` or `/game/<slug>`
    #[arg(default_value = "/")]
    route: String,

    /// Use the bundled catalog even when an endpoint is configured
    #[arg(long)]
    fixture: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("freebies: logging disabled: {e:#}");
    }

    write_default_config();
    let config = Config::load_with_env();
    let services = build_services(&config, cli.fixture);
    let start = Route::parse(&cli.route);
    tracing::info!(route = %start, "starting");

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, Model::new(config.store_links()), services, start).await;
    restore_terminal()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

/// First run: leave an editable config file behind
fn write_default_config() {
    if Config::config_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = Config::default().save() {
            tracing::warn!(error = %e, "could not write default config");
        }
    }
}

fn build_services(config: &Config, force_fixture: bool) -> Services {
    let catalog: Arc<dyn CatalogSource> = match &config.catalog_endpoint {
        Some(endpoint) if !force_fixture => Arc::new(
            CatalogClient::new(endpoint.clone())
                .with_rapidapi(config.rapidapi_key.clone(), config.rapidapi_host.clone()),
        ),
        _ => Arc::new(StubCatalog),
    };
    let summarizer: Arc<dyn Summarizer> = Arc::new(GeminiClient::new(
        config.summary_api_key(),
        config.summary_model.clone(),
    ));

    tracing::info!(
        catalog = catalog.name(),
        summarizer = summarizer.name(),
        "services ready"
    );
    Services {
        catalog,
        summarizer,
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Feed a message through update, then any follow-up messages it yields
fn dispatch(msg: Message, model: &mut Model, tasks: &mut TaskManager, services: &Services) {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let result = update::update(model, msg);
        tasks::run_command(result.command, model, tasks, services);
        next = result.msg;
    }
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut model: Model,
    services: Services,
    start: Route,
) -> Result<()> {
    let mut tasks = TaskManager::new();

    // Tachyonfx effects for animations
    let mut effects: Vec<(Effect, Rect)> = Vec::new();
    let mut last_frame_time = Instant::now();

    let term_size = terminal.size()?;
    let full_screen = Rect::new(0, 0, term_size.width, term_size.height);

    let style = ratatui::style::Style::default()
        .fg(Color::Rgb(15, 18, 30)) // BG_DARK
        .bg(Color::Rgb(8, 10, 18));

    let timer = EffectTimer::from_ms(1200, Interpolation::CubicOut);

    effects.push((
        fx::evolve_into((EvolveSymbolSet::Shaded, style), timer)
            .with_pattern(RadialPattern::center().with_transition_width(15.0)),
        full_screen,
    ));

    dispatch(Message::Navigate(start), &mut model, &mut tasks, &services);

    loop {
        let elapsed = last_frame_time.elapsed();
        last_frame_time = Instant::now();

        terminal.draw(|frame| {
            view::view(frame, &model);

            for (effect, area) in effects.iter_mut() {
                effect.process(elapsed.into(), frame.buffer_mut(), *area);
            }
        })?;

        effects.retain(|(effect, _)| !effect.done());

        if model.should_quit {
            break;
        }

        for msg in tasks::check_tasks(&mut tasks).await {
            let catalog_arrived = matches!(msg, Message::CatalogLoaded(_));
            dispatch(msg, &mut model, &mut tasks, &services);

            if catalog_arrived && model.route == Route::Home {
                // Sections start below header (3), search (3) and banner (1)
                let term_size = terminal.size()?;
                let sections = Rect::new(
                    0,
                    7,
                    term_size.width,
                    term_size.height.saturating_sub(8),
                );
                effects.push((
                    fx::sweep_in(
                        Motion::UpToDown,
                        15,
                        3,
                        Color::Rgb(15, 18, 30),
                        (600, Interpolation::QuadOut),
                    ),
                    sections,
                ));
            }
        }

        // ~60 FPS while animating
        let poll_duration = if !effects.is_empty() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };
        if let Some(msg) = events::handle_event(&model, poll_duration)? {
            dispatch(msg, &mut model, &mut tasks, &services);
        }
    }

    Ok(())
}
