use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use sdui_runtime::conditional::ConditionalEvaluator;
use sdui_runtime::config::{Config, LayoutSourceKind, LayoutsConfig};
use sdui_runtime::layout::{FixtureLayoutSource, HttpLayoutSource, LayoutSource};
use sdui_runtime::render::{resolve_snapshot, OutlineRenderer, Renderer};
use sdui_runtime::session::{Effect, ScreenSession, SessionDriver, SessionHandle};
use sdui_runtime::telemetry::init_tracing;
use sdui_runtime::ui::screen::ScreenStatus;
use sdui_runtime::value::PrimitiveValue;

#[derive(Parser)]
#[command(name = "sdui")]
#[command(about = "Headless server-driven UI runtime", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/sdui-runtime/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Serve layouts from this directory of <layout_id>.json files
    #[arg(long, global = true, conflicts_with = "base_url")]
    fixtures: Option<PathBuf>,

    /// Fetch layouts from this layout server
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log filter, e.g. "debug" or "sdui_runtime::session=trace"
    #[arg(long, global = true)]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a layout and print its outline
    Render {
        /// Layout id (default: session.initial_layout)
        layout: Option<String>,
    },

    /// Open a layout, apply steps in order, and print the final screen
    Run {
        /// Layout id (default: session.initial_layout)
        layout: Option<String>,

        /// click:<component>[:<event>] | set:<path>=<json> | data:<json> | back | refresh
        #[arg(long = "step")]
        steps: Vec<Step>,
    },
}

/// One scripted user or server event.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    Click { component: String, event: String },
    Set { path: String, value: PrimitiveValue },
    Data { payload: PrimitiveValue },
    Back,
    Refresh,
}

const DEFAULT_EVENT: &str = "onClick";

impl FromStr for Step {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "back" => return Ok(Step::Back),
            "refresh" => return Ok(Step::Refresh),
            _ => {}
        }

        let (kind, rest) = raw
            .split_once(':')
            .ok_or_else(|| format!("unknown step '{}'", raw))?;
        match kind {
            "click" => {
                let (component, event) = rest.split_once(':').unwrap_or((rest, DEFAULT_EVENT));
                if component.is_empty() {
                    return Err("click step needs a component id".to_string());
                }
                Ok(Step::Click {
                    component: component.to_string(),
                    event: event.to_string(),
                })
            }
            "set" => {
                let (path, json) = rest
                    .split_once('=')
                    .ok_or_else(|| format!("set step '{}' needs <path>=<json>", raw))?;
                let value = PrimitiveValue::from_json_str(json)
                    .map_err(|e| format!("set step value is not JSON: {}", e))?;
                Ok(Step::Set {
                    path: path.to_string(),
                    value,
                })
            }
            "data" => {
                let payload = PrimitiveValue::from_json_str(rest)
                    .map_err(|e| format!("data step payload is not JSON: {}", e))?;
                Ok(Step::Data { payload })
            }
            _ => Err(format!("unknown step '{}'", raw)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging.filter);

    let source = build_source(&config.layouts)?;
    let initial = config.session.initial_layout.clone();
    let mut driver = SessionDriver::spawn(ScreenSession::new(config.session.clone()), source);
    let mut effects = driver
        .take_effects()
        .context("effect stream already taken")?;
    let handle = driver.handle();

    let (layout, steps) = match cli.command {
        Commands::Render { layout } => (layout.unwrap_or(initial), Vec::new()),
        Commands::Run { layout, steps } => (layout.unwrap_or(initial), steps),
    };

    handle.deep_link(&layout).await?;
    drain_effects(&handle, &mut effects).await?;

    for step in steps {
        tracing::debug!(step = ?step, "Applying step");
        apply_step(&handle, step).await?;
        drain_effects(&handle, &mut effects).await?;
    }

    print_status(&handle.status())?;
    driver.shutdown();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(dir) = &cli.fixtures {
        config.layouts.source = LayoutSourceKind::Fixtures;
        config.layouts.fixtures_dir = dir.clone();
    }
    if let Some(url) = &cli.base_url {
        config.layouts.source = LayoutSourceKind::Http;
        config.layouts.base_url = url.clone();
    }
    if let Some(filter) = &cli.log {
        config.logging.filter = filter.clone();
    }

    config.validate()?;
    Ok(config)
}

fn build_source(config: &LayoutsConfig) -> Result<Arc<dyn LayoutSource>> {
    let source: Arc<dyn LayoutSource> = match config.source {
        LayoutSourceKind::Fixtures => Arc::new(FixtureLayoutSource::from_dir(&config.fixtures_dir)?),
        LayoutSourceKind::Http => Arc::new(HttpLayoutSource::new(config)?),
    };
    Ok(source)
}

async fn apply_step(handle: &SessionHandle, step: Step) -> Result<()> {
    match step {
        Step::Back => {
            handle.back().await?;
        }
        Step::Refresh => {
            handle.refresh().await?;
        }
        Step::Click { component, event } => {
            let screen = shown_screen(handle)?;
            handle.interact(&screen, &component, &event).await?;
        }
        Step::Set { path, value } => {
            let screen = shown_screen(handle)?;
            handle.update_state(&screen, &path, value).await?;
        }
        Step::Data { payload } => {
            let screen = shown_screen(handle)?;
            handle.data_arrived(&screen, payload).await?;
        }
    }
    Ok(())
}

fn shown_screen(handle: &SessionHandle) -> Result<String> {
    match handle.status() {
        ScreenStatus::Success(snapshot) => Ok(snapshot.screen_id.clone()),
        ScreenStatus::Loading => bail!("no screen is shown yet"),
        ScreenStatus::Error { message, .. } => bail!("no screen is shown: {}", message),
    }
}

/// Deliver queued effects; navigation effects are followed immediately.
async fn drain_effects(
    handle: &SessionHandle,
    effects: &mut mpsc::UnboundedReceiver<Effect>,
) -> Result<()> {
    while let Ok(effect) = effects.try_recv() {
        match effect {
            Effect::Navigate { target } => {
                println!("-> navigate {}", target);
                handle.load_layout(&target).await?;
            }
            Effect::ShowMessage { message } => println!("!  {}", message),
        }
    }
    Ok(())
}

fn print_status(status: &ScreenStatus) -> Result<()> {
    match status {
        ScreenStatus::Loading => println!("Loading..."),
        ScreenStatus::Error {
            message,
            can_go_back,
        } => {
            println!("Error: {}", message);
            if *can_go_back {
                println!("(back available)");
            }
        }
        ScreenStatus::Success(snapshot) => {
            let resolved = resolve_snapshot(snapshot, &ConditionalEvaluator::default())?;
            print!("{}", OutlineRenderer::default().render(&resolved));
            println!();
            println!("back-stack: {}", snapshot.back_stack.join(" > "));
        }
    }
    Ok(())
}
