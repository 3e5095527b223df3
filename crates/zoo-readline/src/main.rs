mod command;
mod view;

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use zoo_application::{
    AppError, AppServices, GuideState, ProfileSelector, Screen, ZooApp, route_question,
};
use zoo_core::config::AppConfig;
use zoo_core::poi::Catalog;
use zoo_core::user::CredentialAuthenticator;
use zoo_infrastructure::{JsonUserStateRepository, ZooPaths, load_config, save_config};
use zoo_interaction::{SendOutcome, agent_from_env};

use crate::command::{Command, commands_for};

/// Accessibility companion for the zoo: guidebook, profile-aware notes and
/// the ZooBuddy assistant in your terminal.
#[derive(Debug, Parser)]
#[command(name = "zoo-guide", version, about)]
struct Cli {
    /// Config file (default: <config dir>/zoo-guide/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session record file, overriding the config and platform default
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Skip the login screen and always start as the guest visitor
    #[arg(long)]
    guest_only: bool,

    /// Log filter directive, e.g. `debug` or `zoo_interaction=trace`
    #[arg(long)]
    log_level: Option<String>,
}

/// CLI helper for rustyline that completes, highlights and hints the
/// commands of the current screen.
#[derive(Clone)]
struct CliHelper {
    screen: Screen,
}

impl CliHelper {
    fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn commands(&self) -> &'static [&'static str] {
        commands_for(self.screen)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands()
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split(' ').next().unwrap_or_default();
        if self.commands().contains(&word) {
            Owned(format!("{}{}", word.bright_cyan(), &line[word.len()..]))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands()
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Logs go to a daily file under the data directory so they never
/// interleave with the REPL.
fn init_logging(level: Option<&str>) -> Result<WorkerGuard> {
    let logs_dir = ZooPaths::logs_dir()?;
    std::fs::create_dir_all(&logs_dir)?;

    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let appender = tracing_appender::rolling::daily(&logs_dir, "zoo-guide.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn load_or_create_config(path: Option<PathBuf>) -> Result<AppConfig> {
    let path = match path {
        Some(path) => path,
        None => ZooPaths::config_file()?,
    };
    if !path.exists() {
        match save_config(&path, &AppConfig::default()) {
            Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
            Err(e) => tracing::warn!("Could not write default config {}: {}", path.display(), e),
        }
    }
    Ok(load_config(&path))
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    if let Some(path) = &config.catalog_file {
        match Catalog::load(path) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => tracing::warn!(
                "Catalog {} rejected, using the built-in guidebook: {}",
                path.display(),
                e
            ),
        }
    }
    Ok(Catalog::builtin()?)
}

fn prompt(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "login> ",
        Screen::ProfileSelection => "profile> ",
        Screen::Guide => "zoo> ",
    }
}

fn open_guide(app: &mut ZooApp) -> Result<&mut GuideState> {
    app.guide_mut().ok_or_else(|| anyhow!("The guide is not open"))
}

/// The route question for the open place, refused before anything is shown.
fn route_prompt(guide: &GuideState) -> std::result::Result<String, AppError> {
    guide
        .selected()
        .map(|poi| route_question(&poi.name))
        .ok_or(AppError::NoSelection)
}

fn print_outcome(outcome: &SendOutcome) {
    match outcome {
        SendOutcome::Replied(message) | SendOutcome::Fallback(message) => {
            view::chat_message(message)
        }
        SendOutcome::Rejected(reason) => {
            tracing::debug!("Message not sent: {:?}", reason);
        }
    }
}

async fn dispatch(app: &mut ZooApp, command: Command) -> Result<Flow> {
    match command {
        Command::Help => view::help(app.screen()),
        Command::Quit => return Ok(Flow::Quit),
        Command::Login { username, password } => app.login(&username, &password).await?,
        Command::QuickSelect(position) => {
            let profile = pick(&ProfileSelector::quick_options(), position)?;
            app.quick_select(profile).await?;
        }
        Command::Custom => {
            app.begin_custom()?;
            view::selector(app.user(), app.selector());
        }
        Command::Toggle(position) => {
            let profile = pick(&ProfileSelector::custom_options(), position)?;
            app.toggle_custom(profile)?;
            view::selector(app.user(), app.selector());
        }
        Command::Confirm => app.confirm_custom().await?,
        Command::Cancel => {
            app.cancel_custom()?;
            view::selector(app.user(), app.selector());
        }
        Command::Filter(filter) => {
            let guide = open_guide(app)?;
            guide.set_filter(filter);
            view::poi_list(guide);
        }
        Command::List => view::poi_list(open_guide(app)?),
        Command::Show(target) => {
            let guide = open_guide(app)?;
            match target.parse::<usize>() {
                Ok(position) => guide.select_visible(position)?,
                Err(_) => guide.select(&target)?,
            };
            if let Some(detail) = guide.detail() {
                view::detail(&detail);
            }
        }
        Command::Close => {
            let guide = open_guide(app)?;
            guide.close();
            view::poi_list(guide);
        }
        Command::Route => {
            let question = route_prompt(open_guide(app)?)?;
            println!("{}", format!("> {question}").green());
            thinking();
            let outcome = app.ask_route().await?;
            print_outcome(&outcome);
        }
        Command::Map => view::map(app.catalog()),
        Command::Ask(text) => {
            println!("{}", format!("> {}", text).green());
            thinking();
            let outcome = app.ask(&text).await?;
            print_outcome(&outcome);
        }
        Command::Settings => app.change_settings().await?,
        Command::Logout => app.logout().await?,
    }
    Ok(Flow::Continue)
}

fn pick<T: Copy>(options: &[T], position: usize) -> Result<T> {
    position
        .checked_sub(1)
        .and_then(|index| options.get(index).copied())
        .ok_or_else(|| anyhow!("Pick a number between 1 and {}", options.len()))
}

fn thinking() {
    println!("{}", "ZooBuddy is thinking...".bright_black());
}

/// The main entry point for the zoo guide REPL.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_level.as_deref())?;

    // ===== Backend Initialization =====
    let config = load_or_create_config(cli.config)?;
    let guest_only = cli.guest_only || config.guest_only;
    let state_file = match cli.state_file.or_else(|| config.storage.state_file.clone()) {
        Some(path) => path,
        None => ZooPaths::state_file()?,
    };
    tracing::info!("Session record at {}", state_file.display());

    let services = AppServices {
        repository: Arc::new(JsonUserStateRepository::new(state_file).with_guest_only(guest_only)),
        authenticator: Arc::new(CredentialAuthenticator::new(config.credentials.clone())),
        catalog: Arc::new(load_catalog(&config)?),
        agent: agent_from_env(&config.assistant),
        max_context_chars: config.assistant.max_context_chars,
        guest_only,
    };
    let mut app = ZooApp::boot(services).await;

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(app.screen())));

    view::screen(&app);
    println!("{}", "Type 'help' for commands or 'quit' to exit.".bright_black());

    // ===== Main REPL Loop =====
    loop {
        let screen = app.screen();
        if let Some(helper) = rl.helper_mut() {
            helper.screen = screen;
        }

        match rl.readline(prompt(screen)) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // Passwords stay out of the history.
                if screen != Screen::Login {
                    let _ = rl.add_history_entry(trimmed);
                }

                let flow = match command::parse(screen, trimmed) {
                    Ok(command) => match dispatch(&mut app, command).await {
                        Ok(flow) => flow,
                        Err(e) => {
                            view::error(e);
                            Flow::Continue
                        }
                    },
                    Err(e) => {
                        view::error(e);
                        Flow::Continue
                    }
                };
                if flow == Flow::Quit {
                    println!("{}", "Enjoy your visit!".bright_green());
                    break;
                }
                if app.screen() != screen {
                    view::screen(&app);
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
