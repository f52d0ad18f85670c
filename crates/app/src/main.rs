mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learner_core::{Catalog, ResourceLibrary};
use services::{AppServices, Clock, CodeRunner, gateway};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui { dark_mode: bool },
    Curriculum,
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui [--light]   # launch the desktop app (default)");
    eprintln!("  cargo run -p app -- curriculum     # list modules and lessons");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  {}, {}, {}",
        gateway::API_KEY_VAR,
        gateway::BASE_URL_VAR,
        gateway::MODEL_VAR
    );
    eprintln!("  {} (log filter, default: info)", logging::LOG_ENV_VAR);
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, ArgsError> {
    let mut args = args.into_iter().peekable();

    let is_flag = |arg: &String| arg.starts_with('-');
    let subcommand = match args.next_if(|arg| !is_flag(arg)) {
        None => "ui".to_string(),
        Some(cmd) => cmd,
    };

    match subcommand.as_str() {
        "ui" => {
            let mut dark_mode = true;
            for arg in args {
                match arg.as_str() {
                    "--light" => dark_mode = false,
                    "--help" | "-h" => return Ok(Command::Help),
                    _ => return Err(ArgsError::UnknownArg(arg)),
                }
            }
            Ok(Command::Ui { dark_mode })
        }
        "curriculum" => match args.next() {
            None => Ok(Command::Curriculum),
            Some(arg) if arg == "--help" || arg == "-h" => Ok(Command::Help),
            Some(arg) => Err(ArgsError::UnknownArg(arg)),
        },
        _ => Err(ArgsError::UnknownCommand(subcommand)),
    }
}

struct DesktopApp {
    services: AppServices,
    dark_mode: bool,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn resources(&self) -> Arc<ResourceLibrary> {
        self.services.resources()
    }

    fn runner(&self) -> Arc<CodeRunner> {
        self.services.runner()
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn start_in_dark_mode(&self) -> bool {
        self.dark_mode
    }
}

fn curriculum_listing(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (m, module) in catalog.modules().iter().enumerate() {
        out.push_str(&format!(
            "{}. {} [{}] ({} lessons)\n",
            m + 1,
            module.title(),
            module.id(),
            module.lesson_count()
        ));
        for (l, lesson) in module.lessons().iter().enumerate() {
            out.push_str(&format!(
                "   {}.{} {} [{}] {}\n",
                m + 1,
                l + 1,
                lesson.title(),
                lesson.id(),
                lesson.difficulty().label()
            ));
        }
    }
    out.push_str(&format!(
        "{} modules, {} exercises\n",
        catalog.modules().len(),
        catalog.total_lessons()
    ));
    out
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = parse_args(std::env::args().skip(1)).inspect_err(|err| {
        eprintln!("{err}");
        print_usage();
    })?;

    match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Curriculum => {
            let catalog = Catalog::builtin()?;
            print!("{}", curriculum_listing(&catalog));
            Ok(())
        }
        Command::Ui { dark_mode } => {
            logging::init();
            let services = AppServices::from_env()?;
            tracing::info!(dark_mode, "launching desktop app");

            let app = DesktopApp {
                services,
                dark_mode,
            };
            let context = build_app_context(Arc::new(app));

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Python Learner")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
