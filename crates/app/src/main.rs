use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::{info, warn};
use quiz_core::model::{Category, Difficulty, QuizParams};
use services::{DEFAULT_BASE_URL, QuestionSourceConfig, QuizApiClient, QuizService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidParams(quiz_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidParams(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    default_params: QuizParams,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn default_params(&self) -> QuizParams {
        self.default_params
    }
}

struct Args {
    api_key: Option<String>,
    base_url: Option<String>,
    params: QuizParams,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-key <key>] [--base-url <url>]");
    eprintln!("                      [--difficulty <easy|medium|hard>] [--category <tag>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url {DEFAULT_BASE_URL}");
    eprintln!("  --difficulty easy");
    eprintln!();
    eprintln!("Categories: Javascript, HTML, BASH, PHP");
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  QUIZ_API_KEY, QUIZ_API_BASE_URL, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            api_key: None,
            base_url: None,
            params: QuizParams::default(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-key" => parsed.api_key = Some(require_value(args, "--api-key")?),
                "--base-url" => parsed.base_url = Some(require_value(args, "--base-url")?),
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    parsed.params.difficulty = value
                        .parse::<Difficulty>()
                        .map_err(|err| ArgsError::InvalidParams(err.into()))?;
                }
                "--category" => {
                    let value = require_value(args, "--category")?;
                    parsed.params.category = Some(
                        value
                            .parse::<Category>()
                            .map_err(|err| ArgsError::InvalidParams(err.into()))?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Flags win over the environment.
    fn source_config(&self) -> Option<QuestionSourceConfig> {
        let from_env = QuestionSourceConfig::from_env();
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| from_env.as_ref().map(|config| config.api_key.clone()))?;
        let base_url = self
            .base_url
            .clone()
            .or_else(|| from_env.map(|config| config.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Some(QuestionSourceConfig::new(base_url, api_key))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let client = QuizApiClient::new(args.source_config());
    if !client.enabled() {
        warn!("QUIZ_API_KEY is not set; quizzes cannot be fetched");
    }
    let quiz_service = Arc::new(QuizService::new(Arc::new(client)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_service,
        default_params: args.params,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Devquiz")
            .with_always_on_top(false),
    );

    info!("launching Devquiz");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    // Loaded before the logger so RUST_LOG can live in .env too.
    let dotenv_loaded = dotenv::dotenv().is_ok();
    pretty_env_logger::init();
    if !dotenv_loaded {
        info!("no .env file loaded");
    }

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
