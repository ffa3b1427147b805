use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Language;
use services::{AppServices, Clock};
use ui::{App, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLanguage { raw: String },
    InvalidSeed { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLanguage { raw } => write!(
                f,
                "unsupported language: {raw} (expected one of: {})",
                Language::ALL.map(Language::code).join(", ")
            ),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

fn parse_language(raw: String) -> Result<Language, ArgsError> {
    Language::from_code(&raw).ok_or(ArgsError::InvalidLanguage { raw })
}

/// Environment values never abort startup: unknown codes use the default.
fn env_language(raw: &str) -> Language {
    Language::from_code(raw).unwrap_or_else(|| {
        let fallback = Language::default();
        tracing::warn!(raw, %fallback, "unsupported QUIZ_LANG, using default language");
        fallback
    })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>] [--lang <code>] [--seed <u64>]");
    eprintln!("  cargo run -p app -- lang <code> [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --db sqlite://quiz.sqlite3");
    eprintln!("  --lang <stored preference, else sk>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_LANG, QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Lang,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "lang" => Some(Self::Lang),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    language: Option<Language>,
    seed: Option<u64>,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env("QUIZ_DB_URL").map_or_else(
            || "sqlite://quiz.sqlite3".into(),
            normalize_sqlite_url,
        );
        let mut language = env("QUIZ_LANG").map(|raw| env_language(&raw));
        let mut seed = env("QUIZ_SEED")
            .map(|raw| raw.parse::<u64>().map_err(|_| ArgsError::InvalidSeed { raw }))
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--lang" => {
                    language = Some(parse_language(require_value(args, "--lang")?)?);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            language,
            seed,
        })
    }

    /// `lang <code> [--db <url>]`: the code is positional.
    fn parse_lang(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let code = require_value(args, "lang")?;
        let language = parse_language(code)?;
        let parsed = Self::parse(args, env)?;
        Ok(Self {
            language: Some(language),
            ..parsed
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let env = |key: &str| std::env::var(key).ok();
    let mut iter = argv.into_iter();
    let parsed = match cmd {
        Command::Ui => Args::parse(&mut iter, env),
        Command::Lang => Args::parse_lang(&mut iter, env),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let mut services = AppServices::new_sqlite(&parsed.db_url, Clock::system())
        .await?
        .with_seed(parsed.seed);

    // An explicit language becomes the stored preference.
    if let Some(language) = parsed.language {
        services.app_settings().set_language(language).await?;
        services = services.with_language(language);
    }

    match cmd {
        Command::Lang => {
            tracing::info!(language = %services.language(), "language preference updated");
            Ok(())
        }
        Command::Ui => {
            tracing::info!(
                language = %services.language(),
                seed = ?parsed.seed,
                db = %parsed.db_url,
                "launching quiz"
            );
            let context = build_app_context(services);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("AI Quiz")
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

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "quiz app failed");
        std::process::exit(2);
    }
}
