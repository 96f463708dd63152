use std::fmt;
use std::sync::Arc;

use lesson_core::model::TerminalOutcome;
use log::info;
use services::{
    HttpLessonSource, LessonSourceConfig, LoggingPlayer, RandomOutcome, SessionStore,
    SimulatorConfig, SubmissionSimulator,
};
use ui::vm::{LessonListVm, PracticeHubVm, map_upload_sheet};
use ui::{AppContext, Route, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingTitle,
    UnknownArg(String),
    UnknownLesson { title: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingTitle => write!(f, "submit requires --title <lesson title>"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownLesson { title } => write!(f, "no lesson titled {title:?}"),
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

struct TerminalApp {
    store: Arc<SessionStore>,
}

impl UiApp for TerminalApp {
    fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.store)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- list   [--url <endpoint>]");
    eprintln!(
        "  cargo run -p app -- submit --title <lesson title> [--notes <text>] [--url <endpoint>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --url {}", services::DEFAULT_LESSONS_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LESSONS_URL, LESSONS_UPLOAD_INTERVAL_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    List,
    Submit,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "list" => Some(Self::List),
            "submit" => Some(Self::Submit),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    url: Option<String>,
    title: Option<String>,
    notes: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--url" => parsed.url = Some(require_value(args, "--url")?),
                "--title" => parsed.title = Some(require_value(args, "--title")?),
                "--notes" => parsed.notes = require_value(args, "--notes")?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }
}

fn build_store(url: Option<&str>) -> Result<Arc<SessionStore>, Box<dyn std::error::Error>> {
    let config = match url {
        Some(url) => LessonSourceConfig::new(url)?,
        None => LessonSourceConfig::from_env()?,
    };
    info!("lessons endpoint: {}", config.endpoint);

    let simulator = SubmissionSimulator::new(SimulatorConfig::from_env(), Arc::new(RandomOutcome));
    let store = SessionStore::new(
        Arc::new(HttpLessonSource::new(config)),
        simulator,
        Arc::new(LoggingPlayer::new()),
    );
    Ok(Arc::new(store))
}

fn print_lessons(ctx: &AppContext) {
    match ctx.lesson_list() {
        LessonListVm::Loading => println!("Loading lessons..."),
        LessonListVm::Error { message } => println!("{message}"),
        LessonListVm::Lessons(cards) => {
            for card in cards {
                println!("{}  ({})", card.title, card.mentor);
            }
        }
    }
}

fn print_practice_hub(ctx: &AppContext) {
    match ctx.practice_hub() {
        PracticeHubVm::Empty { message } => println!("{message}"),
        PracticeHubVm::Cards(cards) => {
            for card in cards {
                println!("{} with {}", card.title, card.mentor);
                if let Some(notes) = card.notes {
                    println!("  Your Notes: {notes}");
                }
                println!("  {}", card.submitted_label);
            }
        }
    }
}

async fn submit(
    ctx: &AppContext,
    title: &str,
    notes: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let LessonListVm::Error { message } = ctx.lesson_list() {
        println!("{message}");
        return Ok(());
    }

    let route = Route::Details {
        title: title.to_string(),
    };
    let lesson = ctx.lesson_for(&route).ok_or_else(|| ArgsError::UnknownLesson {
        title: title.to_string(),
    })?;
    if let Some(detail) = ctx.lesson_detail(&route) {
        println!("{} {}", detail.title, detail.byline);
    }
    ctx.play(&route);

    let mut events = ctx.session_store().upload_events();
    let printer = tokio::spawn(async move {
        while let Ok(state) = events.recv().await {
            if let Some(label) = map_upload_sheet(state).status_label {
                println!("{label}");
            }
            if state.is_terminal() {
                break;
            }
        }
    });

    let result = ctx.submit(lesson, notes).await;
    match result {
        Ok(outcome) => {
            printer.await?;
            if outcome == TerminalOutcome::Succeeded {
                print_practice_hub(ctx);
            }
            ctx.dismiss_upload_sheet();
            Ok(())
        }
        Err(err) => {
            printer.abort();
            Err(err.into())
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::List,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::List,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if cmd == Command::Submit && parsed.title.is_none() {
        print_usage();
        return Err(ArgsError::MissingTitle.into());
    }

    let store = build_store(parsed.url.as_deref())?;
    let app: Arc<dyn UiApp> = Arc::new(TerminalApp { store });
    let ctx = build_app_context(&app);

    ctx.session_store().initialize().await;

    match cmd {
        Command::List => {
            print_lessons(&ctx);
            Ok(())
        }
        Command::Submit => {
            let title = parsed.title.unwrap_or_default();
            submit(&ctx, &title, &parsed.notes).await
        }
    }
}

#[tokio::main]
async fn main() {
    let level = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(level).init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
