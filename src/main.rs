//! NoteBuddy CLI
//!
//! Command-line front end for the notes backend:
//! - Browse the latest notes and the leaderboard
//! - Search and open notes
//! - Contribute a note for review
//! - Review pending uploads as an admin

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notebuddy::config::{generate_default_config, Config, LoggingConfig};
use notebuddy::i18n::{Key, Language, Localizer};
use notebuddy::models::{Contributor, Credentials, Note, PendingUpload};
use notebuddy::prefs::FileStore;
use notebuddy::views::{
    download_url, load_home, ranked, upload, AdminConsole, DocumentViewer, ReviewPrompt,
    SearchState, UploadFlow, UploadForm, UploadOutcome,
};
use notebuddy::{HttpClient, NotesApi};

#[derive(Parser)]
#[command(name = "notebuddy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse, search and contribute study notes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file to load instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Latest notes and top contributors
    Home {
        /// Number of notes to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search notes
    Search {
        /// Search text (empty lists everything)
        query: Option<String>,
        /// How many result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Show one note with its preview and download links
    Note {
        id: String,
    },

    /// Contributor rankings
    Leaderboard,

    /// Submit a note for review
    Upload {
        #[arg(long)]
        title: String,
        /// Public Google Drive link to the PDF
        #[arg(long)]
        drive_link: String,
        #[arg(long, default_value = "")]
        class_level: String,
        #[arg(long, default_value = "")]
        college: String,
        #[arg(long, default_value = "")]
        subject: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        pages: String,
        /// Your name, shown as the contributor
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Review pending uploads
    Admin {
        #[arg(long)]
        username: String,
        #[arg(long, env = "NOTEBUDDY_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Show or set the interface language
    Lang {
        /// Language code (en, ne)
        code: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// List uploads waiting for review
    Pending,
    /// Accept an upload and award points
    Accept {
        id: String,
        #[arg(long)]
        points: String,
    },
    /// Reject an upload
    Reject {
        id: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.backend.url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(backend = %config.backend.url, "Starting");

    let store = FileStore::default_location()
        .unwrap_or_else(|| FileStore::new("notebuddy-preferences.toml"));
    let mut localizer = Localizer::new(store);

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }

        Commands::Lang { code } => match code {
            Some(code) => {
                let language: Language = code.parse()?;
                localizer
                    .set(language)
                    .context("Language switched but could not be saved")?;
                println!("{}: {}", localizer.t(Key::Language), language.native_name());
            }
            None => {
                let current = localizer.language();
                for language in Language::ALL {
                    let marker = if language == current { "*" } else { " " };
                    println!("{} {:<4} {}", marker, language.code(), language.native_name());
                }
            }
        },

        command => {
            let api = HttpClient::new(&config.backend)?;
            run(&api, &config, &localizer, cli.format, command).await?;
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notebuddy={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(
    api: &HttpClient,
    config: &Config,
    localizer: &Localizer<FileStore>,
    format: OutputFormat,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Home { limit } => {
            let feed = load_home(api, limit.unwrap_or(config.backend.home_limit)).await;

            match format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "notes": feed.notes.as_ref().ok(),
                        "contributors": feed.contributors.as_ref().ok(),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Table => {
                    println!("NoteBuddy - {}", localizer.t(Key::Tagline));
                    println!();
                    println!("{}", localizer.t(Key::FeaturedContributors));
                    match &feed.contributors {
                        Ok(board) => print_leaderboard(board, localizer),
                        Err(e) => eprintln!("  {}", e.user_message()),
                    }
                    println!();
                    println!("{}", localizer.t(Key::LatestUploads));
                    match &feed.notes {
                        Ok(notes) => print_notes(notes, localizer),
                        Err(e) => eprintln!("  {}", e.user_message()),
                    }
                }
            }

            // Partial results were shown above; still report failure
            if let (Err(e), _) | (_, Err(e)) = (&feed.notes, &feed.contributors) {
                bail!("{}", e);
            }
        }

        Commands::Search { query, pages } => {
            let mut state = SearchState::new(config.backend.page_size);
            state.set_query(query.unwrap_or_default());

            for page in 0..pages.max(1) {
                if page > 0 && !state.has_more() {
                    break;
                }
                let Some(request) = state.begin(page == 0) else {
                    break;
                };
                match api.list_notes(&request.query).await {
                    Ok(items) => {
                        state.complete(&request, items);
                    }
                    Err(e) => {
                        state.fail(&request);
                        return Err(e.into());
                    }
                }
            }

            match format {
                OutputFormat::Json => print_json(&state.results())?,
                OutputFormat::Table => {
                    if state.results().is_empty() {
                        println!("{}", localizer.t(Key::NoResults));
                    } else {
                        print_notes(state.results(), localizer);
                        if state.has_more() {
                            println!();
                            println!("({} with --pages {})", localizer.t(Key::LoadMore), pages + 1);
                        }
                    }
                }
            }
        }

        Commands::Note { id } => {
            let note = api.get_note(&id).await?;

            match format {
                OutputFormat::Json => print_json(&note)?,
                OutputFormat::Table => print_note_detail(&note, localizer),
            }
        }

        Commands::Leaderboard => {
            let board = api.leaderboard().await?;

            match format {
                OutputFormat::Json => print_json(&board)?,
                OutputFormat::Table => {
                    println!("{}", localizer.t(Key::Leaderboard));
                    print_leaderboard(&board, localizer);
                }
            }
        }

        Commands::Upload {
            title,
            drive_link,
            class_level,
            college,
            subject,
            tags,
            pages,
            name,
        } => {
            let mut flow = UploadFlow::with_form(UploadForm {
                title,
                class_level,
                college,
                subject,
                tags,
                pages,
                drive_link,
                contributor_name: name,
            });
            flow.open();

            match upload::submit(api, &mut flow).await? {
                Some(UploadOutcome::Sent) => println!("{}", localizer.t(Key::UploadSuccess)),
                Some(UploadOutcome::Rejected(detail)) => bail!("Upload rejected: {}", detail),
                Some(UploadOutcome::NetworkFailed(message)) => bail!("{}", message),
                None => {}
            }
        }

        Commands::Admin {
            username,
            password,
            action,
        } => {
            let mut console = AdminConsole::new(api);
            console
                .login(&Credentials::new(username, password))
                .await
                .context("Admin login failed")?;

            match action {
                AdminAction::Pending => match format {
                    OutputFormat::Json => print_json(&console.state().pending())?,
                    OutputFormat::Table => print_pending(console.state().pending(), localizer),
                },
                AdminAction::Accept { id, points } => {
                    let decision = ReviewPrompt {
                        input: points,
                        ..ReviewPrompt::accept(id.as_str())
                    }
                    .confirm()?;
                    console.decide(&id, &decision).await?;
                    println!("{}: {}", localizer.t(Key::UploadAccepted), id);
                }
                AdminAction::Reject { id, reason } => {
                    let decision = ReviewPrompt {
                        input: reason,
                        ..ReviewPrompt::reject(id.as_str())
                    }
                    .confirm()?;
                    console.decide(&id, &decision).await?;
                    println!("{}: {}", localizer.t(Key::UploadRejected), id);
                }
            }
        }

        // Handled in main without a backend
        Commands::Lang { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_notes(notes: &[Note], localizer: &Localizer<FileStore>) {
    if notes.is_empty() {
        println!("  {}", localizer.t(Key::NoResults));
        return;
    }

    println!("{:<26} {:<36} {}", "ID", "Title", "Details");
    println!("{}", "-".repeat(90));

    for note in notes {
        println!(
            "{:<26} {:<36} {}",
            truncate(&note.id, 26),
            truncate(&note.title, 36),
            note.summary_line()
        );
    }
}

fn print_note_detail(note: &Note, localizer: &Localizer<FileStore>) {
    let viewer = DocumentViewer::for_link(note.pages, &note.drive_link);

    println!("{}", note.title);
    println!("{}", note.summary_line());
    if !note.tags.is_empty() {
        println!("#{}", note.tags.join(" #"));
    }
    println!();
    println!("{}: {}", localizer.t(Key::Page), viewer.total_pages());
    if let Some(name) = &note.contributor_name {
        println!("{}: {}", localizer.t(Key::UploadedBy), name);
    }
    match (viewer.preview_url(&note.drive_link), download_url(&note.drive_link)) {
        (Some(preview), Some(download)) => {
            println!("{}: {}", localizer.t(Key::OpenDocument), preview);
            println!("Download: {}", download);
        }
        _ => println!("{}", localizer.t(Key::PreviewUnavailable)),
    }
}

fn print_leaderboard(board: &[Contributor], localizer: &Localizer<FileStore>) {
    if board.is_empty() {
        println!("  {}", localizer.t(Key::NoResults));
        return;
    }

    for entry in ranked(board) {
        let crown = if entry.is_leader() { " 👑" } else { "" };
        println!(
            "{:>3}. {:<28} {} {}{}",
            entry.rank,
            entry.contributor.display_name(),
            entry.contributor.points,
            localizer.t(Key::PointsShort),
            crown
        );
    }
}

fn print_pending(pending: &[PendingUpload], localizer: &Localizer<FileStore>) {
    if pending.is_empty() {
        println!("{}", localizer.t(Key::NoPending));
        return;
    }

    println!("{:<26} {:<32} {:<14} {}", "ID", "Title", "Subject", "Link");
    println!("{}", "-".repeat(100));

    for item in pending {
        println!(
            "{:<26} {:<32} {:<14} {}",
            truncate(&item.id, 26),
            truncate(&item.title, 32),
            truncate(&item.subject, 14),
            item.drive_link.as_deref().unwrap_or("-")
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
