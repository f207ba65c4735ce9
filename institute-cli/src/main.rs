//! Institute CLI
//!
//! Command-line administration for the institute website: section content
//! editing and the enquiries inbox.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use institute_core::{Direction, EnquirySort, EnquiryStatus, ItemId, Section};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "institute")]
#[command(version, about = "Manage institute website content and enquiries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir + /institute)
    #[arg(long, global = true, env = "INSTITUTE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Remote content store URL
    #[arg(
        long,
        global = true,
        env = "INSTITUTE_REMOTE_URL",
        default_value = "http://localhost:8888/api"
    )]
    remote_url: String,

    /// API key for the remote content store
    #[arg(long, global = true, env = "INSTITUTE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Work from the local cache and bundled defaults only
    #[arg(long, global = true)]
    offline: bool,

    /// Remote call timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout: u64,

    /// Retries for failed remote calls
    #[arg(long, global = true, default_value_t = 0)]
    retries: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a section document (or a summary of all sections)
    Show {
        /// Section key (about, whyus, faq, footer, contact, courses, testimonials)
        section: Option<Section>,

        /// Print the document as compact JSON
        #[arg(long)]
        raw: bool,
    },

    /// Render a section as plain text
    Preview {
        /// Section key
        section: Section,
    },

    /// Replace a section document with the contents of a JSON file
    Save {
        /// Section key
        section: Section,

        /// JSON file holding the new document
        file: PathBuf,
    },

    /// Set a single field (dotted path for nested fields)
    Set {
        /// Section key
        section: Section,

        /// Field path, e.g. "title" or "address.line1"
        path: String,

        /// New value (parsed as JSON when possible, otherwise a string)
        value: String,
    },

    /// Edit a section's item lists
    #[command(subcommand)]
    Item(ItemCommands),

    /// Drop the locally cached copy of a section (or all sections)
    ClearCache {
        /// Section key (all sections when omitted)
        section: Option<Section>,
    },

    /// Work through enquiries
    #[command(subcommand)]
    Enquiries(EnquiryCommands),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ItemCommands {
    /// List items
    List {
        section: Section,
        /// List field (defaults to the section's main list)
        #[arg(long)]
        list: Option<String>,
    },

    /// Add an item from a JSON object
    Add {
        section: Section,
        /// Item as JSON, e.g. '{"question": "...", "answer": "..."}'
        item: String,
        #[arg(long)]
        list: Option<String>,
    },

    /// Replace the item with the given id (number or slug)
    Update {
        section: Section,
        id: ItemId,
        /// Item as JSON
        item: String,
        #[arg(long)]
        list: Option<String>,
    },

    /// Remove the item with the given id (number or slug)
    Remove {
        section: Section,
        id: ItemId,
        #[arg(long)]
        list: Option<String>,
    },

    /// Move the item at a position (1-based) up or down
    Move {
        section: Section,
        position: usize,
        #[arg(value_enum)]
        direction: MoveDirection,
        #[arg(long)]
        list: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

#[derive(Subcommand)]
enum EnquiryCommands {
    /// List enquiries
    List {
        /// Only this status (new, contacted, converted, archived)
        #[arg(long)]
        status: Option<EnquiryStatus>,

        /// Search name, email, course and message
        #[arg(long)]
        search: Option<String>,

        /// Sort column (created_at, name, email, course, status)
        #[arg(long, default_value = "created_at")]
        sort: EnquirySort,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
    },

    /// Record an enquiry
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        course: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Change the status of an enquiry
    Status {
        id: i64,
        status: EnquiryStatus,
    },

    /// Delete an enquiry
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Export enquiries as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[arg(long)]
        status: Option<EnquiryStatus>,

        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("institute")
    });

    let config = CliConfig {
        data_dir,
        remote_url: cli.remote_url,
        api_key: cli.api_key,
        offline: cli.offline,
        timeout_secs: cli.timeout,
        retries: cli.retries,
    };

    match cli.command {
        Commands::Show { section, raw } => match section {
            Some(section) => commands::content::show(&config, section, raw).await?,
            None => commands::content::summary(&config).await?,
        },
        Commands::Preview { section } => commands::content::preview(&config, section).await?,
        Commands::Save { section, file } => {
            commands::content::save(&config, section, &file).await?;
        }
        Commands::Set {
            section,
            path,
            value,
        } => {
            commands::content::set(&config, section, &path, &value).await?;
        }
        Commands::Item(cmd) => match cmd {
            ItemCommands::List { section, list } => {
                commands::items::list(&config, section, list.as_deref()).await?;
            }
            ItemCommands::Add {
                section,
                item,
                list,
            } => {
                commands::items::add(&config, section, list.as_deref(), &item).await?;
            }
            ItemCommands::Update {
                section,
                id,
                item,
                list,
            } => {
                commands::items::update(&config, section, list.as_deref(), &id, &item).await?;
            }
            ItemCommands::Remove { section, id, list } => {
                commands::items::remove(&config, section, list.as_deref(), &id).await?;
            }
            ItemCommands::Move {
                section,
                position,
                direction,
                list,
            } => {
                commands::items::move_item(
                    &config,
                    section,
                    list.as_deref(),
                    position,
                    direction.into(),
                )
                .await?;
            }
        },
        Commands::ClearCache { section } => commands::content::clear_cache(&config, section)?,
        Commands::Enquiries(cmd) => match cmd {
            EnquiryCommands::List {
                status,
                search,
                sort,
                asc,
            } => {
                commands::enquiries::list(&config, status, search, sort, asc)?;
            }
            EnquiryCommands::Add {
                name,
                email,
                phone,
                course,
                message,
            } => {
                commands::enquiries::add(
                    &config,
                    institute_core::NewEnquiry {
                        name,
                        email,
                        phone,
                        course,
                        message,
                    },
                )?;
            }
            EnquiryCommands::Status { id, status } => {
                commands::enquiries::set_status(&config, id, status)?;
            }
            EnquiryCommands::Delete { id, yes } => commands::enquiries::delete(&config, id, yes)?,
            EnquiryCommands::Export {
                output,
                status,
                search,
            } => {
                commands::enquiries::export(&config, output.as_deref(), status, search)?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "institute", &mut io::stdout());
        }
    }

    Ok(())
}
