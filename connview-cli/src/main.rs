//! `ConnView` CLI - Command-line interface for the `ConnView` catalog
//!
//! Provides commands for listing, searching, and deleting connection
//! profiles stored in a TOML catalog file, using the same catalog core the
//! graphical surface embeds.

use std::fs;
use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use connview_core::{
    Catalog, CatalogRow, Confirmation, GroupHierarchy, Layout, MemoryProfileStore, PresetPrompt,
    ProfileRecord, ProfileStore, SortColumn, SortDirection, StoreError, StoreResult, UserPrompt,
};

/// `ConnView` command-line interface for browsing connection profiles
#[derive(Parser)]
#[command(name = "connview-cli")]
#[command(author, version, about = "ConnView command-line interface")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the catalog file
    #[arg(short, long, global = true, default_value = "profiles.toml")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// List all profiles as a flat catalog
    #[command(about = "List all profiles in the catalog")]
    List {
        /// Column to sort by
        #[arg(short, long, value_enum, default_value = "name")]
        sort: SortArg,

        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,
    },

    /// Show the catalog grouped into its folder hierarchy
    #[command(about = "Show the catalog in tree layout")]
    Tree,

    /// Filter the catalog with a live query
    #[command(about = "List the profiles matching a query")]
    Search {
        /// Query text (substring or comma-separated label tokens)
        query: String,
    },

    /// Delete a profile by its filename key
    #[command(about = "Delete a profile from the catalog")]
    Delete {
        /// Filename key of the profile
        filename: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Sort column argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Group,
    Server,
    Protocol,
    LastUsed,
}

impl From<SortArg> for SortColumn {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Group => Self::Group,
            SortArg::Server => Self::Server,
            SortArg::Protocol => Self::Protocol,
            SortArg::LastUsed => Self::LastUsed,
        }
    }
}

/// On-disk shape of the catalog file
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    /// Slash-separated folder paths for the group hierarchy
    #[serde(default)]
    groups: Vec<String>,
    /// Saved profiles
    #[serde(default)]
    profiles: Vec<ProfileRecord>,
}

/// Profile store backed by a TOML catalog file
///
/// The file is read once at startup; deletions are written back
/// immediately.
struct FileProfileStore {
    path: PathBuf,
    groups: Vec<String>,
    inner: MemoryProfileStore,
}

impl FileProfileStore {
    fn open(path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let file: CatalogFile = if path.exists() {
            toml::from_str(&fs::read_to_string(&path)?)?
        } else {
            CatalogFile::default()
        };

        let mut inner = MemoryProfileStore::new();
        for group in &file.groups {
            inner.add_group_path(group.clone());
        }
        for profile in file.profiles {
            inner.insert(profile);
        }
        Ok(Self {
            path,
            groups: file.groups,
            inner,
        })
    }

    fn persist(&self) -> StoreResult<()> {
        let file = CatalogFile {
            groups: self.groups.clone(),
            profiles: self.inner.enumerate()?,
        };
        let content = toml::to_string_pretty(&file).map_err(|e| StoreError::Delete {
            filename: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(|e| StoreError::Delete {
            filename: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl ProfileStore for FileProfileStore {
    fn enumerate(&self) -> StoreResult<Vec<ProfileRecord>> {
        self.inner.enumerate()
    }

    fn group_hierarchy(&self) -> GroupHierarchy {
        self.inner.group_hierarchy()
    }

    fn load(&self, filename: &str) -> StoreResult<ProfileRecord> {
        self.inner.load(filename)
    }

    fn delete(&mut self, filename: &str) -> StoreResult<()> {
        self.inner.delete(filename)?;
        self.persist()
    }
}

/// Interactive prompt reading answers from stdin
struct StdinPrompt;

impl UserPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> Confirmation {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return Confirmation::Cancel;
        }
        match answer.trim() {
            "y" | "Y" | "yes" => Confirmation::Yes,
            _ => Confirmation::No,
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

fn print_rows(rows: &[&CatalogRow]) {
    for row in rows {
        let indent = "  ".repeat(row.depth());
        match row {
            CatalogRow::Folder(folder) => println!("{indent}{}/", folder.name),
            CatalogRow::Profile(profile) => {
                let record = &profile.record;
                println!(
                    "{indent}{}  [{}]  {}",
                    record.name, record.protocol, record.server
                );
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileProfileStore::open(cli.catalog)?;
    let mut catalog = Catalog::new(store, connview_core::CatalogSettings::default());

    match cli.command {
        Commands::List { sort, descending } => {
            let direction = if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            catalog.set_sort(sort.into(), direction)?;
            catalog.reload();
            print_rows(&catalog.visible_rows());
            println!("Total {} items.", catalog.item_count());
        }
        Commands::Tree => {
            catalog.set_layout(Layout::Tree)?;
            catalog.reload();
            print_rows(&catalog.visible_rows());
            println!("Total {} items.", catalog.item_count());
        }
        Commands::Search { query } => {
            catalog.reload();
            catalog.set_query(query);
            print_rows(&catalog.visible_rows());
        }
        Commands::Delete { filename, yes } => {
            catalog.reload();
            catalog.select(Some(filename.as_str()));
            if catalog.selected_identity().is_none() {
                return Err(format!("no profile named {filename}").into());
            }
            if yes {
                catalog.delete_selected(&PresetPrompt::yes());
            } else {
                catalog.delete_selected(&StdinPrompt);
            }
            println!("Total {} items.", catalog.item_count());
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
