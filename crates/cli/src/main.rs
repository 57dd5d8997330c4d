// FjordViz CLI - headless session snapshot operations

mod exit_codes;
mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use fjordviz_config::session::SessionSnapshot;
use fjordviz_engine::registry::SettingRegistry;

use exit_codes::{session_exit_code, EXIT_ERROR, EXIT_SNAPSHOT_INVALID, EXIT_SUCCESS};
use snapshot::{has_bad_values, validate, Finding};

#[derive(Parser)]
#[command(name = "fviz")]
#[command(about = "FjordViz session tooling (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and validate saved session snapshots
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    /// List the setting kinds this build knows about
    Kinds,
}

#[derive(Subcommand)]
enum SnapshotCommands {
    /// Print a snapshot's stored settings
    Show {
        /// Snapshot name
        name: String,

        /// Snapshot directory (defaults to the user config dir)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Emit the raw snapshot JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Check every stored value against its setting kind
    Validate {
        /// Snapshot name
        name: String,

        /// Snapshot directory (defaults to the user config dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List saved snapshots, most recently updated first
    List {
        /// Snapshot directory (defaults to the user config dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Snapshot { command } => match command {
            SnapshotCommands::Show { name, dir, json } => cmd_show(&name, dir.as_deref(), json),
            SnapshotCommands::Validate { name, dir } => cmd_validate(&name, dir.as_deref()),
            SnapshotCommands::List { dir } => cmd_list(dir.as_deref()),
        },
        Commands::Kinds => cmd_kinds(),
    };

    ExitCode::from(code)
}

fn load_snapshot(name: &str, dir: Option<&std::path::Path>) -> Result<SessionSnapshot, u8> {
    let result = match dir {
        Some(dir) => SessionSnapshot::load_from(dir, name),
        None => SessionSnapshot::load(name),
    };
    result.map_err(|e| {
        eprintln!("error: {}", e);
        session_exit_code(&e)
    })
}

fn cmd_show(name: &str, dir: Option<&std::path::Path>, json: bool) -> u8 {
    let snapshot = match load_snapshot(name, dir) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: {}", e);
                return EXIT_ERROR;
            }
        }
        return EXIT_SUCCESS;
    }

    println!("{} (v{})", snapshot.name, snapshot.version);
    if let Some(updated) = snapshot.updated_at {
        println!("updated: {}", updated.to_rfc3339());
    }
    for (module, record) in &snapshot.modules {
        println!("\n[{}]", module);
        for (key, value) in record {
            println!("  {} = {}", key, value);
        }
    }
    EXIT_SUCCESS
}

fn cmd_validate(name: &str, dir: Option<&std::path::Path>) -> u8 {
    let snapshot = match load_snapshot(name, dir) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let findings = validate(&snapshot);
    for finding in &findings {
        match finding {
            Finding::UnknownKey { module, key } => {
                eprintln!("warning: {}: unknown setting key `{}`", module, key);
            }
            Finding::BadValue { module, key, error } => {
                eprintln!("error: {}: `{}` does not parse: {}", module, key, error);
            }
        }
    }

    if has_bad_values(&findings) {
        EXIT_SNAPSHOT_INVALID
    } else {
        println!("{}: ok", snapshot.name);
        EXIT_SUCCESS
    }
}

fn cmd_list(dir: Option<&std::path::Path>) -> u8 {
    let names = match dir {
        Some(dir) => SessionSnapshot::list_in(dir),
        None => SessionSnapshot::list_all(),
    };
    for name in names {
        println!("{}", name);
    }
    EXIT_SUCCESS
}

fn cmd_kinds() -> u8 {
    let registry = SettingRegistry::builtin();
    for kind in registry.kinds() {
        let label = registry.label(kind).unwrap_or("");
        println!("{:<20} {}", kind.as_key(), label);
    }
    EXIT_SUCCESS
}
