//! CLI Argument Parsing
//!
//! Global flags (--config, --store, --json, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{ClientId, DescriptionId};

/// descsync - keep client service catalogs in step with their descriptions
#[derive(Parser, Debug)]
#[command(name = "descsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./descsync.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Client store directory (overrides config and DESCSYNC_STORE_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Output format for automation
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },

    /// List a client's service descriptions and operations
    List {
        /// Client id (INSTANCE:CLASS:CODE[:SUBSYSTEM])
        client: ClientId,
    },

    /// Register a WSDL service description for a client
    Add {
        /// Client id (INSTANCE:CLASS:CODE[:SUBSYSTEM])
        client: ClientId,

        /// Catalog URL (file:// or a local path; remote schemes are not fetched)
        url: String,

        /// Commit even if warnings are reported
        #[arg(long)]
        ignore_warnings: bool,
    },

    /// Point a description at a new source URL and resync it
    Update {
        /// Service description id
        id: DescriptionId,

        /// New catalog URL (file:// or a local path; remote schemes are not fetched)
        url: String,

        /// Commit even if warnings are reported
        #[arg(long)]
        ignore_warnings: bool,
    },

    /// Re-read a description's source and resync it
    Refresh {
        /// Service description id
        id: DescriptionId,

        /// Commit even if warnings are reported
        #[arg(long)]
        ignore_warnings: bool,
    },

    /// Delete a service description
    Delete {
        /// Service description id
        id: DescriptionId,
    },

    /// Enable service descriptions
    Enable {
        /// Service description ids
        #[arg(required = true)]
        ids: Vec<DescriptionId>,
    },

    /// Disable service descriptions
    Disable {
        /// Service description ids
        #[arg(required = true)]
        ids: Vec<DescriptionId>,

        /// Notice shown to callers while disabled
        #[arg(long)]
        notice: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClientCommands {
    /// Create an empty client
    Add {
        /// Client id (INSTANCE:CLASS:CODE[:SUBSYSTEM])
        id: ClientId,
    },

    /// List known clients
    List,
}
