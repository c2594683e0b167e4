//! descsync CLI - service description synchronization
//!
//! Usage: descsync <COMMAND>
//!
//! Commands:
//!   client   Create or list clients
//!   list     Show a client's service descriptions
//!   add      Register a WSDL service description
//!   update   Point a description at a new source
//!   refresh  Re-read a description's source
//!   delete   Delete a description
//!   enable   Enable descriptions
//!   disable  Disable descriptions

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use descsync::presentation::{self, Cli};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    presentation::run(cli)
}
