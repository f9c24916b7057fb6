// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error as TeError;

#[derive(Debug, Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
#[command(
    version = env!("GIT_DESCRIBE_OR_CARGO_PKG_VERSION"),
    about = "A commandline tool to preview translation files in context before committing them."
)]
pub enum Commands {
    #[command(name = "preview")]
    #[command(
        about = "Renders translation entries with state, UI-role guess and truncation flags",
        long_about = "Renders one row per translation entry of the given Qt Linguist (.ts) or GNU Gettext (.po/.pot) file,\n\
            showing its translation state, guessed UI role, truncation risk and a simulated widget preview.",
    )]
    Preview {
        translation_file: PathBuf,
        /// Only show entries with this state or flag.
        #[clap(short, long, default_value_t, value_enum)]
        filter: crate::subcmd::preview::PreviewFilter,
        /// Case-insensitive substring search over source, translation, context and comment.
        #[arg(short, long)]
        search: Option<String>,
    },

    #[command(name = "export")]
    #[command(
        about = "Exports all entries of a translation file to CSV or JSON",
        long_about = "Exports all entries of the given translation file to CSV or JSON with the fields\n\
            msgid, msgstr, state, context, reference and comment.\n\n\
            Output is printed to stdout unless an output path is given.",
    )]
    Export {
        translation_file: PathBuf,
        #[clap(short, long, default_value_t, value_enum)]
        format: crate::subcmd::export::ExportFormat,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(name = "statistics")]
    #[command(
        about = "Prints translation statistics of a file or a directory tree",
        long_about = "Prints entry statistics (translated/untranslated/fuzzy/truncated) of the given translation file.\n\n\
            When a directory is given, all .po/.pot/.ts files below it are included.",
    )]
    Statistics {
        path: PathBuf,
        #[clap(short, long, default_value_t, value_enum)]
        format: crate::subcmd::statistics::StatsFormat,
    },
}

#[derive(TeError, Debug)]
#[error("{0}")]
pub enum CliError {
    Preview(#[from] crate::subcmd::preview::CmdError),
    Export(#[from] crate::subcmd::export::CmdError),
    Statistics(#[from] crate::subcmd::statistics::CmdError),
}

pub fn execute() -> Result<(), CliError> {
    let args = Cli::parse();

    use crate::subcmd;
    match args.command {
        Commands::Preview { translation_file, filter, search } => {
            subcmd::subcmd_preview(&translation_file, filter, search.as_deref())?;
        },
        Commands::Export { translation_file, format, output } => {
            subcmd::subcmd_export(&translation_file, format, output.as_deref())?;
        },
        Commands::Statistics { path, format } => {
            subcmd::subcmd_statistics(&path, format)?;
        },
    }

    Ok(())
}
