// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use serde::Serialize;
use thiserror::Error as TeError;

use crate::entry::TranslationEntry;
use crate::i18n_file::{self, ParseError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load translation file because: {0}")]
    LoadFile(#[from] ParseError),
    #[error("Fail to write output file {0:?} because: {1}")]
    WriteOutput(PathBuf, #[source] std::io::Error),
    #[error("Fail to serialize entries: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(clap::ValueEnum, Clone, Default, Copy, Debug)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// The flat record shape both export formats share; field order here is the
/// CSV column order.
#[derive(Serialize)]
struct ExportRecord<'a> {
    msgid: &'a str,
    msgstr: &'a str,
    state: &'static str,
    context: &'a str,
    reference: &'a str,
    comment: &'a str,
}

impl<'a> ExportRecord<'a> {
    fn from_entry(entry: &'a TranslationEntry) -> Self {
        ExportRecord {
            msgid: &entry.source,
            msgstr: &entry.translation,
            state: entry.state.name(),
            context: &entry.context,
            reference: &entry.reference,
            comment: &entry.comment,
        }
    }
}

/// Quotes a CSV field when it contains a separator, quote or line break.
fn csv_escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_csv(records: &[ExportRecord]) -> String {
    let mut out = String::from("msgid,msgstr,state,context,reference,comment\n");
    for record in records {
        let fields = [
            record.msgid,
            record.msgstr,
            record.state,
            record.context,
            record.reference,
            record.comment,
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_escape(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

pub fn subcmd_export(
    translation_file: &Path,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), CmdError> {
    let entries = i18n_file::parse_file(translation_file)?;
    let records: Vec<ExportRecord> = entries.iter().map(ExportRecord::from_entry).collect();

    let rendered = match format {
        ExportFormat::Csv => render_csv(&records),
        ExportFormat::Json => serde_json::to_string_pretty(&records)?,
    };

    match output {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| CmdError::WriteOutput(path.to_path_buf(), e))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
