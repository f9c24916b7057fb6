// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use serde::Serialize;
use thiserror::Error as TeError;
use walkdir::WalkDir;

use crate::entry::{EntryState, TranslationEntry};
use crate::i18n_file::{self, I18nFileKind, ParseError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load translation file because: {0}")]
    LoadFile(#[from] ParseError),
    #[error("Fail to walk directory because: {0}")]
    WalkDir(#[from] walkdir::Error),
    #[error("No translation files found under {0:?}")]
    NoTranslationFiles(PathBuf),
    #[error("Fail to serialize stats: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(clap::ValueEnum, Clone, Default, Copy, Debug)]
pub enum StatsFormat {
    #[default]
    PlainTable,
    Json,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct EntryStats {
    pub total: u64,
    pub translated: u64,
    pub untranslated: u64,
    pub fuzzy: u64,
    pub truncated: u64,
}

impl EntryStats {
    pub fn from_entries(entries: &[TranslationEntry]) -> Self {
        let mut stats = EntryStats::default();
        for entry in entries {
            stats.total += 1;
            match entry.state {
                EntryState::Translated => stats.translated += 1,
                EntryState::Untranslated => stats.untranslated += 1,
                EntryState::Fuzzy => stats.fuzzy += 1,
            }
            if entry.is_truncated() {
                stats.truncated += 1;
            }
        }
        stats
    }

    /// The "Completeness" value shown in the statistics table.
    pub fn completeness_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.translated as f64 / self.total as f64) * 100.0
        }
    }
}

impl std::ops::AddAssign<&Self> for EntryStats {
    fn add_assign(&mut self, rhs: &Self) {
        self.total += rhs.total;
        self.translated += rhs.translated;
        self.untranslated += rhs.untranslated;
        self.fuzzy += rhs.fuzzy;
        self.truncated += rhs.truncated;
    }
}

#[derive(Serialize)]
struct FileStats {
    path: PathBuf,
    #[serde(flatten)]
    stats: EntryStats,
}

/// Collects the translation files covered by the given path: the path itself
/// when it is a file, otherwise every .po/.pot/.ts below it, sorted.
fn collect_translation_files(path: &Path) -> Result<Vec<PathBuf>, CmdError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for dir_entry in WalkDir::new(path).sort_by_file_name() {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() {
            continue;
        }
        if I18nFileKind::from_ext_hint(dir_entry.path()).is_ok() {
            files.push(dir_entry.path().to_path_buf());
        }
    }
    if files.is_empty() {
        return Err(CmdError::NoTranslationFiles(path.to_path_buf()));
    }
    Ok(files)
}

fn print_plain_table(all_stats: &[FileStats]) {
    println!("| Completeness | Total | Translated | Untranslated | Fuzzy | Truncated | File |");
    println!("| ------------ | ----- | ---------- | ------------ | ----- | --------- | ---- |");
    for file_stats in all_stats {
        let s = &file_stats.stats;
        println!(
            "| {0:>11.2}% | {1:5} | {2:10} | {3:12} | {4:5} | {5:9} | {6} |",
            s.completeness_percentage(), s.total, s.translated, s.untranslated,
            s.fuzzy, s.truncated, file_stats.path.display(),
        );
    }
    if all_stats.len() > 1 {
        let mut totals = EntryStats::default();
        for file_stats in all_stats {
            totals += &file_stats.stats;
        }
        println!(
            "| {0:>11.2}% | {1:5} | {2:10} | {3:12} | {4:5} | {5:9} | (total) |",
            totals.completeness_percentage(), totals.total, totals.translated,
            totals.untranslated, totals.fuzzy, totals.truncated,
        );
    }
}

pub fn subcmd_statistics(path: &Path, format: StatsFormat) -> Result<(), CmdError> {
    let mut all_stats = Vec::new();
    for file in collect_translation_files(path)? {
        let entries = i18n_file::parse_file(&file)?;
        all_stats.push(FileStats {
            path: file,
            stats: EntryStats::from_entries(&entries),
        });
    }

    match format {
        StatsFormat::PlainTable => print_plain_table(&all_stats),
        StatsFormat::Json => println!("{}", serde_json::to_string_pretty(&all_stats)?),
    }

    Ok(())
}
