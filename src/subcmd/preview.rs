// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use colored::Colorize;
use thiserror::Error as TeError;

use crate::entry::{EntryState, TranslationEntry, UiHint};
use crate::i18n_file::{self, ParseError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to load translation file because: {0}")]
    LoadFile(#[from] ParseError),
}

#[derive(clap::ValueEnum, Clone, Default, Copy, Debug)]
pub enum PreviewFilter {
    #[default]
    All,
    Translated,
    Untranslated,
    Fuzzy,
    Truncated,
}

fn matches_filter(entry: &TranslationEntry, filter: PreviewFilter) -> bool {
    match filter {
        PreviewFilter::All => true,
        PreviewFilter::Translated => entry.state == EntryState::Translated,
        PreviewFilter::Untranslated => entry.state == EntryState::Untranslated,
        PreviewFilter::Fuzzy => entry.state == EntryState::Fuzzy,
        PreviewFilter::Truncated => entry.is_truncated(),
    }
}

fn matches_search(entry: &TranslationEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{}{}{}{}",
        entry.source, entry.translation, entry.context, entry.comment
    )
    .to_lowercase();
    haystack.contains(&needle.to_lowercase())
}

/// Crude terminal stand-in for the widget the entry is guessed to live in.
/// Falls back to the source text when there is no translation yet.
fn simulated_widget(entry: &TranslationEntry) -> String {
    let mut text = entry.translation.as_str();
    if text.is_empty() {
        text = entry.source.as_str();
    }
    if text.is_empty() {
        text = "\u{2014}";
    }
    match entry.ui_hint {
        UiHint::Button => format!("[ {text} ]"),
        UiHint::Menu => format!("{text} \u{25b8}"),
        UiHint::Dialog => format!("\u{201c}{text}\u{201d}"),
        UiHint::Tooltip => format!("({text})"),
        UiHint::Label => text.to_string(),
    }
}

fn print_entry(entry: &TranslationEntry) {
    let badge = match entry.state {
        EntryState::Translated => "\u{2713}".green(),
        EntryState::Fuzzy => "~".yellow(),
        EntryState::Untranslated => "\u{2717}".red(),
    };
    let mut header = format!(
        "{} {}",
        badge,
        entry.ui_hint.name().to_uppercase().dimmed()
    );
    if entry.is_truncated() {
        header = format!("{header} {}", "TRUNCATED".red().bold());
    }
    if !entry.reference.is_empty() {
        header = format!("{header}  {}", entry.reference.dimmed());
    }
    println!("{header}");
    println!("    Source:      {}", entry.source);
    println!("    Translation: {}", simulated_widget(entry));
    println!();
}

pub fn subcmd_preview(
    translation_file: &Path,
    filter: PreviewFilter,
    search: Option<&str>,
) -> Result<(), CmdError> {
    let entries = i18n_file::parse_file(translation_file)?;

    let mut shown = 0;
    for entry in &entries {
        if !matches_filter(entry, filter) {
            continue;
        }
        if let Some(needle) = search {
            if !matches_search(entry, needle) {
                continue;
            }
        }
        print_entry(entry);
        shown += 1;
    }
    println!("{shown} of {} entries shown.", entries.len());

    Ok(())
}
