// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

// Gettext PO/POT reader. PO file format reference:
// https://www.gnu.org/software/gettext/manual/html_node/PO-Files.html
//
// This is a best-effort field extractor, not a validating parser: malformed
// blocks degrade to empty fields instead of raising, and the only failure
// mode lives at the file-read level in the dispatcher.

use crate::entry::{EntryState, TranslationEntry};

/// Which logical field the continuation lines of a block currently extend.
enum Field {
    None,
    Msgctxt,
    Msgid,
    Msgstr,
}

/// Removes one wrapping quote pair and resolves the escape sequences
/// gettext uses inside msgid/msgstr strings.
fn unquote(raw: &str) -> String {
    let mut value = raw.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value = &value[1..value.len() - 1];
    }
    value
        .replace("\\\"", "\"")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
}

/// Parses one blank-line-delimited block into an entry.
///
/// Returns None for blocks whose assembled msgid is empty; that drops the
/// conventional PO header block along with pure-comment blocks.
fn parse_block(block: &str) -> Option<TranslationEntry> {
    let mut current = Field::None;
    let mut msgctxt = String::new();
    let mut msgid = String::new();
    let mut msgstr = String::new();
    let mut comments: Vec<String> = Vec::new();
    let mut references: Vec<String> = Vec::new();
    let mut fuzzy = false;

    for line in block.lines() {
        let line = line.trim();
        if line.starts_with("#,") && line.contains("fuzzy") {
            fuzzy = true;
        } else if let Some(rest) = line.strip_prefix("#:") {
            references.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("#.") {
            comments.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix('#') {
            // Translator and other generic comments.
            comments.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("msgctxt ") {
            current = Field::Msgctxt;
            msgctxt.push_str(&unquote(rest));
        } else if let Some(rest) = line.strip_prefix("msgid ") {
            current = Field::Msgid;
            msgid.push_str(&unquote(rest));
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            current = Field::Msgstr;
            msgstr.push_str(&unquote(rest));
        } else if line.starts_with('"') {
            // Continuation of whichever field is open. A stray quoted line
            // before any field marker is silently dropped.
            match current {
                Field::Msgctxt => msgctxt.push_str(&unquote(line)),
                Field::Msgid => msgid.push_str(&unquote(line)),
                Field::Msgstr => msgstr.push_str(&unquote(line)),
                Field::None => {}
            }
        }
        // Anything else (msgid_plural, msgstr[N], stray text) is ignored.
    }

    if msgid.is_empty() {
        return None;
    }

    // Fuzzy wins over a present translation.
    let state = if fuzzy {
        EntryState::Fuzzy
    } else if !msgstr.is_empty() {
        EntryState::Translated
    } else {
        EntryState::Untranslated
    };

    Some(TranslationEntry::new(
        msgid,
        msgstr,
        state,
        msgctxt,
        comments.join(" "),
        references.join(", "),
    ))
}

/// Parses PO/POT text into entries, in block order.
pub fn parse_str(text: &str) -> Vec<TranslationEntry> {
    let mut entries = Vec::new();
    let mut block = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                entries.extend(parse_block(&block));
                block.clear();
            }
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    if !block.is_empty() {
        entries.extend(parse_block(&block));
    }
    entries
}
