// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

// Linguist .ts XML file spec: https://doc.qt.io/qt-6/linguist-ts-file-format.html

use quick_xml::DeError;
use serde::Deserialize;

use crate::entry::{EntryState, TranslationEntry};

// Deserialization is deliberately lenient: every child element is optional,
// so an incomplete <message> degrades to empty fields instead of failing the
// whole document. Only non-well-formed XML is an error.

#[derive(Debug, Deserialize)]
#[serde(rename = "TS")]
struct Ts {
    #[serde(rename = "context", default)]
    contexts: Vec<Context>,
}

#[derive(Debug, Deserialize)]
struct Context {
    #[serde(rename = "name", default)]
    name: Option<String>,
    #[serde(rename = "message", default)]
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(rename = "location", default)]
    locations: Vec<Location>,
    #[serde(rename = "source", default)]
    source: Option<String>,
    #[serde(rename = "translation", default)]
    translation: Option<Translation>,
    #[serde(rename = "comment", default)]
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TranslationType {
    Unfinished,
    Vanished,
    Obsolete,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "@type", default)]
    type_attr: Option<TranslationType>,
    #[serde(rename = "$value", default)]
    value: Option<String>,
    // Plural forms are out of scope; the field only keeps quick-xml from
    // folding <numerusform> children into $value.
    #[serde(rename = "numerusform", default)]
    #[allow(dead_code)]
    numerus_forms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Location {
    #[serde(rename = "@filename", default)]
    filename: Option<String>,
    #[serde(rename = "@line", default)]
    line: Option<String>,
}

impl Message {
    /// `"filename:line"` from the first <location>, empty when there is no
    /// filename to point at.
    fn reference(&self) -> String {
        match self.locations.first() {
            Some(Location { filename: Some(filename), line: Some(line) }) => {
                format!("{filename}:{line}")
            }
            Some(Location { filename: Some(filename), line: None }) => filename.clone(),
            _ => String::new(),
        }
    }
}

/// State truth table over the unfinished marker and translation text:
/// unfinished+empty -> Untranslated, unfinished+text -> Fuzzy,
/// finished+text -> Translated, finished+empty -> Untranslated.
fn derive_state(unfinished: bool, translation: &str) -> EntryState {
    match (unfinished, !translation.is_empty()) {
        (true, true) => EntryState::Fuzzy,
        (false, true) => EntryState::Translated,
        (_, false) => EntryState::Untranslated,
    }
}

/// Parses Linguist TS XML into entries, in document order of
/// context -> message. Unlike the PO reader, empty-source messages are
/// kept; the TS format has no header pseudo-entry to drop.
pub fn parse_str(text: &str) -> Result<Vec<TranslationEntry>, DeError> {
    let ts: Ts = quick_xml::de::from_str(text)?;

    let mut entries = Vec::new();
    for context in ts.contexts {
        let context_name = context.name.unwrap_or_default();
        for message in context.messages {
            let reference = message.reference();
            let (translation, unfinished) = match message.translation {
                Some(t) => (
                    t.value.unwrap_or_default(),
                    matches!(t.type_attr, Some(TranslationType::Unfinished)),
                ),
                None => (String::new(), false),
            };
            let state = derive_state(unfinished, &translation);
            entries.push(TranslationEntry::new(
                message.source.unwrap_or_default(),
                translation,
                state,
                context_name.clone(),
                message.comment.unwrap_or_default(),
                reference,
            ));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::UiHint;

    const TEST_TS_CONTENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE TS>
<TS language="de" version="2.1">
<context>
    <name>MainWindow</name>
    <message>
        <location filename="mainwindow.cpp" line="42"/>
        <source>Save</source>
        <translation>Speichern</translation>
    </message>
    <message>
        <source>Open recent files</source>
        <comment>entry in the File menu</comment>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Quit</source>
        <translation type="unfinished">Teilweise</translation>
    </message>
</context>
<context>
    <name>AboutDialog</name>
    <message>
        <location filename="about.cpp" line="7"/>
        <source>About</source>
        <translation type="vanished">Über</translation>
    </message>
    <message>
        <source></source>
        <translation></translation>
    </message>
</context>
</TS>"#;

    #[test]
    fn tst_every_message_yields_one_entry_in_document_order() {
        let entries = parse_str(TEST_TS_CONTENT).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].source, "Save");
        assert_eq!(entries[1].source, "Open recent files");
        assert_eq!(entries[2].source, "Quit");
        assert_eq!(entries[3].source, "About");
        // Empty-source messages are kept for TS files.
        assert_eq!(entries[4].source, "");
    }

    #[test]
    fn tst_context_and_reference_extraction() {
        let entries = parse_str(TEST_TS_CONTENT).unwrap();
        assert_eq!(entries[0].context, "MainWindow");
        assert_eq!(entries[0].reference, "mainwindow.cpp:42");
        assert_eq!(entries[1].reference, "");
        assert_eq!(entries[3].context, "AboutDialog");
        assert_eq!(entries[3].reference, "about.cpp:7");
    }

    #[test]
    fn tst_state_truth_table() {
        let entries = parse_str(TEST_TS_CONTENT).unwrap();
        // finished + text
        assert_eq!(entries[0].state, EntryState::Translated);
        // unfinished + empty
        assert_eq!(entries[1].state, EntryState::Untranslated);
        // unfinished + text
        assert_eq!(entries[2].state, EntryState::Fuzzy);
        // vanished is not the unfinished marker, text present
        assert_eq!(entries[3].state, EntryState::Translated);
        // no marker, no text
        assert_eq!(entries[4].state, EntryState::Untranslated);
    }

    #[test]
    fn tst_comment_feeds_the_classifier() {
        let entries = parse_str(TEST_TS_CONTENT).unwrap();
        assert_eq!(entries[1].comment, "entry in the File menu");
        assert_eq!(entries[1].ui_hint, UiHint::Menu);
        // "AboutDialog" context carries the "dialog" keyword.
        assert_eq!(entries[3].ui_hint, UiHint::Dialog);
    }

    #[test]
    fn tst_missing_children_are_empty_not_errors() {
        let entries = parse_str(
            "<TS version=\"2.1\"><context><message><source>Bare</source></message></context></TS>",
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, "Bare");
        assert_eq!(entries[0].translation, "");
        assert_eq!(entries[0].context, "");
        assert_eq!(entries[0].state, EntryState::Untranslated);
    }

    #[test]
    fn tst_not_xml_is_an_error() {
        assert!(parse_str("msgid \"definitely not XML\"").is_err());
    }

    #[test]
    fn tst_parse_is_idempotent() {
        assert_eq!(parse_str(TEST_TS_CONTENT).unwrap(), parse_str(TEST_TS_CONTENT).unwrap());
    }
}
