// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::classify;

/// Translation progress of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// The message carries a confirmed translation.
    Translated,
    /// The message has no usable translation yet.
    Untranslated,
    /// The translation exists but is flagged as possibly stale
    /// (gettext `#, fuzzy`, Linguist `type="unfinished"` with text).
    Fuzzy,
}

impl EntryState {
    /// Symbolic name, used for export and filter matching.
    pub fn name(&self) -> &'static str {
        match self {
            EntryState::Translated => "Translated",
            EntryState::Untranslated => "Untranslated",
            EntryState::Fuzzy => "Fuzzy",
        }
    }
}

/// Best-effort guess at the kind of interface control a message belongs to.
///
/// Derived from comment/context keywords, falling back to the shape of the
/// source text. Only meant for preview simulation, never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiHint {
    Button,
    Menu,
    Dialog,
    Tooltip,
    Label,
}

impl UiHint {
    pub fn name(&self) -> &'static str {
        match self {
            UiHint::Button => "button",
            UiHint::Menu => "menu",
            UiHint::Dialog => "dialog",
            UiHint::Tooltip => "tooltip",
            UiHint::Label => "label",
        }
    }
}

/// One message unit extracted from a PO or TS file.
///
/// Immutable once constructed; a fresh sequence is produced by every parse
/// call, in file encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Original-language text. Never empty for entries built from PO files
    /// (the empty-msgid header block is dropped by the reader).
    pub source: String,
    pub translation: String,
    pub state: EntryState,
    /// gettext `msgctxt` or Linguist context name.
    pub context: String,
    /// All comment lines joined together.
    pub comment: String,
    /// Source-location string, e.g. `"src/app.c:10"`.
    pub reference: String,
    pub ui_hint: UiHint,
}

impl TranslationEntry {
    /// Builds an entry from the raw fields a reader extracted,
    /// deriving the UI-role hint.
    pub fn new(
        source: String,
        translation: String,
        state: EntryState,
        context: String,
        comment: String,
        reference: String,
    ) -> Self {
        let ui_hint = classify::ui_hint(&comment, &context, &source);
        TranslationEntry {
            source,
            translation,
            state,
            context,
            comment,
            reference,
            ui_hint,
        }
    }

    /// Whether the translation likely overflows the widget this message is
    /// guessed to live in. Computed on demand from the entry's own fields.
    pub fn is_truncated(&self) -> bool {
        classify::is_truncated(&self.translation, &self.source, self.ui_hint)
    }
}
