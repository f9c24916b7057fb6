// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

// Heuristic classifiers shared by both file readers. These are plain
// functions on strings so they can be unit-tested without touching any
// file format code.

use crate::entry::UiHint;

// Keyword lists are matched in this exact order; earlier categories win.
// The lists are frozen: rewording them would silently reclassify existing
// catalogs, so resist the urge to add synonyms.
const BUTTON_KEYWORDS: [&str; 3] = ["button", "btn", "_btn"];
const MENU_KEYWORDS: [&str; 3] = ["menu", "menuitem", "action"];
const DIALOG_KEYWORDS: [&str; 3] = ["dialog", "message", "description"];
const TOOLTIP_KEYWORDS: [&str; 2] = ["tooltip", "tip"];
const LABEL_KEYWORDS: [&str; 3] = ["title", "header", "label"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Guesses which kind of UI control a message belongs to.
///
/// Keyword signals from comment and context always dominate shape signals
/// from the source text, and earlier keyword categories dominate later ones
/// (a comment mentioning both "button" and "dialog" resolves to button).
pub fn ui_hint(comment: &str, context: &str, source: &str) -> UiHint {
    let haystack = format!("{comment} {context}").to_lowercase();

    if contains_any(&haystack, &BUTTON_KEYWORDS) {
        return UiHint::Button;
    }
    if contains_any(&haystack, &MENU_KEYWORDS) {
        return UiHint::Menu;
    }
    if contains_any(&haystack, &DIALOG_KEYWORDS) {
        return UiHint::Dialog;
    }
    if contains_any(&haystack, &TOOLTIP_KEYWORDS) {
        return UiHint::Tooltip;
    }
    if contains_any(&haystack, &LABEL_KEYWORDS) {
        return UiHint::Label;
    }

    // No keyword signal; fall back to the shape of the source text.
    let source_len = source.chars().count();
    if source_len < 15 && !source.contains(' ') {
        UiHint::Button
    } else if source.ends_with("...") || source.ends_with('\u{2026}') {
        UiHint::Menu
    } else if source_len > 80 {
        UiHint::Dialog
    } else {
        UiHint::Label
    }
}

/// Flags a translation that likely overflows the widget it is guessed to
/// live in. Always false when either text is empty.
///
/// Lengths are counted in chars on both sides of the ratio.
pub fn is_truncated(translation: &str, source: &str, hint: UiHint) -> bool {
    if translation.is_empty() || source.is_empty() {
        return false;
    }
    let translation_len = translation.chars().count();
    let source_len = source.chars().count();

    if hint == UiHint::Button && translation_len > 20 {
        return true;
    }
    if hint == UiHint::Menu && translation_len > 30 {
        return true;
    }
    let ratio = translation_len as f64 / source_len.max(1) as f64;
    ratio > 1.8 && translation_len > 25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_keyword_priority_over_shape() {
        // Source text alone would classify as dialog (length > 80),
        // but the comment keyword wins.
        let long_source = "x".repeat(90);
        assert_eq!(ui_hint("tooltip for the thing", "", &long_source), UiHint::Tooltip);
    }

    #[test]
    fn tst_earlier_keyword_category_wins() {
        assert_eq!(ui_hint("button in the menu", "", "Save"), UiHint::Button);
        assert_eq!(ui_hint("menu, shows a dialog", "", "Open"), UiHint::Menu);
    }

    #[test]
    fn tst_keywords_case_insensitive_and_from_context() {
        assert_eq!(ui_hint("", "SaveButton", "Save"), UiHint::Button);
        assert_eq!(ui_hint("", "MainMenu", "Open file"), UiHint::Menu);
        assert_eq!(ui_hint("", "ErrorMessage", "Something went wrong here"), UiHint::Dialog);
        assert_eq!(ui_hint("", "WindowTitle", "My Application Window"), UiHint::Label);
    }

    #[test]
    fn tst_shape_fallback() {
        // Short and spaceless.
        assert_eq!(ui_hint("", "", "Save"), UiHint::Button);
        // Trailing ellipsis, both spellings.
        assert_eq!(ui_hint("", "", "Open file..."), UiHint::Menu);
        assert_eq!(ui_hint("", "", "Open file\u{2026}"), UiHint::Menu);
        // Long text.
        let long = "word ".repeat(20);
        assert_eq!(ui_hint("", "", long.trim_end()), UiHint::Dialog);
        // Everything else.
        assert_eq!(ui_hint("", "", "A sentence of middling size"), UiHint::Label);
    }

    #[test]
    fn tst_spaceless_wins_over_ellipsis() {
        // 9 chars, no space, ends with "..." -- the length rule is checked first.
        assert_eq!(ui_hint("", "", "Export..."), UiHint::Button);
    }

    #[test]
    fn tst_truncation_empty_inputs() {
        assert!(!is_truncated("", "Save", UiHint::Button));
        assert!(!is_truncated("Speichern", "", UiHint::Button));
        assert!(!is_truncated("", "", UiHint::Dialog));
    }

    #[test]
    fn tst_truncation_button_threshold() {
        assert!(!is_truncated(&"x".repeat(20), "Save", UiHint::Button));
        assert!(is_truncated(&"x".repeat(21), "Save", UiHint::Button));
    }

    #[test]
    fn tst_truncation_menu_threshold_is_strict() {
        let source = "A reasonably long menu entry title";
        assert!(!is_truncated(&"y".repeat(30), source, UiHint::Menu));
        assert!(is_truncated(&"y".repeat(31), source, UiHint::Menu));
    }

    #[test]
    fn tst_truncation_ratio_rule() {
        // ratio 26/10 = 2.6 > 1.8 and len 26 > 25.
        assert!(is_truncated(&"z".repeat(26), &"s".repeat(10), UiHint::Label));
        // len 25 fails the second clause.
        assert!(!is_truncated(&"z".repeat(25), &"s".repeat(10), UiHint::Label));
        // ratio 26/15 = 1.73 fails the first clause.
        assert!(!is_truncated(&"z".repeat(26), &"s".repeat(15), UiHint::Label));
    }

    #[test]
    fn tst_truncation_counts_chars_not_bytes() {
        // 21 umlauts are 42 bytes but 21 chars.
        assert!(is_truncated(&"ä".repeat(21), "Save", UiHint::Button));
        assert!(!is_truncated(&"ä".repeat(20), "Save", UiHint::Button));
    }
}
