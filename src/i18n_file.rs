// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod common;
pub mod gettext;
pub mod linguist;

pub use common::{parse_file, I18nFileKind, ParseError};
