// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod preview;
pub mod export;
pub mod statistics;

pub use preview::subcmd_preview;
pub use export::subcmd_export;
pub use statistics::subcmd_statistics;
