// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod classify;
mod cli;
mod entry;
mod i18n_file;
mod subcmd;

use colored::Colorize;

fn main() {
    cli::execute().unwrap_or_else(|err| {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    });
}
