// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dbjobs completions <shell>`
//!
//! ```bash
//! dbjobs completions bash > ~/.local/share/bash-completion/completions/dbjobs
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

const BIN_NAME: &str = "dbjobs";

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to `out`
pub fn generate_completions<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
