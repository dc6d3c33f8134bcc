// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the wsops CLI.
//!
//! Generates shell completions for bash, zsh, fish, and powershell.
//! Install completions using:
//!
//! ```bash
//! # Bash
//! wsops completions bash > ~/.local/share/bash-completion/completions/wsops
//!
//! # Zsh
//! wsops completions zsh > ~/.zfunc/_wsops
//!
//! # Fish
//! wsops completions fish > ~/.config/fish/completions/wsops.fish
//!
//! # PowerShell
//! wsops completions powershell > $PROFILE.CurrentUserAllHosts
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions and write to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "wsops", &mut io::stdout());
}

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
