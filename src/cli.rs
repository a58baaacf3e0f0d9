//! CLI argument parsing for the `dev` toolbox.
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "dev",
    version,
    about = "Developer environment helpers",
    after_help = "Examples:\n  dev git-nano-highlight\n  dev git-nano-highlight --force\n  dev completion zsh > _dev",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log each filesystem step to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Installs git commit message syntax highlighting for nano
    #[command(name = "git-nano-highlight", visible_alias = "install-highlighting")]
    GitNanoHighlight(NanoHighlightArgs),

    /// Generates a shell completion script on stdout
    #[command(hide = true, alias = "zsh-completion")]
    Completion(CompletionArgs),
}

/// Inputs for installing the nano highlighting file.
#[derive(Args, Debug)]
pub struct NanoHighlightArgs {
    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum, default_value_t = Shell::Zsh)]
    pub shell: Shell,
}
