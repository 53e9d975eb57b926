use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fdiff",
    about = "Show where two texts first stop agreeing",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files line by line
    Files(FilesArgs),
    /// Compare two literal strings
    Lines(LinesArgs),
}

#[derive(Args)]
pub struct FilesArgs {
    pub left: String,
    pub right: String,
}

#[derive(Args)]
pub struct LinesArgs {
    pub left: String,
    pub right: String,
}
