pub mod convert;

use clap::Parser;

#[derive(Parser)]
#[command(name = "spellout")]
#[command(version)]
#[command(about = "Spell out a dollar amount in English words.")]
pub struct CommandLine {
    /// The amount to convert, e.g. "$2,523.04".
    pub amount: String,

    /// Always append the cents clause, even for whole-dollar amounts.
    #[arg(long)]
    pub always_cents: bool,

    /// Print only the rendered sentence, without echoing the input.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    /// Parse errors are returned rather than printed so `main` keeps
    /// control of the exit code for wrong-argument invocations.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
