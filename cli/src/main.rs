mod commands;
mod terminal;

use std::process::ExitCode;

use clap::error::ErrorKind;
use commands::CommandLine;
use commands::convert::{self, ConvertError};
use spellout_common::config::{CentsStyle, Config};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = match CommandLine::parse_args() {
        Ok(commands) => commands,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            print::rejection("One and only one amount is allowed");
            return ExitCode::FAILURE;
        }
    };

    logging::init(commands.verbose);

    let cfg = Config {
        cents: if commands.always_cents {
            CentsStyle::Always
        } else {
            CentsStyle::Auto
        },
        quiet: commands.quiet,
    };

    match convert::convert(&commands.amount, &cfg) {
        Ok(sentence) => {
            print::result(&commands.amount, &sentence, &cfg);
            ExitCode::SUCCESS
        }
        Err(ConvertError::Amount(err)) => {
            print::rejection(&err.to_string());
            ExitCode::FAILURE
        }
        Err(ConvertError::Expand(err)) => {
            print::failure(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
