use colored::*;
use spellout_common::config::Config;

/// Prints the success line for a conversion.
///
/// The echo keeps the raw argument exactly as the user typed it, symbol
/// and commas included.
pub fn result(raw: &str, sentence: &str, cfg: &Config) {
    if cfg.quiet {
        println!("{sentence}");
        return;
    }

    println!("{} {} {}", raw, "=>".bright_black(), sentence.bold());
}

/// Prints a user-correctable rejection to stdout.
pub fn rejection(message: &str) {
    println!("{message}.");
}

/// Prints a post-validation failure to stderr.
pub fn failure(message: &str) {
    eprintln!("{message}.");
}
