use spellout_common::amount::{Amount, AmountError};
use spellout_common::config::Config;
use spellout_core::expander::{self, ExpandError};
use tracing::debug;

/// Failure of a single conversion, split by origin so the boundary can
/// route each to its documented output stream.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Expand(#[from] ExpandError),
}

/// Validates the raw amount and renders it as an English sentence.
pub fn convert(raw: &str, cfg: &Config) -> Result<String, ConvertError> {
    let amount: Amount = raw.parse()?;
    debug!(%amount, "amount accepted");

    let sentence = expander::expand(&amount, cfg.cents)?;
    debug!(%sentence, "amount rendered");

    Ok(sentence)
}
