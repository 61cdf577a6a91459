/// How the cents clause is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentsStyle {
    /// Omit the `and 00/100` clause for whole-dollar amounts.
    #[default]
    Auto,
    /// Always spell the cents clause, even when the cents are zero.
    Always,
}

/// Runtime options assembled at the command-line boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub cents: CentsStyle,

    /// Print only the rendered sentence, without echoing the input.
    pub quiet: bool,
}
