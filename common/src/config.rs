/// Number of result lines the board keeps visible.
pub const DEFAULT_LOG_ROWS: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops banner and headers, 2 also drops per-round lines.
    pub quiet: u8,
    /// Seeds the computer's move source.
    ///
    /// `None` draws the seed from the operating system.
    pub seed: Option<u64>,
    /// How many of the most recent rounds the results area shows.
    pub log_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            seed: None,
            log_rows: DEFAULT_LOG_ROWS,
        }
    }
}
