/// Which table the oracle prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every source in turn, lines `"{i} -> {j}: {dist}"`
    #[default]
    AllPairs,
    /// One source, lines `"{i}: {dist}"`
    SingleSource,
}

/// Configuration for one oracle invocation
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub mode: Mode,
    /// Source vertex used in single-source mode
    pub source: usize,
    /// Run all-pairs sources on the rayon thread pool
    pub parallel: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            mode: Mode::AllPairs,
            source: 0,
            parallel: false,
        }
    }
}

impl OracleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the source vertex for single-source mode
    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    /// Enable or disable parallel all-pairs runs
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
