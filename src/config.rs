use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "words.txt";
pub const DEFAULT_OUTPUT: &str = "words.csv";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Parameters for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Copied verbatim into every row; not checked against any code list.
    pub language: String,
}

impl ConvertConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            language: language.into(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_LANGUAGE)
    }
}
