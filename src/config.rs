//! Run configuration.

/// Which marshaler renders each section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// The custom key-sorting marshaler.
    #[default]
    Sorted,
    /// The stock serde_yaml serializer.
    Normal,
    /// Pretty-printed JSON with 2-space indent.
    Json,
}

/// Configuration for one run, fixed at process start and threaded
/// explicitly into the ordering, filtering, merging, and emission code.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key names sorted ahead of all others, in list order.
    pub prior_keys: Vec<String>,
    /// Paths excluded from output on exact match.
    pub skip_keys: Vec<String>,
    /// Paths whose subtrees are the only ones emitted, when non-empty.
    pub select_keys: Vec<String>,
    /// Quote every scalar string in output.
    pub quote_strings: bool,
    /// Indent sequence dashes an extra 2 spaces.
    pub array_indent_plus_2: bool,
    /// Decode input (and the override file) as JSON instead of YAML.
    pub json_input: bool,
    pub mode: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prior_keys: vec!["name".to_string()],
            skip_keys: Vec::new(),
            select_keys: Vec::new(),
            quote_strings: false,
            array_indent_plus_2: false,
            json_input: false,
            mode: OutputMode::Sorted,
        }
    }
}
