//! Printer configuration.

/// Default maximum line width before a soft line breaks.
pub const MAX_LINE_LENGTH: usize = 80;

/// Default text inserted once per indentation level.
pub const INDENTATION_STEP: &str = "  ";

/// Output style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PrintMode {
    /// Spaced, indented, width-aware output ending in one newline.
    #[default]
    Pretty,
    /// No optional whitespace and no trailing newline.
    Minified,
}

/// Configuration for one `print` call.
///
/// Passed by reference through every layer; never mutated while printing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Inserted once per indentation level.
    pub indentation_step: String,
    /// Compact-vs-broken threshold in characters, indentation included.
    /// Ignored when minifying.
    pub max_line_length: usize,
    /// Reattach source comments to the output.
    pub preserve_comments: bool,
    pub mode: PrintMode,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            indentation_step: INDENTATION_STEP.to_owned(),
            max_line_length: MAX_LINE_LENGTH,
            preserve_comments: false,
            mode: PrintMode::Pretty,
        }
    }
}

impl PrintOptions {
    /// Default options in minified mode.
    pub fn minified() -> Self {
        Self::default().with_mode(PrintMode::Minified)
    }

    #[must_use]
    pub fn with_indentation_step(mut self, step: impl Into<String>) -> Self {
        self.indentation_step = step.into();
        self
    }

    #[must_use]
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    #[must_use]
    pub fn with_preserve_comments(mut self, preserve_comments: bool) -> Self {
        self.preserve_comments = preserve_comments;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PrintMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn is_pretty(&self) -> bool {
        self.mode == PrintMode::Pretty
    }

    /// The optional space: `" "` when pretty, nothing when minified.
    #[inline]
    pub fn space(&self) -> &'static str {
        match self.mode {
            PrintMode::Pretty => " ",
            PrintMode::Minified => "",
        }
    }
}
