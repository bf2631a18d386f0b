//! # Printer Models
//!
//! A [`Model`] pairs a printer family with the command table it understands
//! and, optionally, its own line-ending convention.
//!
//! ## Supported Printers
//!
//! | Model | Commands | Line endings |
//! |-------|----------|--------------|
//! | TM-T88IV | baseline without `ds`/`nods` | CR LF |
//!
//! ## Usage
//!
//! ```
//! use etp::printer;
//!
//! let model = printer::resolve("TM-T88IV")?;
//! assert!(model.commands().get("b").is_some());
//! assert!(model.commands().get("ds").is_none());
//! # Ok::<(), etp::EtpError>(())
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::command::{self, CommandTable, Delta};
use crate::error::{EtpError, Result};

/// How `\n` in the template source is written to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Every line break becomes CR LF
    #[default]
    CrLf,
    /// Every line break becomes LF
    Lf,
    /// Every line break becomes CR
    Cr,
}

impl LineEnding {
    /// Normalize all line breaks in `s`.
    ///
    /// Input without a `\n` is returned as-is, without allocating.
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if !s.contains('\n') {
            return Cow::Borrowed(s);
        }
        let unified = s.replace("\r\n", "\n");
        match self {
            Self::CrLf => Cow::Owned(unified.replace('\n', "\r\n")),
            Self::Lf => Cow::Owned(unified),
            Self::Cr => Cow::Owned(unified.replace('\n', "\r")),
        }
    }
}

/// # Printer Model
///
/// Immutable after construction. The command table is shared, so cloning a
/// model is cheap.
#[derive(Debug, Clone)]
pub struct Model {
    name: &'static str,
    commands: Arc<CommandTable>,
    line_ending: Option<LineEnding>,
}

impl Model {
    /// Build a model from the baseline table plus `deltas`.
    pub fn new(name: &'static str, deltas: impl IntoIterator<Item = Delta>) -> Self {
        Self {
            name,
            commands: Arc::new(CommandTable::with_deltas(command::common(), deltas)),
            line_ending: None,
        }
    }

    /// Override the default CR LF line-ending normalization.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = Some(line_ending);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The complete command table for this model.
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// The model's own line-ending rule, if it has one.
    pub fn line_ending(&self) -> Option<LineEnding> {
        self.line_ending
    }

    /// # Epson TM-T88IV
    ///
    /// Baseline commands without double size mode (`ds`/`nods`), which this
    /// hardware does not support.
    pub fn tm_t88iv() -> Self {
        Self::new("TM-T88IV", [Delta::Remove("ds"), Delta::Remove("nods")])
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Model identifiers and their factories
static MODELS: &[(&str, fn() -> Model)] = &[("TM-T88IV", Model::tm_t88iv)];

/// Resolve a model identifier from the registry.
pub fn resolve(identifier: &str) -> Result<Model> {
    MODELS
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, factory)| factory())
        .ok_or_else(|| EtpError::ModelNotSupported(identifier.to_string()))
}

/// Registered model identifiers
pub fn models() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(|(id, _)| *id)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, Invoke};

    #[test]
    fn test_resolve_tm_t88iv() {
        let model = resolve("TM-T88IV").unwrap();
        assert_eq!(model.name(), "TM-T88IV");
        assert!(model.line_ending().is_none());
        assert!(!model.commands().contains("ds"));
        assert!(!model.commands().contains("nods"));
        assert_eq!(model.commands().len(), command::common().len() - 2);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("TM-X").unwrap_err();
        assert!(matches!(err, EtpError::ModelNotSupported(ref m) if m == "TM-X"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve("tm-t88iv").is_err());
    }

    #[test]
    fn test_models_lists_registry() {
        assert_eq!(models().collect::<Vec<_>>(), vec!["TM-T88IV"]);
    }

    #[test]
    fn test_model_does_not_touch_baseline() {
        let _ = Model::new("custom", [Delta::Remove("b")]);
        assert!(command::common().contains("b"));
    }

    #[test]
    fn test_model_adds_command() {
        let model = Model::new(
            "custom",
            [Delta::Add("cut", Command::new("Cut paper", Invoke::Nullary(|| vec![0x1D, 0x56, 0x00])))],
        );
        assert!(model.commands().contains("cut"));
    }

    #[test]
    fn test_line_ending_crlf() {
        assert_eq!(LineEnding::CrLf.apply("a\nb\r\nc"), "a\r\nb\r\nc");
        assert_eq!(LineEnding::CrLf.apply("a\n\n"), "a\r\n\r\n");
    }

    #[test]
    fn test_line_ending_other() {
        assert_eq!(LineEnding::Lf.apply("a\r\nb\n"), "a\nb\n");
        assert_eq!(LineEnding::Cr.apply("a\r\nb\n"), "a\rb\r");
    }

    #[test]
    fn test_line_ending_without_newline_borrows() {
        assert!(matches!(LineEnding::CrLf.apply("no break\r"), Cow::Borrowed("no break\r")));
    }
}
