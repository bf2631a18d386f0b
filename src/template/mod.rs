//! # Template Renderer
//!
//! Renders a handlebars template into the byte stream an ESC/POS printer
//! understands.
//!
//! ## Template Syntax
//!
//! Commands of the model's table are bound as helpers, data is referenced by
//! name:
//!
//! ```text
//! {{center}}{{b}}{{shop}}{{nob}}
//! {{left}}{{#each items}}{{name}} {{price}}
//! {{/each}}{{marginLeft 300}}{{font "Bb"}}TOTAL {{total}}
//! {{pf 3}}
//! ```
//!
//! ## Render Pipeline
//!
//! 1. Pick the model's command table (or the baseline table without a model)
//! 2. Bind every command plus `raw`, `esc`, `rawFile` as helpers
//! 3. Encode the template source into the code page, normalize line endings
//! 4. Encode the runtime data into the code page
//! 5. Execute the template
//! 6. Prepend `ESC @` and the code page selection, unless commands are suppressed
//!
//! Nothing is written to the sink unless every step succeeds.
//!
//! ## Example
//!
//! ```
//! use etp::template::Renderer;
//! use serde_json::json;
//!
//! let renderer = Renderer::new("TM-T88IV", "{{b}}{{name}}{{nob}}")?;
//! let bytes = renderer.render(&json!({"name": "Čaj"}))?;
//! assert_eq!(
//!     bytes,
//!     vec![0x1B, 0x40, 0x1B, 0x74, 0x12, 0x1B, 0x45, 0x01, 0xAC, 0x61, 0x6A, 0x1B, 0x45, 0x00]
//! );
//! # Ok::<(), etp::EtpError>(())
//! ```

pub mod bindings;
pub mod encode;
pub mod fragment;

use std::borrow::Cow;
use std::io::Write;

use handlebars::Handlebars;
use serde_json::Value;
use tracing::debug;

use crate::command::{self, CommandTable, Delta};
use crate::error::{EtpError, Result};
use crate::printer::{self, Model};
use crate::protocol::codepage::CodePage;
use crate::protocol::commands;

/// Name templates are registered under unless one is given
const DEFAULT_NAME: &str = "template";

/// # Renderer
///
/// Holds one template and renders it against any number of data values.
/// Rendering never mutates the renderer.
#[derive(Debug, Clone)]
pub struct Renderer {
    model: Option<Model>,
    template: String,
    name: String,
    suppress_commands: bool,
    code_page: CodePage,
}

impl Renderer {
    /// Create a renderer for a registered model.
    ///
    /// An empty `model` means no model: only the baseline commands are bound.
    ///
    /// ## Errors
    ///
    /// - [`EtpError::ModelNotSupported`] for an unknown model identifier
    /// - [`EtpError::InvalidTemplateEncoding`] if `template` is not UTF-8
    pub fn new(model: &str, template: impl AsRef<[u8]>) -> Result<Self> {
        let model = match model {
            "" => None,
            id => Some(printer::resolve(id)?),
        };
        let template = std::str::from_utf8(template.as_ref())?;
        Ok(Self::with_model(model, template))
    }

    /// Create a renderer for an explicit model, registered or not.
    pub fn with_model(model: Option<Model>, template: &str) -> Self {
        Self {
            model,
            template: template.to_string(),
            name: DEFAULT_NAME.to_string(),
            suppress_commands: false,
            code_page: CodePage::default(),
        }
    }

    /// Render plain text only: every binding expands to nothing and the
    /// initialization prologue is left out.
    pub fn suppress_commands(mut self, suppress: bool) -> Self {
        self.suppress_commands = suppress;
        self
    }

    /// Target a different code page (PC852 by default).
    pub fn code_page(mut self, code_page: CodePage) -> Self {
        self.code_page = code_page;
        self
    }

    /// Name used for the template in error messages.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// The command table in effect: the model's, or the baseline.
    pub fn table(&self) -> &CommandTable {
        match &self.model {
            Some(model) => model.commands(),
            None => command::common(),
        }
    }

    /// Everything a template can call: the helpers plus the command table.
    pub fn commands(&self) -> CommandTable {
        let table = self.table();
        CommandTable::with_deltas(
            bindings::helpers(),
            table.iter().map(|(name, command)| Delta::Add(name, *command)),
        )
    }

    /// Render `data` into a complete byte stream.
    pub fn render(&self, data: &Value) -> Result<Vec<u8>> {
        debug!(
            template = %self.name,
            model = self.model.as_ref().map(Model::name).unwrap_or("none"),
            code_page = %self.code_page,
            suppress = self.suppress_commands,
            "rendering template"
        );

        let source = self.print_source()?;
        let data = encode::encode_value(self.code_page, data)?;

        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        bindings::register(
            &mut registry,
            &self.commands(),
            self.code_page,
            self.suppress_commands,
        );
        registry
            .register_template_string(&self.name, &source)
            .map_err(|e| EtpError::TemplateExecution(e.to_string()))?;

        let rendered = registry
            .render(&self.name, &data)
            .map_err(|e| EtpError::TemplateExecution(e.to_string()))?;

        let mut out = self.prologue();
        out.extend(fragment::to_bytes(&rendered).map_err(|ch| EtpError::Encoding {
            ch,
            code_page: self.code_page.name(),
        })?);

        debug!(bytes = out.len(), "render complete");
        Ok(out)
    }

    /// Render `data` and write the result to `w` in one piece.
    ///
    /// On error nothing has been written.
    pub fn render_to<W: Write>(&self, w: &mut W, data: &Value) -> Result<()> {
        let bytes = self.render(data)?;
        w.write_all(&bytes)?;
        Ok(())
    }

    /// Initialization sequence sent before the template output
    fn prologue(&self) -> Vec<u8> {
        if self.suppress_commands {
            return Vec::new();
        }
        let mut out = commands::init();
        out.extend(self.code_page.select());
        out
    }

    /// The template source as the device will receive it: encoded into the
    /// code page with line endings normalized.
    fn print_source(&self) -> Result<String> {
        let encoded = encode::encode_str(self.code_page, &self.template)?;
        let line_ending = self
            .model
            .as_ref()
            .and_then(Model::line_ending)
            .unwrap_or_default();
        let normalized = match line_ending.apply(&encoded) {
            Cow::Owned(normalized) => Some(normalized),
            Cow::Borrowed(_) => None,
        };
        Ok(normalized.unwrap_or(encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::LineEnding;
    use serde_json::json;

    const PROLOGUE: [u8; 5] = [0x1B, 0x40, 0x1B, 0x74, 0x12];

    fn with_prologue(body: &[u8]) -> Vec<u8> {
        let mut out = PROLOGUE.to_vec();
        out.extend_from_slice(body);
        out
    }

    #[test]
    fn test_empty_model_is_baseline() {
        let renderer = Renderer::new("", "{{ds}}").unwrap();
        assert!(renderer.model().is_none());
        assert_eq!(renderer.render(&json!(null)).unwrap(), with_prologue(&[0x1B, 0x47, 0x01]));
    }

    #[test]
    fn test_unknown_model() {
        let err = Renderer::new("TM-NOPE", "x").unwrap_err();
        assert!(matches!(err, EtpError::ModelNotSupported(_)));
    }

    #[test]
    fn test_invalid_utf8_template() {
        let err = Renderer::new("", [b'a', 0xFF, b'b']).unwrap_err();
        assert!(matches!(err, EtpError::InvalidTemplateEncoding(_)));
    }

    #[test]
    fn test_plain_text() {
        let renderer = Renderer::new("", "Hello").unwrap();
        assert_eq!(renderer.render(&json!({})).unwrap(), with_prologue(b"Hello"));
    }

    #[test]
    fn test_template_text_is_encoded() {
        let renderer = Renderer::new("", "čaj").unwrap();
        assert_eq!(renderer.render(&json!({})).unwrap(), with_prologue(&[0x9F, 0x61, 0x6A]));
    }

    #[test]
    fn test_commands_include_helpers() {
        let renderer = Renderer::new("TM-T88IV", "").unwrap();
        let commands = renderer.commands();
        for name in ["raw", "esc", "rawFile", "b", "font", "marginLeft"] {
            assert!(commands.contains(name), "missing {}", name);
        }
        assert!(!commands.contains("ds"));
    }

    #[test]
    fn test_custom_line_ending() {
        let model = Model::new("lf-only", Vec::<Delta>::new()).with_line_ending(LineEnding::Lf);
        let renderer = Renderer::with_model(Some(model), "a\r\nb\n");
        assert_eq!(renderer.render(&json!(null)).unwrap(), with_prologue(b"a\nb\n"));
    }

    #[test]
    fn test_code_page_pc437() {
        let renderer = Renderer::new("", "{{word}}")
            .unwrap()
            .code_page(CodePage::Pc437);
        assert_eq!(
            renderer.render(&json!({"word": "año"})).unwrap(),
            vec![0x1B, 0x40, 0x1B, 0x74, 0x00, 0x61, 0xA4, 0x6F]
        );
    }

    #[test]
    fn test_renderer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }
}
