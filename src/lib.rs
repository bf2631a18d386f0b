//! # etp - ESC/POS Template Printer
//!
//! etp renders text templates into the raw byte stream understood by
//! ESC/POS-compatible thermal receipt printers. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders and code pages
//! - **Command tables**: named, typed commands per printer model
//! - **Template rendering**: handlebars templates with commands bound as helpers
//!
//! ## Quick Start
//!
//! ```
//! use etp::Renderer;
//! use serde_json::json;
//!
//! let template = "{{center}}{{b}}{{shop}}{{nob}}\n{{left}}{{#each items}}{{this}}\n{{/each}}{{pf 3}}";
//! let renderer = Renderer::new("TM-T88IV", template)?;
//!
//! let bytes = renderer.render(&json!({
//!     "shop": "Pekárna",
//!     "items": ["rohlík", "chléb"],
//! }))?;
//!
//! // ESC @, ESC t 18, then the receipt
//! assert_eq!(&bytes[..5], &[0x1B, 0x40, 0x1B, 0x74, 0x12]);
//! # Ok::<(), etp::EtpError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and code pages |
//! | [`command`] | Command tables and argument checking |
//! | [`printer`] | Printer models and the model registry |
//! | [`template`] | The template renderer and encoding pipeline |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! - Epson TM-T88IV
//!
//! Without a model, the baseline ESC/POS command set is used.

pub mod command;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod template;

// Re-exports for convenience
pub use error::EtpError;
pub use printer::Model;
pub use protocol::codepage::CodePage;
pub use template::Renderer;
