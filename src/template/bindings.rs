//! Template bindings: commands exposed to handlebars as helpers.
//!
//! Every command becomes a helper that writes its bytes verbatim into the
//! output. Besides the model's table, three helpers are always bound:
//!
//! | Helper | Output |
//! |--------|--------|
//! | `raw 27 64` | the given bytes |
//! | `esc 64` | ESC followed by the given bytes |
//! | `rawFile "logo.bin"` | the file's contents, or nothing if it cannot be read |

use std::sync::LazyLock;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};
use serde_json::Value;
use tracing::warn;

use super::fragment;
use crate::command::{Arg, Command, CommandTable, Invoke};
use crate::error::{EtpError, Result};
use crate::protocol::codepage::CodePage;
use crate::protocol::commands::ESC;

/// Name handlebars looks up when a helper or value does not exist
const HELPER_MISSING: &str = "helperMissing";

static HELPERS: LazyLock<CommandTable> = LazyLock::new(|| {
    [
        (
            "raw",
            Command::new(
                "(...byte) Write bytes without encoding",
                Invoke::Bytes(|b| b.to_vec()),
            ),
        ),
        (
            "esc",
            Command::new(
                "(...byte) Write escape command followed by bytes of your choice (equals \"raw 0x1b ...byte\")",
                Invoke::Bytes(esc),
            ),
        ),
        (
            "rawFile",
            Command::new(
                "(string) Write file content without encoding. If file read fails, write nothing.",
                Invoke::File(raw_file),
            ),
        ),
    ]
    .into_iter()
    .collect()
});

/// Helpers bound regardless of model
pub fn helpers() -> &'static CommandTable {
    &HELPERS
}

fn esc(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 1);
    out.push(ESC);
    out.extend_from_slice(bytes);
    out
}

fn raw_file(path: &str) -> Vec<u8> {
    // A missing file prints nothing rather than failing the render.
    std::fs::read(path).unwrap_or_else(|e| {
        warn!(path, error = %e, "rawFile: could not read file, writing nothing");
        Vec::new()
    })
}

/// Register every entry of `bindings` on `registry`.
///
/// With `suppress` set each binding is registered as a no-op, so the template
/// renders its text without any device commands.
pub fn register(
    registry: &mut Handlebars<'static>,
    bindings: &CommandTable,
    code_page: CodePage,
    suppress: bool,
) {
    for (name, command) in bindings.iter() {
        if suppress {
            registry.register_helper(name, Box::new(Suppressed));
        } else {
            registry.register_helper(
                name,
                Box::new(CommandHelper {
                    name,
                    command: *command,
                    code_page,
                }),
            );
        }
    }
    registry.register_helper(HELPER_MISSING, Box::new(Unresolved));
}

/// A command bound as a helper
struct CommandHelper {
    name: &'static str,
    command: Command,
    code_page: CodePage,
}

impl HelperDef for CommandHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let args = h
            .params()
            .iter()
            .map(|p| to_arg(self.name, self.code_page, p.value()))
            .collect::<Result<Vec<_>>>()
            .map_err(render_error)?;
        let bytes = self.command.call(self.name, &args).map_err(render_error)?;
        out.write(&fragment::from_bytes(&bytes))?;
        Ok(())
    }
}

/// Stand-in for every binding when commands are suppressed
struct Suppressed;

impl HelperDef for Suppressed {
    fn call<'reg: 'rc, 'rc>(
        &self,
        _: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        _: &mut dyn Output,
    ) -> HelperResult {
        Ok(())
    }
}

/// Fails on names that are neither bound nor present in the data
struct Unresolved;

impl HelperDef for Unresolved {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        _: &mut dyn Output,
    ) -> HelperResult {
        Err(RenderError::new(format!(
            "function \"{}\" not defined",
            h.name()
        )))
    }
}

/// Convert a template value into a command argument.
///
/// Strings arrive in the device code page and are decoded back to text, so
/// commands taking strings or paths see what the template author wrote.
fn to_arg(name: &str, code_page: CodePage, value: &Value) -> Result<Arg> {
    match value {
        Value::Number(n) => n.as_i64().map(Arg::Int).ok_or_else(|| {
            EtpError::InvalidCommand(format!("{}: argument {} is not an integer", name, n))
        }),
        Value::String(s) => fragment::to_bytes(s)
            .map(|bytes| Arg::Str(code_page.decode(&bytes)))
            .map_err(|ch| EtpError::Encoding {
                ch,
                code_page: code_page.name(),
            }),
        other => Err(EtpError::InvalidCommand(format!(
            "{}: unsupported argument {}",
            name, other
        ))),
    }
}

fn render_error(e: EtpError) -> RenderError {
    match e {
        EtpError::InvalidCommand(msg) => RenderError::new(msg),
        other => RenderError::new(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn call(name: &str, args: &[Arg]) -> Vec<u8> {
        helpers().get(name).unwrap().call(name, args).unwrap()
    }

    #[test]
    fn test_raw() {
        assert_eq!(call("raw", &[Arg::Int(0x1D), Arg::Int(0x56), Arg::Int(0)]), vec![0x1D, 0x56, 0x00]);
        assert_eq!(call("raw", &[]), Vec::<u8>::new());
    }

    #[test]
    fn test_esc() {
        assert_eq!(call("esc", &[Arg::Int(0x40)]), vec![0x1B, 0x40]);
        assert_eq!(call("esc", &[]), vec![0x1B]);
    }

    #[test]
    fn test_raw_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x1B, 0x2A, 0x9F]).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        assert_eq!(call("rawFile", &[Arg::Str(path)]), vec![0x1B, 0x2A, 0x9F]);
    }

    #[test]
    fn test_raw_file_missing_is_empty() {
        let out = call("rawFile", &[Arg::Str("/nonexistent/etp/logo.bin".into())]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_to_arg_decodes_strings() {
        let carried = fragment::from_bytes(&[0x9F, b'a', b'j']);
        let arg = to_arg("x", CodePage::Pc852, &Value::String(carried)).unwrap();
        assert_eq!(arg, Arg::Str("čaj".to_string()));
    }

    #[test]
    fn test_to_arg_rejects_uncarried_text() {
        let err = to_arg("x", CodePage::Pc852, &Value::String("názov".into())).unwrap_err();
        assert!(matches!(err, EtpError::Encoding { ch: 'á', code_page: "PC852" }));
    }

    #[test]
    fn test_to_arg_rejects_other_values() {
        assert!(to_arg("x", CodePage::Pc852, &Value::Bool(true)).is_err());
        assert!(to_arg("x", CodePage::Pc852, &Value::Null).is_err());
        assert!(to_arg("x", CodePage::Pc852, &serde_json::json!(1.5)).is_err());
    }
}
