//! # Command Tables
//!
//! A command table maps the short names a template uses (`b`, `center`,
//! `marginLeft`) to [`Command`]s: a description plus a typed callable that
//! produces final device bytes.
//!
//! ## Argument Shapes
//!
//! Each command declares the arguments it takes through its [`Invoke`]
//! variant. [`Command::call`] checks the supplied [`Arg`]s against that shape,
//! so a wrong argument count or an out-of-range value is reported by name
//! before any bytes are produced.
//!
//! ## Specialization
//!
//! Tables are never edited in place. A model builds its table from the
//! baseline [`common()`] table plus an ordered list of [`Delta`]s:
//!
//! ```
//! use etp::command::{self, CommandTable, Delta};
//!
//! let table = CommandTable::with_deltas(command::common(), [
//!     Delta::Remove("ds"),
//!     Delta::Remove("nods"),
//! ]);
//! assert!(table.get("ds").is_none());
//! assert!(command::common().get("ds").is_some());
//! ```

mod common;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{EtpError, Result};

pub use common::common;

/// The callable behind a command, one variant per argument shape
#[derive(Clone, Copy)]
pub enum Invoke {
    /// No arguments: `{{b}}`
    Nullary(fn() -> Vec<u8>),
    /// One byte (0–255), validated by the command: `{{pf 3}}`
    Byte(fn(u8) -> Result<Vec<u8>>),
    /// One 16-bit signed integer: `{{marginLeft 300}}`
    Int16(fn(i16) -> Vec<u8>),
    /// One string, validated by the command: `{{font "Bb"}}`
    Text(fn(&str) -> Result<Vec<u8>>),
    /// Any number of bytes: `{{raw 27 64}}`
    Bytes(fn(&[u8]) -> Vec<u8>),
    /// One file path: `{{rawFile "logo.bin"}}`
    File(fn(&str) -> Vec<u8>),
}

impl Invoke {
    /// Short signature used in listings and error messages
    pub fn signature(&self) -> &'static str {
        match self {
            Self::Nullary(_) => "",
            Self::Byte(_) => "(byte)",
            Self::Int16(_) => "(int16)",
            Self::Text(_) => "(string)",
            Self::Bytes(_) => "(...byte)",
            Self::File(_) => "(path)",
        }
    }
}

impl fmt::Debug for Invoke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoke{}", self.signature())
    }
}

/// A template argument before it is checked against a command's shape
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Str(String),
}

impl Arg {
    fn describe(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Str(s) => format!("{:?}", s),
        }
    }

    /// Integer value; numeric strings (`"27"`, `"0x1b"`) are accepted.
    fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => parse_int(s.trim()),
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}

/// A named printer command
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub description: &'static str,
    pub invoke: Invoke,
}

impl Command {
    pub const fn new(description: &'static str, invoke: Invoke) -> Self {
        Self {
            description,
            invoke,
        }
    }

    /// Check `args` against the command's shape and produce its bytes.
    ///
    /// `name` is only used to label errors.
    pub fn call(&self, name: &str, args: &[Arg]) -> Result<Vec<u8>> {
        let bytes = match self.invoke {
            Invoke::Nullary(f) => {
                expect_arity(name, args, 0)?;
                f()
            }
            Invoke::Byte(f) => {
                expect_arity(name, args, 1)?;
                f(byte_arg(name, 1, &args[0])?)?
            }
            Invoke::Int16(f) => {
                expect_arity(name, args, 1)?;
                f(int16_arg(name, &args[0])?)
            }
            Invoke::Text(f) => {
                expect_arity(name, args, 1)?;
                f(str_arg(name, &args[0])?)?
            }
            Invoke::Bytes(f) => {
                let bytes = args
                    .iter()
                    .enumerate()
                    .map(|(i, a)| byte_arg(name, i + 1, a))
                    .collect::<Result<Vec<u8>>>()?;
                f(&bytes)
            }
            Invoke::File(f) => {
                expect_arity(name, args, 1)?;
                f(str_arg(name, &args[0])?)
            }
        };
        Ok(bytes)
    }
}

fn expect_arity(name: &str, args: &[Arg], n: usize) -> Result<()> {
    if args.len() == n {
        return Ok(());
    }
    Err(EtpError::InvalidCommand(format!(
        "{}: wrong number of args: got {} want {}",
        name,
        args.len(),
        n
    )))
}

fn byte_arg(name: &str, pos: usize, arg: &Arg) -> Result<u8> {
    arg.as_int()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| {
            EtpError::InvalidCommand(format!(
                "{}: argument {} must be a byte (0-255), got {}",
                name,
                pos,
                arg.describe()
            ))
        })
}

fn int16_arg(name: &str, arg: &Arg) -> Result<i16> {
    arg.as_int()
        .and_then(|n| i16::try_from(n).ok())
        .ok_or_else(|| {
            EtpError::InvalidCommand(format!(
                "{}: argument must be an int16 ({}..={}), got {}",
                name,
                i16::MIN,
                i16::MAX,
                arg.describe()
            ))
        })
}

fn str_arg<'a>(name: &str, arg: &'a Arg) -> Result<&'a str> {
    match arg {
        Arg::Str(s) => Ok(s),
        Arg::Int(n) => Err(EtpError::InvalidCommand(format!(
            "{}: argument must be a string, got {}",
            name, n
        ))),
    }
}

/// One step of table specialization
#[derive(Debug, Clone)]
pub enum Delta {
    Remove(&'static str),
    Add(&'static str, Command),
}

/// An immutable name → command mapping, ordered by name
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: BTreeMap<&'static str, Command>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `base` and apply `deltas` in order. Later deltas win.
    pub fn with_deltas(base: &CommandTable, deltas: impl IntoIterator<Item = Delta>) -> Self {
        let mut table = base.clone();
        for delta in deltas {
            match delta {
                Delta::Remove(name) => {
                    table.commands.remove(name);
                }
                Delta::Add(name, command) => {
                    table.commands.insert(name, command);
                }
            }
        }
        table
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Command)> {
        self.commands.iter().map(|(name, command)| (*name, command))
    }

    /// Name, signature and description of every command
    pub fn describe(&self) -> Vec<CommandInfo> {
        self.iter()
            .map(|(name, command)| CommandInfo {
                name,
                signature: command.invoke.signature(),
                description: command.description,
            })
            .collect()
    }
}

impl FromIterator<(&'static str, Command)> for CommandTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, Command)>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

/// Listing entry for a command
#[derive(Debug, Clone, Serialize)]
pub struct CommandInfo {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}
