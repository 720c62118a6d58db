//! Flag declarations for command nodes.
//!
//! Each [`Command`](crate::Command) owns one [`Flags`] store holding the
//! flags it declares: name, usage text, required-ness, and a typed default
//! value. The store preserves declaration order, which the help renderer and
//! the handler-arity check both rely on.
//!
//! # Examples
//!
//! ```
//! use command_tree_core::{FlagValue, Flags};
//!
//! let mut flags = Flags::default();
//! flags.string("host", "127.0.0.1", "bind address");
//! flags.int("port", 8080, "listen port");
//! flags.required("token", "auth token");
//!
//! assert_eq!(flags.count(), 3);
//!
//! let mut names = Vec::new();
//! flags.info(|required, name, _, _| names.push((required, name.to_string())));
//! assert_eq!(names[0], (false, "host".to_string()));
//! assert_eq!(names[2], (true, "token".to_string()));
//! ```

use std::fmt;

/// Default value carried by a declared flag.
///
/// The `Display` impl is what the help renderer embeds in the
/// `(default: <value>)` annotation, so it prints bare values with no quoting
/// or type decoration.
///
/// # Examples
///
/// ```
/// use command_tree_core::FlagValue;
///
/// assert_eq!(FlagValue::Bool(true).to_string(), "true");
/// assert_eq!(FlagValue::Int(8080).to_string(), "8080");
/// assert_eq!(FlagValue::Float(2.5).to_string(), "2.5");
/// assert_eq!(FlagValue::String("eu-west".into()).to_string(), "eu-west");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// Boolean flag default.
    Bool(bool),
    /// Integer flag default.
    Int(i64),
    /// Floating-point flag default.
    Float(f64),
    /// String flag default.
    String(String),
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(v) => write!(f, "{v}"),
            FlagValue::Int(v) => write!(f, "{v}"),
            FlagValue::Float(v) => write!(f, "{v}"),
            FlagValue::String(v) => f.write_str(v),
        }
    }
}

/// A single declared flag.
#[derive(Debug, Clone)]
struct Flag {
    required: bool,
    name: String,
    value: FlagValue,
    usage: String,
}

/// Ordered store of a command's declared flags.
///
/// Duplicates are not rejected; declaration order is enumeration order.
/// Required flags carry an empty-string placeholder value since no default
/// is ever shown for them.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    entries: Vec<Flag>,
}

impl Flags {
    /// Number of declared flags.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Visits every declared flag in declaration order.
    ///
    /// The visitor receives `(required, name, default value, usage text)`.
    /// Enumeration is deterministic: same store, same sequence.
    pub fn info(&self, mut visit: impl FnMut(bool, &str, &FlagValue, &str)) {
        for flag in &self.entries {
            visit(flag.required, &flag.name, &flag.value, &flag.usage);
        }
    }

    /// Declares an optional boolean flag.
    pub fn bool(&mut self, name: impl Into<String>, value: bool, usage: impl Into<String>) {
        self.push(false, name.into(), FlagValue::Bool(value), usage.into());
    }

    /// Declares an optional integer flag.
    pub fn int(&mut self, name: impl Into<String>, value: i64, usage: impl Into<String>) {
        self.push(false, name.into(), FlagValue::Int(value), usage.into());
    }

    /// Declares an optional floating-point flag.
    pub fn float(&mut self, name: impl Into<String>, value: f64, usage: impl Into<String>) {
        self.push(false, name.into(), FlagValue::Float(value), usage.into());
    }

    /// Declares an optional string flag.
    pub fn string(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        usage: impl Into<String>,
    ) {
        self.push(false, name.into(), FlagValue::String(value.into()), usage.into());
    }

    /// Declares a required flag.
    ///
    /// Required flags have no default; help output renders no
    /// `(default: …)` annotation for them.
    pub fn required(&mut self, name: impl Into<String>, usage: impl Into<String>) {
        self.push(true, name.into(), FlagValue::String(String::new()), usage.into());
    }

    fn push(&mut self, required: bool, name: String, value: FlagValue, usage: String) {
        self.entries.push(Flag {
            required,
            name,
            value,
            usage,
        });
    }
}
