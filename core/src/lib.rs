//! Hierarchical command-line interfaces: subcommand trees, per-command flag
//! declarations, positional-argument validation, and rendered help text.
//!
//! This crate is the construction and description side of a CLI. The host
//! application builds a tree of [`Command`] nodes, each carrying its own
//! [`Flags`] store, an optional positional-argument validator, and an
//! optional attached [`Handler`]; the tree validates every node at
//! registration time, resolves name paths deterministically, and renders
//! aligned help text on demand. Tokenizing `argv` and invoking handlers is
//! the host dispatch loop's job, not this crate's.
//!
//! # Main entry points
//!
//! - [`Command::new`] — build a node through a configuration callback.
//! - [`Command::add_command`] — register validated children.
//! - [`Command::resolve`] — walk a token path to the node it names.
//! - [`render`] / [`print_help`] — produce the help block for a node.
//!
//! # Example
//!
//! ```
//! use command_tree_core::{Command, render};
//!
//! let mut root = Command::new(|c| c.setup("", "")).into_root();
//! root.add_command([Command::new(|c| {
//!     c.setup("serve", "run the server");
//!     c.flag(|f| {
//!         f.required("port", "listen port");
//!         f.bool("tls", false, "enable tls");
//!     });
//!     c.argument(|raw| Ok(raw.to_vec()));
//!     c.exec(3, |_args: &[String]| {});
//! })]);
//!
//! let tokens = vec!["serve".to_string(), "config.toml".to_string()];
//! let found = root.resolve(&tokens);
//! assert_eq!(found.node.name(), "serve");
//! assert_eq!(found.rest, &tokens[1..]);
//!
//! let help = render("mytool", "demo tool", Some(found.node), &[]);
//! assert!(help.contains("mytool serve [arg]"));
//! ```
//!
//! # Failure policy
//!
//! An invalid command tree is a programming defect discovered at startup,
//! not a runtime condition: [`Command::add_command`] aborts the process on a
//! validation failure, as does [`print_help`] on an output-stream fault.
//! The recoverable forms ([`Command::validate`],
//! [`Command::try_add_command`], [`write_help`]) return errors instead.

mod args;
mod command;
mod flags;
mod help;
mod validate;

pub use args::{ArgValidator, Argument};
pub use command::{Command, CommandBuilder, Handler, Resolution};
pub use flags::{FlagValue, Flags};
pub use help::{print_help, render, write_help};
pub use validate::{ValidationError, validate_command};

use std::fmt;
use std::process;

/// Aborts the process over an unrecoverable configuration or output fault,
/// after logging and printing the diagnostic.
pub(crate) fn fatal(message: impl fmt::Display) -> ! {
    tracing::error!("{message}");
    eprintln!("{message}");
    process::exit(1);
}
