//! Help-text rendering.
//!
//! Renders a resolved command node (or bare tool-level help) into the
//! NAME/SYNOPSIS/DESCRIPTION/ARGUMENTS/COMMANDS block existing tooling
//! expects, byte for byte: tab-indented lines, a four-space gutter between
//! the flag column and its usage text, and a terminating blank line.
//! Sections with nothing to say are omitted entirely.
//!
//! [`render`] is pure; [`write_help`] targets any [`io::Write`] so tests can
//! capture bytes; [`print_help`] writes to stdout and treats a write failure
//! as a fatal, unrecoverable fault.
//!
//! # Examples
//!
//! ```
//! use command_tree_core::{Command, render};
//!
//! let serve = Command::new(|c| {
//!     c.setup("serve", "run the server");
//!     c.flag(|f| f.required("port", "listen port"));
//! });
//!
//! let text = render("tool", "deployment tool", Some(&serve), &[]);
//! assert!(text.contains("SYNOPSIS\n\ttool serve [arg]\n"));
//! assert!(text.contains("--port"));
//! ```

use std::io::{self, Write};

use crate::command::Command;

/// Renders the help block for `node` as seen from `tool`.
///
/// `path` holds the command-name tokens consumed before reaching `node`;
/// together with the node's own name they reproduce the invoked command path
/// in the SYNOPSIS line. With `node` as `None` only the tool-level NAME
/// section is rendered (top-level bare help).
pub fn render(tool: &str, tool_desc: &str, node: Option<&Command>, path: &[String]) -> String {
    let mut out = String::new();

    if !tool_desc.is_empty() {
        out.push_str("NAME\n");
        out.push_str(&format!("\t{tool} - {tool_desc}\n"));
    }

    if let Some(node) = node {
        out.push_str("SYNOPSIS\n");
        out.push_str(&format!("\t{} [arg]\n", synopsis_path(tool, path, node.name())));

        if !node.description().is_empty() {
            out.push_str("DESCRIPTION\n");
            out.push_str(&format!("\t{}\n", node.description()));
        }

        let flag_rows = flag_rows(node);
        if !flag_rows.is_empty() {
            out.push_str("ARGUMENTS\n");
            for row in flag_rows {
                out.push_str(&format!("\t{row}\n"));
            }
        }

        let child_rows = child_rows(node);
        if !child_rows.is_empty() {
            out.push_str("COMMANDS\n");
            for row in child_rows {
                out.push_str(&format!("\t{row}\n"));
            }
        }
    }

    out.push('\n');
    out
}

/// Renders help for `node` into `w`.
pub fn write_help(
    mut w: impl Write,
    tool: &str,
    tool_desc: &str,
    node: Option<&Command>,
    path: &[String],
) -> io::Result<()> {
    w.write_all(render(tool, tool_desc, node, path).as_bytes())?;
    w.flush()
}

/// Renders help for `node` to standard output.
///
/// A write failure here is an unrecoverable output-channel fault and aborts
/// the process, matching the handling of tree-validation failures.
pub fn print_help(tool: &str, tool_desc: &str, node: Option<&Command>, path: &[String]) {
    if let Err(err) = write_help(io::stdout().lock(), tool, tool_desc, node, path) {
        crate::fatal(format!("help output write failed: {err}"));
    }
}

/// Joins the non-empty segments of the invoked command path with single
/// spaces: tool name, preceding tokens, then the node's own name (empty for
/// the root).
fn synopsis_path(tool: &str, path: &[String], name: &str) -> String {
    let mut segments = vec![tool];
    segments.extend(path.iter().map(String::as_str));
    if !name.is_empty() {
        segments.push(name);
    }
    segments.join(" ")
}

/// Aligned flag-table rows.
///
/// Column width is the widest `dashes + name` over all flags plus a
/// two-space margin; single-character names get one dash, longer names two.
/// Optional flags carry a `(default: <value>)` annotation; required flags
/// leave the slot empty.
fn flag_rows(node: &Command) -> Vec<String> {
    let mut width = 0;
    node.flags().info(|_, name, _, _| {
        let dashes = if name.len() > 1 { 2 } else { 1 };
        width = width.max(name.len() + dashes);
    });
    width += 2;

    let mut rows = Vec::new();
    node.flags().info(|required, name, value, usage| {
        let dashes = if name.len() > 1 { 2 } else { 1 };
        let default = if required {
            String::new()
        } else {
            format!("(default: {value})")
        };
        rows.push(format!(
            "{}{}{}    {} {}",
            "-".repeat(dashes),
            name,
            " ".repeat(width - name.len() - dashes),
            usage,
            default,
        ));
    });
    rows
}

/// Aligned subcommand-table rows, sorted lexicographically by name.
///
/// Only immediate children are listed. Sorting happens on a collected copy;
/// the tree's registration order is left untouched.
fn child_rows(node: &Command) -> Vec<String> {
    let mut children: Vec<&Command> = node.children().iter().collect();
    if children.is_empty() {
        return Vec::new();
    }
    children.sort_by(|a, b| a.name().cmp(b.name()));

    let width = children
        .iter()
        .map(|child| child.name().len())
        .max()
        .unwrap_or(0)
        + 3;

    children
        .iter()
        .map(|child| {
            format!(
                "{}{}{}",
                child.name(),
                " ".repeat(width - child.name().len()),
                child.description(),
            )
        })
        .collect()
}
