//! Command-node validation.
//!
//! Validation runs once, at the moment a node is registered into the tree,
//! and checks the two structural invariants a node must satisfy: non-root
//! nodes are named, and an attached handler declares exactly one parameter
//! per flag plus the fixed leading argument-list parameter.
//!
//! # Examples
//!
//! ```
//! use command_tree_core::{Command, ValidationError};
//!
//! let nameless = Command::new(|c| c.setup("", "no name"));
//! assert_eq!(nameless.validate(), Err(ValidationError::EmptyName));
//!
//! let grouping = Command::new(|c| c.setup("remote", "manage remotes"));
//! assert!(grouping.validate().is_ok());
//! ```

use thiserror::Error;

use crate::command::Command;

/// Structural problems found when validating a command node.
///
/// Both variants are configuration defects: the tree-registration path
/// treats them as fatal, while [`Command::validate`] and
/// [`Command::try_add_command`] return them for callers that want to handle
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A non-root node has no name.
    #[error("command name is empty, use setup(name, description)")]
    EmptyName,
    /// A handler's declared parameter count does not match the node's flags.
    #[error(
        "command [{name}] handler declares {declared} parameters but its flags require {expected}"
    )]
    ArityMismatch {
        /// Name of the offending command.
        name: String,
        /// Parameter count the handler declared.
        declared: usize,
        /// Required count: declared flag count plus the leading parameter.
        expected: usize,
    },
}

/// Checks a node's invariants, in order.
///
/// 1. A non-root node with an empty name fails with
///    [`ValidationError::EmptyName`].
/// 2. A node without a handler is a valid grouping node; nothing further is
///    checked.
/// 3. An attached handler must declare `flags().count() + 1` parameters, the
///    extra one being the fixed leading argument-list parameter every
///    handler takes. Anything else fails with
///    [`ValidationError::ArityMismatch`].
pub fn validate_command(cmd: &Command) -> Result<(), ValidationError> {
    if cmd.name().is_empty() && !cmd.is_root() {
        return Err(ValidationError::EmptyName);
    }

    let Some(handler) = cmd.handler() else {
        return Ok(());
    };

    let expected = cmd.flags().count() + 1;
    if handler.params() != expected {
        return Err(ValidationError::ArityMismatch {
            name: cmd.name().to_string(),
            declared: handler.params(),
            expected,
        });
    }

    Ok(())
}
