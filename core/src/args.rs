//! Positional-argument validation plumbing.
//!
//! A command node may carry at most one host-supplied validator for its
//! positional (non-flag) arguments. The validator receives the raw argument
//! sequence and returns a possibly-transformed sequence or an error; with no
//! validator installed, arguments pass through unchanged.

use anyhow::Result;

/// Host-supplied positional-argument validator.
///
/// Takes the raw positional arguments and returns the (possibly rewritten)
/// sequence the handler should see, or an error describing why they are
/// unacceptable.
pub type ArgValidator = Box<dyn Fn(&[String]) -> Result<Vec<String>> + Send + Sync>;

/// Holder for a node's optional positional-argument validator.
#[derive(Default)]
pub struct Argument {
    validator: Option<ArgValidator>,
}

impl Argument {
    /// Installs the validator, replacing any previous one.
    pub fn set(&mut self, validator: ArgValidator) {
        self.validator = Some(validator);
    }

    /// Runs the installed validator, or passes `args` through unchanged when
    /// none is installed. The validator's result is returned verbatim.
    pub fn run(&self, args: &[String]) -> Result<Vec<String>> {
        match &self.validator {
            Some(validator) => validator(args),
            None => Ok(args.to_vec()),
        }
    }
}

impl std::fmt::Debug for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argument")
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
