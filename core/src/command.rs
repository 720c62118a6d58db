//! Command nodes and tree construction.
//!
//! A [`Command`] is one node of a subcommand tree: identity (name and
//! description), its own [`Flags`] store, an optional positional-argument
//! validator, an optional attached [`Handler`], and owned child nodes.
//!
//! Nodes are built through a configuration callback over a
//! [`CommandBuilder`], which exposes only the setter surface; everything
//! after construction goes through `Command`'s read-side API. Children are
//! validated at registration time and the topology is append-only.
//!
//! # Examples
//!
//! ```
//! use command_tree_core::Command;
//!
//! let mut root = Command::new(|c| {
//!     c.setup("", "deployment tool");
//! })
//! .into_root();
//!
//! let serve = Command::new(|c| {
//!     c.setup("serve", "run the server");
//!     c.flag(|f| f.required("port", "listen port"));
//!     c.exec(2, |args: &[String]| println!("serving {args:?}"));
//! });
//!
//! root.add_command([serve]);
//! assert!(root.find_child("serve").is_some());
//! ```

use std::any::Any;
use std::fmt;

use anyhow::Result;
use tracing::debug;

use crate::args::Argument;
use crate::flags::Flags;
use crate::validate::{ValidationError, validate_command};

/// Handler attached to a command node.
///
/// The callable is capability-erased: this crate never invokes it, so its
/// concrete signature is whatever the host's dispatch loop decided on. What
/// the crate does inspect is the declared formal-parameter count, stated by
/// the host at attachment time and checked during validation against the
/// node's flag count plus one (the fixed leading argument-list parameter).
///
/// # Examples
///
/// ```
/// use command_tree_core::Handler;
///
/// fn deploy(_args: &[String], _force: bool) {}
///
/// let handler = Handler::new(2, deploy as fn(&[String], bool));
/// assert_eq!(handler.params(), 2);
/// assert!(handler.downcast_ref::<fn(&[String], bool)>().is_some());
/// ```
pub struct Handler {
    params: usize,
    callable: Box<dyn Any + Send + Sync>,
}

impl Handler {
    /// Wraps a callable together with its declared formal-parameter count.
    pub fn new(params: usize, callable: impl Any + Send + Sync) -> Self {
        Self {
            params,
            callable: Box::new(callable),
        }
    }

    /// Declared formal-parameter count.
    pub fn params(&self) -> usize {
        self.params
    }

    /// The erased callable, for the dispatch loop to downcast and invoke.
    pub fn callable(&self) -> &(dyn Any + Send + Sync) {
        &*self.callable
    }

    /// Convenience downcast to the dispatch loop's invocation type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.callable.downcast_ref::<T>()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// One node of a command tree.
///
/// See the [module docs](self) for the construction pattern. After
/// construction the node is read-only apart from [`add_command`](Self::add_command),
/// which appends validated children.
#[derive(Debug, Default)]
pub struct Command {
    root: bool,
    name: String,
    description: String,
    flags: Flags,
    args: Argument,
    handler: Option<Handler>,
    children: Vec<Command>,
}

/// Setter-only view used while a [`Command`] is being configured.
///
/// The capability surface available during construction is deliberately
/// narrower than the read-side surface on `Command` itself; the split is
/// enforced by this being a distinct type.
pub struct CommandBuilder {
    cmd: Command,
}

impl CommandBuilder {
    /// Sets the node's name and description. Calling again overwrites.
    pub fn setup(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.cmd.name = name.into();
        self.cmd.description = description.into();
    }

    /// Declares flags through the node's [`Flags`] store.
    pub fn flag(&mut self, declare: impl FnOnce(&mut Flags)) {
        declare(&mut self.cmd.flags);
    }

    /// Installs the positional-argument validator.
    pub fn argument(
        &mut self,
        validator: impl Fn(&[String]) -> Result<Vec<String>> + Send + Sync + 'static,
    ) {
        self.cmd.args.set(Box::new(validator));
    }

    /// Attaches the handler with its declared formal-parameter count.
    ///
    /// No check happens here; the count is verified against the flag count
    /// when the node is registered (see [`Command::validate`]).
    pub fn exec(&mut self, params: usize, callable: impl Any + Send + Sync) {
        self.cmd.handler = Some(Handler::new(params, callable));
    }

    /// Registers already-built child nodes, validating each.
    ///
    /// Same semantics as [`Command::add_command`]: an invalid child aborts
    /// the process.
    pub fn command(&mut self, children: impl IntoIterator<Item = Command>) {
        self.cmd.add_command(children);
    }
}

impl Command {
    /// Builds a node through a configuration callback.
    ///
    /// The callback receives the setter-only [`CommandBuilder`]; the fully
    /// configured node is returned once it completes.
    pub fn new(configure: impl FnOnce(&mut CommandBuilder)) -> Self {
        let mut builder = CommandBuilder {
            cmd: Command::default(),
        };
        configure(&mut builder);
        builder.cmd
    }

    /// Marks this node as the tree's root.
    ///
    /// The root is the single entry node; its name is forced empty and it is
    /// exempt from the empty-name validation rule.
    pub fn into_root(mut self) -> Self {
        self.root = true;
        self.name.clear();
        self
    }

    /// Whether this node is the designated root.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// The node's name. Empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's description, used only for help output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read-only view of the node's declared flags.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// The attached handler, if any.
    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }

    /// Runs the node's positional-argument validator.
    ///
    /// With no validator installed, returns `args` unchanged; otherwise the
    /// validator's result is returned verbatim.
    pub fn run_argument_validator(&self, args: &[String]) -> Result<Vec<String>> {
        self.args.run(args)
    }

    /// First child whose name equals `name`, in registration order.
    ///
    /// Linear scan; command trees are shallow and small. Later siblings with
    /// the same name are shadowed.
    pub fn find_child(&self, name: &str) -> Option<&Command> {
        self.children.iter().find(|child| child.name == name)
    }

    /// The child nodes in registration order.
    pub fn children(&self) -> &[Command] {
        &self.children
    }

    /// Checks this node's structural invariants.
    ///
    /// Rules, in order: a non-root node must have a name; a node without a
    /// handler is a valid grouping node; an attached handler must declare
    /// exactly `flags().count() + 1` parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_command(self)
    }

    /// Validates `child` and appends it, returning the validation error
    /// instead of aborting.
    pub fn try_add_command(&mut self, child: Command) -> Result<(), ValidationError> {
        child.validate()?;
        debug!(command = %child.name, "registered subcommand");
        self.children.push(child);
        Ok(())
    }

    /// Validates and appends child nodes, in argument order.
    ///
    /// A validation failure here is a configuration defect, not a runtime
    /// condition: the process is aborted immediately with a diagnostic
    /// naming the offending command and rule. Use
    /// [`try_add_command`](Self::try_add_command) to handle the error
    /// instead.
    pub fn add_command(&mut self, children: impl IntoIterator<Item = Command>) {
        for child in children {
            if let Err(err) = self.try_add_command(child) {
                crate::fatal(&err);
            }
        }
    }

    /// Resolves a path of command-name tokens starting at this node.
    ///
    /// Each token is looked up with [`find_child`](Self::find_child); the
    /// walk stops at the first miss. The result is the last node reached
    /// (possibly this node itself) plus the unconsumed token tail, so the
    /// caller can tell "unknown command" apart from trailing positional
    /// arguments. Resolution never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::Command;
    ///
    /// let mut root = Command::new(|c| c.setup("", "")).into_root();
    /// root.add_command([Command::new(|c| c.setup("remote", "manage remotes"))]);
    ///
    /// let tokens: Vec<String> = vec!["remote".into(), "origin".into()];
    /// let found = root.resolve(&tokens);
    /// assert_eq!(found.node.name(), "remote");
    /// assert_eq!(found.rest, &tokens[1..]);
    /// ```
    pub fn resolve<'a>(&'a self, tokens: &'a [String]) -> Resolution<'a> {
        let mut node = self;
        for (i, token) in tokens.iter().enumerate() {
            match node.find_child(token) {
                Some(child) => node = child,
                None => return Resolution {
                    node,
                    rest: &tokens[i..],
                },
            }
        }
        Resolution { node, rest: &[] }
    }
}

/// Result of walking a token path through the tree.
///
/// `node` is the deepest node the tokens reached; `rest` is the token tail
/// that did not match any child.
#[derive(Debug)]
pub struct Resolution<'a> {
    /// Last successfully resolved node.
    pub node: &'a Command,
    /// Unconsumed tokens, starting at the first miss.
    pub rest: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn named(name: &str, description: &str) -> Command {
        Command::new(|c| c.setup(name, description))
    }

    #[test]
    fn test_builder_setup_overwrites() {
        let cmd = Command::new(|c| {
            c.setup("first", "first description");
            c.setup("second", "second description");
        });

        assert_eq!(cmd.name(), "second");
        assert_eq!(cmd.description(), "second description");
    }

    #[test]
    fn test_into_root_clears_name() {
        let root = named("tool", "a tool").into_root();

        assert!(root.is_root());
        assert_eq!(root.name(), "");
    }

    #[test]
    fn test_find_child_first_match_wins() {
        let mut root = named("", "").into_root();
        root.add_command([
            named("a", "original"),
            named("b", "other"),
            named("a", "shadowed"),
        ]);

        let found = root.find_child("a").unwrap();
        assert_eq!(found.description(), "original");
        assert_eq!(root.children().len(), 3);
    }

    #[test]
    fn test_children_keep_registration_order() {
        let mut root = named("", "").into_root();
        root.add_command([named("zebra", ""), named("apple", "")]);

        let names: Vec<&str> = root.children().iter().map(Command::name).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_try_add_command_rejects_empty_name() {
        let mut root = named("", "").into_root();
        let err = root
            .try_add_command(Command::new(|c| c.setup("", "nameless")))
            .unwrap_err();

        assert_eq!(err, ValidationError::EmptyName);
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_builder_command_nests() {
        let root = Command::new(|c| {
            c.setup("", "tool");
            c.command([Command::new(|c| {
                c.setup("remote", "manage remotes");
                c.command([Command::new(|c| c.setup("add", "add a remote"))]);
            })]);
        })
        .into_root();

        let remote = root.find_child("remote").unwrap();
        assert!(remote.find_child("add").is_some());
    }

    #[test]
    fn test_resolve_walks_to_leaf() {
        let mut root = named("", "").into_root();
        let mut remote = named("remote", "");
        remote.add_command([named("add", "")]);
        root.add_command([remote]);

        let path = tokens(&["remote", "add"]);
        let found = root.resolve(&path);
        assert_eq!(found.node.name(), "add");
        assert!(found.rest.is_empty());
    }

    #[test]
    fn test_resolve_returns_tail_on_miss() {
        let mut root = named("", "").into_root();
        root.add_command([named("serve", "")]);

        let path = tokens(&["serve", "extra", "args"]);
        let found = root.resolve(&path);
        assert_eq!(found.node.name(), "serve");
        assert_eq!(found.rest, &path[1..]);
    }

    #[test]
    fn test_resolve_miss_at_first_token_returns_root() {
        let mut root = named("", "").into_root();
        root.add_command([named("serve", "")]);

        let path = tokens(&["unknown"]);
        let found = root.resolve(&path);
        assert!(found.node.is_root());
        assert_eq!(found.rest, &path[..]);
    }

    #[test]
    fn test_handler_downcast_round_trip() {
        fn run(_args: &[String]) {}

        let cmd = Command::new(|c| {
            c.setup("run", "");
            c.exec(1, run as fn(&[String]));
        });

        let handler = cmd.handler().unwrap();
        assert_eq!(handler.params(), 1);
        let callable = handler.downcast_ref::<fn(&[String])>().unwrap();
        callable(&[]);
        assert!(handler.downcast_ref::<fn(i32)>().is_none());
    }

    #[test]
    fn test_argument_validator_through_node() {
        let cmd = Command::new(|c| {
            c.setup("echo", "");
            c.argument(|raw| Ok(raw.iter().rev().cloned().collect()));
        });

        let out = cmd.run_argument_validator(&tokens(&["a", "b"])).unwrap();
        assert_eq!(out, tokens(&["b", "a"]));
    }
}
