//! Help-rendering example.
//!
//! Renders the help block at several positions in a command tree: bare
//! tool-level help, the root with its subcommand table, a leaf with flags,
//! and a nested node with a preceding path.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p command-tree-examples --example render_help
//! ```

use command_tree_core::{Command, print_help};

const TOOL: &str = "depctl";
const DESC: &str = "deployment control tool";

fn build_tool() -> Command {
    let mut root = Command::new(|c| c.setup("", "")).into_root();

    root.add_command([
        Command::new(|c| {
            c.setup("serve", "run the server");
            c.flag(|f| {
                f.required("port", "listen port");
                f.string("host", "127.0.0.1", "bind address");
                f.bool("tls", false, "enable tls");
            });
        }),
        Command::new(|c| {
            c.setup("remote", "manage remotes");
            c.command([
                Command::new(|c| c.setup("add", "add a remote")),
                Command::new(|c| c.setup("remove", "remove a remote")),
            ]);
        }),
        Command::new(|c| c.setup("version", "print version information")),
    ]);

    root
}

fn main() {
    let root = build_tool();

    println!("=== bare tool-level help ===");
    print_help(TOOL, DESC, None, &[]);

    println!("=== root help ===");
    print_help(TOOL, DESC, Some(&root), &[]);

    println!("=== serve help ===");
    let tokens = vec!["serve".to_string()];
    let found = root.resolve(&tokens);
    print_help(TOOL, DESC, Some(found.node), &[]);

    println!("=== remote add help ===");
    let tokens = vec!["remote".to_string(), "add".to_string()];
    let found = root.resolve(&tokens);
    print_help(TOOL, DESC, Some(found.node), &tokens[..1]);
}
