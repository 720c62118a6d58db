//! Tree construction and dispatch example.
//!
//! Builds a small command tree, resolves token paths the way a host dispatch
//! loop would, runs the positional-argument validator, and invokes the
//! resolved handler by downcasting it back to the invocation signature this
//! host chose.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p command-tree-examples --example build_tree
//! ```

use anyhow::bail;
use command_tree_core::Command;

/// Invocation signature this host uses for every handler. The library never
/// calls handlers; it only checks their declared parameter count.
type Exec = fn(&[String]);

fn serve(args: &[String]) {
    println!("  serve called with positionals {args:?}");
}

fn remote_add(args: &[String]) {
    println!("  remote add called with positionals {args:?}");
}

fn build_tool() -> Command {
    let mut root = Command::new(|c| c.setup("", "")).into_root();

    root.add_command([
        Command::new(|c| {
            c.setup("serve", "run the server");
            c.flag(|f| {
                f.required("port", "listen port");
            });
            // One flag, so the handler declares 1 + 1 parameters.
            c.exec(2, serve as Exec);
        }),
        Command::new(|c| {
            c.setup("remote", "manage remotes");
            c.command([Command::new(|c| {
                c.setup("add", "add a remote");
                c.argument(|raw| {
                    if raw.len() != 2 {
                        bail!("usage: remote add <name> <url>");
                    }
                    Ok(raw.to_vec())
                });
                c.exec(1, remote_add as Exec);
            })]);
        }),
    ]);

    root
}

fn dispatch(root: &Command, tokens: &[String]) {
    let found = root.resolve(tokens);
    println!(
        "resolved [{}] -> node '{}', {} token(s) left over",
        tokens.join(" "),
        found.node.name(),
        found.rest.len()
    );

    let positionals = match found.node.run_argument_validator(found.rest) {
        Ok(args) => args,
        Err(err) => {
            println!("  rejected: {err}");
            return;
        }
    };

    match found.node.handler().and_then(|h| h.downcast_ref::<Exec>()) {
        Some(exec) => exec(&positionals),
        None => println!("  no handler attached (grouping node)"),
    }
}

fn main() {
    let root = build_tool();

    let invocations: Vec<Vec<String>> = vec![
        vec!["serve".into(), "config.toml".into()],
        vec!["remote".into()],
        vec!["remote".into(), "add".into(), "origin".into(), "git://x".into()],
        vec!["remote".into(), "add".into(), "origin".into()],
        vec!["unknown".into()],
    ];

    for tokens in &invocations {
        dispatch(&root, tokens);
        println!();
    }
}
