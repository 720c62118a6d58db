//! End-to-end exercise of the public API: build a tree the way a host
//! application would, resolve token paths, and render help.

use command_tree_core::{Command, ValidationError, render};

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn noop(_args: &[String]) {}

fn build_tool() -> Command {
    let mut root = Command::new(|c| c.setup("", "")).into_root();

    root.add_command([
        Command::new(|c| {
            c.setup("serve", "run the server");
            c.flag(|f| f.required("port", "listen port"));
            c.exec(2, noop as fn(&[String]));
        }),
        Command::new(|c| {
            c.setup("remote", "manage remotes");
            c.command([
                Command::new(|c| {
                    c.setup("add", "add a remote");
                    c.argument(|raw| {
                        if raw.len() != 2 {
                            anyhow::bail!("usage: remote add <name> <url>");
                        }
                        Ok(raw.to_vec())
                    });
                    c.exec(1, noop as fn(&[String]));
                }),
                Command::new(|c| c.setup("remove", "remove a remote")),
            ]);
        }),
    ]);

    root
}

#[test]
fn serve_help_scenario() {
    let root = build_tool();
    let tokens = tokens(&["serve"]);
    let found = root.resolve(&tokens);
    assert!(found.rest.is_empty());

    let text = render("tool", "deployment tool", Some(found.node), &[]);

    assert!(text.contains("SYNOPSIS\n\ttool serve [arg]\n"));
    assert!(text.contains("\t--port      listen port \n"));
    assert!(!text.contains("default:"));
    assert!(!text.contains("COMMANDS"));
}

#[test]
fn nested_resolution_and_help_path() {
    let root = build_tool();
    let path = tokens(&["remote", "add", "origin", "git://x"]);

    let found = root.resolve(&path);
    assert_eq!(found.node.name(), "add");
    assert_eq!(found.rest, &path[2..]);

    // The host passes the consumed prefix as the preceding path.
    let text = render("tool", "", Some(found.node), &path[..1]);
    assert!(text.contains("\ttool remote add [arg]\n"));
}

#[test]
fn argument_validator_gates_positionals() {
    let root = build_tool();
    let path = tokens(&["remote", "add"]);
    let found = root.resolve(&path);

    let ok = found
        .node
        .run_argument_validator(&tokens(&["origin", "git://x"]))
        .unwrap();
    assert_eq!(ok.len(), 2);

    let err = found
        .node
        .run_argument_validator(&tokens(&["origin"]))
        .unwrap_err();
    assert!(err.to_string().contains("remote add"));
}

#[test]
fn root_help_lists_children_sorted() {
    let root = build_tool();
    let text = render("tool", "deployment tool", Some(&root), &[]);

    let remote = text.find("\tremote   manage remotes\n").unwrap();
    let serve = text.find("\tserve    run the server\n").unwrap();
    assert!(remote < serve);
    assert!(text.contains("\ttool [arg]\n"));
}

#[test]
fn registration_rejects_arity_defects() {
    let mut root = Command::new(|c| c.setup("", "")).into_root();

    let defective = Command::new(|c| {
        c.setup("deploy", "");
        c.flag(|f| f.required("target", "deploy target"));
        c.exec(1, noop as fn(&[String]));
    });

    let err = root.try_add_command(defective).unwrap_err();
    assert_eq!(
        err,
        ValidationError::ArityMismatch {
            name: "deploy".to_string(),
            declared: 1,
            expected: 2,
        }
    );
    assert!(root.children().is_empty());
}
