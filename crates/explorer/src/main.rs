//! Terminal host for jupyter-explorer.
//!
//! Drives the same command surface an editor host would: connect on
//! startup, then map REPL commands onto connect/refresh/open/delete/send.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use jupyter_explorer::{
    Commands, Config, Interaction, Session, Severity, TreeExplorer, TreeNode,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Console implementation of the interaction port.
struct ConsoleInteraction;

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}: ");
    std::io::stdout().flush().ok()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok()?;
    let line = line.trim_end_matches(['\r', '\n']).to_string();
    Some(line)
}

#[async_trait]
impl Interaction for ConsoleInteraction {
    async fn confirm(&self, message: &str) -> bool {
        matches!(
            read_line(&format!("{message} [y/N]")).as_deref(),
            Some("y" | "Y" | "yes")
        )
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        read_line(message).filter(|line| !line.is_empty())
    }

    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("{message}"),
            Severity::Warning => eprintln!("warning: {message}"),
            Severity::Error => eprintln!("error: {message}"),
        }
    }
}

fn print_help() {
    println!("jupyter-explorer - remote Jupyter file browsing");
    println!();
    println!("COMMANDS:");
    println!("    ls [PATH]      List the remote root or PATH");
    println!("    open PATH      Download a remote file into the workspace");
    println!("    send FILE      Save a local file back to the server");
    println!("    rm PATH        Delete a remote file");
    println!("    refresh        Invalidate the tree");
    println!("    connect        Re-run the connection flow");
    println!("    help           Show this help");
    println!("    quit           Exit");
}

async fn list(tree: &TreeExplorer, path: Option<&str>) {
    let node = path.map(TreeNode::directory);
    let children = tree.get_children(node.as_ref()).await;
    for child in children {
        let item = tree.get_tree_item(&child);
        if item.collapsible {
            println!("{}/", item.label);
        } else {
            println!("{}", item.label);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("jupyter-explorer {VERSION}");
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("unknown option: {other}");
                print_help();
                return Ok(());
            }
        }
    }

    let config = Config::load();
    let interaction: Arc<dyn Interaction> = Arc::new(ConsoleInteraction);
    let session = Arc::new(Session::new());
    let tree = Arc::new(TreeExplorer::new(session.clone(), interaction.clone()));
    let workspace_root: Option<PathBuf> = config
        .workspace
        .clone()
        .or_else(|| std::env::current_dir().ok());
    let commands = Commands::new(
        session.clone(),
        tree.clone(),
        interaction.clone(),
        workspace_root,
    );

    // Connect on startup, as an editor host does on activation.
    commands.connect(&config).await;

    loop {
        let Some(line) = read_line("jupyter") else {
            break;
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("ls"), path) => list(&tree, path).await,
            (Some("open"), Some(path)) => {
                if let Some(opened) = commands.open_file(&TreeNode::file(path)).await {
                    println!(
                        "opened {} (language: {})",
                        opened.path.display(),
                        opened.language
                    );
                }
            }
            (Some("send"), Some(local)) => commands.send_to_remote(Path::new(local)).await,
            (Some("rm"), Some(path)) => commands.delete_file(&TreeNode::file(path)).await,
            (Some("refresh"), _) => commands.refresh(),
            (Some("connect"), _) => commands.connect(&config).await,
            (Some("help"), _) => print_help(),
            (Some("quit" | "exit"), _) => break,
            (None, _) => {}
            (Some(other), _) => eprintln!("unknown command: {other} (try help)"),
        }
    }

    Ok(())
}
