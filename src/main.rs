use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use peek::areas::repository::Repository;
use peek::commands::porcelain::log::LogOptions;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "peek",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Inspect branches, commits and trees of a git repository",
    long_about = "Lists the branches of a git repository, or shows a branch's tip commit, \
    its tree, and the tree of every commit on its first-parent history. \
    Only loose objects are read and nothing is written.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Path to the repository working tree")]
    repository: PathBuf,
    #[arg(index = 2, help = "Branch to inspect; lists branches when omitted")]
    branch: Option<String>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Stop the history walk after this many commits"
    )]
    max_depth: Option<u64>,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log more details to stderr (repeatable)"
    )]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let repository = Repository::open(&cli.repository, Box::new(std::io::stdout()))?;

    match &cli.branch {
        Some(branch) => {
            let opts = LogOptions {
                max_depth: cli.max_depth.map(usize::try_from).transpose()?,
            };
            repository.log(branch, &opts)?
        }
        None => repository.list_branches()?,
    }

    Ok(())
}
