use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use git_autotag::ci::GithubOutput;
use git_autotag::cli::{run_release, ReleaseArgs, ReleaseOutcome};
use git_autotag::config;
use git_autotag::git::{Git2Repository, Repository, SystemGit};
use git_autotag::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-autotag",
    about = "Compute the next version from labelled commits, then tag and push it"
)]
struct Args {
    #[arg(short, long, help = "Custom settings file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Path inside the repository to release"
    )]
    repo: PathBuf,

    #[arg(short, long, default_value = "origin", help = "Remote to push the tag to")]
    remote: String,

    #[arg(long, help = "Use the git binary instead of libgit2")]
    system_git: bool,

    #[arg(long, help = "Preview the next version without writing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-autotag {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let settings =
        config::load_settings(args.config.as_deref()).context("Error loading settings")?;
    let policy = config::resolve_options(&settings)?;

    let repo: Box<dyn Repository> = if args.system_git {
        Box::new(SystemGit::open(&args.repo)?)
    } else {
        Box::new(Git2Repository::open(&args.repo).context("Git repository error")?)
    };

    let release_args = ReleaseArgs {
        remote: args.remote,
        dry_run: args.dry_run,
    };
    let mut output = GithubOutput::from_env();

    match run_release(&*repo, &mut output, &policy, &release_args)? {
        ReleaseOutcome::Released {
            tag, pushed: true, ..
        } => {
            println!();
            ui::display_success(&format!("Successfully published tag {}", tag));
        }
        ReleaseOutcome::Released {
            tag, created: true, ..
        } => {
            println!();
            ui::display_success(&format!("Tag {} created locally", tag));
        }
        ReleaseOutcome::Released { tag, .. } => {
            println!();
            ui::display_success(&format!("Version {} computed, tagging disabled", tag));
        }
        ReleaseOutcome::DryRun { .. } | ReleaseOutcome::NotReleased => {}
    }

    Ok(())
}
