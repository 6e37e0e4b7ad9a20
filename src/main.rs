use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use summercake::advisory::ContextBuilder;
use summercake::audit::AuditLogger;
use summercake::config::Config;
use summercake::git::{CommandRunner, CommitEntry, FileEntry, GitExecutor, Session};
use summercake::{AppError, AppResult, GitVersion};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// SummerCake: a structured front-end over git
#[derive(Parser, Debug)]
#[command(name = "summercake")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Repository to operate on
    #[arg(short, long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a repository
    Clone { url: String, dest: PathBuf },
    /// Create a new repository
    Init { path: Option<PathBuf> },
    /// List changed files
    Status,
    /// Stage a file
    Stage { path: String },
    /// Unstage a file
    Unstage { path: String },
    /// Commit staged changes
    Commit {
        #[arg(short, long)]
        message: String,
    },
    /// Discard unstaged changes to a file
    Discard { path: String },
    /// Show commit history
    Log {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show one commit
    Show {
        hash: String,
        /// Print the full diff instead of the summary
        #[arg(long)]
        diff: bool,
    },
    /// Show the diff of a file
    Diff {
        path: String,
        #[arg(long)]
        staged: bool,
    },
    /// List branches
    Branches,
    /// Create a branch
    Branch { name: String },
    /// Check out a branch
    Checkout { name: String },
    /// Merge a branch into the current one
    Merge { name: String },
    /// Delete a branch
    DeleteBranch { name: String },
    /// List remotes
    Remotes,
    /// Add a remote
    RemoteAdd { name: String, url: String },
    /// Remove a remote
    RemoteRemove { name: String },
    /// Push a branch (defaults: origin, current branch)
    Push { remote: Option<String>, branch: Option<String> },
    /// Pull a branch (defaults: origin, current branch)
    Pull { remote: Option<String>, branch: Option<String> },
    /// List tags
    Tags,
    /// Create a tag
    Tag { name: String, commit: Option<String> },
    /// Delete a tag
    DeleteTag { name: String },
    /// Show everything at once
    State,
    /// Print the commit-message request an advisory provider would receive
    Context,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = Config::load_or_default()?;

    let executor = GitExecutor::with_program(config.git.executable.as_str());
    let version = GitVersion::validate_with(&executor)?;
    tracing::debug!(%version, "git version");

    let mut session = Session::with_runner(executor);
    if config.audit.enabled {
        let logger = match &config.audit.log_path {
            Some(path) => AuditLogger::with_path(path)?,
            None => AuditLogger::new()?,
        };
        session.add_observer(logger);
    }

    match &cli.command {
        Commands::Clone { url, dest } => {
            session.clone_repository(url, dest)?;
            println!("Cloned {} into {}", url, dest.display());
            return Ok(());
        }
        Commands::Init { path } => {
            let path = path.clone().unwrap_or_else(|| cli.repo.clone());
            session.init(&path)?;
            println!("Initialized repository in {}", path.display());
            return Ok(());
        }
        _ => session.open(&cli.repo)?,
    }

    let json = cli.json;
    match cli.command {
        Commands::Clone { .. } | Commands::Init { .. } => {}
        Commands::Status => {
            let files = session.status()?;
            emit(json, files.as_slice(), print_files)?;
        }
        Commands::Stage { path } => session.stage(&path)?,
        Commands::Unstage { path } => session.unstage(&path)?,
        Commands::Commit { message } => session.commit(&message)?,
        Commands::Discard { path } => session.discard(&path)?,
        Commands::Log { limit } => {
            let commits = session.log(limit.unwrap_or(config.git.log_limit))?;
            emit(json, commits.as_slice(), print_commits)?;
        }
        Commands::Show { hash, diff: true } => print!("{}", session.commit_diff(&hash)?),
        Commands::Show { hash, diff: false } => {
            let commit = session.commit_info(&hash)?.unwrap_or_default();
            emit(json, &commit, |c| print_commits(std::slice::from_ref(c)))?;
        }
        Commands::Diff { path, staged } => {
            let diff = if staged {
                session.staged_diff(&path)?
            } else {
                session.diff(&path)?
            };
            print!("{}", diff);
        }
        Commands::Branches => {
            let branches = session.branches()?;
            emit(json, &branches, |branches| {
                for b in branches {
                    let marker = if b.is_current { "*" } else { " " };
                    let kind = if b.is_remote { " (remote)" } else { "" };
                    println!("{} {}{}", marker, b.name, kind);
                }
            })?;
        }
        Commands::Branch { name } => session.create_branch(&name)?,
        Commands::Checkout { name } => session.checkout_branch(&name)?,
        Commands::Merge { name } => session.merge_branch(&name)?,
        Commands::DeleteBranch { name } => session.delete_branch(&name)?,
        Commands::Remotes => {
            let remotes = session.remotes()?;
            emit(json, &remotes, |remotes| {
                for r in remotes {
                    println!("{}\t{}", r.name, r.url);
                }
            })?;
        }
        Commands::RemoteAdd { name, url } => session.add_remote(&name, &url)?,
        Commands::RemoteRemove { name } => session.remove_remote(&name)?,
        Commands::Push { remote, branch } => {
            let (remote, branch) = remote_and_branch(&session, remote, branch)?;
            session.push(&remote, &branch)?;
        }
        Commands::Pull { remote, branch } => {
            let (remote, branch) = remote_and_branch(&session, remote, branch)?;
            session.pull(&remote, &branch)?;
        }
        Commands::Tags => {
            let tags = session.tags()?;
            emit(json, &tags, |tags| tags.iter().for_each(|t| println!("{}", t)))?;
        }
        Commands::Tag { name, commit } => session.create_tag(&name, commit.as_deref())?,
        Commands::DeleteTag { name } => session.delete_tag(&name)?,
        Commands::State => {
            let state = session.state(config.git.log_limit)?;
            emit(json, &state, |state| {
                match &state.current_branch {
                    Some(branch) => println!("On branch {}", branch),
                    None => println!("No branch checked out"),
                }
                println!();
                print_files(&state.files);
                println!();
                print_commits(&state.commits);
            })?;
        }
        Commands::Context => {
            let builder = ContextBuilder::from_config(&config.advisory)?;
            let request = builder.commit_message_request(&session)?;
            emit(json, &request, |r| print!("{}", r.content))?;
        }
    }

    Ok(())
}

fn remote_and_branch<R: CommandRunner>(
    session: &Session<R>,
    remote: Option<String>,
    branch: Option<String>,
) -> AppResult<(String, String)> {
    let remote = remote.unwrap_or_else(|| "origin".to_string());
    let branch = match branch {
        Some(branch) => branch,
        None => session.current_branch()?.ok_or_else(|| {
            AppError::InvalidArgument("HEAD is detached; pass a branch name".to_string())
        })?,
    };
    Ok((remote, branch))
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, human: impl FnOnce(&T)) -> AppResult<()> {
    if json {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        println!("{}", text);
    } else {
        human(value);
    }
    Ok(())
}

fn print_files(files: &[FileEntry]) {
    if files.is_empty() {
        println!("Working tree clean");
    }
    for f in files {
        match &f.old_path {
            Some(old) => println!("{:<10} {} -> {}", format!("{:?}", f.status), old, f.path),
            None => println!("{:<10} {}", format!("{:?}", f.status), f.path),
        }
    }
}

fn print_commits(commits: &[CommitEntry]) {
    for c in commits {
        println!("{} {} {:<20} {}", c.short_hash(), c.date, c.author, c.message);
    }
}
