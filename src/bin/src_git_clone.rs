use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use sillytools::git::{
    clone_into, clone_source, destination, resolve_source_root, GitUrlParser, SRC_ROOT_ENV,
};

/// Clone a git repository into <source root>/<host>/<path>
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Remote to clone: a URL, `user@host:path` or a local path
    #[arg(value_name = "URL")]
    url: String,

    /// Print the checkout directory without cloning
    #[arg(long)]
    dry_run: bool,
}

fn run(args: Args) -> Result<()> {
    let parser = GitUrlParser::new().context("failed to build git URL parser")?;
    let reference = parser.parse(&args.url);
    debug!("Classified {} as {:?}", args.url, reference);

    let cwd = env::current_dir().context("failed to read current directory")?;
    let env_root = env::var(SRC_ROOT_ENV).ok();
    let home = dirs::home_dir();
    let root = resolve_source_root(&cwd, env_root.as_deref(), home.as_deref())?;
    let target = destination(&root, &reference);

    if !args.dry_run {
        let source = clone_source(&args.url, &reference, &cwd);
        clone_into(&source, &target)?;
    }
    println!("{}", target.display());
    Ok(())
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(err) = run(Args::parse()) {
        error!("{:#}", err);
        process::exit(1);
    }
}
