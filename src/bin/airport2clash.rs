use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use sillytools::generator::proxy_to_clash;
use sillytools::parser::add_nodes;
use sillytools::utils::http::parse_proxy;
use sillytools::Settings;

/// Convert a proxy subscription feed into a Clash configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Subscription URL
    #[arg(long, value_name = "URL")]
    source: String,

    /// Path to the settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Proxy used to download the subscription: a proxy URL, SYSTEM or NONE
    #[arg(long, value_name = "PROXY", default_value = "NONE")]
    proxy: String,

    /// Write the configuration to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let template = settings
        .load_template()
        .context("failed to load Clash template")?;

    let nodes = add_nodes(&args.source, &parse_proxy(&args.proxy))
        .with_context(|| format!("failed to import subscription {}", args.source))?;
    let config = proxy_to_clash(&nodes, &template, &settings.groups)
        .context("failed to generate Clash configuration")?;

    match &args.output {
        Some(path) => {
            fs::write(path, config)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote Clash configuration to {}", path.display());
        }
        None => print_config(&mut io::stdout().lock(), &config)?,
    }
    Ok(())
}

/// Print the document followed by a newline.
fn print_config(out: &mut impl Write, config: &str) -> io::Result<()> {
    writeln!(out, "{config}")?;
    out.flush()
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(err) = run(Args::parse()) {
        error!("{:#}", err);
        process::exit(1);
    }
}
