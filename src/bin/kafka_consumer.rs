use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use rdkafka::Message;

use sillytools::kafka::{lag_seconds, subscribe, DEFAULT_GROUP};

/// Read a topic as a consumer group and print each message's lag in seconds
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Broker address; repeat the flag for several brokers
    #[arg(long = "brokers", value_name = "HOST:PORT", required = true)]
    brokers: Vec<String>,

    /// Consumer group id
    #[arg(long, value_name = "GROUP", default_value = DEFAULT_GROUP)]
    group: String,

    /// Topic to read
    #[arg(long, value_name = "TOPIC")]
    topic: String,
}

fn run(args: Args) -> Result<()> {
    let consumer = subscribe(&args.brokers, &args.group, &args.topic)
        .with_context(|| format!("failed to subscribe to {}", args.topic))?;
    info!(
        "Reading {} as group {} from {}",
        args.topic,
        args.group,
        args.brokers.join(",")
    );

    let mut stdout = io::stdout().lock();
    for message in consumer.iter() {
        let message = message.context("failed to read message")?;
        match lag_seconds(Utc::now(), message.timestamp()) {
            Some(lag) => writeln!(stdout, "{lag}")?,
            None => warn!(
                "Message {}/{} has no timestamp",
                message.partition(),
                message.offset()
            ),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(err) = run(Args::parse()) {
        error!("{:#}", err);
        process::exit(1);
    }
}
