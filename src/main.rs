mod config;
mod error;
mod input;
mod links;
mod logger;
mod message;
mod output;
mod payload;

use anyhow::{Context, Result};
use config::Config;
use payload::PullRequestPayload;
use std::{env, io};

fn main() -> Result<()> {
    let config = Config::load().context("Cannot load config file")?;
    logger::init(config.log_level)?;

    log::debug!("Reading payload");
    let raw = input::payload_argument(env::args())?;
    let payload = PullRequestPayload::parse(&raw)?;

    log::debug!("Formatting review request");
    let message = message::format(&payload, &config.markers)
        .context("Cannot render the review request message")?;

    output::emit(io::stdout().lock(), &message).context("Cannot write the review request")?;

    Ok(())
}
