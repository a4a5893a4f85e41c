//! snag-demo binary.
//!
//! Reads `snag.toml` (or the path given with `--config`) and `SNAG_*`
//! environment variables, then creates one user and prints it as JSON. A
//! coded error is logged with its code and the process exits non-zero.
//! Panic reports go to the log (target `snag::panic`, level `debug`) rather
//! than stderr.
//!
//! ```
//! cargo run -p snag-demo -- alice
//! SNAG_SIMULATE_DB_FAILURE=true cargo run -p snag-demo -- alice
//! ```

use std::{error::Error as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use snag_core::{Coded, CodedError};
use snag_demo::{DemoConfig, FakeDb, UserService};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Create a user, reporting failures as coded errors")]
struct Cli {
  /// Username to create.
  username: String,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "snag.toml")]
  config: PathBuf,

  /// Make the database call fail regardless of configuration.
  #[arg(long)]
  fail: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();
  // Panics caught by the wrappers surface as coded errors; keep their hook
  // output in the log instead of on stderr.
  snag_invoke::install_tracing_panic_hook();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SNAG"))
    .build()
    .context("failed to read config file")?;

  let mut demo_cfg: DemoConfig = settings
    .try_deserialize()
    .context("failed to deserialise DemoConfig")?;
  demo_cfg.simulate_db_failure |= cli.fail;

  let service = UserService::new(FakeDb, demo_cfg);

  match service.create_user(&cli.username).await {
    Ok(user) => {
      println!("{}", serde_json::to_string_pretty(&user)?);
      Ok(())
    }
    Err(err) => {
      report(&err);
      anyhow::bail!("{}: {}", err.code(), err.message())
    }
  }
}

/// Log a coded error, including its cause when there is one.
fn report(err: &CodedError) {
  match err {
    CodedError::Unidentified(e) => {
      let cause = e.source().map(ToString::to_string);
      tracing::error!(
        kind = %e.kind(),
        code = %e.code(),
        cause = cause.as_deref().unwrap_or("<none>"),
        "{}",
        e.message()
      );
    }
    other => {
      tracing::warn!(kind = %other.kind(), code = %other.code(), "{}", other.message());
    }
  }
}
