use clap::Parser;

use graph_session::cli::Args;
use graph_session::config::ConfigFile;
use graph_session::db::DatabaseConfig;
use graph_session::logging::{init_logging, DEFAULT_LOG_LEVEL};
use graph_session::session::GraphSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ConfigFile::load_optional()?.unwrap_or_default();

    let level = args
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    init_logging(level)?;

    let db_config = match args.db.as_deref() {
        Some(url) => DatabaseConfig::from_url(url)?,
        None => DatabaseConfig::resolve(Some(&config))?,
    };
    tracing::debug!(?db_config, "opening session");
    let raw = db_config.connect()?;

    let session = GraphSession::with_conflict_matcher(raw.as_ref(), config.conflict_matcher());
    let output = args.command.run(&session, args.format);
    session.release();

    println!("{}", output?);
    Ok(())
}
