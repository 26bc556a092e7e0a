//! Command-line front end: append one record and exit.
//!
//! ```text
//! tierlog --config /etc/tierlog.toml error "payment failed" --file api.rs --line 88
//! tierlog --log-dir ./logs 250 "cache warmed"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tierlog::config::loader::load_options;
use tierlog::config::LevelSetting;
use tierlog::observability::logging::{init_tracing, DEFAULT_FILTER};
use tierlog::{configure, Caller, ConfigOptions, Logger, RequestInfo};

#[derive(Parser, Debug)]
#[command(name = "tierlog")]
#[command(about = "Append a leveled record to a tierlog file", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file).
    #[arg(long)]
    log_dir: Option<String>,

    /// Default business tag (overrides the config file).
    #[arg(long)]
    default_business: Option<String>,

    /// Minimum level, code or name (overrides the config file).
    #[arg(long)]
    min_level: Option<String>,

    /// Split files by business tag.
    #[arg(long)]
    split: bool,

    /// Correlation id to use instead of the environment's.
    #[arg(long)]
    logid: Option<String>,

    /// Caller file.
    #[arg(long, default_value = "-")]
    file: String,

    /// Caller line.
    #[arg(long, default_value = "-")]
    line: String,

    /// Caller method.
    #[arg(long, default_value = "-")]
    method: String,

    /// Business tag of this record.
    #[arg(short, long, default_value = "")]
    business: String,

    /// Level code (e.g. 400) or name (e.g. error).
    level: String,

    /// Message words, joined with spaces.
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

impl Cli {
    fn options(&self) -> Result<ConfigOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => ConfigOptions::default(),
        };
        if let Some(dir) = &self.log_dir {
            options.log_dir = Some(dir.clone());
        }
        if let Some(business) = &self.default_business {
            options.business = Some(business.clone());
        }
        if let Some(level) = &self.min_level {
            options.min_level = Some(parse_level_setting(level));
        }
        if self.split {
            options.split_by_business = Some(true);
        }
        Ok(options)
    }

    fn request(&self) -> RequestInfo {
        let info = RequestInfo::from_cgi_env();
        match &self.logid {
            Some(id) => info.with_logid(id.clone()),
            None => info,
        }
    }
}

fn parse_level_setting(raw: &str) -> LevelSetting {
    match raw.trim().parse::<i64>() {
        Ok(code) => LevelSetting::Code(code),
        Err(_) => LevelSetting::Name(raw.to_string()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(configure(cli.options()?), cli.request());
    let message = cli.message.join(" ");

    let outcome = match parse_level_setting(&cli.level) {
        LevelSetting::Code(code) => {
            let caller = Caller::new(cli.file.as_str(), cli.line.as_str(), cli.method.as_str());
            logger.write_code(code, &message, &caller, &cli.business)?
        }
        LevelSetting::Name(name) => logger.dispatch(
            &name,
            &[
                message.as_str(),
                cli.file.as_str(),
                cli.line.as_str(),
                cli.method.as_str(),
                cli.business.as_str(),
            ],
        )?,
    };

    tracing::debug!(
        outcome = ?outcome,
        correlation_id = %logger.correlation_id(),
        "Record handled"
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing(DEFAULT_FILTER);

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tierlog failed");
            ExitCode::FAILURE
        }
    }
}
