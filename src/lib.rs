//! IPv4 subnet calculator.
//!
//! Parses dotted-quad addresses and derives network, broadcast, mask,
//! usable host range, host counts, class and binary form for a prefix.
//!
//! ```
//! let addr = subnet_calc::parse_address("192.168.1.1").unwrap();
//! let subnet = subnet_calc::compute_subnet(addr, 24).unwrap();
//! assert_eq!(subnet.cidr(), "192.168.1.0/24");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::{Cli, Config, OutputFormat};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;

pub use error::ValidationFailure;
pub use models::{Ipv4Address, SubnetResult};
pub use processing::compute_subnet;

/// Parse dotted-quad text into an address.
pub fn parse_address(text: &str) -> Result<Ipv4Address, ValidationFailure> {
    Ipv4Address::parse(text)
}

/// Initialise log4rs from `log_config`, or log warnings to stderr if the
/// file is absent.
pub fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Evaluate the command line and return the text to print.
pub fn run(cli: &Cli, config: &Config) -> Result<String, Box<dyn Error>> {
    log::info!(
        "#Start run() format={:?} policy={:?}",
        config.format,
        config.policy
    );

    if let Some(file) = &cli.batch {
        let entries = processing::read_batch_file(file, config.policy)?;
        return match config.format {
            OutputFormat::Json => output::batch_json(&entries),
            OutputFormat::Csv => Ok(output::batch_csv(&entries).join("\n")),
            OutputFormat::Text => Ok(entries
                .iter()
                .map(|entry| match &entry.result {
                    Ok(subnet) => {
                        format!("# {}\n{}", entry.input, output::format_subnet(subnet))
                    }
                    Err(e) => format!("# {}\nline {}: {e}", entry.input, entry.line),
                })
                .collect::<Vec<String>>()
                .join("\n\n")),
        };
    }

    let address = cli.address.as_deref().ok_or("No address given")?;
    let subnet = match &cli.prefix {
        Some(prefix) => processing::calculate(address, prefix, config.policy)?,
        None => processing::calculate_cidr(address, config.policy)?,
    };

    match config.format {
        OutputFormat::Json => output::subnet_json(&subnet),
        OutputFormat::Csv => {
            let row = output::csv_row(1, address, &subnet);
            Ok(format!("{}\n{row}", output::CSV_HEADER))
        }
        OutputFormat::Text => Ok(output::format_subnet(&subnet)),
    }
}
