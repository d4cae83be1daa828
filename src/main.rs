use clap::Parser;
use std::error::Error;
use subnet_calc::config::{Cli, Config};
use subnet_calc::{init_logging, run};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env(&cli)?;
    init_logging(&config.log_config)?;
    if !config.color {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let output = run(&cli, &config)?;
    println!("{output}");

    Ok(())
}
