use clap::Parser;
use std::error::Error;
use subnet_calc::config::Args;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    subnet_calc::logging::init_logging(&args.log_config)?;
    log::info!("#Start main()");

    let request = args.into_request()?;
    subnet_calc::run(&request)?;

    Ok(())
}
