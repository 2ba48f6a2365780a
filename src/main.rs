// Hotel Desk - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hoteldesk
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/hoteldesk --config desk.json --verbose
// ```

use anyhow::Context;
use clap::Parser;
use hoteldesk::hotel::Hotel;
use hoteldesk::logging::LoggingConfig;
use hoteldesk::menu::Menu;
use hoteldesk::registry::Registry;
use hoteldesk::types::{CliArgs, MenuConfig};
use std::io;
use std::process;
use tracing::{error, info, Level};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match MenuConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging so the menu output stays readable
        LoggingConfig::new().with_level(Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting hotel desk session");

    let dry_run = args.dry_run;
    let config = match MenuConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - session will not be started.");
        return;
    }

    if let Err(e) = run_session(config) {
        error!("Session failed: {:#}", e);
        process::exit(1);
    }

    info!("Hotel desk session ended");
}

/// Build the registry from configuration and drive the menu over stdio
fn run_session(config: MenuConfig) -> anyhow::Result<()> {
    let mut registry = Registry::new(config.registry_name, config.admin_secret);

    for seed in config.seed_hotels {
        registry.add_hotel(Hotel::new(
            seed.name,
            seed.location,
            seed.total_rooms,
            seed.facilities,
        ));
    }
    info!(hotels = registry.hotels().len(), "registry initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run(&mut registry).context("menu session aborted")?;

    Ok(())
}
