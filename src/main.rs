use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tally::core::{config, seed};
use tally::tui;

#[derive(Parser)]
#[command(name = "tally", about = "Terminal inventory management dashboard")]
struct Args {
    /// JSON product list to seed the inventory with
    #[arg(short, long, value_name = "FILE")]
    seed: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to tally.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("tally.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Tally starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tally: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.seed.as_deref());

    let products = match &resolved.seed_file {
        Some(path) => match seed::load_seed_file(path) {
            Ok(products) => products,
            Err(e) => {
                eprintln!("tally: failed to load seed file {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => seed::demo_products(),
    };

    tui::run(resolved, products)
}
