use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quickcart")]
#[command(about = "An interactive grocery cart for the command line", long_about = None)]
pub struct Cli {
    /// Store the cart in this file instead of the configured location
    #[arg(long, value_name = "FILE")]
    pub db_path: Option<PathBuf>,
}
