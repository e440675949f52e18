use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "musiclist",
    about = "In-memory music playlist service: users, playlists and songs over HTTP",
    long_about = None,
    version,
)]
pub struct Args {
    /// HTTP port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./musiclist.toml, ~/.config/musiclist/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,
}
