use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 8080;

/// Keys accepted in the TOML config file. Unknown keys are ignored.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub localhost: Option<bool>,
}

/// Effective settings after layering CLI flags over the file over defaults.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub localhost: bool,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        let ip = if self.localhost {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        };
        SocketAddr::new(ip, self.port)
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("musiclist.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    dirs::config_dir()
        .map(|dir| dir.join("musiclist").join("config.toml"))
        .filter(|path| path.exists())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
