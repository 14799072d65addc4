use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use super::error::{Error, Result};

const MEMORY_URL: &str = "memory://";

/// Where the catalog is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Database {
    Postgres(String),
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database: Database,
    pub pool_size: u32,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Read the IP address and port on which to listen
        let ip: IpAddr = parse(&lookup, "LISTEN_IP", "127.0.0.1")?;
        let port: u16 = parse(&lookup, "PORT", "1234")?;

        let database = match lookup("DATABASE_URL") {
            Some(ref url) if url == MEMORY_URL => Database::Memory,
            Some(url) => Database::Postgres(url),
            None => return Err(Error::Config("DATABASE_URL must be set".into())),
        };

        let pool_size: u32 = parse(&lookup, "DATABASE_POOL_SIZE", "10")?;
        if pool_size == 0 {
            return Err(Error::Config(
                "DATABASE_POOL_SIZE must be at least 1".into(),
            ));
        }

        Ok(Config {
            listen_addr: SocketAddr::new(ip, port),
            database,
            pool_size,
        })
    }
}

fn parse<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_owned());
    raw.parse()
        .map_err(|_| Error::Config(format!("Failed to parse ${} ({:?})", key, raw)))
}
