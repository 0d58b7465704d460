use std::env;
use std::net::SocketAddr;

use crate::error::{invalid_input_error, Error};
use crate::map::{TileSource, DEFAULT_MAP_CAPACITY};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = concat!("marathons/", env!("CARGO_PKG_VERSION"));
const DEFAULT_LOG: &str = "info";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub nominatim_api_base: String,
    pub nominatim_user_agent: String,
    pub tile_source: TileSource,
    pub max_maps: usize,
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            nominatim_api_base: DEFAULT_NOMINATIM_API_BASE.into(),
            nominatim_user_agent: DEFAULT_USER_AGENT.into(),
            tile_source: TileSource::default(),
            max_maps: DEFAULT_MAP_CAPACITY,
            log: DEFAULT_LOG.into(),
        }
    }
}

fn var_or(key: &str, default: &str) -> Result<String, Error> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => Ok(default.into()),
        Err(err) => Err(err.into()),
    }
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(var_or)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str, &str) -> Result<String, Error>,
    {
        let defaults = Self::default();

        let addr = lookup("MARATHONS_ADDR", DEFAULT_ADDR)?
            .parse::<SocketAddr>()
            .map_err(|_| invalid_input_error())?;
        let max_maps = lookup("MARATHONS_MAX_MAPS", &defaults.max_maps.to_string())?
            .parse::<usize>()
            .ok()
            .filter(|max| *max > 0)
            .ok_or_else(invalid_input_error)?;
        let tile_template = lookup("MAP_TILE_URL", &defaults.tile_source.template)?;
        let tile_source = TileSource::parse(&tile_template)?;

        Ok(Self {
            addr,
            nominatim_api_base: lookup("NOMINATIM_API_BASE", DEFAULT_NOMINATIM_API_BASE)?,
            nominatim_user_agent: lookup("NOMINATIM_USER_AGENT", DEFAULT_USER_AGENT)?,
            tile_source,
            max_maps,
            log: lookup("MARATHONS_LOG", DEFAULT_LOG)?,
        })
    }
}
