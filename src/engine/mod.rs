mod catalog_api;
mod map_api;

use tokio::sync::Mutex;

use crate::{
    api::API,
    catalog::Catalog,
    config::Config,
    external::{nominatim::Nominatim, Geocoder},
    map::{MapRegistry, TileSource},
};

pub type DynGeocoder = Box<dyn Geocoder + Send + Sync>;

pub struct Engine {
    catalog: &'static Catalog,
    maps: Mutex<MapRegistry>,
    geocoder: DynGeocoder,
    tile_source: TileSource,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let geocoder = Box::new(Nominatim::from_config(config));

        tracing::info!(
            marathons = Catalog::global().len(),
            geocoder = %config.nominatim_api_base,
            max_maps = config.max_maps,
            "engine ready"
        );

        Self {
            maps: Mutex::new(MapRegistry::with_capacity(config.max_maps)),
            ..Self::with_geocoder(Catalog::global(), geocoder, config.tile_source.clone())
        }
    }

    pub fn with_geocoder(
        catalog: &'static Catalog,
        geocoder: DynGeocoder,
        tile_source: TileSource,
    ) -> Self {
        Self {
            catalog,
            maps: Mutex::new(MapRegistry::new()),
            geocoder,
            tile_source,
        }
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::Engine;
    use crate::{
        catalog::Catalog,
        entities::Coordinates,
        error::Error,
        external::Geocoder,
        map::TileSource,
    };

    type Answer = Result<Vec<Coordinates>, Error>;

    /// Scripted geocoder; unknown queries have no candidates.
    pub struct FakeGeocoder {
        answers: HashMap<String, (Duration, Answer)>,
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn geocode(&self, query: &str) -> Result<Vec<Coordinates>, Error> {
            match self.answers.get(query) {
                Some((delay, answer)) => {
                    tokio::time::sleep(*delay).await;
                    answer.clone()
                }
                None => Ok(vec![]),
            }
        }
    }

    pub fn engine_with_delays(answers: Vec<(&str, Duration, Answer)>) -> Engine {
        let answers = answers
            .into_iter()
            .map(|(query, delay, answer)| (query.to_string(), (delay, answer)))
            .collect();

        Engine::with_geocoder(
            Catalog::global(),
            Box::new(FakeGeocoder { answers }),
            TileSource::default(),
        )
    }

    pub fn engine(answers: Vec<(&str, Answer)>) -> Engine {
        engine_with_delays(
            answers
                .into_iter()
                .map(|(query, answer)| (query, Duration::ZERO, answer))
                .collect(),
        )
    }
}
