use std::collections::{HashMap, VecDeque};

use uuid::Uuid;

use crate::error::{not_found_error, Error};
use crate::map::instance::{MapInstance, MapTarget};

pub const DEFAULT_MAP_CAPACITY: usize = 1024;

/// Owns every mounted map. Each instance belongs to exactly one target.
/// At capacity, mounting releases the oldest instance first.
#[derive(Debug)]
pub struct MapRegistry {
    instances: HashMap<Uuid, MapInstance>,
    targets: HashMap<MapTarget, Uuid>,
    mounted: VecDeque<Uuid>,
    capacity: usize,
}

impl Default for MapRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAP_CAPACITY)
    }
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: HashMap::new(),
            targets: HashMap::new(),
            mounted: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Mounts a map over `target`, or returns the instance already mounted there.
    pub fn mount<F>(&mut self, target: MapTarget, build: F) -> Result<&mut MapInstance, Error>
    where
        F: FnOnce(MapTarget) -> Result<MapInstance, Error>,
    {
        let existing = self.targets.get(&target).copied();
        let id = match existing {
            Some(id) => id,
            None => {
                let instance = build(target.clone())?;
                let id = instance.id();

                while self.instances.len() >= self.capacity {
                    match self.mounted.front().copied() {
                        Some(oldest) => {
                            tracing::info!(id = %oldest, "registry full, releasing oldest map");
                            self.unmount(oldest)?;
                        }
                        None => break,
                    }
                }

                tracing::info!(%id, ?target, "mounted map");
                self.targets.insert(target, id);
                self.instances.insert(id, instance);
                self.mounted.push_back(id);
                id
            }
        };

        self.get_mut(id)
    }

    pub fn get(&self, id: Uuid) -> Result<&MapInstance, Error> {
        self.instances.get(&id).ok_or_else(not_found_error)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut MapInstance, Error> {
        self.instances.get_mut(&id).ok_or_else(not_found_error)
    }

    /// Tears the instance down and releases it.
    pub fn unmount(&mut self, id: Uuid) -> Result<MapInstance, Error> {
        let mut instance = self.instances.remove(&id).ok_or_else(not_found_error)?;
        self.targets.remove(instance.target());
        self.mounted.retain(|mounted| *mounted != id);
        instance.tear_down();

        tracing::info!(%id, "unmounted map");

        Ok(instance)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
