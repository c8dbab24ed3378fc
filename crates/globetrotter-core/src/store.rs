// crates/globetrotter-core/src/store.rs

//! [`LocationStore`] implementations: in-memory, and a JSON file.

use crate::error::{GeoError, Result};
use crate::model::Location;
use crate::traits::LocationStore;

#[cfg(feature = "json")]
use std::path::{Path, PathBuf};

fn next_id(locations: &[Location]) -> u64 {
    locations.iter().map(|l| l.id).max().unwrap_or(0) + 1
}

fn add_to(locations: &mut Vec<Location>, mut location: Location) -> Location {
    location.id = next_id(locations);
    locations.push(location.clone());
    location
}

fn update_in(locations: &mut [Location], location: Location) -> Result<()> {
    let slot = locations
        .iter_mut()
        .find(|l| l.id == location.id)
        .ok_or_else(|| GeoError::NotFound(format!("No location with id {}", location.id)))?;
    *slot = location;
    Ok(())
}

fn delete_from(locations: &mut Vec<Location>, id: u64) -> bool {
    let before = locations.len();
    locations.retain(|l| l.id != id);
    locations.len() != before
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    locations: Vec<Location>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocationStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn add(&mut self, location: Location) -> Result<Location> {
        Ok(add_to(&mut self.locations, location))
    }

    fn update(&mut self, location: Location) -> Result<()> {
        update_in(&mut self.locations, location)
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        Ok(delete_from(&mut self.locations, id))
    }
}

/// Locations kept as a pretty-printed JSON array. A missing file reads as
/// empty and is created on the first write.
#[cfg(feature = "json")]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

#[cfg(feature = "json")]
impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Location>> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(GeoError::Io(e)),
        }
    }

    fn write(&self, locations: &[Location]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(locations)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(feature = "json")]
impl LocationStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Location>> {
        self.read()
    }

    fn add(&mut self, location: Location) -> Result<Location> {
        let mut all = self.read()?;
        let stored = add_to(&mut all, location);
        self.write(&all)?;
        Ok(stored)
    }

    fn update(&mut self, location: Location) -> Result<()> {
        let mut all = self.read()?;
        update_in(&mut all, location)?;
        self.write(&all)
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        let mut all = self.read()?;
        let removed = delete_from(&mut all, id);
        if removed {
            self.write(&all)?;
        }
        Ok(removed)
    }
}
