//! Read-only catalog of vehicles and cities.
//!
//! The catalog is loaded once when the process starts and never changes
//! afterwards. Load order is preserved because the filter engine and the
//! car grid both depend on it.

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::CatalogBuilder;
pub use error::CatalogError;
pub use loader::CatalogDocument;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

crate::string_id! {
    /// Unique identifier of a city, e.g. `"casablanca"`.
    pub struct CityId;
}

crate::string_id! {
    /// Unique identifier of a vehicle record.
    pub struct VehicleId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    Manual,
}

/// A city the rental service operates in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl City {
    pub fn new(id: impl Into<CityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// A rentable vehicle.
///
/// Everything except `id` and `cities` is display data the core never
/// interprets, apart from `price_per_day` for booking summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Daily rate in whole dirhams.
    pub price_per_day: u32,
    #[serde(default = "default_seats")]
    pub seats: u8,
    #[serde(default = "default_transmission")]
    pub transmission: Transmission,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Cities where this vehicle can be picked up.
    #[serde(default)]
    pub cities: BTreeSet<CityId>,
}

fn default_seats() -> u8 {
    5
}

fn default_transmission() -> Transmission {
    Transmission::Automatic
}

impl Vehicle {
    pub fn new(id: impl Into<VehicleId>, name: impl Into<String>, price_per_day: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            price_per_day,
            seats: default_seats(),
            transmission: default_transmission(),
            images: Vec::new(),
            features: Vec::new(),
            cities: BTreeSet::new(),
        }
    }

    /// Add a city this vehicle is offered in.
    pub fn offered_in(mut self, city: impl Into<CityId>) -> Self {
        self.cities.insert(city.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn is_offered_in(&self, city: &str) -> bool {
        self.cities.contains(city)
    }
}

/// Immutable in-memory catalog.
///
/// Construct it with [`Catalog::new`], [`CatalogBuilder`] or one of the
/// JSON loaders; all of them reject blank and duplicate identifiers.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    vehicles: Vec<Vehicle>,
    city_index: HashMap<CityId, usize>,
    vehicle_index: HashMap<VehicleId, usize>,
}

impl Catalog {
    /// Build a catalog, validating identifiers.
    ///
    /// Vehicles that reference cities missing from `cities` are kept; the
    /// filter engine treats such references like any other city id.
    pub fn new(cities: Vec<City>, vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        let city_index = index_ids("city", cities.iter().map(|c| &c.id))?;
        let vehicle_index = index_ids("vehicle", vehicles.iter().map(|v| &v.id))?;

        for vehicle in &vehicles {
            for city in vehicle.cities.iter().filter(|c| !city_index.contains_key(*c)) {
                tracing::warn!(
                    vehicle = %vehicle.id,
                    city = %city,
                    "vehicle references a city that is not in the catalog"
                );
            }
        }

        Ok(Self {
            cities,
            vehicles,
            city_index,
            vehicle_index,
        })
    }

    /// Vehicles in load order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Cities in load order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicle_index.get(id).map(|&i| &self.vehicles[i])
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.city_index.get(id).map(|&i| &self.cities[i])
    }

    pub fn contains_vehicle(&self, id: &str) -> bool {
        self.vehicle_index.contains_key(id)
    }

    pub fn contains_city(&self, id: &str) -> bool {
        self.city_index.contains_key(id)
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

fn index_ids<'a, I, T>(kind: &'static str, ids: I) -> Result<HashMap<T, usize>, CatalogError>
where
    I: Iterator<Item = &'a T>,
    T: AsRef<str> + Clone + Eq + std::hash::Hash + 'a,
{
    let mut index = HashMap::new();
    let mut seen = HashSet::new();
    for (position, id) in ids.enumerate() {
        if id.as_ref().trim().is_empty() {
            return Err(CatalogError::BlankId { kind, position });
        }
        if !seen.insert(id.as_ref()) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.as_ref().to_string(),
            });
        }
        index.insert(id.clone(), position);
    }
    Ok(index)
}
