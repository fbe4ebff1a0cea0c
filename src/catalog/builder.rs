//! Builder for assembling a catalog in code.

use super::{Catalog, CatalogError, City, Vehicle};

/// Builder for constructing catalogs with a fluent API.
///
/// # Example
///
/// ```
/// use car_rental::catalog::{CatalogBuilder, City, Vehicle};
///
/// let catalog = CatalogBuilder::new()
///     .city(City::new("agadir", "Agadir"))
///     .vehicle(Vehicle::new("v1", "Renault Clio", 280).offered_in("agadir"))
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    cities: Vec<City>,
    vehicles: Vec<Vehicle>,
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city.
    pub fn city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }

    /// Add multiple cities at once.
    pub fn cities(mut self, cities: impl IntoIterator<Item = City>) -> Self {
        self.cities.extend(cities);
        self
    }

    /// Add a vehicle. Vehicles keep the order they were added in.
    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Add multiple vehicles at once.
    pub fn vehicles(mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        self.vehicles.extend(vehicles);
        self
    }

    /// Build the catalog.
    /// Returns an error if an identifier is blank or duplicated.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.cities, self.vehicles)
    }
}
