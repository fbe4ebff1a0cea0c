//! JSON catalog documents and the bundled dataset.

use super::{Catalog, CatalogError, City, Vehicle};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// The Moroccan fleet shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk shape of a catalog dataset.
///
/// ```json
/// { "cities": [{ "id": "rabat", "name": "Rabat" }],
///   "vehicles": [{ "id": "v1", "name": "Dacia Duster", "price_per_day": 350,
///                  "cities": ["rabat"] }] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(document.cities, document.vehicles)
    }
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Parse a catalog from any reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading catalog file");
        Self::from_json_str(&json)
    }

    /// The dataset bundled with the crate: six Moroccan cities and the
    /// premium fleet offered across them.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Export the catalog back into its document form.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            cities: self.cities().to_vec(),
            vehicles: self.vehicles().to_vec(),
        }
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let catalog = Catalog::try_from(document)?;
        tracing::info!(
            cities = catalog.cities().len(),
            vehicles = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
