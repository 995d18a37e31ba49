use crate::models::PropertyListing;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when loading a property catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog contains no usable listings")]
    Empty,
}

/// On-disk catalog format
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    properties: Vec<PropertyListing>,
}

/// Neighborhoods the quiz offers as options.
///
/// Listings may reference neighborhoods outside this list; it only drives
/// the survey form.
const KNOWN_NEIGHBORHOODS: &[&str] = &[
    "Santa Mônica",
    "SIM",
    "Papagaio",
    "Brasília",
    "Capuchinhos",
    "Tomba",
    "Cidade Nova",
    "Centro",
    "Muchila",
    "Campo Limpo",
    "Conceição",
    "Mangabeira",
    "Calumbi",
    "Queimadinha",
    "Gabriela",
    "Parque Ipê",
    "Jardim Cruzeiro",
    "Rua Nova",
    "Lagoa Grande",
    "Aviário",
    "Pedra do Descanso",
    "CASEB",
    "Campo do Gado Velho",
    "Serraria Brasil",
    "Ponto Central",
    "Pampalona",
    "Lagoa Salgada",
    "Cruzeiro",
    "Subaé",
    "Novo Horizonte",
];

/// Static, read-only property catalog.
///
/// The engine treats the listing order as significant: ranking ties keep
/// catalog order, so the catalog preserves insertion order and never
/// reorders entries.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    listings: Vec<PropertyListing>,
}

impl PropertyCatalog {
    /// Built-in seed listings
    pub fn builtin() -> Self {
        let listings = vec![
            PropertyListing {
                id: "P001".to_string(),
                title: "Santa Mônica Residence Apartment".to_string(),
                neighborhood: "Santa Mônica".to_string(),
                sale_price: 550_000.0,
                monthly_rent: 2_800.0,
                bedrooms: 3,
                area_sq_m: 90.0,
                needs_renovation: false,
                image_url: Some("https://picsum.photos/400/300?random=1".to_string()),
            },
            PropertyListing {
                id: "P002".to_string(),
                title: "Gated-Community House in SIM".to_string(),
                neighborhood: "SIM".to_string(),
                sale_price: 750_000.0,
                monthly_rent: 3_500.0,
                bedrooms: 3,
                area_sq_m: 130.0,
                needs_renovation: false,
                image_url: Some("https://picsum.photos/400/300?random=2".to_string()),
            },
            PropertyListing {
                id: "P003".to_string(),
                title: "Compact Muchila Apartment".to_string(),
                neighborhood: "Muchila".to_string(),
                sale_price: 280_000.0,
                monthly_rent: 1_400.0,
                bedrooms: 2,
                area_sq_m: 55.0,
                needs_renovation: false,
                image_url: Some("https://picsum.photos/400/300?random=3".to_string()),
            },
            PropertyListing {
                id: "P004".to_string(),
                title: "Papagaio Village - Opportunity".to_string(),
                neighborhood: "Papagaio".to_string(),
                sale_price: 320_000.0,
                monthly_rent: 1_600.0,
                bedrooms: 2,
                area_sq_m: 70.0,
                needs_renovation: false,
                image_url: Some("https://picsum.photos/400/300?random=4".to_string()),
            },
            PropertyListing {
                id: "P005".to_string(),
                title: "Single-Story House in Tomba (Needs Renovation)".to_string(),
                neighborhood: "Tomba".to_string(),
                sale_price: 180_000.0,
                monthly_rent: 900.0,
                bedrooms: 3,
                area_sq_m: 80.0,
                needs_renovation: true,
                image_url: Some("https://picsum.photos/400/300?random=5".to_string()),
            },
        ];

        Self { listings }
    }

    /// Load a catalog from a TOML file.
    ///
    /// Entries failing validation are skipped with a warning rather than
    /// failing the whole load; an entirely unusable file is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let file: CatalogFile = toml::from_str(&raw)?;

        let total = file.properties.len();
        let listings: Vec<PropertyListing> = file
            .properties
            .into_iter()
            .filter(|listing| match listing.validate() {
                Ok(()) => true,
                Err(errors) => {
                    tracing::warn!(
                        "Skipping invalid catalog entry {:?}: {}",
                        listing.id,
                        errors
                    );
                    false
                }
            })
            .collect();

        if listings.is_empty() {
            return Err(CatalogError::Empty);
        }

        if listings.len() < total {
            tracing::warn!(
                "Loaded {} of {} catalog entries from {}",
                listings.len(),
                total,
                path.as_ref().display()
            );
        }

        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[PropertyListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Neighborhood options for the survey form
    pub fn known_neighborhoods() -> &'static [&'static str] {
        KNOWN_NEIGHBORHOODS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_seed_data() {
        let catalog = PropertyCatalog::builtin();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.listings()[0].id, "P001");

        // Exactly one seed listing needs renovation
        let needing_renovation: Vec<_> = catalog
            .listings()
            .iter()
            .filter(|l| l.needs_renovation)
            .collect();
        assert_eq!(needing_renovation.len(), 1);
        assert_eq!(needing_renovation[0].id, "P005");
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = PropertyCatalog::builtin();
        let mut ids: Vec<&str> = catalog.listings().iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_known_neighborhoods_cover_seed_listings() {
        let catalog = PropertyCatalog::builtin();
        for listing in catalog.listings() {
            assert!(
                PropertyCatalog::known_neighborhoods().contains(&listing.neighborhood.as_str()),
                "seed listing {} references unknown neighborhood {}",
                listing.id,
                listing.neighborhood
            );
        }
    }

    #[test]
    fn test_from_file_skips_invalid_entries() {
        let mut file = tempfile_path("morada_catalog_test.toml");
        writeln!(
            file.1,
            r#"
[[properties]]
id = "P100"
title = "Valid listing"
neighborhood = "Centro"
salePrice = 300000.0
bedrooms = 2

[[properties]]
id = ""
title = "Missing id"
neighborhood = "Centro"
"#
        )
        .unwrap();
        drop(file.1);

        let catalog = PropertyCatalog::from_file(&file.0).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.listings()[0].id, "P100");

        std::fs::remove_file(&file.0).ok();
    }

    #[test]
    fn test_from_file_rejects_empty_catalog() {
        let mut file = tempfile_path("morada_catalog_empty.toml");
        writeln!(file.1, "properties = []").unwrap();
        drop(file.1);

        let result = PropertyCatalog::from_file(&file.0);
        assert!(matches!(result, Err(CatalogError::Empty)));

        std::fs::remove_file(&file.0).ok();
    }

    fn tempfile_path(name: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(name);
        let file = std::fs::File::create(&path).unwrap();
        (path, file)
    }
}
