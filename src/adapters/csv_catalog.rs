use crate::domain::model::{CatalogKind, CategoryCatalog, ComponentRecord};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{RecError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Catalog snapshot loaded from one CSV file per category (`cpu.csv`,
/// `ram_ddr4.csv`, ...). Every category file must exist at load time; a
/// missing file is a fatal configuration error, fixed before serving traffic.
/// Hosts refreshing catalogs load a new provider and swap it in whole.
#[derive(Debug, Clone)]
pub struct CsvCatalogProvider {
    catalogs: HashMap<CatalogKind, CategoryCatalog>,
    loaded_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    #[serde(default)]
    price: Option<f64>,
    // Some exports carry the scraped price under `original_price`; it is the
    // authoritative figure when both columns are present.
    #[serde(default)]
    original_price: Option<f64>,
    #[serde(default)]
    performance_score: Option<f64>,
    #[serde(default)]
    socket: Option<String>,
    #[serde(default)]
    memory_type: Option<String>,
    #[serde(default)]
    capacity_gb: Option<f64>,
}

impl CsvCatalogProvider {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalogs = HashMap::new();

        for kind in CatalogKind::ALL {
            let path = catalog_path(dir, kind);
            if !path.exists() {
                return Err(RecError::MissingCatalog {
                    category: kind.as_str().to_string(),
                    path: path.display().to_string(),
                });
            }
            let catalog = load_catalog(&path, kind)?;
            if catalog.is_empty() {
                tracing::warn!(category = kind.as_str(), "catalog loaded empty");
            } else {
                tracing::debug!(
                    category = kind.as_str(),
                    rows = catalog.len(),
                    "catalog loaded"
                );
            }
            catalogs.insert(kind, catalog);
        }

        Ok(Self {
            catalogs,
            loaded_at: Utc::now(),
        })
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl CatalogProvider for CsvCatalogProvider {
    fn catalog(&self, kind: CatalogKind) -> Option<&CategoryCatalog> {
        self.catalogs.get(&kind)
    }
}

fn catalog_path(dir: &Path, kind: CatalogKind) -> PathBuf {
    dir.join(format!("{}.csv", kind.as_str()))
}

fn load_catalog(path: &Path, kind: CatalogKind) -> Result<CategoryCatalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let row: RawRow = row?;
        let price = match row.original_price.or(row.price) {
            Some(price) if price > 0.0 => price,
            _ => {
                tracing::warn!(category = kind.as_str(), name = %row.name, "skipping row without a usable price");
                continue;
            }
        };
        records.push(ComponentRecord {
            name: row.name,
            price,
            performance_score: row.performance_score,
            socket: row.socket,
            memory_type: row.memory_type,
            capacity_gb: row.capacity_gb,
        });
    }

    Ok(CategoryCatalog::new(kind, records))
}
