// Core structs: Category, CatalogRow, Build, MatchResult
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// The six fixed component slots of a build. The set is closed on purpose:
/// every resolved build carries exactly these keys, populated or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Motherboard,
    Psu,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cpu,
        Category::Gpu,
        Category::Ram,
        Category::Storage,
        Category::Motherboard,
        Category::Psu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::Motherboard => "Motherboard",
            Category::Psu => "PSU",
        }
    }

    /// GPUs are matched on the chipset field, everything else on the name.
    pub fn match_key(self) -> MatchKey {
        match self {
            Category::Gpu => MatchKey::Chipset,
            _ => MatchKey::Name,
        }
    }

    /// Catalog file for this category inside the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            Category::Cpu => "cpu.csv",
            Category::Gpu => "video-card.csv",
            Category::Ram => "memory.csv",
            Category::Storage => "internal-hard-drive.csv",
            Category::Motherboard => "motherboard.csv",
            Category::Psu => "power-supply.csv",
        }
    }
}

/// Which catalog field a category is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey {
    Name,
    Chipset,
}

/// One catalog record. Read-only for the matcher; prices stay as stored
/// strings until a match is produced.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub name: String,
    pub chipset: Option<String>,
    pub price: Option<String>,
}

impl CatalogRow {
    pub fn key(&self, key: MatchKey) -> &str {
        match key {
            MatchKey::Name => &self.name,
            MatchKey::Chipset => self.chipset.as_deref().unwrap_or(&self.name),
        }
    }
}

/// All six catalogs, in file order. Row order matters: score ties resolve
/// to the earliest row.
#[derive(Debug, Default)]
pub struct CatalogSet {
    pub cpu: Vec<CatalogRow>,
    pub gpu: Vec<CatalogRow>,
    pub ram: Vec<CatalogRow>,
    pub storage: Vec<CatalogRow>,
    pub motherboard: Vec<CatalogRow>,
    pub psu: Vec<CatalogRow>,
}

impl CatalogSet {
    pub fn get(&self, category: Category) -> &[CatalogRow] {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Ram => &self.ram,
            Category::Storage => &self.storage,
            Category::Motherboard => &self.motherboard,
            Category::Psu => &self.psu,
        }
    }
}

/// A suggested build as returned by the generative provider. Missing or
/// null keys default to empty strings, unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Build {
    #[serde(rename = "CPU", default, deserialize_with = "null_as_empty")]
    pub cpu: String,
    #[serde(rename = "GPU", default, deserialize_with = "null_as_empty")]
    pub gpu: String,
    #[serde(rename = "RAM", default, deserialize_with = "null_as_empty")]
    pub ram: String,
    #[serde(rename = "Storage", default, deserialize_with = "null_as_empty")]
    pub storage: String,
    #[serde(rename = "Motherboard", default, deserialize_with = "null_as_empty")]
    pub motherboard: String,
    #[serde(rename = "PSU", default, deserialize_with = "null_as_empty")]
    pub psu: String,
}

/// Generative responses sometimes carry an explicit `null` for a slot they
/// skipped; treat that the same as an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Build {
    pub fn component(&self, category: Category) -> &str {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Ram => &self.ram,
            Category::Storage => &self.storage,
            Category::Motherboard => &self.motherboard,
            Category::Psu => &self.psu,
        }
    }
}

/// Price of a matched component. Catalog prices are stored as strings and
/// may be missing or junk; anything that does not parse as a finite number
/// becomes `Unknown` instead of failing the match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Value(f64),
    Unknown,
}

impl Price {
    pub fn parse(raw: Option<&str>) -> Price {
        raw.and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map(Price::Value)
            .unwrap_or(Price::Unknown)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Value(v) => serializer.serialize_f64(*v),
            Price::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// Canonical catalog entry picked for one component slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub name: String,
    pub price: Price,
}

/// The priced build. Always carries all six slots; a slot is `None` when
/// the query was empty, the catalog was empty, or the fuzzy fallback missed.
#[derive(Debug, Default, Serialize)]
pub struct ResolvedBuild {
    #[serde(rename = "CPU")]
    pub cpu: Option<MatchResult>,
    #[serde(rename = "GPU")]
    pub gpu: Option<MatchResult>,
    #[serde(rename = "RAM")]
    pub ram: Option<MatchResult>,
    #[serde(rename = "Storage")]
    pub storage: Option<MatchResult>,
    #[serde(rename = "Motherboard")]
    pub motherboard: Option<MatchResult>,
    #[serde(rename = "PSU")]
    pub psu: Option<MatchResult>,
}

impl ResolvedBuild {
    pub fn get(&self, category: Category) -> Option<&MatchResult> {
        match category {
            Category::Cpu => self.cpu.as_ref(),
            Category::Gpu => self.gpu.as_ref(),
            Category::Ram => self.ram.as_ref(),
            Category::Storage => self.storage.as_ref(),
            Category::Motherboard => self.motherboard.as_ref(),
            Category::Psu => self.psu.as_ref(),
        }
    }

    pub fn set(&mut self, category: Category, result: Option<MatchResult>) {
        let slot = match category {
            Category::Cpu => &mut self.cpu,
            Category::Gpu => &mut self.gpu,
            Category::Ram => &mut self.ram,
            Category::Storage => &mut self.storage,
            Category::Motherboard => &mut self.motherboard,
            Category::Psu => &mut self.psu,
        };
        *slot = result;
    }

    /// Sum of all known prices. Unknown prices contribute nothing.
    pub fn total_price(&self) -> f64 {
        Category::ALL
            .iter()
            .filter_map(|&c| self.get(c))
            .filter_map(|m| match m.price {
                Price::Value(v) => Some(v),
                Price::Unknown => None,
            })
            .sum()
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation API returned no choices")]
    EmptyResponse,
    #[error("could not parse generated build as JSON: {raw}")]
    InvalidJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file {path} has no header row")]
    Empty { path: String },
    #[error("catalog file {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_parses_plain_numbers() {
        assert_eq!(Price::parse(Some("214.99")), Price::Value(214.99));
        assert_eq!(Price::parse(Some(" 65 ")), Price::Value(65.0));
    }

    #[test]
    fn price_falls_back_to_unknown() {
        assert_eq!(Price::parse(Some("N/A")), Price::Unknown);
        assert_eq!(Price::parse(Some("")), Price::Unknown);
        assert_eq!(Price::parse(None), Price::Unknown);
        assert_eq!(Price::parse(Some("NaN")), Price::Unknown);
    }

    #[test]
    fn price_serializes_number_or_sentinel() {
        let known = serde_json::to_string(&Price::Value(99.5)).unwrap();
        assert_eq!(known, "99.5");
        let unknown = serde_json::to_string(&Price::Unknown).unwrap();
        assert_eq!(unknown, "\"unknown\"");
    }

    #[test]
    fn build_deserializes_leniently() {
        let raw = r#"{"CPU": "Ryzen 5 5600X", "Cooling": "Hyper 212", "Case": "NZXT H510"}"#;
        let build: Build = serde_json::from_str(raw).unwrap();
        assert_eq!(build.cpu, "Ryzen 5 5600X");
        assert_eq!(build.gpu, "");
        assert_eq!(build.psu, "");
    }

    #[test]
    fn build_treats_null_slots_as_absent() {
        let raw = r#"{"CPU": "Ryzen 5 5600X", "RAM": null, "GPU": null}"#;
        let build: Build = serde_json::from_str(raw).unwrap();
        assert_eq!(build.cpu, "Ryzen 5 5600X");
        assert_eq!(build.ram, "");
        assert_eq!(build.gpu, "");
    }

    #[test]
    fn chipset_key_falls_back_to_name() {
        let row = CatalogRow {
            name: "MSI GeForce RTX 4070 Ventus".into(),
            chipset: None,
            price: None,
        };
        assert_eq!(row.key(MatchKey::Chipset), "MSI GeForce RTX 4070 Ventus");
        let row = CatalogRow {
            name: "MSI GeForce RTX 4070 Ventus".into(),
            chipset: Some("GeForce RTX 4070".into()),
            price: None,
        };
        assert_eq!(row.key(MatchKey::Chipset), "GeForce RTX 4070");
    }

    #[test]
    fn total_price_skips_unknown() {
        let mut resolved = ResolvedBuild::default();
        resolved.set(
            Category::Cpu,
            Some(MatchResult {
                name: "AMD Ryzen 5 5600X".into(),
                price: Price::Value(150.0),
            }),
        );
        resolved.set(
            Category::Psu,
            Some(MatchResult {
                name: "Corsair RM650x".into(),
                price: Price::Unknown,
            }),
        );
        assert_eq!(resolved.total_price(), 150.0);
    }
}
