use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Unparseable or implausible RAM requirements fall back to this.
pub const DEFAULT_RAM_GB: f64 = 16.0;
/// RAM figures above this are treated as a unit-parsing artifact, not a real request.
pub const MAX_PLAUSIBLE_RAM_GB: f64 = 128.0;

/// Round a currency amount to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Canonical socket form used for CPU/motherboard compatibility checks:
/// the "FCLGA" prefix collapses to "LGA", whitespace is dropped, uppercase.
pub fn normalize_socket(raw: &str) -> String {
    let upper: String = raw.split_whitespace().collect::<String>().to_uppercase();
    upper.replace("FCLGA", "LGA")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Cpu,
    Gpu,
    Motherboard,
    RamDdr4,
    RamDdr5,
    PowerSupply,
    Case,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 7] = [
        CatalogKind::Cpu,
        CatalogKind::Gpu,
        CatalogKind::Motherboard,
        CatalogKind::RamDdr4,
        CatalogKind::RamDdr5,
        CatalogKind::PowerSupply,
        CatalogKind::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Cpu => "cpu",
            CatalogKind::Gpu => "gpu",
            CatalogKind::Motherboard => "motherboard",
            CatalogKind::RamDdr4 => "ram_ddr4",
            CatalogKind::RamDdr5 => "ram_ddr5",
            CatalogKind::PowerSupply => "power_supply",
            CatalogKind::Case => "case",
        }
    }
}

/// One purchasable part. `price` is the authoritative cost; records are never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub socket: Option<String>,
    #[serde(default)]
    pub memory_type: Option<String>,
    #[serde(default)]
    pub capacity_gb: Option<f64>,
}

impl ComponentRecord {
    pub fn normalized_socket(&self) -> Option<String> {
        self.socket.as_deref().map(normalize_socket)
    }

    fn performance(&self) -> f64 {
        self.performance_score.unwrap_or(f64::NEG_INFINITY)
    }

    fn capacity(&self) -> f64 {
        self.capacity_gb.unwrap_or(f64::NEG_INFINITY)
    }
}

/// Read-only table of parts for one category. Normalized names are computed
/// once per catalog snapshot and shared across requests.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    kind: CatalogKind,
    records: Vec<ComponentRecord>,
    normalized: OnceLock<Vec<String>>,
}

impl CategoryCatalog {
    pub fn new(kind: CatalogKind, records: Vec<ComponentRecord>) -> Self {
        Self {
            kind,
            records,
            normalized: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Cached normalized names, index-aligned with `records()`.
    pub(crate) fn normalized_names<F>(&self, normalize: F) -> &[String]
    where
        F: Fn(&str) -> String,
    {
        self.normalized
            .get_or_init(|| self.records.iter().map(|r| normalize(&r.name)).collect())
    }

    pub fn cheapest(&self) -> Option<&ComponentRecord> {
        self.records
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }

    pub fn cheapest_with_socket(&self, socket: &str) -> Option<&ComponentRecord> {
        self.records
            .iter()
            .filter(|r| r.normalized_socket().as_deref() == Some(socket))
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }

    pub fn best_performance_within(&self, max_price: f64) -> Option<&ComponentRecord> {
        self.records
            .iter()
            .filter(|r| r.price <= max_price)
            .max_by(|a, b| a.performance().total_cmp(&b.performance()))
    }

    /// Strictly pricier than `current_price` but still affordable with `spare`
    /// on top; best performance wins.
    pub fn best_performance_upgrade(
        &self,
        current_price: f64,
        spare: f64,
    ) -> Option<&ComponentRecord> {
        self.records
            .iter()
            .filter(|r| r.price > current_price && r.price <= current_price + spare)
            .max_by(|a, b| a.performance().total_cmp(&b.performance()))
    }

    /// Same affordability window as `best_performance_upgrade`, but ranked by
    /// module capacity (RAM upgrades).
    pub fn largest_capacity_upgrade(
        &self,
        current_price: f64,
        spare: f64,
    ) -> Option<&ComponentRecord> {
        self.records
            .iter()
            .filter(|r| r.price > current_price && r.price <= current_price + spare)
            .max_by(|a, b| a.capacity().total_cmp(&b.capacity()))
    }
}

/// Target requirements for matching, produced by an external collaborator (use-case
/// profile or parsed game requirements). Treated as noisy, untrusted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsRecord {
    #[serde(default = "unknown", rename = "CPU")]
    pub cpu: String,
    #[serde(default = "unknown", rename = "GPU")]
    pub gpu: String,
    #[serde(default = "unknown", rename = "RAM")]
    pub ram: String,
}

fn unknown() -> String {
    "Unknown".to_string()
}

impl Default for RequirementsRecord {
    fn default() -> Self {
        Self {
            cpu: unknown(),
            gpu: unknown(),
            ram: unknown(),
        }
    }
}

static RAM_GB_RE: OnceLock<Regex> = OnceLock::new();

impl RequirementsRecord {
    pub fn new(cpu: impl Into<String>, gpu: impl Into<String>, ram: impl Into<String>) -> Self {
        Self {
            cpu: cpu.into(),
            gpu: gpu.into(),
            ram: ram.into(),
        }
    }

    /// A literal "Unknown" (or blank) means no preference.
    pub fn cpu_preference(&self) -> Option<&str> {
        preference(&self.cpu)
    }

    pub fn gpu_preference(&self) -> Option<&str> {
        preference(&self.gpu)
    }

    /// Gigabytes requested in the RAM free text. Unparseable figures and
    /// values above `MAX_PLAUSIBLE_RAM_GB` resolve to `DEFAULT_RAM_GB`.
    pub fn ram_gb(&self) -> f64 {
        let re = RAM_GB_RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*gb").unwrap());
        let parsed = re
            .captures(&self.ram)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());
        match parsed {
            Some(gb) if gb > 0.0 && gb <= MAX_PLAUSIBLE_RAM_GB => gb,
            _ => DEFAULT_RAM_GB,
        }
    }
}

fn preference(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        None
    } else {
        Some(trimmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildSlot {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Psu,
    Case,
}

impl BuildSlot {
    pub const ALL: [BuildSlot; 6] = [
        BuildSlot::Cpu,
        BuildSlot::Gpu,
        BuildSlot::Motherboard,
        BuildSlot::Ram,
        BuildSlot::Psu,
        BuildSlot::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSlot::Cpu => "CPU",
            BuildSlot::Gpu => "GPU",
            BuildSlot::Motherboard => "Motherboard",
            BuildSlot::Ram => "RAM",
            BuildSlot::Psu => "PSU",
            BuildSlot::Case => "Case",
        }
    }
}

/// One canonical build shape: a slot per category, unfilled slots stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Build {
    pub cpu: Option<ComponentRecord>,
    pub gpu: Option<ComponentRecord>,
    pub motherboard: Option<ComponentRecord>,
    pub ram: Option<ComponentRecord>,
    pub psu: Option<ComponentRecord>,
    pub case: Option<ComponentRecord>,
}

impl Build {
    pub fn slot(&self, slot: BuildSlot) -> Option<&ComponentRecord> {
        match slot {
            BuildSlot::Cpu => self.cpu.as_ref(),
            BuildSlot::Gpu => self.gpu.as_ref(),
            BuildSlot::Motherboard => self.motherboard.as_ref(),
            BuildSlot::Ram => self.ram.as_ref(),
            BuildSlot::Psu => self.psu.as_ref(),
            BuildSlot::Case => self.case.as_ref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        BuildSlot::ALL.iter().all(|s| self.slot(*s).is_some())
    }

    /// Authoritative parts total across filled slots, rounded to cents.
    pub fn parts_total(&self) -> f64 {
        let total: f64 = BuildSlot::ALL
            .iter()
            .filter_map(|s| self.slot(*s))
            .map(|r| r.price)
            .sum();
        round_cents(total)
    }
}

/// Per-category share of the total budget for one use case. Fractions need
/// not sum to 1.0; the remainder is unallocated headroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTable(BTreeMap<String, f64>);

impl AllocationTable {
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        )
    }

    /// Missing categories read as 0.0.
    pub fn fraction(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Finalized result of one recommendation request. `parts_total` covers the
/// six build slots; `total_cost` adds the fixed storage and cooler line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub build: Build,
    pub parts_total: f64,
    pub total_cost: f64,
}

/// Flat, JSON-friendly view of a build with the fixed auxiliary line items,
/// the shape the serving layer hands to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildQuote {
    pub cpu_name: String,
    pub cpu_price: f64,
    pub gpu_name: String,
    pub gpu_price: f64,
    pub motherboard_name: String,
    pub motherboard_price: f64,
    pub ram_name: String,
    pub ram_price: f64,
    pub storage_name: String,
    pub storage_price: f64,
    pub psu_name: String,
    pub psu_price: f64,
    pub case_name: String,
    pub case_price: f64,
    pub cpu_cooler_name: String,
    pub cpu_cooler_price: f64,
}

impl BuildQuote {
    pub fn from_build(build: &Build, storage_price: f64, cooler_price: f64) -> Self {
        fn name(part: Option<&ComponentRecord>) -> String {
            part.map(|r| r.name.clone()).unwrap_or_else(unknown)
        }
        fn price(part: Option<&ComponentRecord>) -> f64 {
            part.map(|r| r.price).unwrap_or(0.0)
        }

        Self {
            cpu_name: name(build.cpu.as_ref()),
            cpu_price: price(build.cpu.as_ref()),
            gpu_name: name(build.gpu.as_ref()),
            gpu_price: price(build.gpu.as_ref()),
            motherboard_name: name(build.motherboard.as_ref()),
            motherboard_price: price(build.motherboard.as_ref()),
            ram_name: name(build.ram.as_ref()),
            ram_price: price(build.ram.as_ref()),
            storage_name: "500GB SSD".to_string(),
            storage_price,
            psu_name: name(build.psu.as_ref()),
            psu_price: price(build.psu.as_ref()),
            case_name: name(build.case.as_ref()),
            case_price: price(build.case.as_ref()),
            cpu_cooler_name: "Stock Cooler".to_string(),
            cpu_cooler_price: cooler_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str, price: f64) -> ComponentRecord {
        ComponentRecord {
            name: name.to_string(),
            price,
            performance_score: None,
            socket: None,
            memory_type: None,
            capacity_gb: None,
        }
    }

    #[test]
    fn socket_normalization_canonicalizes_fclga() {
        assert_eq!(normalize_socket("FCLGA1700"), "LGA1700");
        assert_eq!(normalize_socket("lga 1700"), "LGA1700");
        assert_eq!(normalize_socket("AM4"), "AM4");
    }

    #[test]
    fn ram_gb_parses_plausible_figures() {
        let req = RequirementsRecord::new("Unknown", "Unknown", "16 GB");
        assert_eq!(req.ram_gb(), 16.0);

        let req = RequirementsRecord::new("Unknown", "Unknown", "8GB RAM required");
        assert_eq!(req.ram_gb(), 8.0);
    }

    #[test]
    fn ram_gb_clamps_implausible_figures_to_default() {
        let req = RequirementsRecord::new("Unknown", "Unknown", "512 GB");
        assert_eq!(req.ram_gb(), DEFAULT_RAM_GB);

        let req = RequirementsRecord::new("Unknown", "Unknown", "Unknown");
        assert_eq!(req.ram_gb(), DEFAULT_RAM_GB);
    }

    #[test]
    fn unknown_requirement_means_no_preference() {
        let req = RequirementsRecord::default();
        assert!(req.cpu_preference().is_none());
        assert!(req.gpu_preference().is_none());

        let req = RequirementsRecord::new("Intel Core i5-9400F", "Unknown", "16 GB");
        assert_eq!(req.cpu_preference(), Some("Intel Core i5-9400F"));
    }

    #[test]
    fn parts_total_sums_filled_slots_only() {
        let mut build = Build::default();
        build.cpu = Some(part("cpu", 199.99));
        build.gpu = Some(part("gpu", 300.004));
        assert_eq!(build.parts_total(), 499.99);
        assert!(!build.is_complete());
    }

    #[test]
    fn allocation_table_defaults_missing_keys_to_zero() {
        let table = AllocationTable::from_pairs(&[("cpu", 0.25), ("gpu", 0.40)]);
        assert_eq!(table.fraction("cpu"), 0.25);
        assert_eq!(table.fraction("case"), 0.0);
    }

    #[test]
    fn quote_defaults_unfilled_slots() {
        let mut build = Build::default();
        build.cpu = Some(part("Ryzen 5 5600", 130.0));
        let quote = BuildQuote::from_build(&build, 50.0, 30.0);
        assert_eq!(quote.cpu_name, "Ryzen 5 5600");
        assert_eq!(quote.gpu_name, "Unknown");
        assert_eq!(quote.gpu_price, 0.0);
        assert_eq!(quote.storage_price, 50.0);
        assert_eq!(quote.cpu_cooler_price, 30.0);
    }
}
