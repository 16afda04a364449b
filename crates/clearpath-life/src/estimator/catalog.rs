use super::domain::{ExpenseCategory, Region, ServiceType};

/// Static cost tables backing the estimator. The data is developer-owned
/// configuration injected at construction, so callers can swap in a custom
/// table for tests or future regional overrides without touching the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCatalog {
    burial: Vec<ExpenseCategory>,
    cremation: Vec<ExpenseCategory>,
    regions: Vec<Region>,
}

/// Lookup failure against the static tables. Reaching this means the caller
/// is wired to keys the catalog does not define, so we fail fast instead of
/// defaulting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown region key '{0}'")]
    UnknownRegion(String),
    #[error("unknown category '{id}' for service type {service_type:?}")]
    UnknownCategory { service_type: ServiceType, id: String },
}

fn category(id: &str, label: &str, base_cost: u32) -> ExpenseCategory {
    ExpenseCategory {
        id: id.to_string(),
        label: label.to_string(),
        base_cost,
    }
}

fn region(key: &str, display_name: &str, multiplier: f64, average_cost: u32) -> Region {
    Region {
        key: key.to_string(),
        display_name: display_name.to_string(),
        multiplier,
        average_cost,
    }
}

impl CostCatalog {
    pub fn new(
        burial: Vec<ExpenseCategory>,
        cremation: Vec<ExpenseCategory>,
        regions: Vec<Region>,
    ) -> Self {
        Self {
            burial,
            cremation,
            regions,
        }
    }

    /// The agency's published national-average tables.
    pub fn standard() -> Self {
        Self::new(
            vec![
                category("funeral_service", "Funeral service", 2500),
                category("burial_plot", "Burial plot", 2500),
                category("casket", "Casket", 2500),
                category("vault", "Burial vault", 1500),
                category("marker", "Headstone or marker", 2000),
                category("flowers", "Flowers", 800),
                category("transport", "Transportation", 500),
                category("other", "Other expenses", 1200),
            ],
            vec![
                category("memorial_service", "Memorial service", 2000),
                category("cremation_fee", "Cremation fee", 1500),
                category("urn", "Urn", 600),
                category("niche", "Niche or scattering", 900),
                category("flowers", "Flowers", 500),
                category("transport", "Transportation", 400),
                category("other", "Other expenses", 800),
            ],
            vec![
                region("national", "National average", 1.00, 13_500),
                region("northeast", "Northeast", 1.15, 15_525),
                region("midwest", "Midwest", 0.95, 12_825),
                region("south", "South", 0.90, 12_150),
                region("west", "West", 1.10, 14_850),
            ],
        )
    }

    /// Ordered category list for a service type.
    pub fn categories(&self, service_type: ServiceType) -> &[ExpenseCategory] {
        match service_type {
            ServiceType::Burial => &self.burial,
            ServiceType::Cremation => &self.cremation,
        }
    }

    pub fn region(&self, key: &str) -> Result<&Region, CatalogError> {
        self.regions
            .iter()
            .find(|region| region.key == key)
            .ok_or_else(|| CatalogError::UnknownRegion(key.to_string()))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Default for CostCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
