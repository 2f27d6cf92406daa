//! Parts catalog
//!
//! The catalog is loaded once at start-up, either from the built-in list or
//! from a JSON file, and never changes afterwards. Iteration order is the
//! insertion order and the compatibility filter relies on it being stable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::types::{Category, FormFactor, MemoryType, StorageType};

/// A purchasable component.
///
/// Prices are whole rupees. Compatibility attributes are optional; a part
/// without an attribute never satisfies a filter that constrains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub brand: String,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chipset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<MemoryType>,
    /// Capacity for a PSU, consumption for a CPU or GPU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<FormFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
}

impl Part {
    /// Create a part with no compatibility attributes.
    pub fn new(
        id: &str,
        name: &str,
        price: u32,
        category: Category,
        brand: &str,
        rating: f32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            brand: brand.to_string(),
            rating,
            socket: None,
            chipset: None,
            memory_type: None,
            wattage: None,
            form_factor: None,
            storage_type: None,
        }
    }

    pub fn with_socket(mut self, socket: &str) -> Self {
        self.socket = Some(socket.to_string());
        self
    }

    pub fn with_chipset(mut self, chipset: &str) -> Self {
        self.chipset = Some(chipset.to_string());
        self
    }

    pub fn with_memory(mut self, memory_type: MemoryType) -> Self {
        self.memory_type = Some(memory_type);
        self
    }

    pub fn with_wattage(mut self, wattage: u32) -> Self {
        self.wattage = Some(wattage);
        self
    }

    pub fn with_form_factor(mut self, form_factor: FormFactor) -> Self {
        self.form_factor = Some(form_factor);
        self
    }

    pub fn with_storage(mut self, storage_type: StorageType) -> Self {
        self.storage_type = Some(storage_type);
        self
    }

    /// Whole stars for display (rating is clamped to 0..=5).
    pub fn stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }

    /// Short attribute tags shown next to the part name.
    pub fn spec_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(ref socket) = self.socket {
            tags.push(socket.clone());
        }
        if let Some(memory) = self.memory_type {
            tags.push(memory.to_string());
        }
        if let Some(watts) = self.wattage {
            tags.push(format!("{}W", watts));
        }
        if let Some(storage) = self.storage_type {
            tags.push(storage.to_string());
        }
        if let Some(form) = self.form_factor {
            tags.push(form.to_string());
        }
        tags
    }
}

/// Immutable, ordered collection of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    parts: Vec<Part>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog from a list of parts, validating it first.
    pub fn from_parts(parts: Vec<Part>) -> Result<Self> {
        let catalog = Self { parts };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file (either a bare array of parts or
    /// an object with a `parts` array).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog = if content.trim_start().starts_with('[') {
            let parts: Vec<Part> =
                serde_json::from_str(&content).context("Failed to parse catalog part list")?;
            Self { parts }
        } else {
            serde_json::from_str::<Self>(&content).context("Failed to parse catalog JSON")?
        };

        catalog
            .validate()
            .with_context(|| format!("Invalid catalog in {:?}", path.as_ref()))?;
        tracing::info!(
            "Loaded {} parts from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Save the catalog as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize catalog")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the catalog contents
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for part in &self.parts {
            if part.id.trim().is_empty() {
                anyhow::bail!("Part '{}' has an empty id", part.name);
            }
            if !ids.insert(part.id.as_str()) {
                anyhow::bail!("Duplicate part id '{}'", part.id);
            }
            if part.name.trim().is_empty() {
                anyhow::bail!("Part '{}' has an empty name", part.id);
            }
            if part.wattage == Some(0) {
                anyhow::bail!("Part '{}' has zero wattage", part.id);
            }
            if !(0.0..=5.0).contains(&part.rating) {
                anyhow::bail!("Part '{}' rating {} is outside 0-5", part.id, part.rating);
            }
        }
        Ok(())
    }

    /// All parts in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Parts of one category, in insertion order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |p| p.category == category)
    }

    /// Look up a part by id.
    pub fn get(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The parts list shipped with the application.
    pub fn builtin() -> Self {
        use Category::*;
        use FormFactor::*;
        use MemoryType::*;

        let parts = vec![
            // Processors
            Part::new("cpu-1", "Intel Core i5-13600K", 28500, Cpu, "Intel", 4.8)
                .with_socket("LGA1700")
                .with_memory(Ddr5)
                .with_wattage(125),
            Part::new("cpu-2", "AMD Ryzen 5 7600X", 21999, Cpu, "AMD", 4.7)
                .with_socket("AM5")
                .with_memory(Ddr5)
                .with_wattage(105),
            Part::new("cpu-3", "Intel Core i9-14900K", 54999, Cpu, "Intel", 4.9)
                .with_socket("LGA1700")
                .with_memory(Ddr5)
                .with_wattage(253),
            Part::new("cpu-4", "AMD Ryzen 7 5700X", 16500, Cpu, "AMD", 4.6)
                .with_socket("AM4")
                .with_memory(Ddr4)
                .with_wattage(65),
            // Motherboards
            Part::new("mobo-1", "MSI PRO Z790-P WiFi", 22500, Mobo, "MSI", 4.5)
                .with_socket("LGA1700")
                .with_chipset("Z790")
                .with_memory(Ddr5)
                .with_form_factor(Atx),
            Part::new("mobo-2", "Gigabyte B650 Gaming X AX", 18999, Mobo, "Gigabyte", 4.6)
                .with_socket("AM5")
                .with_chipset("B650")
                .with_memory(Ddr5)
                .with_form_factor(Atx),
            Part::new("mobo-3", "ASUS TUF Gaming B550-Plus", 14500, Mobo, "ASUS", 4.8)
                .with_socket("AM4")
                .with_chipset("B550")
                .with_memory(Ddr4)
                .with_form_factor(Atx),
            // Memory
            Part::new(
                "ram-1",
                "Corsair Vengeance RGB 32GB (16x2) DDR5 6000MHz",
                11500,
                Ram,
                "Corsair",
                4.8,
            )
            .with_memory(Ddr5),
            Part::new(
                "ram-2",
                "G.Skill Ripjaws V 16GB (8x2) DDR4 3600MHz",
                4500,
                Ram,
                "G.Skill",
                4.7,
            )
            .with_memory(Ddr4),
            Part::new("ram-3", "Adata XPG Lancer 16GB DDR5 5200MHz", 5200, Ram, "Adata", 4.5)
                .with_memory(Ddr5),
            // Graphics cards
            Part::new("gpu-1", "Zotac Gaming GeForce RTX 4060 8GB", 29000, Gpu, "NVIDIA", 4.6)
                .with_wattage(115),
            Part::new("gpu-2", "Asus Dual Radeon RX 7700 XT 12GB", 43500, Gpu, "AMD", 4.7)
                .with_wattage(245),
            Part::new(
                "gpu-3",
                "Gigabyte GeForce RTX 4070 Ti Super 16GB",
                84999,
                Gpu,
                "NVIDIA",
                4.9,
            )
            .with_wattage(285),
            // Storage
            Part::new("sto-1", "WD Black SN850X 1TB NVMe", 8500, Storage, "Western Digital", 4.9)
                .with_storage(StorageType::Nvme),
            Part::new("sto-2", "Crucial P3 Plus 1TB PCIe 4.0", 5900, Storage, "Crucial", 4.6)
                .with_storage(StorageType::Nvme),
            // Power supplies
            Part::new("psu-1", "Corsair RM750e 750W 80+ Gold", 9500, Psu, "Corsair", 4.8)
                .with_wattage(750),
            Part::new("psu-2", "Deepcool PM650D 650W 80+ Gold", 5500, Psu, "Deepcool", 4.4)
                .with_wattage(650),
            Part::new("psu-3", "MSI MAG A850GL 850W PCIE5", 10500, Psu, "MSI", 4.8)
                .with_wattage(850),
            // Cabinets
            Part::new("case-1", "NZXT H5 Flow RGB", 8900, Case, "NZXT", 4.8).with_form_factor(Atx),
            Part::new("case-2", "Ant Esports ICE-100 Air Mini", 3500, Case, "Ant Esports", 4.2)
                .with_form_factor(MicroAtx),
            Part::new("case-3", "Lian Li Lancool 216", 8999, Case, "Lian Li", 4.9)
                .with_form_factor(Atx),
            // Coolers
            Part::new("cool-1", "Deepcool AK620 Digital Air Cooler", 6500, Cooler, "Deepcool", 4.7),
            Part::new(
                "cool-2",
                "Cooler Master MasterLiquid 240L",
                5800,
                Cooler,
                "Cooler Master",
                4.5,
            ),
            // Monitors
            Part::new("mon-1", "LG Ultragear 27\" 1440p 144Hz (27GN800)", 23000, Monitor, "LG", 4.7),
            Part::new("mon-2", "Acer Nitro VG240YS 24\" 1080p 165Hz", 10500, Monitor, "Acer", 4.4),
        ];

        Self { parts }
    }
}
