//! Type-safe part attributes for rigbuilder
//!
//! Categories and compatibility attributes are closed enums rather than
//! strings, so the filter in `compat` can match on them exhaustively.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// Component class of a part.
///
/// Declaration order is the catalog's classification order. The order the
/// wizard walks through is [`CATEGORY_ORDER`], which differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, EnumCount)]
pub enum Category {
    #[strum(to_string = "Processor", serialize = "cpu")]
    #[serde(rename = "Processor", alias = "cpu")]
    Cpu,
    #[strum(to_string = "Motherboard", serialize = "mobo")]
    #[serde(rename = "Motherboard", alias = "mobo")]
    Mobo,
    #[strum(to_string = "Memory", serialize = "ram")]
    #[serde(rename = "Memory", alias = "ram")]
    Ram,
    #[strum(to_string = "Graphics Card", serialize = "gpu")]
    #[serde(rename = "Graphics Card", alias = "gpu")]
    Gpu,
    #[strum(to_string = "Storage", serialize = "storage")]
    #[serde(rename = "Storage", alias = "storage")]
    Storage,
    #[strum(to_string = "Power Supply", serialize = "psu")]
    #[serde(rename = "Power Supply", alias = "psu")]
    Psu,
    #[strum(to_string = "Cabinet", serialize = "case")]
    #[serde(rename = "Cabinet", alias = "case")]
    Case,
    #[strum(to_string = "Cooler", serialize = "cooler")]
    #[serde(rename = "Cooler", alias = "cooler")]
    Cooler,
    #[strum(to_string = "Monitor", serialize = "monitor")]
    #[serde(rename = "Monitor", alias = "monitor")]
    Monitor,
}

/// Number of categories a complete build specifies.
pub const CATEGORY_COUNT: usize = <Category as EnumCount>::COUNT;

/// Order in which the wizard asks for each category.
pub const CATEGORY_ORDER: [Category; CATEGORY_COUNT] = [
    Category::Cpu,
    Category::Mobo,
    Category::Ram,
    Category::Gpu,
    Category::Storage,
    Category::Cooler,
    Category::Psu,
    Category::Case,
    Category::Monitor,
];

impl Category {
    /// Slot of this category in a fixed-size per-category table.
    ///
    /// Follows declaration order, not wizard order.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Short machine-friendly name used on the command line.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Mobo => "mobo",
            Self::Ram => "ram",
            Self::Gpu => "gpu",
            Self::Storage => "storage",
            Self::Psu => "psu",
            Self::Case => "case",
            Self::Cooler => "cooler",
            Self::Monitor => "monitor",
        }
    }

    /// Position of this category in [`CATEGORY_ORDER`].
    pub fn step_index(self) -> usize {
        CATEGORY_ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or(CATEGORY_ORDER.len())
    }
}

/// Memory generation supported by a board or carried by a kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum MemoryType {
    #[strum(serialize = "DDR4")]
    #[serde(rename = "DDR4")]
    Ddr4,
    #[strum(serialize = "DDR5")]
    #[serde(rename = "DDR5")]
    Ddr5,
}

/// Board / cabinet size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum FormFactor {
    #[strum(serialize = "ATX")]
    #[serde(rename = "ATX")]
    Atx,
    #[strum(serialize = "mATX")]
    #[serde(rename = "mATX")]
    MicroAtx,
    #[strum(serialize = "ITX")]
    #[serde(rename = "ITX")]
    Itx,
}

/// Drive interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum StorageType {
    #[strum(serialize = "NVMe")]
    #[serde(rename = "NVMe")]
    Nvme,
    #[strum(serialize = "SATA")]
    #[serde(rename = "SATA")]
    Sata,
}
