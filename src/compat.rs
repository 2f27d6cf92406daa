//! Compatibility filter
//!
//! Narrows the parts offered for a category using what the build already
//! holds. The rules are deliberately few:
//!
//! | Requested   | Selected    | Rule                                       |
//! |-------------|-------------|--------------------------------------------|
//! | Motherboard | Processor   | socket equals the processor's socket       |
//! | Processor   | Motherboard | socket equals the motherboard's socket     |
//! | Memory      | Motherboard | memory type equals the motherboard's       |
//! | Cabinet     | Motherboard | ATX boards only: cabinet form factor is ATX|
//!
//! Every other category is returned unfiltered. There is no wattage or
//! cooler-socket check even though parts carry those attributes.

use crate::build_state::BuildState;
use crate::catalog::{Catalog, Part};
use crate::types::{Category, FormFactor, MemoryType};

/// One narrowing rule that applies to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint<'a> {
    /// Part socket must equal this value. `None` means the selected part has
    /// no socket, so nothing can match.
    Socket { source: Category, socket: Option<&'a str> },
    /// Part memory type must equal this value, same `None` semantics.
    Memory { source: Category, memory: Option<MemoryType> },
    /// Part form factor must be exactly this value.
    FormFactor { source: Category, form_factor: FormFactor },
}

impl Constraint<'_> {
    /// Category whose selection produced this constraint.
    pub fn source(&self) -> Category {
        match self {
            Self::Socket { source, .. }
            | Self::Memory { source, .. }
            | Self::FormFactor { source, .. } => *source,
        }
    }

    fn admits(&self, part: &Part) -> bool {
        match self {
            Self::Socket { socket, .. } => match (part.socket.as_deref(), socket) {
                (Some(have), Some(want)) => have == *want,
                _ => false,
            },
            Self::Memory { memory, .. } => match (part.memory_type, memory) {
                (Some(have), Some(want)) => have == *want,
                _ => false,
            },
            Self::FormFactor { form_factor, .. } => part.form_factor == Some(*form_factor),
        }
    }
}

/// Constraints the current build places on `category`.
pub fn constraints_for(category: Category, build: &BuildState) -> Vec<Constraint<'_>> {
    let mut constraints = Vec::new();

    match category {
        Category::Mobo => {
            if let Some(cpu) = build.get(Category::Cpu) {
                constraints.push(Constraint::Socket {
                    source: Category::Cpu,
                    socket: cpu.socket.as_deref(),
                });
            }
        }
        Category::Cpu => {
            if let Some(mobo) = build.get(Category::Mobo) {
                constraints.push(Constraint::Socket {
                    source: Category::Mobo,
                    socket: mobo.socket.as_deref(),
                });
            }
        }
        Category::Ram => {
            if let Some(mobo) = build.get(Category::Mobo) {
                constraints.push(Constraint::Memory {
                    source: Category::Mobo,
                    memory: mobo.memory_type,
                });
            }
        }
        Category::Case => {
            // Only ATX boards restrict the cabinet; smaller boards are
            // assumed to fit anything on offer.
            if let Some(mobo) = build.get(Category::Mobo) {
                if mobo.form_factor == Some(FormFactor::Atx) {
                    constraints.push(Constraint::FormFactor {
                        source: Category::Mobo,
                        form_factor: FormFactor::Atx,
                    });
                }
            }
        }
        Category::Gpu
        | Category::Storage
        | Category::Psu
        | Category::Cooler
        | Category::Monitor => {}
    }

    constraints
}

/// Parts of `category` compatible with everything already in `build`.
///
/// Results keep catalog order. An empty result means "no compatible parts"
/// and is not an error.
pub fn eligible_parts<'c>(
    catalog: &'c Catalog,
    category: Category,
    build: &BuildState,
) -> Vec<&'c Part> {
    let constraints = constraints_for(category, build);
    catalog
        .in_category(category)
        .filter(|part| constraints.iter().all(|c| c.admits(part)))
        .collect()
}

/// Which earlier choice to revisit when `category` has no eligible parts.
///
/// Returns `None` when nothing in the build constrains the category.
pub fn constraint_hint(category: Category, build: &BuildState) -> Option<Category> {
    constraints_for(category, build)
        .first()
        .map(Constraint::source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn ids(parts: &[&Part]) -> Vec<String> {
        parts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_build_returns_full_category() {
        let catalog = catalog();
        let build = BuildState::new();
        let mobos = eligible_parts(&catalog, Category::Mobo, &build);
        assert_eq!(ids(&mobos), vec!["mobo-1", "mobo-2", "mobo-3"]);
    }

    #[test]
    fn test_cpu_restricts_motherboard_socket() {
        let catalog = catalog();
        let mut build = BuildState::new();
        build.select_part(catalog.get("cpu-2").cloned().unwrap());
        let mobos = eligible_parts(&catalog, Category::Mobo, &build);
        assert_eq!(ids(&mobos), vec!["mobo-2"]);
    }

    #[test]
    fn test_motherboard_restricts_cpu_socket() {
        let catalog = catalog();
        let mut build = BuildState::new();
        build.select_part(catalog.get("mobo-1").cloned().unwrap());
        let cpus = eligible_parts(&catalog, Category::Cpu, &build);
        assert_eq!(ids(&cpus), vec!["cpu-1", "cpu-3"]);
    }

    #[test]
    fn test_socketless_part_never_matches_socket_filter() {
        let parts = vec![
            Part::new("c1", "Mystery CPU", 100, Category::Cpu, "X", 3.0),
            Part::new("m1", "Board", 100, Category::Mobo, "X", 3.0).with_socket("AM5"),
        ];
        let catalog = Catalog::from_parts(parts).unwrap();
        let mut build = BuildState::new();
        build.select_part(catalog.get("m1").cloned().unwrap());
        assert!(eligible_parts(&catalog, Category::Cpu, &build).is_empty());

        // And a selected CPU without a socket admits no boards
        let mut build = BuildState::new();
        build.select_part(catalog.get("c1").cloned().unwrap());
        assert!(eligible_parts(&catalog, Category::Mobo, &build).is_empty());
    }

    #[test]
    fn test_motherboard_restricts_memory_type() {
        let catalog = catalog();
        let mut build = BuildState::new();
        build.select_part(catalog.get("mobo-3").cloned().unwrap());
        let ram = eligible_parts(&catalog, Category::Ram, &build);
        assert_eq!(ids(&ram), vec!["ram-2"]);
        assert!(ram.iter().all(|p| p.memory_type == Some(MemoryType::Ddr4)));
    }

    #[test]
    fn test_atx_board_restricts_cases() {
        let catalog = catalog();
        let mut build = BuildState::new();
        build.select_part(catalog.get("mobo-2").cloned().unwrap());
        let cases = eligible_parts(&catalog, Category::Case, &build);
        assert_eq!(ids(&cases), vec!["case-1", "case-3"]);
    }

    #[test]
    fn test_micro_atx_board_leaves_cases_alone() {
        let mut parts: Vec<Part> = Catalog::builtin().in_category(Category::Case).cloned().collect();
        parts.push(
            Part::new("m-small", "Small Board", 9000, Category::Mobo, "X", 4.0)
                .with_socket("AM5")
                .with_form_factor(FormFactor::MicroAtx),
        );
        let catalog = Catalog::from_parts(parts).unwrap();
        let mut build = BuildState::new();
        build.select_part(catalog.get("m-small").cloned().unwrap());

        let cases = eligible_parts(&catalog, Category::Case, &build);
        assert_eq!(ids(&cases), vec!["case-1", "case-2", "case-3"]);
        assert_eq!(constraint_hint(Category::Case, &build), None);
    }

    #[test]
    fn test_unconstrained_categories_ignore_build() {
        let catalog = catalog();
        let mut build = BuildState::new();
        build.select_part(catalog.get("cpu-3").cloned().unwrap());
        build.select_part(catalog.get("mobo-1").cloned().unwrap());
        for category in [
            Category::Gpu,
            Category::Psu,
            Category::Cooler,
            Category::Storage,
            Category::Monitor,
        ] {
            let all: Vec<&Part> = catalog.in_category(category).collect();
            assert_eq!(eligible_parts(&catalog, category, &build), all);
        }
    }

    #[test]
    fn test_constraint_hint_names_source() {
        let catalog = catalog();
        let mut build = BuildState::new();
        assert_eq!(constraint_hint(Category::Mobo, &build), None);
        build.select_part(catalog.get("cpu-1").cloned().unwrap());
        assert_eq!(constraint_hint(Category::Mobo, &build), Some(Category::Cpu));
    }
}
