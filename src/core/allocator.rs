use crate::domain::model::AllocationTable;

/// Budget split for a use-case label. Case-insensitive; anything outside
/// {gaming, general, work, school} falls back to the gaming table. The
/// percentages are policy constants, not derived values.
pub fn get_budget_allocation(use_case: &str) -> AllocationTable {
    match use_case.to_lowercase().as_str() {
        "general" => AllocationTable::from_pairs(&[
            ("cpu", 0.40),
            ("gpu", 0.25),
            ("ram", 0.15),
            ("motherboard", 0.10),
            ("power_supply", 0.05),
            ("cpu_cooler", 0.05),
        ]),
        "work" => AllocationTable::from_pairs(&[
            ("cpu", 0.42),
            ("gpu", 0.22),
            ("ram", 0.15),
            ("motherboard", 0.10),
            ("power_supply", 0.06),
            ("cpu_cooler", 0.05),
        ]),
        "school" => AllocationTable::from_pairs(&[
            ("cpu", 0.42),
            ("gpu", 0.17),
            ("ram", 0.20),
            ("motherboard", 0.10),
            ("power_supply", 0.06),
            ("cpu_cooler", 0.05),
        ]),
        _ => AllocationTable::from_pairs(&[
            ("cpu", 0.25),
            ("gpu", 0.40),
            ("ram", 0.10),
            ("motherboard", 0.10),
            ("power_supply", 0.05),
            ("case", 0.025),
            ("cpu_cooler", 0.025),
        ]),
    }
}
