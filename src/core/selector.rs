use crate::config::settings::EngineSettings;
use crate::core::matcher;
use crate::domain::model::{
    AllocationTable, Build, CatalogKind, ComponentRecord, RequirementsRecord,
};
use crate::domain::ports::CatalogProvider;

/// DDR family a motherboard accepts; anything that is not clearly DDR5 is
/// treated as DDR4.
pub(crate) fn ram_kind_for(motherboard: &ComponentRecord) -> CatalogKind {
    let memory_type = motherboard.memory_type.as_deref().unwrap_or("DDR4");
    if memory_type.to_uppercase().contains("DDR5") {
        CatalogKind::RamDdr5
    } else {
        CatalogKind::RamDdr4
    }
}

/// Greedy, compatibility-aware initial selection. Order is deliberate: GPU
/// gets first claim on contested budget, the motherboard follows the CPU
/// socket, RAM follows the motherboard's memory type. No qualifying candidate
/// for a category leaves that slot unfilled; that is normal, not an error.
pub fn select<P>(
    provider: &P,
    requirements: &RequirementsRecord,
    budget: f64,
    allocation: &AllocationTable,
    settings: &EngineSettings,
) -> Build
where
    P: CatalogProvider + ?Sized,
{
    let mut build = Build::default();

    let gpu_budget = budget * allocation.fraction("gpu");
    let mut cpu_budget = budget * allocation.fraction("cpu");

    tracing::debug!(
        budget,
        gpu_budget,
        cpu_budget,
        ram_gb = requirements.ram_gb(),
        "starting component selection"
    );

    // GPU-first branch: on large budgets the GPU may overrun its allocation
    // by 20%, and the CPU slice shrinks to a fixed fraction in exchange.
    let gpu_catalog = provider.catalog(CatalogKind::Gpu);
    if budget >= settings.gpu_first_budget {
        if let Some(gpu) =
            gpu_catalog.and_then(|c| c.best_performance_within(gpu_budget * settings.gpu_budget_overrun))
        {
            cpu_budget = budget * settings.gpu_first_cpu_fraction;
            tracing::info!(
                gpu = %gpu.name,
                cpu_budget,
                "high budget detected, prioritizing GPU first"
            );
            build.gpu = Some(gpu.clone());
        }
    }
    if build.gpu.is_none() {
        build.gpu = gpu_catalog
            .and_then(|c| c.best_performance_within(gpu_budget))
            .cloned();
    }

    // CPU: fuzzy-match named requirements ("X or Y" alternatives) within the
    // CPU slice, else best performance the slice affords.
    if let Some(cpu_catalog) = provider.catalog(CatalogKind::Cpu) {
        if let Some(preference) = requirements.cpu_preference() {
            for candidate in preference.split(" or ") {
                let matched =
                    matcher::fuzzy_best_match(candidate.trim(), cpu_catalog, settings.match_threshold);
                if let Some(cpu) = matched.filter(|c| c.price <= cpu_budget) {
                    tracing::debug!(cpu = %cpu.name, "matched required CPU within budget");
                    build.cpu = Some(cpu.clone());
                    break;
                }
            }
        }
        if build.cpu.is_none() {
            build.cpu = cpu_catalog.best_performance_within(cpu_budget).cloned();
        }
    }

    // Motherboard: cheapest board with the CPU's normalized socket.
    if let Some(socket) = build.cpu.as_ref().and_then(|c| c.normalized_socket()) {
        build.motherboard = provider
            .catalog(CatalogKind::Motherboard)
            .and_then(|c| c.cheapest_with_socket(&socket))
            .cloned();
        if build.motherboard.is_none() {
            tracing::debug!(socket = %socket, "no compatible motherboard found");
        }
    }

    // RAM: cheapest module of the DDR family the motherboard accepts.
    if let Some(motherboard) = &build.motherboard {
        build.ram = provider
            .catalog(ram_kind_for(motherboard))
            .and_then(|c| c.cheapest())
            .cloned();
    }

    // PSU and case: cheapest available, no compatibility constraint modeled.
    build.psu = provider
        .catalog(CatalogKind::PowerSupply)
        .and_then(|c| c.cheapest())
        .cloned();
    build.case = provider
        .catalog(CatalogKind::Case)
        .and_then(|c| c.cheapest())
        .cloned();

    build
}
