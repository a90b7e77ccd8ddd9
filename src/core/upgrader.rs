use crate::core::selector::ram_kind_for;
use crate::domain::model::{Build, CatalogKind, ComponentRecord};
use crate::domain::ports::CatalogProvider;

/// Compatibility plan for a candidate CPU: keep the current board when the
/// socket still matches, otherwise swap to the cheapest compatible board and
/// re-match RAM to its memory type, priced as one delta.
enum Rematch {
    Keep,
    Swap {
        motherboard: ComponentRecord,
        ram: Option<ComponentRecord>,
        delta: f64,
    },
}

/// Spend leftover budget on ordered best-effort upgrades: GPU, then CPU
/// (funding any motherboard/RAM re-match a socket change requires), then a
/// RAM capacity bump. Returns whether anything changed. Every step keeps the
/// prior selection when no candidate qualifies, and no step spends more than
/// the remaining spare.
pub fn upgrade<P>(provider: &P, build: &mut Build, mut spare: f64) -> bool
where
    P: CatalogProvider + ?Sized,
{
    let mut upgraded = false;

    // GPU first.
    if let (Some(current), Some(catalog)) = (build.gpu.clone(), provider.catalog(CatalogKind::Gpu)) {
        if let Some(better) = catalog.best_performance_upgrade(current.price, spare) {
            spare -= better.price - current.price;
            tracing::info!(from = %current.name, to = %better.name, "upgraded GPU");
            build.gpu = Some(better.clone());
            upgraded = true;
        }
    }

    // CPU second. A candidate that changes sockets must also fund the board
    // swap and RAM re-match out of the same spare; candidates whose full cost
    // does not fit (or whose socket has no board at all) are rejected and the
    // current CPU stays.
    if let (Some(current), Some(catalog)) = (build.cpu.clone(), provider.catalog(CatalogKind::Cpu)) {
        if let Some(better) = catalog.best_performance_upgrade(current.price, spare) {
            let cpu_delta = better.price - current.price;
            match plan_board_rematch(provider, build, better, spare - cpu_delta) {
                Some(Rematch::Keep) => {
                    spare -= cpu_delta;
                    tracing::info!(from = %current.name, to = %better.name, "upgraded CPU");
                    build.cpu = Some(better.clone());
                    upgraded = true;
                }
                Some(Rematch::Swap {
                    motherboard,
                    ram,
                    delta,
                }) => {
                    spare -= cpu_delta + delta;
                    tracing::info!(from = %current.name, to = %better.name, "upgraded CPU");
                    tracing::info!(
                        motherboard = %motherboard.name,
                        "re-matched motherboard after CPU upgrade"
                    );
                    build.cpu = Some(better.clone());
                    build.motherboard = Some(motherboard);
                    build.ram = ram;
                    upgraded = true;
                }
                None => {
                    tracing::debug!(
                        candidate = %better.name,
                        "CPU upgrade rejected, no affordable compatible motherboard"
                    );
                }
            }
        }
    }

    // RAM capacity bump with the remaining spare.
    if let (Some(motherboard), Some(current)) = (build.motherboard.clone(), build.ram.clone()) {
        let catalog = provider.catalog(ram_kind_for(&motherboard));
        if let Some(better) = catalog.and_then(|c| c.largest_capacity_upgrade(current.price, spare))
        {
            tracing::info!(from = %current.name, to = %better.name, "upgraded RAM");
            build.ram = Some(better.clone());
            upgraded = true;
        }
    }

    upgraded
}

fn plan_board_rematch<P>(
    provider: &P,
    build: &Build,
    cpu: &ComponentRecord,
    remaining: f64,
) -> Option<Rematch>
where
    P: CatalogProvider + ?Sized,
{
    let Some(socket) = cpu.normalized_socket() else {
        return Some(Rematch::Keep);
    };
    // No board selected means no pairing to repair.
    let Some(current_board) = build.motherboard.as_ref() else {
        return Some(Rematch::Keep);
    };
    if current_board.normalized_socket().as_deref() == Some(socket.as_str()) {
        return Some(Rematch::Keep);
    }

    let motherboard = provider
        .catalog(CatalogKind::Motherboard)
        .and_then(|c| c.cheapest_with_socket(&socket))
        .cloned()?;
    let ram = provider
        .catalog(ram_kind_for(&motherboard))
        .and_then(|c| c.cheapest())
        .cloned();

    let board_delta = motherboard.price - current_board.price;
    let ram_delta = ram.as_ref().map(|r| r.price).unwrap_or(0.0)
        - build.ram.as_ref().map(|r| r.price).unwrap_or(0.0);
    let delta = board_delta + ram_delta;

    if delta > remaining {
        return None;
    }
    Some(Rematch::Swap {
        motherboard,
        ram,
        delta,
    })
}
