use crate::config::settings::EngineSettings;
use crate::core::allocator::get_budget_allocation;
use crate::core::{selector, upgrader};
use crate::domain::model::{round_cents, BuildQuote, Recommendation, RequirementsRecord};
use crate::domain::ports::CatalogProvider;

/// Recommendation engine over one injected catalog snapshot. Pure and
/// synchronous per request; a single instance can serve concurrent requests
/// because catalogs are only ever read.
pub struct Engine<P: CatalogProvider> {
    provider: P,
    settings: EngineSettings,
}

impl<P: CatalogProvider> Engine<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, EngineSettings::default())
    }

    pub fn with_settings(provider: P, settings: EngineSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Build for parsed game requirements under the gaming allocation.
    pub fn select_build(&self, requirements: &RequirementsRecord, budget: f64) -> Recommendation {
        self.recommend(requirements, budget, "gaming")
    }

    /// Build for an arbitrary use-case label; unknown labels allocate as
    /// gaming.
    pub fn recommend(
        &self,
        requirements: &RequirementsRecord,
        budget: f64,
        use_case: &str,
    ) -> Recommendation {
        let allocation = get_budget_allocation(use_case);
        tracing::debug!(use_case, budget, "resolved budget allocation");

        let mut build = selector::select(
            &self.provider,
            requirements,
            budget,
            &allocation,
            &self.settings,
        );

        let spare = budget - build.parts_total();
        tracing::debug!(spare, "spare budget after initial selection");
        if spare >= self.settings.spare_budget_floor {
            if upgrader::upgrade(&self.provider, &mut build, spare) {
                tracing::info!(new_total = build.parts_total(), "applied spare-budget upgrades");
            }
        }

        let parts_total = build.parts_total();
        let total_cost = round_cents(
            parts_total + self.settings.storage_price + self.settings.cooler_price,
        );

        Recommendation {
            build,
            parts_total,
            total_cost,
        }
    }

    /// Flat client-facing view with the fixed storage/cooler line items.
    pub fn quote(&self, recommendation: &Recommendation) -> BuildQuote {
        BuildQuote::from_build(
            &recommendation.build,
            self.settings.storage_price,
            self.settings.cooler_price,
        )
    }
}
