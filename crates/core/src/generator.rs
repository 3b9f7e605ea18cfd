//! Stage generation capability.

use crate::settings::GenerationSettings;
use crate::stage::StageData;
use rand::RngCore;

/// A strategy that turns settings and a random source into a stage.
///
/// Implementations must draw all randomness from `rng` so that a seeded
/// source reproduces the same stage. Generation never fails; when the
/// settings cannot be met exactly, a smaller but valid stage is returned.
pub trait StageGenerator {
    /// Generates one stage.
    fn generate(&self, settings: &GenerationSettings, rng: &mut dyn RngCore) -> StageData;

    /// Short name of the strategy, for logs.
    fn name(&self) -> &str;
}
