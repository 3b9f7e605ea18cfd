//! Recursive split stage generation.
//!
//! The container is cut by axis-aligned planes into smaller and smaller
//! regions until the target item count is reached. Every region becomes one
//! item, so the items tile the container exactly by construction and every
//! generated stage has at least one solution.
//!
//! # Algorithm Overview
//!
//! 1. Sample the container size and a target item count.
//! 2. Start from a single region covering the whole container.
//! 3. While below the target, pick a random region that still has an axis of
//!    at least `2 * min_edge_size`, pick such an axis (random start, scanned in
//!    order), and cut it at a random offset in
//!    `[min_edge_size, extent - min_edge_size]`.
//! 4. Turn each region into an item with a random color and initial rotation.
//!
//! When no region can be cut any more the stage simply has fewer items.

use boxfill_core::generator::StageGenerator;
use boxfill_core::item::{Color, ItemData, ItemId, PlacedItem};
use boxfill_core::rotation::RotationState;
use boxfill_core::settings::GenerationSettings;
use boxfill_core::stage::StageData;
use boxfill_core::transform::AABB3D;
use nalgebra::Vector3;
use rand::{Rng, RngCore};

/// Hue range of generated item colors.
const HUE_RANGE: (f32, f32) = (0.0, 1.0);
/// Saturation range of generated item colors.
const SATURATION_RANGE: (f32, f32) = (0.4, 0.8);
/// Value range of generated item colors.
const VALUE_RANGE: (f32, f32) = (0.6, 0.9);

/// Where one item sits in the layout the stage was cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionPlacement {
    /// The item.
    pub item: ItemId,
    /// Minimum corner of the item's region, container-local.
    pub position: Vector3<f64>,
}

/// A generated stage together with the layout it was cut from.
#[derive(Debug, Clone)]
pub struct GeneratedStage {
    /// The stage handed to play.
    pub stage: StageData,
    /// One entry per item, in item order. Placing every item here with the
    /// identity rotation fills the container exactly.
    pub solution: Vec<SolutionPlacement>,
}

impl GeneratedStage {
    /// Builds the placements of the known solution.
    pub fn solved_placements(&self) -> Vec<PlacedItem> {
        self.stage
            .items()
            .iter()
            .zip(&self.solution)
            .map(|(item, slot)| {
                PlacedItem::new(item.clone(), slot.position, RotationState::identity())
            })
            .collect()
    }
}

/// Default stage generator: recursive binary space partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSplitGenerator;

impl RecursiveSplitGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a stage and keeps the layout it was cut from.
    pub fn generate_with_solution<R: Rng + ?Sized>(
        &self,
        settings: &GenerationSettings,
        rng: &mut R,
    ) -> GeneratedStage {
        let container_size = Vector3::from_fn(|axis, _| {
            sample_range(
                rng,
                settings.container_size_min[axis],
                settings.container_size_max[axis],
            )
        });

        let count_min = settings.item_count_min.max(1);
        let count_max = settings.item_count_max.max(count_min);
        let target_count = rng.gen_range(count_min..=count_max);

        let min_edge = settings.min_edge_size;
        let mut regions = vec![AABB3D::from_min_size(&Vector3::zeros(), &container_size)];

        while regions.len() < target_count {
            let Some(index) = select_region(&regions, min_edge, rng) else {
                break;
            };
            let Some((a, b)) = split_region(&regions[index], min_edge, rng) else {
                break;
            };

            regions.remove(index);
            regions.push(a);
            regions.push(b);
        }

        if regions.len() < target_count {
            log::warn!(
                "Requested {} items but only {} regions could be cut with min edge {}",
                target_count,
                regions.len(),
                min_edge
            );
        }

        let mut items = Vec::with_capacity(regions.len());
        let mut solution = Vec::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            let id = i as ItemId;
            items.push(ItemData::new(
                id,
                region.size(),
                random_color(rng),
                RotationState::random(rng),
            ));
            solution.push(SolutionPlacement {
                item: id,
                position: region.min(),
            });
        }

        let time_limit = sample_range(
            rng,
            settings.time_limit_min_secs,
            settings.time_limit_max_secs,
        );

        let stage = StageData::new(container_size, items, time_limit);
        log::debug!("{} generated {}", self.name(), stage);

        GeneratedStage { stage, solution }
    }
}

impl StageGenerator for RecursiveSplitGenerator {
    fn generate(&self, settings: &GenerationSettings, rng: &mut dyn RngCore) -> StageData {
        self.generate_with_solution(settings, rng).stage
    }

    fn name(&self) -> &str {
        "RecursiveSplit"
    }
}

/// Uniform sample in `[a, b]`, tolerating a reversed or empty range.
fn sample_range<R: Rng + ?Sized, T>(rng: &mut R, a: T, b: T) -> T
where
    T: PartialOrd + Copy + rand::distributions::uniform::SampleUniform,
{
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Returns true if the region can be cut on at least one axis.
fn has_splittable_axis(size: &Vector3<f64>, min_edge: f64) -> bool {
    let threshold = min_edge * 2.0;
    size.iter().any(|&extent| extent >= threshold)
}

/// Picks a splittable region uniformly at random.
fn select_region<R: Rng + ?Sized>(
    regions: &[AABB3D<f64>],
    min_edge: f64,
    rng: &mut R,
) -> Option<usize> {
    let splittable: Vec<usize> = regions
        .iter()
        .enumerate()
        .filter(|(_, region)| has_splittable_axis(&region.size(), min_edge))
        .map(|(i, _)| i)
        .collect();

    if splittable.is_empty() {
        return None;
    }

    Some(splittable[rng.gen_range(0..splittable.len())])
}

/// Cuts a region in two along an axis that leaves both halves at least
/// `min_edge` long.
fn split_region<R: Rng + ?Sized>(
    region: &AABB3D<f64>,
    min_edge: f64,
    rng: &mut R,
) -> Option<(AABB3D<f64>, AABB3D<f64>)> {
    let threshold = min_edge * 2.0;
    let size = region.size();
    let start = rng.gen_range(0..3);
    let axis = (0..3)
        .map(|i| (start + i) % 3)
        .find(|&axis| size[axis] >= threshold)?;

    let offset = sample_range(rng, min_edge, size[axis] - min_edge);
    let cut = region.axis_min(axis) + offset;

    let mut a_max = region.max();
    a_max[axis] = cut;
    let mut b_min = region.min();
    b_min[axis] = cut;

    Some((
        AABB3D::from_min_max(&region.min(), &a_max),
        AABB3D::from_min_max(&b_min, &region.max()),
    ))
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_hsv(
        rng.gen_range(HUE_RANGE.0..HUE_RANGE.1),
        rng.gen_range(SATURATION_RANGE.0..SATURATION_RANGE.1),
        rng.gen_range(VALUE_RANGE.0..VALUE_RANGE.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_split_respects_min_edge() {
        let mut rng = StdRng::seed_from_u64(42);
        let region = AABB3D::new(0.0, 0.0, 0.0, 1.0, 4.0, 1.0);

        for _ in 0..100 {
            let (a, b) = split_region(&region, 1.0, &mut rng).unwrap();
            // Only y is long enough to cut
            assert_relative_eq!(a.width(), 1.0);
            assert_relative_eq!(b.depth(), 1.0);
            assert!(a.height() >= 1.0 && b.height() >= 1.0);
            assert_relative_eq!(a.volume() + b.volume(), region.volume(), epsilon = 1e-12);
            assert_relative_eq!(a.max_y, b.min_y);
        }
    }

    #[test]
    fn test_unsplittable_region() {
        let mut rng = StdRng::seed_from_u64(42);
        let region = AABB3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        assert!(split_region(&region, 0.6, &mut rng).is_none());
        assert!(select_region(&[region], 0.6, &mut rng).is_none());
    }

    #[test]
    fn test_exact_threshold_is_splittable() {
        let mut rng = StdRng::seed_from_u64(1);
        let region = AABB3D::new(0.0, 0.0, 0.0, 1.0, 0.5, 0.5);
        let (a, b) = split_region(&region, 0.5, &mut rng).unwrap();
        assert_relative_eq!(a.width(), 0.5);
        assert_relative_eq!(b.width(), 0.5);
    }

    #[test]
    fn test_single_item_when_target_is_one() {
        let settings = GenerationSettings::new()
            .with_fixed_container(Vector3::new(4.0, 5.0, 6.0))
            .with_item_count(1, 1);
        let mut rng = StdRng::seed_from_u64(42);

        let generated = RecursiveSplitGenerator::new().generate_with_solution(&settings, &mut rng);
        assert_eq!(generated.stage.item_count(), 1);
        assert_eq!(*generated.stage.items()[0].size(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(generated.solution[0].position, Vector3::zeros());
    }

    #[test]
    fn test_small_container_stops_early() {
        let settings = GenerationSettings::new()
            .with_fixed_container(Vector3::new(0.9, 0.9, 0.9))
            .with_item_count(5, 8)
            .with_min_edge_size(0.5);
        let mut rng = StdRng::seed_from_u64(42);

        let stage = RecursiveSplitGenerator::new().generate(&settings, &mut rng);
        assert_eq!(stage.item_count(), 1);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let stage =
            RecursiveSplitGenerator::new().generate(&GenerationSettings::default(), &mut rng);
        for (i, item) in stage.items().iter().enumerate() {
            assert_eq!(item.id(), i as ItemId);
        }
    }

    #[test]
    fn test_time_limit_in_range() {
        let settings = GenerationSettings::new().with_time_limit(45.0, 50.0);
        let mut rng = StdRng::seed_from_u64(9);
        let stage = RecursiveSplitGenerator::new().generate(&settings, &mut rng);
        assert!((45.0..=50.0).contains(&stage.time_limit_secs()));
    }

    #[test]
    fn test_generator_as_trait_object() {
        let generator: Box<dyn StageGenerator> = Box::new(RecursiveSplitGenerator::new());
        let mut rng = StdRng::seed_from_u64(3);
        let stage = generator.generate(&GenerationSettings::default(), &mut rng);
        assert!(stage.item_count() >= 1);
        assert_eq!(generator.name(), "RecursiveSplit");
    }
}
