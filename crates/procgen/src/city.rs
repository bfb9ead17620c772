//! City generation: one random seed per building slot, drawn once per
//! scenario, plus the fixed placements the seeds are applied to.

use engine_core::Color;
use glam::{Vec2, Vec3};
use physics::Footprint;
use rand::prelude::*;

/// Floor counts are drawn from `MIN_FLOORS..MAX_FLOORS`.
pub const MIN_FLOORS: u32 = 3;
pub const MAX_FLOORS: u32 = 8;

/// Height of one storey module.
pub const FLOOR_HEIGHT: f32 = 9.0;
/// Side length of one storey module.
pub const FLOOR_WIDTH: f32 = 22.0;
/// Roof slabs overhang the facade by this much.
pub const ROOF_OVERHANG: f32 = 1.5;
pub const WINDOW_WIDTH: f32 = 5.0;
pub const WINDOW_HEIGHT: f32 = 7.0;

// Landmark tower at the edge of the city centre.
pub const LANDMARK_BASE_SIZE: f32 = 9.0;
pub const LANDMARK_BASE_HEIGHT: f32 = 2.0;
pub const LANDMARK_BODY_SIZE: f32 = LANDMARK_BASE_SIZE * 0.8;
pub const LANDMARK_BODY_HEIGHT: f32 = 24.0;
pub const LANDMARK_SPIRE_HEIGHT: f32 = 4.0;
pub const LANDMARK_POSITION: Vec3 = Vec3::new(-20.0, 0.0, -20.0);

pub const FLOOR_BASE_COLORS: [Color; 5] = [
    Color::rgb(217, 180, 110),
    Color::rgb(236, 177, 97),
    Color::rgb(116, 130, 139),
    Color::rgb(38, 28, 32),
    Color::rgb(104, 78, 55),
];
pub const COLUMN_COLORS: [Color; 5] = [
    Color::rgb(115, 97, 83),
    Color::rgb(187, 195, 212),
    Color::rgb(86, 80, 99),
    Color::rgb(0, 0, 0),
    Color::rgb(69, 84, 89),
];
pub const WALL_COLORS: [Color; 5] = [
    Color::rgb(221, 212, 179),
    Color::rgb(236, 181, 101),
    Color::rgb(54, 101, 119),
    Color::rgb(138, 109, 104),
    Color::rgb(107, 30, 10),
];
pub const ROOF_COLORS: [Color; 5] = [
    Color::rgb(153, 134, 121),
    Color::rgb(248, 155, 115),
    Color::rgb(89, 159, 161),
    Color::rgb(178, 154, 132),
    Color::rgb(16, 73, 54),
];

/// Ground position of every building slot. `y` is half a storey so the
/// first floor sits on the grass.
pub const BUILDING_SLOTS: [Vec3; 7] = [
    Vec3::new(-80.0, FLOOR_HEIGHT / 2.0, -80.0),
    Vec3::new(-80.0, FLOOR_HEIGHT / 2.0, 80.0),
    Vec3::new(80.0, FLOOR_HEIGHT / 2.0, -80.0),
    Vec3::new(80.0, FLOOR_HEIGHT / 2.0, 80.0),
    Vec3::new(10.0, FLOOR_HEIGHT / 2.0, -80.0),
    Vec3::new(28.0, FLOOR_HEIGHT / 2.0, 80.0),
    Vec3::new(-70.0, FLOOR_HEIGHT / 2.0, 30.0),
];

/// Generation parameters for one building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingSeed {
    pub floors: u32,
    pub floor_color: usize,
    pub column_color: usize,
    pub wall_color: usize,
    pub roof_color: usize,
}

/// Resolved colours of one building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingPalette {
    pub floor: Color,
    pub column: Color,
    pub wall: Color,
    pub roof: Color,
}

impl BuildingSeed {
    /// Draw a seed from uniform distributions over the fixed ranges.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            floors: rng.gen_range(MIN_FLOORS..MAX_FLOORS),
            floor_color: rng.gen_range(0..FLOOR_BASE_COLORS.len()),
            column_color: rng.gen_range(0..COLUMN_COLORS.len()),
            wall_color: rng.gen_range(0..WALL_COLORS.len()),
            roof_color: rng.gen_range(0..ROOF_COLORS.len()),
        }
    }

    pub fn palette(&self) -> BuildingPalette {
        BuildingPalette {
            floor: FLOOR_BASE_COLORS[self.floor_color % FLOOR_BASE_COLORS.len()],
            column: COLUMN_COLORS[self.column_color % COLUMN_COLORS.len()],
            wall: WALL_COLORS[self.wall_color % WALL_COLORS.len()],
            roof: ROOF_COLORS[self.roof_color % ROOF_COLORS.len()],
        }
    }

    /// Height of the roof above ground.
    pub fn height(&self) -> f32 {
        self.floors as f32 * FLOOR_HEIGHT + 1.0
    }
}

/// Architectural variant of one storey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorKind {
    /// Corner columns with a row of three single windows per side.
    Columned,
    /// Corner columns with two window pairs per side.
    Paired,
    /// Extra wall facets plus single windows.
    Walled,
}

impl FloorKind {
    /// Every 4th storey (from the ground) is walled, other multiples of 3
    /// get paired windows, the rest are plain columned floors.
    pub fn for_level(level: u32) -> Self {
        if level % 4 == 0 {
            FloorKind::Walled
        } else if level % 3 == 0 {
            FloorKind::Paired
        } else {
            FloorKind::Columned
        }
    }
}

/// One building ready to be registered and drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBuilding {
    pub position: Vec3,
    pub seed: BuildingSeed,
    pub footprint: Footprint,
}

/// Seeded city generator. Regenerating draws the next scenario from the
/// same stream, so a fixed seed reproduces the whole sequence.
#[derive(Debug)]
pub struct CityLayout {
    seed: u64,
    rng: StdRng,
    seeds: Vec<BuildingSeed>,
    /// Extra width added to every footprint so a hovering body does not clip walls.
    clearance: Vec2,
    scenario: u32,
}

impl CityLayout {
    /// Create a layout and draw the first scenario. `None` picks a random seed.
    pub fn new(seed: Option<u64>, clearance: Vec2) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut layout = Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            seeds: Vec::new(),
            clearance,
            scenario: 0,
        };
        layout.seeds = layout.generate_scenario(BUILDING_SLOTS.len());
        log::info!("City generated from seed {seed}");
        layout
    }

    /// Draw `count` independent building seeds.
    pub fn generate_scenario(&mut self, count: usize) -> Vec<BuildingSeed> {
        (0..count).map(|_| BuildingSeed::random(&mut self.rng)).collect()
    }

    /// Replace every building seed with a freshly drawn one.
    pub fn regenerate(&mut self) {
        self.seeds = self.generate_scenario(BUILDING_SLOTS.len());
        self.scenario += 1;
        log::info!("Scenario {} generated", self.scenario);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn seeds(&self) -> &[BuildingSeed] {
        &self.seeds
    }

    /// Index of the current scenario (0 for the first one).
    pub fn scenario(&self) -> u32 {
        self.scenario
    }

    /// Collision column of a building placed at `position`.
    pub fn footprint(&self, seed: &BuildingSeed, position: Vec3) -> Footprint {
        let width = FLOOR_WIDTH + ROOF_OVERHANG;
        let extents = Vec2::splat(width) + self.clearance;
        Footprint::new(Vec2::new(position.x, position.z), extents / 2.0, seed.height())
    }

    /// Every slot paired with its current seed and footprint.
    pub fn buildings(&self) -> impl Iterator<Item = PlacedBuilding> + '_ {
        BUILDING_SLOTS
            .iter()
            .zip(self.seeds.iter())
            .map(move |(&position, &seed)| PlacedBuilding {
                position,
                seed,
                footprint: self.footprint(&seed, position),
            })
    }

    /// All footprints of the current scenario. The landmark is scenery only
    /// and has no collision column.
    pub fn footprints(&self) -> Vec<Footprint> {
        self.buildings().map(|b| b.footprint).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clearance() -> Vec2 {
        Vec2::new(5.0 / 3.0, 5.0)
    }

    #[test]
    fn same_seed_same_city() {
        let a = CityLayout::new(Some(4242), clearance());
        let b = CityLayout::new(Some(4242), clearance());
        assert_eq!(a.seeds(), b.seeds());
    }

    #[test]
    fn regeneration_sequence_is_deterministic() {
        let mut a = CityLayout::new(Some(7), clearance());
        let mut b = CityLayout::new(Some(7), clearance());
        a.regenerate();
        b.regenerate();
        assert_eq!(a.seeds(), b.seeds());
        assert_eq!(a.scenario(), 1);
    }

    #[test]
    fn seeds_stay_in_range() {
        let mut city = CityLayout::new(Some(99), clearance());
        for _ in 0..50 {
            city.regenerate();
            assert_eq!(city.seeds().len(), BUILDING_SLOTS.len());
            for s in city.seeds() {
                assert!((MIN_FLOORS..MAX_FLOORS).contains(&s.floors));
                assert!(s.floor_color < FLOOR_BASE_COLORS.len());
                assert!(s.column_color < COLUMN_COLORS.len());
                assert!(s.wall_color < WALL_COLORS.len());
                assert!(s.roof_color < ROOF_COLORS.len());
            }
        }
    }

    #[test]
    fn footprint_sized_from_floor_count() {
        let city = CityLayout::new(Some(1), clearance());
        let seed = BuildingSeed {
            floors: 5,
            floor_color: 0,
            column_color: 0,
            wall_color: 0,
            roof_color: 0,
        };
        let f = city.footprint(&seed, Vec3::new(80.0, 4.5, -80.0));
        assert_eq!(f.center, Vec2::new(80.0, -80.0));
        assert_eq!(f.height, 46.0);
        assert!((f.half_extents.x - (23.5 + 5.0 / 3.0) / 2.0).abs() < 1e-5);
        assert!((f.half_extents.y - 14.25).abs() < 1e-5);
    }

    #[test]
    fn floor_kinds_follow_level_rules() {
        let kinds: Vec<FloorKind> = (0..9).map(FloorKind::for_level).collect();
        use FloorKind::*;
        assert_eq!(
            kinds,
            vec![Walled, Columned, Columned, Paired, Walled, Columned, Paired, Columned, Walled]
        );
    }

    #[test]
    fn landmark_has_no_footprint() {
        let city = CityLayout::new(Some(3), clearance());
        let all = city.footprints();
        assert_eq!(all.len(), BUILDING_SLOTS.len());
        assert!(!all.iter().any(|f| f.contains(LANDMARK_POSITION.x, LANDMARK_POSITION.z)));
    }
}
