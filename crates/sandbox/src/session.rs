//! A simulation session: the grid plus everything that drives it.

use rand_chacha::ChaCha8Rng;
use strum::EnumCount;
use tracing::{debug, trace};

use crate::brush::Brush;
use crate::config::SimConfig;
use crate::dice::{Dice, RngDice};
use crate::error::Result;
use crate::grid::Grid;
use crate::material::Material;
use crate::rules::RuleTable;

/// Owns one grid for its whole lifetime. Ticks and paints are serialized by
/// `&mut self`, so a front end only mutates between ticks.
#[derive(Debug)]
pub struct Simulation<D = RngDice<ChaCha8Rng>> {
    grid: Grid,
    rules: RuleTable,
    dice: D,
    paused: bool,
    ticks: u64,
}

impl Simulation {
    /// # Errors
    ///
    /// Fails if the config does not validate.
    pub fn new(config: &SimConfig) -> Result<Self> {
        Self::with_dice(config, RngDice::seeded(config.seed))
    }
}

impl<D: Dice> Simulation<D> {
    /// Session rolling its tie-breaks from `dice` instead of the seeded default.
    ///
    /// # Errors
    ///
    /// Fails if the config does not validate.
    pub fn with_dice(config: &SimConfig, dice: D) -> Result<Self> {
        config.validate()?;
        let grid = Grid::try_new(config.cols, config.rows)?;
        debug!(
            cols = config.cols,
            rows = config.rows,
            seed = config.seed,
            "created simulation"
        );
        Ok(Self {
            grid,
            rules: RuleTable::from_config(config),
            dice,
            paused: false,
            ticks: 0,
        })
    }

    /// Advance one tick regardless of the pause state.
    pub fn tick(&mut self) {
        self.grid.tick(&self.rules, &mut self.dice);
        self.ticks += 1;
        trace!(ticks = self.ticks, "tick");
    }

    /// Per-frame update: ticks unless paused. Returns whether a tick ran.
    pub fn frame(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.tick();
        true
    }

    /// Single step while paused. Returns whether a tick ran.
    pub fn step(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.tick();
        true
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, ticks = self.ticks, "pause state changed");
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Ticks run since the session started.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Set one cell. Off-grid coordinates are ignored.
    pub fn paint(&mut self, c: i32, r: i32, material: Material) {
        self.grid.set(c, r, material);
    }

    pub fn paint_with(&mut self, brush: &Brush, c: i32, r: i32, material: Material) {
        brush.stamp(&mut self.grid, c, r, material);
    }

    /// Paint along the line from the previous cursor cell to the current one.
    pub fn stroke(
        &mut self,
        brush: &Brush,
        from: (i32, i32),
        to: (i32, i32),
        material: Material,
    ) {
        brush.stroke(&mut self.grid, from, to, material);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        debug!(ticks = self.ticks, "cleared grid");
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleTable {
        &mut self.rules
    }

    #[must_use]
    pub fn counts(&self) -> [usize; Material::COUNT] {
        self.grid.counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushShape;
    use crate::dice::FixedDice;
    use crate::error::Error;
    use crate::rules::Rule;
    use proptest::prelude::*;

    fn small() -> SimConfig {
        SimConfig {
            cols: 8,
            rows: 8,
            ..SimConfig::default()
        }
    }

    #[test]
    fn new_session_is_all_air_and_running() {
        let sim = Simulation::new(&small()).unwrap();
        assert_eq!(sim.grid().count(Material::Air), 64);
        assert!(!sim.is_paused());
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimConfig {
            cols: 0,
            ..small()
        };
        assert!(matches!(
            Simulation::new(&config),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn frame_ticks_only_while_running() {
        let mut sim = Simulation::new(&small()).unwrap();
        sim.paint(3, 0, Material::Sand);

        assert!(sim.frame());
        assert!(sim.grid().is_a(3, 1, Material::Sand));

        sim.toggle_pause();
        assert!(!sim.frame());
        assert!(sim.grid().is_a(3, 1, Material::Sand));
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn step_only_while_paused() {
        let mut sim = Simulation::new(&small()).unwrap();
        sim.paint(3, 0, Material::Sand);

        assert!(!sim.step());
        assert!(sim.grid().is_a(3, 0, Material::Sand));

        sim.set_paused(true);
        assert!(sim.step());
        assert!(sim.grid().is_a(3, 1, Material::Sand));
        assert!(sim.step());
        assert!(sim.grid().is_a(3, 2, Material::Sand));
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn paint_off_grid_changes_nothing() {
        let mut sim = Simulation::new(&small()).unwrap();
        sim.paint(-1, -1, Material::Sand);
        sim.paint(8, 8, Material::Sand);
        assert_eq!(sim.grid().count(Material::Air), 64);
    }

    #[test]
    fn clear_twice_is_the_same_as_once() {
        let mut sim = Simulation::new(&small()).unwrap();
        sim.paint_with(&Brush::new(BrushShape::Square, 2), 4, 4, Material::Water);
        sim.tick();
        sim.clear();
        let once = sim.grid().clone();
        sim.clear();
        assert_eq!(sim.grid(), &once);
        assert_eq!(sim.grid().count(Material::Air), 64);
    }

    #[test]
    fn stroke_paints_a_line() {
        let mut sim = Simulation::new(&small()).unwrap();
        sim.stroke(&Brush::new(BrushShape::Point, 1), (0, 7), (7, 7), Material::Wood);
        assert_eq!(sim.counts()[Material::Wood as usize], 8);
    }

    #[test]
    fn fixed_dice_make_outcomes_exact() {
        let mut sim = Simulation::with_dice(&small(), FixedDice::leaning(-1)).unwrap();
        sim.paint(4, 6, Material::Sand);
        sim.paint(4, 7, Material::Stone);
        sim.tick();
        assert!(sim.grid().is_a(3, 7, Material::Sand));
    }

    #[test]
    fn rules_can_be_swapped_per_session() {
        let mut sim = Simulation::new(&small()).unwrap();
        sim.rules_mut().set(Material::Wood, Some(Rule::StackableSolid));
        sim.paint(0, 0, Material::Wood);
        sim.tick();
        assert!(sim.grid().is_a(0, 1, Material::Wood));
        assert_eq!(sim.rules().get(Material::Air), None);
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Simulation::new(&small()).unwrap();
        let b = Simulation::new(&small()).unwrap();
        a.paint(1, 1, Material::Acid);
        a.tick();
        assert_eq!(b.grid().count(Material::Air), 64);
    }

    proptest! {
        #[test]
        fn prop_session_ticks_conserve_counts(
            paints in proptest::collection::vec((0i32..8, 0i32..8, 0u8..7), 0..40),
            seed in any::<u64>(),
        ) {
            let config = SimConfig { seed, ..small() };
            let mut sim = Simulation::new(&config).unwrap();
            for (c, r, id) in paints {
                sim.paint(c, r, Material::try_from(id).unwrap());
            }
            let before = sim.counts();
            for _ in 0..10 {
                sim.frame();
            }
            prop_assert_eq!(sim.counts(), before);
        }
    }
}
