//! Per-material update rules dispatched from the tick loop.

mod gas;
mod granular;
mod liquid;
mod stackable;

use strum::{EnumCount, IntoEnumIterator};

use crate::api::SandApi;
use crate::config::SimConfig;
use crate::dice::Dice;
use crate::material::Material;

/// Which sweep of a tick a rule runs in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sweep {
    /// Bottom-to-top; for materials pulled down by gravity.
    Falling,
    /// Top-to-bottom; for buoyant materials.
    Rising,
}

/// Movement behaviour of a material. Every variant swaps at most once per call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rule {
    /// Falls, else slides one cell diagonally down. Sand.
    GranularSolid,
    /// Falls straight down only. Stone.
    StackableSolid,
    /// Falls through air and gas, else spreads up to `dispersion` cells sideways.
    Liquid { dispersion: u32 },
    /// Rises into air, else spreads up to `dispersion` cells sideways into air.
    Gas { dispersion: u32 },
}

impl Rule {
    #[must_use]
    pub fn sweep(self) -> Sweep {
        match self {
            Self::GranularSolid | Self::StackableSolid | Self::Liquid { .. } => Sweep::Falling,
            Self::Gas { .. } => Sweep::Rising,
        }
    }

    pub fn apply<D: Dice>(self, api: &mut SandApi<D>) {
        match self {
            Self::GranularSolid => granular::update_granular(api),
            Self::StackableSolid => stackable::update_stackable(api),
            Self::Liquid { dispersion } => liquid::update_liquid(api, dispersion),
            Self::Gas { dispersion } => gas::update_gas(api, dispersion),
        }
    }
}

/// Material → rule lookup. Materials without a rule (air, wood) never move.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RuleTable {
    rules: [Option<Rule>; Material::COUNT],
}

impl RuleTable {
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        let mut rules = [None; Material::COUNT];
        for material in Material::iter() {
            rules[material as usize] = match material {
                Material::Air | Material::Wood => None,
                Material::Sand => Some(Rule::GranularSolid),
                Material::Stone => Some(Rule::StackableSolid),
                Material::Water => Some(Rule::Liquid {
                    dispersion: config.water_dispersion,
                }),
                Material::Acid => Some(Rule::Liquid {
                    dispersion: config.acid_dispersion,
                }),
                Material::Steam => Some(Rule::Gas {
                    dispersion: config.steam_dispersion,
                }),
            };
        }
        Self { rules }
    }

    #[must_use]
    pub fn get(&self, material: Material) -> Option<Rule> {
        self.rules[material as usize]
    }

    /// Replace the rule a material moves by.
    pub fn set(&mut self, material: Material, rule: Option<Rule>) {
        self.rules[material as usize] = rule;
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// Scan up to `reach` cells along `dir` on the current row, skipping cells of
/// this cell's own material. Swap into the first cell `opening` accepts; any
/// other cell ends the scan without a move.
fn disperse<D: Dice>(
    api: &mut SandApi<D>,
    dir: i32,
    reach: u32,
    opening: impl Fn(&SandApi<D>, i32) -> bool,
) {
    let me = api.me();
    let reach = i32::try_from(reach).unwrap_or(i32::MAX);
    for step in 1..=reach {
        let dc = dir * step;
        if api.is_a(dc, 0, me) {
            continue;
        }
        if opening(&*api, dc) {
            api.swap(dc, 0);
        }
        return;
    }
}
