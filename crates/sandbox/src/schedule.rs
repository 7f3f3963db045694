//! The tick loop: two in-place sweeps dispatching cells to their rules.

use crate::api::SandApi;
use crate::dice::Dice;
use crate::grid::Grid;
use crate::rules::{RuleTable, Sweep};

impl Grid {
    /// Advance the simulation by one tick.
    ///
    /// Both sweeps walk columns left-to-right. The first walks each column
    /// bottom-to-top and updates falling materials, so a cell that just fell
    /// is not visited again; the second walks top-to-bottom and updates rising
    /// ones. Rules see the grid as already mutated earlier in the sweep.
    pub fn tick<D: Dice>(&mut self, rules: &RuleTable, dice: &mut D) {
        let cols = self.cols() as i32;
        let rows = self.rows() as i32;

        for c in 0..cols {
            for r in (0..rows).rev() {
                self.update_cell(rules, dice, Sweep::Falling, c, r);
            }
        }

        for c in 0..cols {
            for r in 0..rows {
                self.update_cell(rules, dice, Sweep::Rising, c, r);
            }
        }
    }

    fn update_cell<D: Dice>(
        &mut self,
        rules: &RuleTable,
        dice: &mut D,
        sweep: Sweep,
        c: i32,
        r: i32,
    ) {
        let Some(rule) = rules.get(self.get(c, r)) else {
            return;
        };
        if rule.sweep() == sweep {
            rule.apply(&mut SandApi::new(self, dice, c, r));
        }
    }
}
