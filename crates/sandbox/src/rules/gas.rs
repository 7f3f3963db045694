//! Gas: rises straight or diagonally into air, otherwise drifts sideways
//! into air along its row. Never displaces liquids or other gases.

use super::disperse;
use crate::api::SandApi;
use crate::dice::Dice;

pub fn update_gas<D: Dice>(api: &mut SandApi<D>, dispersion: u32) {
    let dc = api.sign_or_zero();
    if api.is_air(dc, -1) {
        api.swap(dc, -1);
        return;
    }

    let dir = api.sign();
    disperse(api, dir, dispersion, |api, dc| api.is_air(dc, 0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;
    use crate::grid::Grid;

    fn run(picture: &str, c: i32, r: i32, dice: FixedDice, dispersion: u32) -> String {
        let mut grid = Grid::from_ascii(picture).unwrap();
        let mut dice = dice;
        update_gas(&mut SandApi::new(&mut grid, &mut dice, c, r), dispersion);
        grid.to_string()
    }

    fn rolls(sign_or_zero: i32, sign: i32) -> FixedDice {
        FixedDice { sign, sign_or_zero }
    }

    #[test]
    fn rises_in_the_rolled_column() {
        assert_eq!(run("...\n.^.", 1, 1, rolls(0, 1), 10), ".^.\n...");
        assert_eq!(run("...\n.^.", 1, 1, rolls(-1, 1), 10), "^..\n...");
        assert_eq!(run("...\n.^.", 1, 1, rolls(1, 1), 10), "..^\n...");
    }

    #[test]
    fn does_not_rise_into_liquid() {
        // Blocked above by water: drifts sideways instead.
        assert_eq!(run("~~~\n.^.", 1, 1, rolls(0, -1), 10), "~~~\n^..");
    }

    #[test]
    fn top_row_drifts_sideways() {
        assert_eq!(run(".^.", 1, 0, rolls(0, 1), 10), "..^");
    }

    #[test]
    fn drifts_past_its_own_material_into_air() {
        assert_eq!(
            run("#####\n^^^..", 0, 1, rolls(0, 1), 10),
            "#####\n.^^^."
        );
    }

    #[test]
    fn horizontal_drift_only_enters_air() {
        assert_eq!(run("###\n^~.", 0, 1, rolls(0, 1), 10), "###\n^~.");
    }

    #[test]
    fn boxed_in_steam_stays() {
        let picture = "\
            ###########
            #####^#####
            ###########";
        for sign_or_zero in -1..=1 {
            for sign in [-1, 1] {
                assert_eq!(
                    run(picture, 5, 1, rolls(sign_or_zero, sign), 10),
                    Grid::from_ascii(picture).unwrap().to_string()
                );
            }
        }
    }
}
