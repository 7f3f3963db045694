//! Granular solid: falls, else slides one cell diagonally down. Sinks
//! through liquid and gas by swapping with them.

use crate::api::SandApi;
use crate::dice::Dice;

fn displaceable<D: Dice>(api: &SandApi<D>, dc: i32) -> bool {
    api.is_gas(dc, 1) || api.is_liquid(dc, 1) || api.is_air(dc, 1)
}

pub fn update_granular<D: Dice>(api: &mut SandApi<D>) {
    if displaceable(api, 0) {
        api.swap(0, 1);
        return;
    }

    // One random side only; no second try the other way.
    let dc = api.sign();
    if displaceable(api, dc) {
        api.swap(dc, 1);
    }
}
