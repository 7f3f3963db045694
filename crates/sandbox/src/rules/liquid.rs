//! Liquid: falls through air and gas, otherwise flows sideways.
//!
//! Sideways flow picks one random direction and ray-casts up to
//! `dispersion` cells along the row, passing over its own material, and
//! moves into the first air or gas cell it meets. Anything else ends the
//! scan, so a liquid will not tunnel through a different liquid.

use super::disperse;
use crate::api::SandApi;
use crate::dice::Dice;

pub fn update_liquid<D: Dice>(api: &mut SandApi<D>, dispersion: u32) {
    if api.is_air(0, 1) || api.is_gas(0, 1) {
        api.swap(0, 1);
        return;
    }

    let dir = api.sign();
    disperse(api, dir, dispersion, |api, dc| {
        api.is_air(dc, 0) || api.is_gas(dc, 0)
    });
}
