//! Stackable solid: falls straight down through air, gas and liquid, and
//! otherwise stays put. Never slides.

use crate::api::SandApi;
use crate::dice::Dice;

pub fn update_stackable<D: Dice>(api: &mut SandApi<D>) {
    if api.is_air(0, 1) || api.is_gas(0, 1) || api.is_liquid(0, 1) {
        api.swap(0, 1);
    }
}
