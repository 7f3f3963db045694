//! Browser-facing wrapper around a [`Simulation`].
//!
//! Material ids cross the boundary as `u8`. The cell buffer behind
//! [`Universe::cells`] is one byte per cell, row-major, and can be viewed
//! from JS as a `Uint8Array` of `cols * rows` bytes.

use wasm_bindgen::prelude::*;

use crate::brush::{Brush, BrushShape};
use crate::config::SimConfig;
use crate::material::Material;
use crate::session::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    brush: Brush,
}

fn material(id: u8) -> Material {
    Material::try_from(id).unwrap_or_else(|err| wasm_bindgen::throw_str(&err.to_string()))
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(cols: usize, rows: usize, seed: u64) -> Universe {
        let config = SimConfig {
            cols,
            rows,
            seed,
            ..SimConfig::default()
        };
        Self::from_sim_config(&config)
    }

    /// Build from a JSON `SimConfig`; missing fields take their defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    #[must_use]
    pub fn from_config(json: &str) -> Universe {
        let config = SimConfig::from_json(json)
            .unwrap_or_else(|err| wasm_bindgen::throw_str(&err.to_string()));
        Self::from_sim_config(&config)
    }

    /// Advance one tick regardless of pause state.
    pub fn tick(&mut self) {
        self.sim.tick();
    }

    /// Per-frame update; does nothing while paused.
    pub fn frame(&mut self) -> bool {
        self.sim.frame()
    }

    /// Single step; only while paused.
    pub fn step(&mut self) -> bool {
        self.sim.step()
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.sim.toggle_pause();
    }

    #[wasm_bindgen(js_name = isPaused)]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.sim.is_paused()
    }

    /// Paint one cell. Throws on an unknown material id.
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, c: i32, r: i32, id: u8) {
        self.sim.paint(c, r, material(id));
    }

    /// Paint with the current brush from the previous cursor cell to the
    /// current one. Throws on an unknown material id.
    #[wasm_bindgen(js_name = paintStroke)]
    pub fn paint_stroke(&mut self, from_c: i32, from_r: i32, to_c: i32, to_r: i32, id: u8) {
        let brush = self.brush;
        self.sim.stroke(&brush, (from_c, from_r), (to_c, to_r), material(id));
    }

    #[wasm_bindgen(js_name = growBrush)]
    pub fn grow_brush(&mut self) {
        self.brush.grow();
    }

    #[wasm_bindgen(js_name = shrinkBrush)]
    pub fn shrink_brush(&mut self) {
        self.brush.shrink();
    }

    /// `false` for a single-cell brush, `true` for a square.
    #[wasm_bindgen(js_name = setSquareBrush)]
    pub fn set_square_brush(&mut self, square: bool) {
        self.brush.shape = if square {
            BrushShape::Square
        } else {
            BrushShape::Point
        };
    }

    pub fn clear(&mut self) {
        self.sim.clear();
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.sim.grid().cols()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.sim.grid().rows()
    }

    /// Pointer to the `cols * rows` material id bytes.
    #[must_use]
    pub fn cells(&self) -> *const u8 {
        self.sim.grid().cells().as_ptr().cast::<u8>()
    }

    /// Material id at a cell, or 255 off the grid.
    #[wasm_bindgen(js_name = cellAt)]
    #[must_use]
    pub fn cell_at(&self, c: i32, r: i32) -> u8 {
        self.sim.grid().get_checked(c, r).map_or(u8::MAX, Material::id)
    }

    /// RGBA packed as `0xRRGGBBAA`. Throws on an unknown material id.
    #[wasm_bindgen(js_name = materialColor)]
    #[must_use]
    pub fn material_color(id: u8) -> u32 {
        u32::from_be_bytes(material(id).color())
    }

    #[wasm_bindgen(js_name = materialName)]
    #[must_use]
    pub fn material_name(id: u8) -> String {
        material(id).name().to_owned()
    }
}

impl Universe {
    fn from_sim_config(config: &SimConfig) -> Universe {
        let sim = Simulation::new(config)
            .unwrap_or_else(|err| wasm_bindgen::throw_str(&err.to_string()));
        Universe {
            sim,
            brush: Brush::default(),
        }
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}
