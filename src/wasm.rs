//! WASM bindings for the dice simulator.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { DiceSimulator, list_dice_json } from 'platonic';
//!
//! async function main() {
//!     await init();
//!
//!     const dice = JSON.parse(list_dice_json());
//!     const sim = new DiceSimulator('cube');
//!     const summary = JSON.parse(sim.roll(1000));
//!     console.log(summary.results, sim.theoretical_probability());
//! }
//! ```

// WASM-bindgen exports don't need #[must_use] - values returned to JS
#![allow(clippy::must_use_candidate)]

use wasm_bindgen::prelude::*;

use crate::catalog::{list_dice, DieKind};
use crate::engine::{simulate_die, SimRng};

/// Simulator bound to one die, owning its own generator.
#[wasm_bindgen]
pub struct DiceSimulator {
    die: DieKind,
    rng: SimRng,
}

#[wasm_bindgen]
impl DiceSimulator {
    /// Create a simulator for a die name such as `"cube"` or `"d20"`.
    #[wasm_bindgen(constructor)]
    pub fn new(die: &str) -> Result<DiceSimulator, JsValue> {
        let die = die
            .parse::<DieKind>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            die,
            rng: SimRng::from_entropy(),
        })
    }

    /// Number of faces on the bound die.
    pub fn faces(&self) -> u32 {
        self.die.faces()
    }

    /// Theoretical probability of each face.
    pub fn theoretical_probability(&self) -> f64 {
        self.die.definition().theoretical_probability()
    }

    /// Roll the die `rolls` times and return the summary as JSON.
    ///
    /// The caller clamps user input; zero rolls is rejected.
    pub fn roll(&mut self, rolls: u32) -> Result<String, JsValue> {
        let summary = simulate_die(self.die, u64::from(rolls), &mut self.rng)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// The die catalog as a JSON array.
#[wasm_bindgen]
pub fn list_dice_json() -> String {
    serde_json::to_string(list_dice()).unwrap_or_default()
}
