// Domain layer: value objects, bundled data and ports. No I/O beyond the JSON data files.

pub mod defaults;
pub mod ports;
pub mod recipe;
pub mod template;

pub use recipe::{Recipe, Recipes};
pub use template::{Template, Templates};
