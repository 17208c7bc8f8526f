//! Draw-list building
//!
//! The host owns the GPU/canvas. This module turns a `Snapshot` into flat
//! coloured rectangles and HUD text it can draw as-is.

pub mod shapes;
pub mod vertex;

pub use shapes::{TextItem, hud_text, scene_instances};
pub use vertex::{Instance, Palette};
