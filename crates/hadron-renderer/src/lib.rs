//! # Hadron Renderer
//!
//! Static multiplet diagrams for the hadron catalog, written as SVG.

pub mod charm_diagram;
pub mod error;
pub mod layout;
pub mod palette;
pub mod svg;
pub mod view;
pub mod weight_diagram;

pub use charm_diagram::*;
pub use error::RenderError;
pub use palette::*;
pub use svg::*;
pub use view::*;
pub use weight_diagram::*;
