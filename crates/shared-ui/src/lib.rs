//! Form widgets and overlays for the exchange pages.

pub mod components;
pub mod outside_click;

pub use components::*;
pub use outside_click::use_outside_click;
