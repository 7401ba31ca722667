// Standalone form widgets
pub mod button;
pub mod form;
pub mod input;
pub mod textarea;

// Compound widgets
pub mod radio_group;
pub mod select;

// Overlays
pub mod dialog;
pub mod toast;

pub use button::*;
pub use dialog::*;
pub use form::*;
pub use input::*;
pub use radio_group::*;
pub use select::*;
pub use textarea::*;
pub use toast::*;
