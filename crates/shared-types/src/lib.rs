pub mod choice;
pub mod error;
pub mod exchange;
pub mod feature_flags;

pub use choice::*;
pub use error::*;
pub use exchange::*;
pub use feature_flags::*;
