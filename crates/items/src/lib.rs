pub mod animate;
pub mod controller;
pub mod item;

pub use animate::Animation;
pub use controller::{Controller, RunOutcome};
pub use item::ItemSpec;
