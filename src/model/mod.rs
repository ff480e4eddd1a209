pub mod category;
pub mod channel;
pub mod selection;
pub mod sidebar;

pub use category::*;
pub use channel::*;
pub use selection::*;
pub use sidebar::*;
