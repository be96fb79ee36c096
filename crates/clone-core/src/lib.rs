pub mod actions;
pub mod config;
pub mod estimate;
pub mod query;
pub mod reducer;
pub mod selection;
pub mod state;
pub mod view;

pub use actions::*;
pub use config::*;
pub use estimate::*;
pub use query::*;
pub use reducer::*;
pub use selection::*;
pub use state::*;
pub use view::*;
