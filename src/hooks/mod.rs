pub mod use_observed;
pub mod use_query;
pub mod use_window_event;

pub use use_observed::use_observed;
pub use use_query::use_query;
pub use use_window_event::use_window_event;
