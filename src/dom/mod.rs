// ============================================================================
// DOM MODULE - Integración con el navegador (solo wasm32)
// ============================================================================

pub mod events;
pub mod navigator;

pub use events::{dispatch_window_event, WindowListener};
pub use navigator::{BrowserNavigator, POP_STATE_EVENT, ROUTE_CHANGE_EVENT};
