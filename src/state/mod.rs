pub mod reactivity;
pub mod route;
pub mod session;
pub mod storage;

pub use reactivity::{Observable, ReactiveState, SubscriptionId};
pub use route::{Navigator, Route};
pub use session::SessionStore;
pub use storage::{MemoryTokenStorage, TokenStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalTokenStorage;
