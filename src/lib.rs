// ============================================================================
// CATALOG ADMIN - Panel de administración del catálogo (Rust + WASM)
// ============================================================================
// Capas:
// - Models: registros del API, filtros y claves de caché
// - Services: transporte HTTP, ApiClient y QueryClient (caché + dedup)
// - State: sesión, rutas y estado reactivo
// - ViewModels: estado de cada vista, sin dependencias del navegador
// - Components / hooks / dom: solo wasm32 (yew + web-sys)
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod context;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

#[cfg(test)]
mod testing;
