// ============================================================================
// EVENT HANDLING - Listeners globales sobre `window`
// ============================================================================
// El closure vive dentro del listener y se desregistra en Drop, así que un
// componente que se desmonta no deja listeners acumulados.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

pub struct WindowListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// `None` si no hay `window` o el registro falla
    pub fn new<F>(event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let target: EventTarget = web_sys::window()?.into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref()) {
            log::error!("❌ No se pudo registrar '{}': {:?}", event_type, e);
            return None;
        }
        Some(Self {
            target,
            event_type,
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

/// Dispara un evento sin datos sobre `window`
pub fn dispatch_window_event(event_type: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match Event::new(event_type) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                log::error!("❌ Error despachando '{}': {:?}", event_type, e);
            }
        }
        Err(e) => log::error!("❌ Error creando evento '{}': {:?}", event_type, e),
    }
}
