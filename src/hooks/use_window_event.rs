use yew::prelude::*;

use crate::dom::WindowListener;

/// Escucha un evento de `window` mientras el componente esté montado
#[hook]
pub fn use_window_event(event_type: &'static str, handler: Callback<()>) {
    use_effect_with(event_type, move |event_type| {
        let listener = WindowListener::new(*event_type, move |_| handler.emit(()));
        move || drop(listener)
    });
}
