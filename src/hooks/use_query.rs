use yew::prelude::*;

use crate::models::QueryKey;
use crate::services::{QueryClient, QueryResult};

/// Suscribe el componente a `key` y devuelve su estado en caché.
///
/// `load` se emite al montar (o al cambiar la clave) y cada vez que la
/// entrada queda stale sin petición en vuelo, p.ej. tras `invalidate`.
#[hook]
pub fn use_query<T>(client: &QueryClient, key: QueryKey, load: Callback<()>) -> QueryResult<T>
where
    T: Clone + 'static,
{
    let update = use_force_update();
    {
        let client = client.clone();
        use_effect_with(key.clone(), move |key| {
            let key = key.clone();
            let id = {
                let listener_client = client.clone();
                let listener_key = key.clone();
                let load = load.clone();
                client.subscribe(&key, move || {
                    update.force_update();
                    if listener_client.needs_fetch(&listener_key) {
                        load.emit(());
                    }
                })
            };
            if client.needs_fetch(&key) {
                load.emit(());
            }
            move || client.unsubscribe(&key, id)
        });
    }
    client.peek::<T>(&key)
}
