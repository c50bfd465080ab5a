// ============================================================================
// QUERY CLIENT - Caché de consultas por clave con deduplicación
// ============================================================================
// QueryKey -> { datos, error, estado, stale, generación, petición en vuelo,
// suscriptores }.
//
// - Peticiones concurrentes a la misma clave comparten un único future.
// - `invalidate(prefijo)` marca las entradas como stale y sube su generación:
//   una respuesta que llega con una generación antigua no se escribe.
// - Un reintento automático; sin refetch al recuperar el foco.
//
// Todo es monohilo (Rc/RefCell). Nunca se mantiene un borrow durante un
// `.await` ni mientras se llama a los suscriptores.
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::config::QueryConfig;
use crate::error::HttpError;
use crate::models::QueryKey;

type Payload = Rc<dyn Any>;
type SharedFetch = Shared<LocalBoxFuture<'static, Result<Payload, HttpError>>>;
type Listener = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// Nunca solicitada
    Idle,
    Loading,
    Success,
    Error,
}

/// Vista tipada de una entrada de la caché
#[derive(Clone, Debug, PartialEq)]
pub struct QueryResult<T> {
    pub status: QueryStatus,
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_fetching: bool,
    pub is_stale: bool,
}

impl<T> QueryResult<T> {
    fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            is_fetching: false,
            is_stale: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub retry: u32,
    pub retry_delay_ms: u32,
    pub refetch_on_focus: bool,
}

impl From<&QueryConfig> for QueryOptions {
    fn from(config: &QueryConfig) -> Self {
        Self {
            retry: config.retry,
            retry_delay_ms: config.retry_delay_ms,
            refetch_on_focus: config.refetch_on_focus,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct CacheEntry {
    status: QueryStatus,
    data: Option<Payload>,
    error: Option<HttpError>,
    stale: bool,
    generation: u64,
    in_flight: Option<SharedFetch>,
    listeners: Vec<(ListenerId, Listener)>,
}

impl CacheEntry {
    fn new(generation: u64) -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            stale: false,
            generation,
            in_flight: None,
            listeners: Vec::new(),
        }
    }

    fn is_fresh(&self) -> bool {
        self.status == QueryStatus::Success && !self.stale && self.data.is_some()
    }

    fn listeners(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, l)| l.clone()).collect()
    }
}

#[derive(Default)]
struct Cache {
    entries: HashMap<QueryKey, CacheEntry>,
    // Generaciones únicas en todo el cliente: una entrada recreada tras
    // `remove` nunca reutiliza la generación de una petición en vuelo.
    next_generation: u64,
    next_listener: u64,
}

impl Cache {
    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn entry(&mut self, key: &QueryKey) -> &mut CacheEntry {
        let Cache { entries, next_generation, .. } = self;
        entries.entry(key.clone()).or_insert_with(|| {
            *next_generation += 1;
            CacheEntry::new(*next_generation)
        })
    }
}

enum Lookup {
    Cached(Payload),
    Join(SharedFetch),
    Start(SharedFetch, Vec<Listener>),
}

/// Handle barato de clonar; los clones comparten la caché.
#[derive(Clone)]
pub struct QueryClient {
    cache: Rc<RefCell<Cache>>,
    options: QueryOptions,
}

impl QueryClient {
    pub fn new(options: QueryOptions) -> Self {
        Self {
            cache: Rc::new(RefCell::new(Cache::default())),
            options,
        }
    }

    /// Devuelve los datos de `key`, llamando a `fetcher` solo si no hay datos
    /// frescos ni una petición en vuelo para esa clave.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, HttpError>
    where
        T: Clone + 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, HttpError>> + 'static,
    {
        let lookup = {
            let mut cache = self.cache.borrow_mut();
            let entry = cache.entry(&key);

            let cached = if entry.is_fresh() { entry.data.clone() } else { None };
            if let Some(data) = cached {
                Lookup::Cached(data)
            } else if let Some(in_flight) = entry.in_flight.clone() {
                log::debug!("🔁 Petición deduplicada para {}", key);
                Lookup::Join(in_flight)
            } else {
                let generation = entry.generation;
                let task = self.spawn_fetch(key.clone(), generation, fetcher);
                entry.in_flight = Some(task.clone());
                if entry.data.is_none() {
                    entry.status = QueryStatus::Loading;
                }
                Lookup::Start(task, entry.listeners())
            }
        };

        let payload = match lookup {
            Lookup::Cached(data) => {
                log::debug!("📦 Caché válida para {}", key);
                data
            }
            Lookup::Join(task) => task.await?,
            Lookup::Start(task, listeners) => {
                // Los suscriptores ven el estado "cargando"
                for listener in listeners {
                    listener();
                }
                task.await?
            }
        };

        payload
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| HttpError::decode(format!("Tipo inesperado en caché para {}", key)))
    }

    fn spawn_fetch<T, F, Fut>(&self, key: QueryKey, generation: u64, fetcher: F) -> SharedFetch
    where
        T: Clone + 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, HttpError>> + 'static,
    {
        let cache = Rc::downgrade(&self.cache);
        let retries = self.options.retry;
        let delay_ms = self.options.retry_delay_ms;

        async move {
            log::info!("⬇️ Cargando {}", key);
            let result = fetch_with_retry(&key, &fetcher, retries, delay_ms)
                .await
                .map(|value| Rc::new(value) as Payload);
            settle(&cache, &key, generation, &result);
            result
        }
        .boxed_local()
        .shared()
    }

    /// Estado actual de `key` sin disparar ninguna petición
    pub fn peek<T: Clone + 'static>(&self, key: &QueryKey) -> QueryResult<T> {
        let cache = self.cache.borrow();
        match cache.entries.get(key) {
            None => QueryResult::idle(),
            Some(entry) => QueryResult {
                status: entry.status,
                data: entry.data.as_ref().and_then(|d| d.downcast_ref::<T>().cloned()),
                error: entry.error.as_ref().map(|e| e.message.clone()),
                is_fetching: entry.in_flight.is_some(),
                is_stale: entry.stale,
            },
        }
    }

    /// Hay que pedir `key`: no hay nada en vuelo y la entrada no existe, nunca
    /// se cargó o está stale. Un error no se reintenta solo.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        let cache = self.cache.borrow();
        match cache.entries.get(key) {
            None => true,
            Some(entry) => {
                entry.in_flight.is_none()
                    && (entry.stale || matches!(entry.status, QueryStatus::Idle | QueryStatus::Loading))
            }
        }
    }

    pub fn subscribe<F: Fn() + 'static>(&self, key: &QueryKey, listener: F) -> ListenerId {
        let mut cache = self.cache.borrow_mut();
        cache.next_listener += 1;
        let id = ListenerId(cache.next_listener);
        cache.entry(key).listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, key: &QueryKey, id: ListenerId) {
        if let Some(entry) = self.cache.borrow_mut().entries.get_mut(key) {
            entry.listeners.retain(|(listener, _)| *listener != id);
        }
    }

    /// Marca como stale todas las entradas con ese prefijo y descarta sus
    /// peticiones en vuelo. Devuelve las claves afectadas.
    pub fn invalidate(&self, prefix: &QueryKey) -> Vec<QueryKey> {
        let (keys, listeners) = {
            let mut cache = self.cache.borrow_mut();
            let matching: Vec<QueryKey> = cache
                .entries
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect();

            let mut listeners = Vec::new();
            for key in &matching {
                let generation = cache.bump_generation();
                let entry = cache.entry(key);
                entry.stale = true;
                entry.generation = generation;
                entry.in_flight = None;
                listeners.extend(entry.listeners());
            }
            (matching, listeners)
        };

        log::debug!("♻️ Invalidado {} ({} entradas)", prefix, keys.len());
        for listener in listeners {
            listener();
        }
        keys
    }

    /// Elimina las entradas con ese prefijo (suscriptores incluidos)
    pub fn remove(&self, prefix: &QueryKey) {
        self.cache
            .borrow_mut()
            .entries
            .retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().entries.clear();
        log::debug!("🗑️ Caché de consultas vaciada");
    }

    /// Ejecuta una mutación (sin reintentos). `on_success` corre antes de
    /// devolver el resultado; si falla no se ejecuta nada.
    pub async fn mutate<T, M, Fut, S>(&self, mutation: M, on_success: S) -> Result<T, HttpError>
    where
        M: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, HttpError>>,
        S: FnOnce(&QueryClient, &T),
    {
        match mutation().await {
            Ok(value) => {
                on_success(self, &value);
                Ok(value)
            }
            Err(e) => {
                log::error!("❌ Mutación fallida: {}", e);
                Err(e)
            }
        }
    }

    /// Recuperación del foco de la ventana
    pub fn on_window_focus(&self) -> Vec<QueryKey> {
        if !self.options.refetch_on_focus {
            log::debug!("👁️ Foco recuperado: refetch desactivado");
            return Vec::new();
        }
        let roots: Vec<QueryKey> = {
            let cache = self.cache.borrow();
            cache
                .entries
                .iter()
                .filter(|(_, entry)| !entry.listeners.is_empty())
                .map(|(key, _)| key.clone())
                .collect()
        };
        roots.iter().flat_map(|key| self.invalidate(key)).collect()
    }
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

async fn fetch_with_retry<T, F, Fut>(
    key: &QueryKey,
    fetcher: &F,
    retries: u32,
    delay_ms: u32,
) -> Result<T, HttpError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    let mut attempt = 0;
    loop {
        match fetcher().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < retries => {
                attempt += 1;
                log::warn!("⚠️ {} falló ({}), reintento {}/{}", key, e, attempt, retries);
                sleep_ms(delay_ms).await;
            }
            Err(e) => {
                log::error!("❌ Error cargando {}: {}", key, e);
                return Err(e);
            }
        }
    }
}

// Escribe el resultado solo si la entrada sigue en la misma generación
fn settle(cache: &Weak<RefCell<Cache>>, key: &QueryKey, generation: u64, result: &Result<Payload, HttpError>) {
    let Some(cache) = cache.upgrade() else {
        return;
    };

    let listeners = {
        let mut cache = cache.borrow_mut();
        let Some(entry) = cache.entries.get_mut(key) else {
            log::debug!("🚮 {} eliminada durante la petición", key);
            return;
        };
        if entry.generation != generation {
            log::debug!("🚮 Respuesta obsoleta descartada para {}", key);
            return;
        }

        entry.in_flight = None;
        match result {
            Ok(data) => {
                entry.status = QueryStatus::Success;
                entry.data = Some(data.clone());
                entry.error = None;
                entry.stale = false;
            }
            Err(e) => {
                // Los datos anteriores se conservan
                entry.status = QueryStatus::Error;
                entry.error = Some(e.clone());
            }
        }
        entry.listeners()
    };

    for listener in listeners {
        listener();
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(_ms: u32) {}
