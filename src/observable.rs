use std::sync::{Arc, Mutex, RwLock};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value cell that notifies subscribers whenever it is written.
///
/// Stands in for UI signals: view controllers own their state in
/// observables and renderers subscribe to re-draw.
pub struct Observable<T> {
    value: RwLock<T>,
    listeners: Mutex<Vec<Listener<T>>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        match self.value.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Read without cloning the whole value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.value.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    pub fn set(&self, value: T) {
        let current = {
            let mut guard = match self.value.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = value;
            guard.clone()
        };
        self.notify(&current);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let current = {
            let mut guard = match self.value.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            f(&mut guard);
            guard.clone()
        };
        self.notify(&current);
    }

    /// Register a listener. It is called after every `set`/`update`, with the
    /// new value, on the writer's thread.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        let mut listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.push(Arc::new(listener));
    }

    /// Listeners run on a snapshot taken with no lock held, so they may
    /// write or subscribe to this observable themselves.
    fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = match self.listeners.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        for listener in listeners {
            listener(value);
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
