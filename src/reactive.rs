//! Single-threaded reactive cells
//!
//! [`Signal`] is a writable cell owned by whoever produces the value (tab
//! service, transport service, request editor). [`Computed`] is a lazily
//! re-evaluated derivation over an explicit list of dependencies.
//!
//! Every write to a signal bumps its version. A computed caches the
//! dependency versions seen at its last evaluation and recomputes on the next
//! read only when one of them moved. Evaluation is synchronous, so a read
//! always reflects the latest inputs.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Anything a [`Computed`] can depend on.
pub trait Dependency {
    /// Monotonically non-decreasing change counter.
    fn version(&self) -> u64;
}

struct SignalInner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

impl<T> Dependency for SignalInner<T> {
    fn version(&self) -> u64 {
        self.version.get()
    }
}

/// Writable reactive cell. Clones share the same underlying value.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                value: RefCell::new(value),
                version: Cell::new(0),
            }),
        }
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value and notify dependents.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.bump();
    }

    /// Mutate the value in place and notify dependents.
    #[allow(dead_code)]
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.bump();
    }

    #[allow(dead_code)]
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Type-erased handle for use in a dependency list.
    pub fn as_dependency(&self) -> Rc<dyn Dependency> {
        self.inner.clone()
    }

    fn bump(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

struct ComputedInner<T> {
    deps: Vec<Rc<dyn Dependency>>,
    compute: Box<dyn Fn() -> T>,
    cache: RefCell<Option<(Vec<u64>, T)>>,
}

impl<T> ComputedInner<T> {
    fn snapshot(&self) -> Vec<u64> {
        self.deps.iter().map(|d| d.version()).collect()
    }
}

impl<T> Dependency for ComputedInner<T> {
    // Dependencies only ever count up, so their sum moves whenever any of them does.
    fn version(&self) -> u64 {
        self.deps.iter().map(|d| d.version()).sum()
    }
}

/// Lazily recomputed derived value.
pub struct Computed<T> {
    inner: Rc<ComputedInner<T>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Computed<T> {
    /// Build a derivation over `deps`. `compute` must only read values whose
    /// handles appear in `deps`, otherwise changes to them go unnoticed.
    pub fn new(deps: Vec<Rc<dyn Dependency>>, compute: impl Fn() -> T + 'static) -> Self {
        Self {
            inner: Rc::new(ComputedInner {
                deps,
                compute: Box::new(compute),
                cache: RefCell::new(None),
            }),
        }
    }

    /// Current value, recomputed first if any dependency changed.
    pub fn get(&self) -> T {
        if !self.is_stale() {
            if let Some((_, value)) = self.inner.cache.borrow().as_ref() {
                return value.clone();
            }
        }

        let value = (self.inner.compute)();
        *self.inner.cache.borrow_mut() = Some((self.inner.snapshot(), value.clone()));
        value
    }

    #[allow(dead_code)]
    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    /// Whether the next [`get`](Self::get) will re-run the derivation.
    pub fn is_stale(&self) -> bool {
        match self.inner.cache.borrow().as_ref() {
            Some((seen, _)) => *seen != self.inner.snapshot(),
            None => true,
        }
    }

    pub fn as_dependency(&self) -> Rc<dyn Dependency> {
        self.inner.clone()
    }
}
