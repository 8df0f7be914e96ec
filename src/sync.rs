//! Lock shim behind the round's `&self` mutation API.
//!
//! The deck, hands, and state live in these mutexes so a presentation layer
//! can drive the round through shared references. Callers are cooperative
//! and single-threaded, so the locks are never contended; under `std` a
//! poisoned lock is recovered rather than propagated, and `no_std` builds
//! substitute `spin::Mutex` wholesale.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    // Lock poisoning is ignored: the engine holds locks only across short,
    // panic-free sections.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
