//! Small callback abstractions
//!
//! Each trait has a blanket implementation for the matching closure shape, so
//! APIs can accept `impl ExceptionalConsumer<T, E>` and callers just pass a closure.
//!
//! ```
//! use moulberry_utils::functional::ExceptionalSupplier;
//!
//! let mut next = 0;
//! let mut counter = || -> Result<u32, String> {
//!     next += 1;
//!     Ok(next)
//! };
//! assert_eq!(counter.get(), Ok(1));
//! assert_eq!(counter.get(), Ok(2));
//! ```

/// Consumes three values at once
pub trait TriConsumer<T, U, V> {
    /// Accept the three arguments
    fn accept(&mut self, t: T, u: U, v: V);
}

impl<T, U, V, F> TriConsumer<T, U, V> for F
where
    F: FnMut(T, U, V),
{
    fn accept(&mut self, t: T, u: U, v: V) {
        self(t, u, v);
    }
}

/// Consumes a value and may fail
pub trait ExceptionalConsumer<T, E> {
    /// Accept the value
    fn accept(&mut self, t: T) -> Result<(), E>;
}

impl<T, E, F> ExceptionalConsumer<T, E> for F
where
    F: FnMut(T) -> Result<(), E>,
{
    fn accept(&mut self, t: T) -> Result<(), E> {
        self(t)
    }
}

/// Produces a value and may fail
pub trait ExceptionalSupplier<T, E> {
    /// Produce the next value
    fn get(&mut self) -> Result<T, E>;
}

impl<T, E, F> ExceptionalSupplier<T, E> for F
where
    F: FnMut() -> Result<T, E>,
{
    fn get(&mut self) -> Result<T, E> {
        self()
    }
}
