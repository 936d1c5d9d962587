mod closure_implementation;
mod wrapper;

use std::sync::Arc;

use crate::container::injector::{Injector, InjectorError};

pub use wrapper::ClosureProvider;

/// A specialized form of [`Fn`] that can be called by supplying arguments
/// retrieved from an [`Injector`].
///
/// Closures and functions of `Fn(Arc<D1>, Arc<D2>, ...) -> Arc<T> + Send +
/// Sync + 'static` are [`Closure`]s. `D` is a marker tuple `(Arc<D1>,
/// Arc<D2>, ...)` which tells different arities apart. Arguments are resolved
/// in declaration order, and they are resolved again on every call.
///
/// Usually you don't need to use a [`Closure`] directly. The most recommended
/// way is to use `register_functor()` or `to_closure()` [`dsl`]s offered by
/// this crate. Or wrap your [`Closure`] in a [`ClosureProvider`] if you need
/// low-level control.
///
/// Due to the lack of support for functions of variable length parameters,
/// [`Closure`] is only implemented by functions whose arity is at most 16.
///
/// [`dsl`]: crate::module::dsl
pub trait Closure<T, D>
where
    Self: Send + Sync + 'static,
    T: ?Sized + Send + Sync + 'static,
    D: 'static,
{
    /// Retrieves the dependencies from the injector and calls `self` with
    /// these dependencies.
    ///
    /// # Errors
    ///
    /// Returns an error if any dependency can't be resolved.
    fn run(&self, injector: &dyn Injector) -> Result<Arc<T>, InjectorError>;
}
