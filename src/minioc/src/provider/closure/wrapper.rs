use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::injector::{InjectorError, TypedInjector};
use crate::provider::closure::Closure;
use crate::provider::TypedProvider;

/// A [`Provider`] which supplies objects from a [`Closure`].
///
/// The closure is invoked once per request, so whether requests share an
/// object depends on the closure itself.
///
/// # Examples
///
/// ```rust
/// # use std::sync::Arc;
/// # use minioc::provider::closure::ClosureProvider;
/// let closure = |a: Arc<i32>, b: Arc<f64>| Arc::new((*a, *b));
/// let provider = ClosureProvider::new(closure);
/// ```
///
/// [`Provider`]: crate::provider::Provider
pub struct ClosureProvider<T, C, D>
where
    T: ?Sized + Send + Sync + 'static,
    C: Closure<T, D>,
    D: 'static,
{
    closure: C,
    _marker: PhantomData<fn() -> (Arc<T>, D)>,
}

impl<T, C, D> ClosureProvider<T, C, D>
where
    T: ?Sized + Send + Sync + 'static,
    C: Closure<T, D>,
    D: 'static,
{
    /// Creates a new [`ClosureProvider`] from a [`Closure`].
    pub fn new(closure: C) -> Self {
        Self {
            closure,
            _marker: PhantomData,
        }
    }
}

impl<T, C, D> Debug for ClosureProvider<T, C, D>
where
    T: ?Sized + Send + Sync + 'static,
    C: Closure<T, D>,
    D: 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ClosureProvider<T, C, D>")
            .finish_non_exhaustive()
    }
}

impl<T, C, D> TypedProvider for ClosureProvider<T, C, D>
where
    T: ?Sized + Send + Sync + 'static,
    C: Closure<T, D>,
    D: 'static,
{
    type Output = T;

    fn provide<I>(&self, injector: &I) -> Result<Arc<Self::Output>, InjectorError>
    where
        I: TypedInjector + ?Sized,
    {
        self.closure.run(injector.upcast_dyn())
    }
}
