use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::injector::{InjectorError, TypedInjector};
use crate::provider::component::{Component, Upcast};
use crate::provider::TypedProvider;

/// A [`Provider`] which builds a new `C` on each request and hands it out as
/// an `Arc<T>`.
///
/// [`Provider`]: crate::provider::Provider
pub struct ComponentProvider<T, C>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    _marker: PhantomData<fn() -> (Arc<T>, C)>,
}

impl<T, C> ComponentProvider<T, C>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, C> Debug for ComponentProvider<T, C>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ComponentProvider<T, C>")
            .finish_non_exhaustive()
    }
}

impl<T, C> TypedProvider for ComponentProvider<T, C>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    type Output = T;

    fn provide<I>(&self, injector: &I) -> Result<Arc<Self::Output>, InjectorError>
    where
        I: TypedInjector + ?Sized,
    {
        let object = C::construct(injector)?;
        Ok(<C as Upcast<T>>::upcast(Arc::new(object)))
    }
}
