use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::injector::InjectorError;
use crate::container::registry::{Configurer, TypedConfigurer};
use crate::lifetime::{Singleton, Transient};
use crate::provider::component::{Component, Upcast};

/// A registration of the concrete type `C` for `T`.
///
/// By default a new `C` is built on every request. [`as_singleton`] builds
/// one `C` right when the binding is set, so its dependencies must already be
/// registered by then.
///
/// [`as_singleton`]: ComponentBinding::as_singleton
pub struct ComponentBinding<T, C, L>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    _marker: PhantomData<fn() -> (Arc<T>, C, L)>,
}

impl<T, C, L> ComponentBinding<T, C, L>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    pub(super) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    pub fn as_singleton(self) -> ComponentBinding<T, C, Singleton> {
        ComponentBinding::new()
    }

    pub fn as_transient(self) -> ComponentBinding<T, C, Transient> {
        ComponentBinding::new()
    }
}

impl<T, C> ComponentBinding<T, C, Transient>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    pub fn set_on(self, configurer: &dyn Configurer) {
        configurer.register_factory::<T, C>();
    }
}

impl<T, C> ComponentBinding<T, C, Singleton>
where
    T: ?Sized + Send + Sync + 'static,
    C: Component + Upcast<T>,
{
    /// # Errors
    ///
    /// Returns an error if any dependency of `C` can't be resolved yet.
    pub fn set_on(self, configurer: &dyn Configurer) -> Result<(), InjectorError> {
        configurer.register_singleton::<T, C>()
    }
}
