use std::marker::PhantomData;
use std::sync::Arc;

use crate::lifetime::Transient;
use crate::module::dsl::{ClosureBinding, ComponentBinding, InstanceBinding, ProviderBinding};
use crate::provider::closure::Closure;
use crate::provider::component::{Component, Upcast};
use crate::provider::TypedProvider;

/// A registration for `T` whose source is not chosen yet.
pub struct MetadataBinding<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T> MetadataBinding<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    pub(super) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    pub fn to_instance(self, instance: Arc<T>) -> InstanceBinding<T> {
        InstanceBinding::new(instance)
    }

    pub fn to_closure<C, D>(self, closure: C) -> ClosureBinding<T, C, D>
    where
        C: Closure<T, D>,
        D: 'static,
    {
        ClosureBinding::new(closure)
    }

    pub fn to_component<C>(self) -> ComponentBinding<T, C, Transient>
    where
        C: Component + Upcast<T>,
    {
        ComponentBinding::new()
    }

    pub fn to_provider<P>(self, provider: P) -> ProviderBinding<T, P>
    where
        P: TypedProvider<Output = T>,
    {
        ProviderBinding::new(provider)
    }
}
