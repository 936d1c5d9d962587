use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::registry::{Configurer, TypedConfigurer};
use crate::provider::TypedProvider;

pub struct ProviderBinding<T, P>
where
    T: ?Sized + Send + Sync + 'static,
    P: TypedProvider<Output = T>,
{
    provider: P,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T, P> ProviderBinding<T, P>
where
    T: ?Sized + Send + Sync + 'static,
    P: TypedProvider<Output = T>,
{
    pub(super) fn new(provider: P) -> Self {
        Self {
            provider,
            _marker: PhantomData,
        }
    }

    pub fn set_on(self, configurer: &dyn Configurer) {
        configurer.register::<T, P>(self.provider);
    }
}
