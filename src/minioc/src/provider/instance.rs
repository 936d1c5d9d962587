use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::container::injector::{InjectorError, TypedInjector};
use crate::lifetime::Lifetime;
use crate::provider::TypedProvider;

/// A [`Provider`] which hands out clones of one pre-built handle, so that
/// every request observes the identical underlying object.
///
/// [`Provider`]: crate::provider::Provider
pub struct InstanceProvider<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance: Arc<T>,
}

impl<T> InstanceProvider<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    pub fn new(instance: Arc<T>) -> Self {
        Self { instance }
    }
}

impl<T> Debug for InstanceProvider<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InstanceProvider<T>")
            .finish_non_exhaustive()
    }
}

impl<T> TypedProvider for InstanceProvider<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    type Output = T;

    fn provide<I>(&self, _injector: &I) -> Result<Arc<Self::Output>, InjectorError>
    where
        I: TypedInjector + ?Sized,
    {
        Ok(Arc::clone(&self.instance))
    }

    fn lifetime(&self) -> Lifetime {
        Lifetime::Singleton
    }
}
