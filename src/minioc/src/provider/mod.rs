pub mod closure;
pub mod component;
pub mod instance;

use std::fmt::Debug;
use std::sync::Arc;

use crate::container::injector::{Injector, InjectorError, TypedInjector};
use crate::container::Managed;
use crate::lifetime::Lifetime;

/// A type-erased factory which produces shared handles to objects of one
/// type.
///
/// This is what a container stores for every registration. All providers
/// registered under one type identity produce `Arc<T>` for the same `T`, so
/// the erased output can always be downcast back once `T` is statically known
/// again.
///
/// Usually, you don't need to implement [`Provider`] manually, since this is
/// automatically done by [`TypedProvider`]'s blanket implementation.
pub trait Provider: Debug + Send + Sync + 'static {
    /// Provides a type-erased `Arc<T>`. A [`Injector`] is needed since the
    /// object may depend on other objects registered in the same container.
    ///
    /// # Errors
    ///
    /// Returns an error if any dependency can't be resolved.
    fn dyn_provide(&self, injector: &dyn Injector) -> Result<Box<dyn Managed>, InjectorError>;
}

/// A static variant of the [`Provider`] trait, leveraging static dispatch and
/// type-safety.
///
/// Whether each request receives a newly built object or a clone of one
/// shared handle is up to the implementation. See [`InstanceProvider`],
/// [`ClosureProvider`] and [`ComponentProvider`] for the ones shipped with
/// this crate.
///
/// [`InstanceProvider`]: instance::InstanceProvider
/// [`ClosureProvider`]: closure::ClosureProvider
/// [`ComponentProvider`]: component::ComponentProvider
pub trait TypedProvider: Provider {
    /// The type behind the handle returned in response to each request.
    type Output: ?Sized + Send + Sync + 'static;

    /// Provides a handle to an object of type [`TypedProvider::Output`],
    /// retrieving its dependencies from `injector`.
    ///
    /// # Errors
    ///
    /// Returns an error if any dependency can't be resolved.
    fn provide<I>(&self, injector: &I) -> Result<Arc<Self::Output>, InjectorError>
    where
        I: TypedInjector + ?Sized;

    /// Whether requests share one object ([`Lifetime::Singleton`]) or each
    /// get a new one ([`Lifetime::Transient`]).
    fn lifetime(&self) -> Lifetime {
        Lifetime::Transient
    }
}

impl<T: TypedProvider> Provider for T {
    fn dyn_provide(&self, injector: &dyn Injector) -> Result<Box<dyn Managed>, InjectorError> {
        self.provide(injector)
            .map(|obj| -> Box<dyn Managed> { Box::new(obj) })
    }
}
