mod provider_map;

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use snafu::prelude::*;

use crate::container::injector::{Injector, InjectorError};
use crate::identity::{self, TypeIdentity};
use crate::provider::closure::{Closure, ClosureProvider};
use crate::provider::component::{Component, ComponentProvider, Upcast};
use crate::provider::instance::InstanceProvider;
use crate::provider::TypedProvider;

pub(super) use provider_map::{ProviderEntry, ProviderMap};

/// Something providers can be registered on.
///
/// A [`Configurer`] is also an [`Injector`], because building an eager
/// singleton resolves its dependencies at registration time. Registrations
/// are made through [`TypedConfigurer`], which keys each provider by the
/// identity of the type it produces. Handing the container a provider any
/// other way doesn't compile:
///
/// ```rust,compile_fail
/// # use std::sync::Arc;
/// # use minioc::container::registry::Registration;
/// # use minioc::prelude::*;
/// # use minioc::provider::instance::InstanceProvider;
/// let container = Container::new();
/// container.dyn_register(Registration::new(InstanceProvider::new(Arc::new(1u8))));
/// ```
pub trait Configurer: Injector {
    /// Stores `registration`, replacing any earlier registration for the
    /// same identity.
    #[doc(hidden)]
    #[allow(private_interfaces)]
    fn dyn_register(&self, registration: Registration);

    fn upcast_injector(&self) -> &dyn Injector;
}

/// A provider paired with the identity of its output type.
pub(crate) struct Registration {
    identity: TypeIdentity,
    entry: ProviderEntry,
}

impl Registration {
    pub(crate) fn new<P>(provider: P) -> Self
    where
        P: TypedProvider,
    {
        let lifetime = provider.lifetime();
        Self {
            identity: identity::of::<P::Output>(),
            entry: ProviderEntry::new(Arc::new(provider), lifetime),
        }
    }

    pub(crate) fn into_parts(self) -> (TypeIdentity, ProviderEntry) {
        (self.identity, self.entry)
    }
}

/// The registration operations, available on every [`Configurer`].
///
/// Each operation keys the registry by the identity of `T`, the interface
/// type requested later on. Registering `T` again makes every later request
/// use the newest registration, while objects handed out earlier stay as
/// they are.
pub trait TypedConfigurer: Configurer {
    /// Registers an arbitrary provider. Each request invokes the provider,
    /// and the registration takes the provider's [`TypedProvider::lifetime`].
    fn register<T, P>(&self, provider: P)
    where
        T: ?Sized + Send + Sync + 'static,
        P: TypedProvider<Output = T>,
    {
        self.dyn_register(Registration::new(provider));
    }

    /// Registers a functor `Fn(Arc<D1>, ..., Arc<Dn>) -> Arc<T>`. On each
    /// request, `D1` to `Dn` are resolved in this order and then the functor
    /// is called with them.
    fn register_functor<T, D, C>(&self, functor: C)
    where
        T: ?Sized + Send + Sync + 'static,
        C: Closure<T, D>,
        D: 'static,
    {
        self.register::<T, _>(ClosureProvider::new(functor));
    }

    /// Registers a pre-built instance. Every request gets a handle to this
    /// very object.
    fn register_instance<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register::<T, _>(InstanceProvider::new(instance));
    }

    /// Registers the concrete type `C` for `T`. Every request builds a new
    /// `C` from freshly resolved dependencies.
    fn register_factory<T, C>(&self)
    where
        T: ?Sized + Send + Sync + 'static,
        C: Component + Upcast<T>,
    {
        self.register::<T, _>(ComponentProvider::<T, C>::new());
    }

    /// Builds one `C` right away and registers it as the instance for `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if any dependency of `C` can't be resolved yet. The
    /// registry is left unchanged in that case.
    fn register_singleton<T, C>(&self) -> Result<(), InjectorError>
    where
        T: ?Sized + Send + Sync + 'static,
        C: Component + Upcast<T>,
    {
        let instance = ComponentProvider::<T, C>::new().provide(self.upcast_injector())?;
        self.register_instance(instance);
        Ok(())
    }
}

impl<T: Configurer + ?Sized> TypedConfigurer for T {}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegistryError {
    #[snafu(display("module {module} fails to setup the configuration"))]
    #[non_exhaustive]
    Module {
        module: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
    #[snafu(display("aggregated registry errors:\n{}", AggregatedDisplayer::new(errors)))]
    #[non_exhaustive]
    Aggregated { errors: Vec<RegistryError> },
}

struct AggregatedDisplayer<'a> {
    errors: &'a [RegistryError],
}

impl<'a> AggregatedDisplayer<'a> {
    fn new(errors: &'a [RegistryError]) -> Self {
        Self { errors }
    }
}

impl Display for AggregatedDisplayer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "{:4}: {}", i + 1, error)?;
        }
        Ok(())
    }
}
