use std::sync::Arc;

use crate::container::core::ContainerCore;
use crate::container::injector::{Injector, InjectorError, TypedInjector};
use crate::container::registry::{Configurer, Registration, RegistryError};
use crate::container::Managed;
use crate::identity::{self, TypeIdentity};
use crate::lifetime::Lifetime;
use crate::module::Module;

/// A registry of providers keyed by the type they produce.
///
/// Registration operations come from [`TypedConfigurer`] and resolution from
/// [`TypedInjector`]. Both take `&self`, so a container can be registered on
/// and resolved from at any time, from any thread. Cloning a [`Container`]
/// yields another handle to the same registry.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use minioc::prelude::*;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English {
///     name: Arc<String>,
/// }
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         format!("Hello, {}!", self.name)
///     }
/// }
///
/// let container = Container::new();
/// container.register_instance(Arc::new(String::from("world")));
/// container.register_functor(|name: Arc<String>| -> Arc<dyn Greeter> {
///     Arc::new(English { name })
/// });
///
/// let greeter = container.get_object::<dyn Greeter>().unwrap();
/// assert_eq!(greeter.greet(), "Hello, world!");
/// ```
///
/// [`TypedConfigurer`]: crate::container::registry::TypedConfigurer
#[derive(Clone)]
pub struct Container {
    core: Arc<ContainerCore>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            core: Arc::new(ContainerCore::new()),
        }
    }

    /// Resolves a handle to `T`. This is [`TypedInjector::get`] under a
    /// name that reads well at call sites.
    ///
    /// # Errors
    ///
    /// Returns [`InjectorError::NotRegistered`] if `T` or one of its
    /// transitive dependencies has no provider.
    pub fn get_object<T>(&self) -> Result<Arc<T>, InjectorError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.get::<T>()
    }

    /// Applies all registrations of `module` to this container.
    ///
    /// # Errors
    ///
    /// Returns an error naming the module if it fails to configure.
    /// Registrations made before the failure are kept.
    pub fn install<M>(&self, module: M) -> Result<(), RegistryError>
    where
        M: Module,
    {
        module.setup(self)
    }

    pub fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.lifetime_of::<T>().is_some()
    }

    /// Returns the lifetime of the current registration for `T`, if any.
    pub fn lifetime_of<T>(&self) -> Option<Lifetime>
    where
        T: ?Sized + 'static,
    {
        self.core.lifetime_of(identity::of::<T>())
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Injector for Container {
    fn dyn_get(&self, identity: TypeIdentity) -> Result<Box<dyn Managed>, InjectorError> {
        self.core.dyn_get(identity)
    }
}

impl Configurer for Container {
    fn dyn_register(&self, registration: Registration) {
        self.core.register(registration);
    }

    fn upcast_injector(&self) -> &dyn Injector {
        self
    }
}
