//! A fluent way to write registrations.
//!
//! ```rust
//! # use std::sync::Arc;
//! # use minioc::prelude::*;
//! trait Thing: Send + Sync {
//!     fn describe(&self) -> String;
//! }
//!
//! struct TheThing;
//!
//! impl Thing for TheThing {
//!     fn describe(&self) -> String {
//!         String::from("A Thing")
//!     }
//! }
//!
//! let container = Container::new();
//! bind::<dyn Thing>()
//!     .to_instance(Arc::new(TheThing))
//!     .set_on(&container);
//! bind::<String>()
//!     .to_closure(|thing: Arc<dyn Thing>| Arc::new(thing.describe()))
//!     .set_on(&container);
//!
//! assert_eq!(container.get_object::<String>().unwrap().as_str(), "A Thing");
//! ```

mod closure_helper;
mod component_helper;
mod instance_helper;
mod metadata_helper;
mod provider_helper;

pub use closure_helper::ClosureBinding;
pub use component_helper::ComponentBinding;
pub use instance_helper::InstanceBinding;
pub use metadata_helper::MetadataBinding;
pub use provider_helper::ProviderBinding;

/// Starts a registration for the interface type `T`.
pub fn bind<T>() -> MetadataBinding<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    MetadataBinding::new()
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::sync::Arc;

    use crate::container::injector::{InjectorError, TypedInjector};
    use crate::container::registry::Configurer;
    use crate::container::Container;
    use crate::lifetime::Lifetime;
    use crate::module::Module;
    use crate::provider::closure::ClosureProvider;
    use crate::provider::component::{Component, Upcast};
    use crate::provider::instance::InstanceProvider;

    use super::*;

    trait TestTrait: Send + Sync + 'static {
        fn id(&self) -> u32;
    }

    struct TestDynObject {
        id: Arc<u32>,
    }

    impl TestTrait for TestDynObject {
        fn id(&self) -> u32 {
            *self.id
        }
    }

    impl Component for TestDynObject {
        fn construct<I>(injector: &I) -> Result<Self, InjectorError>
        where
            I: TypedInjector + ?Sized,
        {
            Ok(Self {
                id: injector.get()?,
            })
        }
    }

    impl Upcast<dyn TestTrait> for TestDynObject {
        fn upcast(this: Arc<Self>) -> Arc<dyn TestTrait> {
            this
        }
    }

    struct DslModule;

    impl Module for DslModule {
        fn configure(
            &self,
            configurer: &dyn Configurer,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            bind::<u32>().to_instance(Arc::new(7)).set_on(configurer);

            bind::<dyn TestTrait>()
                .to_component::<TestDynObject>()
                .set_on(configurer);

            bind::<TestDynObject>()
                .to_component::<TestDynObject>()
                .as_singleton()
                .set_on(configurer)?;

            bind::<i64>()
                .to_closure(|id: Arc<u32>| Arc::new(i64::from(*id) * 6))
                .set_on(configurer);

            bind::<&'static str>()
                .to_provider(InstanceProvider::new(Arc::new("str")))
                .set_on(configurer);

            Ok(())
        }
    }

    #[test]
    fn dsl_module_setup_succeeds() {
        let container = Container::new();
        container.install(DslModule).unwrap();

        assert_eq!(container.get_object::<dyn TestTrait>().unwrap().id(), 7);
        assert_eq!(*container.get_object::<i64>().unwrap(), 42);
        assert_eq!(*container.get_object::<&'static str>().unwrap(), "str");

        let first = container.get_object::<TestDynObject>().unwrap();
        let second = container.get_object::<TestDynObject>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        assert_eq!(container.lifetime_of::<u32>(), Some(Lifetime::Singleton));
        assert_eq!(container.lifetime_of::<dyn TestTrait>(), Some(Lifetime::Transient));
        assert_eq!(container.lifetime_of::<TestDynObject>(), Some(Lifetime::Singleton));
        assert_eq!(container.lifetime_of::<i64>(), Some(Lifetime::Transient));
        assert_eq!(container.lifetime_of::<&'static str>(), Some(Lifetime::Singleton));
    }

    #[test]
    fn dsl_provider_binding_takes_lifetime_from_provider() {
        let container = Container::new();

        bind::<i8>()
            .to_provider(InstanceProvider::new(Arc::new(1i8)))
            .set_on(&container);
        bind::<u16>()
            .to_provider(ClosureProvider::new(|| Arc::new(2u16)))
            .set_on(&container);

        let first = container.get_object::<i8>().unwrap();
        let second = container.get_object::<i8>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(container.lifetime_of::<i8>(), Some(Lifetime::Singleton));

        let first = container.get_object::<u16>().unwrap();
        let second = container.get_object::<u16>().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(container.lifetime_of::<u16>(), Some(Lifetime::Transient));
    }

    #[test]
    fn dsl_singleton_component_fails_when_dependency_is_missing() {
        let container = Container::new();

        let res = bind::<dyn TestTrait>()
            .to_component::<TestDynObject>()
            .as_singleton()
            .set_on(&container);

        assert!(matches!(res, Err(InjectorError::NotRegistered { .. })));
        assert!(!container.is_registered::<dyn TestTrait>());
    }
}
