use std::sync::Arc;

use snafu::prelude::*;

use crate::container::Managed;
use crate::identity::{self, TypeIdentity};
use crate::util::any::Downcast;

/// The object-safe side of resolution.
///
/// [`Injector::dyn_get`] looks up the provider registered for `identity`
/// and returns the type-erased object it produced. Use [`TypedInjector`] to
/// get typed handles back.
#[cfg_attr(test, mockall::automock)]
pub trait Injector: Send + Sync {
    fn dyn_get(&self, identity: TypeIdentity) -> Result<Box<dyn Managed>, InjectorError>;
}

pub trait TypedInjector: Injector {
    /// Resolves a handle to `T` with the provider registered for `T`.
    ///
    /// Any dependency the provider needs is resolved recursively first. A
    /// failure anywhere in that chain is returned as is. Cycles are not
    /// detected: a provider that ends up requesting its own type recurses
    /// until the stack overflows.
    ///
    /// # Errors
    ///
    /// Returns [`InjectorError::NotRegistered`] if no provider is registered
    /// for `T` or for one of its transitive dependencies.
    fn get<T>(&self) -> Result<Arc<T>, InjectorError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let boxed = self.dyn_get(identity::of::<T>())?;
        match boxed.downcast::<Arc<T>>() {
            Ok(object) => Ok(*object),
            Err(_) => unreachable!("the object's type should be `Arc<T>`"),
        }
    }

    fn upcast_dyn(&self) -> &dyn Injector;
}

impl<T> TypedInjector for T
where
    T: Injector,
{
    fn upcast_dyn(&self) -> &dyn Injector {
        self
    }
}

impl TypedInjector for dyn Injector + '_ {
    fn upcast_dyn(&self) -> &dyn Injector {
        self
    }
}

#[derive(Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum InjectorError {
    #[snafu(display("could not find any provider registered for {identity}"))]
    #[non_exhaustive]
    NotRegistered { identity: TypeIdentity },
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;

    trait Abstract: Send + Sync {
        fn value(&self) -> i32;
    }

    impl Abstract for i32 {
        fn value(&self) -> i32 {
            *self
        }
    }

    #[test]
    fn typed_injector_get_succeeds() {
        let mut injector = MockInjector::new();
        injector
            .expect_dyn_get()
            .with(eq(identity::of::<dyn Abstract>()))
            .returning(|_| {
                let object: Arc<dyn Abstract> = Arc::new(42i32);
                Ok(Box::new(object) as Box<dyn Managed>)
            });

        let object = injector.get::<dyn Abstract>().unwrap();
        assert_eq!(object.value(), 42);
    }

    #[test]
    fn typed_injector_get_fails_when_not_registered() {
        let mut injector = MockInjector::new();
        injector.expect_dyn_get().returning(|identity| {
            Err(InjectorError::NotRegistered { identity })
        });

        let res = injector.upcast_dyn().get::<String>();
        assert!(matches!(
            res,
            Err(InjectorError::NotRegistered { identity }) if identity == identity::of::<String>()
        ));
    }

    #[test]
    fn injector_error_display_names_the_type() {
        let err = InjectorError::NotRegistered {
            identity: identity::of::<u64>(),
        };
        assert!(err.to_string().contains("u64"));
    }
}
