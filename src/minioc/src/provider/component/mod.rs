mod wrapper;

use std::sync::Arc;

use crate::container::injector::{InjectorError, TypedInjector};

pub use wrapper::ComponentProvider;

/// A concrete type that has a dedicated constructor for dependency injection.
///
/// Usually, you don't need to implement the [`Component`] trait manually for
/// your components, because the [`component`] macro helps with this. In case
/// that you really want to write implementation in your own, take a look at
/// the following code snippet:
///
/// ```rust
/// # use std::sync::Arc;
/// # use minioc::container::injector::{TypedInjector, InjectorError};
/// # use minioc::provider::component::{Component, Upcast};
/// #
/// trait Computer: Send + Sync {}
/// trait Processor: Send + Sync {}
///
/// struct Desktop {
///     processor: Arc<dyn Processor>,
///     memory: Arc<u32>,
/// }
///
/// impl Computer for Desktop {}
///
/// impl Component for Desktop {
///     fn construct<I>(injector: &I) -> Result<Self, InjectorError>
///     where
///         I: TypedInjector + ?Sized
///     {
///         let processor = injector.get()?;
///         let memory = injector.get()?;
///         Ok(Self { processor, memory })
///     }
/// }
///
/// impl Upcast<dyn Computer> for Desktop {
///     fn upcast(this: Arc<Self>) -> Arc<dyn Computer> {
///         this
///     }
/// }
/// ```
///
/// In addition, you don't need to use functions in [`Component`] directly. The
/// most recommended way is to use `register_factory()`, `register_singleton()`
/// or `to_component()` [`dsl`]s offered by this crate. Or wrap your
/// [`Component`] in a [`ComponentProvider`] if you need low-level control.
///
/// [`component`]: crate::component
/// [`dsl`]: crate::module::dsl
pub trait Component: Sized + Send + Sync + 'static {
    /// Retrieves the dependencies from the injector and creates the object.
    ///
    /// # Errors
    ///
    /// Returns an error if any dependency can't be resolved.
    fn construct<I>(injector: &I) -> Result<Self, InjectorError>
    where
        I: TypedInjector + ?Sized;
}

/// Converts a shared handle to `Self` into a shared handle to `T`, typically
/// an `Arc<dyn Trait>` implemented by `Self`.
///
/// Every type trivially converts into itself. The [`component`] macro
/// implements this trait for each interface listed in its arguments.
///
/// [`component`]: crate::component
pub trait Upcast<T>: Send + Sync + 'static
where
    T: ?Sized + Send + Sync + 'static,
{
    fn upcast(this: Arc<Self>) -> Arc<T>;
}

impl<T> Upcast<T> for T
where
    T: Send + Sync + 'static,
{
    fn upcast(this: Arc<Self>) -> Arc<T> {
        this
    }
}
