pub mod injector;
pub mod registry;

mod core;
mod global;
mod handle;

use crate::util::any::AsAny;

pub use global::global;
pub use handle::Container;

/// A type-erased object produced by a provider.
///
/// Providers always produce shared handles, so the concrete type behind a
/// `dyn Managed` is `Arc<T>` for the requested `T`.
pub trait Managed: AsAny + Send + Sync + 'static {}

impl<T> Managed for T where T: AsAny + Send + Sync + 'static {}
