#![allow(clippy::new_without_default)]

extern crate self as minioc;

pub mod container;
pub mod identity;
pub mod lifetime;
pub mod module;
pub mod provider;
mod util;

pub use container::global;
pub use minioc_derive::component;

pub mod prelude {
    pub use crate::component;
    pub use crate::container::injector::{InjectorError, TypedInjector};
    pub use crate::container::registry::{Configurer, RegistryError, TypedConfigurer};
    pub use crate::container::{global, Container};
    pub use crate::lifetime::Lifetime;
    pub use crate::module::{bind, Configuration, Module};
}
