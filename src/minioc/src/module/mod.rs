pub mod dsl;

use std::any;
use std::error::Error;

use crate::container::registry::{Configurer, RegistryError};

pub use dsl::bind;

/// A group of registrations applied together.
///
/// Implement [`Module::configure`] and install the module with
/// [`Container::install`]. Several modules can be combined into a
/// [`Configuration`].
///
/// [`Container::install`]: crate::container::Container::install
pub trait Module: 'static {
    /// Runs [`Module::configure`] and attributes a failure to this module.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Module`] wrapping the error returned by
    /// [`Module::configure`].
    fn setup(&self, configurer: &dyn Configurer) -> Result<(), RegistryError> {
        self.configure(configurer)
            .map_err(|source| RegistryError::Module {
                module: any::type_name::<Self>(),
                source,
            })
    }

    /// Registers providers on `configurer`.
    ///
    /// # Errors
    ///
    /// Returns whatever error prevents the module from finishing, e.g. an
    /// eager singleton whose dependencies are not registered yet.
    fn configure(
        &self,
        configurer: &dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// An ordered list of [`Module`]s.
///
/// Modules are set up in the order they were added, so a module may rely on
/// registrations made by the ones before it. Every module is set up even if
/// an earlier one fails, and all failures are reported together.
#[derive(Default)]
pub struct Configuration {
    modules: Vec<Box<dyn Module>>,
}

impl Configuration {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with<M: Module>(mut self, module: M) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn compose(mut self, mut other: Configuration) -> Self {
        self.modules.append(&mut other.modules);
        self
    }
}

impl Module for Configuration {
    fn setup(&self, configurer: &dyn Configurer) -> Result<(), RegistryError> {
        let mut errors: Vec<_> = self
            .modules
            .iter()
            .filter_map(|module| module.setup(configurer).err())
            .collect();

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(RegistryError::Aggregated { errors }),
        }
    }

    fn configure(
        &self,
        configurer: &dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.setup(configurer).map_err(Into::into)
    }
}
