use std::sync::Arc;

use parking_lot::RwLock;
use snafu::prelude::*;
use tracing::{debug, trace};

use crate::container::injector::{Injector, InjectorError, NotRegisteredSnafu};
use crate::container::registry::{ProviderEntry, ProviderMap, Registration};
use crate::container::Managed;
use crate::identity::TypeIdentity;
use crate::lifetime::Lifetime;
use crate::provider::Provider;

pub struct ContainerCore {
    providers: RwLock<ProviderMap>,
}

impl ContainerCore {
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(ProviderMap::new()),
        }
    }

    pub fn register(&self, registration: Registration) {
        let (identity, entry) = registration.into_parts();
        let lifetime = entry.lifetime();
        let replaced = self.providers.write().insert(identity, entry).is_some();
        debug!(%identity, %lifetime, replaced, "registered provider");
    }

    pub fn lifetime_of(&self, identity: TypeIdentity) -> Option<Lifetime> {
        self.providers.read().get(identity).map(ProviderEntry::lifetime)
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }

    fn get_object(&self, identity: TypeIdentity) -> Result<Box<dyn Managed>, InjectorError> {
        trace!(%identity, "resolving object");
        // The lock must not be held while the provider runs, since providers
        // resolve their own dependencies through `self`.
        let provider = self.try_get_provider(identity)?;
        provider.dyn_provide(self)
    }

    fn try_get_provider(&self, identity: TypeIdentity) -> Result<Arc<dyn Provider>, InjectorError> {
        let provider = self.providers.read().get(identity).map(ProviderEntry::provider);
        if provider.is_none() {
            debug!(%identity, "no provider registered");
        }
        provider.context(NotRegisteredSnafu { identity })
    }
}

impl Injector for ContainerCore {
    fn dyn_get(&self, identity: TypeIdentity) -> Result<Box<dyn Managed>, InjectorError> {
        self.get_object(identity)
    }
}
