use std::collections::HashMap;
use std::sync::Arc;

use crate::identity::TypeIdentity;
use crate::lifetime::Lifetime;
use crate::provider::Provider;

#[derive(Debug, Default)]
pub struct ProviderMap {
    providers: HashMap<TypeIdentity, ProviderEntry>,
}

impl ProviderMap {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Inserts `entry` under `identity`, returning the entry it replaced.
    pub fn insert(&mut self, identity: TypeIdentity, entry: ProviderEntry) -> Option<ProviderEntry> {
        self.providers.insert(identity, entry)
    }

    pub fn get(&self, identity: TypeIdentity) -> Option<&ProviderEntry> {
        self.providers.get(&identity)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ProviderEntry {
    provider: Arc<dyn Provider>,
    lifetime: Lifetime,
}

impl ProviderEntry {
    pub fn new(provider: Arc<dyn Provider>, lifetime: Lifetime) -> Self {
        Self { provider, lifetime }
    }

    pub fn provider(&self) -> Arc<dyn Provider> {
        Arc::clone(&self.provider)
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}
