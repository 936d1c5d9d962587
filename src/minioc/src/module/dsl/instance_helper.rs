use std::sync::Arc;

use crate::container::registry::{Configurer, TypedConfigurer};

pub struct InstanceBinding<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance: Arc<T>,
}

impl<T> InstanceBinding<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    pub(super) fn new(instance: Arc<T>) -> Self {
        Self { instance }
    }

    pub fn set_on(self, configurer: &dyn Configurer) {
        configurer.register_instance(self.instance);
    }
}
