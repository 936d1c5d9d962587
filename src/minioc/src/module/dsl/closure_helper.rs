use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::registry::{Configurer, TypedConfigurer};
use crate::provider::closure::Closure;

pub struct ClosureBinding<T, C, D>
where
    T: ?Sized + Send + Sync + 'static,
    C: Closure<T, D>,
    D: 'static,
{
    closure: C,
    _marker: PhantomData<fn() -> (Arc<T>, D)>,
}

impl<T, C, D> ClosureBinding<T, C, D>
where
    T: ?Sized + Send + Sync + 'static,
    C: Closure<T, D>,
    D: 'static,
{
    pub(super) fn new(closure: C) -> Self {
        Self {
            closure,
            _marker: PhantomData,
        }
    }

    pub fn set_on(self, configurer: &dyn Configurer) {
        configurer.register_functor::<T, D, C>(self.closure);
    }
}
