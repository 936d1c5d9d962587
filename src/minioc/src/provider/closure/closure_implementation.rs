use std::sync::Arc;

use crate::container::injector::{Injector, InjectorError, TypedInjector};
use crate::provider::closure::Closure;

impl<F, T> Closure<T, ()> for F
where
    F: Fn() -> Arc<T> + Send + Sync + 'static,
    T: ?Sized + Send + Sync + 'static,
{
    fn run(&self, _injector: &dyn Injector) -> Result<Arc<T>, InjectorError> {
        Ok(self())
    }
}

macro_rules! for_all_tuples {
    ($implementation:ident) => {
        $implementation!(D1);
        $implementation!(D1, D2);
        $implementation!(D1, D2, D3);
        $implementation!(D1, D2, D3, D4);
        $implementation!(D1, D2, D3, D4, D5);
        $implementation!(D1, D2, D3, D4, D5, D6);
        $implementation!(D1, D2, D3, D4, D5, D6, D7);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15);
        $implementation!(D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15, D16);
    };
}

macro_rules! impl_closure {
    ($($dep:ident),*) => {
        #[allow(non_snake_case)]
        impl<F, T, $($dep,)*> Closure<T, ($(Arc<$dep>,)*)> for F
        where
            F: Fn($(Arc<$dep>,)*) -> Arc<T> + Send + Sync + 'static,
            T: ?Sized + Send + Sync + 'static,
            $($dep: ?Sized + Send + Sync + 'static,)*
        {
            fn run(&self, injector: &dyn Injector) -> Result<Arc<T>, InjectorError> {
                $(
                    let $dep = injector.get::<$dep>()?;
                )*
                Ok(self($($dep,)*))
            }
        }
    };
}

for_all_tuples!(impl_closure);
