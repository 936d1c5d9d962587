use std::sync::Arc;

use minioc::prelude::*;

struct ReturnsSelf {
    value: Arc<i32>,
}

#[component]
impl ReturnsSelf {
    #[inject]
    fn new(value: Arc<i32>) -> Self {
        Self { value }
    }
}

struct ReturnsSelfType {
    value: Arc<i32>,
}

#[component]
impl ReturnsSelfType {
    #[inject]
    fn new(value: Arc<i32>) -> ReturnsSelfType {
        ReturnsSelfType { value }
    }
}

fn main() {
    let container = Container::new();
    container.register_instance(Arc::new(3i32));
    container.register_factory::<ReturnsSelf, ReturnsSelf>();
    container.register_factory::<ReturnsSelfType, ReturnsSelfType>();

    assert_eq!(*container.get_object::<ReturnsSelf>().unwrap().value, 3);
    assert_eq!(*container.get_object::<ReturnsSelfType>().unwrap().value, 3);
}
