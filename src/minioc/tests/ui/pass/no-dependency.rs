use std::sync::Arc;

use minioc::prelude::*;

trait Thing: Send + Sync {
    fn describe(&self) -> &'static str;
}

struct TheThing;

#[component(dyn Thing)]
impl TheThing {
    #[inject]
    fn new() -> Self {
        Self
    }
}

impl Thing for TheThing {
    fn describe(&self) -> &'static str {
        "A Thing"
    }
}

fn main() {
    let container = Container::new();
    container.register_singleton::<dyn Thing, TheThing>().unwrap();

    let first = container.get_object::<dyn Thing>().unwrap();
    let second = container.get_object::<dyn Thing>().unwrap();
    assert_eq!(first.describe(), "A Thing");
    assert!(Arc::ptr_eq(&first, &second));
}
