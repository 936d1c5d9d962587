use std::sync::Arc;

use minioc::prelude::*;

trait Hello: Send + Sync {
    fn hello(&self) -> String;
}

trait Named: Send + Sync {
    fn name(&self) -> &str;
}

struct Greeting {
    name: Arc<String>,
}

#[component(dyn Hello, dyn Named)]
impl Greeting {
    #[inject]
    pub fn new(name: Arc<String>) -> Self {
        Self { name }
    }

    fn unrelated(&self) -> usize {
        self.name.len()
    }
}

impl Hello for Greeting {
    fn hello(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

impl Named for Greeting {
    fn name(&self) -> &str {
        &self.name
    }
}

fn main() {
    let container = Container::new();
    container.register_instance(Arc::new(String::from("world")));
    container.register_factory::<dyn Hello, Greeting>();
    container.register_factory::<dyn Named, Greeting>();
    container.register_factory::<Greeting, Greeting>();

    assert_eq!(container.get_object::<dyn Hello>().unwrap().hello(), "Hello, world!");
    assert_eq!(container.get_object::<dyn Named>().unwrap().name(), "world");
    assert_eq!(container.get_object::<Greeting>().unwrap().unrelated(), 5);
}
