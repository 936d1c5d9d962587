use std::sync::Arc;

use minioc::prelude::*;

trait Engine: Send + Sync {
    fn power(&self) -> u32;
}

struct V8 {
    cylinders: Arc<u32>,
}

#[component(dyn Engine)]
impl V8 {
    #[inject]
    fn new(cylinders: Arc<u32>) -> Self {
        Self { cylinders }
    }
}

impl Engine for V8 {
    fn power(&self) -> u32 {
        *self.cylinders * 50
    }
}

struct Car {
    engine: Arc<dyn Engine>,
    model: Arc<&'static str>,
}

#[component]
impl Car {
    #[inject]
    fn create(engine: Arc<dyn Engine>, model: Arc<&'static str>) -> Self {
        Self { engine, model }
    }
}

fn main() {
    let container = Container::new();
    container.register_instance(Arc::new(8u32));
    container.register_instance(Arc::new("coupe"));
    container.register_factory::<dyn Engine, V8>();
    container.register_factory::<Car, Car>();

    let car = container.get_object::<Car>().unwrap();
    assert_eq!(car.engine.power(), 400);
    assert_eq!(*car.model, "coupe");
}
