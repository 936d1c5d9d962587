use std::error::Error;
use std::sync::Arc;

use minioc::prelude::*;

fn main() {
    let container = Container::new();
    container.install(AppModule::new("greeter")).unwrap();

    let app = container.get_object::<App>().unwrap();
    app.run();

    // Later requests see the newest registration.
    bind::<dyn Greeter>()
        .to_component::<RussianGreeter>()
        .set_on(&container);
    container.get_object::<App>().unwrap().run();
}

struct AppModule {
    app_name: &'static str,
}

impl AppModule {
    fn new(app_name: &'static str) -> Self {
        Self { app_name }
    }
}

impl Module for AppModule {
    fn configure(
        &self,
        configurer: &dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        bind::<&'static str>()
            .to_instance(Arc::new(self.app_name))
            .set_on(configurer);

        bind::<dyn Logger>()
            .to_component::<ConsoleLogger>()
            .as_singleton()
            .set_on(configurer)?;

        bind::<dyn Greeter>()
            .to_component::<EnglishGreeter>()
            .set_on(configurer);

        bind::<dyn Thing>()
            .to_closure(|| -> Arc<dyn Thing> { Arc::new(TheThing) })
            .set_on(configurer);

        bind::<App>().to_component::<App>().set_on(configurer);

        Ok(())
    }
}

trait Logger: Send + Sync + 'static {
    fn log(&self, message: &str);
}

struct ConsoleLogger {
    app_name: Arc<&'static str>,
}

#[component(dyn Logger)]
impl ConsoleLogger {
    #[inject]
    pub fn new(app_name: Arc<&'static str>) -> Self {
        Self { app_name }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        eprintln!("[{}] {}", self.app_name, message);
    }
}

trait Greeter: Send + Sync + 'static {
    fn greet(&self);
}

struct EnglishGreeter {
    logger: Arc<dyn Logger>,
}

#[component(dyn Greeter)]
impl EnglishGreeter {
    #[inject]
    fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Greeter for EnglishGreeter {
    fn greet(&self) {
        self.logger.log("Hello World!");
    }
}

struct RussianGreeter {
    logger: Arc<dyn Logger>,
}

#[component(dyn Greeter)]
impl RussianGreeter {
    #[inject]
    fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Greeter for RussianGreeter {
    fn greet(&self) {
        self.logger.log("Privet, mir!");
    }
}

trait Thing: Send + Sync + 'static {
    fn describe(&self) -> &'static str;
}

struct TheThing;

impl Thing for TheThing {
    fn describe(&self) -> &'static str {
        "the thing"
    }
}

struct App {
    logger: Arc<dyn Logger>,
    greeter: Arc<dyn Greeter>,
    thing: Arc<dyn Thing>,
}

#[component]
impl App {
    #[inject]
    fn new(logger: Arc<dyn Logger>, greeter: Arc<dyn Greeter>, thing: Arc<dyn Thing>) -> Self {
        Self {
            logger,
            greeter,
            thing,
        }
    }

    fn run(&self) {
        self.logger.log("Greeting from minioc managed objects:");
        self.greeter.greet();
        self.logger
            .log(&format!("And the container also built {}.", self.thing.describe()));
    }
}
