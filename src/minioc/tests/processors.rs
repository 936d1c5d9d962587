use std::sync::Arc;

use minioc::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessorType {
    X86,
    X64,
}

impl ProcessorType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
        }
    }
}

trait Processor: Send + Sync {
    fn info(&self) -> String;
}

struct IntelProcessor {
    speed: f64,
    kind: ProcessorType,
    version: String,
}

impl Processor for IntelProcessor {
    fn info(&self) -> String {
        format!(
            "Processor: Intel {}, Type: {}, Speed: {:.6} GHz",
            self.version,
            self.kind.as_str(),
            self.speed
        )
    }
}

struct AmdProcessor {
    speed: f64,
    kind: ProcessorType,
    version: String,
}

impl Processor for AmdProcessor {
    fn info(&self) -> String {
        format!(
            "Processor: AMD {}, Type: {}, Speed: {:.6} GHz",
            self.version,
            self.kind.as_str(),
            self.speed
        )
    }
}

struct Computer {
    processor: Arc<dyn Processor>,
}

#[component]
impl Computer {
    #[inject]
    fn new(processor: Arc<dyn Processor>) -> Self {
        Self { processor }
    }

    fn describe(&self) -> String {
        self.processor.info()
    }
}

fn intel() -> Arc<dyn Processor> {
    Arc::new(IntelProcessor {
        speed: 2.5,
        kind: ProcessorType::X64,
        version: String::from("i7"),
    })
}

fn amd() -> Arc<dyn Processor> {
    Arc::new(AmdProcessor {
        speed: 3.0,
        kind: ProcessorType::X86,
        version: String::from("Ryzen"),
    })
}

#[test]
fn processor_replacement_applies_to_later_computers() {
    let container = Container::new();
    container.register_functor(intel);
    container.register_factory::<Computer, Computer>();

    let first = container.get_object::<Computer>().unwrap();
    assert_eq!(
        first.describe(),
        "Processor: Intel i7, Type: x64, Speed: 2.500000 GHz"
    );

    let second = container.get_object::<Computer>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first.processor, &second.processor));

    container.register_functor(amd);

    let third = container.get_object::<Computer>().unwrap();
    assert_eq!(
        third.describe(),
        "Processor: AMD Ryzen, Type: x86, Speed: 3.000000 GHz"
    );
    assert_eq!(
        first.describe(),
        "Processor: Intel i7, Type: x64, Speed: 2.500000 GHz"
    );
}

#[test]
fn processor_registered_as_instance_is_shared() {
    let container = Container::new();
    container.register_instance(intel());
    container.register_factory::<Computer, Computer>();

    let first = container.get_object::<Computer>().unwrap();
    let second = container.get_object::<Computer>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.processor, &second.processor));
}
