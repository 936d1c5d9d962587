use once_cell::sync::Lazy;

use crate::container::Container;

static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::new);

/// Returns the process-wide container, creating it on first access.
///
/// The global container behaves exactly like any other [`Container`]; it is
/// merely reachable from anywhere without passing a handle around.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use minioc::prelude::*;
///
/// global().register_instance(Arc::new(String::from("Hello from global!")));
/// let greeting = global().get_object::<String>().unwrap();
/// assert_eq!(greeting.as_str(), "Hello from global!");
/// ```
pub fn global() -> &'static Container {
    &GLOBAL_CONTAINER
}
