use std::fmt::{Display, Formatter, Result as FmtResult};

/// How long an object handed out by a container lives relative to the
/// registration that produced it.
///
/// A singleton registration hands out the same shared object on every
/// request until it is replaced. A transient registration builds a new
/// object on every request; the object then lives for as long as its callers
/// keep it. Either way the container never destroys an object that is still
/// referenced elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    Singleton,
    Transient,
}

impl Lifetime {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Singleton => "Singleton",
            Self::Transient => "Transient",
        }
    }
}

impl Display for Lifetime {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_str())
    }
}

/// Marker selecting a singleton registration in the binding DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Singleton;

/// Marker selecting a transient registration in the binding DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transient;
