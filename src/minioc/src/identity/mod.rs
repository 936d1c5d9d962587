//! Process-wide type identities.
//!
//! Every type `T` that is ever registered in or requested from a container
//! is associated with a [`TypeIdentity`] on first use. The identity stays the
//! same for the rest of the process, no matter which container asks for it.

mod allocator;

use std::fmt::{Display, Formatter, Result as FmtResult};

pub(crate) use allocator::IdentityAllocator;

/// An opaque token standing for one logical type.
///
/// Two identities compare equal if and only if they were obtained for the
/// same type. The numeric [`value`] follows the order in which types were
/// first seen and carries no other meaning.
///
/// [`value`]: TypeIdentity::value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeIdentity {
    value: u64,
    type_name: &'static str,
}

impl TypeIdentity {
    pub(crate) fn new(value: u64, type_name: &'static str) -> Self {
        Self { value, type_name }
    }

    /// Returns the integer assigned to the type.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the name of the type, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Display for TypeIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}#{}", self.type_name, self.value)
    }
}

/// Returns the identity of `T`, allocating one if `T` has never been seen.
///
/// # Examples
///
/// ```rust
/// # use minioc::identity;
/// trait Processor {}
///
/// assert_eq!(identity::of::<dyn Processor>(), identity::of::<dyn Processor>());
/// assert_ne!(identity::of::<dyn Processor>(), identity::of::<String>());
/// ```
pub fn of<T>() -> TypeIdentity
where
    T: ?Sized + 'static,
{
    IdentityAllocator::global().identity_of::<T>()
}
