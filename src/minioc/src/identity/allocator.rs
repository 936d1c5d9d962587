use std::any::{self, TypeId};
use std::collections::BTreeMap;

use parking_lot::{const_mutex, Mutex};

use crate::identity::TypeIdentity;

/// The first value handed out. Any non-zero seed works.
const FIRST_IDENTITY: u64 = 115_094_801;

static GLOBAL_ALLOCATOR: IdentityAllocator = IdentityAllocator::new();

pub struct IdentityAllocator {
    table: Mutex<IdentityTable>,
}

impl IdentityAllocator {
    pub const fn new() -> Self {
        Self {
            table: const_mutex(IdentityTable::new()),
        }
    }

    pub fn global() -> &'static Self {
        &GLOBAL_ALLOCATOR
    }

    pub fn identity_of<T>(&self) -> TypeIdentity
    where
        T: ?Sized + 'static,
    {
        let value = self.table.lock().value_of(TypeId::of::<T>());
        TypeIdentity::new(value, any::type_name::<T>())
    }
}

struct IdentityTable {
    next: u64,
    assigned: BTreeMap<TypeId, u64>,
}

impl IdentityTable {
    const fn new() -> Self {
        Self {
            next: FIRST_IDENTITY,
            assigned: BTreeMap::new(),
        }
    }

    fn value_of(&mut self, type_id: TypeId) -> u64 {
        if let Some(&value) = self.assigned.get(&type_id) {
            return value;
        }
        let value = self.next;
        self.next += 1;
        self.assigned.insert(type_id, value);
        value
    }
}
