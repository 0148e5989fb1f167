use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Typed handle to a registered blackboard slot.
///
/// Slots are minted by [`Blackboard::register`] and are only meaningful on
/// the blackboard that issued them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbSlot<T: 'static> {
    index: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbSlot<T> {}

impl<T: 'static> Clone for BbSlot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbSlot<T> {
    pub fn index(self) -> usize {
        self.index
    }
}

/// Per-agent scratch storage with named, typed slots.
///
/// Decision components register the slots they share by name during
/// construction. Registering the same name with the same type is idempotent
/// and returns the same slot; reusing a name with a different type panics,
/// since two components would silently alias unrelated data.
#[derive(Default)]
pub struct Blackboard {
    names: BTreeMap<String, (TypeId, usize)>,
    slots: Vec<Option<Box<dyn Any>>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or re-resolves) the slot for `name` with value type `T`.
    pub fn register<T: 'static>(&mut self, name: &str) -> BbSlot<T> {
        if let Some(&(tid, index)) = self.names.get(name) {
            assert!(
                tid == TypeId::of::<T>(),
                "blackboard slot {name:?} already registered with a different type"
            );
            return BbSlot {
                index,
                _phantom: PhantomData,
            };
        }
        let index = self.slots.len();
        self.slots.push(None);
        self.names.insert(name.to_string(), (TypeId::of::<T>(), index));
        BbSlot {
            index,
            _phantom: PhantomData,
        }
    }

    /// Resolves the slot for `name` without registering it.
    ///
    /// Returns `None` when the name is unknown or was registered with a
    /// different type. Intended for tooling that must not disturb the slot
    /// table it inspects.
    pub fn lookup<T: 'static>(&self, name: &str) -> Option<BbSlot<T>> {
        let &(tid, index) = self.names.get(name)?;
        if tid != TypeId::of::<T>() {
            return None;
        }
        Some(BbSlot {
            index,
            _phantom: PhantomData,
        })
    }

    /// Drops every stored value. Registered slots stay valid.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    pub fn contains<T: 'static>(&self, slot: BbSlot<T>) -> bool {
        self.slots
            .get(slot.index)
            .map(|v| v.is_some())
            .unwrap_or(false)
    }

    pub fn set<T: 'static>(&mut self, slot: BbSlot<T>, value: T) {
        self.slots[slot.index] = Some(Box::new(value));
    }

    pub fn get<T: 'static>(&self, slot: BbSlot<T>) -> Option<&T> {
        let value = self.slots.get(slot.index)?.as_ref()?;
        value.downcast_ref::<T>().or_else(|| {
            panic!(
                "blackboard type mismatch for slot index={} (stored type differs from requested)",
                slot.index
            )
        })
    }

    pub fn get_mut<T: 'static>(&mut self, slot: BbSlot<T>) -> Option<&mut T> {
        let value = self.slots.get_mut(slot.index)?.as_mut()?;
        value.downcast_mut::<T>().or_else(|| {
            panic!(
                "blackboard type mismatch for slot index={} (stored type differs from requested)",
                slot.index
            )
        })
    }

    pub fn remove<T: 'static>(&mut self, slot: BbSlot<T>) -> Option<T> {
        let value = self.slots.get_mut(slot.index)?.take()?;
        value.downcast::<T>().map(|b| *b).ok().or_else(|| {
            panic!(
                "blackboard type mismatch for slot index={} (stored type differs from requested)",
                slot.index
            )
        })
    }
}
