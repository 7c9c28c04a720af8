//! Append-only arena tables with serialized index issuance.
//!
//! An [`Arena`] is a growable ordered table of fixed-layout slots addressed
//! by position. Slots are never removed or reused; an index, once issued,
//! names the same slot for the life of the process.
//!
//! ## Allocation Serialization
//!
//! Allocation requests may arrive from any number of threads, and every
//! index must be issued exactly once, in order, with no gaps. One dedicated
//! supplier thread per arena owns the append step: it eagerly pushes the
//! next default-valued slot and then offers that slot's index through a
//! rendezvous channel (`sync_channel(0)`: producer and consumer each block
//! until both are ready, queue depth exactly one). A caller's allocation
//! request takes whatever index is currently on offer; only then does the
//! supplier build and offer the next one.
//!
//! ```text
//! ┌──────────────────┐  push slot, offer index   ┌──────────────────┐
//! │  supplier thread │ ────── rendezvous ──────▶ │  allocate() call │
//! │  (sole appender) │ ◀───── next wanted ────── │  (any thread)    │
//! └──────────────────┘                           └──────────────────┘
//! ```
//!
//! The table therefore always holds exactly one pre-built slot that nobody
//! has claimed yet. That slot is the cost of the scheme, and it is kept:
//! issuance stays strictly ordered without any index arithmetic shared
//! between claimants.
//!
//! ## Slot Ownership
//!
//! After `allocate` returns an index, the claiming caller is the sole
//! mutator of that slot's fields. The `RwLock` around the table makes slot
//! access data-race-free; the single-consumer handoff makes two callers
//! claiming one index structurally impossible.

use mote_core::MoteError;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread;

/// An append-only table of `T` slots plus its allocation supplier.
///
/// Slots are default-initialized at creation and handed out one index at a
/// time, in order. Allocation never fails below the index ceiling; at the
/// ceiling it aborts, because indices past it would alias tag bits.
pub struct Arena<T> {
    /// Arena name for thread naming and diagnostics.
    name: &'static str,
    /// Hard ceiling on the slot count (exclusive upper bound on indices).
    limit: usize,
    /// The slot table. The supplier is the only appender.
    slots: Arc<RwLock<Vec<T>>>,
    /// Consumer side of the rendezvous handoff, serialized across callers.
    handoff: Mutex<Receiver<usize>>,
}

impl<T: Default + Send + Sync + 'static> Arena<T> {
    /// Create an empty arena whose indices stay below `limit`.
    #[must_use]
    pub fn new(name: &'static str, limit: usize) -> Self {
        Self::with_reserved(name, limit, 0)
    }

    /// Create an arena with `reserved` default-valued slots pre-installed.
    ///
    /// Reserved slots exist from the start and are never issued by
    /// `allocate`; the pair arena reserves slot 0 for nil this way.
    ///
    /// # Panics
    ///
    /// Panics if `reserved >= limit` or if the supplier thread cannot be
    /// spawned.
    #[must_use]
    pub fn with_reserved(name: &'static str, limit: usize, reserved: usize) -> Self {
        assert!(
            reserved < limit,
            "{name} arena cannot reserve its whole index space"
        );

        let mut table = Vec::with_capacity(reserved + 1);
        table.resize_with(reserved, T::default);
        let slots = Arc::new(RwLock::new(table));

        let (tx, rx) = sync_channel(0);
        let supplier_slots = Arc::clone(&slots);
        thread::Builder::new()
            .name(format!("mote-{name}"))
            .spawn(move || supply(name, limit, &supplier_slots, &tx))
            .expect("failed to spawn arena supplier thread");

        Self {
            name,
            limit,
            slots,
            handoff: Mutex::new(rx),
        }
    }

    /// Claim the next never-before-issued index.
    ///
    /// Blocks until the supplier's offered slot is ready, the only
    /// suspension point in the runtime. The returned slot is freshly
    /// default-valued and owned by the caller from here on.
    ///
    /// # Panics
    ///
    /// Aborts with `ArenaExhausted` once the index ceiling is reached.
    pub fn allocate(&self) -> usize {
        let claimed = self.handoff.lock().recv();
        match claimed {
            Ok(index) => index,
            Err(_) => panic!("{}", MoteError::exhausted(self.name, self.limit)),
        }
    }

    /// Read a slot under the table lock.
    pub fn with<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slots.read()[index])
    }

    /// Mutate a slot under the table lock.
    ///
    /// Callers may only mutate slots they claimed via [`Arena::allocate`].
    pub fn with_mut<R>(&self, index: usize, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.slots.write()[index])
    }

    /// Current table size, including reserved slots and the supplier's
    /// one pre-built unclaimed slot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Check whether the table holds no slots yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// The exclusive upper bound on indices this arena will ever issue.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

/// Supplier loop: append one default slot, offer its index, repeat.
///
/// Exits when the arena is dropped (handoff disconnects) or when the table
/// reaches the index ceiling, after which pending and future allocation
/// requests abort.
fn supply<T: Default>(
    name: &'static str,
    limit: usize,
    slots: &Arc<RwLock<Vec<T>>>,
    tx: &SyncSender<usize>,
) {
    loop {
        let index = {
            let mut table = slots.write();
            if table.len() == limit {
                log::error!("{name} arena reached its index ceiling of {limit}");
                return;
            }
            table.push(T::default());
            table.len() - 1
        };
        log::trace!("{name} arena built slot {index}");
        if tx.send(index).is_err() {
            // Arena dropped; the last pre-built slot simply goes unused.
            return;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
