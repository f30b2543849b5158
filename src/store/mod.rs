use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Expense, NewExpense};
use crate::storage::Storage;

/// Two-phase store lifecycle. The transition is one-way and fires exactly
/// once, when the initial load from storage completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Uninitialized,
    Initialized,
}

/// The single authoritative in-memory collection of expenses, kept in
/// sync with its storage adapter. Every mutation after initialization is
/// written through immediately; persistence failures degrade to
/// in-memory-only operation and never surface to callers.
///
/// The store performs no input validation: rejecting empty titles or
/// non-positive amounts is the job of the form and CLI boundaries.
pub(crate) struct ExpenseStore {
    storage: Storage,
    expenses: Vec<Expense>,
    lifecycle: Lifecycle,
}

impl ExpenseStore {
    /// Creates an uninitialized store. Nothing has been read from storage
    /// yet; `expenses()` is empty and mutations are not persisted.
    pub(crate) fn new(storage: Storage) -> Self {
        Self {
            storage,
            expenses: Vec::new(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Creates a store and runs the one-time load immediately.
    pub(crate) fn open(storage: Storage) -> Self {
        let mut store = Self::new(storage);
        store.init();
        store
    }

    /// Hydrates the collection from storage and marks the store
    /// initialized. Corrupt or absent stored state hydrates to an empty
    /// collection. Calling this again after the transition is a no-op.
    pub(crate) fn init(&mut self) {
        if self.lifecycle == Lifecycle::Initialized {
            return;
        }
        self.expenses = self.storage.load();
        self.lifecycle = Lifecycle::Initialized;
    }

    /// Assigns a fresh id, inserts the record, and re-sorts the collection
    /// newest-first. The sort is stable and the new record is inserted at
    /// the front, so among equal dates the most recently added comes first.
    pub(crate) fn add(&mut self, draft: NewExpense) {
        let expense = draft.into_expense(Uuid::new_v4());
        self.expenses.insert(0, expense);
        self.expenses.sort_by(|a, b| b.date.cmp(&a.date));
        self.persist();
    }

    /// Removes the record with the given id. Deleting an id that is not
    /// present is a no-op, not an error. Relative order of the survivors
    /// is preserved.
    pub(crate) fn delete(&mut self, id: Uuid) {
        self.expenses.retain(|e| e.id != id);
        self.persist();
    }

    /// Current collection, sorted descending by date.
    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all amounts; zero for an empty collection.
    pub(crate) fn total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Initialized
    }

    #[cfg(test)]
    pub(crate) fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn persist(&self) {
        if self.lifecycle == Lifecycle::Initialized {
            self.storage.save(&self.expenses);
        }
    }
}

#[cfg(test)]
mod tests;
