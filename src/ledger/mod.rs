//! The ordered list of expense rows and the delete-confirmation flow.

use crate::income::sanitize;
use crate::models::{Category, Expense, ExpenseId};

/// Default cap on the raw amount string, in characters.
pub const DEFAULT_AMOUNT_MAX_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Editing,
    PendingDelete,
}

type Listener = Box<dyn FnMut(&[Expense])>;

pub struct ExpenseLedger {
    entries: Vec<Expense>,
    /// At most one row awaits delete confirmation at a time.
    pending_delete: Option<ExpenseId>,
    amount_max_len: usize,
    last_id: i64,
    listeners: Vec<Listener>,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT_MAX_LEN)
    }
}

impl std::fmt::Debug for ExpenseLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseLedger")
            .field("entries", &self.entries)
            .field("pending_delete", &self.pending_delete)
            .field("amount_max_len", &self.amount_max_len)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ExpenseLedger {
    pub fn new(amount_max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            pending_delete: None,
            amount_max_len: amount_max_len.max(1),
            last_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a callback that receives the full collection after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Expense]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn amount_max_len(&self) -> usize {
        self.amount_max_len
    }

    pub fn pending_delete(&self) -> Option<ExpenseId> {
        self.pending_delete
    }

    /// `None` for ids not in the ledger.
    pub fn state_of(&self, id: ExpenseId) -> Option<EntryState> {
        self.get(id)?;
        if self.pending_delete == Some(id) {
            Some(EntryState::PendingDelete)
        } else {
            Some(EntryState::Editing)
        }
    }

    /// Append a blank row in the editing state.
    pub fn add(&mut self) -> ExpenseId {
        let id = self.next_id();
        self.entries.push(Expense::new(id));
        tracing::debug!(%id, "expense added");
        self.emit();
        id
    }

    pub fn set_title(&mut self, id: ExpenseId, title: &str) -> bool {
        let Some(entry) = self.editable_mut(id) else {
            return false;
        };
        if entry.title == title {
            return false;
        }
        entry.title = title.to_string();
        self.emit();
        true
    }

    /// Filter to digits and dots; reject when the result exceeds the length cap.
    pub fn set_amount(&mut self, id: ExpenseId, raw: &str) -> bool {
        let value = sanitize(raw);
        if value.chars().count() > self.amount_max_len {
            tracing::debug!(%id, raw, "amount keystroke rejected");
            return false;
        }
        let Some(entry) = self.editable_mut(id) else {
            return false;
        };
        if entry.amount == value {
            return false;
        }
        entry.amount = value;
        self.emit();
        true
    }

    pub fn set_category(&mut self, id: ExpenseId, category: Option<Category>) -> bool {
        let Some(entry) = self.editable_mut(id) else {
            return false;
        };
        if entry.category == category {
            return false;
        }
        entry.category = category;
        self.emit();
        true
    }

    /// Ask for confirmation before deleting `id`. Any other pending request
    /// is dropped, returning that row to editing.
    pub fn request_delete(&mut self, id: ExpenseId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if let Some(previous) = self.pending_delete.replace(id) {
            if previous != id {
                tracing::debug!(%previous, "delete request superseded");
            }
        }
        true
    }

    /// Remove the pending row permanently. Returns the removed entry.
    pub fn confirm_delete(&mut self) -> Option<Expense> {
        let id = self.pending_delete.take()?;
        let idx = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(idx);
        tracing::info!(%id, title = %removed.title, "expense deleted");
        self.emit();
        Some(removed)
    }

    /// Return the pending row to editing with its fields intact.
    pub fn cancel_delete(&mut self) -> Option<ExpenseId> {
        self.pending_delete.take()
    }

    fn editable_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        if self.pending_delete == Some(id) {
            return None;
        }
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Creation-time millis, bumped so ids never repeat within this ledger.
    fn next_id(&mut self) -> ExpenseId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = if now > self.last_id {
            now
        } else {
            self.last_id + 1
        };
        ExpenseId::from_millis(self.last_id)
    }

    fn emit(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.entries);
        }
    }
}
