use uuid::Uuid;

use super::form::AddForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Adding,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Normal => "NORMAL",
            Self::Adding => "ADD",
            Self::Confirm => "CONFIRM",
        };
        write!(f, "{label}")
    }
}

/// UI-side state only. The expense data itself lives in the store; the
/// app never holds a copy of it.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) visible_rows: usize,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) form: AddForm,
    pub(crate) confirm_message: String,
    pub(crate) pending_delete: Option<(Uuid, String)>,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            expense_index: 0,
            expense_scroll: 0,
            visible_rows: 10,
            status_message: String::new(),
            show_help: false,
            form: AddForm::new(),
            confirm_message: String::new(),
            pending_delete: None,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Keeps the cursor inside the list after a deletion shrank it.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        if self.expense_index > 0 && self.expense_index >= len {
            self.expense_index = len.saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }
}
