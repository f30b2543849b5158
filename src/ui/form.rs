use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Category, NewExpense};

// Validation lives here, at the input boundary. The store accepts
// whatever it is given.

pub(crate) fn validate_title(input: &str) -> Result<String, &'static str> {
    let title = input.trim();
    if title.chars().count() < 2 {
        return Err("Min 2 chars");
    }
    Ok(title.to_string())
}

pub(crate) fn validate_amount(input: &str) -> Result<Decimal, &'static str> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| "Not a number")?;
    if amount <= Decimal::ZERO {
        return Err("Must be > 0");
    }
    Ok(amount)
}

pub(crate) fn parse_date(input: &str) -> Result<DateTime<Utc>, &'static str> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| "Use YYYY-MM-DD")?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or("Use YYYY-MM-DD")?;
    Ok(midnight.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Amount,
    Category,
    Date,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Title, Self::Amount, Self::Category, Self::Date]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }
}

/// The add-expense form: raw field text plus per-field validation errors.
/// Submitting a valid form yields the candidate record to hand the store.
#[derive(Debug)]
pub(crate) struct AddForm {
    pub(crate) title: String,
    pub(crate) amount: String,
    pub(crate) category_index: usize,
    pub(crate) date: String,
    pub(crate) focused: FormField,
    pub(crate) title_error: Option<&'static str>,
    pub(crate) amount_error: Option<&'static str>,
    pub(crate) date_error: Option<&'static str>,
}

impl AddForm {
    pub(crate) fn new() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category_index: 0,
            date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            focused: FormField::Title,
            title_error: None,
            amount_error: None,
            date_error: None,
        }
    }

    /// Clears inputs back to defaults, date preset to today.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn category(&self) -> Category {
        Category::all()
            .get(self.category_index)
            .copied()
            .unwrap_or(Category::Other)
    }

    pub(crate) fn focus_next(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(idx + 1) % fields.len()];
    }

    pub(crate) fn focus_prev(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[if idx == 0 { fields.len() - 1 } else { idx - 1 }];
    }

    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let len = Category::all().len();
        self.category_index = if delta > 0 {
            (self.category_index + 1) % len
        } else if self.category_index == 0 {
            len - 1
        } else {
            self.category_index - 1
        };
    }

    /// Routes a typed character to the focused field. The category field
    /// is cycled, not typed into.
    pub(crate) fn input(&mut self, c: char) {
        match self.focused {
            FormField::Title => self.title.push(c),
            FormField::Amount => self.amount.push(c),
            FormField::Date => self.date.push(c),
            FormField::Category => {}
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.focused {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Date => {
                self.date.pop();
            }
            FormField::Category => {}
        }
    }

    /// Validates all fields. On success returns the candidate record and
    /// resets the form; on failure records per-field errors and returns
    /// `None` so they can be rendered inline.
    pub(crate) fn submit(&mut self) -> Option<NewExpense> {
        let title = validate_title(&self.title);
        let amount = validate_amount(&self.amount);
        let date = parse_date(&self.date);

        self.title_error = title.as_ref().err().copied();
        self.amount_error = amount.as_ref().err().copied();
        self.date_error = date.as_ref().err().copied();

        match (title, amount, date) {
            (Ok(title), Ok(amount), Ok(date)) => {
                let draft = NewExpense {
                    title,
                    amount,
                    category: self.category(),
                    date,
                };
                self.reset();
                Some(draft)
            }
            _ => None,
        }
    }

    pub(crate) fn error_for(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Title => self.title_error,
            FormField::Amount => self.amount_error,
            FormField::Date => self.date_error,
            FormField::Category => None,
        }
    }

    pub(crate) fn text_for(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
            FormField::Category => self.category().as_str(),
        }
    }
}
