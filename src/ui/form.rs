//! Form state machine and submission validation.

use thiserror::Error;

use crate::{
    item::{ItemDraft, ItemRecord},
    types::ItemId,
};

/// Required form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Item name.
    Name,
    /// Employee code.
    EmpCode,
    /// Taluk name.
    TalukName,
}

impl Field {
    /// Message shown when this field is empty on submit.
    pub fn message(&self) -> &'static str {
        match self {
            Field::Name => "please enter a name for the item",
            Field::EmpCode => "please enter an employee code",
            Field::TalukName => "please select a taluk name",
        }
    }
}

/// Rejected submission: a required field is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .0.message())]
pub struct ValidationError(
    /// The first empty required field.
    pub Field,
);

/// Raw, untrimmed field values as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    /// Name field contents.
    pub name: String,
    /// Employee code field contents.
    pub emp_code: String,
    /// Taluk name field contents.
    pub taluk_name: String,
    /// Description field contents.
    pub description: String,
}

impl FormInput {
    /// Trims every field and checks the required ones, in form order.
    ///
    /// Description is never required.
    pub fn validate(&self) -> Result<ItemDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError(Field::Name));
        }
        let emp_code = self.emp_code.trim();
        if emp_code.is_empty() {
            return Err(ValidationError(Field::EmpCode));
        }
        let taluk_name = self.taluk_name.trim();
        if taluk_name.is_empty() {
            return Err(ValidationError(Field::TalukName));
        }

        Ok(ItemDraft {
            name: name.to_string(),
            emp_code: emp_code.to_string(),
            taluk_name: taluk_name.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Which submission path the form is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// New-record entry, the initial state.
    #[default]
    Create,
    /// Rewriting the record with this id.
    Edit(ItemId),
}

/// Form fields plus the current mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Current submission mode.
    pub mode: FormMode,
    /// Editable field contents.
    pub fields: FormInput,
}

impl FormState {
    /// Populates the fields from `rec` and enters edit mode.
    pub fn load(&mut self, rec: &ItemRecord) {
        self.mode = FormMode::Edit(rec.id);
        self.fields = FormInput {
            name: rec.name.clone(),
            emp_code: rec.emp_code.clone(),
            taluk_name: rec.taluk_name.clone(),
            description: rec.description.clone(),
        };
    }

    /// Clears the fields and returns to create mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Title shown above the form in the current mode.
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Item",
            FormMode::Edit(_) => "Edit Item",
        }
    }

    /// Submit-button label in the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Item",
            FormMode::Edit(_) => "Update Item",
        }
    }
}
