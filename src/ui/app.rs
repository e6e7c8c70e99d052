//! Synchronizer applying user actions to the store and keeping the table
//! projection current.

use thiserror::Error;

use crate::{
    export::ExportError,
    item::now_ms,
    store::{ItemStore, StoreError},
    types::ItemId,
};

use super::{
    events::Notice,
    form::{FormInput, FormMode, FormState, ValidationError},
    render::TableView,
};

/// Errors surfaced by user actions.
///
/// Every variant is terminal to the action, never to the widget: the store,
/// form, and view stay consistent and usable afterwards.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was empty; the form keeps its contents for
    /// correction and nothing is persisted.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The store rejected the mutation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// An export was requested but could not run.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    /// No stored record has this id.
    #[error("no item with id {0}")]
    MissingItem(ItemId),
}

/// Result alias for user actions.
pub type AppResult<T> = Result<T, AppError>;

/// Record-management widget core: a two-mode form plus a table projection
/// over an injected store.
///
/// Every action is synchronous and runs to completion or is rejected before
/// any mutation; after each mutation the table is rebuilt from the freshly
/// persisted list.
pub struct App<S> {
    store: S,
    form: FormState,
    table: TableView,
}

impl<S: ItemStore> App<S> {
    /// Builds the widget and renders the initial table from stored records.
    pub fn new(store: S) -> Self {
        let table = TableView::project(&store.list_all());
        Self {
            store,
            form: FormState::default(),
            table,
        }
    }

    /// Current form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current table projection.
    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Read access to the injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates `input` and applies it: append in create mode, rewrite the
    /// edited record in place in edit mode.
    ///
    /// On success the list is persisted, the table rebuilt, and the form
    /// reset to create mode. On rejection the form holds the submitted
    /// contents and no mutation happens.
    pub fn submit(&mut self, input: &FormInput) -> AppResult<Notice> {
        self.form.fields = input.clone();
        let draft = self.form.fields.validate()?;

        let mut items = self.store.list_all();
        let notice = match self.form.mode {
            FormMode::Create => {
                let id = self.store.next_id()?;
                items.push(draft.into_record(id, now_ms()));
                Notice::Created { id }
            }
            FormMode::Edit(id) => {
                let item = items
                    .iter_mut()
                    .find(|item| item.id == id)
                    .ok_or(AppError::MissingItem(id))?;
                draft.apply_to(item);
                Notice::Updated { id }
            }
        };

        self.store.persist(&items)?;
        self.table = TableView::project(&items);
        self.form.clear();
        Ok(notice)
    }

    /// Loads the record into the form and enters edit mode.
    pub fn edit(&mut self, id: ItemId) -> AppResult<()> {
        let items = self.store.list_all();
        let item = items
            .iter()
            .find(|item| item.id == id)
            .ok_or(AppError::MissingItem(id))?;
        self.form.load(item);
        Ok(())
    }

    /// Removes the record and persists the survivors.
    ///
    /// Clears the form when it was editing the removed record; any other
    /// form state is left alone.
    pub fn delete(&mut self, id: ItemId) -> AppResult<Notice> {
        let mut items = self.store.list_all();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(AppError::MissingItem(id));
        }

        self.store.persist(&items)?;
        self.table = TableView::project(&items);
        if self.form.mode == FormMode::Edit(id) {
            self.form.clear();
        }
        Ok(Notice::Deleted { id })
    }

    /// Clears the form without touching stored records.
    ///
    /// Covers both the Cancel and Reset buttons.
    pub fn reset(&mut self) {
        self.form.clear();
    }

    /// Exports the current record list on demand through the store's sink.
    pub fn export(&mut self) -> AppResult<Notice> {
        let rows = self.store.export_now()?;
        Ok(Notice::Exported { rows })
    }

    /// Rebuilds the table from the freshly listed records.
    pub fn refresh(&mut self) {
        self.table = TableView::project(&self.store.list_all());
    }
}
