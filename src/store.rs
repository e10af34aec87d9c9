//! Movements Screen State Store
//!
//! One state object, changed only through `Action`s, wrapped in a
//! `reactive_stores` store. `dispatch` writes back only the fields an action
//! changed, so a keystroke in the form does not re-render the table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::TypeFilter;
use crate::mapper::form_from_movement;
use crate::models::{ContainerOption, Movement, MovementForm, MovementType};

/// Create/edit modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    /// Editing the movement with this id
    Edit(u32),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn editing_id(&self) -> Option<u32> {
        match self {
            Modal::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

/// A single form field edit
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Container(Option<u32>),
    Type(Option<MovementType>),
    Timestamp(String),
    Notes(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    Loaded {
        movements: Vec<Movement>,
        containers: Vec<ContainerOption>,
    },
    LoadFailed(String),
    SetFilter(TypeFilter),
    OpenCreate,
    OpenEdit(Movement),
    CloseModal,
    EditForm(FormField),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    RequestDelete(Movement),
    CancelDelete,
    DeleteStarted,
    DeleteFailed(String),
}

/// Movements screen state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct MovementsState {
    /// Last successfully loaded movements, unfiltered
    pub movements: Vec<Movement>,
    /// Containers for the form selector
    pub containers: Vec<ContainerOption>,
    pub loading: bool,
    /// Banner message, replaced by every new failure
    pub error: Option<String>,
    pub filter: TypeFilter,
    pub modal: Modal,
    pub form: MovementForm,
    /// A create/update request is in flight
    pub submitting: bool,
    /// Movement awaiting delete confirmation
    pub pending_delete: Option<Movement>,
}

impl MovementsState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form = MovementForm::default();
    }

    pub fn reduce(mut self, action: Action) -> Self {
        // modal controls are inert while a save is in flight
        let gated = matches!(
            action,
            Action::OpenCreate | Action::OpenEdit(_) | Action::CloseModal | Action::EditForm(_)
        );
        if gated && self.submitting {
            return self;
        }

        match action {
            Action::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::Loaded { movements, containers } => {
                self.movements = movements;
                self.containers = containers;
                self.loading = false;
            }
            Action::LoadFailed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            Action::SetFilter(filter) => self.filter = filter,
            Action::OpenCreate => {
                self.form = MovementForm::default();
                self.modal = Modal::Create;
            }
            Action::OpenEdit(movement) => {
                self.form = form_from_movement(&movement);
                self.modal = Modal::Edit(movement.id);
            }
            Action::CloseModal => self.close_modal(),
            Action::EditForm(field) => match field {
                FormField::Container(id) => self.form.container_id = id,
                FormField::Type(t) => self.form.movement_type = t,
                FormField::Timestamp(ts) => self.form.timestamp = ts,
                FormField::Notes(notes) => self.form.notes = notes,
            },
            Action::SubmitStarted => {
                self.submitting = true;
                self.error = None;
            }
            Action::SubmitSucceeded => {
                self.submitting = false;
                self.close_modal();
            }
            Action::SubmitFailed(message) => {
                self.submitting = false;
                self.error = Some(message);
            }
            Action::RequestDelete(movement) => self.pending_delete = Some(movement),
            Action::CancelDelete => self.pending_delete = None,
            Action::DeleteStarted => {
                self.pending_delete = None;
                self.error = None;
            }
            Action::DeleteFailed(message) => self.error = Some(message),
        }
        self
    }
}

/// Type alias for the store
pub type MovementsStore = Store<MovementsState>;

/// Top-level fields of `MovementsState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Movements,
    Containers,
    Loading,
    Error,
    Filter,
    Modal,
    Form,
    Submitting,
    PendingDelete,
}

/// Fields that differ between two states, in declaration order
pub fn changed_fields(old: &MovementsState, new: &MovementsState) -> Vec<StateField> {
    let checks = [
        (StateField::Movements, old.movements != new.movements),
        (StateField::Containers, old.containers != new.containers),
        (StateField::Loading, old.loading != new.loading),
        (StateField::Error, old.error != new.error),
        (StateField::Filter, old.filter != new.filter),
        (StateField::Modal, old.modal != new.modal),
        (StateField::Form, old.form != new.form),
        (StateField::Submitting, old.submitting != new.submitting),
        (StateField::PendingDelete, old.pending_delete != new.pending_delete),
    ];
    checks.into_iter().filter(|(_, changed)| *changed).map(|(field, _)| field).collect()
}

/// Apply an action to the store, notifying only the fields it changed
pub fn dispatch(store: &MovementsStore, action: Action) {
    let old = store.with_untracked(|state| state.clone());
    let new = old.clone().reduce(action);
    let changed = changed_fields(&old, &new);
    let MovementsState {
        mut movements,
        mut containers,
        loading,
        mut error,
        filter,
        modal,
        mut form,
        submitting,
        mut pending_delete,
    } = new;
    for field in changed {
        match field {
            StateField::Movements => *store.movements().write() = std::mem::take(&mut movements),
            StateField::Containers => *store.containers().write() = std::mem::take(&mut containers),
            StateField::Loading => *store.loading().write() = loading,
            StateField::Error => *store.error().write() = error.take(),
            StateField::Filter => *store.filter().write() = filter,
            StateField::Modal => *store.modal().write() = modal,
            StateField::Form => *store.form().write() = std::mem::take(&mut form),
            StateField::Submitting => *store.submitting().write() = submitting,
            StateField::PendingDelete => *store.pending_delete().write() = pending_delete.take(),
        }
    }
}

/// Confirmation prompt for a pending delete
pub fn delete_prompt(movement: &Movement) -> String {
    let tipo = movement.movement_type.map(|t| t.as_str()).unwrap_or("-");
    format!(
        "¿Está seguro de que desea eliminar el movimiento \"{}\" del contenedor \"{}\"?",
        tipo, movement.container_code
    )
}
