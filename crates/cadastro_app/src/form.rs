//! Form state and the user actions that drive it.
//!
//! # Responsibility
//! - Hold input text, the explicit selected id and the cached grid rows.
//! - Translate button/row events into store calls and dialogs.
//!
//! # Invariants
//! - `rows` is a disposable copy; it is replaced by a full reload after every
//!   successful mutation and never written to directly.
//! - A failed action leaves inputs, selection and rows untouched.
//! - `selected_id`, when set, refers to a row present in `rows`.
//! - Inputs are trimmed before submission and whitespace-only text counts as
//!   empty; stored values never carry surrounding whitespace.

use crate::prompt::Prompt;
use cadastro_core::{Person, PersonId, PersonStore, StoreError};
use log::{info, warn};

const ERROR_TITLE: &str = "Erro";
const CONFIRM_TITLE: &str = "Confirmação";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Ensure the schema exists and fill the grid.
    Load,
    /// Row click: copy its fields into the inputs and enter edit mode.
    SelectRow(PersonId),
    Add,
    Update,
    Delete,
    /// Back to add mode with empty inputs.
    Clear,
}

pub struct PersonForm {
    store: PersonStore,
    pub name_input: String,
    pub email_input: String,
    selected_id: Option<PersonId>,
    rows: Vec<Person>,
}

impl PersonForm {
    pub fn new(store: PersonStore) -> Self {
        Self {
            store,
            name_input: String::new(),
            email_input: String::new(),
            selected_id: None,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    pub fn selected_id(&self) -> Option<PersonId> {
        self.selected_id
    }

    pub fn dispatch(&mut self, action: FormAction, prompt: &mut dyn Prompt) {
        match action {
            FormAction::Load => self.load(prompt),
            FormAction::SelectRow(id) => self.select_row(id),
            FormAction::Add => self.add(prompt),
            FormAction::Update => self.update(prompt),
            FormAction::Delete => self.delete(prompt),
            FormAction::Clear => self.clear(),
        }
    }

    fn load(&mut self, prompt: &mut dyn Prompt) {
        if let Err(err) = self.store.initialize() {
            report(prompt, "Não foi possível abrir o banco de dados", &err);
            return;
        }
        self.reload(prompt);
    }

    fn select_row(&mut self, id: PersonId) {
        let Some(person) = self.rows.iter().find(|person| person.id == id) else {
            return;
        };
        self.name_input = person.name.clone();
        self.email_input = person.email.clone();
        self.selected_id = Some(id);
    }

    fn add(&mut self, prompt: &mut dyn Prompt) {
        let name = self.name_input.trim();
        let email = self.email_input.trim();
        if name.is_empty() || email.is_empty() {
            prompt.warn(ERROR_TITLE, "Preencha todos os campos.");
            return;
        }

        match self.store.insert(name, email) {
            Ok(id) => {
                info!("event=form_add module=form status=ok id={id}");
                self.reload(prompt);
                self.clear();
            }
            Err(err) => report(prompt, "Não foi possível adicionar", &err),
        }
    }

    fn update(&mut self, prompt: &mut dyn Prompt) {
        let Some(id) = self.selected_id else {
            prompt.warn(ERROR_TITLE, "Selecione um registro para atualizar.");
            return;
        };

        let name = self.name_input.trim();
        let email = self.email_input.trim();
        match self.store.update(id, name, email) {
            Ok(()) => {
                info!("event=form_update module=form status=ok id={id}");
                self.reload(prompt);
            }
            Err(err) => report(prompt, "Não foi possível atualizar", &err),
        }
    }

    fn delete(&mut self, prompt: &mut dyn Prompt) {
        let Some(id) = self.selected_id else {
            prompt.warn(ERROR_TITLE, "Selecione um registro para excluir.");
            return;
        };
        if !prompt.confirm(CONFIRM_TITLE, "Deseja realmente excluir este registro?") {
            return;
        }

        match self.store.delete(id) {
            Ok(()) => {
                info!("event=form_delete module=form status=ok id={id}");
                self.clear();
                self.reload(prompt);
            }
            Err(err) => report(prompt, "Não foi possível excluir", &err),
        }
    }

    fn clear(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
        self.selected_id = None;
    }

    fn reload(&mut self, prompt: &mut dyn Prompt) {
        match self.store.list_all() {
            Ok(rows) => {
                self.rows = rows;
                if let Some(id) = self.selected_id {
                    if !self.rows.iter().any(|person| person.id == id) {
                        self.selected_id = None;
                    }
                }
            }
            Err(err) => report(prompt, "Não foi possível carregar os registros", &err),
        }
    }
}

fn report(prompt: &mut dyn Prompt, context: &str, err: &StoreError) {
    warn!("event=form_error module=form status=error context=\"{context}\"");
    prompt.warn(ERROR_TITLE, &format!("{context}: {err}"));
}
