//! egui window: input row on top, record grid below.

use crate::form::{FormAction, PersonForm};
use crate::prompt::Prompt;
use eframe::egui;

const INPUT_WIDTH: f32 = 140.0;

pub struct CadastroApp<P: Prompt> {
    form: PersonForm,
    prompt: P,
}

impl<P: Prompt> CadastroApp<P> {
    /// Builds the window state and runs the initial load.
    pub fn new(form: PersonForm, prompt: P) -> Self {
        let mut app = Self { form, prompt };
        app.form.dispatch(FormAction::Load, &mut app.prompt);
        app
    }

    fn input_row(&mut self, ui: &mut egui::Ui) -> Option<FormAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.form.name_input)
                    .hint_text("Nome")
                    .desired_width(INPUT_WIDTH),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.form.email_input)
                    .hint_text("Email")
                    .desired_width(INPUT_WIDTH),
            );
            if ui.button("Adicionar").clicked() {
                action = Some(FormAction::Add);
            }
            if ui.button("Atualizar").clicked() {
                action = Some(FormAction::Update);
            }
            if ui.button("Excluir").clicked() {
                action = Some(FormAction::Delete);
            }
            if ui.button("Limpar").clicked() {
                action = Some(FormAction::Clear);
            }
        });
        action
    }

    fn record_grid(&self, ui: &mut egui::Ui) -> Option<FormAction> {
        let mut action = None;
        let selected_id = self.form.selected_id();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("pessoas_grid")
                    .num_columns(3)
                    .striped(true)
                    .min_col_width(40.0)
                    .show(ui, |ui| {
                        ui.strong("ID");
                        ui.strong("Nome");
                        ui.strong("Email");
                        ui.end_row();

                        for person in self.form.rows() {
                            let selected = selected_id == Some(person.id);
                            let mut clicked = ui
                                .selectable_label(selected, person.id.to_string())
                                .clicked();
                            clicked |= ui
                                .selectable_label(selected, person.name.as_str())
                                .clicked();
                            clicked |= ui
                                .selectable_label(selected, person.email.as_str())
                                .clicked();
                            if clicked {
                                action = Some(FormAction::SelectRow(person.id));
                            }
                            ui.end_row();
                        }
                    });
            });
        action
    }
}

impl<P: Prompt> eframe::App for CadastroApp<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::TopBottomPanel::top("form_inputs").show(ctx, |ui| {
            ui.add_space(6.0);
            action = self.input_row(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(clicked) = self.record_grid(ui) {
                action = Some(clicked);
            }
        });

        // Runs after both panels are laid out.
        if let Some(action) = action {
            self.form.dispatch(action, &mut self.prompt);
        }
    }
}
