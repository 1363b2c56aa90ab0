use egui::{Color32, RichText, Ui};

use crate::ui::{show_feedback, theme, Feedback};

/// Text fields of the export form.
#[derive(Debug, Clone, Default)]
pub struct ExportForm {
    pub project_name: String,
    pub file_name: String,
}

pub enum ExportAction {
    None,
    Save,
    OpenLast,
}

/// Render the HTML export controls.
pub fn show_export_panel(
    form: &mut ExportForm,
    has_last_export: bool,
    feedback: Option<&Feedback>,
    ui: &mut Ui,
) -> ExportAction {
    let mut action = ExportAction::None;

    egui::Grid::new("export_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Project name").color(theme::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 24.0],
                egui::TextEdit::singleline(&mut form.project_name)
                    .hint_text("e.g. Project Alpha"),
            );
            ui.end_row();

            ui.label(RichText::new("HTML file name").color(theme::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 24.0],
                egui::TextEdit::singleline(&mut form.file_name)
                    .hint_text("e.g. project_schedule"),
            );
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let save_btn = egui::Button::new(
            RichText::new(format!("{}  Save chart as HTML", egui_phosphor::regular::EXPORT))
                .color(Color32::WHITE),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(4.0));
        if ui.add_sized([190.0, 28.0], save_btn).clicked() {
            action = ExportAction::Save;
        }
        if has_last_export
            && ui
                .add_sized([150.0, 28.0], egui::Button::new("Open in browser"))
                .clicked()
        {
            action = ExportAction::OpenLast;
        }
    });

    if let Some(feedback) = feedback {
        ui.add_space(4.0);
        show_feedback(feedback, ui);
    }

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!(
            "{}  The generated HTML file opens in any browser and contains the interactive chart.",
            egui_phosphor::regular::INFO
        ))
        .size(11.0)
        .color(theme::TEXT_SECONDARY),
    );

    action
}
