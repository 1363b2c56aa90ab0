use crate::model::StageDraft;
use crate::ui::{show_feedback, theme, Feedback};
use egui::{Color32, RichText, Ui};

/// Render the "add stage" form. Returns `true` when the user submits.
pub fn show_stage_form(draft: &mut StageDraft, feedback: Option<&Feedback>, ui: &mut Ui) -> bool {
    let mut submitted = false;

    let frame = egui::Frame {
        fill: theme::BG_CARD,
        rounding: egui::Rounding::same(6.0),
        inner_margin: egui::Margin::same(12.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    frame.show(ui, |ui| {
        ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;

        ui.columns(2, |cols| {
            if let [left, right] = cols {
                field_label(left, "Stage description*");
                text_field(left, &mut draft.description, "e.g. Prototype development");
                field_label(left, "Owner(s)*");
                text_field(left, &mut draft.owner, "e.g. Ana Silva, Bruno Costa");

                field_label(right, "Start date* (dd.mm.yy)");
                text_field(right, &mut draft.start, "15.07.25");
                field_label(right, "End date* (dd.mm.yy)");
                text_field(right, &mut draft.end, "31.07.25");
            }
        });

        ui.add_space(4.0);
        field_label(ui, "Additional notes");
        ui.add_sized(
            [ui.available_width(), 60.0],
            egui::TextEdit::multiline(&mut draft.notes)
                .font(egui::FontId::proportional(12.0))
                .text_color(theme::TEXT_SECONDARY)
                .hint_text("Important details about the stage..."),
        );

        ui.add_space(6.0);
        let btn = egui::Button::new(
            RichText::new(format!("{}  Add stage", egui_phosphor::regular::PLUS))
                .color(Color32::WHITE)
                .size(12.0),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(5.0));
        if ui.add_sized([140.0, 30.0], btn).clicked() {
            submitted = true;
        }

        if let Some(feedback) = feedback {
            ui.add_space(4.0);
            show_feedback(feedback, ui);
        }
    });

    submitted
}

fn text_field(ui: &mut Ui, value: &mut String, hint: &str) {
    ui.add_sized(
        [ui.available_width(), 24.0],
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .text_color(theme::TEXT_PRIMARY),
    );
}

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(10.5)
            .color(theme::TEXT_DIM)
            .strong(),
    );
}
