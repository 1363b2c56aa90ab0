use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};

use crate::model::{stage_status, Stage, StatusCounts};
use crate::ui::{show_feedback, theme, Feedback};

/// Actions that the stage list can request.
pub enum StageListAction {
    None,
    Remove(usize),
    ClearAll,
}

/// Render the stage list with per-stage status and removal controls.
pub fn show_stage_list(
    stages: &[Stage],
    colors: &[Color32],
    today: NaiveDate,
    feedback: Option<&Feedback>,
    ui: &mut Ui,
) -> StageListAction {
    let mut action = StageListAction::None;

    if let Some(feedback) = feedback {
        show_feedback(feedback, ui);
        ui.add_space(4.0);
    }

    if stages.is_empty() {
        ui.label(
            RichText::new("No stages added yet. Start by filling in the form above.")
                .color(theme::TEXT_SECONDARY),
        );
        return action;
    }

    let clear_btn = egui::Button::new(
        RichText::new(format!("{}  Clear all stages", egui_phosphor::regular::TRASH))
            .color(Color32::WHITE)
            .size(12.0),
    )
    .fill(theme::DANGER)
    .rounding(egui::Rounding::same(5.0));
    if ui.add(clear_btn).clicked() {
        action = StageListAction::ClearAll;
    }
    ui.add_space(6.0);

    for (i, stage) in stages.iter().enumerate() {
        let color = colors.get(i).copied().unwrap_or(theme::ACCENT);
        let frame = egui::Frame {
            fill: if i % 2 == 0 { theme::BG_CARD } else { theme::BG_PANEL },
            rounding: egui::Rounding::same(5.0),
            inner_margin: egui::Margin::symmetric(10.0, 8.0),
            outer_margin: egui::Margin::ZERO,
            stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
            shadow: egui::epaint::Shadow::NONE,
        };

        // Stage ids keep widget state stable when rows shift after a removal
        ui.push_id(stage.id, |ui| frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                // Color dot matching the timeline bar
                let (dot_rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter().circle_filled(dot_rect.center(), 5.0, color);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("Stage {}: {}", i + 1, stage.description))
                            .strong()
                            .size(14.0),
                    );
                    detail_row(ui, "Owner", &stage.owner);
                    detail_row(ui, "Period", &stage.period_label());
                    if let Some(notes) = &stage.notes {
                        detail_row(ui, "Notes", notes);
                    }
                    let status = stage_status(stage, today);
                    detail_row(ui, "Status", &format!("{} {}", status.icon(), status.label()));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let del_btn = ui.add(
                        egui::Button::new(
                            RichText::new(egui_phosphor::regular::TRASH)
                                .size(14.0)
                                .color(theme::TEXT_DIM),
                        )
                        .frame(false),
                    );
                    if del_btn.on_hover_text("Remove stage").clicked() {
                        action = StageListAction::Remove(i);
                    }
                });
            });
        }));
        ui.add_space(3.0);
    }

    action
}

/// Metrics row: total, completed and in-progress stages.
pub fn show_status_summary(counts: &StatusCounts, ui: &mut Ui) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total stages", counts.total);
        metric(&mut cols[1], "Completed stages", counts.completed);
        metric(&mut cols[2], "Stages in progress", counts.in_progress);
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).size(11.0).color(theme::TEXT_SECONDARY));
        ui.label(RichText::new(value.to_string()).size(26.0).strong());
    });
}

fn detail_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label(RichText::new(format!("{}:", label)).strong().color(theme::TEXT_SECONDARY));
        ui.label(RichText::new(value).color(theme::TEXT_PRIMARY));
    });
}
