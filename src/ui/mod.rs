pub mod calendar_view;
pub mod export_panel;
pub mod sidebar;
pub mod stage_form;
pub mod stage_list;
pub mod theme;
pub mod timeline_chart;

use egui::{RichText, Ui};

/// Inline message shown next to the control that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Warning(String),
    Error(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Success(s) | Feedback::Warning(s) | Feedback::Error(s) => s,
        }
    }
}

pub fn show_feedback(feedback: &Feedback, ui: &mut Ui) {
    let (icon, color) = match feedback {
        Feedback::Success(_) => (egui_phosphor::regular::CHECK_CIRCLE, theme::SUCCESS),
        Feedback::Warning(_) => (egui_phosphor::regular::WARNING, theme::WARNING),
        Feedback::Error(_) => (egui_phosphor::regular::X_CIRCLE, theme::DANGER),
    };
    ui.label(RichText::new(format!("{}  {}", icon, feedback.text())).color(color));
}
