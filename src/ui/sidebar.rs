use egui::{RichText, Ui};

use crate::io::Asset;
use crate::ui::theme;

/// Render the left panel: logo, usage notes and overall progress.
pub fn show_sidebar(logo: &Asset, overall_pct: Option<f64>, ui: &mut Ui) {
    ui.add_space(6.0);
    ui.label(RichText::new("Project Management").strong().size(18.0));
    ui.add_space(6.0);

    match logo.uri() {
        Some(uri) => {
            ui.add(egui::Image::new(uri).max_width(200.0));
        }
        None => {
            ui.label(
                RichText::new(format!(
                    "{}  Logo not found. Add '{}' to the application directory.",
                    egui_phosphor::regular::INFO,
                    logo.path().display()
                ))
                .size(11.0)
                .color(theme::TEXT_SECONDARY),
            );
        }
    }

    ui.add_space(6.0);
    ui.separator();
    ui.label(RichText::new("Instructions").strong());
    for (n, step) in [
        "Fill in the stage details",
        "Use dates in dd.mm.yy format (e.g. 15.07.25)",
        "Review the timeline and calendar",
        "Save the schedule as HTML",
    ]
    .iter()
    .enumerate()
    {
        ui.label(
            RichText::new(format!("{}. {}", n + 1, step))
                .size(11.5)
                .color(theme::TEXT_SECONDARY),
        );
    }

    if let Some(pct) = overall_pct {
        ui.add_space(6.0);
        ui.separator();
        ui.label(RichText::new("Project progress").strong());
        ui.add(
            egui::ProgressBar::new((pct / 100.0) as f32)
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(3.0)),
        );
        ui.label(
            RichText::new(format!("Current progress: {:.1}%", pct))
                .size(11.0)
                .color(theme::TEXT_SECONDARY),
        );
    }
}
