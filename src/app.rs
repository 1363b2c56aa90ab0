use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::io::html_export::{chart_title, export_html, normalize_file_name};
use crate::io::{AppSettings, Asset};
use crate::model::palette::palette;
use crate::model::{overall_progress, Calendar, StageDraft, StageStore, StatusCounts, TimelineChart};
use crate::ui;
use crate::ui::export_panel::{ExportAction, ExportForm};
use crate::ui::stage_list::StageListAction;
use crate::ui::Feedback;

/// Main application state.
pub struct DashboardApp {
    pub store: StageStore,
    pub draft: StageDraft,

    // Inline feedback per section
    pub form_feedback: Option<Feedback>,
    pub list_feedback: Option<Feedback>,
    pub export_feedback: Option<Feedback>,

    pub export: ExportForm,
    pub last_export: Option<PathBuf>,
    pub timeline_zoom: f32,

    pub settings: AppSettings,
    pub settings_path: PathBuf,
    pub logo: Asset,
    pub diagram: Asset,

    // Status message
    pub status_message: String,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        egui_extras::install_image_loaders(&cc.egui_ctx);
        ui::theme::apply_theme(&cc.egui_ctx);

        let settings_path = AppSettings::default_path();
        let settings = AppSettings::load(&settings_path);
        Self::with_settings(settings, settings_path, today())
    }

    pub fn with_settings(settings: AppSettings, settings_path: PathBuf, today: NaiveDate) -> Self {
        Self {
            store: StageStore::new(),
            draft: StageDraft::new(today),
            form_feedback: None,
            list_feedback: None,
            export_feedback: None,
            export: ExportForm {
                project_name: settings.project_name.clone(),
                file_name: String::new(),
            },
            last_export: None,
            timeline_zoom: 1.0,
            logo: Asset::locate(&settings.logo_path),
            diagram: Asset::locate(&settings.diagram_path),
            settings,
            settings_path,
            status_message: "Ready".to_string(),
        }
    }

    // --- Stage operations ---

    /// Validate the form and append the stage. The form resets on success.
    pub fn submit_stage(&mut self, today: NaiveDate) {
        match self.store.submit(&self.draft) {
            Ok(stages) => {
                let count = stages.len();
                self.draft.reset(today);
                self.form_feedback = Some(Feedback::Success("Stage added successfully!".to_string()));
                self.status_message = format!("Stage added ({} total)", count);
            }
            Err(e) => {
                self.form_feedback = Some(Feedback::Error(e.to_string()));
            }
        }
    }

    pub fn remove_stage(&mut self, index: usize) {
        if let Some(removed) = self.store.remove(index) {
            let msg = format!("Stage '{}' removed successfully!", removed.description);
            self.list_feedback = Some(Feedback::Success(msg.clone()));
            self.status_message = msg;
        }
    }

    pub fn clear_stages(&mut self) {
        let count = self.store.clear();
        self.list_feedback = Some(Feedback::Success("All stages were removed!".to_string()));
        self.status_message = format!("Removed {} stages", count);
    }

    // --- Export ---

    /// Ask for a destination and write the chart there.
    pub fn export_chart(&mut self, chart: &TimelineChart) {
        let file_name = match normalize_file_name(&self.export.file_name) {
            Ok(name) => name,
            Err(e) => {
                self.status_message = e.to_string();
                self.export_feedback = Some(Feedback::Warning(e.to_string()));
                return;
            }
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(&file_name)
            .save_file()
        {
            self.export_to(chart, &path);
        }
    }

    /// Write the chart to `path`, remembering the project name on success.
    pub fn export_to(&mut self, chart: &TimelineChart, path: &Path) {
        let title = chart_title(&self.export.project_name);
        match export_html(chart, &title, path) {
            Ok(()) => {
                self.last_export = Some(path.to_path_buf());
                self.export_feedback = Some(Feedback::Success(format!(
                    "Saved {}",
                    path.display()
                )));
                self.status_message = "Schedule exported".to_string();

                self.settings.project_name = self.export.project_name.trim().to_string();
                if let Err(e) = self.settings.save(&self.settings_path) {
                    log::warn!("Could not save settings: {}", e);
                }
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.status_message = format!("Export failed: {}", e);
                self.export_feedback = Some(Feedback::Error(e.to_string()));
            }
        }
    }

    fn open_last_export(&mut self) {
        if let Some(path) = &self.last_export {
            if let Err(e) = open::that(path) {
                log::warn!("Could not open {}: {}", path.display(), e);
                self.status_message = format!("Could not open {}: {}", path.display(), e);
            }
        }
    }

    // --- Rendering ---

    /// Timeline, calendar and export sections. Builder failures bubble up
    /// so the caller can replace the whole block with one message.
    fn show_schedule(&mut self, today: NaiveDate, ui: &mut egui::Ui) -> Result<(), RenderError> {
        let stages = self.store.stages();
        let chart = TimelineChart::build(stages, today)?;
        let calendar = Calendar::build(stages);

        ui::theme::section_heading(ui, egui_phosphor::regular::CHART_BAR, "Schedule");
        ui::timeline_chart::show_timeline(&chart, &mut self.timeline_zoom, ui);

        ui::theme::section_heading(ui, egui_phosphor::regular::CALENDAR_BLANK, "Execution calendar");
        ui::calendar_view::show_calendar(&calendar, self.store.stages(), ui);

        ui::theme::section_heading(ui, egui_phosphor::regular::EXPORT, "Export schedule");
        let action = ui::export_panel::show_export_panel(
            &mut self.export,
            self.last_export.is_some(),
            self.export_feedback.as_ref(),
            ui,
        );
        match action {
            ExportAction::Save => self.export_chart(&chart),
            ExportAction::OpenLast => self.open_last_export(),
            ExportAction::None => {}
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = today();
        let overall = (!self.store.is_empty())
            .then(|| overall_progress(self.store.stages(), today));

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .size(11.0)
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Stages: {} · v{}",
                                self.store.len(),
                                env!("CARGO_PKG_VERSION")
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: logo, instructions, progress
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(10.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                ui::sidebar::show_sidebar(&self.logo, overall, ui);
            });

        // Central panel: the dashboard itself
        let central_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(16.0));
        egui::CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(
                        egui::RichText::new(format!(
                            "{}  Project Schedule - Interactive Gantt Chart",
                            egui_phosphor::regular::CHART_BAR
                        ))
                        .strong(),
                    );
                    ui.label(
                        egui::RichText::new("Planning and tracking of activities")
                            .color(ui::theme::TEXT_SECONDARY),
                    );

                    if let Some(pct) = overall {
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new(format!("Overall progress: {:.1}%", pct))
                                .strong()
                                .size(15.0),
                        );
                        ui.add(
                            egui::ProgressBar::new((pct / 100.0) as f32)
                                .fill(ui::theme::ACCENT)
                                .rounding(egui::Rounding::same(3.0)),
                        );
                    }

                    if let Some(uri) = self.diagram.uri() {
                        ui::theme::section_heading(
                            ui,
                            egui_phosphor::regular::FLOW_ARROW,
                            "Process flowchart",
                        );
                        ui.add(egui::Image::new(uri).max_width(ui.available_width()));
                        ui.label(
                            egui::RichText::new("Project workflow diagram")
                                .size(11.0)
                                .color(ui::theme::TEXT_DIM),
                        );
                    }

                    ui::theme::section_heading(ui, egui_phosphor::regular::PLUS_CIRCLE, "Add new stage");
                    if ui::stage_form::show_stage_form(
                        &mut self.draft,
                        self.form_feedback.as_ref(),
                        ui,
                    ) {
                        self.submit_stage(today);
                    }

                    ui::theme::section_heading(ui, egui_phosphor::regular::LIST_CHECKS, "Project stages");
                    let colors = palette(self.store.len());
                    let action = ui::stage_list::show_stage_list(
                        self.store.stages(),
                        &colors,
                        today,
                        self.list_feedback.as_ref(),
                        ui,
                    );
                    match action {
                        StageListAction::Remove(index) => self.remove_stage(index),
                        StageListAction::ClearAll => self.clear_stages(),
                        StageListAction::None => {}
                    }

                    if self.store.is_empty() {
                        return;
                    }

                    ui::theme::section_heading(ui, egui_phosphor::regular::GAUGE, "Overall stage status");
                    let counts = StatusCounts::compute(self.store.stages(), today);
                    ui::stage_list::show_status_summary(&counts, ui);

                    if let Err(e) = self.show_schedule(today, ui) {
                        log::error!("Rendering failed: {}", e);
                        ui.add_space(8.0);
                        ui::show_feedback(
                            &Feedback::Error(format!("Error generating the chart: {}", e)),
                            ui,
                        );
                    }

                    ui.add_space(12.0);
                    ui.separator();
                    ui.label(
                        egui::RichText::new("Project management dashboard")
                            .size(10.0)
                            .color(ui::theme::TEXT_DIM),
                    );
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(dir: &Path) -> DashboardApp {
        let settings = AppSettings {
            logo_path: dir.join("logo.png"),
            diagram_path: dir.join("flowchart.png"),
            ..Default::default()
        };
        DashboardApp::with_settings(settings, dir.join("settings.json"), ymd(2025, 7, 1))
    }

    fn fill(app: &mut DashboardApp, description: &str, start: &str, end: &str) {
        app.draft.description = description.into();
        app.draft.owner = "Ana".into();
        app.draft.start = start.into();
        app.draft.end = end.into();
    }

    #[test]
    fn test_submit_resets_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        fill(&mut app, "Design", "01.07.25", "10.07.25");
        app.submit_stage(ymd(2025, 7, 2));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.draft, StageDraft::new(ymd(2025, 7, 2)));
        assert!(matches!(app.form_feedback, Some(Feedback::Success(_))));
    }

    #[test]
    fn test_rejected_submit_keeps_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        fill(&mut app, "Design", "10.07.25", "01.07.25");
        app.submit_stage(ymd(2025, 7, 2));
        assert!(app.store.is_empty());
        assert_eq!(app.draft.start, "10.07.25");
        assert_eq!(
            app.form_feedback,
            Some(Feedback::Error(
                "The start date cannot be after the end date!".to_string()
            ))
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        for name in ["a", "b", "c"] {
            fill(&mut app, name, "01.07.25", "10.07.25");
            app.submit_stage(ymd(2025, 7, 1));
        }
        app.remove_stage(0);
        assert_eq!(app.store.stages()[0].description, "b");
        assert_eq!(app.status_message, "Stage 'a' removed successfully!");
        app.clear_stages();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_export_to_remembers_project_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        fill(&mut app, "Design", "01.07.25", "10.07.25");
        app.submit_stage(ymd(2025, 7, 1));
        app.export.project_name = " Alpha ".into();

        let chart = TimelineChart::build(app.store.stages(), ymd(2025, 7, 3)).unwrap();
        let out = dir.path().join("plan.html");
        app.export_to(&chart, &out);

        assert_eq!(app.last_export.as_deref(), Some(out.as_path()));
        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains("Project Schedule - Alpha"));
        let saved = AppSettings::load(&dir.path().join("settings.json"));
        assert_eq!(saved.project_name, "Alpha");
    }

    #[test]
    fn test_export_without_file_name_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        fill(&mut app, "Design", "01.07.25", "10.07.25");
        app.submit_stage(ymd(2025, 7, 1));
        let chart = TimelineChart::build(app.store.stages(), ymd(2025, 7, 3)).unwrap();
        app.export_chart(&chart);
        assert_eq!(
            app.export_feedback,
            Some(Feedback::Warning("Enter a name for the file".to_string()))
        );
    }

    #[test]
    fn test_missing_assets_are_not_errors() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        assert!(matches!(app.logo, Asset::Missing(_)));
        assert_eq!(app.diagram.uri(), None);
    }
}
