use crate::views::{AnimationView, SceneView};
use egui_file_dialog::{DialogMode, FileDialog};
use sf_app::{
    ExportOptions, ExportRequest, comparison_scene, export_animation, load_study, save_study,
    static_profile_scene, summarize, validate_study,
};
use sf_results::RenderStore;
use sf_study::StudyConfig;
use std::path::PathBuf;

pub struct ShearflowApp {
    study: StudyConfig,
    study_path: Option<PathBuf>,
    render_store: Option<RenderStore>,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_directory: Option<PathBuf>,
    active_view: ViewTab,
    profile_view: SceneView,
    animation_view: AnimationView,
    comparison_view: SceneView,
    status_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Profile,
    Animation,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Open,
    Save,
}

impl ShearflowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            study: StudyConfig::default(),
            study_path: None,
            render_store: None,
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_directory: None,
            active_view: ViewTab::Profile,
            profile_view: SceneView::default(),
            animation_view: AnimationView::default(),
            comparison_view: SceneView::default(),
            status_message: None,
        };
        app.init_render_store();
        app.rebuild_views();
        app
    }

    fn init_render_store(&mut self) {
        // Render store next to the study if saved, otherwise in the temp directory
        let store = if let Some(ref path) = self.study_path {
            RenderStore::for_study(path).ok()
        } else {
            RenderStore::new(std::env::temp_dir().join("shearflow-renders")).ok()
        };
        self.render_store = store;
    }

    /// Recompute all three views from the current study.
    fn rebuild_views(&mut self) {
        if let Err(e) = validate_study(&self.study) {
            let message = format!("Invalid study: {}", e);
            self.profile_view.set_scene(Err(message.clone()));
            self.comparison_view.set_scene(Err(message.clone()));
            self.animation_view.clear();
            self.status_message = Some(message);
            return;
        }

        self.profile_view
            .set_scene(static_profile_scene(&self.study).map_err(|e| e.to_string()));
        self.comparison_view
            .set_scene(comparison_scene(&self.study).map_err(|e| e.to_string()));
        self.animation_view.set_study(&self.study);
    }

    fn new_study(&mut self) {
        self.study = StudyConfig::default();
        self.study_path = None;
        self.init_render_store();
        self.rebuild_views();
        self.status_message = None;
    }

    fn open_study(&mut self, path: PathBuf) {
        match load_study(&path) {
            Ok(study) => {
                // Remember the directory for next time
                if let Some(parent) = path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                self.study = study;
                self.status_message = Some(format!("Loaded {}", path.display()));
                self.study_path = Some(path);
                self.init_render_store();
                self.rebuild_views();
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to open study: {}", e));
            }
        }
    }

    fn save_study_as(&mut self, path: PathBuf) {
        match save_study(&path, &self.study) {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", path.display()));
                self.study_path = Some(path);
                self.init_render_store();
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to save study: {}", e));
            }
        }
    }

    fn export(&mut self) {
        let Some(store) = &self.render_store else {
            self.status_message = Some("No render store available".to_string());
            return;
        };

        let request = ExportRequest {
            study: &self.study,
            store,
            options: ExportOptions::default(),
        };
        self.status_message = Some(match export_animation(&request, None) {
            Ok(response) if response.loaded_from_cache => {
                format!("Render already stored: {}", response.render_id)
            }
            Ok(response) => format!(
                "Rendered {} frames in {:.2}s: {}",
                response.manifest.frame_count, response.total_time_s, response.render_id
            ),
            Err(e) => format!("Export failed: {}", e),
        });
    }

    fn show_study_panel(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Study");
        ui.label(format!("Name: {}", self.study.name));
        if let Some(path) = &self.study_path {
            ui.label(path.display().to_string());
        }
        ui.separator();

        ui.heading("Pipe");
        egui::Grid::new("pipe_grid").num_columns(2).show(ui, |ui| {
            ui.label("R");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.study.pipe.radius)
                        .speed(0.01)
                        .range(1e-6..=1e6),
                )
                .changed();
            ui.end_row();

            ui.label("beta");
            changed |= ui
                .add(egui::DragValue::new(&mut self.study.pipe.beta).speed(0.001))
                .changed();
            ui.end_row();

            ui.label("mu0");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.study.pipe.mu0)
                        .speed(0.001)
                        .range(1e-9..=1e6),
                )
                .changed();
            ui.end_row();
        });

        ui.separator();
        ui.heading("Exponents");
        egui::Grid::new("exponent_grid").num_columns(2).show(ui, |ui| {
            ui.label("n (static)");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.study.n_fixed)
                        .speed(0.01)
                        .range(0.001..=10.0),
                )
                .changed();
            ui.end_row();

            ui.label("sweep start");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.study.n_range.start)
                        .speed(0.01)
                        .range(0.001..=10.0),
                )
                .changed();
            ui.end_row();

            ui.label("sweep end");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.study.n_range.end)
                        .speed(0.01)
                        .range(0.001..=10.0),
                )
                .changed();
            ui.end_row();

            ui.label("frames");
            changed |= ui
                .add(egui::DragValue::new(&mut self.study.n_range.count).range(2..=1000))
                .changed();
            ui.end_row();
        });

        ui.separator();
        let summary = summarize(&self.study);
        ui.label(format!("Radial samples: {}", summary.samples));
        ui.label(format!("Comparison curves: {}", summary.key_count));

        changed
    }
}

impl eframe::App for ShearflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New").clicked() {
                    self.new_study();
                }

                if ui.button("Open").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Open);
                    let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                    let _ = self
                        .file_dialog
                        .open(DialogMode::SelectFile, true, initial_dir);
                }

                if ui.button("Save").clicked() {
                    if let Some(path) = self.study_path.clone() {
                        self.save_study_as(path);
                    } else {
                        self.file_dialog_action = Some(FileDialogAction::Save);
                        self.file_dialog.save_file();
                    }
                }

                ui.separator();

                if ui.button("Export Animation").clicked() {
                    self.export();
                }

                if let Some(message) = &self.status_message {
                    ui.separator();
                    ui.label(message);
                }
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::Open) => self.open_study(path.to_path_buf()),
                Some(FileDialogAction::Save) => self.save_study_as(path.to_path_buf()),
                None => {}
            }
        }

        let changed = egui::SidePanel::left("study_panel")
            .default_width(220.0)
            .show(ctx, |ui| self.show_study_panel(ui))
            .inner;
        if changed {
            self.rebuild_views();
        }

        if self.active_view == ViewTab::Animation {
            self.animation_view.update_clock(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_view, ViewTab::Profile, "Profile");
                ui.selectable_value(&mut self.active_view, ViewTab::Animation, "Animation");
                ui.selectable_value(&mut self.active_view, ViewTab::Comparison, "Comparison");
            });

            ui.separator();

            match self.active_view {
                ViewTab::Profile => self.profile_view.show(ui, "profile_plot"),
                ViewTab::Animation => self.animation_view.show(ui),
                ViewTab::Comparison => self.comparison_view.show(ui, "comparison_plot"),
            }
        });
    }
}
