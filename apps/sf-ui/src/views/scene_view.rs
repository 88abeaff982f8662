use egui_plot::{Legend, Line, Plot, PlotPoints};
use sf_app::{PlotScene, SeriesColor};

pub fn series_color(color: SeriesColor) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Draws a static [`PlotScene`], or the error that kept it from being built.
#[derive(Default)]
pub struct SceneView {
    scene: Option<Result<PlotScene, String>>,
}

impl SceneView {
    pub fn set_scene(&mut self, scene: Result<PlotScene, String>) {
        self.scene = Some(scene);
    }

    pub fn show(&self, ui: &mut egui::Ui, id_salt: &str) {
        match &self.scene {
            None => {
                ui.label("No study loaded");
            }
            Some(Err(message)) => {
                ui.colored_label(egui::Color32::RED, message);
            }
            Some(Ok(scene)) => {
                ui.heading(&scene.title);
                draw_scene(ui, id_salt, scene);
            }
        }
    }
}

pub fn draw_scene(ui: &mut egui::Ui, id_salt: &str, scene: &PlotScene) {
    let lines: Vec<Line> = scene
        .series
        .iter()
        .map(|series| {
            let points: PlotPoints = series.points.clone().into();
            Line::new(points)
                .name(&series.label)
                .color(series_color(series.color))
        })
        .collect();

    let mut plot = Plot::new(id_salt)
        .legend(Legend::default())
        .x_axis_label(scene.x_label)
        .y_axis_label(scene.y_label)
        .include_x(scene.x_limits.0)
        .include_x(scene.x_limits.1);
    if let Some((lo, hi)) = scene.y_limits {
        plot = plot.include_y(lo).include_y(hi);
    }

    plot.show(ui, |plot_ui| {
        for line in lines {
            plot_ui.line(line);
        }
    });
}
