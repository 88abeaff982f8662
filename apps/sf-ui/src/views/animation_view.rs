use std::time::Instant;

use egui_plot::{Line, Plot, PlotPoints};
use sf_app::{AnimationPlayer, FrameState, SeriesColor, TickOutcome, scene};
use sf_study::StudyConfig;

use super::scene_view::series_color;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PlaybackControl {
    Toggle,
    Seek(usize),
}

/// Exponent-sweep animation: raw profile on the left, normalized on the right.
pub struct AnimationView {
    player: Option<AnimationPlayer>,
    frame: Option<FrameState>,
    frame_error: Option<String>,
    last_update: Instant,
}

impl Default for AnimationView {
    fn default() -> Self {
        Self {
            player: None,
            frame: None,
            frame_error: None,
            last_update: Instant::now(),
        }
    }
}

impl AnimationView {
    pub fn set_study(&mut self, study: &StudyConfig) {
        match AnimationPlayer::from_study(study) {
            Ok(player) => {
                self.player = Some(player);
                self.frame_error = None;
            }
            Err(e) => {
                self.player = None;
                self.frame_error = Some(format!("Cannot animate study: {}", e));
            }
        }
        self.frame = None;
        self.last_update = Instant::now();
        self.refresh_frame();
    }

    pub fn clear(&mut self) {
        self.player = None;
        self.frame = None;
        self.frame_error = None;
    }

    /// Render the player's current frame; a failure is kept for display and
    /// playback carries on with the next frame.
    fn refresh_frame(&mut self) {
        let Some(player) = &self.player else {
            return;
        };
        match player.render_current() {
            Ok(frame) => {
                self.frame = Some(frame);
                self.frame_error = None;
            }
            Err(e) => {
                self.frame_error = Some(format!("Frame {}: {}", player.index(), e));
            }
        }
    }

    fn apply(&mut self, control: PlaybackControl) {
        let Some(player) = &mut self.player else {
            return;
        };
        match control {
            PlaybackControl::Toggle => player.toggle(),
            PlaybackControl::Seek(index) => player.seek(index),
        }
        self.last_update = Instant::now();
        self.refresh_frame();
    }

    /// Advance the player by the wall time since the last call and schedule
    /// the next repaint.
    pub fn update_clock(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let elapsed = now - self.last_update;
        self.last_update = now;

        let Some(player) = &mut self.player else {
            return;
        };
        let outcome = player.advance(elapsed);
        let playing = player.is_playing();
        let wait = player.time_to_next_frame();

        if matches!(
            outcome,
            Some(TickOutcome::Advanced(_)) | Some(TickOutcome::Looped)
        ) {
            self.refresh_frame();
        }
        if playing {
            ctx.request_repaint_after(wait);
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(player) = &self.player else {
            match &self.frame_error {
                Some(message) => ui.colored_label(egui::Color32::RED, message),
                None => ui.label("No study loaded"),
            };
            return;
        };

        let mut control = None;
        ui.horizontal(|ui| {
            let label = if player.is_playing() { "Pause" } else { "Play" };
            if ui.button(label).clicked() {
                control = Some(PlaybackControl::Toggle);
            }
            if ui.button("Reset").clicked() {
                control = Some(PlaybackControl::Seek(0));
            }

            ui.separator();
            let mut index = player.index();
            let last = player.len().saturating_sub(1);
            if ui
                .add(egui::Slider::new(&mut index, 0..=last).text("frame"))
                .changed()
            {
                control = Some(PlaybackControl::Seek(index));
            }
            ui.label(format!("{} ms/frame", player.interval().as_millis()));
        });

        // The clock ran before these controls, so the next tick must be scheduled here.
        if let Some(control) = control {
            self.apply(control);
            ui.ctx().request_repaint();
        }

        if let Some(message) = &self.frame_error {
            ui.colored_label(egui::Color32::RED, message);
        }

        let Some(frame) = &self.frame else {
            return;
        };

        ui.heading(&frame.title);
        ui.columns(2, |columns| {
            draw_frame_plot(
                &mut columns[0],
                "animation_raw",
                &frame.raw,
                frame.y_max,
                scene::VELOCITY_LABEL,
            );
            draw_frame_plot(
                &mut columns[1],
                "animation_normalized",
                &frame.normalized,
                frame.y_max_norm,
                scene::NORMALIZED_LABEL,
            );
        });
    }
}

fn draw_frame_plot(
    ui: &mut egui::Ui,
    id_salt: &str,
    points: &[[f64; 2]],
    y_max: f64,
    y_label: &str,
) {
    let plot_points: PlotPoints = points.to_vec().into();
    let line = Line::new(plot_points).color(series_color(SeriesColor::Blue));
    let x_max = points.last().map(|p| p[0]).unwrap_or(1.0);

    // Bounds are recomputed every frame, so user panning is disabled.
    Plot::new(id_salt)
        .x_axis_label(scene::RADIAL_LABEL)
        .y_axis_label(y_label)
        .include_x(0.0)
        .include_x(x_max)
        .include_y(0.0)
        .include_y(y_max)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_study() -> StudyConfig {
        let mut study = StudyConfig::default();
        study.samples = 11;
        study.n_range.count = 4;
        study
    }

    #[test]
    fn play_after_pause_resumes_playback() {
        let mut view = AnimationView::default();
        view.set_study(&small_study());
        view.apply(PlaybackControl::Toggle);
        assert!(!view.player.as_ref().unwrap().is_playing());

        view.apply(PlaybackControl::Toggle);
        let player = view.player.as_ref().unwrap();
        assert!(player.is_playing());
        assert!(player.time_to_next_frame() <= player.interval());
    }

    #[test]
    fn seek_renders_the_target_frame() {
        let mut view = AnimationView::default();
        view.set_study(&small_study());
        view.apply(PlaybackControl::Seek(3));
        assert_eq!(view.frame.as_ref().map(|f| f.index), Some(3));

        view.apply(PlaybackControl::Seek(0));
        assert_eq!(view.frame.as_ref().map(|f| f.index), Some(0));
        assert_eq!(view.frame.as_ref().map(|f| f.n), Some(1.0));
    }

    #[test]
    fn controls_without_a_study_do_nothing() {
        let mut view = AnimationView::default();
        view.apply(PlaybackControl::Toggle);
        assert!(view.player.is_none());
        assert!(view.frame.is_none());
    }
}
