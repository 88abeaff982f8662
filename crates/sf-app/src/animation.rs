//! Exponent-sweep animation.
//!
//! [`AnimationPlan`] fixes the exponent schedule and radial grid once,
//! [`render_frame`] turns one frame index into a [`FrameState`] without side
//! effects, and [`AnimationPlayer`] owns the only mutable part: which frame is
//! current and when the next one is due.

use std::time::Duration;

use sf_core::{Real, finite_max};
use sf_profile::PowerLawParams;
use sf_study::{AnimationDef, PipeDef, StudyConfig};

use crate::error::{AppError, AppResult};
use crate::scene::Y_HEADROOM;
use crate::study_service::radial_grid;

/// Precomputed inputs shared by all frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlan {
    pipe: PipeDef,
    exponents: Vec<Real>,
    grid: Vec<Real>,
}

impl AnimationPlan {
    pub fn from_study(study: &StudyConfig) -> AppResult<Self> {
        let exponents = study.n_range.to_sweep()?.generate_points();
        Ok(Self {
            pipe: study.pipe.clone(),
            exponents,
            grid: radial_grid(study),
        })
    }

    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    pub fn exponents(&self) -> &[Real] {
        &self.exponents
    }

    pub fn grid(&self) -> &[Real] {
        &self.grid
    }

    pub fn radius(&self) -> Real {
        self.pipe.radius
    }
}

/// Everything needed to draw one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub index: usize,
    pub n: Real,
    pub title: String,
    /// `[r, v]`
    pub raw: Vec<[Real; 2]>,
    /// `[r, v/v0]`
    pub normalized: Vec<[Real; 2]>,
    /// Upper y-limit of the raw plot, rescaled every frame
    pub y_max: Real,
    /// Upper y-limit of the normalized plot, fixed
    pub y_max_norm: Real,
}

/// Render frame `index` of `plan`.
pub fn render_frame(plan: &AnimationPlan, index: usize) -> AppResult<FrameState> {
    let n = *plan
        .exponents
        .get(index)
        .ok_or(AppError::FrameOutOfRange {
            index,
            len: plan.len(),
        })?;

    let params = PowerLawParams::new(plan.pipe.radius, plan.pipe.beta, plan.pipe.mu0, n)?;
    let curve = params.sample(&plan.grid)?;

    // Flat or non-positive profiles keep a unit axis rather than a zero-height one.
    let y_max = match finite_max(&curve.v) {
        Some(max) if max > 0.0 => max * Y_HEADROOM,
        _ => 1.0,
    };

    tracing::debug!(index, n, y_max, "rendered frame");

    Ok(FrameState {
        index,
        n,
        title: format!("n = {n:.3}"),
        raw: curve.points(),
        normalized: curve.normalized_points(),
        y_max,
        y_max_norm: Y_HEADROOM,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to this frame index
    Advanced(usize),
    /// Wrapped from the last frame back to the first
    Looped,
    /// Reached the last frame of a non-looping animation
    Finished,
    /// Playback is paused; nothing changed
    Paused,
}

/// Timer-driven frame cursor.
///
/// The host calls [`AnimationPlayer::advance`] with the wall time since its
/// previous call; at most one frame step happens per call, in increasing index
/// order.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    plan: AnimationPlan,
    index: usize,
    interval: Duration,
    looped: bool,
    playing: bool,
    finished: bool,
    accumulated: Duration,
}

impl AnimationPlayer {
    pub fn new(plan: AnimationPlan, settings: &AnimationDef) -> Self {
        Self {
            plan,
            index: 0,
            interval: Duration::from_millis(settings.interval_ms.max(1)),
            looped: settings.looped,
            playing: true,
            finished: false,
            accumulated: Duration::ZERO,
        }
    }

    pub fn from_study(study: &StudyConfig) -> AppResult<Self> {
        Ok(Self::new(AnimationPlan::from_study(study)?, &study.animation))
    }

    pub fn plan(&self) -> &AnimationPlan {
        &self.plan
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_playing(&self) -> bool {
        self.playing && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn play(&mut self) {
        if self.finished {
            self.reset();
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first frame.
    pub fn reset(&mut self) {
        self.index = 0;
        self.finished = false;
        self.accumulated = Duration::ZERO;
    }

    /// Jump to a frame, clamped to the plan.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.len().saturating_sub(1));
        self.finished = false;
        self.accumulated = Duration::ZERO;
    }

    /// Step one frame forward.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Paused;
        }

        let next = self.index + 1;
        if next < self.len() {
            self.index = next;
            TickOutcome::Advanced(next)
        } else if self.looped {
            self.index = 0;
            TickOutcome::Looped
        } else {
            self.finished = true;
            TickOutcome::Finished
        }
    }

    /// Feed elapsed wall time; returns the tick outcome when a frame was due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        if !self.is_playing() {
            return None;
        }

        self.accumulated += elapsed;
        if self.accumulated < self.interval {
            return None;
        }

        // One step per call; a surplus of a whole interval or more is dropped.
        let surplus = self.accumulated - self.interval;
        self.accumulated = if surplus < self.interval {
            surplus
        } else {
            Duration::ZERO
        };
        Some(self.tick())
    }

    /// Time left until the next frame is due.
    pub fn time_to_next_frame(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    pub fn render_current(&self) -> AppResult<FrameState> {
        render_frame(&self.plan, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_study() -> StudyConfig {
        let mut study = StudyConfig::default();
        study.samples = 11;
        study.n_range.count = 4;
        study.n_range.start = 1.0;
        study.n_range.end = 0.25;
        study
    }

    #[test]
    fn default_plan_has_one_hundred_descending_exponents() {
        let plan = AnimationPlan::from_study(&StudyConfig::default()).unwrap();
        assert_eq!(plan.len(), 100);
        assert_eq!(plan.exponents()[0], 1.0);
        assert_eq!(plan.exponents()[99], 0.01);
        assert!(plan.exponents().windows(2).all(|w| w[0] > w[1]));
        assert_eq!(plan.grid().len(), 1000);
    }

    #[test]
    fn first_frame_is_newtonian() {
        let plan = AnimationPlan::from_study(&small_study()).unwrap();
        let frame = render_frame(&plan, 0).unwrap();
        assert_eq!(frame.title, "n = 1.000");
        assert_eq!(frame.raw[0], [0.0, 0.25]);
        assert!((frame.y_max - 0.275).abs() < 1e-15);
        assert_eq!(frame.y_max_norm, 1.1);
        assert_eq!(frame.normalized[0][1], 1.0);
        assert_eq!(frame.normalized[10], [1.0, 0.0]);
    }

    #[test]
    fn raw_axis_rescales_each_frame() {
        let plan = AnimationPlan::from_study(&small_study()).unwrap();
        let y: Vec<Real> = (0..plan.len())
            .map(|i| render_frame(&plan, i).unwrap().y_max)
            .collect();
        // beta/(2 mu0) = 0.5 < 1, so the centerline speed falls with n
        assert!(y.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn out_of_range_frame_is_an_error() {
        let plan = AnimationPlan::from_study(&small_study()).unwrap();
        let err = render_frame(&plan, 4).unwrap_err();
        assert!(matches!(err, AppError::FrameOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn zero_gradient_frame_falls_back_to_unit_axis() {
        let mut study = small_study();
        study.pipe.beta = 0.0;
        let plan = AnimationPlan::from_study(&study).unwrap();
        let frame = render_frame(&plan, 1).unwrap();
        assert_eq!(frame.y_max, 1.0);
        assert!(frame.normalized.iter().all(|p| p[1] == 0.0));
    }

    #[test]
    fn bad_frame_does_not_poison_the_rest() {
        let mut study = small_study();
        // 1/n is integral for n = 1 and n = 0.25 but not for 0.75 or 0.5
        study.pipe.beta = -0.02;
        let plan = AnimationPlan::from_study(&study).unwrap();
        assert!(render_frame(&plan, 0).is_ok());
        assert!(matches!(render_frame(&plan, 1), Err(AppError::Profile(_))));
        assert!(render_frame(&plan, 3).is_ok());
    }

    #[test]
    fn player_steps_in_order_and_loops() {
        let mut player = AnimationPlayer::from_study(&small_study()).unwrap();
        assert_eq!(player.index(), 0);
        assert_eq!(player.tick(), TickOutcome::Advanced(1));
        assert_eq!(player.tick(), TickOutcome::Advanced(2));
        assert_eq!(player.tick(), TickOutcome::Advanced(3));
        assert_eq!(player.tick(), TickOutcome::Looped);
        assert_eq!(player.index(), 0);
    }

    #[test]
    fn non_looping_player_finishes_on_last_frame() {
        let mut study = small_study();
        study.animation.looped = false;
        let mut player = AnimationPlayer::from_study(&study).unwrap();
        for _ in 0..3 {
            player.tick();
        }
        assert_eq!(player.tick(), TickOutcome::Finished);
        assert_eq!(player.index(), 3);
        assert!(player.is_finished());
        assert_eq!(player.tick(), TickOutcome::Paused);

        player.play();
        assert_eq!(player.index(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn advance_waits_for_the_interval() {
        let mut player = AnimationPlayer::from_study(&small_study()).unwrap();
        assert_eq!(player.interval(), Duration::from_millis(100));
        assert_eq!(player.advance(Duration::from_millis(60)), None);
        assert_eq!(
            player.advance(Duration::from_millis(60)),
            Some(TickOutcome::Advanced(1))
        );
        assert_eq!(player.time_to_next_frame(), Duration::from_millis(80));
    }

    #[test]
    fn long_stall_advances_only_one_frame() {
        let mut player = AnimationPlayer::from_study(&small_study()).unwrap();
        assert_eq!(
            player.advance(Duration::from_secs(5)),
            Some(TickOutcome::Advanced(1))
        );
        assert_eq!(player.index(), 1);
    }

    #[test]
    fn paused_player_ignores_time() {
        let mut player = AnimationPlayer::from_study(&small_study()).unwrap();
        player.pause();
        assert_eq!(player.advance(Duration::from_secs(1)), None);
        assert_eq!(player.tick(), TickOutcome::Paused);
        player.toggle();
        assert!(player.is_playing());
    }

    #[test]
    fn seek_clamps_and_renders() {
        let mut player = AnimationPlayer::from_study(&small_study()).unwrap();
        player.seek(99);
        assert_eq!(player.index(), 3);
        let frame = player.render_current().unwrap();
        assert_eq!(frame.index, 3);
        assert_eq!(frame.n, 0.25);
    }
}
