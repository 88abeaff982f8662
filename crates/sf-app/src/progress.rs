#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    CheckingCache,
    LoadingCachedRender,
    RenderingFrames,
    SavingRender,
    Completed,
}

impl ExportStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckingCache => "checking cache",
            Self::LoadingCachedRender => "loading cached render",
            Self::RenderingFrames => "rendering frames",
            Self::SavingRender => "saving render",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportProgressEvent {
    pub stage: ExportStage,
    pub elapsed_wall_s: f64,
    /// `(frames done, total frames)` while rendering
    pub frames: Option<(usize, usize)>,
    pub message: Option<String>,
}

impl ExportProgressEvent {
    pub fn fraction_complete(&self) -> Option<f64> {
        self.frames
            .filter(|(_, total)| *total > 0)
            .map(|(done, total)| done as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_from_frame_counts() {
        let event = ExportProgressEvent {
            stage: ExportStage::RenderingFrames,
            elapsed_wall_s: 0.0,
            frames: Some((25, 100)),
            message: None,
        };
        assert_eq!(event.fraction_complete(), Some(0.25));
        assert_eq!(event.stage.label(), "rendering frames");

        let idle = ExportProgressEvent {
            frames: None,
            ..event
        };
        assert_eq!(idle.fraction_complete(), None);
    }
}
