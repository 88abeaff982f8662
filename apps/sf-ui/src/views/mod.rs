pub mod animation_view;
pub mod scene_view;

pub use animation_view::AnimationView;
pub use scene_view::SceneView;
