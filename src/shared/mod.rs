//! Gemeinsame Typen zwischen App-, Render- und UI-Layer.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::RenderScene;
