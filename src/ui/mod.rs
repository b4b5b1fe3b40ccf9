//! Presentation: drawing collaborators, the frame renderer and the terminal
//! backend.

pub mod renderer;
pub mod scene;
pub mod surface;
pub mod terminal;

pub use renderer::render_session;
pub use scene::{Scene, SceneView, Viewport};
pub use surface::{DrawCommand, RenderSurface, TextService};
pub use terminal::{finish, TerminalSurface};
