mod render;
mod walk;

pub use render::render_lines;
pub use walk::walk_root;
