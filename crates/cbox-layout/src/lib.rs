pub mod constants;
pub mod layout;
mod options;
pub mod render;
mod stats;
pub mod template;
mod types;

pub use options::*;
pub use stats::calculate_statistics;
pub use template::{Template, generate_template, render_template, save_template};
pub use types::*;
