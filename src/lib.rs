#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, PageConfig, load_config};
pub use ir::{ChartModel, Point};
pub use layout::{Layout, compute_layout};
pub use parser::parse;
pub use render::render_drawio;
pub use theme::Theme;
