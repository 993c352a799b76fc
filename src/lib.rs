#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod graph;
pub mod layout;
pub mod layout_dump;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use graph::GraphDescription;
pub use layout::{Layout, LayoutError, compute_layout};
pub use theme::Theme;
