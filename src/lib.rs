// Portfolio - Core Library
// Exposes all modules for use in the TUI, HTML export, API server, and tests

pub mod cards;
pub mod data;
pub mod html;
pub mod tabs;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use cards::{cards_for, Card, CardSource};
pub use data::{Learning, PortfolioData, Profile, Project, Recommendation, Teaching};
pub use html::{render_content, render_page};
pub use tabs::{PageState, Tab};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
