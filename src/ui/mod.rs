pub mod content;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod sticker;
pub mod theme;

pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage};
pub use reveal::RevealOnView;
pub use sticker::StickerPlayer;
pub use theme::{ThemeContext, ThemeToggle, provide_theme_context, use_theme_context};
