//! Browser-independent logic: sticker decoding and loading, reveal state, theme settings

#[cfg(feature = "ssr")]
pub mod config;
pub mod reveal;
pub mod sticker;
#[cfg(test)]
mod tests;
pub mod theme;
