//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::PathBuf;

use crate::core::sticker::{AnimationData, StickerError, decode_sticker};

/// Directory served at the site root when `PUBLIC_DIR` is unset.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Hero sticker path when `HERO_STICKER` is unset.
pub const DEFAULT_HERO_STICKER: &str = "/animations/AnimatedSticker.tgs";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding static assets (stickers, images, icons)
    /// Example: ./public
    pub public_dir: Option<String>,

    /// Site-relative path of the hero sticker
    /// Example: /animations/AnimatedSticker.tgs
    pub hero_sticker: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            public_dir: non_empty(std::env::var("PUBLIC_DIR").ok()),
            hero_sticker: non_empty(std::env::var("HERO_STICKER").ok()),
        }
    }

    pub fn public_dir(&self) -> &str {
        self.public_dir.as_deref().unwrap_or(DEFAULT_PUBLIC_DIR)
    }

    pub fn hero_sticker(&self) -> &str {
        self.hero_sticker.as_deref().unwrap_or(DEFAULT_HERO_STICKER)
    }

    /// On-disk location of a file served at `site_path`.
    pub fn public_file(&self, site_path: &str) -> PathBuf {
        PathBuf::from(self.public_dir()).join(site_path.trim_start_matches('/'))
    }

    /// On-disk location of the hero sticker.
    pub fn hero_sticker_file(&self) -> PathBuf {
        self.public_file(self.hero_sticker())
    }

    /// Whether a file served at `site_path` exists under the public directory.
    pub async fn has_public_file(&self, site_path: &str) -> bool {
        tokio::fs::try_exists(self.public_file(site_path))
            .await
            .unwrap_or(false)
    }

    /// Read and decode the hero sticker so a broken asset shows up in the
    /// server log rather than only in a visitor's console.
    pub async fn check_hero_sticker(&self) -> Result<AnimationData, StickerError> {
        let path = self.hero_sticker_file();
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| StickerError::Fetch(format!("{}: {}", path.display(), e)))?;
        decode_sticker(&bytes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sticker::fixtures::sticker_bytes;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            public_dir: Some("/srv/site".to_string()),
            hero_sticker: Some("/stickers/parrot.tgs".to_string()),
        };

        assert_eq!(config.public_dir(), "/srv/site");
        assert_eq!(config.hero_sticker(), "/stickers/parrot.tgs");
        assert_eq!(
            config.hero_sticker_file(),
            PathBuf::from("/srv/site/stickers/parrot.tgs")
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config {
            public_dir: None,
            hero_sticker: None,
        };

        assert_eq!(config.public_dir(), DEFAULT_PUBLIC_DIR);
        assert_eq!(config.hero_sticker(), DEFAULT_HERO_STICKER);
        assert_eq!(
            config.hero_sticker_file(),
            PathBuf::from("public/animations/AnimatedSticker.tgs")
        );
    }

    #[test]
    fn test_default_sticker_matches_page() {
        assert_eq!(DEFAULT_HERO_STICKER, crate::ui::content::HERO_STICKER_PATH);
    }

    #[test]
    fn test_non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }

    #[tokio::test]
    async fn test_check_hero_sticker_reads_and_decodes() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        tokio::fs::create_dir_all(dir.join("animations")).await.unwrap();
        tokio::fs::write(dir.join("animations/AnimatedSticker.tgs"), sticker_bytes())
            .await
            .unwrap();

        let config = Config {
            public_dir: Some(dir.to_string_lossy().into_owned()),
            hero_sticker: None,
        };
        let animation = config.check_hero_sticker().await.unwrap();
        assert_eq!(animation.width, 512.0);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_has_public_file() {
        let dir = std::env::temp_dir().join(format!("folio-public-{}", std::process::id()));
        tokio::fs::create_dir_all(dir.join("vendor")).await.unwrap();
        tokio::fs::write(dir.join("vendor/lottie.min.js"), b"var lottie = {};")
            .await
            .unwrap();

        let config = Config {
            public_dir: Some(dir.to_string_lossy().into_owned()),
            hero_sticker: None,
        };
        assert!(config.has_public_file(crate::ui::content::LOTTIE_SCRIPT_PATH).await);
        assert!(!config.has_public_file("/vendor/missing.js").await);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_check_hero_sticker_missing_file() {
        let config = Config {
            public_dir: Some("/definitely/not/here".to_string()),
            hero_sticker: None,
        };
        let result = config.check_hero_sticker().await;
        assert!(matches!(result, Err(StickerError::Fetch(_))));
    }
}
