//! 主题偏好 store
//!
//! light/dark 二值偏好，持久化到配置指定的文件，启动时读回。

use std::path::PathBuf;
use std::sync::RwLock;

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

pub struct ThemeStore {
    file: PathBuf,
    current: RwLock<Theme>,
}

impl ThemeStore {
    /// 读取持久化的偏好；文件缺失或内容无法识别时回退 light
    pub fn new(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let current = std::fs::read_to_string(&file)
            .ok()
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default();
        Self {
            file,
            current: RwLock::new(current),
        }
    }

    pub fn current(&self) -> Theme {
        *self.current.read().unwrap()
    }

    pub fn is_dark(&self) -> bool {
        self.current() == Theme::Dark
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        *self.current.write().unwrap() = theme;
        std::fs::write(&self.file, theme.as_str())?;
        Ok(())
    }

    pub fn toggle(&self) -> Result<Theme> {
        let next = match self.current() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("proft-theme-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_defaults_to_light_without_file() {
        let store = ThemeStore::new(temp_file("missing"));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let path = temp_file("toggle");
        let store = ThemeStore::new(&path);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);

        // 新实例从文件读回
        let reloaded = ThemeStore::new(&path);
        assert!(reloaded.is_dark());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_garbage_content_falls_back() {
        let path = temp_file("garbage");
        std::fs::write(&path, "blue").unwrap();
        let store = ThemeStore::new(&path);
        assert_eq!(store.current(), Theme::Light);
        std::fs::remove_file(&path).ok();
    }
}
