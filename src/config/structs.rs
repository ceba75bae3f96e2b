use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String, // 后端 API 源（启动时解析一次，之后不可变）
    pub timeout: u64,     // 请求超时 (毫秒)
    pub dev_bypass: bool, // 开发旁路：阻断所有出站请求，改用 fixture 数据
}

/// 客户端界面相关配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme_file: String,      // 主题偏好持久化文件
    pub toast_duration_ms: u64,  // 通知默认存活时长
}

// Default 与 load() 的内置默认值保持一致
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                system_name: "Proft".into(),
                environment: "development".into(),
                log_level: "info".into(),
            },
            api: ApiConfig {
                base_url: "http://localhost:8000".into(),
                timeout: 30_000,
                dev_bypass: false,
            },
            ui: UiConfig {
                theme_file: ".proft-theme".into(),
                toast_duration_ms: 3_000,
            },
        }
    }
}
