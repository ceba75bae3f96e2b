//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 本层没有任何致命错误：每个失败最终要么变成一次重定向信号，
//! 要么变成一条通知，页面会话保持可交互。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_proft_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ProftError {
            $($variant(String),)*
        }

        impl ProftError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ProftError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ProftError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ProftError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ProftError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ProftError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_proft_errors! {
    Configuration("E001", "Configuration Error"),
    Network("E002", "Network Error"),
    Offline("E003", "Network Offline"),
    Authentication("E004", "Authentication Error"),
    Authorization("E005", "Authorization Error"),
    NotFound("E006", "Resource Not Found"),
    Validation("E007", "Validation Error"),
    Server("E008", "Server Error"),
    Serialization("E009", "Serialization Error"),
    FileOperation("E010", "File Operation Error"),
    DateParse("E011", "Date Parse Error"),
    Fixture("E012", "Fixture Not Found"),
}

impl ProftError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ProftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ProftError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for ProftError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ProftError::Offline(err.to_string())
        } else if err.is_decode() {
            ProftError::Serialization(err.to_string())
        } else {
            ProftError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ProftError {
    fn from(err: std::io::Error) -> Self {
        ProftError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ProftError {
    fn from(err: serde_json::Error) -> Self {
        ProftError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ProftError {
    fn from(err: chrono::ParseError) -> Self {
        ProftError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ProftError::configuration("test").code(), "E001");
        assert_eq!(ProftError::authentication("test").code(), "E004");
        assert_eq!(ProftError::validation("test").code(), "E007");
        assert_eq!(ProftError::fixture("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ProftError::authorization("test").error_type(),
            "Authorization Error"
        );
        assert_eq!(
            ProftError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ProftError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = ProftError::offline("connection refused");
        let formatted = err.format_simple();
        assert!(formatted.contains("Network Offline"));
        assert!(formatted.contains("connection refused"));
    }
}
