//! 零散展示工具

/// 文件大小人类可读格式（1024 进制，一位小数）
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// 文件名的扩展名（小写，无点）
pub fn file_extension(name: &str) -> Option<String> {
    let ext = name.rsplit_once('.')?.1;
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_image(name: &str) -> bool {
    matches!(
        file_extension(name).as_deref(),
        Some("jpg" | "jpeg" | "png" | "gif" | "webp" | "svg")
    )
}

pub fn is_document(name: &str) -> bool {
    matches!(
        file_extension(name).as_deref(),
        Some("pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "txt")
    )
}

/// 按字符截断，截断时追加省略号
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// 首字母大写，其余不动
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("hisobot.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("arxiv.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension("nuqta."), None);
    }

    #[test]
    fn test_file_kind_checks() {
        assert!(is_image("rasm.png"));
        assert!(is_document("hisobot.docx"));
        assert!(!is_image("hisobot.docx"));
        assert!(!is_document("video.mp4"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("qisqa", 10), "qisqa");
        assert_eq!(truncate("juda uzun sarlavha", 9), "juda uzun...");
        // 多字节字符不被劈开
        assert_eq!(truncate("Ўқитувчи портфолиоси", 8), "Ўқитувчи...");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("portfolio"), "Portfolio");
        assert_eq!(capitalize(""), "");
    }
}
