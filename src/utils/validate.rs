use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

// 乌兹别克斯坦手机号：+998 后跟 9 位数字，允许空格和连字符分隔
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+998[\s-]?\d{2}[\s-]?\d{3}[\s-]?\d{2}[\s-]?\d{2}$")
        .expect("Invalid phone regex"));

/// 必填校验
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Bu maydon to'ldirilishi shart");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email manzili noto'g'ri");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Telefon raqami noto'g'ri (+998 XX XXX XX XX)");
    }
    Ok(())
}

/// 口令策略：至少 8 个字符，含大写、小写和数字各一
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Parol kamida 8 ta belgidan iborat bo'lishi kerak");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Parolda kamida bitta katta harf bo'lishi kerak");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Parolda kamida bitta kichik harf bo'lishi kerak");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Parolda kamida bitta raqam bo'lishi kerak");
    }
    Ok(())
}

/// 标题长度校验：3 <= x <= 200（按字符计，不按字节）
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let len = title.trim().chars().count();
    if len < 3 {
        return Err("Sarlavha kamida 3 ta belgidan iborat bo'lishi kerak");
    }
    if len > 200 {
        return Err("Sarlavha 200 ta belgidan oshmasligi kerak");
    }
    Ok(())
}

/// 最小长度校验（按字符计）
pub fn validate_min_length(value: &str, min: usize) -> Result<(), &'static str> {
    if value.chars().count() < min {
        return Err("Qiymat juda qisqa");
    }
    Ok(())
}

/// 最大长度校验（按字符计）
pub fn validate_max_length(value: &str, max: usize) -> Result<(), &'static str> {
    if value.chars().count() > max {
        return Err("Qiymat juda uzun");
    }
    Ok(())
}

/// 分值范围校验：min_score 不得超过 default_score
pub fn validate_score_range(min_score: f64, default_score: f64) -> Result<(), &'static str> {
    if min_score < 0.0 || default_score < 0.0 {
        return Err("Ball manfiy bo'lishi mumkin emas");
    }
    if min_score > default_score {
        return Err("Minimal ball standart balldan katta bo'lishi mumkin emas");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("qiymat").is_ok());
        assert!(validate_required("   ").is_err());
        assert!(validate_required("").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("teacher@example.com").is_ok());
        assert!(validate_email("teacher@edu.uz").is_ok());
        assert!(validate_email("teacher@").is_err());
        assert!(validate_email("teacher.example.com").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+998901234567").is_ok());
        assert!(validate_phone("+998 90 123 45 67").is_ok());
        assert!(validate_phone("+998-90-123-45-67").is_ok());
        assert!(validate_phone("998901234567").is_err());
        assert!(validate_phone("+99890123456").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Maktab2024").is_ok());
        assert!(validate_password("qisqa1A").is_err());
        assert!(validate_password("faqatkichik1").is_err());
        assert!(validate_password("FAQATKATTA1").is_err());
        assert!(validate_password("Raqamsizparol").is_err());
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        // 西里尔字母每个 2 字节
        assert!(validate_title("Иш режа").is_ok());
        assert!(validate_title("ab").is_err());
        assert!(validate_title(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_score_range() {
        assert!(validate_score_range(5.0, 10.0).is_ok());
        assert!(validate_score_range(10.0, 5.0).is_err());
        assert!(validate_score_range(-1.0, 5.0).is_err());
    }
}
