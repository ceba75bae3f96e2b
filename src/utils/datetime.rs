//! 日期时间展示工具
//!
//! 产品全站使用 DD.MM.YYYY 格式，相对时间文案为乌兹别克语。

use chrono::{DateTime, Datelike, Utc};

use crate::errors::{ProftError, Result};

/// DD.MM.YYYY
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// DD.MM.YYYY HH:MM
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// DD.MM（年内简写）
pub fn format_short_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m").to_string()
}

/// 解析后端日期字符串（RFC 3339）
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ProftError::date_parse(format!("'{s}': {e}")))
}

/// 相对时间文案（"hozirgina", "5 daqiqa oldin", ...），
/// 超过一周回退为完整日期
pub fn relative_time(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(dt);
    let seconds = delta.num_seconds();

    if seconds < 0 {
        return format_date(dt);
    }
    if seconds < 60 {
        return "hozirgina".to_string();
    }
    let minutes = delta.num_minutes();
    if minutes < 60 {
        return format!("{minutes} daqiqa oldin");
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return format!("{hours} soat oldin");
    }
    let days = delta.num_days();
    if days < 7 {
        return format!("{days} kun oldin");
    }
    format_date(dt)
}

pub fn is_today(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    dt.date_naive() == now.date_naive()
}

pub fn is_this_week(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    dt.iso_week() == now.iso_week() && dt.year() == now.year()
}

/// 截止时间是否已过（展示层用；任务的 overdue 状态以服务端为准）
pub fn is_past_deadline(deadline: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    deadline < now
}

/// 距截止还剩的天数，已过期为 0
pub fn days_until(deadline: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    deadline.signed_duration_since(now).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_display_formats() {
        let dt = at(2025, 3, 7, 14);
        assert_eq!(format_date(&dt), "07.03.2025");
        assert_eq!(format_date_time(&dt), "07.03.2025 14:00");
        assert_eq!(format_short_date(&dt), "07.03");
    }

    #[test]
    fn test_parse_round_trip() {
        let dt = parse_date("2025-03-07T14:00:00Z").unwrap();
        assert_eq!(format_date(&dt), "07.03.2025");
        assert!(parse_date("07.03.2025").is_err());
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = at(2025, 3, 7, 14);
        assert_eq!(relative_time(&at(2025, 3, 7, 14), &now), "hozirgina");
        assert_eq!(
            relative_time(&(now - chrono::TimeDelta::minutes(5)), &now),
            "5 daqiqa oldin"
        );
        assert_eq!(
            relative_time(&(now - chrono::TimeDelta::hours(3)), &now),
            "3 soat oldin"
        );
        assert_eq!(
            relative_time(&(now - chrono::TimeDelta::days(2)), &now),
            "2 kun oldin"
        );
        // 超过一周回退为完整日期
        assert_eq!(
            relative_time(&(now - chrono::TimeDelta::days(10)), &now),
            "25.02.2025"
        );
    }

    #[test]
    fn test_week_and_day_checks() {
        let now = at(2025, 3, 7, 14); // 星期五
        assert!(is_today(&at(2025, 3, 7, 2), &now));
        assert!(!is_today(&at(2025, 3, 6, 23), &now));
        assert!(is_this_week(&at(2025, 3, 3, 9), &now)); // 同一周的星期一
        assert!(!is_this_week(&at(2025, 3, 10, 9), &now)); // 下周一
    }

    #[test]
    fn test_deadline_helpers() {
        let now = at(2025, 3, 7, 14);
        assert!(is_past_deadline(&at(2025, 3, 6, 0), &now));
        assert!(!is_past_deadline(&at(2025, 3, 8, 0), &now));
        assert_eq!(days_until(&at(2025, 3, 10, 14), &now), 3);
        assert_eq!(days_until(&at(2025, 3, 1, 0), &now), 0);
    }
}
