use serde::{Deserialize, Serialize};

// 用户角色
//
// 注意：角色之间没有隐式层级。superadmin 是否能通过 admin 级别的检查，
// 由每一处检查的角色集合逐一写明，绝不自动继承。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Teacher,    // 教师
    Admin,      // 管理员
    SuperAdmin, // 超级管理员
}

impl UserRole {
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";
    pub const SUPERADMIN: &'static str = "superadmin";

    /// 审批权限集合（admin 与 superadmin）
    pub fn approver_roles() -> &'static [UserRole] {
        &[Self::Admin, Self::SuperAdmin]
    }
    /// 用户管理权限集合（仅 superadmin）
    pub fn superadmin_roles() -> &'static [UserRole] {
        &[Self::SuperAdmin]
    }
    pub fn all_roles() -> &'static [UserRole] {
        &[Self::Teacher, Self::Admin, Self::SuperAdmin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::SUPERADMIN => Ok(UserRole::SuperAdmin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: teacher, admin, superadmin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::SuperAdmin => write!(f, "{}", UserRole::SUPERADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            "superadmin" => Ok(UserRole::SuperAdmin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 服务端下发的权限标志
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionFlags {
    #[serde(default)]
    pub can_manage_users: bool,
    #[serde(default)]
    pub can_approve_portfolios: bool,
    #[serde(default)]
    pub can_manage_all_portfolios: bool,
}

// 当前认证身份
//
// 认证状态检查成功后填充；登出或认证失败时清空。
// 页面会话期间保存在单个 SessionProvider 中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub hemis_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub permissions: PermissionFlags,
}

impl Identity {
    /// 显示名：优先 full_name，回退 username
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

// 用户管理列表项（superadmin 专用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub department: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        let role: UserRole = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, UserRole::SuperAdmin);
        assert_eq!(role.to_string(), "superadmin");
    }

    #[test]
    fn test_role_rejects_unknown() {
        let res: Result<UserRole, _> = serde_json::from_str("\"student\"");
        assert!(res.is_err());
    }

    #[test]
    fn test_role_sets_are_explicit() {
        assert!(UserRole::approver_roles().contains(&UserRole::Admin));
        assert!(UserRole::approver_roles().contains(&UserRole::SuperAdmin));
        assert!(!UserRole::approver_roles().contains(&UserRole::Teacher));
        assert_eq!(UserRole::superadmin_roles(), &[UserRole::SuperAdmin]);
    }
}
