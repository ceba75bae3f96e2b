//! 纯函数权限判定
//!
//! 所有判定都是同步、无副作用的谓词，输入为 (当前身份, 可选资源)。
//! 身份缺失时一律返回 false（fail-closed），绝不 panic。
//!
//! 角色集合逐检查写明：superadmin 能否通过 admin 级检查，
//! 取决于该检查的集合里是否列出了 superadmin，而不是层级继承。

use crate::models::portfolios::entities::{Portfolio, PortfolioStatus};
use crate::models::users::entities::{Identity, UserRole};

/// 角色集合成员测试。空集合表示无角色要求，始终放行。
pub fn has_role(identity: Option<&Identity>, required: &[UserRole]) -> bool {
    if required.is_empty() {
        return true;
    }
    match identity {
        Some(id) => required.contains(&id.role),
        None => false,
    }
}

pub fn is_super_admin(identity: Option<&Identity>) -> bool {
    matches!(identity, Some(id) if id.role == UserRole::SuperAdmin)
}

pub fn is_teacher(identity: Option<&Identity>) -> bool {
    matches!(identity, Some(id) if id.role == UserRole::Teacher)
}

/// admin 级访问：admin 或 superadmin（此处集合明确包含两者）
pub fn has_admin_access(identity: Option<&Identity>) -> bool {
    has_role(identity, UserRole::approver_roles())
}

/// 审批档案：admin 或 superadmin
pub fn can_approve(identity: Option<&Identity>) -> bool {
    has_admin_access(identity)
}

/// 用户管理：仅 superadmin
pub fn can_manage_users(identity: Option<&Identity>) -> bool {
    has_role(identity, UserRole::superadmin_roles())
}

/// 查看报表：仅 superadmin
pub fn can_view_reports(identity: Option<&Identity>) -> bool {
    has_role(identity, UserRole::superadmin_roles())
}

/// 所有权测试：owner-reference 与当前身份 id 相等
pub fn owns_portfolio(identity: Option<&Identity>, portfolio: &Portfolio) -> bool {
    match identity {
        Some(id) => portfolio.teacher.id == id.id,
        None => false,
    }
}

/// 编辑档案：superadmin 无条件；教师须是所有者且状态 ∈ {pending, rejected}
pub fn can_edit_portfolio(identity: Option<&Identity>, portfolio: &Portfolio) -> bool {
    if is_super_admin(identity) {
        return true;
    }
    if is_teacher(identity) && owns_portfolio(identity, portfolio) {
        return matches!(
            portfolio.status,
            PortfolioStatus::Pending | PortfolioStatus::Rejected
        );
    }
    false
}

/// 删除档案：superadmin 无条件；教师须是所有者且状态恰为 pending
pub fn can_delete_portfolio(identity: Option<&Identity>, portfolio: &Portfolio) -> bool {
    if is_super_admin(identity) {
        return true;
    }
    if is_teacher(identity) && owns_portfolio(identity, portfolio) {
        return portfolio.status == PortfolioStatus::Pending;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolios::entities::PortfolioOwner;

    fn identity(id: i64, role: UserRole) -> Identity {
        Identity {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            first_name: String::new(),
            last_name: String::new(),
            full_name: String::new(),
            role,
            hemis_id: None,
            department: None,
            position: None,
            permissions: Default::default(),
        }
    }

    fn portfolio(owner_id: i64, status: PortfolioStatus) -> Portfolio {
        Portfolio {
            id: 10,
            title: "Ilmiy maqola".into(),
            description: String::new(),
            category: "research".into(),
            status,
            is_public: false,
            teacher: PortfolioOwner {
                id: owner_id,
                full_name: String::new(),
                department: None,
            },
            attachments: Vec::new(),
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_has_role_empty_set_permits() {
        assert!(has_role(None, &[]));
        assert!(has_role(Some(&identity(1, UserRole::Teacher)), &[]));
    }

    #[test]
    fn test_missing_identity_fails_closed() {
        let p = portfolio(1, PortfolioStatus::Pending);
        assert!(!has_role(None, &[UserRole::Teacher]));
        assert!(!can_approve(None));
        assert!(!can_manage_users(None));
        assert!(!can_edit_portfolio(None, &p));
        assert!(!can_delete_portfolio(None, &p));
    }

    #[test]
    fn test_capability_role_sets() {
        let teacher = identity(1, UserRole::Teacher);
        let admin = identity(2, UserRole::Admin);
        let superadmin = identity(3, UserRole::SuperAdmin);

        assert!(!can_approve(Some(&teacher)));
        assert!(can_approve(Some(&admin)));
        assert!(can_approve(Some(&superadmin)));

        // admin 不在 superadmin 集合里，不能管理用户或查看报表
        assert!(!can_manage_users(Some(&admin)));
        assert!(can_manage_users(Some(&superadmin)));
        assert!(!can_view_reports(Some(&admin)));
        assert!(can_view_reports(Some(&superadmin)));
    }

    #[test]
    fn test_edit_approved_denied_except_superadmin() {
        let p = portfolio(1, PortfolioStatus::Approved);
        assert!(!can_edit_portfolio(Some(&identity(1, UserRole::Teacher)), &p));
        assert!(!can_edit_portfolio(Some(&identity(2, UserRole::Admin)), &p));
        assert!(can_edit_portfolio(Some(&identity(3, UserRole::SuperAdmin)), &p));
    }

    #[test]
    fn test_owner_rejected_can_edit_not_delete() {
        let owner = identity(1, UserRole::Teacher);
        let p = portfolio(1, PortfolioStatus::Rejected);
        assert!(can_edit_portfolio(Some(&owner), &p));
        assert!(!can_delete_portfolio(Some(&owner), &p));
    }

    #[test]
    fn test_delete_only_pending_for_owner() {
        let owner = identity(1, UserRole::Teacher);
        assert!(can_delete_portfolio(
            Some(&owner),
            &portfolio(1, PortfolioStatus::Pending)
        ));
        assert!(!can_delete_portfolio(
            Some(&owner),
            &portfolio(1, PortfolioStatus::Approved)
        ));
        assert!(!can_delete_portfolio(
            Some(&owner),
            &portfolio(1, PortfolioStatus::Rejected)
        ));
    }

    #[test]
    fn test_non_owner_teacher_denied() {
        let other = identity(2, UserRole::Teacher);
        let p = portfolio(1, PortfolioStatus::Pending);
        assert!(!can_edit_portfolio(Some(&other), &p));
        assert!(!can_delete_portfolio(Some(&other), &p));
    }

    #[test]
    fn test_plain_admin_has_no_ownership_shortcut() {
        // admin 不是 superadmin，也不是所有者，编辑/删除均拒绝
        let admin = identity(2, UserRole::Admin);
        let p = portfolio(1, PortfolioStatus::Pending);
        assert!(!can_edit_portfolio(Some(&admin), &p));
        assert!(!can_delete_portfolio(Some(&admin), &p));
    }
}
