//! 静态路由表
//!
//! roles 为空表示任何已认证角色均可访问。
//! 角色集合逐条写明，没有隐式层级。

use crate::models::users::entities::UserRole;

#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub requires_auth: bool,
    pub roles: &'static [UserRole],
    pub title: &'static str,
}

const ALL: &[UserRole] = &[UserRole::SuperAdmin, UserRole::Admin, UserRole::Teacher];
const ADMINS: &[UserRole] = &[UserRole::Admin, UserRole::SuperAdmin];
const SUPERADMIN: &[UserRole] = &[UserRole::SuperAdmin];
const TEACHER: &[UserRole] = &[UserRole::Teacher];
const TEACHER_SUPERADMIN: &[UserRole] = &[UserRole::Teacher, UserRole::SuperAdmin];
const NONE: &[UserRole] = &[];

static ROUTES: &[Route] = &[
    Route {
        name: "login",
        path: "/login",
        requires_auth: false,
        roles: NONE,
        title: "Kirish",
    },
    Route {
        name: "callback",
        path: "/callback",
        requires_auth: false,
        roles: NONE,
        title: "Qayta yo'naltirish...",
    },
    Route {
        name: "dashboard",
        path: "/dashboard",
        requires_auth: true,
        roles: ALL,
        title: "Bosh sahifa",
    },
    Route {
        name: "portfolios",
        path: "/portfolios",
        requires_auth: true,
        roles: TEACHER_SUPERADMIN,
        title: "Portfolio",
    },
    Route {
        name: "portfolio-create",
        path: "/portfolios/create",
        requires_auth: true,
        roles: TEACHER_SUPERADMIN,
        title: "Yangi portfolio",
    },
    Route {
        name: "portfolio-detail",
        path: "/portfolios/:id",
        requires_auth: true,
        roles: ALL,
        title: "Portfolio",
    },
    Route {
        name: "portfolio-edit",
        path: "/portfolios/:id/edit",
        requires_auth: true,
        roles: TEACHER_SUPERADMIN,
        title: "Portfolioni tahrirlash",
    },
    Route {
        name: "profile",
        path: "/profile",
        requires_auth: true,
        roles: ALL,
        title: "Profil",
    },
    Route {
        name: "approval",
        path: "/approval",
        requires_auth: true,
        roles: ADMINS,
        title: "Tasdiqlash",
    },
    Route {
        name: "approval-detail",
        path: "/approval/:id",
        requires_auth: true,
        roles: ADMINS,
        title: "Ko'rib chiqish",
    },
    Route {
        name: "assignments",
        path: "/assignments",
        requires_auth: true,
        roles: ADMINS,
        title: "Topshiriqlar",
    },
    Route {
        name: "assignment-create",
        path: "/assignments/create",
        requires_auth: true,
        roles: ADMINS,
        title: "Yangi topshiriq",
    },
    Route {
        name: "assignment-detail",
        path: "/assignments/:id",
        requires_auth: true,
        roles: ALL,
        title: "Topshiriq",
    },
    Route {
        name: "assignment-edit",
        path: "/assignments/:id/edit",
        requires_auth: true,
        roles: ADMINS,
        title: "Topshiriqni tahrirlash",
    },
    Route {
        name: "submit-assignment",
        path: "/assignments/:id/submit",
        requires_auth: true,
        roles: TEACHER,
        title: "Javob yuborish",
    },
    Route {
        name: "my-assignments",
        path: "/my-assignments",
        requires_auth: true,
        roles: TEACHER,
        title: "Mening topshiriqlarim",
    },
    Route {
        name: "my-submissions",
        path: "/my-submissions",
        requires_auth: true,
        roles: TEACHER,
        title: "Mening javoblarim",
    },
    Route {
        name: "my-scores",
        path: "/my-scores",
        requires_auth: true,
        roles: TEACHER,
        title: "Mening ballarim",
    },
    Route {
        name: "notifications",
        path: "/notifications",
        requires_auth: true,
        roles: ALL,
        title: "Bildirishnomalar",
    },
    Route {
        name: "submissions",
        path: "/submissions",
        requires_auth: true,
        roles: ADMINS,
        title: "Javoblar",
    },
    Route {
        name: "score-history",
        path: "/score-history",
        requires_auth: true,
        roles: ADMINS,
        title: "Ball tarixi",
    },
    Route {
        name: "categories",
        path: "/categories",
        requires_auth: true,
        roles: ADMINS,
        title: "Kategoriyalar",
    },
    Route {
        name: "analytics",
        path: "/analytics",
        requires_auth: true,
        roles: ADMINS,
        title: "Analitika",
    },
    Route {
        name: "reports-list",
        path: "/reports",
        requires_auth: true,
        roles: ADMINS,
        title: "Hisobotlar",
    },
    Route {
        name: "admin-dashboard",
        path: "/admin",
        requires_auth: true,
        roles: SUPERADMIN,
        title: "Admin panel",
    },
    Route {
        name: "users",
        path: "/admin/users",
        requires_auth: true,
        roles: SUPERADMIN,
        title: "Foydalanuvchilar",
    },
    Route {
        name: "user-create",
        path: "/admin/users/create",
        requires_auth: true,
        roles: SUPERADMIN,
        title: "Yangi foydalanuvchi",
    },
    Route {
        name: "user-edit",
        path: "/admin/users/:id/edit",
        requires_auth: true,
        roles: SUPERADMIN,
        title: "Foydalanuvchini tahrirlash",
    },
    Route {
        name: "reports",
        path: "/admin/reports",
        requires_auth: true,
        roles: SUPERADMIN,
        title: "Hisobotlar",
    },
    Route {
        name: "forbidden",
        path: "/403",
        requires_auth: false,
        roles: NONE,
        title: "Ruxsat berilmagan",
    },
];

static NOT_FOUND: Route = Route {
    name: "not-found",
    path: "/:pathMatch",
    requires_auth: false,
    roles: NONE,
    title: "Sahifa topilmadi",
};

pub fn routes() -> &'static [Route] {
    ROUTES
}

pub fn route_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.name == name)
}

/// 按路径匹配路由；`:param` 段匹配任意非空段。
/// 无匹配时落到 not-found（兜底路由）。
pub fn match_path(path: &str) -> &'static Route {
    let path = path.split('?').next().unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // 根路径与登录页等价
    if segments.is_empty() {
        return route_by_name("login").unwrap_or(&NOT_FOUND);
    }

    // 静态段优先于参数段，与声明顺序无关
    let mut fallback: Option<&'static Route> = None;
    for route in ROUTES {
        let pattern: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            continue;
        }
        let mut exact = true;
        let mut matched = true;
        for (pat, seg) in pattern.iter().zip(&segments) {
            if pat.starts_with(':') {
                exact = false;
            } else if pat != seg {
                matched = false;
                break;
            }
        }
        if matched {
            if exact {
                return route;
            }
            fallback.get_or_insert(route);
        }
    }
    fallback.unwrap_or(&NOT_FOUND)
}

/// 角色各自的默认落地路由
pub fn landing_route(role: UserRole) -> &'static Route {
    let name = match role {
        UserRole::SuperAdmin => "admin-dashboard",
        UserRole::Admin | UserRole::Teacher => "dashboard",
    };
    route_by_name(name).expect("landing routes are present in the table")
}

/// 浏览器标签页标题格式
pub fn page_title(route: &Route) -> String {
    format!("{} | Proft", route.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_segment_wins_over_param() {
        assert_eq!(match_path("/portfolios/create").name, "portfolio-create");
        assert_eq!(match_path("/portfolios/42").name, "portfolio-detail");
        assert_eq!(match_path("/portfolios/42/edit").name, "portfolio-edit");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(match_path("/no-such-page").name, "not-found");
        assert_eq!(match_path("/admin/users/1/2/3").name, "not-found");
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(match_path("/dashboard?tab=stats").name, "dashboard");
    }

    #[test]
    fn test_root_resolves_to_login() {
        assert_eq!(match_path("/").name, "login");
    }

    #[test]
    fn test_landing_routes_per_role() {
        assert_eq!(landing_route(UserRole::SuperAdmin).name, "admin-dashboard");
        assert_eq!(landing_route(UserRole::Admin).name, "dashboard");
        assert_eq!(landing_route(UserRole::Teacher).name, "dashboard");
    }

    #[test]
    fn test_page_title_format() {
        let route = route_by_name("dashboard").unwrap();
        assert_eq!(page_title(route), "Bosh sahifa | Proft");
    }
}
