use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

// 从 lib.rs 导入模块
use proft_client::app::AppContext;
use proft_client::config::AppConfig;
use proft_client::models::ListParams;
use proft_client::routing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let start = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Backend: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.api.base_url,
    );

    let mut app = AppContext::initialize(config);

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start)
            .num_milliseconds()
    );

    // 预处理完成 //

    // 会话检查与整表导航预演：每条路由过一遍守卫，
    // 输出各角色下实际会落到哪里
    let identity = app.session.check_auth().await;
    match &identity {
        Some(identity) => info!(
            "Authenticated as {} ({})",
            identity.display_name(),
            identity.role
        ),
        None => info!("No active session"),
    }

    for route in routing::routes() {
        let resolution = app.guard.resolve(route.path).await;
        info!(
            "{:<28} -> {:<18} [{}]",
            route.path,
            resolution.route_name(),
            routing::page_title(route),
        );
    }

    // 开发旁路下把各数据域走一遍（fixture 数据冒烟）
    if config.api.dev_bypass {
        app.stores.portfolio.fetch_list(&ListParams::new()).await?;
        app.stores.portfolio.fetch_stats().await?;
        app.stores.assignment.fetch_list(&ListParams::new()).await?;
        app.stores.assignment.fetch_categories(&ListParams::new()).await?;
        app.stores.notification.fetch_list(&ListParams::new()).await?;
        app.stores.analytics.fetch_overview().await?;

        info!(
            "Fixture smoke: {} portfolios, {} assignments, {} categories, {} unread notifications",
            app.stores.portfolio.snapshot().items.len(),
            app.stores.assignment.snapshot().items.len(),
            app.stores.assignment.categories().len(),
            app.stores.notification.unread_count(),
        );
    }

    // 运行期间网关可能已发出认证事件（401/403），这里只消费展示
    while let Ok(event) = app.auth_events.try_recv() {
        let resolution = app.guard.resolve_auth_event(event, "/");
        warn!("Auth event {:?} -> {}", event, resolution.route_name());
    }

    for toast in app.toasts.list() {
        info!("[toast] {:?}: {}", toast.level, toast.message);
    }

    Ok(())
}
