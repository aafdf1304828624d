//! Canteen Server - 食堂预订与出餐队列服务
//!
//! # 架构概述
//!
//! - **订单引擎** (`orders`): 即时队列准入、状态流转、取餐核验、看板统计
//! - **HTTP API** (`api`): 菜单、下单、看板接口
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! canteen-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装、中间件
//! ├── utils/         # 日志、校验
//! └── orders/        # 订单存储与生命周期
//! ```
//!
//! 所有订单只保存在内存中，进程退出即丢失。

pub mod api;
pub mod core;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use orders::{OrderStorage, OrdersManager};
pub use services::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 `.env`，准备日志目录，安装日志
pub fn setup_environment() -> crate::core::Result<()> {
    // `.env` 可选
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty());
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("failed to create log dir {dir}: {e}"))?;
    }

    init_logger_with_file(log_level.as_deref(), log_dir.as_deref())?;

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______            __
  / ____/___ _____  / /____  ___  ____
 / /   / __ `/ __ \/ __/ _ \/ _ \/ __ \
/ /___/ /_/ / / / / /_/  __/  __/ / / /
\____/\__,_/_/ /_/\__/\___/\___/_/ /_/
    "#
    );
}
