use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::orders::OrdersManager;

/// 服务器状态 - 持有所有服务的单例引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | orders | Arc<OrdersManager> | 订单引擎 (进程内唯一) |
/// | started_at | Instant | 启动时间 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 订单引擎，进程退出时丢弃所有订单
    pub orders: Arc<OrdersManager>,
    started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, orders: Arc<OrdersManager>) -> Self {
        Self {
            config,
            orders,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 构造唯一的 [`OrdersManager`]，使用配置中的业务时区
    pub fn initialize(config: &Config) -> Self {
        let orders = Arc::new(OrdersManager::new(config.timezone));
        tracing::info!(
            environment = %config.environment,
            timezone = %config.timezone,
            "Server state initialized"
        );
        Self::new(config.clone(), orders)
    }

    pub fn orders(&self) -> &OrdersManager {
        &self.orders
    }

    /// 运行时间 (秒)
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
