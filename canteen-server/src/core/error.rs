use thiserror::Error;

/// 进程级错误 (监听、服务)
///
/// 请求级错误使用 [`shared::error::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法绑定 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("服务异常退出: {0}")]
    Serve(#[source] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
