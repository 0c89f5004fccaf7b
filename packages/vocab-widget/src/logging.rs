use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装写入 `writer` 的全局订阅者；已存在全局订阅者时返回 `false`
///
/// 不输出时间戳：`wasm32-unknown-unknown` 没有系统时钟，浏览器控制台会自行标注时间。
pub fn init_tracing_with_writer<W>(log_level: &str, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(layer)
        .try_init()
        .is_ok()
}

