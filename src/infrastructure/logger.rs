//! 日志基础设施

use tracing_subscriber::{fmt::time::ChronoUtc, EnvFilter};

pub struct Logger;

impl Logger {
    /// `RUST_LOG` 优先于配置中的日志级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(ChronoUtc::new("%Y-%m-%d %-I:%M:%S %p".to_string()))
            .with_file(true)
            .with_line_number(true)
            .init();
    }
}
