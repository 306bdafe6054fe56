// ============================================================================
// LocSync - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序入口和顶层错误处理
// 边界:
//   - ✅ 模块声明
//   - ✅ 全局配置初始化
//   - ✅ CLI 启动和顶层错误出口
//   - ❌ 不应包含命令实现逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use models::config::Config;
use utils::logger::Logger;

fn main() {
    // 全局配置先于一切初始化，后续日志和文案都依赖它
    if let Err(e) = Config::initialize() {
        Logger::error(format!("Failed to initialize config: {}", e));
        std::process::exit(1);
    }

    if let Err(e) = cli::run_cli() {
        Logger::error(crate::tf!("error.run_failed", e));
        std::process::exit(1);
    }
}
