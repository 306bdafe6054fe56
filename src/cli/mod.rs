// ============================================================================
// LocSync - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod check;
pub mod init;
pub mod reconcile;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs};
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use reconcile::{handle_reconcile, ReconcileArgs};

/// LocSync - Locale tree synchronization tool
#[derive(Debug, Parser)]
#[command(name = "locsync")]
#[command(about = "Keep parallel locale trees structurally synchronized")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Project root directory
    #[arg(short = 'C', long, global = true)]
    pub project_root: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check locale trees for structural drift
    Check(CheckArgs),
    /// Initialize configuration file
    Init(InitArgs),
    /// Reconcile missing translation keys across locale trees
    Reconcile(ReconcileArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // 构建运行时参数覆盖配置
    let runtime_args = build_runtime_args(&cli);
    Config::merge_runtime_args(runtime_args)?;

    match cli.command {
        Commands::Check(args) => handle_check(args),
        Commands::Init(args) => handle_init(args),
        Commands::Reconcile(args) => handle_reconcile(args),
    }
}

/// 从 CLI 参数构建运行时参数
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        project_root: cli.project_root.clone(),
        language: cli.language.clone(),
    }
}
