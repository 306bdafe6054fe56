// ============================================================================
// LocSync - CLI Reconcile 命令
// ============================================================================
//
// 文件: src/cli/reconcile.rs
// 职责: 翻译键同步命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 输入装配（目录清单、覆盖表）
//   - ✅ 调用同步驱动器执行
//   - ✅ 运行报告格式化输出
//   - ❌ 不应包含同步逻辑
//   - ❌ 不应包含合并规则
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::driver::ReconciliationDriver;
use crate::core::router::CategoryRouter;
use crate::core::translator::{HeuristicTranslator, ManualOverrideTable};
use crate::models::catalog::load_catalog;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 同步缺失的翻译键
#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// 只计算和报告，不实际写盘（预演模式）
    #[arg(long)]
    pub dry_run: bool,

    /// 目录清单文件（默认取配置）
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// 人工覆盖表文件（默认取配置）
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_reconcile(args: ReconcileArgs) -> Result<()> {
    Logger::info(t!("cli.reconcile.start"));

    let locales_root = Config::get_locales_root();
    let verbose = Config::get_verbose();

    if !locales_root.exists() {
        anyhow::bail!(tf!("error.locales_root_not_exist", locales_root.display()));
    }

    // 目录清单不可读是前置条件失败，整次运行终止
    let catalog_path = args.catalog.clone().unwrap_or_else(Config::get_catalog_path);
    let catalog = load_catalog(&catalog_path)?;

    if catalog.is_empty() {
        Logger::info(t!("reconcile.empty_catalog"));
        return Ok(());
    }
    Logger::info(tf!("reconcile.loaded_catalog", catalog.len(), catalog_path.display()));

    // 人工覆盖表：命令行优先于配置，都没有则为空表
    let overrides = match args.overrides.clone().or_else(Config::get_overrides_path) {
        Some(path) => {
            let table = ManualOverrideTable::load(&path)?;
            if verbose {
                Logger::info(tf!("reconcile.loaded_overrides", table.len(), path.display()));
            }
            table
        }
        None => ManualOverrideTable::default(),
    };

    let router = CategoryRouter::new(
        locales_root,
        Config::get_base_locale(),
        Config::get_target_locale(),
    );

    let mut driver = ReconciliationDriver::new(router, HeuristicTranslator::default(), overrides)
        .with_dry_run(args.dry_run)
        .with_verbose(verbose);

    let report = driver.run(&catalog);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            summary::render_run_summary(&report, args.detail);
        }
    }

    if args.dry_run {
        Logger::info(t!("reconcile.dry_run_complete"));
    } else {
        Logger::success(tf!(
            "reconcile.completed",
            report.keys_added_total(),
            report.files_touched.len()
        ));
    }

    Ok(())
}
