// ============================================================================
// LocSync - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 语言树漂移检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用漂移检查器执行检查
//   - ✅ 检查结果格式化输出
//   - ❌ 不应包含具体检查逻辑
//   - ❌ 不应包含文件扫描逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::checker::DriftChecker;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查语言树结构漂移
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 只检查两侧键集合差异
    #[arg(long)]
    pub missing: bool,

    /// 只检查目标侧未翻译文本
    #[arg(long)]
    pub untranslated: bool,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    Logger::info(t!("cli.check.start"));

    let locales_root = Config::get_locales_root();
    let verbose = Config::get_verbose();

    if !locales_root.exists() {
        anyhow::bail!(tf!("error.locales_root_not_exist", locales_root.display()));
    }

    let checker = DriftChecker::new(
        locales_root,
        Config::get_base_locale(),
        Config::get_target_locale(),
    )
    .with_verbose(verbose);

    let mut drifts = checker.check()?;

    // 按参数裁剪检查项（默认全部检查）
    let items = determine_check_items(&args);
    for drift in &mut drifts {
        if !items.missing {
            drift.missing_in_target.clear();
            drift.missing_in_base.clear();
        }
        if !items.untranslated {
            drift.untranslated.clear();
        }
    }

    let has_issues = drifts.iter().any(|d| d.has_issues());

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&drifts)?);
        }
        _ => {
            summary::render_drift_summary(&drifts, args.detail);
        }
    }

    if has_issues {
        std::process::exit(1);
    }

    Logger::success(t!("check.all_good"));
    Ok(())
}

/// 检查项目配置
struct CheckItems {
    missing: bool,
    untranslated: bool,
}

/// 确定要执行的检查项目
fn determine_check_items(args: &CheckArgs) -> CheckItems {
    // 两个开关都没给时全部检查
    let all = !args.missing && !args.untranslated;
    CheckItems {
        missing: args.missing || all,
        untranslated: args.untranslated || all,
    }
}
