// ============================================================================
// LocSync - 运行结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 同步运行和漂移检查结果的汇总显示
// 边界:
//   - ✅ 运行报告汇总显示
//   - ✅ 漂移检查结果显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含数据处理逻辑
//
// ============================================================================

use crate::core::checker::CategoryDrift;
use crate::models::report::{OutcomeStatus, RunReport};
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 分隔线
const SEPARATOR: &str = "───────────────────────────────────────";

/// 渲染同步运行汇总
pub fn render_run_summary(report: &RunReport, detail: bool) {
    Logger::info("");
    Logger::info(format!("{} {}", icons::SUMMARY, t!("summary.run_title")));
    Logger::info(SEPARATOR);

    for outcome in &report.calculators {
        match outcome.status {
            OutcomeStatus::Updated => {
                Logger::info(tf!(
                    "summary.calculator_updated",
                    icons::SUCCESS,
                    Colors::info(&outcome.slug),
                    outcome.added_manual,
                    outcome.added_generated,
                    outcome.skipped_existing
                ));
            }
            OutcomeStatus::Clean => {
                if detail {
                    Logger::info(tf!(
                        "summary.calculator_clean",
                        icons::SKIP,
                        outcome.slug,
                        outcome.skipped_existing
                    ));
                }
            }
            OutcomeStatus::Skipped => {
                Logger::warn(tf!(
                    "summary.calculator_skipped",
                    icons::WARNING,
                    outcome.slug,
                    outcome.reason.as_deref().unwrap_or("-")
                ));
            }
            OutcomeStatus::Failed => {
                Logger::error(tf!(
                    "summary.calculator_failed",
                    icons::ERROR,
                    outcome.slug,
                    outcome.reason.as_deref().unwrap_or("-")
                ));
            }
        }

        if detail {
            for key in &outcome.malformed_keys {
                Logger::warn(tf!("summary.malformed_key", outcome.slug, key));
            }
            for path in &outcome.mismatches {
                Logger::warn(tf!("summary.mismatch_path", outcome.slug, path));
            }
        }
    }

    Logger::info(SEPARATOR);
    Logger::info(tf!(
        "summary.run_totals",
        report.updated_count(),
        report.keys_added_base,
        report.keys_added_target,
        report.files_touched.len()
    ));

    if report.dry_run {
        Logger::warn(t!("summary.dry_run_note"));
    }

    // 回退为基准文本的键逐个列出，等待人工翻译
    if !report.unverified.is_empty() {
        Logger::info("");
        Logger::warn(tf!("summary.unverified_header", report.unverified.len()));
        for key in &report.unverified {
            Logger::warn(format!("  {} {}", icons::KEY, key));
        }
    }
}

/// 渲染漂移检查汇总
pub fn render_drift_summary(drifts: &[CategoryDrift], detail: bool) {
    Logger::info("");
    Logger::info(format!("{} {}", icons::CHECK, t!("summary.check_title")));
    Logger::info(SEPARATOR);

    let mut missing_in_target = 0usize;
    let mut missing_in_base = 0usize;
    let mut untranslated = 0usize;

    for drift in drifts {
        if !drift.has_issues() {
            continue;
        }

        Logger::info(tf!(
            "summary.category_drift",
            icons::CATEGORY,
            Colors::info(&drift.category),
            drift.missing_in_target.len(),
            drift.missing_in_base.len(),
            drift.untranslated.len()
        ));

        if detail {
            for key in &drift.missing_in_target {
                Logger::warn(tf!("summary.missing_in_target", drift.category, key));
            }
            for key in &drift.missing_in_base {
                Logger::warn(tf!("summary.missing_in_base", drift.category, key));
            }
            for value in &drift.untranslated {
                Logger::warn(tf!("summary.untranslated_value", drift.category, value.key, value.value));
            }
        }

        missing_in_target += drift.missing_in_target.len();
        missing_in_base += drift.missing_in_base.len();
        untranslated += drift.untranslated.len();
    }

    Logger::info(SEPARATOR);
    Logger::info(tf!(
        "summary.check_totals",
        drifts.len(),
        missing_in_target,
        missing_in_base,
        untranslated
    ));
}
