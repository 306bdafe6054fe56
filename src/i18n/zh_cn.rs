// ============================================================================
// LocSync - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 命令入口
    ("cli.reconcile.start", "开始同步翻译键..."),
    ("cli.check.start", "开始语言包漂移检查..."),
    // 同步相关
    ("reconcile.empty_catalog", "目录清单为空，无事可做"),
    ("reconcile.loaded_catalog", "加载了 {} 个计算器（来自 {}）"),
    ("reconcile.loaded_overrides", "加载了 {} 条人工覆盖（来自 {}）"),
    ("reconcile.record_done", "已处理 {}: {}（新增 {} 个键）"),
    ("reconcile.structural_mismatch", "合并 '{}' 时在 '{}' 发现结构错位"),
    ("reconcile.skipped", "跳过 '{}': {}"),
    ("reconcile.failed", "处理 '{}' 失败: {}"),
    ("reconcile.dry_run_complete", "预演完成，未写入任何文件"),
    ("reconcile.completed", "同步完成: 共新增 {} 个键，涉及 {} 个文件"),
    // 检查相关
    ("check.found_categories", "发现 {} 个待比对分类"),
    ("check.all_good", "两侧语言树已同步"),
    // 初始化相关
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.next_steps", "请编辑 locsync.toml 指向语言包目录和目录清单"),
    ("init.create_failed", "创建配置文件失败: {}"),
    // 汇总 - 同步运行
    ("summary.run_title", "同步汇总"),
    (
        "summary.calculator_updated",
        "{} {}: 人工 {} 个，生成 {} 个，已存在 {} 个",
    ),
    ("summary.calculator_clean", "{} {}: 无需写入（{} 个键已存在）"),
    ("summary.calculator_skipped", "{} {}: 已跳过 - {}"),
    ("summary.calculator_failed", "{} {}: 失败 - {}"),
    ("summary.malformed_key", "  {}: 无法解析的键引用 '{}'"),
    ("summary.mismatch_path", "  {}: 结构错位于 '{}'"),
    (
        "summary.run_totals",
        "更新 {} 个计算器，基准侧新增 {} 个键，目标侧新增 {} 个键，写入 {} 个文件",
    ),
    ("summary.dry_run_note", "预演模式: 未写入任何文件"),
    ("summary.unverified_header", "{} 个生成值回退为基准语言，需要人工翻译:"),
    // 汇总 - 漂移检查
    ("summary.check_title", "语言包漂移汇总"),
    (
        "summary.category_drift",
        "{} {}: 目标侧缺 {} 个，基准侧缺 {} 个，未翻译 {} 个",
    ),
    ("summary.missing_in_target", "  {}: 目标语言缺失: {}"),
    ("summary.missing_in_base", "  {}: 基准语言缺失: {}"),
    ("summary.untranslated_value", "  {}: 未翻译 '{}' = \"{}\""),
    (
        "summary.check_totals",
        "比对 {} 个分类: 目标侧缺 {} 个，基准侧缺 {} 个，未翻译 {} 个",
    ),
    // 错误信息
    ("error.locales_root_not_exist", "语言包目录不存在: {}"),
    ("error.run_failed", "命令执行失败: {}"),
];
