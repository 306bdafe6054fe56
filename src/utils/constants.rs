// ============================================================================
// LocSync - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用级常量和图标定义
// 边界:
//   - ✅ 应用名称常量
//   - ✅ 输出图标定义
//   - ❌ 不应包含可变状态
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LOCSYNC";

/// 共享命名空间名称（人工维护，同步工具绝不写入）
pub const COMMON_NAMESPACE: &str = "common";

/// 语言文件所在的分类子目录
pub const CALC_SUBDIR: &str = "calc";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 键图标
    pub const KEY: &str = "●";
    /// 分类图标
    pub const CATEGORY: &str = "◆";
    /// 检查图标
    pub const CHECK: &str = "◇";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 箭头图标
    pub const ARROW: &str = "→";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
}
