// ============================================================================
// LocSync - 界面模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 终端展示子模块导出
//
// ============================================================================

pub mod summary;
