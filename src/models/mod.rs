// ============================================================================
// LocSync - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
// 边界:
//   - ✅ 子模块声明和导出
//   - ❌ 不应包含业务逻辑实现
//
// ============================================================================

pub mod catalog;
pub mod config;
pub mod report;
pub mod tree;
