// ============================================================================
// LocSync - 语言树合并器
// ============================================================================
//
// 文件: src/core/merger.rs
// 职责: 补丁树到语言树的单向深度合并
// 边界:
//   - ✅ 递归键级合并
//   - ✅ 结构错位（叶子/节点冲突）记录
//   - ✅ 合并统计
//   - ❌ 不应包含补丁构造逻辑（那是 driver 的职责）
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含日志输出（错位由调用方决定如何呈现）
//
// 合并规则（整个子系统的核心不变量）:
// 1. 两侧同为叶子         —— 既有值获胜，补丁丢弃，绝不覆盖人工翻译
// 2. 补丁叶子 vs 缺失/节点 —— 补丁获胜，节点被叶子替换时记为结构错位
// 3. 补丁节点             —— 递归合并，必要时创建空节点；
//                            既有叶子被节点替换时同样记为结构错位
// 4. 仅存在于目标树的键   —— 原样保留，合并永不删除
//
// 规则 1 保证重复运行幂等，人工翻译到一半时随时可安全重跑。
//
// ============================================================================

use crate::models::tree::LocaleTree;

/// 结构错位记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralMismatch {
    /// 发生错位的点号路径
    pub path: String,
    /// 被替换一侧原有的形态
    pub replaced: MismatchKind,
}

/// 错位形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// 既有节点被补丁叶子替换
    NodeReplacedByLeaf,
    /// 既有叶子被补丁节点替换
    LeafReplacedByNode,
}

/// 一次合并的结果统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// 新写入的叶子数量
    pub added: usize,
    /// 既有值获胜而丢弃的补丁叶子数量
    pub kept: usize,
    /// 结构错位记录
    pub mismatches: Vec<StructuralMismatch>,
}

impl MergeOutcome {
    fn merge_from(&mut self, other: MergeOutcome) {
        self.added += other.added;
        self.kept += other.kept;
        self.mismatches.extend(other.mismatches);
    }
}

/// 语言树合并器
pub struct TreeMerger;

impl TreeMerger {
    /// 将补丁节点合并进目标节点
    ///
    /// `target` 必须是节点；补丁中的每个键按文件头注释的规则处理。
    pub fn merge(target: &mut LocaleTree, patch: &LocaleTree) -> MergeOutcome {
        Self::merge_at(target, patch, "")
    }

    fn merge_at(target: &mut LocaleTree, patch: &LocaleTree, prefix: &str) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        let patch_children = match patch.as_node() {
            Some(children) => children,
            None => return outcome,
        };
        let target_children = match target.as_node_mut() {
            Some(children) => children,
            None => return outcome,
        };

        for (key, patch_child) in patch_children {
            let child_path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };

            match patch_child {
                LocaleTree::Leaf(value) => match target_children.get(key) {
                    // 既有叶子获胜
                    Some(LocaleTree::Leaf(_)) => {
                        outcome.kept += 1;
                    }
                    // 节点被叶子替换：补丁获胜，记录错位
                    Some(LocaleTree::Node(_)) => {
                        target_children.insert(key.clone(), LocaleTree::leaf(value.clone()));
                        outcome.added += 1;
                        outcome.mismatches.push(StructuralMismatch {
                            path: child_path,
                            replaced: MismatchKind::NodeReplacedByLeaf,
                        });
                    }
                    None => {
                        target_children.insert(key.clone(), LocaleTree::leaf(value.clone()));
                        outcome.added += 1;
                    }
                },
                LocaleTree::Node(_) => {
                    let slot = target_children
                        .entry(key.clone())
                        .or_insert_with(LocaleTree::empty);

                    // 既有叶子被节点替换：记录错位后递归
                    if slot.is_leaf() {
                        *slot = LocaleTree::empty();
                        outcome.mismatches.push(StructuralMismatch {
                            path: child_path.clone(),
                            replaced: MismatchKind::LeafReplacedByNode,
                        });
                    }

                    outcome.merge_from(Self::merge_at(slot, patch_child, &child_path));
                }
            }
        }

        outcome
    }
}
