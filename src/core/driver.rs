// ============================================================================
// LocSync - 同步驱动器
// ============================================================================
//
// 文件: src/core/driver.rs
// 职责: 整次同步运行的编排
// 边界:
//   - ✅ 目录清单逐条处理
//   - ✅ 语言树按文件缓存（同文件的后续补丁必须看到前面的写入）
//   - ✅ 补丁构造（人工覆盖优先，启发式兜底）
//   - ✅ 按计算器粒度的错误隔离和落盘
//   - ✅ 运行报告累积
//   - ❌ 不应包含合并规则（那是 merger 的职责）
//   - ❌ 不应包含报告渲染
//   - ❌ 不应包含网络或交互行为（纯离线批处理）
//
// 处理顺序（每个计算器）:
// 1. 路由解析，失败则带原因跳过
// 2. 经缓存加载两侧语言树
// 3. 逐键检查缺失，人工覆盖表优先，其次启发式生成
// 4. 两侧各合并一份补丁
// 5. 立即原子落盘（预演模式除外），把中途失败的影响控制在单个计算器
//
// 单线程同步执行。若将来为吞吐量并行化，必须按语言文件分片，
// 共享同一文件的计算器只能由同一工作者按序处理。
//
// ============================================================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::error::ReconcileError;
use crate::core::keypath::KeyPath;
use crate::core::merger::TreeMerger;
use crate::core::router::{CategoryRouter, RouteTarget};
use crate::core::translator::{HeuristicTranslator, ManualOverrideTable};
use crate::models::catalog::CalculatorRecord;
use crate::models::report::{CalculatorOutcome, OutcomeStatus, RunReport};
use crate::models::tree::LocaleTree;
use crate::utils::logger::Logger;
use crate::tf;

/// 同步驱动器
pub struct ReconciliationDriver {
    router: CategoryRouter,
    translator: HeuristicTranslator,
    overrides: ManualOverrideTable,
    /// 按文件路径缓存的语言树，一次运行内共享
    cache: HashMap<PathBuf, LocaleTree>,
    dry_run: bool,
    verbose: bool,
}

impl ReconciliationDriver {
    /// 创建新的同步驱动器
    pub fn new(
        router: CategoryRouter,
        translator: HeuristicTranslator,
        overrides: ManualOverrideTable,
    ) -> Self {
        Self {
            router,
            translator,
            overrides,
            cache: HashMap::new(),
            dry_run: false,
            verbose: false,
        }
    }

    /// 预演模式：只计算和报告，不写盘
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 启用详细日志
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 按目录顺序处理整个清单
    ///
    /// 任何单个计算器的失败都被捕获并记入报告，运行继续。
    pub fn run(&mut self, catalog: &[CalculatorRecord]) -> RunReport {
        let mut report = RunReport {
            dry_run: self.dry_run,
            ..RunReport::default()
        };

        for record in catalog {
            let outcome = match self.process_record(record, &mut report) {
                Ok(outcome) => outcome,
                Err(err) => self.classify_failure(record, err),
            };

            if self.verbose {
                Logger::info(tf!(
                    "reconcile.record_done",
                    record.slug,
                    outcome.status,
                    outcome.added_total()
                ));
            }

            report.calculators.push(outcome);
        }

        report
    }

    /// 处理单个计算器
    fn process_record(
        &mut self,
        record: &CalculatorRecord,
        report: &mut RunReport,
    ) -> Result<CalculatorOutcome, ReconcileError> {
        let route = self.router.resolve(record)?;

        self.load_into_cache(&route.base_path)?;
        self.load_into_cache(&route.target_path)?;

        let build = self.build_patches(record, &route);

        let mut outcome = CalculatorOutcome {
            slug: record.slug.clone(),
            category: route.category.clone(),
            status: OutcomeStatus::Clean,
            reason: None,
            added_manual: build.added_manual,
            added_generated: build.added_generated,
            skipped_existing: build.skipped_existing,
            malformed_keys: build.malformed_keys,
            mismatches: Vec::new(),
        };

        let mut added_base = 0usize;
        let mut added_target = 0usize;

        for (path, patch, added) in [
            (&route.base_path, &build.base_patch, &mut added_base),
            (&route.target_path, &build.target_patch, &mut added_target),
        ] {
            if patch.leaf_count() == 0 {
                continue;
            }

            // 缓存中必有该树，上面刚加载过
            let Some(tree) = self.cache.get_mut(path.as_path()) else {
                continue;
            };

            let merge = TreeMerger::merge(tree, patch);
            *added += merge.added;

            for mismatch in &merge.mismatches {
                // 结构错位是开发期的正常漂移，警告而非错误
                Logger::warn(tf!("reconcile.structural_mismatch", record.slug, mismatch.path));
                outcome.mismatches.push(mismatch.path.clone());
            }
        }

        if added_base + added_target > 0 {
            outcome.status = OutcomeStatus::Updated;

            if !self.dry_run {
                self.persist(&route.base_path)?;
                self.persist(&route.target_path)?;
                report.files_touched.insert(route.base_path.clone());
                report.files_touched.insert(route.target_path.clone());
            }
        }

        report.keys_added_base += added_base;
        report.keys_added_target += added_target;
        report.unverified.extend(build.unverified);

        Ok(outcome)
    }

    /// 构造两侧补丁
    fn build_patches(&self, record: &CalculatorRecord, route: &RouteTarget) -> PatchBuild {
        let mut build = PatchBuild::default();

        let base_tree = self.cache.get(&route.base_path);
        let target_tree = self.cache.get(&route.target_path);

        for raw in &record.keys {
            let path = match KeyPath::parse(raw, &route.root_key) {
                Ok(path) => path,
                Err(_) => {
                    build.malformed_keys.push(raw.clone());
                    continue;
                }
            };

            // 共享命名空间由人工维护，一律硬跳过
            if path.is_common() {
                continue;
            }

            // 补丁挂在根键之下，存在性也要带根键检查
            let mut full_path: Vec<&str> = Vec::with_capacity(path.segments().len() + 1);
            full_path.push(&route.root_key);
            full_path.extend(path.segments().iter().map(String::as_str));

            let base_has = base_tree.is_some_and(|t| t.contains_leaf(&full_path));
            let target_has = target_tree.is_some_and(|t| t.contains_leaf(&full_path));

            if base_has && target_has {
                build.skipped_existing += 1;
                continue;
            }

            let qualified = format!("{}:{}.{}", route.category, route.root_key, path.dotted());
            let manual = self.overrides.get(&qualified);

            // 基准侧缺失时的文本
            let base_value = if base_has {
                None
            } else {
                Some(match manual {
                    Some(pair) => pair.base.clone(),
                    None => HeuristicTranslator::humanize(path.leaf_key()),
                })
            };

            // 目标侧缺失时的文本：覆盖表优先；否则以既有基准文本
            // （没有则用刚生成的标签）跑词表替换
            let target_value = if target_has {
                None
            } else {
                match manual {
                    Some(pair) => Some(pair.target.clone()),
                    None => {
                        let base_text = base_tree
                            .and_then(|t| t.get_path(&full_path))
                            .and_then(LocaleTree::as_leaf)
                            .map(str::to_string)
                            .or_else(|| base_value.clone())
                            .unwrap_or_else(|| HeuristicTranslator::humanize(path.leaf_key()));

                        let (translated, fell_back) = self.translator.substitute(&base_text);
                        if fell_back {
                            build.unverified.push(qualified.clone());
                        }
                        Some(translated)
                    }
                }
            };

            if let Some(value) = &base_value {
                build.base_patch.insert_leaf(&full_path, value);
            }
            if let Some(value) = &target_value {
                build.target_patch.insert_leaf(&full_path, value);
            }

            if manual.is_some() {
                build.added_manual += 1;
            } else {
                build.added_generated += 1;
            }
        }

        build
    }

    /// 加载语言树到缓存（已在缓存中则复用）
    fn load_into_cache(&mut self, path: &Path) -> Result<(), ReconcileError> {
        if self.cache.contains_key(path) {
            return Ok(());
        }
        let tree = LocaleTree::load(path)?;
        self.cache.insert(path.to_path_buf(), tree);
        Ok(())
    }

    /// 原子落盘缓存中的语言树
    fn persist(&self, path: &Path) -> Result<(), ReconcileError> {
        if let Some(tree) = self.cache.get(path) {
            tree.save(path)?;
        }
        Ok(())
    }

    /// 错误到结果的归类：解析类错误跳过，读写类错误失败
    fn classify_failure(&self, record: &CalculatorRecord, err: ReconcileError) -> CalculatorOutcome {
        match &err {
            ReconcileError::MissingCategoryFiles { .. } | ReconcileError::RootKeyCollision { .. } => {
                Logger::warn(tf!("reconcile.skipped", record.slug, err));
                CalculatorOutcome::skipped(&record.slug, &record.category, err.to_string())
            }
            _ => {
                Logger::error(tf!("reconcile.failed", record.slug, err));
                CalculatorOutcome::failed(&record.slug, &record.category, err.to_string())
            }
        }
    }
}

/// 一个计算器的补丁构造产物
#[derive(Debug, Default)]
struct PatchBuild {
    base_patch: LocaleTree,
    target_patch: LocaleTree,
    added_manual: usize,
    added_generated: usize,
    skipped_existing: usize,
    malformed_keys: Vec<String>,
    unverified: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::translator::{contains_arabic, OverridePair};

    /// 测试夹具：en/ar 两套分类文件
    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new(files: &[(&str, &str, &str)]) -> Self {
            let dir = tempfile::tempdir().unwrap();
            for (locale, category, content) in files {
                let path = dir
                    .path()
                    .join(locale)
                    .join("calc")
                    .join(format!("{}.json", category));
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(&path, content).unwrap();
            }
            Self { dir }
        }

        fn driver(&self) -> ReconciliationDriver {
            let router = CategoryRouter::new(
                self.dir.path().to_path_buf(),
                "en".to_string(),
                "ar".to_string(),
            );
            ReconciliationDriver::new(
                router,
                HeuristicTranslator::default(),
                ManualOverrideTable::default(),
            )
        }

        fn tree(&self, locale: &str, category: &str) -> LocaleTree {
            let path = self
                .dir
                .path()
                .join(locale)
                .join("calc")
                .join(format!("{}.json", category));
            LocaleTree::load(&path).unwrap()
        }

        fn raw(&self, locale: &str, category: &str) -> String {
            let path = self
                .dir
                .path()
                .join(locale)
                .join("calc")
                .join(format!("{}.json", category));
            std::fs::read_to_string(path).unwrap()
        }
    }

    fn record(slug: &str, category: &str, keys: &[&str]) -> CalculatorRecord {
        CalculatorRecord {
            slug: slug.to_string(),
            category: category.to_string(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn missing_keys_appear_in_both_trees() {
        // 场景 A：fertilizer.error_soil_negative 两侧都缺
        let fixture = Fixture::new(&[
            ("en", "agriculture", r#"{"fertilizer": {"title": "Fertilizer Calculator"}}"#),
            ("ar", "agriculture", r#"{"fertilizer": {"title": "حاسبة الأسمدة"}}"#),
        ]);
        let mut driver = fixture.driver();

        let report = driver.run(&[record(
            "fertilizer-calculator",
            "agriculture",
            &["fertilizer.error_soil_negative", "fertilizer.note_title"],
        )]);

        assert_eq!(report.calculators[0].status, OutcomeStatus::Updated);

        for locale in ["en", "ar"] {
            let tree = fixture.tree(locale, "agriculture");
            let leaf = tree
                .get_path(&["fertilizer", "error_soil_negative"])
                .and_then(LocaleTree::as_leaf)
                .unwrap();
            assert!(!leaf.is_empty());
            assert!(tree.contains_leaf(&["fertilizer", "note_title"]));
        }

        // 同批新增不得碰掉既有的 title
        assert_eq!(
            fixture
                .tree("en", "agriculture")
                .get_path(&["fertilizer", "title"])
                .and_then(LocaleTree::as_leaf),
            Some("Fertilizer Calculator")
        );
        assert_eq!(
            fixture
                .tree("ar", "agriculture")
                .get_path(&["fertilizer", "title"])
                .and_then(LocaleTree::as_leaf),
            Some("حاسبة الأسمدة")
        );
    }

    #[test]
    fn existing_value_survives_identical_proposal() {
        // 场景 B：已有 damage_label = "Damage"，补丁提案相同
        let fixture = Fixture::new(&[
            ("en", "gaming", r#"{"dps": {"damage_label": "Damage"}}"#),
            ("ar", "gaming", r#"{"dps": {"damage_label": "الضرر"}}"#),
        ]);
        let mut driver = fixture.driver();

        let report = driver.run(&[record("dps-calculator", "gaming", &["dps.damage_label"])]);

        assert_eq!(report.calculators[0].status, OutcomeStatus::Clean);
        assert_eq!(report.calculators[0].skipped_existing, 1);
        assert_eq!(
            fixture
                .tree("en", "gaming")
                .get_path(&["dps", "damage_label"])
                .and_then(LocaleTree::as_leaf),
            Some("Damage")
        );
    }

    #[test]
    fn root_key_collision_skips_later_calculator() {
        // 场景 C：两个 slug 解析到同一根键
        let fixture = Fixture::new(&[
            ("en", "automotive", "{}"),
            ("ar", "automotive", "{}"),
        ]);
        let mut driver = fixture.driver();

        let report = driver.run(&[
            record("car-depreciation-calculator", "automotive", &["rate_label"]),
            record("car_depreciation", "automotive", &["other_label"]),
        ]);

        assert_eq!(report.calculators[0].status, OutcomeStatus::Updated);
        assert_eq!(report.calculators[1].status, OutcomeStatus::Skipped);
        assert!(report.calculators[1].reason.as_deref().unwrap().contains("collision"));

        // 先到者的键必须完整合并
        let tree = fixture.tree("en", "automotive");
        assert!(tree.contains_leaf(&["car_depreciation", "rate_label"]));
        assert!(!tree.contains_leaf(&["car_depreciation", "other_label"]));
    }

    #[test]
    fn common_namespace_is_never_written() {
        // 场景 D：common 键永不写入
        let fixture = Fixture::new(&[
            ("en", "misc", "{}"),
            ("ar", "misc", "{}"),
        ]);
        let mut driver = fixture.driver();

        let report = driver.run(&[record(
            "abjad-calculator",
            "misc",
            &["common.errors.invalid_input", "common:errors.other", "abjad.title"],
        )]);

        assert_eq!(report.keys_added_base, 1);
        let tree = fixture.tree("en", "misc");
        assert!(tree.contains_leaf(&["abjad", "title"]));
        assert!(tree.get_path(&["common"]).is_none());
    }

    #[test]
    fn missing_category_files_skip_is_reported() {
        let fixture = Fixture::new(&[("en", "pet", "{}")]); // ar 侧缺失
        let mut driver = fixture.driver();

        let report = driver.run(&[record("cat-calorie-calculator", "pet", &["results_title"])]);

        assert_eq!(report.calculators[0].status, OutcomeStatus::Skipped);
        assert!(report.has_issues());
    }

    #[test]
    fn malformed_keys_are_skipped_and_listed() {
        let fixture = Fixture::new(&[("en", "misc", "{}"), ("ar", "misc", "{}")]);
        let mut driver = fixture.driver();

        let report = driver.run(&[record("abjad-calculator", "misc", &["", "a..b", "title"])]);

        let outcome = &report.calculators[0];
        assert_eq!(outcome.malformed_keys, ["", "a..b"]);
        assert!(fixture.tree("en", "misc").contains_leaf(&["abjad", "title"]));
    }

    #[test]
    fn manual_override_beats_heuristic() {
        let fixture = Fixture::new(&[("en", "real-estate", "{}"), ("ar", "real-estate", "{}")]);
        let router = CategoryRouter::new(
            fixture.dir.path().to_path_buf(),
            "en".to_string(),
            "ar".to_string(),
        );
        let overrides = ManualOverrideTable::from_entries([(
            "real-estate:home_affordability.dti_ratio".to_string(),
            OverridePair {
                base: "Debt-to-Income Ratio".to_string(),
                target: "نسبة الدين إلى الدخل".to_string(),
            },
        )]);
        let mut driver = ReconciliationDriver::new(
            router,
            HeuristicTranslator::default(),
            overrides,
        );

        let report = driver.run(&[record(
            "home-affordability-calculator",
            "real-estate",
            &["dti_ratio"],
        )]);

        assert_eq!(report.calculators[0].added_manual, 1);
        assert_eq!(report.calculators[0].added_generated, 0);
        assert_eq!(
            fixture
                .tree("en", "real-estate")
                .get_path(&["home_affordability", "dti_ratio"])
                .and_then(LocaleTree::as_leaf),
            Some("Debt-to-Income Ratio")
        );
        assert_eq!(
            fixture
                .tree("ar", "real-estate")
                .get_path(&["home_affordability", "dti_ratio"])
                .and_then(LocaleTree::as_leaf),
            Some("نسبة الدين إلى الدخل")
        );
        assert!(report.unverified.is_empty());
    }

    #[test]
    fn target_side_derives_from_existing_base_leaf() {
        // 基准侧已有人工文案时，目标侧启发式应基于该文案而非键名
        let fixture = Fixture::new(&[
            ("en", "pet", r#"{"cat_calorie": {"results_title": "Daily Calorie Results"}}"#),
            ("ar", "pet", "{}"),
        ]);
        let mut driver = fixture.driver();

        let report = driver.run(&[record("cat-calorie-calculator", "pet", &["results_title"])]);

        assert_eq!(report.keys_added_base, 0);
        assert_eq!(report.keys_added_target, 1);
        let leaf = fixture
            .tree("ar", "pet")
            .get_path(&["cat_calorie", "results_title"])
            .and_then(LocaleTree::as_leaf)
            .unwrap()
            .to_string();
        assert!(contains_arabic(&leaf));
    }

    #[test]
    fn untranslatable_keys_are_flagged_for_followup() {
        let fixture = Fixture::new(&[("en", "real-estate", "{}"), ("ar", "real-estate", "{}")]);
        let mut driver = fixture.driver();

        let report = driver.run(&[record(
            "closing-cost-calculator",
            "real-estate",
            &["dti_zzz"],
        )]);

        assert_eq!(
            report.unverified,
            ["real-estate:closing_cost.dti_zzz"]
        );
    }

    #[test]
    fn second_run_is_idempotent() {
        let fixture = Fixture::new(&[
            ("en", "agriculture", r#"{"fertilizer": {"title": "Fertilizer Calculator"}}"#),
            ("ar", "agriculture", r#"{"fertilizer": {"title": "حاسبة الأسمدة"}}"#),
        ]);
        let catalog = [record(
            "fertilizer-calculator",
            "agriculture",
            &["fertilizer.error_soil_negative", "fertilizer.note_title"],
        )];

        fixture.driver().run(&catalog);
        let en_after_first = fixture.raw("en", "agriculture");
        let ar_after_first = fixture.raw("ar", "agriculture");

        // 第二次运行使用全新驱动器（全新缓存），文件必须逐字节不变
        let report = fixture.driver().run(&catalog);

        assert_eq!(report.keys_added_total(), 0);
        assert_eq!(fixture.raw("en", "agriculture"), en_after_first);
        assert_eq!(fixture.raw("ar", "agriculture"), ar_after_first);
    }

    #[test]
    fn calculators_sharing_a_file_see_prior_writes() {
        let fixture = Fixture::new(&[("en", "pet", "{}"), ("ar", "pet", "{}")]);
        let mut driver = fixture.driver();

        let report = driver.run(&[
            record("cat-calorie-calculator", "pet", &["results_title"]),
            record("cat-food-calculator", "pet", &["unit_kg"]),
        ]);

        assert_eq!(report.updated_count(), 2);
        let tree = fixture.tree("en", "pet");
        assert!(tree.contains_leaf(&["cat_calorie", "results_title"]));
        assert!(tree.contains_leaf(&["cat_food", "unit_kg"]));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let fixture = Fixture::new(&[("en", "pet", "{}\n"), ("ar", "pet", "{}\n")]);
        let mut driver = fixture.driver().with_dry_run(true);

        let report = driver.run(&[record("cat-calorie-calculator", "pet", &["results_title"])]);

        assert_eq!(report.calculators[0].status, OutcomeStatus::Updated);
        assert!(report.files_touched.is_empty());
        assert_eq!(fixture.raw("en", "pet"), "{}\n");
        assert_eq!(fixture.raw("ar", "pet"), "{}\n");
    }
}
