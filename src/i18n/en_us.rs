// ============================================================================
// LocSync - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Command entry points
    ("cli.reconcile.start", "Starting translation key reconciliation..."),
    ("cli.check.start", "Starting locale drift check..."),
    // Reconcile related
    ("reconcile.empty_catalog", "Catalog is empty, nothing to do"),
    ("reconcile.loaded_catalog", "Loaded {} calculators from {}"),
    ("reconcile.loaded_overrides", "Loaded {} manual overrides from {}"),
    ("reconcile.record_done", "Processed {}: {} ({} keys added)"),
    (
        "reconcile.structural_mismatch",
        "Structural mismatch while merging '{}' at '{}'",
    ),
    ("reconcile.skipped", "Skipping '{}': {}"),
    ("reconcile.failed", "Failed to process '{}': {}"),
    ("reconcile.dry_run_complete", "Dry run complete, no files were written"),
    (
        "reconcile.completed",
        "Reconciliation completed: {} keys added across {} files",
    ),
    // Check related
    ("check.found_categories", "Found {} categories to compare"),
    ("check.all_good", "Locale trees are in sync"),
    // Init related
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite the existing file"),
    ("init.config_created", "Configuration file created: {}"),
    (
        "init.next_steps",
        "Edit locsync.toml to point at your locales directory and catalog",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
    // Summary - reconcile run
    ("summary.run_title", "Reconciliation Summary"),
    (
        "summary.calculator_updated",
        "{} {}: {} manual, {} generated, {} already present",
    ),
    ("summary.calculator_clean", "{} {}: clean ({} keys already present)"),
    ("summary.calculator_skipped", "{} {}: skipped - {}"),
    ("summary.calculator_failed", "{} {}: failed - {}"),
    ("summary.malformed_key", "  {}: unparsable key reference '{}'"),
    ("summary.mismatch_path", "  {}: structural mismatch at '{}'"),
    (
        "summary.run_totals",
        "{} calculators updated, {} base keys added, {} target keys added, {} files touched",
    ),
    ("summary.dry_run_note", "Dry run: no files were written"),
    (
        "summary.unverified_header",
        "{} generated values fell back to the base language and need human translation:",
    ),
    // Summary - drift check
    ("summary.check_title", "Locale Drift Summary"),
    (
        "summary.category_drift",
        "{} {}: {} missing in target, {} missing in base, {} untranslated",
    ),
    ("summary.missing_in_target", "  {}: missing in target locale: {}"),
    ("summary.missing_in_base", "  {}: missing in base locale: {}"),
    ("summary.untranslated_value", "  {}: untranslated '{}' = \"{}\""),
    (
        "summary.check_totals",
        "{} categories compared: {} missing in target, {} missing in base, {} untranslated",
    ),
    // Error messages
    ("error.locales_root_not_exist", "Locales directory does not exist: {}"),
    ("error.run_failed", "Command failed: {}"),
];
