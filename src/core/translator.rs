// ============================================================================
// LocSync - 启发式翻译生成
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 键名到占位翻译文本的启发式生成
// 边界:
//   - ✅ 键名到基准语言标签的归一化（下划线/驼峰拆词、首字母大写）
//   - ✅ 词表逐词替换生成目标语言文本
//   - ✅ 常见缩写修正
//   - ✅ 人工覆盖表加载
//   - ❌ 不应包含树结构操作
//   - ❌ 不应包含文件写入
//   - ❌ 不应承诺翻译质量（产出是占位文本，等待人工复核）
//
// 生成的目标语言文本质量刻意很低：它只保证界面不把原始键名直接
// 渲染给用户；整句没有命中词表时原样回退基准文本，宁可明显未翻译
// 也不要悄悄译错。回退的键会在运行报告中列出等待人工处理。
//
// ============================================================================

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;

/// 驼峰拆词正则（内部大写字母前插入空格）
fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z])").expect("static regex"))
}

/// 阿拉伯文字符范围（含补充区、扩展区和表现形式区）
const ARABIC_RANGES: &[(char, char)] = &[
    ('\u{0600}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'),
    ('\u{08A0}', '\u{08FF}'),
    ('\u{FB50}', '\u{FDFF}'),
    ('\u{FE70}', '\u{FEFF}'),
];

/// 文本是否包含阿拉伯文字符
pub fn contains_arabic(text: &str) -> bool {
    text.chars()
        .any(|c| ARABIC_RANGES.iter().any(|&(lo, hi)| c >= lo && c <= hi))
}

/// 标题化后需要还原的缩写
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Usd", "USD"),
    ("Eur", "EUR"),
    ("Sar", "SAR"),
    ("Aed", "AED"),
    ("Egp", "EGP"),
    ("Kwd", "KWD"),
    ("Qar", "QAR"),
    ("Bhd", "BHD"),
    ("Omr", "OMR"),
    ("Jod", "JOD"),
    ("Lbp", "LBP"),
    ("Iqd", "IQD"),
    ("Bmi", "BMI"),
    ("Gpa", "GPA"),
    ("Roi", "ROI"),
    ("Vat", "VAT"),
    ("Ev", "EV"),
    ("Ac", "AC"),
    ("Dc", "DC"),
    ("Hp", "HP"),
    ("Kw", "kW"),
    ("Kwh", "kWh"),
    ("Mph", "mph"),
    ("Psi", "PSI"),
];

/// 内置英阿词表（键为小写英文单词）
const BUILTIN_TERMS: &[(&str, &str)] = &[
    // 通用界面词
    ("calculate", "احسب"),
    ("calculator", "حاسبة"),
    ("title", "العنوان"),
    ("description", "الوصف"),
    ("result", "النتيجة"),
    ("results", "النتائج"),
    ("total", "الإجمالي"),
    ("amount", "المبلغ"),
    ("value", "القيمة"),
    ("price", "السعر"),
    ("cost", "التكلفة"),
    ("fee", "الرسوم"),
    ("rate", "المعدل"),
    ("percentage", "النسبة المئوية"),
    ("enter", "أدخل"),
    ("input", "إدخال"),
    ("output", "الإخراج"),
    ("reset", "إعادة تعيين"),
    ("clear", "مسح"),
    ("copy", "نسخ"),
    ("help", "مساعدة"),
    ("tips", "نصائح"),
    ("examples", "أمثلة"),
    ("formula", "الصيغة"),
    ("error", "خطأ"),
    ("invalid", "غير صحيح"),
    ("note", "ملاحظة"),
    ("label", "التسمية"),
    ("unit", "الوحدة"),
    ("weight", "الوزن"),
    ("height", "الطول"),
    ("age", "العمر"),
    ("date", "التاريخ"),
    ("daily", "اليومي"),
    ("monthly", "الشهري"),
    ("yearly", "السنوي"),
    // 亲属称谓（遗产计算器）
    ("husband", "الزوج"),
    ("wife", "الزوجة"),
    ("son", "الابن"),
    ("daughter", "الابنة"),
    ("father", "الأب"),
    ("mother", "الأم"),
    ("grandfather", "الجد"),
    ("grandson", "حفيد"),
    ("granddaughter", "حفيدة"),
    ("brother", "الأخ"),
    ("sister", "الأخت"),
    // 遗产术语
    ("heirs", "الورثة"),
    ("estate", "التركة"),
    ("inheritance", "الميراث"),
    ("debts", "الديون"),
    ("wasiyyah", "الوصية"),
    ("distribution", "التوزيع"),
    ("share", "الحصة"),
    ("shares", "الحصص"),
    // 货币
    ("usd", "دولار أمريكي"),
    ("eur", "يورو"),
    ("sar", "ريال سعودي"),
    ("aed", "درهم إماراتي"),
    ("egp", "جنيه مصري"),
    ("kwd", "دينار كويتي"),
    ("qar", "ريال قطري"),
    ("bhd", "دينار بحريني"),
    ("omr", "ريال عماني"),
    ("jod", "دينار أردني"),
    ("lbp", "ليرة لبنانية"),
    ("iqd", "دينار عراقي"),
];

/// 英文到目标语言的逐词替换表
#[derive(Debug, Clone)]
pub struct TermSubstitutionTable {
    /// 小写英文单词 → 目标语言文本
    terms: HashMap<String, String>,
}

impl Default for TermSubstitutionTable {
    fn default() -> Self {
        Self::from_pairs(BUILTIN_TERMS.iter().copied())
    }
}

impl TermSubstitutionTable {
    /// 从词对构建（测试和替换词表用）
    pub fn from_pairs<'a, I: IntoIterator<Item = (&'a str, &'a str)>>(pairs: I) -> Self {
        Self {
            terms: pairs
                .into_iter()
                .map(|(en, target)| (en.to_lowercase(), target.to_string()))
                .collect(),
        }
    }

    /// 整词查找（大小写不敏感）
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.terms.get(&token.to_lowercase()).map(String::as_str)
    }
}

/// 人工翻译覆盖对
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverridePair {
    /// 基准语言文本
    pub base: String,
    /// 目标语言文本
    pub target: String,
}

/// 人工翻译覆盖表
///
/// 键为全限定键路径 `<分类>:<根键>.<点号路径>`，优先于启发式生成。
#[derive(Debug, Clone, Default)]
pub struct ManualOverrideTable {
    entries: HashMap<String, OverridePair>,
}

impl ManualOverrideTable {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read override table: {}", path.display()))?;
        let entries: HashMap<String, OverridePair> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse override table: {}", path.display()))?;
        Ok(Self { entries })
    }

    /// 按全限定键查找
    pub fn get(&self, qualified_key: &str) -> Option<&OverridePair> {
        self.entries.get(qualified_key)
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn from_entries<I: IntoIterator<Item = (String, OverridePair)>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

/// 启发式生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// 基准语言标签
    pub base: String,
    /// 目标语言文本
    pub target: String,
    /// 词表一个词都没命中，目标侧原样回退了基准文本
    pub fell_back: bool,
}

/// 启发式翻译生成器
#[derive(Debug, Clone)]
pub struct HeuristicTranslator {
    table: TermSubstitutionTable,
}

impl HeuristicTranslator {
    /// 使用指定词表创建
    pub fn new(table: TermSubstitutionTable) -> Self {
        Self { table }
    }

    /// 从叶子键名生成一对占位文本
    pub fn generate(&self, leaf_key: &str) -> Generated {
        let base = Self::humanize(leaf_key);
        let (target, fell_back) = self.substitute(&base);
        Generated { base, target, fell_back }
    }

    /// 基于已有基准文本生成目标语言文本
    pub fn substitute(&self, base_text: &str) -> (String, bool) {
        let mut matched = 0usize;
        let tokens: Vec<String> = base_text
            .split_whitespace()
            .map(|token| match self.table.lookup(token) {
                Some(translated) => {
                    matched += 1;
                    translated.to_string()
                }
                None => token.to_string(),
            })
            .collect();

        if matched == 0 {
            // 一个词都没命中：回退基准文本，报告会将其列为待人工处理
            return (base_text.to_string(), true);
        }

        (tokens.join(" "), false)
    }

    /// 键名到可读的基准语言标签
    ///
    /// snake_case / kebab-case / camelCase 统一拆词后逐词首字母大写，
    /// 再还原常见缩写。
    pub fn humanize(leaf_key: &str) -> String {
        let spaced = camel_boundary().replace_all(leaf_key, " $1");
        let spaced = spaced.replace(['_', '-'], " ");

        let titled: Vec<String> = spaced
            .split_whitespace()
            .map(Self::capitalize)
            .map(|word| Self::fix_abbreviation(&word))
            .collect();

        titled.join(" ")
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }

    fn fix_abbreviation(word: &str) -> String {
        for &(titled, fixed) in ABBREVIATIONS {
            if word == titled {
                return fixed.to_string();
            }
        }
        word.to_string()
    }
}

impl Default for HeuristicTranslator {
    fn default() -> Self {
        Self::new(TermSubstitutionTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_snake_case() {
        assert_eq!(
            HeuristicTranslator::humanize("error_soil_negative"),
            "Error Soil Negative"
        );
    }

    #[test]
    fn humanizes_camel_case() {
        assert_eq!(HeuristicTranslator::humanize("footerNote"), "Footer Note");
        assert_eq!(HeuristicTranslator::humanize("dtiRatio"), "Dti Ratio");
    }

    #[test]
    fn restores_known_abbreviations() {
        assert_eq!(HeuristicTranslator::humanize("price_usd"), "Price USD");
        assert_eq!(HeuristicTranslator::humanize("bmi_value"), "BMI Value");
        assert_eq!(HeuristicTranslator::humanize("consumption_kwh"), "Consumption kWh");
    }

    #[test]
    fn generates_target_text_via_word_table() {
        let translator = HeuristicTranslator::default();
        let generated = translator.generate("results_title");

        assert_eq!(generated.base, "Results Title");
        assert_eq!(generated.target, "النتائج العنوان");
        assert!(!generated.fell_back);
    }

    #[test]
    fn unmatched_tokens_pass_through_when_any_token_matched() {
        let translator = HeuristicTranslator::default();
        let (target, fell_back) = translator.substitute("Soil Value");

        assert!(!fell_back);
        assert!(target.contains("Soil"));
        assert!(contains_arabic(&target));
    }

    #[test]
    fn falls_back_to_base_when_nothing_matched() {
        let translator = HeuristicTranslator::default();
        let generated = translator.generate("dti_ratio");

        assert_eq!(generated.base, "Dti Ratio");
        assert_eq!(generated.target, "Dti Ratio");
        assert!(generated.fell_back);
        assert!(!contains_arabic(&generated.target));
    }

    #[test]
    fn substitution_table_is_replaceable() {
        let table = TermSubstitutionTable::from_pairs([("soil", "التربة")]);
        let translator = HeuristicTranslator::new(table);
        let (target, fell_back) = translator.substitute("Soil");

        assert_eq!(target, "التربة");
        assert!(!fell_back);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = TermSubstitutionTable::default();
        assert_eq!(table.lookup("Results"), table.lookup("results"));
        assert!(table.lookup("Results").is_some());
    }

    #[test]
    fn detects_arabic_script() {
        assert!(contains_arabic("احسب"));
        assert!(contains_arabic("Mixed احسب text"));
        assert!(!contains_arabic("Latin only 123"));
    }
}
