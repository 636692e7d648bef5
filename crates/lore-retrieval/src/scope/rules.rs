//! Keyword rules for automatic scope classification.

use lore_core::config::RecallConfig;
use lore_core::memory::KnowledgeLevel;

/// Phrases that point at the caller's own project.
pub const PROJECT_KEYWORDS: &[&str] = &[
    "我项目",
    "这里的",
    "我们",
    "当前项目",
    "配置文件",
    "项目结构",
    "我们项目",
];

/// Phrases that point at the language itself.
pub const LANGUAGE_KEYWORDS: &[&str] = &[
    "语法",
    "定义",
    "关键字",
    "类型",
    "接口",
    "函数",
    "变量",
    "类",
    "结构体",
    "如何定义",
    "怎么声明",
    "语法是什么",
];

/// One classification rule: any keyword contained in the lower-cased query
/// selects `level`, optionally only when a project context is present.
#[derive(Debug, Clone)]
pub struct ScopeRule {
    pub level: KnowledgeLevel,
    pub keywords: Vec<String>,
    pub requires_project_context: bool,
}

impl ScopeRule {
    fn new(level: KnowledgeLevel, keywords: &[String], requires_project_context: bool) -> Self {
        Self {
            level,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            requires_project_context,
        }
    }

    fn matches(&self, query_lower: &str, has_project_context: bool) -> bool {
        if self.requires_project_context && !has_project_context {
            return false;
        }
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && query_lower.contains(k.as_str()))
    }
}

/// Ordered rule list with a fallback level. First matching rule wins.
#[derive(Debug, Clone)]
pub struct ScopeRules {
    rules: Vec<ScopeRule>,
    fallback: KnowledgeLevel,
}

impl ScopeRules {
    pub fn new(rules: Vec<ScopeRule>, fallback: KnowledgeLevel) -> Self {
        Self { rules, fallback }
    }

    /// Built-in keyword lists, replaced per level by any non-empty override.
    pub fn from_config(config: &RecallConfig) -> Self {
        let project = keywords_or_default(&config.project_keywords, PROJECT_KEYWORDS);
        let language = keywords_or_default(&config.language_keywords, LANGUAGE_KEYWORDS);
        Self::new(
            vec![
                ScopeRule::new(KnowledgeLevel::Project, &project, true),
                ScopeRule::new(KnowledgeLevel::Language, &language, false),
            ],
            KnowledgeLevel::Library,
        )
    }

    pub fn classify(&self, query: &str, project_context: Option<&str>) -> KnowledgeLevel {
        let query_lower = query.to_lowercase();
        let has_context = project_context.is_some_and(|p| !p.is_empty());
        self.rules
            .iter()
            .find(|rule| rule.matches(&query_lower, has_context))
            .map_or(self.fallback, |rule| rule.level)
    }

    pub fn rules(&self) -> &[ScopeRule] {
        &self.rules
    }
}

impl Default for ScopeRules {
    fn default() -> Self {
        Self::from_config(&RecallConfig::default())
    }
}

fn keywords_or_default(overrides: &[String], defaults: &[&str]) -> Vec<String> {
    if overrides.is_empty() {
        defaults.iter().map(|k| (*k).to_string()).collect()
    } else {
        overrides.to_vec()
    }
}
