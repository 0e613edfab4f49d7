//! Skill vocabulary — canonical skill terms plus alias → canonical mappings.
//!
//! Built once at startup (built-in list or JSON file) and shared immutably
//! behind an `Arc` for the lifetime of the process. Matching itself lives in
//! `extractor`; this module only owns the data.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Canonical skill terms, in list order.
/// NOTE: "javaproblem solving" is a single literal entry and must stay
/// unsplit — match output depends on the exact list.
const DEFAULT_SKILLS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "react",
    "git",
    "python",
    "flask",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "javaproblem solving",
    "communication",
    "teamwork",
    "java",
    "spring",
    "hibernate",
    "machine learning",
    "ai",
    "tensorflow",
    "pytorch",
    "devops",
    "ci/cd",
    "jenkins",
    "leadership",
    "management",
    "agile",
    "scrum",
    "c#",
    "dotnet",
    ".net",
    "c++",
    "php",
    "ruby",
    "go",
    "rust",
    "scala",
    "mongodb",
    "mysql",
    "postgresql",
    "oracle",
    "redis",
    "elasticsearch",
    "azure",
    "gcp",
    "google cloud",
    "terraform",
    "ansible",
    "puppet",
    "angular",
    "vue",
    "svelte",
    "jquery",
    "bootstrap",
    "sass",
    "less",
    "linux",
    "windows",
    "macos",
    "bash",
    "powershell",
    "shell scripting",
    "rest api",
    "graphql",
    "microservices",
    "serverless",
    "lambda",
    "testing",
    "unit testing",
    "integration testing",
    "selenium",
    "jest",
    "pytest",
    "security",
    "encryption",
    "oauth",
    "jwt",
    "cybersecurity",
    "data analysis",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "tableau",
    "big data",
    "hadoop",
    "spark",
    "kafka",
    "airflow",
];

/// Alias → canonical skill mappings.
const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("py", "python"),
    ("aws", "aws"),
    ("ml", "machine learning"),
    ("ai", "ai"),
    ("devops", "devops"),
    ("c#", "c#"),
    (".net", "dotnet"),
    ("c++", "c++"),
    ("php", "php"),
    ("ruby", "ruby"),
    ("go", "go"),
    ("rust", "rust"),
    ("scala", "scala"),
    ("mongo", "mongodb"),
    ("mysql", "mysql"),
    ("postgres", "postgresql"),
    ("oracle", "oracle"),
    ("redis", "redis"),
    ("azure", "azure"),
    ("gcp", "gcp"),
    ("google cloud", "google cloud"),
    ("terraform", "terraform"),
    ("ansible", "ansible"),
    ("angular", "angular"),
    ("vue", "vue"),
    ("jquery", "jquery"),
    ("bootstrap", "bootstrap"),
    ("sass", "sass"),
    ("linux", "linux"),
    ("windows", "windows"),
    ("macos", "macos"),
    ("bash", "bash"),
    ("powershell", "powershell"),
    ("rest", "rest api"),
    ("graphql", "graphql"),
    ("microservices", "microservices"),
    ("serverless", "serverless"),
    ("testing", "testing"),
    ("unit testing", "unit testing"),
    ("selenium", "selenium"),
    ("jest", "jest"),
    ("pytest", "pytest"),
    ("security", "security"),
    ("oauth", "oauth"),
    ("jwt", "jwt"),
    ("data analysis", "data analysis"),
    ("pandas", "pandas"),
    ("numpy", "numpy"),
    ("matplotlib", "matplotlib"),
    ("tableau", "tableau"),
    ("big data", "big data"),
    ("hadoop", "hadoop"),
    ("spark", "spark"),
    ("kafka", "kafka"),
];

/// Immutable skill vocabulary: canonical terms plus an alias table.
/// Entries are compared case-insensitively, so everything is lower-cased once
/// at construction.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    synonyms: BTreeMap<String, String>,
}

/// On-disk vocabulary format: `{"skills": [..], "synonyms": {alias: canonical}}`.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    skills: Vec<String>,
    #[serde(default)]
    synonyms: BTreeMap<String, String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from raw terms, lower-casing everything.
    ///
    /// Alias targets that are neither a canonical skill nor another alias are
    /// kept but logged — unresolvable targets are a data-quality problem in
    /// the supplied list, not a startup failure.
    pub fn new(skills: Vec<String>, synonyms: BTreeMap<String, String>) -> Self {
        let skills: Vec<String> = skills.into_iter().map(|s| s.to_lowercase()).collect();
        let synonyms: BTreeMap<String, String> = synonyms
            .into_iter()
            .map(|(alias, canonical)| (alias.to_lowercase(), canonical.to_lowercase()))
            .collect();

        for (alias, canonical) in &synonyms {
            let known = skills.iter().any(|s| s == canonical) || synonyms.contains_key(canonical);
            if !known {
                tracing::warn!("Synonym '{alias}' maps to unknown canonical skill '{canonical}'");
            }
        }

        Self { skills, synonyms }
    }

    /// The built-in default vocabulary.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_SYNONYMS
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        )
    }

    /// Loads a vocabulary from a JSON file (see `VocabularyFile`).
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
        let parsed: VocabularyFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse vocabulary file '{}'", path.display()))?;
        Ok(Self::new(parsed.skills, parsed.synonyms))
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn synonyms(&self) -> &BTreeMap<String, String> {
        &self.synonyms
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_contains_core_skills() {
        let vocab = SkillVocabulary::builtin();
        for skill in ["python", "flask", "sql", "machine learning", "rest api"] {
            assert!(
                vocab.skills().iter().any(|s| s == skill),
                "missing '{skill}'"
            );
        }
    }

    #[test]
    fn test_builtin_keeps_fused_entry_unsplit() {
        let vocab = SkillVocabulary::builtin();
        assert!(vocab.skills().iter().any(|s| s == "javaproblem solving"));
        // The fused entry swallowed the standalone phrase — it must not exist.
        assert!(!vocab.skills().iter().any(|s| s == "problem solving"));
        // "java" is still present as its own later entry.
        assert!(vocab.skills().iter().any(|s| s == "java"));
    }

    #[test]
    fn test_builtin_synonym_targets_all_resolve() {
        let vocab = SkillVocabulary::builtin();
        for (alias, canonical) in vocab.synonyms() {
            assert!(
                vocab.skills().iter().any(|s| s == canonical),
                "alias '{alias}' points at unknown skill '{canonical}'"
            );
        }
    }

    #[test]
    fn test_new_lowercases_skills_and_synonyms() {
        let vocab = SkillVocabulary::new(
            vec!["Python".to_string(), "SQL".to_string()],
            BTreeMap::from([("Py".to_string(), "PYTHON".to_string())]),
        );
        assert_eq!(vocab.skills(), &["python".to_string(), "sql".to_string()]);
        assert_eq!(vocab.synonyms().get("py"), Some(&"python".to_string()));
    }

    #[test]
    fn test_unknown_synonym_target_is_kept() {
        // Warned about, but never dropped — the lint is advisory.
        let vocab = SkillVocabulary::new(
            vec!["python".to_string()],
            BTreeMap::from([("k8s".to_string(), "kubernetes".to_string())]),
        );
        assert_eq!(vocab.synonyms().get("k8s"), Some(&"kubernetes".to_string()));
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"skills": ["Rust", "Tokio"], "synonyms": {{"rs": "rust"}}}}"#
        )
        .unwrap();

        let vocab = SkillVocabulary::from_file(file.path()).unwrap();
        assert_eq!(vocab.skill_count(), 2);
        assert_eq!(vocab.skills()[0], "rust");
        assert_eq!(vocab.synonyms().get("rs"), Some(&"rust".to_string()));
    }

    #[test]
    fn test_from_file_synonyms_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"skills": ["rust"]}}"#).unwrap();

        let vocab = SkillVocabulary::from_file(file.path()).unwrap();
        assert_eq!(vocab.synonym_count(), 0);
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        assert!(SkillVocabulary::from_file(Path::new("/nonexistent/vocab.json")).is_err());
    }
}
