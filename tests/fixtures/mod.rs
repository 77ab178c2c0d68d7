#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use loc::config::{Config, LanguageRule, Registry};
use loc::exclusion::ExclusionFilter;
use loc::pattern::PatternSet;
use loc::Scanner;

/// Files of the sample project, with their paths relative to the root.
pub const PROJECT_FILES: &[(&str, &str)] = &[
    ("main.go", "package main\n\nfunc main() {\n\tprintln(\"hello\")\n}\n"),
    ("src/utils.go", "package src\n\nfunc Add(a, b int) int {\n\treturn a + b\n}\n"),
    (
        "src/utils_test.go",
        "package src\n\nimport \"testing\"\n\nfunc TestAdd(t *testing.T) {\n\t// test code\n}\n",
    ),
    (
        "src/tests/integration.go",
        "package tests\n\n// integration test\nfunc TestIntegration() {\n}\n",
    ),
    (
        "app.spec.ts",
        "describe('app', () => {\n\tit('works', () => {\n\t\t// test\n\t});\n});\n",
    ),
    ("component.test.js", "test('component', () => {\n\t// test code\n});\n"),
    ("build/output.go", "// generated file\npackage main\n\nvar Generated = true\n"),
    ("gen/models.go", "// Auto-generated file\npackage gen\n\ntype Model struct{}\n"),
    ("node_modules/package/index.js", "module.exports = {};\n"),
    (".git/config", "[core]\n\trepositoryformatversion = 0\n"),
    ("README.md", "# Test Project\n\nThis is a test.\n"),
];

/// Code lines per file of [`PROJECT_FILES`] under [`project_config`].
pub const PROJECT_LINES: &[(&str, u64)] = &[
    ("main.go", 4),
    ("src/utils.go", 4),
    ("src/utils_test.go", 4),
    ("src/tests/integration.go", 3),
    ("app.spec.ts", 4),
    ("component.test.js", 2),
    ("build/output.go", 2),
    ("gen/models.go", 2),
    ("node_modules/package/index.js", 1),
    ("README.md", 2),
];

pub const PROJECT_CONFIG_JSON: &str = r#"{
  "languages": {
    "go": { "extensions": [".go"], "skip_patterns": ["^\\s*//", "^\\s*$"] },
    "typescript": { "extensions": [".ts"], "skip_patterns": ["^\\s*//", "^\\s*$"] },
    "javascript": { "extensions": [".js"], "skip_patterns": ["^\\s*//", "^\\s*$"] },
    "markdown": { "extensions": [".md"], "skip_patterns": ["^\\s*$"] }
  }
}"#;

/// Temp dir under the target directory so no exclusion pattern hits the parent path.
pub fn temp_dir() -> TempDir {
    TempDir::new_in(env!("CARGO_TARGET_TMPDIR")).unwrap()
}

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

/// Creates the sample project and returns its root.
pub fn create_project() -> TempDir {
    let dir = temp_dir();
    write_files(dir.path(), PROJECT_FILES);
    dir
}

pub fn project_config() -> Config {
    Config::from_json(PROJECT_CONFIG_JSON).unwrap()
}

pub fn write_project_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, PROJECT_CONFIG_JSON).unwrap();
    path
}

pub fn lines_excluding(excluded: &[&str]) -> u64 {
    PROJECT_LINES
        .iter()
        .filter(|(path, _)| !excluded.contains(path))
        .map(|(_, lines)| lines)
        .sum()
}

pub fn rule(extensions: &[&str], skip_patterns: &[&str]) -> LanguageRule {
    LanguageRule {
        extensions: extensions.iter().map(|s| s.to_string()).collect(),
        skip_patterns: skip_patterns.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn scanner(root: &Path, config: &Config, exclusions: &[&str]) -> Scanner {
    let registry = Registry::compile(config).unwrap();
    let rules = PatternSet::compile(exclusions).unwrap();
    Scanner::new(root, registry, ExclusionFilter::new(root, rules))
}
