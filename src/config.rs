/*
 * ==========================================================================
 * SYNTA - Agent Workflow Language
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Analyzer settings with defaults, loadable from JSON.
 *
 * License:
 * This file is part of the SYNTA programming language project.
 *
 * SYNTA is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::AnalyzeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default input limit: 1 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// How a parse tree is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// Box-drawn tree labelled by grammar rule.
    #[default]
    Grammar,
    /// One summary line per top-level statement.
    Compact,
}

impl FromStr for TreeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grammar" => Ok(TreeStyle::Grammar),
            "compact" => Ok(TreeStyle::Compact),
            other => Err(format!("unknown tree style `{other}` (expected `grammar` or `compact`)")),
        }
    }
}

impl fmt::Display for TreeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TreeStyle::Grammar => "grammar",
            TreeStyle::Compact => "compact",
        })
    }
}

/// Settings for one analysis run.
///
/// Every field is optional in the JSON form; missing fields keep their
/// defaults and unknown fields are ignored.
///
/// ```json
/// { "max_input_bytes": 65536, "include_trivia": true, "tree_style": "compact" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Inputs larger than this are rejected before lexing.
    pub max_input_bytes: usize,

    /// Keep newline and comment tokens in token reports.
    pub include_trivia: bool,

    pub tree_style: TreeStyle,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            include_trivia: false,
            tree_style: TreeStyle::Grammar,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AnalyzeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, AnalyzeError> {
        let text = std::fs::read_to_string(path).map_err(|e| AnalyzeError::io(path.display().to_string(), e))?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded analyzer config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_input_bytes, 1024 * 1024);
        assert!(!config.include_trivia);
        assert_eq!(config.tree_style, TreeStyle::Grammar);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalyzerConfig::from_json_str(r#"{ "tree_style": "compact" }"#).unwrap();
        assert_eq!(config.tree_style, TreeStyle::Compact);
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = AnalyzerConfig::from_json_str(r#"{ "include_trivia": true, "color": "auto" }"#).unwrap();
        assert!(config.include_trivia);
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = AnalyzerConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, AnalyzeError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AnalyzerConfig::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AnalyzeError::Io { .. }));
    }

    #[test]
    fn tree_style_from_str() {
        assert_eq!("compact".parse::<TreeStyle>(), Ok(TreeStyle::Compact));
        assert!("fancy".parse::<TreeStyle>().is_err());
        assert_eq!(TreeStyle::Grammar.to_string(), "grammar");
    }
}
