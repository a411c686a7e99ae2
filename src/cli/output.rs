//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{LexiphraseArgs, OutputFormat};
use crate::error::Result;

/// Result structure for word list compilation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompileResult {
    pub source: String,
    pub output: String,
    pub keys: usize,
    pub canonical_texts: usize,
    pub file_size_bytes: u64,
    pub duration_ms: u64,
}

/// One token of an analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub text: String,
    pub token_type: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub position_increment: usize,
    pub position_length: usize,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        TokenRecord {
            text: token.text.clone(),
            token_type: token.token_type.as_str().to_string(),
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            position_increment: token.position_increment,
            position_length: token.position_length,
        }
    }
}

/// Tokens produced for one input line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineAnalysis {
    pub line: usize,
    pub text: String,
    pub tokens: Vec<TokenRecord>,
}

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub lines: Vec<LineAnalysis>,
    pub total_tokens: usize,
    pub total_matches: usize,
    pub emit_all_matches: bool,
    pub duration_ms: u64,
}

/// One dictionary entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub key: String,
    pub text: String,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub keys: usize,
    pub canonical_texts: usize,
    pub automaton_size_bytes: u64,
    pub entries: Option<Vec<DictionaryEntry>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexiphraseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexiphraseArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().ends_with("AnalysisResults") => {
            output_analysis_results_human(&value, args)
        }
        _ if std::any::type_name::<T>().ends_with("DictionaryStats") => {
            output_dictionary_stats_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output analysis results in human format.
fn output_analysis_results_human(value: &serde_json::Value, args: &LexiphraseArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return output_generic_human(value, args);
    };

    let lines = obj
        .get("lines")
        .and_then(|l| l.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    let multi_line = lines.len() > 1;

    for line in lines {
        if multi_line {
            let number = line.get("line").and_then(|n| n.as_u64()).unwrap_or(0);
            let text = line.get("text").and_then(|t| t.as_str()).unwrap_or("");
            println!("{number}: {text}");
        }

        let tokens = line
            .get("tokens")
            .and_then(|t| t.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();
        for token in tokens {
            println!("{}{}", if multi_line { "  " } else { "" }, format_token(token));
        }
    }

    if args.verbosity() > 1 {
        println!();
        if let Some(total) = obj.get("total_tokens").and_then(|t| t.as_u64()) {
            println!("Total tokens: {total}");
        }
        if let Some(matches) = obj.get("total_matches").and_then(|m| m.as_u64()) {
            println!("Dictionary matches: {matches}");
        }
        if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Analysis time: {duration}ms");
        }
    }
    Ok(())
}

/// Output dictionary statistics in human format.
fn output_dictionary_stats_human(value: &serde_json::Value, _args: &LexiphraseArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Dictionary Statistics:");
        println!("══════════════════════");

        if let Some(path) = obj.get("path").and_then(|p| p.as_str()) {
            println!("Path: {path}");
        }
        if let Some(keys) = obj.get("keys").and_then(|k| k.as_u64()) {
            println!("Analyzed keys: {keys}");
        }
        if let Some(texts) = obj.get("canonical_texts").and_then(|t| t.as_u64()) {
            println!("Canonical texts: {texts}");
        }
        if let Some(size) = obj.get("automaton_size_bytes").and_then(|s| s.as_u64()) {
            println!("Automaton size: {}", format_bytes(size));
        }

        if let Some(entries) = obj.get("entries").and_then(|e| e.as_array()) {
            println!();
            println!("Entries:");
            println!("────────");
            for entry in entries {
                let key = entry.get("key").and_then(|k| k.as_str()).unwrap_or("");
                let text = entry.get("text").and_then(|t| t.as_str()).unwrap_or("");
                println!("  {key} → {text}");
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &LexiphraseArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexiphraseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format one serialized token as `text [start,end) TYPE pos_inc/pos_len`.
fn format_token(token: &serde_json::Value) -> String {
    let field = |name: &str| token.get(name).and_then(|v| v.as_u64()).unwrap_or(0);
    format!(
        "{}\t[{},{})\t{}\tinc={} len={}",
        token.get("text").and_then(|t| t.as_str()).unwrap_or(""),
        field("start_offset"),
        field("end_offset"),
        token.get("token_type").and_then(|t| t.as_str()).unwrap_or(""),
        field("position_increment"),
        field("position_length"),
    )
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
