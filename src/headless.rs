//! Headless mode - print the guide without a TUI
//!
//! `--print` writes the plain-text export, `--json` the document model as
//! pretty JSON. Nothing is ever copied in print mode, so every copyable line
//! carries the `[copy]` marker.

use std::io::Write;

use iguide_core::prelude::*;
use iguide_core::{plain, Document, TargetOs};

/// Write the guide for `os` as plain text
pub fn write_text(out: &mut impl Write, os: TargetOs) -> Result<()> {
    let document = Document::build(os);
    out.write_all(plain::render(&document, |_| false).as_bytes())?;
    out.flush()?;
    debug!("Printed guide as text (os={})", os);
    Ok(())
}

/// Write the guide for `os` as JSON
pub fn write_json(out: &mut impl Write, os: TargetOs) -> Result<()> {
    let document = Document::build(os);
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    out.flush()?;
    debug!("Printed guide as JSON (os={})", os);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn text(os: TargetOs) -> String {
        let mut out = Vec::new();
        write_text(&mut out, os).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn json(os: TargetOs) -> serde_json::Value {
        let mut out = Vec::new();
        write_json(&mut out, os).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_text_contains_declared_commands() {
        let output = text(TargetOs::Unix);
        assert!(output.contains("$ pip install insight-cli-sarang  [copy]"));
        assert!(output.contains("$ insight-cli-sarang --version  [copy]"));
        assert!(output.contains("$ source venv/bin/activate  [copy]"));
        assert!(!output.contains("[copied]"));
    }

    #[test]
    fn test_text_follows_os() {
        let output = text(TargetOs::Windows);
        assert!(output.contains(r"$ venv\Scripts\activate  [copy]"));
        assert!(output.contains("Windows: set GOOGLE_API_KEY=your-api-key-here"));
        assert!(!output.contains("source venv/bin/activate"));
    }

    #[test]
    fn test_text_opens_with_title() {
        let output = text(TargetOs::Unix);
        let head: Vec<&str> = output.lines().take(3).collect();
        assert_snapshot!(head.join("\n"), @r"
        Implementation Guide
        ====================
        Complete guide to installing, configuring, and using Insight CLI
        ");
    }

    #[test]
    fn test_json_document_shape() {
        let doc = json(TargetOs::Windows);
        assert_eq!(doc["os"], "windows");

        let blocks = doc["blocks"].as_array().unwrap();
        assert_eq!(blocks[0]["type"], "title");
        assert!(blocks.iter().any(|b| b["type"] == "os_selector"));
    }

    #[test]
    fn test_json_ends_with_newline() {
        let mut out = Vec::new();
        write_json(&mut out, TargetOs::Unix).unwrap();
        assert_eq!(out.last(), Some(&b'\n'));
    }
}
