//! Run summary output: human-readable by default, JSON with `--json`.

use serde::Serialize;
use std::io::{self, Write};

/// Shared width for human separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "  {:<10} {}", format!("{key}:"), value.as_ref())
}

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-oriented sections.
    Pretty,
    /// One pretty-printed JSON document.
    Json,
}

impl OutputMode {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Pretty }
    }
}

/// Render a serializable value to `out` in the requested mode.
pub fn render_to<T: Serialize>(
    out: &mut dyn Write,
    mode: OutputMode,
    value: &T,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputMode::Pretty => pretty_fn(value, out)?,
    }
    Ok(())
}

/// Render a serializable value to stdout in the requested mode.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, mode, value, pretty_fn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: usize,
    }

    #[test]
    fn json_mode_serializes_value() {
        let mut buf = Vec::new();
        let sample = Sample { name: "g", count: 3 };
        render_to(&mut buf, OutputMode::Json, &sample, |_, _| Ok(())).expect("render");
        let parsed: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(parsed["name"], "g");
        assert_eq!(parsed["count"], 3);
    }

    #[test]
    fn pretty_mode_uses_callback() {
        let mut buf = Vec::new();
        let sample = Sample { name: "g", count: 3 };
        render_to(&mut buf, OutputMode::Pretty, &sample, |s, w| {
            pretty_kv(w, "name", s.name)
        })
        .expect("render");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "  name:      g\n");
    }

    #[test]
    fn rule_has_fixed_width() {
        let mut buf = Vec::new();
        pretty_rule(&mut buf).expect("rule");
        assert_eq!(buf.len(), PRETTY_RULE_WIDTH + 1);
    }
}
