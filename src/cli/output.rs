use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::dispatch::{CouncilReport, ProviderResult};

pub(crate) const USAGE: &str = "Usage: query_llms.py <prompt>";

#[derive(Debug, Serialize)]
struct UsageError<'a> {
    error: &'a str,
    chatgpt: Option<ProviderResult>,
    gemini: Option<ProviderResult>,
}

pub(crate) fn render_report(report: &CouncilReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

/// Single-line JSON with `", "` and `": "` separators.
pub(crate) fn render_usage_error() -> Result<String> {
    let payload = UsageError {
        error: USAGE,
        chatgpt: None,
        gemini: None,
    };

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedFormatter);
    payload
        .serialize(&mut serializer)
        .context("Failed to serialize usage error to JSON")?;
    String::from_utf8(buffer).context("Usage error JSON was not UTF-8")
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
