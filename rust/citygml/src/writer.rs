// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Streaming XML sink
//!
//! Every emitter writes straight to one append-only sink; there is no output
//! tree and nothing already written is ever retracted. Each element start,
//! end, or text element goes on its own line.

use std::borrow::Cow;
use std::io::{self, Write};

/// Append-only XML output stream
pub struct XmlSink<W: Write> {
    out: W,
    indent: usize,
    depth: usize,
}

impl<W: Write> XmlSink<W> {
    /// Create a sink indenting nested elements by `indent` spaces (0 = flat)
    pub fn new(out: W, indent: usize) -> Self {
        Self {
            out,
            indent,
            depth: 0,
        }
    }

    pub fn declaration(&mut self) -> io::Result<()> {
        writeln!(self.out, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")
    }

    pub fn comment(&mut self, text: &str) -> io::Result<()> {
        self.pad()?;
        writeln!(self.out, "<!-- {} -->", text.replace("--", "- -"))
    }

    /// `<name>`
    pub fn open(&mut self, name: &str) -> io::Result<()> {
        self.open_with(name, &[])
    }

    /// `<name a="v" ...>`
    pub fn open_with(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        self.pad()?;
        write!(self.out, "<{}", name)?;
        self.write_attrs(attrs)?;
        writeln!(self.out, ">")?;
        self.depth += 1;
        Ok(())
    }

    /// `</name>`
    pub fn close(&mut self, name: &str) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.pad()?;
        writeln!(self.out, "</{}>", name)
    }

    /// `<name a="v" .../>`
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        self.pad()?;
        write!(self.out, "<{}", name)?;
        self.write_attrs(attrs)?;
        writeln!(self.out, "/>")
    }

    /// `<name>text</name>` on a single line
    pub fn text_element(&mut self, name: &str, text: &str) -> io::Result<()> {
        self.pad()?;
        writeln!(self.out, "<{0}>{1}</{0}>", name, escape(text))
    }

    /// Current nesting depth (0 outside the root element)
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) -> io::Result<()> {
        for (key, value) in attrs {
            write!(self.out, " {}=\"{}\"", key, escape(value))?;
        }
        Ok(())
    }

    fn pad(&mut self) -> io::Result<()> {
        if self.indent > 0 {
            write!(self.out, "{:width$}", "", width = self.depth * self.indent)?;
        }
        Ok(())
    }
}

/// Whether `name` can be written as an element name
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// Escape XML special characters in text and attribute values
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
