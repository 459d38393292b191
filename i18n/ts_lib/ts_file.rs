//
// Copyright (c) 2026 The maep-i18n developers
//
// This file is part of the maep-i18n project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! .ts (Qt Linguist) catalog parser and writer
//!
//! A .ts file is an XML document with one catalog per target locale:
//!
//! ```text
//! <TS version="2.1" language="sv">
//! <context>
//!     <name>About</name>
//!     <message>
//!         <source>Donate</source>
//!         <translation>Donera</translation>
//!     </message>
//!     <message numerus="yes">
//!         <source>%n place(s) found</source>
//!         <translation>
//!             <numerusform>%n plats hittad</numerusform>
//!             <numerusform>%n platser hittade</numerusform>
//!         </translation>
//!     </message>
//! </context>
//! </TS>
//! ```
//!
//! - `<translation type="unfinished">` marks missing work
//! - `type="obsolete"` / `type="vanished"` mark messages no longer in the sources
//! - `<comment>` disambiguates identical source strings in one context
//! - `<extracomment>`, `<translatorcomment>` and `<location>` carry
//!   translator-facing metadata

use std::io::{Read, Write};

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::ts_lib::error::TsError;

/// Status of a translation, from the `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    Vanished,
}

impl TranslationStatus {
    fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "obsolete" => Some(TranslationStatus::Obsolete),
            "vanished" => Some(TranslationStatus::Vanished),
            _ => None,
        }
    }

    /// Value written to the `type` attribute, `None` for finished entries
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Obsolete => Some("obsolete"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }

    /// Obsolete and vanished messages are kept for translators only
    pub fn is_obsolete(&self) -> bool {
        matches!(
            self,
            TranslationStatus::Obsolete | TranslationStatus::Vanished
        )
    }
}

/// Source code reference of a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub filename: Option<String>,
    /// Kept as text: lupdate writes both absolute and relative (`+3`) lines
    pub line: Option<String>,
}

/// A single message entry from a .ts file
///
/// Equality compares catalog content only; `line` is ignored so that a
/// re-serialized catalog compares equal to the original.
#[derive(Debug, Clone, Default)]
pub struct TsMessage {
    /// Original string (lookup key)
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Comment for translators extracted from the sources
    pub extra_comment: Option<String>,
    /// Comment written by a translator
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    /// Whether this is a plural-aware message (`numerus="yes"`)
    pub numerus: bool,
    /// Translations
    /// For singular: exactly one element
    /// For numerus: one element per `<numerusform>`
    pub translations: Vec<String>,
    pub status: TranslationStatus,
    /// Line of the `<message>` tag
    pub line: usize,
}

impl PartialEq for TsMessage {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.comment == other.comment
            && self.extra_comment == other.extra_comment
            && self.translator_comment == other.translator_comment
            && self.locations == other.locations
            && self.numerus == other.numerus
            && self.translations == other.translations
            && self.status == other.status
    }
}

impl TsMessage {
    /// Create a finished singular message
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        TsMessage {
            source: source.into(),
            translations: vec![translation.into()],
            ..Default::default()
        }
    }

    /// Create a finished numerus message
    pub fn new_numerus(source: impl Into<String>, forms: Vec<String>) -> Self {
        TsMessage {
            source: source.into(),
            numerus: true,
            translations: forms,
            ..Default::default()
        }
    }

    /// Finished, and at least one form carries text
    pub fn is_translated(&self) -> bool {
        self.status == TranslationStatus::Finished
            && self.translations.iter().any(|t| !t.is_empty())
    }
}

/// A named group of messages, usually one screen or dialog
#[derive(Debug, Clone, Default)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<TsMessage>,
    /// Line of the `<context>` tag
    pub line: usize,
}

impl PartialEq for TsContext {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.messages == other.messages
    }
}

impl TsContext {
    pub fn new(name: impl Into<String>) -> Self {
        TsContext {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Message counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete and vanished messages
    pub obsolete: usize,
}

/// Parsed .ts file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsFile {
    /// Schema version (`version` attribute)
    pub version: Option<String>,
    /// Target locale, absent in untranslated templates
    pub language: Option<String>,
    /// Locale of the source strings (`sourcelanguage` attribute)
    pub source_language: Option<String>,
    pub contexts: Vec<TsContext>,
}

/// Parser for .ts files
struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    line_starts: Vec<usize>,
}

impl<'a> TsParser<'a> {
    fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));

        TsParser {
            reader: Reader::from_str(text),
            line_starts,
        }
    }

    /// Line containing the current reader position
    fn line(&self) -> usize {
        let pos = self.reader.buffer_position() as usize;
        self.line_starts.partition_point(|&start| start <= pos)
    }

    fn next_event(&mut self) -> Result<Event<'a>, TsError> {
        self.reader
            .read_event()
            .map_err(|e| TsError::parse(self.line(), e.to_string()))
    }

    fn parse(&mut self) -> Result<TsFile, TsError> {
        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"TS" => return self.parse_ts(&e),
                Event::Empty(e) if e.name().as_ref() == b"TS" => return Self::ts_header(&e),
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(TsError::parse(
                        self.line(),
                        format!("expected <TS> root element, found <{}>", name),
                    ));
                }
                Event::Eof => {
                    return Err(TsError::parse(self.line(), "missing <TS> root element"));
                }
                // Declaration, doctype, comments, whitespace
                _ => continue,
            }
        }
    }

    fn ts_header(start: &BytesStart) -> Result<TsFile, TsError> {
        Ok(TsFile {
            version: attribute(start, b"version")?,
            language: attribute(start, b"language")?,
            source_language: attribute(start, b"sourcelanguage")?,
            contexts: Vec::new(),
        })
    }

    fn parse_ts(&mut self, start: &BytesStart) -> Result<TsFile, TsError> {
        let mut ts = Self::ts_header(start)?;

        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context()?;
                    ts.contexts.push(context);
                }
                Event::Start(e) => self.skip_element(&e)?,
                Event::End(_) => break,
                Event::Eof => return Err(TsError::parse(self.line(), "unterminated <TS>")),
                _ => continue,
            }
        }

        Ok(ts)
    }

    fn parse_context(&mut self) -> Result<TsContext, TsError> {
        let mut context = TsContext {
            line: self.line(),
            ..Default::default()
        };

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => context.name = self.read_text()?,
                    b"message" => {
                        let message = self.parse_message(&e)?;
                        context.messages.push(message);
                    }
                    _ => self.skip_element(&e)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(TsError::parse(self.line(), "unterminated <context>"));
                }
                _ => continue,
            }
        }

        Ok(context)
    }

    fn parse_message(&mut self, start: &BytesStart) -> Result<TsMessage, TsError> {
        let mut message = TsMessage {
            numerus: attribute(start, b"numerus")?.as_deref() == Some("yes"),
            line: self.line(),
            ..Default::default()
        };
        let mut has_translation = false;

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => message.source = self.read_text()?,
                    b"comment" => message.comment = Some(self.read_text()?),
                    b"extracomment" => message.extra_comment = Some(self.read_text()?),
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text()?)
                    }
                    b"location" => {
                        message.locations.push(location(&e)?);
                        self.skip_element(&e)?;
                    }
                    b"translation" => {
                        message.status = status(&e)?;
                        message.translations = if message.numerus {
                            self.read_numerus_forms()?
                        } else {
                            vec![self.read_text()?]
                        };
                        has_translation = true;
                    }
                    _ => self.skip_element(&e)?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => message.locations.push(location(&e)?),
                    b"translation" => {
                        message.status = status(&e)?;
                        has_translation = true;
                    }
                    b"source" => message.source.clear(),
                    b"comment" => message.comment = Some(String::new()),
                    _ => continue,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(TsError::parse(self.line(), "unterminated <message>"));
                }
                _ => continue,
            }
        }

        if !has_translation {
            debug!(line = message.line, "message without <translation>");
            message.status = TranslationStatus::Unfinished;
        }
        if !message.numerus && message.translations.is_empty() {
            message.translations.push(String::new());
        }

        Ok(message)
    }

    /// Collect the `<numerusform>` children of a `<translation>`
    fn read_numerus_forms(&mut self) -> Result<Vec<String>, TsError> {
        let mut forms = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(self.read_text()?);
                }
                Event::Empty(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(String::new());
                }
                Event::Start(e) => self.skip_element(&e)?,
                Event::End(_) => break,
                Event::Eof => {
                    return Err(TsError::parse(self.line(), "unterminated <translation>"));
                }
                // Indentation between forms
                _ => continue,
            }
        }

        Ok(forms)
    }

    /// Read the text content of the current element up to its end tag
    fn read_text(&mut self) -> Result<String, TsError> {
        let mut text = String::new();

        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| TsError::parse(self.line(), e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    let ch = self.byte_value(&e)?;
                    text.push(ch);
                }
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(TsError::parse(
                        self.line(),
                        format!("unexpected <{}> inside text", name),
                    ));
                }
                Event::End(_) => break,
                Event::Eof => return Err(TsError::parse(self.line(), "unterminated text")),
                _ => continue,
            }
        }

        Ok(text)
    }

    /// Decode `<byte value="x1b"/>` (hex) or `<byte value="27"/>` (decimal)
    fn byte_value(&self, e: &BytesStart) -> Result<char, TsError> {
        let value = attribute(e, b"value")?.unwrap_or_default();
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };

        code.and_then(char::from_u32).ok_or_else(|| {
            TsError::parse(self.line(), format!("invalid <byte> value: {}", value))
        })
    }

    fn skip_element(&mut self, start: &BytesStart) -> Result<(), TsError> {
        self.reader
            .read_to_end(start.name())
            .map_err(|e| TsError::parse(self.line(), e.to_string()))?;
        Ok(())
    }
}

fn attribute(e: &BytesStart, key: &[u8]) -> Result<Option<String>, TsError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn status(e: &BytesStart) -> Result<TranslationStatus, TsError> {
    Ok(attribute(e, b"type")?
        .as_deref()
        .and_then(TranslationStatus::from_attr)
        .unwrap_or_default())
}

fn location(e: &BytesStart) -> Result<Location, TsError> {
    Ok(Location {
        filename: attribute(e, b"filename")?,
        line: attribute(e, b"line")?,
    })
}

/// Escape element text; control characters become `<byte>` elements
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut plain = String::new();

    for c in s.chars() {
        if (c as u32) < 0x20 && !matches!(c, '\n' | '\t' | '\r') {
            out.push_str(&escape(plain.as_str()));
            plain.clear();
            out.push_str(&format!("<byte value=\"x{:x}\"/>", c as u32));
        } else {
            plain.push(c);
        }
    }
    out.push_str(&escape(plain.as_str()));

    out
}

impl TsFile {
    /// Parse a .ts file from a string
    pub fn parse(s: &str) -> Result<Self, TsError> {
        let mut parser = TsParser::new(s);
        let ts = parser.parse()?;
        debug!(
            language = ts.language.as_deref().unwrap_or("-"),
            contexts = ts.contexts.len(),
            "parsed catalog"
        );
        Ok(ts)
    }

    /// Parse a .ts file from a reader
    pub fn parse_from<R: Read>(mut reader: R) -> Result<Self, TsError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Find a context by name
    pub fn context(&self, name: &str) -> Option<&TsContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// All messages together with the name of their context
    pub fn messages(&self) -> impl Iterator<Item = (&str, &TsMessage)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    pub fn statistics(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for (_, message) in self.messages() {
            match message.status {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => stats.obsolete += 1,
            }
        }
        stats
    }

    /// Remove obsolete and vanished messages, and contexts left empty
    pub fn drop_obsolete(&mut self) {
        for context in &mut self.contexts {
            context.messages.retain(|m| !m.status.is_obsolete());
        }
        self.contexts.retain(|c| !c.messages.is_empty());
    }

    /// Write the catalog in the layout lupdate produces
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), TsError> {
        writeln!(w, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
        writeln!(w, "<!DOCTYPE TS>")?;

        write!(w, "<TS")?;
        if let Some(ref version) = self.version {
            write!(w, " version=\"{}\"", escape(version.as_str()))?;
        }
        if let Some(ref language) = self.language {
            write!(w, " language=\"{}\"", escape(language.as_str()))?;
        }
        if let Some(ref source_language) = self.source_language {
            write!(w, " sourcelanguage=\"{}\"", escape(source_language.as_str()))?;
        }
        writeln!(w, ">")?;

        for context in &self.contexts {
            writeln!(w, "<context>")?;
            writeln!(w, "    <name>{}</name>", escape_text(&context.name))?;
            for message in &context.messages {
                write_message(w, message)?;
            }
            writeln!(w, "</context>")?;
        }

        writeln!(w, "</TS>")?;
        Ok(())
    }

    pub fn to_xml_string(&self) -> Result<String, TsError> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn write_message<W: Write>(w: &mut W, message: &TsMessage) -> Result<(), TsError> {
    if message.numerus {
        writeln!(w, "    <message numerus=\"yes\">")?;
    } else {
        writeln!(w, "    <message>")?;
    }

    for loc in &message.locations {
        write!(w, "        <location")?;
        if let Some(ref filename) = loc.filename {
            write!(w, " filename=\"{}\"", escape(filename.as_str()))?;
        }
        if let Some(ref line) = loc.line {
            write!(w, " line=\"{}\"", escape(line.as_str()))?;
        }
        writeln!(w, "/>")?;
    }

    writeln!(w, "        <source>{}</source>", escape_text(&message.source))?;
    if let Some(ref comment) = message.comment {
        writeln!(w, "        <comment>{}</comment>", escape_text(comment))?;
    }
    if let Some(ref comment) = message.extra_comment {
        writeln!(w, "        <extracomment>{}</extracomment>", escape_text(comment))?;
    }
    if let Some(ref comment) = message.translator_comment {
        writeln!(
            w,
            "        <translatorcomment>{}</translatorcomment>",
            escape_text(comment)
        )?;
    }

    let type_attr = match message.status.as_attr() {
        Some(kind) => format!(" type=\"{}\"", kind),
        None => String::new(),
    };

    if message.numerus {
        if message.translations.is_empty() {
            writeln!(w, "        <translation{}></translation>", type_attr)?;
        } else {
            writeln!(w, "        <translation{}>", type_attr)?;
            for form in &message.translations {
                writeln!(
                    w,
                    "            <numerusform>{}</numerusform>",
                    escape_text(form)
                )?;
            }
            writeln!(w, "        </translation>")?;
        }
    } else {
        let text = message.translations.first().map(String::as_str).unwrap_or("");
        writeln!(
            w,
            "        <translation{}>{}</translation>",
            type_attr,
            escape_text(text)
        )?;
    }

    writeln!(w, "    </message>")?;
    Ok(())
}
