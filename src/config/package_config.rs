//! XML configuration loading and validation

use crate::{DepvizError, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Required root children, in the order they are validated
const REQUIRED_FIELDS: [&str; 3] = ["package_name", "repository", "mode"];

/// How the manifest is located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `repository` is a directory on the local filesystem
    Local,
    /// `repository` is the URL of the manifest itself
    Remote,
}

impl FromStr for Mode {
    type Err = DepvizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Mode::Local),
            "remote" => Ok(Mode::Remote),
            other => Err(DepvizError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Local => write!(f, "local"),
            Mode::Remote => write!(f, "remote"),
        }
    }
}

/// Validated contents of the XML config file
///
/// Every field is non-empty and trimmed. `mode` is kept as written; it is
/// checked against [`Mode`] when the manifest source is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Package (and subdirectory) to inspect
    pub package_name: String,

    /// Local directory or manifest URL, depending on mode
    pub repository: String,

    /// Raw mode string
    pub mode: String,
}

impl PackageConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DepvizError::ConfigNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| DepvizError::MalformedDocument(format!("not valid UTF-8: {}", e)))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration:\n{}", config);
        Ok(config)
    }

    /// Parse and validate a config document held in memory
    pub fn parse(xml: &str) -> Result<Self> {
        let fields = read_root_fields(xml)?;

        let [package_name, repository, mode] =
            REQUIRED_FIELDS.map(|name| (name, fields.get(name)));
        Ok(Self {
            package_name: require_text(package_name)?,
            repository: require_text(repository)?,
            mode: require_text(mode)?,
        })
    }

    /// Parsed mode, failing with `UnsupportedMode` for unknown values
    pub fn mode(&self) -> Result<Mode> {
        self.mode.parse()
    }
}

impl fmt::Display for PackageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package_name={}", self.package_name)?;
        writeln!(f, "repository={}", self.repository)?;
        write!(f, "mode={}", self.mode)
    }
}

/// Text of the first occurrence of each required field among the root's children
#[derive(Debug, Default)]
struct RootFields {
    values: [Option<String>; 3],
}

impl RootFields {
    fn slot(name: &[u8]) -> Option<usize> {
        REQUIRED_FIELDS.iter().position(|f| f.as_bytes() == name)
    }

    fn get(&self, name: &str) -> Option<&str> {
        Self::slot(name.as_bytes()).and_then(|i| self.values[i].as_deref())
    }
}

fn require_text((name, value): (&'static str, Option<&str>)) -> Result<String> {
    let text = value.ok_or(DepvizError::MissingField(name))?.trim();
    if text.is_empty() {
        return Err(DepvizError::EmptyField(name));
    }
    Ok(text.to_string())
}

/// Field being captured: its slot and whether a nested element has started
struct Capture {
    slot: usize,
    text: String,
    closed: bool,
}

fn read_root_fields(xml: &str) -> Result<RootFields> {
    let mut reader = Reader::from_str(xml);

    let mut fields = RootFields::default();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut capture: Option<Capture> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            DepvizError::MalformedDocument(format!(
                "{} at position {}",
                e,
                reader.error_position()
            ))
        })?;

        match event {
            Event::Start(ref e) => {
                open_element(depth, &mut seen_root)?;
                check_attributes(e)?;
                depth += 1;
                if depth == 2 {
                    capture = start_capture(&fields, e.name().as_ref());
                } else if let Some(ref mut c) = capture {
                    c.closed = true;
                }
            }
            Event::Empty(ref e) => {
                open_element(depth, &mut seen_root)?;
                check_attributes(e)?;
                if depth == 1 {
                    // `<mode/>` is present but empty
                    if let Some(c) = start_capture(&fields, e.name().as_ref()) {
                        fields.values[c.slot] = Some(String::new());
                    }
                } else if let Some(ref mut c) = capture {
                    c.closed = true;
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(DepvizError::MalformedDocument(
                        "unexpected closing tag".to_string(),
                    ));
                }
                if depth == 2 {
                    if let Some(c) = capture.take() {
                        fields.values[c.slot] = Some(c.text);
                    }
                }
                depth -= 1;
            }
            Event::Text(ref e) => {
                let text = String::from_utf8_lossy(e);
                if depth == 0 && !text.trim().is_empty() {
                    return Err(DepvizError::MalformedDocument(
                        "text outside the document element".to_string(),
                    ));
                }
                append_text(&mut capture, depth, &text);
            }
            Event::CData(ref e) => {
                outside_root(depth, "CDATA section")?;
                append_text(&mut capture, depth, &String::from_utf8_lossy(e));
            }
            Event::GeneralRef(ref e) => {
                outside_root(depth, "entity reference")?;
                let resolved = resolve_reference(e)?;
                append_text(&mut capture, depth, &resolved);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(DepvizError::MalformedDocument(
            "no root element found".to_string(),
        ));
    }
    if depth != 0 {
        return Err(DepvizError::MalformedDocument(
            "unexpected end of document: unclosed element".to_string(),
        ));
    }

    Ok(fields)
}

fn open_element(depth: usize, seen_root: &mut bool) -> Result<()> {
    if depth == 0 {
        if *seen_root {
            return Err(DepvizError::MalformedDocument(
                "junk after document element".to_string(),
            ));
        }
        *seen_root = true;
    }
    Ok(())
}

fn outside_root(depth: usize, what: &str) -> Result<()> {
    if depth == 0 {
        return Err(DepvizError::MalformedDocument(format!(
            "{} outside the document element",
            what
        )));
    }
    Ok(())
}

/// Reject duplicate, unquoted or value-less attributes
fn check_attributes(e: &BytesStart) -> Result<()> {
    for attr in e.attributes() {
        attr.map_err(|e| DepvizError::MalformedDocument(format!("Invalid attribute: {}", e)))?;
    }
    Ok(())
}

fn start_capture(fields: &RootFields, name: &[u8]) -> Option<Capture> {
    let slot = RootFields::slot(name)?;
    // Only the first matching child counts
    if fields.values[slot].is_some() {
        return None;
    }
    Some(Capture {
        slot,
        text: String::new(),
        closed: false,
    })
}

fn append_text(capture: &mut Option<Capture>, depth: usize, text: &str) {
    if depth != 2 {
        return;
    }
    if let Some(c) = capture {
        if !c.closed {
            c.text.push_str(text);
        }
    }
}

fn resolve_reference(e: &BytesRef) -> Result<String> {
    let name = String::from_utf8_lossy(e);

    let resolved = if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse().ok(),
        };
        code.and_then(char::from_u32).map(String::from)
    } else {
        resolve_predefined_entity(&name).map(String::from)
    };

    resolved.ok_or_else(|| {
        DepvizError::MalformedDocument(format!("undefined entity: &{};", name))
    })
}
