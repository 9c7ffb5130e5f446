//! Line-oriented manifest parser

/// Name of the section whose keys are dependency names
pub const DEPENDENCIES_SECTION: &str = "dependencies";

/// A `[name]` header and the entries that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSection {
    /// Section name without brackets
    pub name: String,

    /// Keys of the `key = value` lines in this section, in order
    pub entries: Vec<String>,
}

impl ManifestSection {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Whether this is a `[dependencies]` section
    pub fn is_dependencies(&self) -> bool {
        self.name == DEPENDENCIES_SECTION
    }
}

/// Extract the dependency names declared in a manifest.
///
/// Never fails. If no dependency entries are found the names of every
/// section encountered are returned instead, so workspace manifests still
/// produce something useful.
pub fn parse(text: &str) -> Vec<String> {
    let mut section_names = Vec::new();
    let mut dependencies = Vec::new();
    let mut in_dependencies = false;

    for line in text.lines() {
        if let Some(name) = section_header(line) {
            section_names.push(name.to_string());
            in_dependencies = name == DEPENDENCIES_SECTION;
            continue;
        }

        if in_dependencies {
            if let Some(key) = entry_key(line) {
                dependencies.push(key.to_string());
            }
        }
    }

    if dependencies.is_empty() {
        tracing::debug!(
            sections = section_names.len(),
            "No dependency entries, falling back to section names"
        );
        section_names
    } else {
        dependencies
    }
}

/// Split a manifest into its sections, in document order.
///
/// Lines before the first header are dropped. Repeated headers produce
/// separate sections.
pub fn parse_sections(text: &str) -> Vec<ManifestSection> {
    let mut sections: Vec<ManifestSection> = Vec::new();

    for line in text.lines() {
        if let Some(name) = section_header(line) {
            sections.push(ManifestSection::new(name));
        } else if let (Some(section), Some(key)) = (sections.last_mut(), entry_key(line)) {
            section.entries.push(key.to_string());
        }
    }

    sections
}

fn section_header(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
}

fn entry_key(line: &str) -> Option<&str> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let (key, _) = content.trim().split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some(key)
}
