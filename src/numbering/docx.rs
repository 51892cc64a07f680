//! Reading list definitions from a WordprocessingML numbering part.
//!
//! A `numbering.xml` part holds abstract list definitions (`w:abstractNum`,
//! one `w:lvl` per level) and numbering instances (`w:num`) that point at
//! an abstract definition and may override individual levels.

use super::config::NumberingOptions;
use super::format::NumberFormat;
use super::level::{ListLevel, RestartPolicy};
use super::manager::ListManager;
use crate::common::error::{Error, Result};
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// WordprocessingML lists have at most nine levels (`w:ilvl` 0 to 8).
const MAX_LEVELS: usize = 9;

/// An abstract list definition (`w:abstractNum`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractNumbering {
    /// `w:abstractNumId`
    pub id: u32,
    /// Levels indexed by `w:ilvl`
    pub levels: Vec<ListLevel>,
}

/// A per-level override inside a numbering instance (`w:lvlOverride`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOverride {
    /// `w:ilvl` of the overridden level
    pub level: usize,
    /// `w:startOverride`
    pub start: Option<u32>,
    /// A complete replacement level (`w:lvl` nested in the override)
    pub definition: Option<ListLevel>,
}

/// A numbering instance (`w:num`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingInstance {
    /// `w:numId`, the id paragraphs refer to
    pub id: u32,
    /// The abstract definition this instance uses
    pub abstract_num_id: u32,
    pub overrides: Vec<LevelOverride>,
}

/// Parsed content of a numbering part.
///
/// # Examples
///
/// ```rust
/// use longan::numbering::docx::NumberingPart;
///
/// let xml = br#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:abstractNum w:abstractNumId="0">
///     <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/></w:lvl>
///   </w:abstractNum>
///   <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
/// </w:numbering>"#;
///
/// let mut manager = NumberingPart::parse(xml)?.into_manager();
/// assert_eq!(manager.formatted_number(1, 0).as_deref(), Some("1. "));
/// # Ok::<(), longan::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingPart {
    abstract_nums: Vec<AbstractNumbering>,
    nums: Vec<NumberingInstance>,
}

impl NumberingPart {
    /// Parse the XML of a numbering part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::XmlError`] when the XML is malformed.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut parser = PartParser::default();
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => parser.open(&e)?,
                Ok(Event::Empty(e)) => {
                    parser.open(&e)?;
                    parser.close(e.local_name().as_ref());
                },
                Ok(Event::End(e)) => parser.close(e.local_name().as_ref()),
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {},
            }
            buf.clear();
        }

        Ok(parser.part)
    }

    /// Abstract list definitions, in document order.
    #[inline]
    pub fn abstract_nums(&self) -> &[AbstractNumbering] {
        &self.abstract_nums
    }

    /// Numbering instances, in document order.
    #[inline]
    pub fn nums(&self) -> &[NumberingInstance] {
        &self.nums
    }

    pub fn get_abstract_num(&self, id: u32) -> Option<&AbstractNumbering> {
        self.abstract_nums.iter().find(|a| a.id == id)
    }

    pub fn get_num(&self, id: u32) -> Option<&NumberingInstance> {
        self.nums.iter().find(|n| n.id == id)
    }

    /// Build a [`ListManager`] with every definition and instance
    /// registered. Abstract ids become list ids and `w:numId`s become
    /// instance ids; a `w:numId` of 0 means "not numbered" and is never
    /// registered.
    #[inline]
    pub fn into_manager(self) -> ListManager {
        self.into_manager_with_options(NumberingOptions::default())
    }

    /// Same as [`into_manager`](Self::into_manager) with explicit options.
    pub fn into_manager_with_options(self, options: NumberingOptions) -> ListManager {
        let mut manager = ListManager::with_options(options);

        for num in &self.nums {
            // numId 0 removes numbering from a paragraph
            if num.id == 0 {
                debug!("Ignoring numbering instance with id 0");
                continue;
            }
            let base = self
                .get_abstract_num(num.abstract_num_id)
                .map(|a| a.levels.as_slice())
                .unwrap_or_default();
            let overrides = resolve_overrides(base, &num.overrides);
            manager.add_instance(num.id, num.abstract_num_id, overrides);
        }
        for abstract_num in self.abstract_nums {
            manager.add_list(abstract_num.id, abstract_num.levels);
        }

        manager
    }
}

/// Turn `w:lvlOverride` entries into a full override table. Levels that are
/// not overridden copy the base level so that they render unchanged.
fn resolve_overrides(base: &[ListLevel], overrides: &[LevelOverride]) -> Option<Vec<ListLevel>> {
    let len = overrides.iter().map(|o| o.level + 1).max()?;
    let mut table: Vec<ListLevel> = (0..len)
        .map(|index| base.get(index).cloned().unwrap_or_default())
        .collect();

    for o in overrides {
        let slot = &mut table[o.level];
        if let Some(definition) = &o.definition {
            *slot = definition.clone();
        }
        if let Some(start) = o.start {
            slot.start = Some(start);
        }
    }

    Some(table)
}

/// Streaming state while walking the part.
#[derive(Default)]
struct PartParser {
    part: NumberingPart,
    abstract_num: Option<AbstractNumbering>,
    num: Option<NumberingInstance>,
    level_override: Option<LevelOverride>,
    /// The `w:lvl` being read and its `w:ilvl`
    level: Option<(usize, ListLevel)>,
}

impl PartParser {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"abstractNum" => {
                let id = attr_u32(e, b"abstractNumId").unwrap_or_default();
                self.abstract_num = Some(AbstractNumbering {
                    id,
                    levels: Vec::new(),
                });
            },
            b"num" if self.abstract_num.is_none() => {
                let id = attr_u32(e, b"numId").unwrap_or_default();
                self.num = Some(NumberingInstance {
                    id,
                    abstract_num_id: 0,
                    overrides: Vec::new(),
                });
            },
            b"abstractNumId" => {
                if let (Some(num), Some(id)) = (self.num.as_mut(), attr_u32(e, b"val")) {
                    num.abstract_num_id = id;
                }
            },
            b"lvlOverride" if self.num.is_some() => {
                let level = attr_u32(e, b"ilvl").unwrap_or_default() as usize;
                self.level_override = Some(LevelOverride {
                    level,
                    start: None,
                    definition: None,
                });
            },
            b"startOverride" => {
                if let Some(o) = self.level_override.as_mut() {
                    o.start = attr_u32(e, b"val");
                }
            },
            b"lvl" if self.abstract_num.is_some() || self.level_override.is_some() => {
                let index = attr_u32(e, b"ilvl").unwrap_or_default() as usize;
                // Word writes lvlRestart only when it differs from "always"
                self.level = Some((index, ListLevel::default()));
            },
            name => {
                if let Some((_, level)) = self.level.as_mut() {
                    read_level_property(level, name, e)?;
                }
            },
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"lvl" => {
                let Some((index, level)) = self.level.take() else {
                    return;
                };
                if index >= MAX_LEVELS {
                    return;
                }
                if let Some(o) = self.level_override.as_mut() {
                    o.definition = Some(level);
                } else if let Some(abstract_num) = self.abstract_num.as_mut() {
                    let levels = &mut abstract_num.levels;
                    if levels.len() <= index {
                        levels.resize(index + 1, ListLevel::default());
                    }
                    levels[index] = level;
                }
            },
            b"lvlOverride" => {
                if let (Some(o), Some(num)) = (self.level_override.take(), self.num.as_mut())
                    && o.level < MAX_LEVELS
                {
                    num.overrides.push(o);
                }
            },
            b"abstractNum" => {
                if let Some(abstract_num) = self.abstract_num.take() {
                    self.part.abstract_nums.push(abstract_num);
                }
            },
            b"num" => {
                if let Some(num) = self.num.take() {
                    self.part.nums.push(num);
                }
            },
            _ => {},
        }
    }
}

fn read_level_property(level: &mut ListLevel, name: &[u8], e: &BytesStart<'_>) -> Result<()> {
    match name {
        b"start" => level.start = attr_u32(e, b"val"),
        b"numFmt" => {
            if let Some(value) = attr_string(e, b"val")? {
                level.number_format = Some(NumberFormat::from_ooxml(&value));
            }
        },
        b"lvlText" => level.template = attr_string(e, b"val")?,
        b"lvlRestart" => {
            if let Some(value) = attr_u32(e, b"val") {
                level.restart = RestartPolicy::from_raw(value.min(i32::MAX as u32) as i32);
            }
        },
        b"isLgl" => {
            level.is_legal = attr_string(e, b"val")?
                .is_none_or(|v| !matches!(v.as_str(), "0" | "false" | "off"));
        },
        _ => {},
    }
    Ok(())
}

fn attr_string(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::XmlError(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn attr_u32(e: &BytesStart<'_>, key: &[u8]) -> Option<u32> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| atoi_simd::parse_pos::<u32, false>(attr.value.trim_ascii()).ok())
}
