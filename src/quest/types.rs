use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Zodiac sign names recognised in inventories.
pub const ZODIACS: &[&str] = &[
    "ARIES",
    "TAURUS",
    "GEMINI",
    "CANCER",
    "LEO",
    "VIRGO",
    "LIBRA",
    "SCORPIO",
    "SAGITTARIUS",
    "CAPRICORN",
    "AQUARIUS",
    "PISCES",
];

/// Gem names recognised in inventories. Any of these discounts a toll of 3.
pub const GEMS: &[&str] = &[
    "GEM",
    "DIAMOND",
    "EMERALD",
    "AGATE",
    "RUBY",
    "PEARL",
    "SARDONYX",
    "ZIRCON",
    "SAPPHIRE",
    "CITRINE",
    "LAPISLAZULI",
    "GARNET",
    "AMETHYST",
    "BLOODSTONE",
    "OPAL",
    "MOONSTONE",
    "JASPER",
    "ONYX",
    "JADE",
];

pub fn is_gem(name: &str) -> bool {
    GEMS.contains(&name)
}

pub fn is_zodiac(name: &str) -> bool {
    ZODIACS.contains(&name)
}

/// Identity of a thing, independent of its (possibly shared) aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThingId(Uuid);

impl ThingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant-specific payload. The engine only ever looks at whether a thing
/// is a person; everything else is carried for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThingKind {
    #[default]
    Plain,
    Wand {
        magic: String,
    },
    Paper {
        sheets: u32,
        color: String,
        runes: String,
    },
    Person {
        magic: Option<String>,
    },
}

/// Something that can sit in an inventory.
///
/// The first name is the canonical id. Names are stored upper-case so they
/// compare directly against interpreted input.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    id: ThingId,
    names: Vec<String>,
    strings: Vec<String>,
    movable: bool,
    kind: ThingKind,
}

impl Thing {
    /// A plain, movable thing.
    pub fn new(name: &str) -> Self {
        Self {
            id: ThingId::new(),
            names: vec![name.trim().to_uppercase()],
            strings: Vec::new(),
            movable: true,
            kind: ThingKind::Plain,
        }
    }

    pub fn wand(name: &str, magic: &str) -> Self {
        Self::new(name).with_kind(ThingKind::Wand {
            magic: magic.to_string(),
        })
    }

    /// A sheet of paper. Its runes are recognised as matched strings.
    pub fn paper(name: &str, sheets: u32, color: &str, runes: &str) -> Self {
        let mut paper = Self::new(name).with_kind(ThingKind::Paper {
            sheets,
            color: color.to_string(),
            runes: runes.to_string(),
        });
        for rune in runes.split_whitespace() {
            paper = paper.with_string(rune);
        }
        paper
    }

    /// A person. People are never movable.
    pub fn person(name: &str, magic: Option<&str>) -> Self {
        Self::new(name).with_kind(ThingKind::Person {
            magic: magic.map(str::to_string),
        })
    }

    /// Add another name. Repeats are ignored.
    pub fn with_alias(mut self, alias: &str) -> Self {
        push_unique(&mut self.names, alias);
        self
    }

    pub fn with_string(mut self, string: &str) -> Self {
        push_unique(&mut self.strings, string);
        self
    }

    pub fn immovable(mut self) -> Self {
        self.movable = false;
        self
    }

    pub(crate) fn with_kind(mut self, kind: ThingKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> ThingId {
        self.id
    }

    /// Canonical name (first alias).
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn kind(&self) -> &ThingKind {
        &self.kind
    }

    pub fn is_person(&self) -> bool {
        matches!(self.kind, ThingKind::Person { .. })
    }

    pub fn is_movable(&self) -> bool {
        self.movable && !self.is_person()
    }
}

fn push_unique(list: &mut Vec<String>, word: &str) {
    let word = word.trim().to_uppercase();
    if !list.contains(&word) {
        list.push(word);
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of removing a thing from an inventory
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryResult {
    /// Thing removed; ownership passes to the caller
    Removed(Thing),
    /// Thing is fixed in place and stays where it was
    NotMovable { name: String },
}
