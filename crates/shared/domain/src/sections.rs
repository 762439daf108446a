use crate::constants::{ABOUT, FOOTER, HEADER};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Represents the set of page sections to compose.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SectionSet: u32 {
        const HEADER = 1 << 0;
        const ABOUT = 1 << 1;
        const FOOTER = 1 << 2;

        const ALL = Self::HEADER.bits() | Self::ABOUT.bits() | Self::FOOTER.bits();
    }
}

impl Default for SectionSet {
    /// A page renders every section unless configured otherwise.
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for SectionSet {
    fn from(s: &str) -> Self {
        match s {
            HEADER => Self::HEADER,
            ABOUT => Self::ABOUT,
            FOOTER => Self::FOOTER,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for SectionSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for SectionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for SectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// In-page anchor targets.
///
/// There is exactly one scrollable section today. A new anchor means a new
/// variant here plus its name in [`crate::constants`], which keeps the
/// producer (the section element) and the consumer (the navigation link)
/// tied to the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
}

impl SectionId {
    /// The anchor id shared by the navigation link and the section element.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => ABOUT,
        }
    }
}

impl From<SectionId> for SectionSet {
    fn from(id: SectionId) -> Self {
        match id {
            SectionId::About => Self::ABOUT,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
