//! Shared type definitions for the Trailhead roadmap navigator.
//!
//! This crate holds the types every other Trailhead crate agrees on: the
//! closed set of section identifiers and the static module table, the
//! renderer-agnostic accent palette, the document/widget content model
//! loaded from the embedded catalog, and the `Msg`/`Effect` enums that
//! carry UI intent through the application.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod content;

pub use content::{
    Block, Branch, Callout, CalloutKind, Checklist, Concept, ConceptGrid, DataTable, DecisionNode,
    DecisionTree, ModuleDoc, Quiz, WidgetContent,
};

/// Identifier of a roadmap section: the overview landing page or one of the
/// six modules, in their fixed order.
///
/// This is the value the navigation bus carries. The set is closed (every
/// selection a component can hold or publish is one of these variants), so
/// an out-of-range navigation target is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    /// Landing page with the module grid and core principles.
    #[serde(rename = "overview")]
    Overview,
    /// Module 01: Foundations.
    #[serde(rename = "m01")]
    Foundations,
    /// Module 02: Systems Design.
    #[serde(rename = "m02")]
    SystemsDesign,
    /// Module 03: Cloud Engineering.
    #[serde(rename = "m03")]
    CloudEngineering,
    /// Module 04: AI & ML.
    #[serde(rename = "m04")]
    AiMl,
    /// Module 05: Design & Craft.
    #[serde(rename = "m05")]
    DesignCraft,
    /// Module 06: Communication.
    #[serde(rename = "m06")]
    Communication,
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::Overview
    }
}

impl SectionId {
    /// The six modules in their fixed total order. `Overview` is not a
    /// module and is never part of this slice.
    pub fn modules() -> &'static [SectionId] {
        const ORDER: [SectionId; 6] = [
            SectionId::Foundations,
            SectionId::SystemsDesign,
            SectionId::CloudEngineering,
            SectionId::AiMl,
            SectionId::DesignCraft,
            SectionId::Communication,
        ];
        &ORDER
    }

    /// Zero-based position of this module in the fixed order, `None` for
    /// `Overview`.
    pub fn ordinal(self) -> Option<usize> {
        Self::modules().iter().position(|m| *m == self)
    }

    pub fn is_overview(self) -> bool {
        self == SectionId::Overview
    }

    /// The module after this one in the fixed order. `None` at the last
    /// module and for `Overview`; the caller gates its "next" control on
    /// this rather than range-checking.
    pub fn next(self) -> Option<SectionId> {
        let idx = self.ordinal()?;
        Self::modules().get(idx + 1).copied()
    }

    /// The module before this one in the fixed order. `None` at the first
    /// module and for `Overview`.
    pub fn previous(self) -> Option<SectionId> {
        let idx = self.ordinal()?;
        idx.checked_sub(1).map(|i| Self::modules()[i])
    }

    /// Stable string form (`"overview"`, `"m01"` … `"m06"`), matching the
    /// serde representation and the catalog/progress files.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Foundations => "m01",
            SectionId::SystemsDesign => "m02",
            SectionId::CloudEngineering => "m03",
            SectionId::AiMl => "m04",
            SectionId::DesignCraft => "m05",
            SectionId::Communication => "m06",
        }
    }

    /// Descriptor for this module, `None` for `Overview`.
    pub fn descriptor(self) -> Option<&'static ModuleDescriptor> {
        MODULES.iter().find(|m| m.id == self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Self::Overview),
            "m01" => Ok(Self::Foundations),
            "m02" => Ok(Self::SystemsDesign),
            "m03" => Ok(Self::CloudEngineering),
            "m04" => Ok(Self::AiMl),
            "m05" => Ok(Self::DesignCraft),
            "m06" => Ok(Self::Communication),
            _ => Err(ParseSectionIdError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSectionIdError;

impl fmt::Display for ParseSectionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid section id; expected 'overview' or 'm01'..'m06'")
    }
}

impl Error for ParseSectionIdError {}

/// Named accent colors used throughout the roadmap content.
///
/// Renderer-agnostic on purpose: content and registry crates tag concepts,
/// callouts, and modules with one of these names, and the TUI theme maps
/// them to concrete RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Amber,
    Green,
    Violet,
    Orange,
    Blue,
    Red,
    Yellow,
}

/// Static record describing one module: identity, position, display label,
/// decorative glyph, phase label, and accent color.
///
/// Attributes are immutable and defined once in [`MODULES`]; the ordinal
/// position there defines the total order used for previous/next
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub id: SectionId,
    /// Two-digit ordinal string shown in badges ("01" … "06").
    pub num: &'static str,
    pub label: &'static str,
    /// Decorative marker rendered next to the label.
    pub glyph: &'static str,
    /// Phase/grouping label ("Months 1–3", "Ongoing", …).
    pub phase: &'static str,
    pub accent: Accent,
}

/// The module table. Order here is the navigation order.
pub const MODULES: [ModuleDescriptor; 6] = [
    ModuleDescriptor {
        id: SectionId::Foundations,
        num: "01",
        label: "Foundations",
        glyph: "⚡",
        phase: "Months 1–3",
        accent: Accent::Cyan,
    },
    ModuleDescriptor {
        id: SectionId::SystemsDesign,
        num: "02",
        label: "Systems Design",
        glyph: "⌂",
        phase: "Months 3–6",
        accent: Accent::Amber,
    },
    ModuleDescriptor {
        id: SectionId::CloudEngineering,
        num: "03",
        label: "Cloud Engineering",
        glyph: "☁",
        phase: "Months 4–8",
        accent: Accent::Green,
    },
    ModuleDescriptor {
        id: SectionId::AiMl,
        num: "04",
        label: "AI & ML",
        glyph: "◉",
        phase: "Months 6–12",
        accent: Accent::Violet,
    },
    ModuleDescriptor {
        id: SectionId::DesignCraft,
        num: "05",
        label: "Design & Craft",
        glyph: "✎",
        phase: "Ongoing",
        accent: Accent::Orange,
    },
    ModuleDescriptor {
        id: SectionId::Communication,
        num: "06",
        label: "Communication",
        glyph: "➤",
        phase: "Ongoing",
        accent: Accent::Blue,
    },
];

/// Messages that update application state.
///
/// Key events are routed to the focused component directly; `Msg` carries
/// the remaining event-loop traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (drives the deferred scroll timer).
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
}

/// Side effects reported by components for the runtime to execute.
///
/// Components never mutate global state directly; they return effects and
/// the runtime applies them, mirroring the broadcaster/subscriber split:
/// a component that changed the selection has already updated its own copy
/// and published on the bus by the time this effect reaches the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A control changed the selection; schedule the deferred cosmetic
    /// scroll-to-top of the content viewport.
    NavigationOccurred(SectionId),
    /// Move focus to the next region (nav strip → content → footer).
    FocusNext,
    /// Move focus to the previous region.
    FocusPrev,
    /// Exit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_order_is_total_and_stable() {
        let mods = SectionId::modules();
        assert_eq!(mods.len(), 6);
        for (idx, id) in mods.iter().enumerate() {
            assert_eq!(id.ordinal(), Some(idx));
        }
        assert_eq!(SectionId::Overview.ordinal(), None);
    }

    #[test]
    fn next_and_previous_gate_at_the_ends() {
        assert_eq!(SectionId::Foundations.previous(), None);
        assert_eq!(SectionId::Foundations.next(), Some(SectionId::SystemsDesign));
        assert_eq!(SectionId::Communication.next(), None);
        assert_eq!(
            SectionId::Communication.previous(),
            Some(SectionId::DesignCraft)
        );
        assert_eq!(SectionId::Overview.next(), None);
        assert_eq!(SectionId::Overview.previous(), None);
    }

    #[test]
    fn string_forms_round_trip() {
        for id in std::iter::once(SectionId::Overview).chain(SectionId::modules().iter().copied()) {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
            let json = serde_json::to_string(&id).expect("serialize section id");
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
        assert!("m07".parse::<SectionId>().is_err());
    }

    #[test]
    fn every_module_has_a_descriptor() {
        for id in SectionId::modules() {
            let desc = id.descriptor().expect("descriptor");
            assert_eq!(desc.id, *id);
        }
        assert!(SectionId::Overview.descriptor().is_none());
    }
}
