//! Component kinds and palette categories.

use std::fmt;
use std::str::FromStr;

macro_rules! component_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// The kind of a placed component.
        ///
        /// Serialized as the upper-case names used in schematic documents
        /// (`"RESISTOR"`, `"TRANSISTOR_NPN"`, ...).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ComponentKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl ComponentKind {
            /// Every kind, in document order.
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$variant),+];

            /// The document name of this kind.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ComponentKind::$variant => $name,)+
                }
            }
        }

        impl FromStr for ComponentKind {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(ComponentKind::$variant),)+
                    _ => Err(ParseKindError { input: s.to_string() }),
                }
            }
        }
    };
}

component_kinds! {
    Resistor => "RESISTOR",
    Capacitor => "CAPACITOR",
    Inductor => "INDUCTOR",
    Diode => "DIODE",
    Led => "LED",
    TransistorNpn => "TRANSISTOR_NPN",
    TransistorPnp => "TRANSISTOR_PNP",
    MosfetN => "MOSFET_N",
    MosfetP => "MOSFET_P",
    IcGeneric => "IC_GENERIC",
    Ic555 => "IC_555",
    IcOpamp => "IC_OPAMP",
    McuGeneric => "MCU_GENERIC",
    LogicAnd => "LOGIC_AND",
    LogicOr => "LOGIC_OR",
    LogicNot => "LOGIC_NOT",
    LogicNand => "LOGIC_NAND",
    VoltageSource => "VOLTAGE_SOURCE",
    Ground => "GROUND",
    Connector => "CONNECTOR",
    Switch => "SWITCH",
    Sensor => "SENSOR",
    Regulator => "REGULATOR",
    Unknown => "UNKNOWN",
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known component kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    input: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component kind '{}'", self.input)
    }
}

impl std::error::Error for ParseKindError {}

// Unrecognized names deserialize to `Unknown` so a document with a kind
// this build has never heard of still loads and routes.
#[cfg(feature = "serde")]
impl serde::Serialize for ComponentKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ComponentKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or(ComponentKind::Unknown))
    }
}

/// Palette grouping of a component definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Resistors, capacitors, inductors.
    #[cfg_attr(feature = "serde", serde(rename = "Passives"))]
    Passives,
    /// Generic ICs, sensors, timers, op-amps.
    #[cfg_attr(feature = "serde", serde(rename = "Integrated Circuits"))]
    IntegratedCircuits,
    /// Transistors and diodes.
    #[cfg_attr(feature = "serde", serde(rename = "Semiconductors"))]
    Semiconductors,
    /// Supplies, regulators, ground.
    #[cfg_attr(feature = "serde", serde(rename = "Power"))]
    Power,
    /// Switches and gates.
    #[cfg_attr(feature = "serde", serde(rename = "Logic"))]
    Logic,
    /// Everything else.
    #[cfg_attr(feature = "serde", serde(rename = "Misc"))]
    Misc,
}

impl Category {
    /// Display name, as shown in the editor palette.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Passives => "Passives",
            Category::IntegratedCircuits => "Integrated Circuits",
            Category::Semiconductors => "Semiconductors",
            Category::Power => "Power",
            Category::Logic => "Logic",
            Category::Misc => "Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
