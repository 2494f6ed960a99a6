//! The component catalog.

use indexmap::IndexMap;
use schemroute_core::Direction;

use crate::def::ComponentDef;
use crate::kind::{Category, ComponentKind};
use crate::pin::PinDef;

/// Component definitions keyed by kind, with a fallback for kinds that have
/// no entry.
///
/// Iteration follows insertion order, so palettes built from a library are
/// stable.
#[derive(Clone, Debug)]
pub struct ComponentLibrary {
    defs: IndexMap<ComponentKind, ComponentDef>,
    fallback: ComponentDef,
}

impl ComponentLibrary {
    /// A library holding only `fallback`, which also answers for every kind
    /// without its own entry.
    pub fn new(fallback: ComponentDef) -> Self {
        let mut defs = IndexMap::new();
        defs.insert(fallback.kind, fallback.clone());
        Self { defs, fallback }
    }

    /// The editor's builtin catalog. Kinds without an entry resolve to the
    /// generic IC (100x120, no default pins).
    pub fn builtin() -> Self {
        use ComponentKind as K;
        use Direction::{Down, Left, Right, Up};

        let mut lib = Self::new(ComponentDef::new(
            K::IcGeneric,
            "Generic IC",
            Category::IntegratedCircuits,
            100.0,
            120.0,
        ));
        let defs = [
            ComponentDef::new(K::Resistor, "Resistor", Category::Passives, 80.0, 20.0)
                .with_pin(PinDef::new("1", -40.0, 0.0, Left))
                .with_pin(PinDef::new("2", 40.0, 0.0, Right)),
            ComponentDef::new(K::Capacitor, "Capacitor", Category::Passives, 40.0, 40.0)
                .with_pin(PinDef::new("1", -20.0, 0.0, Left))
                .with_pin(PinDef::new("2", 20.0, 0.0, Right)),
            ComponentDef::new(K::TransistorNpn, "NPN BJT", Category::Semiconductors, 60.0, 60.0)
                .with_pin(PinDef::new("B", -30.0, 0.0, Left).with_label("B"))
                .with_pin(PinDef::new("C", 10.0, -30.0, Up).with_label("C"))
                .with_pin(PinDef::new("E", 10.0, 30.0, Down).with_label("E")),
            ComponentDef::new(K::Regulator, "Voltage Reg", Category::Power, 80.0, 60.0)
                .with_pin(PinDef::new("IN", -40.0, 0.0, Left).with_label("IN"))
                .with_pin(PinDef::new("OUT", 40.0, 0.0, Right).with_label("OUT"))
                .with_pin(PinDef::new("GND", 0.0, 30.0, Down).with_label("GND")),
            ComponentDef::new(K::Switch, "Switch", Category::Logic, 60.0, 20.0)
                .with_pin(PinDef::new("1", -30.0, 0.0, Left))
                .with_pin(PinDef::new("2", 30.0, 0.0, Right)),
            ComponentDef::new(
                K::Sensor,
                "Generic Sensor",
                Category::IntegratedCircuits,
                60.0,
                60.0,
            )
            .with_pin(PinDef::new("VCC", -30.0, -15.0, Left).with_label("VCC"))
            .with_pin(PinDef::new("GND", -30.0, 15.0, Left).with_label("GND"))
            .with_pin(PinDef::new("OUT", 30.0, 0.0, Right).with_label("OUT")),
            ComponentDef::new(K::VoltageSource, "Power", Category::Power, 40.0, 80.0)
                .with_pin(PinDef::new("POS", 0.0, -40.0, Up).with_label("+"))
                .with_pin(PinDef::new("NEG", 0.0, 40.0, Down).with_label("-")),
            ComponentDef::new(K::Ground, "Ground", Category::Power, 40.0, 40.0)
                .with_pin(PinDef::new("1", 0.0, -20.0, Up).with_label("GND")),
            ComponentDef::new(K::Unknown, "Unknown", Category::Misc, 40.0, 40.0),
        ];
        for def in defs {
            lib.insert(def);
        }
        lib
    }

    /// Add or replace the definition for `def.kind`, returning the previous
    /// one. Replacing the fallback kind replaces the fallback too.
    pub fn insert(&mut self, def: ComponentDef) -> Option<ComponentDef> {
        if def.kind == self.fallback.kind {
            self.fallback = def.clone();
        }
        self.defs.insert(def.kind, def)
    }

    /// The definition registered for `kind`, if any.
    pub fn get(&self, kind: ComponentKind) -> Option<&ComponentDef> {
        self.defs.get(&kind)
    }

    /// The definition for `kind`, or the fallback.
    pub fn resolve(&self, kind: ComponentKind) -> &ComponentDef {
        self.defs.get(&kind).unwrap_or(&self.fallback)
    }

    /// The definition used for kinds without an entry.
    pub fn fallback(&self) -> &ComponentDef {
        &self.fallback
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Always `false`: a library holds at least its fallback.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDef> + '_ {
        self.defs.values()
    }

    /// Definitions grouped by palette category, categories in order of
    /// first appearance.
    pub fn by_category(&self) -> IndexMap<Category, Vec<&ComponentDef>> {
        let mut groups: IndexMap<Category, Vec<&ComponentDef>> = IndexMap::new();
        for def in self.defs.values() {
            groups.entry(def.category).or_default().push(def);
        }
        groups
    }
}

impl Default for ComponentLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemroute_core::Point;
    use schemroute_grid::Footprint;

    #[test]
    fn builtin_has_reference_footprints() {
        let lib = ComponentLibrary::builtin();
        let expect = [
            (ComponentKind::Resistor, 80.0, 20.0),
            (ComponentKind::Capacitor, 40.0, 40.0),
            (ComponentKind::IcGeneric, 100.0, 120.0),
            (ComponentKind::TransistorNpn, 60.0, 60.0),
            (ComponentKind::Regulator, 80.0, 60.0),
            (ComponentKind::Switch, 60.0, 20.0),
            (ComponentKind::Sensor, 60.0, 60.0),
            (ComponentKind::VoltageSource, 40.0, 80.0),
            (ComponentKind::Ground, 40.0, 40.0),
            (ComponentKind::Unknown, 40.0, 40.0),
        ];
        assert_eq!(lib.len(), expect.len());
        for (kind, w, h) in expect {
            let def = lib.get(kind).unwrap_or_else(|| panic!("{kind} missing"));
            assert_eq!(def.footprint, Footprint::new(w, h), "{kind}");
        }
    }

    #[test]
    fn missing_kinds_resolve_to_generic_ic() {
        let lib = ComponentLibrary::builtin();
        assert!(lib.get(ComponentKind::Ic555).is_none());
        let def = lib.resolve(ComponentKind::Ic555);
        assert_eq!(def.kind, ComponentKind::IcGeneric);
        assert!(def.pins.is_empty());
        // UNKNOWN has its own entry and does not fall back.
        assert_eq!(lib.resolve(ComponentKind::Unknown).kind, ComponentKind::Unknown);
    }

    #[test]
    fn npn_pins_face_their_edges() {
        let lib = ComponentLibrary::builtin();
        let npn = lib.resolve(ComponentKind::TransistorNpn);
        let ids: Vec<&str> = npn.pins.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["B", "C", "E"]);
        let c = npn.pin("C").unwrap();
        assert_eq!(c.offset, Point::new(10.0, -30.0));
        assert_eq!(c.orientation, Some(Direction::Up));
    }

    #[test]
    fn insert_replaces_and_updates_fallback() {
        let mut lib = ComponentLibrary::builtin();
        let big_ic = ComponentDef::new(
            ComponentKind::IcGeneric,
            "Wide IC",
            Category::IntegratedCircuits,
            200.0,
            120.0,
        );
        let old = lib.insert(big_ic);
        assert_eq!(old.map(|d| d.label), Some("Generic IC".to_string()));
        assert_eq!(lib.resolve(ComponentKind::McuGeneric).label, "Wide IC");

        let led = ComponentDef::new(ComponentKind::Led, "LED", Category::Semiconductors, 40.0, 20.0);
        assert!(lib.insert(led).is_none());
        assert_eq!(lib.resolve(ComponentKind::Led).label, "LED");
    }

    #[test]
    fn categories_group_in_order() {
        let lib = ComponentLibrary::builtin();
        let groups = lib.by_category();
        let order: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(
            order,
            [
                Category::IntegratedCircuits,
                Category::Passives,
                Category::Semiconductors,
                Category::Power,
                Category::Logic,
                Category::Misc,
            ]
        );
        assert_eq!(groups[&Category::Power].len(), 3);
    }
}
