use serde::Serialize;

/// A household appliance with a fixed rated draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appliance {
    pub name: String,
    pub rated_w: u32,
}

/// Built-in appliances in display order.
const BUILTIN: [(&str, u32); 18] = [
    ("Fan", 75),
    ("LED Light", 20),
    ("Television", 100),
    ("Laptop Charger", 65),
    ("Inverter Fridge", 150),
    ("Water Pump", 200),
    ("Air Conditioner", 1500),
    ("Heater", 2000),
    ("Washing Machine", 500),
    ("Microwave", 800),
    ("Electric Kettle", 1500),
    ("Electric Stove", 2000),
    ("Desktop Computer", 300),
    ("Gaming Console", 200),
    ("Electric Iron", 1200),
    ("Electric Geyser", 3000),
    ("Electric Water Heater", 3000),
    ("Electric Oven", 1500),
];

/// Closed name-to-wattage mapping used to resolve selected appliances.
///
/// Static configuration: built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplianceCatalog {
    entries: Vec<Appliance>,
}

impl ApplianceCatalog {
    /// The standard household catalog.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN)
    }

    /// Builds a catalog from `(name, rated_w)` pairs.
    ///
    /// A later entry with an existing name replaces the earlier wattage
    /// but keeps its position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut catalog = Self {
            entries: Vec::new(),
        };
        for (name, rated_w) in entries {
            let name = name.into();
            match catalog.entries.iter_mut().find(|a| a.name == name) {
                Some(existing) => existing.rated_w = rated_w,
                None => catalog.entries.push(Appliance { name, rated_w }),
            }
        }
        catalog
    }

    /// Rated wattage for `name`, if present. Names match exactly.
    pub fn wattage(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.rated_w)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.wattage(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appliance> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ApplianceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
