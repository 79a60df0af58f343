//! Species name canonicalization
//!
//! Every stage that normalizes a species label goes through
//! [`SpeciesTable::canonicalize`], so preview, switch and forme-change lines
//! agree on what a species is called.

/// Fixed tables used to collapse cosmetic forms into one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesTable {
    /// Species whose every form maps to the base name (`Vivillon-Fancy` -> `Vivillon`)
    pub collapsed: &'static [&'static str],
    /// Exact full-label overrides for mechanically distinct but statistically merged forms
    pub overrides: &'static [(&'static str, &'static str)],
    /// Suffix stripped from totem forms
    pub totem_suffix: &'static str,
}

/// Families whose forms are cosmetic, or which change form in battle.
pub const COLLAPSED_SPECIES: &[&str] = &[
    "Urshifu",
    "Mimikyu",
    "Minior",
    "Toxtricity",
    "Genesect",
    "Eiscue",
    "Sawsbuck",
    "Deerling",
    "Alcremie",
    "Pikachu",
    "Vivillon",
    "Florges",
    "Flabébé",
    "Flabebe",
    "Floette",
    "Furfrou",
];

pub const FORM_OVERRIDES: &[(&str, &str)] = &[
    ("Gastrodon-East", "Gastrodon"),
    ("Shellos-East", "Shellos"),
    ("Basculin-Blue-Striped", "Basculin"),
    ("Polteageist-Antique", "Polteageist"),
    ("Sinistea-Antique", "Sinistea"),
    ("Keldeo-Resolute", "Keldeo"),
];

/// Base species that contain a hyphen in their own name.
pub const HYPHENATED_SPECIES: &[&str] = &[
    "Ho-Oh",
    "Porygon-Z",
    "Jangmo-o",
    "Hakamo-o",
    "Kommo-o",
    "Wo-Chien",
    "Chien-Pao",
    "Ting-Lu",
    "Chi-Yu",
];

impl SpeciesTable {
    pub const STANDARD: SpeciesTable = SpeciesTable {
        collapsed: COLLAPSED_SPECIES,
        overrides: FORM_OVERRIDES,
        totem_suffix: "-Totem",
    };

    /// Map a raw species label to its canonical species.
    ///
    /// Totem suffixes are removed before the tables are consulted, so the
    /// result is always a fixed point: `canonicalize(canonicalize(x)) == canonicalize(x)`.
    pub fn canonicalize(&self, label: &str) -> String {
        let mut name = label.trim();
        if !self.totem_suffix.is_empty() {
            while let Some(stripped) = name.strip_suffix(self.totem_suffix) {
                name = stripped;
            }
        }

        if let Some(base) = self
            .collapsed
            .iter()
            .find(|base| is_form_of(name, base))
        {
            return base.to_string();
        }

        if let Some((_, canonical)) = self.overrides.iter().find(|(from, _)| *from == name) {
            return canonical.to_string();
        }

        name.to_string()
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Canonicalize a species label with the standard tables
pub fn canonicalize(label: &str) -> String {
    SpeciesTable::STANDARD.canonicalize(label)
}

/// The species name without its form qualifier (`Rotom-Wash` -> `Rotom`)
pub fn species_root(species: &str) -> &str {
    if let Some(base) = HYPHENATED_SPECIES
        .iter()
        .find(|base| is_form_of(species, base))
    {
        return *base;
    }

    species
        .split_once('-')
        .map(|(root, _)| root)
        .unwrap_or(species)
}

/// Whether a preview label hides its form (`Silvally-*`)
pub fn is_wildcard_form(species: &str) -> bool {
    species.ends_with("-*")
}

fn is_form_of(name: &str, base: &str) -> bool {
    name.strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}
