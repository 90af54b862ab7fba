use super::definition::Definition;
use super::exports::ExportTable;
use super::language::Language;
use super::reference::Reference;
use super::resolution::Resolution;
use super::scope::LexicalScope;
use super::symbol::{FileId, Location, SymbolId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Everything the semantic indexer produced for one file. Immutable input to
/// the engine; one per file, keyed by project-relative `path`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SemanticIndex {
    pub file: FileId,
    pub path: SmolStr,
    pub language: Language,
    pub scopes: Vec<LexicalScope>,
    pub definitions: Vec<Definition>,
    pub references: Vec<Reference>,
    pub exports: ExportTable,
}

/// The engine's whole-project output, consumed by call-graph builders and
/// find-references / go-to-definition tooling.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResolvedSymbols {
    /// Per call site, every candidate target. Empty vector = unresolved;
    /// consumers must treat that as "target unknown", never as an error.
    /// Serialized with string location keys (JSON object keys).
    #[serde(with = "location_keyed")]
    pub resolved_references: IndexMap<Location, Vec<Resolution>>,
    /// Reverse index: definition → every site that resolved to it.
    pub references_to_symbol: IndexMap<SymbolId, Vec<Location>>,
    /// The input references, in stable file order.
    pub references: Vec<Reference>,
    /// Every definition from every accepted file.
    pub definitions: IndexMap<SymbolId, Definition>,
}

impl ResolvedSymbols {
    pub fn resolutions_at(&self, location: &Location) -> &[Resolution] {
        self.resolved_references
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// `Location` keys rendered through their `Display`/`FromStr` string form,
/// since JSON object keys cannot be structs.
mod location_keyed {
    use super::*;
    use serde::de::Error;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(
        map: &IndexMap<Location, Vec<Resolution>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(location, v)| (location.to_string(), v)))
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<IndexMap<Location, Vec<Resolution>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Vec<Resolution>>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                key.parse::<Location>()
                    .map(|location| (location, value))
                    .map_err(D::Error::custom)
            })
            .collect()
    }
}
