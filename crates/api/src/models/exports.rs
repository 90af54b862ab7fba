use super::definition::ModulePath;
use super::symbol::SymbolId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One entry in a module's export table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "export")]
pub enum Export {
    /// The exported name is defined in this module.
    Local { symbol: SymbolId },
    /// `export { original as name } from "source"` — forwarded from another
    /// module, possibly the head of a multi-hop chain.
    Reexport { source: ModulePath, original: SmolStr },
}

/// A module's exported surface: named entries plus any `export * from`
/// sources, in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub named: IndexMap<SmolStr, Export>,
    /// Sources of `export * from "m"` / `from m import *`, searched in order
    /// after named entries miss.
    #[serde(default)]
    pub star_sources: Vec<ModulePath>,
}

impl ExportTable {
    pub fn get(&self, name: &str) -> Option<&Export> {
        self.named.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.star_sources.is_empty()
    }
}
