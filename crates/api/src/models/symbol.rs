use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one input file within a resolution run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct FileId(pub u32);

/// Identifies a lexical scope. Scope ids are assigned by the indexer and are
/// unique across the whole project, not just within one file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct ScopeId(pub u32);

/// Identifies a definition. Stable across a build: re-running the engine on
/// unchanged indices sees the same ids.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct SymbolId(pub u64);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct Range {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Range {
    pub fn contains(&self, line: usize, col: usize) -> bool {
        if line < self.start_line || line > self.end_line {
            return false;
        }
        if line == self.start_line && col < self.start_col {
            return false;
        }
        if line == self.end_line && col > self.end_col {
            return false;
        }
        true
    }
}

/// A position in the project: file plus source range. Used as the key for
/// per-reference resolution output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct Location {
    pub file: FileId,
    pub range: Range,
}

impl Location {
    pub fn new(file: FileId, range: Range) -> Self {
        Self { file, range }
    }
}

/// The map-key form used where locations key serialized output:
/// `file:start_line:start_col-end_line:end_col`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}:{}",
            self.file.0,
            self.range.start_line,
            self.range.start_col,
            self.range.end_line,
            self.range.end_col
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationParseError;

impl fmt::Display for LocationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("malformed location key, expected file:line:col-line:col")
    }
}

impl std::error::Error for LocationParseError {}

impl FromStr for Location {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn num<T: FromStr>(part: Option<&str>) -> Result<T, LocationParseError> {
            part.and_then(|p| p.parse().ok()).ok_or(LocationParseError)
        }
        let (start, end) = s.split_once('-').ok_or(LocationParseError)?;
        let mut head = start.split(':');
        let file = FileId(num(head.next())?);
        let start_line = num(head.next())?;
        let start_col = num(head.next())?;
        if head.next().is_some() {
            return Err(LocationParseError);
        }
        let (end_line, end_col) = end.split_once(':').ok_or(LocationParseError)?;
        Ok(Self::new(
            file,
            Range {
                start_line,
                start_col,
                end_line: num(Some(end_line))?,
                end_col: num(Some(end_col))?,
            },
        ))
    }
}
