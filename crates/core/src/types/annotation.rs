//! Minimal annotation-shape recognition.
//!
//! Front-ends hand annotations through as written (`User`, `Handler[]`,
//! `List[Handler]`, `Vec<Handler>`). We only distinguish a plain type name
//! from a homogeneous-collection wrapper; anything fancier degrades to the
//! raw string as a plain name.

/// Collection wrappers recognized across the four languages.
const COLLECTION_WRAPPERS: &[&str] = &[
    "Array", "Set", "List", "Vec", "VecDeque", "HashSet", "BTreeSet", "list", "set", "frozenset",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationShape<'a> {
    Plain(&'a str),
    Collection { wrapper: &'a str, element: &'a str },
}

impl<'a> AnnotationShape<'a> {
    pub fn parse(annotation: &'a str) -> Self {
        let trimmed = annotation.trim();

        // `T[]`
        if let Some(element) = trimmed.strip_suffix("[]") {
            let element = element.trim();
            if !element.is_empty() {
                return Self::Collection {
                    wrapper: "[]",
                    element,
                };
            }
        }

        // `Wrapper<T>` / `Wrapper[T]`
        for (open, close) in [('<', '>'), ('[', ']')] {
            if let Some(open_at) = trimmed.find(open) {
                if trimmed.ends_with(close) {
                    let wrapper = trimmed[..open_at].trim();
                    let element = trimmed[open_at + 1..trimmed.len() - 1].trim();
                    if COLLECTION_WRAPPERS.contains(&wrapper)
                        && !element.is_empty()
                        && !element.contains(',')
                    {
                        return Self::Collection { wrapper, element };
                    }
                    // Non-collection generic (`Optional[T]`, `Box<T>`...):
                    // keep the wrapper name, the payload is beyond this model.
                    if !wrapper.is_empty() {
                        return Self::Plain(wrapper);
                    }
                }
            }
        }

        Self::Plain(trimmed)
    }
}
