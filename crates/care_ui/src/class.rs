//! Class-name merging and variant-to-class mapping.
//!
//! Components assemble their `class` attribute from a base class, variant classes, state
//! classes, and caller overrides. Fragments are split on whitespace, empty and falsy fragments
//! are dropped, and repeats keep their first position. There is no conflict resolution between
//! utilities; the stylesheet's cascade decides.

use std::fmt;

/// Maps a variant enum onto its utility classes.
pub trait ClassVariant: Copy {
    /// Space-separated utility classes for this variant.
    fn classes(self) -> &'static str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered, de-duplicated list of class names.
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every class in `fragment`.
    pub fn push(&mut self, fragment: &str) {
        for class in fragment.split_whitespace() {
            if !self.parts.iter().any(|existing| existing == class) {
                self.parts.push(class.to_string());
            }
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn add(mut self, fragment: impl AsRef<str>) -> Self {
        self.push(fragment.as_ref());
        self
    }

    /// Appends `fragment` only when `condition` holds.
    pub fn add_if(self, condition: bool, fragment: impl AsRef<str>) -> Self {
        if condition {
            self.add(fragment)
        } else {
            self
        }
    }

    /// Appends `fragment` when present.
    pub fn add_opt(self, fragment: Option<impl AsRef<str>>) -> Self {
        match fragment {
            Some(fragment) => self.add(fragment),
            None => self,
        }
    }

    /// Appends the classes of a variant.
    pub fn add_variant(self, variant: impl ClassVariant) -> Self {
        self.add(variant.classes())
    }

    /// Appends every fragment of an iterator.
    pub fn extend<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for fragment in fragments {
            self.push(fragment.as_ref());
        }
        self
    }

    /// Returns `true` when no class has been added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Joins the classes with single spaces.
    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(" "))
    }
}

/// Anything that can contribute class fragments to a [`ClassList`].
pub trait ClassFragment {
    /// Appends this fragment's classes to `list`.
    fn append_to(self, list: &mut ClassList);
}

impl ClassFragment for &str {
    fn append_to(self, list: &mut ClassList) {
        list.push(self);
    }
}

impl ClassFragment for String {
    fn append_to(self, list: &mut ClassList) {
        list.push(&self);
    }
}

impl ClassFragment for &String {
    fn append_to(self, list: &mut ClassList) {
        list.push(self);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn append_to(self, list: &mut ClassList) {
        if let Some(fragment) = self {
            fragment.append_to(list);
        }
    }
}

impl<T: ClassFragment> ClassFragment for (T, bool) {
    fn append_to(self, list: &mut ClassList) {
        if self.1 {
            self.0.append_to(list);
        }
    }
}

impl<T: ClassFragment> ClassFragment for Vec<T> {
    fn append_to(self, list: &mut ClassList) {
        for fragment in self {
            fragment.append_to(list);
        }
    }
}

impl<T: ClassFragment + Clone> ClassFragment for &[T] {
    fn append_to(self, list: &mut ClassList) {
        for fragment in self {
            fragment.clone().append_to(list);
        }
    }
}

impl<T: ClassFragment, const N: usize> ClassFragment for [T; N] {
    fn append_to(self, list: &mut ClassList) {
        for fragment in self {
            fragment.append_to(list);
        }
    }
}

/// Merges class fragments into a single `String`.
///
/// Accepts `&str`, `String`, `Option<_>`, `(fragment, condition)` pairs, and nested
/// vectors/arrays/slices of those.
///
/// ```
/// use care_ui::classes;
///
/// let loading = true;
/// let extra: Option<&str> = None;
/// assert_eq!(
///     classes!["care-button", ("is-loading", loading), ("is-idle", !loading), extra],
///     "care-button is-loading"
/// );
/// ```
#[macro_export]
macro_rules! classes {
    ($($fragment:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut list = $crate::class::ClassList::new();
        $( $crate::class::ClassFragment::append_to($fragment, &mut list); )*
        list.build()
    }};
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone, Copy)]
    enum Tone {
        Calm,
        Alert,
    }

    impl ClassVariant for Tone {
        fn classes(self) -> &'static str {
            match self {
                Self::Calm => "text-slate-700 bg-slate-50",
                Self::Alert => "text-red-700 bg-red-50",
            }
        }
    }

    #[test]
    fn falsy_fragments_are_excluded() {
        let none: Option<&str> = None;
        let merged = classes!["a", "", none, ("b", false), Some("c"), ("d", true)];
        assert_eq!(merged, "a c d");
    }

    #[test]
    fn truthy_order_is_preserved_and_repeats_keep_first_position() {
        let merged = classes!["px-2 py-1", "font-bold px-2", vec!["py-1", "rounded"]];
        assert_eq!(merged, "px-2 py-1 font-bold rounded");
    }

    #[test]
    fn nested_collections_and_whitespace_are_flattened() {
        let state: &[(&str, bool)] = &[("is-open", true), ("is-closed", false)];
        let merged = classes!["  base   ", state, ["x", "y"], String::from("z  x")];
        assert_eq!(merged, "base is-open x y z");
    }

    #[test]
    fn builder_mirrors_macro_semantics() {
        let built = ClassList::new()
            .add("card")
            .add_variant(Tone::Alert)
            .add_if(false, "hidden")
            .add_opt(Some("shadow"))
            .add_opt(None::<&str>)
            .extend(["card", "mt-2"])
            .build();
        assert_eq!(built, "card text-red-700 bg-red-50 shadow mt-2");
        assert_eq!(
            ClassList::new().add_variant(Tone::Calm).to_string(),
            "text-slate-700 bg-slate-50"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(classes![], "");
        assert!(ClassList::new().add("   ").is_empty());
    }
}
