// Hook whitelist tables: hook name -> permitted type names, read from an object of arrays.
use crate::core::document::ResponseDocument;
use crate::core::pointer;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WhitelistTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl WhitelistTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permitted types for `hook`; an unknown hook permits nothing.
    pub fn permitted(&self, hook: &str) -> &[String] {
        self.entries.get(hook).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_permitted(&self, hook: &str, type_name: &str) -> bool {
        self.permitted(hook).iter().any(|permitted| permitted == type_name)
    }

    pub fn contains_hook(&self, hook: &str) -> bool {
        self.entries.contains_key(hook)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(hook, types)| (hook.as_str(), types.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.entries
    }
}

impl ResponseDocument {
    /// Builds the table from the object at `base_path`, one entry per member.
    pub fn build_whitelist_table(&self, base_path: &str) -> WhitelistTable {
        let entries = self
            .fetch_object_keys(base_path)
            .into_iter()
            .map(|hook| {
                let types = self.fetch_string_array(&pointer::join_pointer(base_path, &hook));
                (hook, types)
            })
            .collect();
        WhitelistTable { entries }
    }
}
