//! Name tree structure according to ISO 32000-1 Section 7.9.6

use crate::error::{PdfError, Result};
use crate::objects::{Array, Dictionary, Object, ObjectId};
use std::collections::BTreeMap;

/// Name tree node
#[derive(Debug, Clone)]
pub struct NameTreeNode {
    /// Names in this node (leaf node)
    names: Option<BTreeMap<String, Object>>,
    /// Child nodes (intermediate node)
    kids: Option<Vec<ObjectId>>,
    /// Limits [min, max] for this node
    limits: Option<(String, String)>,
}

impl NameTreeNode {
    /// Create leaf node
    pub fn leaf(names: BTreeMap<String, Object>) -> Self {
        let limits = if names.is_empty() {
            None
        } else {
            let min = names.keys().next().unwrap().clone();
            let max = names.keys().last().unwrap().clone();
            Some((min, max))
        };

        Self {
            names: Some(names),
            kids: None,
            limits,
        }
    }

    /// Create intermediate node
    pub fn intermediate(kids: Vec<ObjectId>, limits: (String, String)) -> Self {
        Self {
            names: None,
            kids: Some(kids),
            limits: Some(limits),
        }
    }

    /// Convert to dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        if let Some(names) = &self.names {
            // Leaf node - create Names array
            let mut names_array = Array::new();
            for (key, value) in names {
                names_array.push(Object::String(key.clone()));
                names_array.push(value.clone());
            }
            dict.set("Names", Object::Array(names_array.into()));
        }

        if let Some(kids) = &self.kids {
            // Intermediate node - create Kids array
            let kids_array: Array = kids.iter().map(|id| Object::Reference(*id)).collect();
            dict.set("Kids", Object::Array(kids_array.into()));
        }

        if let Some((min, max)) = &self.limits {
            let limits_array = Array::from(vec![
                Object::String(min.clone()),
                Object::String(max.clone()),
            ]);
            dict.set("Limits", Object::Array(limits_array.into()));
        }

        dict
    }
}

/// Name tree structure
pub struct NameTree {
    /// Root node
    root: NameTreeNode,
    /// All nodes (for complex trees)
    #[allow(dead_code)]
    nodes: BTreeMap<ObjectId, NameTreeNode>,
}

impl Default for NameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NameTree {
    /// Create new name tree with single leaf node
    pub fn new() -> Self {
        Self {
            root: NameTreeNode::leaf(BTreeMap::new()),
            nodes: BTreeMap::new(),
        }
    }

    /// Add name-value pair
    pub fn add(&mut self, name: String, value: Object) {
        if let Some(names) = &mut self.root.names {
            names.insert(name.clone(), value);

            // Update limits
            if let Some((min, max)) = &mut self.root.limits {
                if name < *min {
                    *min = name.clone();
                }
                if name > *max {
                    *max = name;
                }
            } else {
                self.root.limits = Some((name.clone(), name));
            }
        }
    }

    /// Get value by name
    pub fn get(&self, name: &str) -> Option<&Object> {
        self.root.names.as_ref()?.get(name)
    }

    /// Convert to dictionary
    pub fn to_dict(&self) -> Dictionary {
        self.root.to_dict()
    }

    /// Create from existing dictionary
    pub fn from_dict(dict: &Dictionary) -> Result<Self> {
        let mut tree = Self::new();

        if let Some(Object::Array(names_array)) = dict.get("Names") {
            let items: Vec<&Object> = names_array.iter().collect();

            if !items.len().is_multiple_of(2) {
                return Err(PdfError::InvalidStructure(
                    "Names array must have even length".to_string(),
                ));
            }

            for i in (0..items.len()).step_by(2) {
                if let (Object::String(key), value) = (items[i], items[i + 1]) {
                    let key = key.clone();
                    tree.add(key, value.clone());
                }
            }
        }

        Ok(tree)
    }
}

/// Named destinations
pub struct NamedDestinations {
    /// Name tree for destinations
    tree: NameTree,
}

impl Default for NamedDestinations {
    fn default() -> Self {
        Self::new()
    }
}

impl NamedDestinations {
    /// Create new named destinations
    pub fn new() -> Self {
        Self {
            tree: NameTree::new(),
        }
    }

    /// Add named destination
    pub fn add_destination(&mut self, name: String, destination: Array) {
        self.tree.add(name, Object::Array(destination.into()));
    }

    /// Get destination by name
    pub fn get_destination(&self, name: &str) -> Option<Array> {
        match self.tree.get(name)? {
            Object::Array(arr) => Some(Array::from(arr.clone())),
            _ => None,
        }
    }

    /// Convert to dictionary
    pub fn to_dict(&self) -> Dictionary {
        self.tree.to_dict()
    }
}
