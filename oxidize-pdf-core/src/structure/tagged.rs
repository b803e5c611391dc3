//! PDF/UA-2 logical structure tree (ISO 14289-2), built incrementally as
//! content is emitted rather than assembled after the fact.
//!
//! The tree owns a flat arena of [`StructElem`]s plus a per-page MCID
//! counter; `ObjectId` allocation and PDF dictionary serialization happen
//! later in the writer, which borrows this tree by reference.

use crate::objects::ObjectId;

/// A child of a structure element: another element, a marked-content
/// reference into a page's content stream, or a reference to an annotation
/// (used for `Link` elements).
#[derive(Debug, Clone)]
pub enum StructKid {
    Element(u32),
    Mcid(u32),
    ObjRef { page_index: usize, annot: ObjectId },
}

/// A node in the logical structure tree.
///
/// `id` is the element's index in [`TaggedStructureTree::elements`], not a
/// PDF object ID — those are assigned by the writer once the whole tree is
/// known.
#[derive(Debug, Clone)]
pub struct StructElem {
    pub id: u32,
    pub tag: String,
    pub parent: Option<u32>,
    pub kids: Vec<StructKid>,
    pub page_index: Option<usize>,
    pub alt: Option<String>,
    pub lang: Option<String>,
}

/// Builder and owner of a document's structure tree.
///
/// The root element (`Document`) is created automatically. Callers drive
/// tagging with [`begin_marked_content`](Self::begin_marked_content) /
/// [`end_marked_content`](Self::end_marked_content) as content is emitted,
/// and [`begin_structure_element`](Self::begin_structure_element) /
/// [`end_structure_element`](Self::end_structure_element) for grouping-only
/// nodes that do not wrap a content region.
#[derive(Debug, Clone)]
pub struct TaggedStructureTree {
    elements: Vec<StructElem>,
    current_parent: u32,
    parent_stack: Vec<u32>,
    next_mcid: Vec<u32>,
    parent_tree: Vec<Vec<Option<u32>>>,
}

impl Default for TaggedStructureTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggedStructureTree {
    pub fn new() -> Self {
        let root = StructElem {
            id: 0,
            tag: "Document".to_string(),
            parent: None,
            kids: Vec::new(),
            page_index: None,
            alt: None,
            lang: None,
        };
        Self {
            elements: vec![root],
            current_parent: 0,
            parent_stack: Vec::new(),
            next_mcid: Vec::new(),
            parent_tree: Vec::new(),
        }
    }

    fn ensure_page(&mut self, page_index: usize) {
        if self.next_mcid.len() <= page_index {
            self.next_mcid.resize(page_index + 1, 0);
            self.parent_tree.resize(page_index + 1, Vec::new());
        }
    }

    fn alloc_element(&mut self, tag: &str, page_index: Option<usize>) -> u32 {
        let id = self.elements.len() as u32;
        self.elements.push(StructElem {
            id,
            tag: tag.to_string(),
            parent: Some(self.current_parent),
            kids: Vec::new(),
            page_index,
            alt: None,
            lang: None,
        });
        self.elements[self.current_parent as usize]
            .kids
            .push(StructKid::Element(id));
        id
    }

    /// Starts a tagged marked-content region on `page_index`, returning the
    /// MCID to emit in the page's `BDC` operator
    /// (`/<tag> <</MCID n>> BDC`). The new element becomes the current
    /// parent until [`end_marked_content`](Self::end_marked_content).
    pub fn begin_marked_content(&mut self, page_index: usize, tag: &str) -> u32 {
        self.ensure_page(page_index);
        let mcid = self.next_mcid[page_index];
        self.next_mcid[page_index] += 1;

        let elem_id = self.alloc_element(tag, Some(page_index));
        self.elements[elem_id as usize]
            .kids
            .push(StructKid::Mcid(mcid));

        let entries = &mut self.parent_tree[page_index];
        if entries.len() <= mcid as usize {
            entries.resize(mcid as usize + 1, None);
        }
        entries[mcid as usize] = Some(elem_id);

        self.parent_stack.push(self.current_parent);
        self.current_parent = elem_id;
        mcid
    }

    /// Closes the region opened by the matching `begin_marked_content`,
    /// restoring the previous current parent. Callers emit `EMC` themselves.
    pub fn end_marked_content(&mut self) {
        if let Some(parent) = self.parent_stack.pop() {
            self.current_parent = parent;
        }
    }

    /// Creates a grouping-only element (e.g. a `Table`/`TR` wrapper) that
    /// emits nothing into the content stream itself.
    pub fn begin_structure_element(&mut self, tag: &str) -> u32 {
        let elem_id = self.alloc_element(tag, None);
        self.parent_stack.push(self.current_parent);
        self.current_parent = elem_id;
        elem_id
    }

    pub fn end_structure_element(&mut self) {
        if let Some(parent) = self.parent_stack.pop() {
            self.current_parent = parent;
        }
    }

    /// Adds alt-text to the most recently created element with this ID.
    pub fn set_alt_text(&mut self, elem_id: u32, alt: impl Into<String>) {
        if let Some(elem) = self.elements.get_mut(elem_id as usize) {
            elem.alt = Some(alt.into());
        }
    }

    pub fn set_lang(&mut self, elem_id: u32, lang: impl Into<String>) {
        if let Some(elem) = self.elements.get_mut(elem_id as usize) {
            elem.lang = Some(lang.into());
        }
    }

    /// Creates a `Link` element under `Document` wrapping an object
    /// reference (OBJR) to a link annotation, per §4.4.
    pub fn add_link_element(&mut self, annot: ObjectId, page_index: usize) -> u32 {
        let saved_parent = self.current_parent;
        self.current_parent = 0; // Document
        let elem_id = self.alloc_element("Link", Some(page_index));
        self.elements[elem_id as usize]
            .kids
            .push(StructKid::ObjRef { page_index, annot });
        self.current_parent = saved_parent;
        elem_id
    }

    /// Creates a `Sect` element under `Document` suitable as the target of
    /// a structure destination.
    pub fn create_bookmark_sect(&mut self, title: impl Into<String>) -> u32 {
        let saved_parent = self.current_parent;
        self.current_parent = 0;
        let elem_id = self.alloc_element("Sect", None);
        self.current_parent = saved_parent;
        self.set_alt_text(elem_id, title);
        elem_id
    }

    pub fn elements(&self) -> &[StructElem] {
        &self.elements
    }

    /// Returns, per page with any tagged content, the owning structure
    /// element for each MCID issued on that page, indexed by page number.
    pub fn parent_tree_entries(&self) -> Vec<(usize, &[Option<u32>])> {
        self.parent_tree
            .iter()
            .enumerate()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(i, entries)| (i, entries.as_slice()))
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.next_mcid.len()
    }
}
