use crate::document::Document;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId};
use crate::writer::xref_stream_writer::XRefStreamWriter;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Options controlling how [`PdfWriter`] serializes a [`Document`].
///
/// `compress_streams` mirrors `Document::compress` and is usually set from it;
/// the other two fields let a caller opt into PDF 2.0-style output (xref
/// streams, explicit version string) without changing the document itself.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    pub use_xref_streams: bool,
    pub pdf_version: String,
    pub compress_streams: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            use_xref_streams: false,
            pdf_version: "1.7".to_string(),
            compress_streams: true,
        }
    }
}

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: HashMap<ObjectId, u64>,
    current_position: u64,
    next_object_id: u32,
    config: WriterConfig,
    // Maps for tracking object IDs during writing
    catalog_id: Option<ObjectId>,
    pages_id: Option<ObjectId>,
    info_id: Option<ObjectId>,
    struct_tree_root_id: Option<ObjectId>,
    // Maps for tracking form fields and their widgets
    #[allow(dead_code)]
    field_widget_map: HashMap<String, Vec<ObjectId>>, // field name -> widget IDs
    #[allow(dead_code)]
    field_id_map: HashMap<String, ObjectId>, // field name -> field ID
    form_field_ids: Vec<ObjectId>, // form field IDs to add to page annotations
    page_ids: Vec<ObjectId>,       // page IDs for form field references
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self {
            writer,
            xref_positions: HashMap::new(),
            current_position: 0,
            next_object_id: 1, // Start at 1 for sequential numbering
            config,
            catalog_id: None,
            pages_id: None,
            info_id: None,
            struct_tree_root_id: None,
            field_widget_map: HashMap::new(),
            field_id_map: HashMap::new(),
            form_field_ids: Vec::new(),
            page_ids: Vec::new(),
        }
    }

    pub fn write_document(&mut self, document: &mut Document) -> Result<()> {
        // PDF/A-4 mandates PDF 2.0 regardless of what the caller's config says.
        if document.compliance.pdf_a4 {
            self.config.pdf_version = "2.0".to_string();
            self.config.use_xref_streams = true;
        }
        self.write_header()?;

        // Reserve object IDs for fixed objects (written in order)
        self.catalog_id = Some(self.allocate_object_id());
        self.pages_id = Some(self.allocate_object_id());
        self.info_id = Some(self.allocate_object_id());

        // Write pages first (they contain widget annotations)
        self.write_pages(document)?;

        // Write form fields (must be after pages so we can track widgets)
        self.write_form_fields(document)?;

        // Write catalog (must be after forms so AcroForm has correct field references)
        self.write_catalog(document)?;

        // Write document info
        self.write_info(document)?;

        // Write xref table
        let xref_position = self.current_position;
        if self.config.use_xref_streams {
            self.write_xref_stream(xref_position)?;
        } else {
            self.write_xref()?;
            // Write trailer
            self.write_trailer(xref_position)?;
        }

        if let Ok(()) = self.writer.flush() {
            // Flush succeeded
        }
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        let header = format!("%PDF-{}\n", self.config.pdf_version);
        self.write_bytes(header.as_bytes())?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Writes a single PDF 2.0-style cross-reference stream object in place of
    /// the classic `xref`/`trailer` pair, per ISO 32000-2 §7.5.8.
    fn write_xref_stream(&mut self, _unused_start: u64) -> Result<()> {
        let catalog_id = self.catalog_id.expect("catalog_id must be set");
        let info_id = self.info_id.expect("info_id must be set");
        let stream_id = self.allocate_object_id();

        let mut xref_writer = XRefStreamWriter::new(stream_id);
        xref_writer.set_trailer_info(catalog_id, info_id);

        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0)
            .max(stream_id.number());

        xref_writer.add_free_entry(0, 65535);
        for obj_num in 1..=max_obj_num {
            if obj_num == stream_id.number() {
                // Placeholder; the real offset is recorded once we know it below.
                xref_writer.add_in_use_entry(0, 0);
                continue;
            }
            match self
                .xref_positions
                .iter()
                .find(|(id, _)| id.number() == obj_num)
            {
                Some((_, pos)) => xref_writer.add_in_use_entry(*pos, 0),
                None => xref_writer.add_free_entry(0, 0),
            }
        }

        let stream_position = self.current_position;
        self.xref_positions.insert(stream_id, stream_position);
        // Re-encode now that the stream's own offset is known.
        let mut xref_writer = XRefStreamWriter::new(stream_id);
        xref_writer.set_trailer_info(catalog_id, info_id);
        xref_writer.add_free_entry(0, 65535);
        for obj_num in 1..=max_obj_num {
            if obj_num == stream_id.number() {
                xref_writer.add_in_use_entry(stream_position, 0);
                continue;
            }
            match self
                .xref_positions
                .iter()
                .find(|(id, _)| id.number() == obj_num)
            {
                Some((_, pos)) => xref_writer.add_in_use_entry(*pos, 0),
                None => xref_writer.add_free_entry(0, 0),
            }
        }

        let mut buf = Vec::new();
        xref_writer.write_xref_stream(&mut buf, stream_position, None)?;
        self.write_bytes(&buf)?;
        self.write_bytes(b"startxref\n")?;
        self.write_bytes(stream_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;
        Ok(())
    }

    fn write_catalog(&mut self, document: &mut Document) -> Result<()> {
        let catalog_id = self.catalog_id.expect("catalog_id must be set");
        let pages_id = self.pages_id.expect("pages_id must be set");

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name("Catalog".to_string()));
        catalog.set("Pages", Object::Reference(pages_id));

        // Process FormManager if present to update AcroForm
        // We'll write the actual fields after pages are written
        if let Some(_form_manager) = &document.form_manager {
            // Ensure AcroForm exists
            if document.acro_form.is_none() {
                document.acro_form = Some(crate::forms::AcroForm::new());
            }
        }

        // Add AcroForm if present
        if let Some(acro_form) = &document.acro_form {
            // Reserve object ID for AcroForm
            let acro_form_id = self.allocate_object_id();

            // Write AcroForm object
            self.write_object(acro_form_id, Object::Dictionary(acro_form.to_dict()))?;

            // Reference it in catalog
            catalog.set("AcroForm", Object::Reference(acro_form_id));
        }

        // Add Outlines if present
        if let Some(outline_tree) = &document.outline {
            if !outline_tree.items.is_empty() {
                let outline_root_id = self.write_outline_tree(outline_tree)?;
                catalog.set("Outlines", Object::Reference(outline_root_id));
            }
        }

        if document.compliance.pdf_a4 || document.compliance.pdf_ua2 {
            self.write_compliance_entries(document, &mut catalog)?;
        }

        self.write_object(catalog_id, Object::Dictionary(catalog))?;
        Ok(())
    }

    /// Adds the catalog-level entries required by PDF/A-4 (ISO 19005-4) and
    /// PDF/UA-2 (ISO 14289-2): `/MarkInfo`, `/Lang`, `/OutputIntents`,
    /// `/Metadata`, and (for UA-2) `/StructTreeRoot`.
    fn write_compliance_entries(
        &mut self,
        document: &Document,
        catalog: &mut Dictionary,
    ) -> Result<()> {
        catalog.set(
            "MarkInfo",
            Object::Dictionary({
                let mut mi = Dictionary::new();
                mi.set("Marked", Object::Boolean(true));
                mi
            }),
        );

        let lang = document
            .compliance
            .lang
            .clone()
            .unwrap_or_else(|| "en-US".to_string());
        catalog.set("Lang", Object::String(lang));

        if document.compliance.pdf_a4 {
            let icc_id = self.write_srgb_output_intent()?;
            let _ = icc_id;
            let metadata_id = self.write_xmp_metadata(document)?;
            catalog.set("Metadata", Object::Reference(metadata_id));
        }

        if document.compliance.pdf_ua2 {
            if let Some(tree) = &document.structure_tree {
                let struct_root_id = self.write_structure_tree(tree)?;
                self.struct_tree_root_id = Some(struct_root_id);
                catalog.set("StructTreeRoot", Object::Reference(struct_root_id));
            }
        }

        Ok(())
    }

    /// Writes a minimal sRGB ICC-profile stream and an `/OutputIntents` array
    /// referencing it, returning the ICC stream's object ID.
    fn write_srgb_output_intent(&mut self) -> Result<ObjectId> {
        let icc_profile = crate::graphics::icc::build_srgb_icc_profile();
        let icc_profile = icc_profile.as_slice();
        let icc_id = self.allocate_object_id();
        let mut icc_dict = Dictionary::new();
        icc_dict.set("N", Object::Integer(3));
        icc_dict.set("Alternate", Object::Name("DeviceRGB".to_string()));
        let compressed = if self.config.compress_streams {
            crate::compression::compress(icc_profile)?
        } else {
            icc_profile.to_vec()
        };
        if self.config.compress_streams {
            icc_dict.set("Filter", Object::Name("FlateDecode".to_string()));
        }
        icc_dict.set("Length", Object::Integer(compressed.len() as i64));
        self.write_object(icc_id, Object::Stream(icc_dict, compressed))?;

        let intent_id = self.allocate_object_id();
        let mut intent = Dictionary::new();
        intent.set("Type", Object::Name("OutputIntent".to_string()));
        intent.set("S", Object::Name("GTS_PDFA1".to_string()));
        intent.set(
            "OutputConditionIdentifier",
            Object::String("sRGB IEC61966-2.1".to_string()),
        );
        intent.set("DestOutputProfile", Object::Reference(icc_id));
        self.write_object(intent_id, Object::Dictionary(intent))?;

        Ok(intent_id)
    }

    /// Writes an XMP metadata stream declaring PDF/A-4 conformance.
    fn write_xmp_metadata(&mut self, document: &Document) -> Result<ObjectId> {
        let title = document.metadata.title.clone().unwrap_or_default();
        let xmp = format!(
            r#"<?xpacket begin="﻿" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:dc="http://purl.org/dc/elements/1.1/"
        xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/">
      <dc:title><rdf:Alt><rdf:li xml:lang="x-default">{title}</rdf:li></rdf:Alt></dc:title>
      <pdfaid:part>4</pdfaid:part>
      <pdfaid:conformance>E</pdfaid:conformance>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#
        );
        let bytes = xmp.into_bytes();
        let meta_id = self.allocate_object_id();
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name("Metadata".to_string()));
        dict.set("Subtype", Object::Name("XML".to_string()));
        dict.set("Length", Object::Integer(bytes.len() as i64));
        self.write_object(meta_id, Object::Stream(dict, bytes))?;
        Ok(meta_id)
    }

    /// Writes the PDF/UA-2 logical structure tree (`StructTreeRoot`, its
    /// element subtree, the `ParentTree` number tree, and the PDF 2.0
    /// namespace dictionary), returning the `StructTreeRoot` object ID.
    fn write_structure_tree(
        &mut self,
        tree: &crate::structure::TaggedStructureTree,
    ) -> Result<ObjectId> {
        let ns_id = self.allocate_object_id();
        let mut ns_dict = Dictionary::new();
        ns_dict.set("Type", Object::Name("Namespace".to_string()));
        ns_dict.set("NS", Object::String("http://iso.org/pdf2/ssn".to_string()));
        self.write_object(ns_id, Object::Dictionary(ns_dict))?;

        // Pre-allocate one object ID per structure element so children can
        // reference their parent and vice versa before any are serialized.
        let mut elem_ids: HashMap<u32, ObjectId> = HashMap::new();
        for elem in tree.elements() {
            elem_ids.insert(elem.id, self.allocate_object_id());
        }

        for elem in tree.elements() {
            let obj_id = elem_ids[&elem.id];
            let mut dict = Dictionary::new();
            dict.set("Type", Object::Name("StructElem".to_string()));
            dict.set("S", Object::Name(elem.tag.clone()));
            dict.set("NS", Object::Reference(ns_id));
            if let Some(parent_id) = elem.parent.and_then(|p| elem_ids.get(&p)) {
                dict.set("P", Object::Reference(*parent_id));
            } else {
                // Root's parent is StructTreeRoot itself; patched below.
            }
            if let Some(page_index) = elem.page_index {
                if let Some(page_id) = self.page_ids.get(page_index) {
                    dict.set("Pg", Object::Reference(*page_id));
                }
            }
            if let Some(alt) = &elem.alt {
                dict.set("Alt", Object::String(alt.clone()));
            }
            if let Some(lang) = &elem.lang {
                dict.set("Lang", Object::String(lang.clone()));
            }

            let mut kids = Vec::new();
            for kid in &elem.kids {
                match kid {
                    crate::structure::StructKid::Element(child_id) => {
                        if let Some(child_obj) = elem_ids.get(child_id) {
                            kids.push(Object::Reference(*child_obj));
                        }
                    }
                    crate::structure::StructKid::Mcid(mcid) => {
                        kids.push(Object::Integer(*mcid as i64));
                    }
                    crate::structure::StructKid::ObjRef { page_index, annot } => {
                        let mut objr = Dictionary::new();
                        objr.set("Type", Object::Name("OBJR".to_string()));
                        objr.set("Obj", Object::Reference(*annot));
                        if let Some(page_id) = self.page_ids.get(*page_index) {
                            objr.set("Pg", Object::Reference(*page_id));
                        }
                        kids.push(Object::Dictionary(objr));
                    }
                }
            }
            match kids.len() {
                0 => {}
                1 => dict.set("K", kids.into_iter().next().unwrap()),
                _ => dict.set("K", Object::Array(kids)),
            }

            self.write_object(obj_id, Object::Dictionary(dict))?;
        }

        let struct_root_id = self.allocate_object_id();
        let mut root_dict = Dictionary::new();
        root_dict.set("Type", Object::Name("StructTreeRoot".to_string()));
        if let Some(document_elem) = tree.elements().iter().find(|e| e.parent.is_none()) {
            root_dict.set(
                "K",
                Object::Reference(elem_ids[&document_elem.id]),
            );
        }
        root_dict.set("NS", Object::Reference(ns_id));

        // ParentTree: one array per page, indexed by MCID, of owning struct
        // element references (or a single reference when the page only
        // carries annotation-level structure).
        let mut parent_tree_nums = Vec::new();
        for (page_index, entries) in tree.parent_tree_entries() {
            let refs: Vec<Object> = entries
                .iter()
                .map(|owner| {
                    owner
                        .and_then(|id| elem_ids.get(&id))
                        .map(|obj_id| Object::Reference(*obj_id))
                        .unwrap_or(Object::Null)
                })
                .collect();
            let value = if refs.len() == 1 {
                refs.into_iter().next().unwrap()
            } else {
                Object::Array(refs)
            };
            parent_tree_nums.push(Object::Integer(page_index as i64));
            parent_tree_nums.push(value);
        }
        let mut parent_tree_dict = Dictionary::new();
        parent_tree_dict.set("Nums", Object::Array(parent_tree_nums));
        root_dict.set("ParentTree", Object::Dictionary(parent_tree_dict));
        root_dict.set(
            "ParentTreeNextKey",
            Object::Integer(tree.page_count() as i64),
        );

        self.write_object(struct_root_id, Object::Dictionary(root_dict))?;
        Ok(struct_root_id)
    }

    fn write_pages(&mut self, document: &Document) -> Result<()> {
        let pages_id = self.pages_id.expect("pages_id must be set");
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name("Pages".to_string()));
        pages_dict.set("Count", Object::Integer(document.pages.len() as i64));

        let mut kids = Vec::new();

        // Allocate page object IDs sequentially
        let mut page_ids = Vec::new();
        let mut content_ids = Vec::new();
        for _ in 0..document.pages.len() {
            page_ids.push(self.allocate_object_id());
            content_ids.push(self.allocate_object_id());
        }

        for page_id in &page_ids {
            kids.push(Object::Reference(*page_id));
        }

        pages_dict.set("Kids", Object::Array(kids));

        self.write_object(pages_id, Object::Dictionary(pages_dict))?;

        // Store page IDs for form field references
        self.page_ids = page_ids.clone();

        // Write individual pages (but skip form widget annotations for now)
        for (i, page) in document.pages.iter().enumerate() {
            let page_id = page_ids[i];
            let content_id = content_ids[i];

            self.write_page(page_id, pages_id, content_id, page, document)?;
            self.write_page_content(content_id, page)?;
        }

        Ok(())
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        parent_id: ObjectId,
        content_id: ObjectId,
        page: &crate::page::Page,
        document: &Document,
    ) -> Result<()> {
        // Start with the page's dictionary which includes annotations
        let mut page_dict = page.to_dict();

        // Override/ensure essential fields
        page_dict.set("Type", Object::Name("Page".to_string()));
        page_dict.set("Parent", Object::Reference(parent_id));
        page_dict.set("Contents", Object::Reference(content_id));

        // Process all annotations, including form widgets
        let mut annot_refs = Vec::new();
        for annotation in page.annotations() {
            let mut annot_dict = annotation.to_dict();

            // Check if this is a Widget annotation
            let is_widget = if let Some(Object::Name(subtype)) = annot_dict.get("Subtype") {
                subtype == "Widget"
            } else {
                false
            };

            if is_widget {
                // For widgets, we need to merge with form field data
                // Add the page reference
                annot_dict.set("P", Object::Reference(page_id));

                // For now, if this is a widget without field data, add minimal field info
                if annot_dict.get("FT").is_none() {
                    // This is a widget that needs form field data
                    // We'll handle this properly when we integrate with FormManager
                    // For now, skip it as it won't work without field data
                    continue;
                }
            }

            // Write the annotation
            let annot_id = self.allocate_object_id();
            self.write_object(annot_id, Object::Dictionary(annot_dict))?;
            annot_refs.push(Object::Reference(annot_id));

            // If this is a form field widget, remember it for AcroForm
            if is_widget {
                self.form_field_ids.push(annot_id);
            }
        }

        // NOTE: Form fields are now handled as annotations directly,
        // so we don't need to add them separately here

        // Add Annots array if we have any annotations (form fields or others)
        if !annot_refs.is_empty() {
            page_dict.set("Annots", Object::Array(annot_refs));
        }

        // Create resources dictionary with fonts from document
        let mut resources = Dictionary::new();
        let mut font_dict = Dictionary::new();

        // Get fonts with encodings from the document
        let fonts_with_encodings = document.get_fonts_with_encodings();

        for font_with_encoding in fonts_with_encodings {
            let mut font_entry = Dictionary::new();
            font_entry.set("Type", Object::Name("Font".to_string()));
            font_entry.set("Subtype", Object::Name("Type1".to_string()));
            font_entry.set(
                "BaseFont",
                Object::Name(font_with_encoding.font.pdf_name().to_string()),
            );

            // Add encoding if specified
            if let Some(encoding) = font_with_encoding.encoding {
                font_entry.set("Encoding", Object::Name(encoding.pdf_name().to_string()));
            }

            font_dict.set(
                font_with_encoding.font.pdf_name(),
                Object::Dictionary(font_entry),
            );
        }

        resources.set("Font", Object::Dictionary(font_dict));

        // Add images as XObjects
        if !page.images().is_empty() {
            let mut xobject_dict = Dictionary::new();

            for (name, image) in page.images() {
                // Use sequential ObjectId allocation to avoid conflicts
                let image_id = self.allocate_object_id();

                // Write the image XObject
                self.write_object(image_id, image.to_pdf_object())?;

                // Add reference to XObject dictionary
                xobject_dict.set(name, Object::Reference(image_id));
            }

            resources.set("XObject", Object::Dictionary(xobject_dict));
        }

        page_dict.set("Resources", Object::Dictionary(resources));

        self.write_object(page_id, Object::Dictionary(page_dict))?;
        Ok(())
    }

    fn write_page_content(&mut self, content_id: ObjectId, page: &crate::page::Page) -> Result<()> {
        let mut page_copy = page.clone();
        let content = page_copy.generate_content()?;

        // Create stream with compression if enabled
        #[cfg(feature = "compression")]
        {
            use crate::objects::Stream;
            let mut stream = Stream::new(content);
            stream.compress_flate()?;

            self.write_object(
                content_id,
                Object::Stream(stream.dictionary().clone(), stream.data().to_vec()),
            )?;
        }

        #[cfg(not(feature = "compression"))]
        {
            let mut stream_dict = Dictionary::new();
            stream_dict.set("Length", Object::Integer(content.len() as i64));

            self.write_object(content_id, Object::Stream(stream_dict, content))?;
        }

        Ok(())
    }

    fn write_outline_tree(
        &mut self,
        outline_tree: &crate::structure::OutlineTree,
    ) -> Result<ObjectId> {
        // Create root outline dictionary
        let outline_root_id = self.allocate_object_id();

        let mut outline_root = Dictionary::new();
        outline_root.set("Type", Object::Name("Outlines".to_string()));

        if !outline_tree.items.is_empty() {
            // Reserve IDs for all outline items
            let mut item_ids = Vec::new();

            // Count all items and assign IDs
            fn count_items(items: &[crate::structure::OutlineItem]) -> usize {
                let mut count = items.len();
                for item in items {
                    count += count_items(&item.children);
                }
                count
            }

            let total_items = count_items(&outline_tree.items);

            // Reserve IDs for all items
            for _ in 0..total_items {
                item_ids.push(self.allocate_object_id());
            }

            let mut id_index = 0;

            // Write root items
            let first_id = item_ids[0];
            let last_id = item_ids[outline_tree.items.len() - 1];

            outline_root.set("First", Object::Reference(first_id));
            outline_root.set("Last", Object::Reference(last_id));

            // Visible count
            let visible_count = outline_tree.visible_count();
            outline_root.set("Count", Object::Integer(visible_count));

            // Write all items recursively
            let mut written_items = Vec::new();

            for (i, item) in outline_tree.items.iter().enumerate() {
                let item_id = item_ids[id_index];
                id_index += 1;

                let prev_id = if i > 0 { Some(item_ids[i - 1]) } else { None };
                let next_id = if i < outline_tree.items.len() - 1 {
                    Some(item_ids[i + 1])
                } else {
                    None
                };

                // Write this item and its children
                let children_ids = self.write_outline_item(
                    item,
                    item_id,
                    outline_root_id,
                    prev_id,
                    next_id,
                    &mut item_ids,
                    &mut id_index,
                )?;

                written_items.extend(children_ids);
            }
        }

        self.write_object(outline_root_id, Object::Dictionary(outline_root))?;
        Ok(outline_root_id)
    }

    #[allow(clippy::too_many_arguments)]
    fn write_outline_item(
        &mut self,
        item: &crate::structure::OutlineItem,
        item_id: ObjectId,
        parent_id: ObjectId,
        prev_id: Option<ObjectId>,
        next_id: Option<ObjectId>,
        all_ids: &mut Vec<ObjectId>,
        id_index: &mut usize,
    ) -> Result<Vec<ObjectId>> {
        let mut written_ids = vec![item_id];

        // Handle children if any
        let (first_child_id, last_child_id) = if !item.children.is_empty() {
            let first_idx = *id_index;
            let first_id = all_ids[first_idx];
            let last_idx = first_idx + item.children.len() - 1;
            let last_id = all_ids[last_idx];

            // Write children
            for (i, child) in item.children.iter().enumerate() {
                let child_id = all_ids[*id_index];
                *id_index += 1;

                let child_prev = if i > 0 {
                    Some(all_ids[first_idx + i - 1])
                } else {
                    None
                };
                let child_next = if i < item.children.len() - 1 {
                    Some(all_ids[first_idx + i + 1])
                } else {
                    None
                };

                let child_ids = self.write_outline_item(
                    child, child_id, item_id, // This item is the parent
                    child_prev, child_next, all_ids, id_index,
                )?;

                written_ids.extend(child_ids);
            }

            (Some(first_id), Some(last_id))
        } else {
            (None, None)
        };

        // Create item dictionary
        let item_dict = crate::structure::outline_item_to_dict(
            item,
            parent_id,
            first_child_id,
            last_child_id,
            prev_id,
            next_id,
        );

        self.write_object(item_id, Object::Dictionary(item_dict))?;

        Ok(written_ids)
    }

    fn write_form_fields(&mut self, document: &mut Document) -> Result<()> {
        // Add collected form field IDs to AcroForm
        if !self.form_field_ids.is_empty() {
            if let Some(acro_form) = &mut document.acro_form {
                // Clear any existing fields and add the ones we found
                acro_form.fields.clear();
                for field_id in &self.form_field_ids {
                    acro_form.add_field(*field_id);
                }

                // Ensure AcroForm has the right properties
                acro_form.need_appearances = true;
                if acro_form.da.is_none() {
                    acro_form.da = Some("/Helv 12 Tf 0 g".to_string());
                }
            }
        }
        Ok(())
    }

    fn write_info(&mut self, document: &Document) -> Result<()> {
        let info_id = self.info_id.expect("info_id must be set");
        let mut info_dict = Dictionary::new();

        if let Some(ref title) = document.metadata.title {
            info_dict.set("Title", Object::String(title.clone()));
        }
        if let Some(ref author) = document.metadata.author {
            info_dict.set("Author", Object::String(author.clone()));
        }
        if let Some(ref subject) = document.metadata.subject {
            info_dict.set("Subject", Object::String(subject.clone()));
        }
        if let Some(ref keywords) = document.metadata.keywords {
            info_dict.set("Keywords", Object::String(keywords.clone()));
        }
        if let Some(ref creator) = document.metadata.creator {
            info_dict.set("Creator", Object::String(creator.clone()));
        }
        if let Some(ref producer) = document.metadata.producer {
            info_dict.set("Producer", Object::String(producer.clone()));
        }

        // Add creation date
        if let Some(creation_date) = document.metadata.creation_date {
            let date_string = format_pdf_date(creation_date);
            info_dict.set("CreationDate", Object::String(date_string));
        }

        // Add modification date
        if let Some(mod_date) = document.metadata.modification_date {
            let date_string = format_pdf_date(mod_date);
            info_dict.set("ModDate", Object::String(date_string));
        }

        self.write_object(info_id, Object::Dictionary(info_dict))?;
        Ok(())
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);

        Ok(Self {
            writer,
            xref_positions: HashMap::new(),
            current_position: 0,
            next_object_id: 1,
            catalog_id: None,
            pages_id: None,
            info_id: None,
            field_widget_map: HashMap::new(),
            field_id_map: HashMap::new(),
            form_field_ids: Vec::new(),
            page_ids: Vec::new(),
        })
    }
}

impl<W: Write> PdfWriter<W> {
    fn allocate_object_id(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_object_id, 0);
        self.next_object_id += 1;
        id
    }

    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(
                format!("{f:.6}")
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .as_bytes(),
            )?,
            Object::String(s) => {
                self.write_bytes(b"(")?;
                self.write_bytes(s.as_bytes())?;
                self.write_bytes(b")")?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;

        // Sort by object number and write entries
        let mut entries: Vec<_> = self
            .xref_positions
            .iter()
            .map(|(id, pos)| (*id, *pos))
            .collect();
        entries.sort_by_key(|(id, _)| id.number());

        // Find the highest object number to determine size
        let max_obj_num = entries.iter().map(|(id, _)| id.number()).max().unwrap_or(0);

        // Write subsection header - PDF 1.7 spec allows multiple subsections
        // For simplicity, write one subsection from 0 to max
        self.write_bytes(b"0 ")?;
        self.write_bytes((max_obj_num + 1).to_string().as_bytes())?;
        self.write_bytes(b"\n")?;

        // Write free object entry
        self.write_bytes(b"0000000000 65535 f \n")?;

        // Write entries for all object numbers from 1 to max
        // Fill in gaps with free entries
        for obj_num in 1..=max_obj_num {
            let _obj_id = ObjectId::new(obj_num, 0);
            if let Some((_, position)) = entries.iter().find(|(id, _)| id.number() == obj_num) {
                let entry = format!("{:010} {:05} n \n", position, 0);
                self.write_bytes(entry.as_bytes())?;
            } else {
                // Free entry for gap
                self.write_bytes(b"0000000000 00000 f \n")?;
            }
        }

        Ok(())
    }

    fn write_trailer(&mut self, xref_position: u64) -> Result<()> {
        let catalog_id = self.catalog_id.expect("catalog_id must be set");
        let info_id = self.info_id.expect("info_id must be set");
        // Find the highest object number to determine size
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let mut trailer = Dictionary::new();
        trailer.set("Size", Object::Integer((max_obj_num + 1) as i64));
        trailer.set("Root", Object::Reference(catalog_id));
        trailer.set("Info", Object::Reference(info_id));

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }

    #[allow(dead_code)]
    fn create_widget_appearance_stream(&mut self, widget_dict: &Dictionary) -> Result<ObjectId> {
        // Get widget rectangle
        let rect = if let Some(Object::Array(rect_array)) = widget_dict.get("Rect") {
            if rect_array.len() >= 4 {
                if let (
                    Some(Object::Real(x1)),
                    Some(Object::Real(y1)),
                    Some(Object::Real(x2)),
                    Some(Object::Real(y2)),
                ) = (
                    rect_array.first(),
                    rect_array.get(1),
                    rect_array.get(2),
                    rect_array.get(3),
                ) {
                    (*x1, *y1, *x2, *y2)
                } else {
                    (0.0, 0.0, 100.0, 20.0) // Default
                }
            } else {
                (0.0, 0.0, 100.0, 20.0) // Default
            }
        } else {
            (0.0, 0.0, 100.0, 20.0) // Default
        };

        let width = rect.2 - rect.0;
        let height = rect.3 - rect.1;

        // Create appearance stream content
        let mut content = String::new();

        // Set graphics state
        content.push_str("q\n");

        // Draw border (black)
        content.push_str("0 0 0 RG\n"); // Black stroke color
        content.push_str("1 w\n"); // 1pt line width

        // Draw rectangle border
        content.push_str(&format!("0 0 {} {} re\n", width, height));
        content.push_str("S\n"); // Stroke

        // Fill with white background
        content.push_str("1 1 1 rg\n"); // White fill color
        content.push_str(&format!("0.5 0.5 {} {} re\n", width - 1.0, height - 1.0));
        content.push_str("f\n"); // Fill

        // Restore graphics state
        content.push_str("Q\n");

        // Create stream dictionary
        let mut stream_dict = Dictionary::new();
        stream_dict.set("Type", Object::Name("XObject".to_string()));
        stream_dict.set("Subtype", Object::Name("Form".to_string()));
        stream_dict.set(
            "BBox",
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(width),
                Object::Real(height),
            ]),
        );
        stream_dict.set("Resources", Object::Dictionary(Dictionary::new()));
        stream_dict.set("Length", Object::Integer(content.len() as i64));

        // Write the appearance stream
        let stream_id = self.allocate_object_id();
        self.write_object(stream_id, Object::Stream(stream_dict, content.into_bytes()))?;

        Ok(stream_id)
    }

    #[allow(dead_code)]
    fn create_field_appearance_stream(
        &mut self,
        field_dict: &Dictionary,
        widget: &crate::forms::Widget,
    ) -> Result<ObjectId> {
        let width = widget.rect.upper_right.x - widget.rect.lower_left.x;
        let height = widget.rect.upper_right.y - widget.rect.lower_left.y;

        // Create appearance stream content
        let mut content = String::new();

        // Set graphics state
        content.push_str("q\n");

        // Draw background if specified
        if let Some(bg_color) = &widget.appearance.background_color {
            match bg_color {
                crate::graphics::Color::Gray(g) => {
                    content.push_str(&format!("{} g\n", g));
                }
                crate::graphics::Color::Rgb(r, g, b) => {
                    content.push_str(&format!("{} {} {} rg\n", r, g, b));
                }
                crate::graphics::Color::Cmyk(c, m, y, k) => {
                    content.push_str(&format!("{} {} {} {} k\n", c, m, y, k));
                }
            }
            content.push_str(&format!("0 0 {} {} re\n", width, height));
            content.push_str("f\n");
        }

        // Draw border
        if let Some(border_color) = &widget.appearance.border_color {
            match border_color {
                crate::graphics::Color::Gray(g) => {
                    content.push_str(&format!("{} G\n", g));
                }
                crate::graphics::Color::Rgb(r, g, b) => {
                    content.push_str(&format!("{} {} {} RG\n", r, g, b));
                }
                crate::graphics::Color::Cmyk(c, m, y, k) => {
                    content.push_str(&format!("{} {} {} {} K\n", c, m, y, k));
                }
            }
            content.push_str(&format!("{} w\n", widget.appearance.border_width));
            content.push_str(&format!("0 0 {} {} re\n", width, height));
            content.push_str("S\n");
        }

        // For checkboxes, add a checkmark if checked
        if let Some(Object::Name(ft)) = field_dict.get("FT") {
            if ft == "Btn" {
                if let Some(Object::Name(v)) = field_dict.get("V") {
                    if v == "Yes" {
                        // Draw checkmark
                        content.push_str("0 0 0 RG\n"); // Black
                        content.push_str("2 w\n");
                        let margin = width * 0.2;
                        content.push_str(&format!("{} {} m\n", margin, height / 2.0));
                        content.push_str(&format!("{} {} l\n", width / 2.0, margin));
                        content.push_str(&format!("{} {} l\n", width - margin, height - margin));
                        content.push_str("S\n");
                    }
                }
            }
        }

        // Restore graphics state
        content.push_str("Q\n");

        // Create stream dictionary
        let mut stream_dict = Dictionary::new();
        stream_dict.set("Type", Object::Name("XObject".to_string()));
        stream_dict.set("Subtype", Object::Name("Form".to_string()));
        stream_dict.set(
            "BBox",
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(width),
                Object::Real(height),
            ]),
        );
        stream_dict.set("Resources", Object::Dictionary(Dictionary::new()));
        stream_dict.set("Length", Object::Integer(content.len() as i64));

        // Write the appearance stream
        let stream_id = self.allocate_object_id();
        self.write_object(stream_id, Object::Stream(stream_dict, content.into_bytes()))?;

        Ok(stream_id)
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    // Format the UTC date according to PDF specification
    // D:YYYYMMDDHHmmSSOHH'mm where O is the relationship of local time to UTC (+ or -)
    let formatted = date.format("D:%Y%m%d%H%M%S");

    // For UTC, the offset is always +00'00
    format!("{formatted}+00'00")
}
