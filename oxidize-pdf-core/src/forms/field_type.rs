//! Form field types according to ISO 32000-1 Section 12.7.4

use crate::objects::{Dictionary, Object};

/// Type of form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// Button field (push button, checkbox, radio button)
    Button,
    /// Text field
    Text,
    /// Choice field (list box, combo box)
    Choice,
    /// Signature field
    Signature,
}

impl FieldType {
    /// Get the PDF field type name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            FieldType::Button => "Btn",
            FieldType::Text => "Tx",
            FieldType::Choice => "Ch",
            FieldType::Signature => "Sig",
        }
    }
}

/// Text field for entering text
#[derive(Debug, Clone)]
pub struct TextField {
    /// Field name (unique identifier)
    pub name: String,
    /// Default value
    pub default_value: Option<String>,
    /// Current value
    pub value: Option<String>,
    /// Maximum length of text
    pub max_length: Option<i32>,
    /// Whether field is multiline
    pub multiline: bool,
    /// Whether field is password field
    pub password: bool,
    /// Whether field is file select
    pub file_select: bool,
    /// Whether spellcheck is enabled
    pub do_not_spell_check: bool,
    /// Whether field allows rich text
    pub rich_text: bool,
}

impl TextField {
    /// Create a new text field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            value: None,
            max_length: None,
            multiline: false,
            password: false,
            file_select: false,
            do_not_spell_check: false,
            rich_text: false,
        }
    }

    /// Set the default value
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set maximum length
    pub fn with_max_length(mut self, length: i32) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Enable multiline text
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Enable password mode
    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    /// Convert to field dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("FT", Object::Name(FieldType::Text.pdf_name().to_string()));
        dict.set("T", Object::String(self.name.clone()));

        if let Some(ref default) = self.default_value {
            dict.set("DV", Object::String(default.clone()));
        }

        if let Some(ref value) = self.value {
            dict.set("V", Object::String(value.clone()));
        }

        if let Some(max_len) = self.max_length {
            dict.set("MaxLen", Object::Integer(max_len as i64));
        }

        // Field flags
        let mut flags = 0u32;
        if self.multiline {
            flags |= 1 << 12;
        }
        if self.password {
            flags |= 1 << 13;
        }
        if self.file_select {
            flags |= 1 << 20;
        }
        if self.do_not_spell_check {
            flags |= 1 << 22;
        }
        if self.rich_text {
            flags |= 1 << 25;
        }

        if flags != 0 {
            dict.set("Ff", Object::Integer(flags as i64));
        }

        dict
    }
}

/// Base button field
#[derive(Debug, Clone)]
pub struct ButtonField {
    /// Field name
    pub name: String,
    /// Button type flags
    pub no_toggle_to_off: bool,
    pub radio: bool,
    pub pushbutton: bool,
}

/// Push button field
#[derive(Debug, Clone)]
pub struct PushButton {
    /// Field name
    pub name: String,
    /// Button caption
    pub caption: Option<String>,
}

impl PushButton {
    /// Create a new push button
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caption: None,
        }
    }

    /// Set the caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Convert to field dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("FT", Object::Name(FieldType::Button.pdf_name().to_string()));
        dict.set("T", Object::String(self.name.clone()));

        // Push button flag
        dict.set("Ff", Object::Integer((1 << 16) as i64));

        dict
    }
}

/// Checkbox field
#[derive(Debug, Clone)]
pub struct CheckBox {
    /// Field name
    pub name: String,
    /// Whether checked by default
    pub checked: bool,
    /// Export value when checked
    pub export_value: String,
}

impl CheckBox {
    /// Create a new checkbox
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
            export_value: "Yes".to_string(),
        }
    }

    /// Set checked state
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set export value
    pub fn with_export_value(mut self, value: impl Into<String>) -> Self {
        self.export_value = value.into();
        self
    }

    /// Convert to field dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("FT", Object::Name(FieldType::Button.pdf_name().to_string()));
        dict.set("T", Object::String(self.name.clone()));

        if self.checked {
            dict.set("V", Object::Name(self.export_value.clone()));
            dict.set("AS", Object::Name(self.export_value.clone()));
        } else {
            dict.set("V", Object::Name("Off".to_string()));
            dict.set("AS", Object::Name("Off".to_string()));
        }

        dict
    }
}

/// Radio button field
#[derive(Debug, Clone)]
pub struct RadioButton {
    /// Field name (shared by all buttons in group)
    pub name: String,
    /// Options (export value, label)
    pub options: Vec<(String, String)>,
    /// Selected option index
    pub selected: Option<usize>,
}

impl RadioButton {
    /// Create a new radio button group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            selected: None,
        }
    }

    /// Add an option
    pub fn add_option(mut self, export_value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push((export_value.into(), label.into()));
        self
    }

    /// Set selected option
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Convert to field dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("FT", Object::Name(FieldType::Button.pdf_name().to_string()));
        dict.set("T", Object::String(self.name.clone()));

        // Radio button flags
        dict.set("Ff", Object::Integer((1 << 15) as i64));

        // Set value if selected
        if let Some(index) = self.selected {
            if let Some((export_value, _)) = self.options.get(index) {
                dict.set("V", Object::Name(export_value.clone()));
            }
        }

        dict
    }
}

/// Base choice field
#[derive(Debug, Clone)]
pub struct ChoiceField {
    /// Field name
    pub name: String,
    /// Options (export value, display text)
    pub options: Vec<(String, String)>,
    /// Selected indices
    pub selected: Vec<usize>,
    /// Whether multiple selection is allowed
    pub multi_select: bool,
}

/// List box field
#[derive(Debug, Clone)]
pub struct ListBox {
    /// Field name
    pub name: String,
    /// Options (export value, display text)
    pub options: Vec<(String, String)>,
    /// Selected indices
    pub selected: Vec<usize>,
    /// Whether multiple selection is allowed
    pub multi_select: bool,
}

impl ListBox {
    /// Create a new list box
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            selected: Vec::new(),
            multi_select: false,
        }
    }

    /// Add an option
    pub fn add_option(
        mut self,
        export_value: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        self.options.push((export_value.into(), display.into()));
        self
    }

    /// Enable multi-select
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Set selected indices
    pub fn with_selected(mut self, indices: Vec<usize>) -> Self {
        self.selected = indices;
        self
    }

    /// Convert to field dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("FT", Object::Name(FieldType::Choice.pdf_name().to_string()));
        dict.set("T", Object::String(self.name.clone()));

        // Build options array
        let opt_array: Vec<Object> = self
            .options
            .iter()
            .map(|(export, display)| {
                if export == display {
                    Object::String(display.clone())
                } else {
                    Object::Array(vec![
                        Object::String(export.clone()),
                        Object::String(display.clone()),
                    ])
                }
            })
            .collect();

        dict.set("Opt", Object::Array(opt_array));

        // Set flags
        let mut flags = 0u32;
        if self.multi_select {
            flags |= 1 << 21;
        }
        dict.set("Ff", Object::Integer(flags as i64));

        // Set selected values
        if !self.selected.is_empty() {
            if self.multi_select {
                let indices: Vec<Object> = self
                    .selected
                    .iter()
                    .map(|&i| Object::Integer(i as i64))
                    .collect();
                dict.set("I", Object::Array(indices));
            } else if let Some(&index) = self.selected.first() {
                if let Some((export, _)) = self.options.get(index) {
                    dict.set("V", Object::String(export.clone()));
                }
            }
        }

        dict
    }
}

/// Combo box field
#[derive(Debug, Clone)]
pub struct ComboBox {
    /// Field name
    pub name: String,
    /// Options (export value, display text)
    pub options: Vec<(String, String)>,
    /// Current value
    pub value: Option<String>,
    /// Whether custom text entry is allowed
    pub editable: bool,
}

impl ComboBox {
    /// Create a new combo box
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            value: None,
            editable: false,
        }
    }

    /// Add an option
    pub fn add_option(
        mut self,
        export_value: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        self.options.push((export_value.into(), display.into()));
        self
    }

    /// Enable editing
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Set value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Convert to field dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("FT", Object::Name(FieldType::Choice.pdf_name().to_string()));
        dict.set("T", Object::String(self.name.clone()));

        // Build options array
        let opt_array: Vec<Object> = self
            .options
            .iter()
            .map(|(export, display)| {
                if export == display {
                    Object::String(display.clone())
                } else {
                    Object::Array(vec![
                        Object::String(export.clone()),
                        Object::String(display.clone()),
                    ])
                }
            })
            .collect();

        dict.set("Opt", Object::Array(opt_array));

        // Set flags - combo flag
        let mut flags = 1u32 << 17;
        if self.editable {
            flags |= 1 << 18;
        }
        dict.set("Ff", Object::Integer(flags as i64));

        // Set value
        if let Some(ref value) = self.value {
            dict.set("V", Object::String(value.clone()));
        }

        dict
    }
}
