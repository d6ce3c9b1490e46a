//! Application model records.
//!
//! Timestamps are Unix epoch milliseconds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data type of a form field or view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Time,
    Datetime,
    Boolean,
    RichText,
    Names,
    Keywords,
    Doclink,
    Attachment,
    Computed,
}

/// One input field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldModel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
}

impl FieldModel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        field_type: FieldType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
            label: label.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One column of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnModel {
    pub id: String,
    pub name: String,
    pub title: String,
    pub data_type: FieldType,
}

impl ColumnModel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        data_type: FieldType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            data_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormModel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldModel>,
    pub created_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub columns: Vec<ColumnModel>,
    pub created_date: Option<i64>,
    /// Set on the synthesized fallback view.
    pub default_view: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub id: String,
    pub form_name: String,
    /// Field name to display value.
    pub fields: BTreeMap<String, String>,
    pub created_date: Option<i64>,
}

/// Complete application recovered from one container file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationModel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// File header version of the source container.
    pub format_version: u16,
    pub created_date: Option<i64>,
    pub modified_date: Option<i64>,
    pub forms: Vec<FormModel>,
    pub views: Vec<ViewModel>,
    pub documents: Vec<DocumentModel>,
}

impl ApplicationModel {
    pub fn form_by_name(&self, name: &str) -> Option<&FormModel> {
        self.forms.iter().find(|form| form.name == name)
    }

    pub fn view_by_name(&self, name: &str) -> Option<&ViewModel> {
        self.views.iter().find(|view| view.name == name)
    }

    /// Documents created with `form_name`, in model order.
    pub fn documents_by_form<'a>(
        &'a self,
        form_name: &'a str,
    ) -> impl Iterator<Item = &'a DocumentModel> + 'a {
        self.documents
            .iter()
            .filter(move |document| document.form_name == form_name)
    }

    /// The view flagged as default, if any.
    pub fn default_view(&self) -> Option<&ViewModel> {
        self.views.iter().find(|view| view.default_view)
    }
}
