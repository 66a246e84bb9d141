//! Response extraction model: the image descriptor and the named data groups.

use serde::{Deserialize, Serialize};

use super::DocumentError;
use super::enums::{DataItemType, ImageContentType};

/// Where and how the designated image lives in an API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    /// Delivery mode of the image payload.
    #[serde(default)]
    pub content_type: ImageContentType,
    /// Extraction path into the response body. Required for URL delivery;
    /// irrelevant for binary responses.
    #[serde(default)]
    pub path: String,
    /// The path yields a list of images rather than a single one.
    #[serde(default)]
    pub is_list: bool,
    /// The payload is base64 encoded.
    #[serde(default)]
    pub is_base64: bool,
}

/// A named extraction path in a [`DataGroup`].
///
/// `one-to-one-mapping` only means something for list items (the extracted
/// list must match the image list's length), so the flag is cleared whenever
/// the item is not a list: on load, and across every type change.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    /// Display name.
    pub friendly_name: String,
    /// Extraction path into the API response.
    pub path: String,
    item_type: DataItemType,
    one_to_one_mapping: bool,
}

impl Default for DataItem {
    fn default() -> Self {
        Self {
            friendly_name: "unnamed item".to_string(),
            path: String::new(),
            item_type: DataItemType::String,
            one_to_one_mapping: false,
        }
    }
}

impl DataItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_type(&self) -> DataItemType {
        self.item_type
    }

    /// Change the declared type. Leaving `list` clears the one-to-one
    /// mapping flag; switching to `list` keeps whatever was set before.
    pub fn set_item_type(&mut self, item_type: DataItemType) {
        self.item_type = item_type;
        if item_type != DataItemType::List {
            self.one_to_one_mapping = false;
        }
    }

    pub fn one_to_one_mapping(&self) -> bool {
        self.one_to_one_mapping
    }

    /// The flag only sticks on list items; for any other type it stays off.
    pub fn set_one_to_one_mapping(&mut self, mapping: bool) {
        self.one_to_one_mapping = mapping && self.item_type == DataItemType::List;
    }
}

/// A named group of data items. Deleting a group drops its items with it.
///
/// Groups and items have no identifiers; identity is the position in the
/// owning list, so removals shift everything after them.
#[derive(Debug, Clone, PartialEq)]
pub struct DataGroup {
    /// Display name.
    pub friendly_name: String,
    /// Items in insertion order.
    pub items: Vec<DataItem>,
}

impl Default for DataGroup {
    fn default() -> Self {
        Self {
            friendly_name: "unnamed group".to_string(),
            items: Vec::new(),
        }
    }
}

impl DataGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh item and hand it back for editing.
    pub fn add_item(&mut self) -> &mut DataItem {
        self.items.push(DataItem::new());
        self.items.last_mut().unwrap()
    }

    /// Remove the item at `index`. Later items shift down one position.
    pub fn remove_item(&mut self, index: usize) -> Option<DataItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

/// Extraction rules applied to an API response: one designated image field
/// plus any number of named data groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSpec {
    pub image: ImageSpec,
    /// Groups in insertion order; identity is positional.
    pub data_groups: Vec<DataGroup>,
}

impl ResponseSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh group and hand it back for editing.
    pub fn add_group(&mut self) -> &mut DataGroup {
        self.data_groups.push(DataGroup::new());
        self.data_groups.last_mut().unwrap()
    }

    /// Remove the group at `index` together with all of its items.
    pub fn remove_group(&mut self, index: usize) -> Option<DataGroup> {
        (index < self.data_groups.len()).then(|| self.data_groups.remove(index))
    }
}

/// On-disk form of the response section.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ResponseWire {
    #[serde(default)]
    pub image: ImageSpec,
    #[serde(default)]
    pub others: Vec<DataGroupWire>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DataGroupWire {
    #[serde(default)]
    pub friendly_name: String,
    #[serde(rename = "data", default)]
    pub items: Vec<DataItemWire>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DataItemWire {
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub path: String,
    /// Absent in documents written before the type field existed.
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(rename = "one-to-one-mapping", default)]
    pub one_to_one_mapping: bool,
}

impl DataItemWire {
    pub(crate) fn from_item(item: &DataItem) -> Self {
        Self {
            friendly_name: item.friendly_name.clone(),
            path: item.path.clone(),
            item_type: Some(item.item_type.as_str().to_string()),
            one_to_one_mapping: item.one_to_one_mapping,
        }
    }

    /// Rebuild the typed item. Documents from before the `type` field exist
    /// are migrated here: a set mapping flag implies the item was a list.
    pub(crate) fn into_item(self, group: usize, item: usize) -> Result<DataItem, DocumentError> {
        let item_type = match self.item_type {
            Some(tag) => DataItemType::parse(&tag)
                .ok_or(DocumentError::UnknownDataItemType { group, item, tag })?,
            None if self.one_to_one_mapping => DataItemType::List,
            None => DataItemType::String,
        };
        Ok(DataItem {
            friendly_name: self.friendly_name,
            path: self.path,
            item_type,
            one_to_one_mapping: self.one_to_one_mapping && item_type == DataItemType::List,
        })
    }
}

impl ResponseWire {
    pub(crate) fn from_spec(spec: &ResponseSpec) -> Self {
        Self {
            image: spec.image.clone(),
            others: spec
                .data_groups
                .iter()
                .map(|group| DataGroupWire {
                    friendly_name: group.friendly_name.clone(),
                    items: group.items.iter().map(DataItemWire::from_item).collect(),
                })
                .collect(),
        }
    }

    pub(crate) fn into_spec(self) -> Result<ResponseSpec, DocumentError> {
        let mut data_groups = Vec::with_capacity(self.others.len());
        for (group_index, group) in self.others.into_iter().enumerate() {
            let mut items = Vec::with_capacity(group.items.len());
            for (item_index, item) in group.items.into_iter().enumerate() {
                items.push(item.into_item(group_index, item_index)?);
            }
            data_groups.push(DataGroup {
                friendly_name: group.friendly_name,
                items,
            });
        }
        Ok(ResponseSpec {
            image: self.image,
            data_groups,
        })
    }
}
