use crate::bag::Footprint;
use crate::types::ItemHandle;

pub trait ItemOracle {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<&ItemDefinition>;
}

/// Item definition as stored in design data.
///
/// # Stacking
///
/// All items have a `max_stack` value:
/// - Equipment: max_stack=1 (cannot stack)
/// - Materials / consumables: max_stack>1 (stackable)
///
/// # Grid footprint
///
/// `width` x `height` is the rectangle of bag cells one stack occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub category: ItemCategory,
    pub width: u8,
    pub height: u8,
    pub max_stack: u16,
}

impl ItemDefinition {
    pub fn new(
        handle: ItemHandle,
        name: impl Into<String>,
        category: ItemCategory,
        width: u8,
        height: u8,
        max_stack: u16,
    ) -> Self {
        Self {
            handle,
            name: name.into(),
            category,
            width,
            height,
            max_stack,
        }
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(usize::from(self.width), usize::from(self.height))
    }

    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }
}

/// Coarse item classes used by crafting and quest filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Material,
    Consumable,
    Equipment,
    Quest,
    Misc,
}

/// Plain vector-backed oracle, used by tests and by content bundles.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.handle == handle)
    }

    fn all_definitions(&self) -> Vec<&ItemDefinition> {
        self.items.iter().collect()
    }
}
