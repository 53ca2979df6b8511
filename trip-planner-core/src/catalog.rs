//! Static catalog of hotels, transport modes and attractions.
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Category of a catalog item and of a day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hotel,
    Transport,
    Attraction,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Hotel, Self::Transport, Self::Attraction];

    /// Stable key used in drag payloads and DOM data attributes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Transport => "transport",
            Self::Attraction => "attraction",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Transport => "Transport",
            Self::Attraction => "Attraction",
        }
    }

    /// Heading shown above the category in the customization sidebar.
    #[must_use]
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Hotel => "5-Star Hotels",
            Self::Transport => "Transportation",
            Self::Attraction => "Attractions",
        }
    }

    /// Unit suffix for the per-item price badge.
    #[must_use]
    pub const fn price_unit(self) -> &'static str {
        match self {
            Self::Hotel => "/night",
            Self::Transport => "/day",
            Self::Attraction => "/person",
        }
    }

    #[must_use]
    pub const fn fallback_icon(self) -> &'static str {
        match self {
            Self::Hotel => "🏨",
            Self::Transport => "🚗",
            Self::Attraction => "📍",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hotel" | "hotels" => Ok(Self::Hotel),
            "transport" => Ok(Self::Transport),
            "attraction" | "attractions" => Ok(Self::Attraction),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single priced option offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Whole currency units
    pub price: i64,
    pub category: Category,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub stars: Option<u8>,
    #[serde(default)]
    pub emirate: Option<String>,
    #[serde(default)]
    pub duration_hrs: Option<u8>,
}

impl CatalogItem {
    /// `"Name – feature, feature"` using at most the first two features.
    #[must_use]
    pub fn highlight(&self) -> String {
        if self.features.is_empty() {
            return self.name.clone();
        }
        let features: Vec<&str> = self.features.iter().take(2).map(String::as_str).collect();
        format!("{} – {}", self.name, features.join(", "))
    }

    #[must_use]
    pub fn icon_or_default(&self) -> &str {
        self.icon
            .as_deref()
            .unwrap_or_else(|| self.category.fallback_icon())
    }

    /// First word of the name, used for compact day-card badges.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ItemNoCategory {
    id: String,
    name: String,
    price: i64,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    stars: Option<u8>,
    #[serde(default)]
    emirate: Option<String>,
    #[serde(default)]
    duration_hrs: Option<u8>,
}

impl ItemNoCategory {
    fn with_category(self, category: Category) -> CatalogItem {
        CatalogItem {
            id: self.id,
            name: self.name,
            price: self.price,
            category,
            location: self.location,
            features: self.features,
            image: self.image,
            icon: self.icon,
            stars: self.stars,
            emirate: self.emirate,
            duration_hrs: self.duration_hrs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    hotels: Vec<ItemNoCategory>,
    #[serde(default)]
    transport: Vec<ItemNoCategory>,
    #[serde(default)]
    attractions: Vec<ItemNoCategory>,
}

/// Immutable lookup tables for every category, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub hotels: Vec<CatalogItem>,
    pub transport: Vec<CatalogItem>,
    pub attractions: Vec<CatalogItem>,
}

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            hotels: Vec::new(),
            transport: Vec::new(),
            attractions: Vec::new(),
        }
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an id repeats within a category.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let convert = |items: Vec<ItemNoCategory>, category: Category| {
            items
                .into_iter()
                .map(|item| item.with_category(category))
                .collect::<Vec<_>>()
        };
        let catalog = Self {
            hotels: convert(file.hotels, Category::Hotel),
            transport: convert(file.transport, Category::Transport),
            attractions: convert(file.attractions, Category::Attraction),
        };
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON fails to parse.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/catalog.json"))
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        for category in Category::ALL {
            let mut seen = HashSet::new();
            for item in self.items(category) {
                if !seen.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        category,
                        id: item.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Hotel => &self.hotels,
            Category::Transport => &self.transport,
            Category::Attraction => &self.attractions,
        }
    }

    /// Look up an item; unknown ids resolve to `None` rather than an error.
    #[must_use]
    pub fn find(&self, category: Category, id: &str) -> Option<&CatalogItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Resolve an optional slot value to its catalog item.
    #[must_use]
    pub fn resolve(&self, category: Category, id: Option<&str>) -> Option<&CatalogItem> {
        id.and_then(|id| self.find(category, id))
    }

    /// Price of a slot, treating unset and unknown ids as zero.
    #[must_use]
    pub fn price_of(&self, category: Category, id: Option<&str>) -> i64 {
        self.resolve(category, id).map_or(0, |item| item.price)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hotels.len() + self.transport.len() + self.attractions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
