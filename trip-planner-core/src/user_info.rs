//! Traveler details collected on the first wizard step.
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION: u32 = 7;
pub const DEFAULT_ADULTS: u32 = 2;

pub const BUDGET_RANGES: [&str; 5] = [
    "AED 5,000 - AED 15,000",
    "AED 15,000 - AED 30,000",
    "AED 30,000 - AED 60,000",
    "AED 60,000 - AED 120,000",
    "AED 120,000+",
];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Departure options as `(value, label)` pairs.
pub const ORIGIN_CITIES: [(&str, &str); 28] = [
    ("mumbai", "Mumbai, India"),
    ("delhi", "Delhi, India"),
    ("bangalore", "Bangalore, India"),
    ("chennai", "Chennai, India"),
    ("kolkata", "Kolkata, India"),
    ("hyderabad", "Hyderabad, India"),
    ("pune", "Pune, India"),
    ("ahmedabad", "Ahmedabad, India"),
    ("jaipur", "Jaipur, India"),
    ("lucknow", "Lucknow, India"),
    ("london", "London, UK"),
    ("paris", "Paris, France"),
    ("new-york", "New York, USA"),
    ("los-angeles", "Los Angeles, USA"),
    ("toronto", "Toronto, Canada"),
    ("sydney", "Sydney, Australia"),
    ("singapore", "Singapore"),
    ("tokyo", "Tokyo, Japan"),
    ("seoul", "Seoul, South Korea"),
    ("beijing", "Beijing, China"),
    ("dubai", "Dubai, UAE"),
    ("abudhabi", "Abu Dhabi, UAE"),
    ("riyadh", "Riyadh, Saudi Arabia"),
    ("jeddah", "Jeddah, Saudi Arabia"),
    ("doha", "Doha, Qatar"),
    ("manama", "Manama, Bahrain"),
    ("muscat", "Muscat, Oman"),
    ("kuwait", "Kuwait City, Kuwait"),
];

/// Required traveler fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserInfoField {
    Name,
    Origin,
    Month,
    Budget,
}

impl UserInfoField {
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::Origin, Self::Month, Self::Budget];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Origin => "Departure City",
            Self::Month => "Journey Month",
            Self::Budget => "Budget Range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub duration: u32,
    /// One of [`BUDGET_RANGES`], or empty before selection
    pub budget: String,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    /// Value half of an [`ORIGIN_CITIES`] entry
    pub origin: String,
    pub month: String,
}

impl Default for UserInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: DEFAULT_DURATION,
            budget: String::new(),
            adults: DEFAULT_ADULTS,
            children: 0,
            infants: 0,
            origin: String::new(),
            month: String::new(),
        }
    }
}

impl UserInfo {
    fn field_value(&self, field: UserInfoField) -> &str {
        match field {
            UserInfoField::Name => &self.name,
            UserInfoField::Origin => &self.origin,
            UserInfoField::Month => &self.month,
            UserInfoField::Budget => &self.budget,
        }
    }

    /// Required fields that are blank after trimming.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<UserInfoField> {
        UserInfoField::REQUIRED
            .into_iter()
            .filter(|field| self.field_value(*field).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// `"2 Adults, 1 Child, 2 Infants"`; children and infants only when present.
    #[must_use]
    pub fn travelers_label(&self) -> String {
        let mut label = format!("{} Adult{}", self.adults, plural(self.adults, "s"));
        if self.children > 0 {
            label.push_str(&format!(", {} Child{}", self.children, plural(self.children, "ren")));
        }
        if self.infants > 0 {
            label.push_str(&format!(", {} Infant{}", self.infants, plural(self.infants, "s")));
        }
        label
    }

    /// Display label for the origin value, falling back to the raw value.
    #[must_use]
    pub fn origin_label(&self) -> &str {
        origin_label(&self.origin).unwrap_or(&self.origin)
    }

    /// Parse a form value; blank or invalid input falls back to the default duration.
    #[must_use]
    pub fn parse_duration(input: &str) -> u32 {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_DURATION)
    }

    /// Parse an adult count; at least one adult always travels.
    #[must_use]
    pub fn parse_adults(input: &str) -> u32 {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|adults| *adults > 0)
            .unwrap_or(1)
    }
}

#[must_use]
pub fn origin_label(value: &str) -> Option<&'static str> {
    ORIGIN_CITIES
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
}

const fn plural(count: u32, suffix: &'static str) -> &'static str {
    if count == 1 { "" } else { suffix }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UserInfo {
        UserInfo {
            name: "Aisha".into(),
            budget: BUDGET_RANGES[1].into(),
            origin: "mumbai".into(),
            month: "March".into(),
            ..UserInfo::default()
        }
    }

    #[test]
    fn defaults_match_form_initial_state() {
        let info = UserInfo::default();
        assert_eq!(info.duration, 7);
        assert_eq!(info.adults, 2);
        assert_eq!(info.missing_fields(), UserInfoField::REQUIRED.to_vec());
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut info = complete();
        assert!(info.is_complete());
        info.name = "   ".into();
        assert_eq!(info.missing_fields(), vec![UserInfoField::Name]);
    }

    #[test]
    fn travelers_label_pluralizes() {
        let mut info = complete();
        assert_eq!(info.travelers_label(), "2 Adults");
        info.adults = 1;
        info.children = 1;
        info.infants = 2;
        assert_eq!(info.travelers_label(), "1 Adult, 1 Child, 2 Infants");
        info.children = 3;
        info.infants = 1;
        assert_eq!(info.travelers_label(), "1 Adult, 3 Children, 1 Infant");
    }

    #[test]
    fn origin_label_resolves_known_values() {
        let mut info = complete();
        assert_eq!(info.origin_label(), "Mumbai, India");
        info.origin = "atlantis".into();
        assert_eq!(info.origin_label(), "atlantis");
    }

    #[test]
    fn form_parsing_falls_back() {
        assert_eq!(UserInfo::parse_duration("4"), 4);
        assert_eq!(UserInfo::parse_duration(""), 7);
        assert_eq!(UserInfo::parse_duration("0"), 7);
        assert_eq!(UserInfo::parse_adults("abc"), 1);
        assert_eq!(UserInfo::parse_adults(" 3 "), 3);
    }
}
