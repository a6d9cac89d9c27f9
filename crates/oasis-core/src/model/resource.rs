// ── Resource domain type ──

use serde::{Deserialize, Serialize};

use super::cost::Cost;
use super::schedule::DaySchedule;

/// A single directory listing (service provider).
///
/// Resources are immutable snapshots fetched per invocation; the core
/// neither creates nor persists them. Fields beyond the filter keys
/// (cost, languages, city, subcategory) and the schedule are opaque
/// display data passed through to the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque backend identifier (stable, unique).
    pub id: String,
    pub name: String,
    /// Ordered; the first element is the primary (displayed) category.
    pub category: Vec<String>,
    pub subcategory: Vec<String>,
    /// Absent when the backend recorded no tier (or a malformed one).
    pub cost: Option<Cost>,
    /// `None` when the backend omitted the field entirely -- such a
    /// resource never matches a specific language filter.
    pub languages: Option<Vec<String>>,
    pub city: String,
    /// Weekly schedule; empty means no schedule on record.
    pub hours: Vec<DaySchedule>,
    /// `None` when the backend reported null, NaN, or 0.0 -- distance
    /// computation is suppressed entirely in that case.
    pub lat: Option<f64>,
    pub lng: Option<f64>,

    // ── Opaque display fields ───────────────────────────────────────
    pub description: String,
    pub address: String,
    pub address_line2: String,
    pub apt_unit_suite: String,
    pub state: String,
    pub zip: String,
    pub email: String,
    pub website: String,
    pub eligibility: String,
    pub phone_numbers: Vec<PhoneNumber>,
    pub required_documents: Vec<String>,
    pub financial_aid: Option<FinancialAid>,
    pub contacts: Vec<Contact>,
    pub internal_notes: Vec<InternalNote>,
}

impl Resource {
    /// The primary (displayed) category, if any.
    pub fn primary_category(&self) -> Option<&str> {
        self.category.first().map(String::as_str)
    }

    /// The primary (displayed) subcategory, if any.
    pub fn primary_subcategory(&self) -> Option<&str> {
        self.subcategory.first().map(String::as_str)
    }

    /// Coordinates, only when both are known and non-zero.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => Some((lat, lng)),
            _ => None,
        }
    }

    /// Single-line address summary, or a placeholder when none recorded.
    pub fn address_line(&self) -> String {
        if self.address.is_empty() {
            return "No address provided.".into();
        }
        let mut line = self.address.clone();
        if !self.address_line2.is_empty() {
            line.push_str(", ");
            line.push_str(&self.address_line2);
        }
        if !self.apt_unit_suite.is_empty() {
            line.push(' ');
            line.push_str(&self.apt_unit_suite);
        }
        if !self.city.is_empty() {
            line.push_str(", ");
            line.push_str(&self.city);
        }
        if !self.state.is_empty() {
            line.push_str(", ");
            line.push_str(&self.state);
        }
        if !self.zip.is_empty() {
            line.push(' ');
            line.push_str(&self.zip);
        }
        line
    }
}

/// Labeled phone number (`"office: 217-555-0100"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub phone_type: String,
    pub number: String,
}

/// Financial aid details, shown as a fixed (label, value) list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialAid {
    pub education: String,
    pub immigration_status: String,
    pub deadline: String,
    pub amount: String,
}

impl FinancialAid {
    /// True when every field is empty (rendered as "None provided.").
    pub fn is_empty(&self) -> bool {
        self.education.is_empty()
            && self.immigration_status.is_empty()
            && self.deadline.is_empty()
            && self.amount.is_empty()
    }
}

/// Recommended contact (admin-only display data).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone_number: String,
    pub note: String,
}

/// Internal note (admin-only display data).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternalNote {
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(name: &str) -> Resource {
        Resource {
            id: name.to_lowercase(),
            name: name.into(),
            category: vec!["Legal".into()],
            subcategory: Vec::new(),
            cost: None,
            languages: None,
            city: String::new(),
            hours: Vec::new(),
            lat: None,
            lng: None,
            description: String::new(),
            address: String::new(),
            address_line2: String::new(),
            apt_unit_suite: String::new(),
            state: String::new(),
            zip: String::new(),
            email: String::new(),
            website: String::new(),
            eligibility: String::new(),
            phone_numbers: Vec::new(),
            required_documents: Vec::new(),
            financial_aid: None,
            contacts: Vec::new(),
            internal_notes: Vec::new(),
        }
    }

    #[test]
    fn zero_coordinates_are_unknown() {
        let mut r = bare("A");
        assert_eq!(r.coordinates(), None);
        r.lat = Some(0.0);
        r.lng = Some(0.0);
        assert_eq!(r.coordinates(), None);
        r.lat = Some(40.11);
        r.lng = Some(-88.20);
        assert_eq!(r.coordinates(), Some((40.11, -88.20)));
    }

    #[test]
    fn address_line_joins_present_parts() {
        let mut r = bare("A");
        assert_eq!(r.address_line(), "No address provided.");
        r.address = "404 E Main St".into();
        r.city = "Urbana".into();
        r.state = "IL".into();
        r.zip = "61801".into();
        assert_eq!(r.address_line(), "404 E Main St, Urbana, IL 61801");
    }
}
