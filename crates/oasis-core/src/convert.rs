// ── API-to-domain type conversions ──
//
// Bridges raw `oasis_api` wire records into canonical
// `oasis_core::model` domain types. Each `From` impl normalizes field
// names, parses labels into strong types, and fills sensible defaults
// for missing optional data. Malformed pieces (unknown day name,
// unknown cost label, NaN coordinates) degrade to their absent forms
// rather than erroring.

use oasis_api::types::{
    CategoryRecord, ContactRecord, DayScheduleRecord, FinancialAidRecord, InternalNoteRecord,
    PhoneNumberRecord, ResourceRecord,
};

use crate::model::{
    Category, Contact, Cost, Day, DaySchedule, FinancialAid, InternalNote, Period, PhoneNumber,
    Resource,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Drop NaN/infinite and 0.0 coordinates -- the backend stores 0.0 for
/// "unknown", which must never reach the distance math.
fn clean_coordinate(raw: Option<f64>) -> Option<f64> {
    raw.filter(|v| v.is_finite() && *v != 0.0)
}

/// A schedule row with an unknown day name is dropped; a row with
/// fewer than two period entries is kept as closed-all-day.
fn convert_schedule_row(row: DayScheduleRecord) -> Option<DaySchedule> {
    let day = Day::from_label(&row.day)?;
    let period = match &row.period[..] {
        [open, close, ..] => Some(Period {
            open: open.clone(),
            close: close.clone(),
        }),
        _ => None,
    };
    Some(DaySchedule { day, period })
}

// ── Resource ───────────────────────────────────────────────────────

impl From<ResourceRecord> for Resource {
    fn from(r: ResourceRecord) -> Self {
        let hours = r
            .hours_of_operation
            .map(|wrapper| {
                wrapper
                    .hours_of_operation
                    .into_iter()
                    .filter_map(convert_schedule_row)
                    .collect()
            })
            .unwrap_or_default();

        Resource {
            id: r.id.unwrap_or_default(),
            name: r.name,
            category: r.category,
            subcategory: r.subcategory,
            cost: r.cost.as_deref().and_then(Cost::from_label),
            languages: r.available_languages,
            city: r.city,
            hours,
            lat: clean_coordinate(r.lat),
            lng: clean_coordinate(r.lng),
            description: r.description,
            address: r.address,
            address_line2: r.address_line_2,
            apt_unit_suite: r.apt_unit_suite,
            state: r.state,
            zip: r.zip,
            email: r.email,
            website: r.website,
            eligibility: r.eligibility_requirements,
            phone_numbers: r.phone_numbers.into_iter().map(PhoneNumber::from).collect(),
            required_documents: r.required_documents,
            financial_aid: r.financial_aid_details.map(FinancialAid::from),
            contacts: r.contacts.into_iter().map(Contact::from).collect(),
            internal_notes: r.internal_notes.into_iter().map(InternalNote::from).collect(),
        }
    }
}

impl From<PhoneNumberRecord> for PhoneNumber {
    fn from(p: PhoneNumberRecord) -> Self {
        PhoneNumber {
            phone_type: p.phone_type,
            number: p.number,
        }
    }
}

impl From<FinancialAidRecord> for FinancialAid {
    fn from(f: FinancialAidRecord) -> Self {
        FinancialAid {
            education: f.education,
            immigration_status: f.immigration_status,
            deadline: f.deadline,
            amount: f.amount,
        }
    }
}

impl From<ContactRecord> for Contact {
    fn from(c: ContactRecord) -> Self {
        Contact {
            name: c.name,
            role: c.role,
            email: c.email,
            phone_number: c.phone_number,
            note: c.note,
        }
    }
}

impl From<InternalNoteRecord> for InternalNote {
    fn from(n: InternalNoteRecord) -> Self {
        InternalNote {
            subject: n.subject,
            body: n.body,
        }
    }
}

// ── Category ───────────────────────────────────────────────────────

impl From<CategoryRecord> for Category {
    fn from(c: CategoryRecord) -> Self {
        Category {
            name: c.name,
            subcategories: c.subcategories,
        }
    }
}
