//! Risk template tables: five per canonical department plus cross-cutting items.

use super::RiskTemplate;
use crate::models::DepartmentBucket;
use crate::models::Level::{self, Critical, High, Low, Medium};

const fn risk(
    id: &'static str,
    title: &'static str,
    base_level: Level,
    description: &'static str,
) -> RiskTemplate {
    RiskTemplate {
        id,
        title,
        base_level,
        description,
    }
}

const LOGISTICS: &[RiskTemplate] = &[
    risk(
        "HC-001",
        "Sudden equipment failure",
        Medium,
        "Sound, lighting or stage equipment breaks down during setup or the show",
    ),
    risk(
        "HC-002",
        "Bad weather (rain, wind)",
        High,
        "Adverse weather hits outdoor areas; a contingency plan is needed",
    ),
    risk(
        "HC-003",
        "Last-minute supply shortage",
        Medium,
        "Suppliers deliver short or late, delaying setup",
    ),
    risk(
        "HC-004",
        "Electrical safety incident",
        Critical,
        "Overload, short circuit or insufficient power for the equipment",
    ),
    risk(
        "HC-005",
        "Setup area too small",
        Medium,
        "Usable floor space is smaller than planned and the layout must change",
    ),
];

const MARKETING: &[RiskTemplate] = &[
    risk(
        "MKT-001",
        "Copyright infringement in content",
        High,
        "Images, music or text used without rights, exposing the event to legal action",
    ),
    risk(
        "MKT-002",
        "Key visual not approved",
        Medium,
        "Leadership requests redesigns, pushing the timeline",
    ),
    risk(
        "MKT-003",
        "Ad budget overrun",
        Medium,
        "Paid media costs more than planned and the campaign must be cut back",
    ),
    risk(
        "MKT-004",
        "Reach below target",
        Low,
        "Audience reach misses its KPI and content needs tuning",
    ),
    risk(
        "MKT-005",
        "Negative social media feedback",
        Medium,
        "Negative comments or reviews damage the event's image",
    ),
];

const TECHNICAL: &[RiskTemplate] = &[
    risk(
        "CM-001",
        "Livestream interruption",
        High,
        "Unstable internet or streaming hardware faults",
    ),
    risk(
        "CM-002",
        "Audio feedback",
        Medium,
        "The sound system squeals or echoes, hurting quality",
    ),
    risk(
        "CM-003",
        "Technical staff shortage",
        High,
        "A technician falls ill or is unavailable with no replacement",
    ),
    risk(
        "CM-004",
        "Data loss (backup failure)",
        Critical,
        "Rundown, guest list or cue sheet lost",
    ),
    risk(
        "CM-005",
        "Check-in system overload",
        Medium,
        "Too many simultaneous check-ins slow down or crash the system",
    ),
];

const FINANCE: &[RiskTemplate] = &[
    risk(
        "TC-001",
        "Costs exceed budget",
        High,
        "Actual spending exceeds the estimate; cuts or extra funding required",
    ),
    risk(
        "TC-002",
        "Vendor demands early payment",
        Medium,
        "A vendor asks to be paid ahead of terms, straining cash flow",
    ),
    risk(
        "TC-003",
        "Ambiguous contract terms",
        Medium,
        "Vague clauses lead to disputes with vendors",
    ),
    risk(
        "TC-004",
        "Lost invoices and receipts",
        Low,
        "Missing documents make settlement and reporting difficult",
    ),
    risk(
        "TC-005",
        "Sponsor withdraws at the last minute",
        Critical,
        "A sponsor cancels and a major revenue source disappears",
    ),
];

const EXTERNAL_RELATIONS: &[RiskTemplate] = &[
    risk(
        "ER-001",
        "Artist contract signed late",
        High,
        "Negotiations drag on and riders arrive too late for production",
    ),
    risk(
        "ER-002",
        "Rider demands exceed budget",
        Medium,
        "Technical or hospitality riders require more than was allocated",
    ),
    risk(
        "ER-003",
        "Sponsor deliverables disputed",
        Medium,
        "Partners disagree on branding placement or promised benefits",
    ),
    risk(
        "ER-004",
        "Artist arrival delayed",
        High,
        "Flight or transfer problems push the artist past soundcheck",
    ),
    risk(
        "ER-005",
        "Partner communication gaps",
        Low,
        "Partners receive inconsistent information from different contacts",
    ),
];

/// Risks that span every department.
pub const OVERALL_RISKS: &[RiskTemplate] = &[
    risk(
        "OVR-001",
        "Performer or speaker cancels last minute",
        Critical,
        "The headline act drops out for health, scheduling or force majeure reasons",
    ),
    risk(
        "OVR-002",
        "Crowd overload, loss of control",
        Critical,
        "Attendance exceeds expectations and endangers safety",
    ),
    risk(
        "OVR-003",
        "Poor coordination between departments",
        Medium,
        "Missing communication causes errors or overlapping work",
    ),
    risk(
        "OVR-004",
        "Permit approval delayed",
        High,
        "Permit filings are not approved in time and the event must be postponed",
    ),
    risk(
        "OVR-005",
        "Medical emergency",
        High,
        "An attendee or staff member is injured and needs urgent care",
    ),
    risk(
        "OVR-006",
        "Schedule conflicts between tasks",
        Medium,
        "Task dependencies are not resolved correctly and the timeline slips",
    ),
    risk(
        "OVR-007",
        "Key staff absent unexpectedly",
        High,
        "A lead or key person drops out, affecting the whole plan",
    ),
];

/// Department risk templates; empty for unmapped departments.
pub fn risk_templates(bucket: &DepartmentBucket) -> &'static [RiskTemplate] {
    match bucket {
        DepartmentBucket::Logistics => LOGISTICS,
        DepartmentBucket::Marketing => MARKETING,
        DepartmentBucket::Technical => TECHNICAL,
        DepartmentBucket::Finance => FINANCE,
        DepartmentBucket::ExternalRelations => EXTERNAL_RELATIONS,
        DepartmentBucket::Other(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        for bucket in DepartmentBucket::CANONICAL {
            assert_eq!(risk_templates(&bucket).len(), 5, "{bucket}");
        }
        assert_eq!(OVERALL_RISKS.len(), 7);
        assert!(risk_templates(&DepartmentBucket::Other("Security".into())).is_empty());
    }

    #[test]
    fn test_ids_unique() {
        let mut ids = HashSet::new();
        let all = DepartmentBucket::CANONICAL
            .iter()
            .flat_map(risk_templates)
            .chain(OVERALL_RISKS);
        for r in all {
            assert!(ids.insert(r.id), "duplicate risk id {}", r.id);
        }
    }
}
