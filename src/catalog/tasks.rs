//! Task template tables.

use super::TaskTemplate;
use crate::models::DepartmentBucket;
use crate::models::Level::{Critical, High, Low, Medium};

const LOGISTICS: &[TaskTemplate] = &[
    TaskTemplate::new(
        "Survey venue and measure dimensions",
        "Measure the site, assess power and water, mark equipment positions",
        High,
        2,
        &[],
    ),
    TaskTemplate::new(
        "Design stage layout",
        "Draw 2D/3D plans, zone the site, define movement flows",
        High,
        3,
        &["Survey venue and measure dimensions"],
    ),
    TaskTemplate::new(
        "Draft safety plan and get permits approved",
        "Crowd flow, emergency exits, safety checklist, permit filing",
        High,
        2,
        &["Design stage layout"],
    ),
    TaskTemplate::new(
        "Contact equipment suppliers",
        "Find vendors, request quotes, compare quality",
        Medium,
        2,
        &["Draft safety plan and get permits approved"],
    ),
    TaskTemplate::new(
        "Pay equipment deposit and confirm delivery",
        "Sign rental agreement, pay deposit, confirm delivery slot",
        Medium,
        1,
        &["Contact equipment suppliers"],
    ),
    TaskTemplate::new(
        "Transport equipment to venue",
        "Dispatch trucks, load and unload, check inventory",
        High,
        1,
        &["Pay equipment deposit and confirm delivery"],
    ),
    TaskTemplate::new(
        "Install stage and structures (site ready)",
        "Raise the frame, hang the backdrop, mount LED screens",
        Critical,
        2,
        &["Transport equipment to venue"],
    ),
    TaskTemplate::new(
        "Run power and network cabling",
        "Lay power and signal lines, test supply",
        Critical,
        1,
        &["Install stage and structures (site ready)"],
    ),
    TaskTemplate::new(
        "Test sound system",
        "Check speakers, microphones and mixer, remove feedback",
        High,
        1,
        &["Run power and network cabling"],
    ),
    TaskTemplate::new(
        "Test lighting system",
        "Check fixtures, adjust angles, program lighting cues",
        High,
        1,
        &["Run power and network cabling"],
    ),
    TaskTemplate::new(
        "Run final rehearsal of all technical systems",
        "Full run-through, fix faults, confirm backup plan",
        Critical,
        1,
        &["Test sound system", "Test lighting system"],
    ),
];

const MARKETING: &[TaskTemplate] = &[
    TaskTemplate::new(
        "Research target audience",
        "Analyze demographics, insights and audience behavior",
        High,
        2,
        &[],
    ),
    TaskTemplate::new(
        "Build overall communications plan",
        "Set goals, KPIs, channels, timeline and budget",
        High,
        3,
        &["Research target audience"],
    ),
    TaskTemplate::new(
        "Develop creative concept",
        "Brainstorm, pick a direction, write the creative brief",
        High,
        2,
        &["Build overall communications plan"],
    ),
    TaskTemplate::new(
        "Design main key visual",
        "Concept and design the event identity",
        High,
        4,
        &["Develop creative concept"],
    ),
    TaskTemplate::new(
        "Produce posters and banners",
        "Design posters, standees and backdrop from the key visual",
        Medium,
        2,
        &["Design main key visual"],
    ),
    TaskTemplate::new(
        "Create social media content",
        "Write copy, design posts, schedule publishing",
        Medium,
        3,
        &["Design main key visual"],
    ),
    TaskTemplate::new(
        "Shoot and edit teaser video",
        "Script, film and edit the promo video",
        Medium,
        4,
        &["Design main key visual"],
    ),
    TaskTemplate::new(
        "Run paid social ad campaign",
        "Set up campaigns and targeting, run and optimize ads",
        High,
        7,
        &["Create social media content"],
    ),
    TaskTemplate::new(
        "Publish posts across social channels",
        "Post on schedule, engage the audience, monitor comments",
        Medium,
        10,
        &["Create social media content"],
    ),
    TaskTemplate::new(
        "Track metrics and optimize",
        "Track reach, engagement and conversion, run A/B tests",
        Low,
        7,
        &["Run paid social ad campaign"],
    ),
];

const EXTERNAL_RELATIONS: &[TaskTemplate] = &[
    TaskTemplate::new(
        "Research and shortlist artists",
        "Find suitable artists, check budget and availability",
        High,
        3,
        &[],
    ),
    TaskTemplate::new(
        "Contact artist management",
        "Email or call managers, pitch the event, ask availability",
        High,
        2,
        &["Research and shortlist artists"],
    ),
    TaskTemplate::new(
        "Negotiate contract terms",
        "Negotiate fees, technical rider and benefits",
        High,
        4,
        &["Contact artist management"],
    ),
    TaskTemplate::new(
        "Sign official artist contracts",
        "Review contract, sign, pay deposit",
        Critical,
        2,
        &["Negotiate contract terms"],
    ),
    TaskTemplate::new(
        "Collect technical rider",
        "Gather sound, lighting and stage requirements",
        High,
        1,
        &["Sign official artist contracts"],
    ),
    TaskTemplate::new(
        "Collect hospitality rider",
        "Gather catering, lodging and transport requirements",
        Medium,
        1,
        &["Sign official artist contracts"],
    ),
    TaskTemplate::new(
        "Book hotel rooms for artists",
        "Reserve rooms, confirm check-in and special requests",
        Medium,
        1,
        &["Collect hospitality rider"],
    ),
    TaskTemplate::new(
        "Arrange artist transport",
        "Book airport pickups and transfers",
        Medium,
        1,
        &["Collect hospitality rider"],
    ),
    TaskTemplate::new(
        "Prepare backstage and amenities",
        "Set up green room, food and drinks per rider",
        Medium,
        1,
        &["Collect hospitality rider"],
    ),
    TaskTemplate::new(
        "Organize artist soundcheck",
        "Schedule soundcheck slots with the technical team",
        High,
        1,
        &["Collect technical rider"],
    ),
];

const FINANCE: &[TaskTemplate] = &[
    TaskTemplate::new(
        "Draft detailed budget estimate",
        "List every cost line, estimate, keep a 15% reserve",
        Critical,
        3,
        &[],
    ),
    TaskTemplate::new(
        "Allocate budget per department",
        "Split the budget across departments, set spending limits",
        High,
        1,
        &["Draft detailed budget estimate"],
    ),
    TaskTemplate::new(
        "Present budget for leadership approval",
        "Prepare the pitch and justify each line",
        High,
        2,
        &["Allocate budget per department"],
    ),
    TaskTemplate::new(
        "Revise budget from feedback",
        "Apply review comments, trim costs",
        Medium,
        1,
        &["Present budget for leadership approval"],
    ),
    TaskTemplate::new(
        "Prepare procurement contracts",
        "Draft vendor contracts, negotiate terms",
        High,
        2,
        &["Revise budget from feedback"],
    ),
    TaskTemplate::new(
        "Sign vendor contracts",
        "Review and sign contracts, file documents",
        High,
        2,
        &["Prepare procurement contracts"],
    ),
    TaskTemplate::new(
        "Pay vendor advances",
        "Process deposits, keep receipts",
        Medium,
        1,
        &["Sign vendor contracts"],
    ),
    TaskTemplate::new(
        "Track actual spending",
        "Compare spending with budget, flag overruns",
        High,
        15,
        &["Pay vendor advances"],
    ),
    TaskTemplate::new(
        "Collect payment receipts",
        "Gather invoices and receipts, organize records",
        Medium,
        10,
        &["Track actual spending"],
    ),
    TaskTemplate::new(
        "Settle accounts and report financials",
        "Reconcile income and costs, analyze variance, report ROI",
        Low,
        3,
        &["Collect payment receipts"],
    ),
];

const TECHNICAL: &[TaskTemplate] = &[
    TaskTemplate::new(
        "Analyze technical requirements",
        "Specify sound, lighting, IT and streaming needs",
        High,
        2,
        &[],
    ),
    TaskTemplate::new(
        "List required equipment",
        "Itemize equipment with detailed specifications",
        High,
        1,
        &["Analyze technical requirements"],
    ),
    TaskTemplate::new(
        "Source equipment vendors",
        "Research vendors, compare price and quality",
        High,
        2,
        &["List required equipment"],
    ),
    TaskTemplate::new(
        "Test equipment quality",
        "Demo equipment before renting, check functionality",
        Medium,
        1,
        &["Source equipment vendors"],
    ),
    TaskTemplate::new(
        "Sign equipment rental contract",
        "Negotiate the contract, confirm delivery date",
        High,
        1,
        &["Test equipment quality"],
    ),
    TaskTemplate::new(
        "Set up IT network",
        "Install routers and switches, run cabling, configure network",
        High,
        2,
        &["Sign equipment rental contract"],
    ),
    TaskTemplate::new(
        "Install livestream system",
        "Set up cameras, encoder and streaming software, test connection",
        High,
        2,
        &["Set up IT network"],
    ),
    TaskTemplate::new(
        "Test internet bandwidth",
        "Check speed and stability, prepare a backup connection",
        Critical,
        1,
        &["Install livestream system"],
    ),
    TaskTemplate::new(
        "Prepare technical backup plan",
        "Stage backup equipment and redundancy",
        High,
        1,
        &["Test internet bandwidth"],
    ),
    TaskTemplate::new(
        "Schedule onsite technicians",
        "Plan shifts, brief responsibilities, set standby rota",
        Medium,
        1,
        &["Prepare technical backup plan"],
    ),
];

/// Fallback chain for departments without a dedicated catalog.
pub const GENERIC_TEMPLATES: &[TaskTemplate] = &[
    TaskTemplate::new(
        "Draft detailed plan",
        "Define goals, scope and timeline",
        High,
        2,
        &[],
    ),
    TaskTemplate::new(
        "Assign responsibilities",
        "Assign work to each member",
        High,
        1,
        &["Draft detailed plan"],
    ),
    TaskTemplate::new(
        "Execute the plan",
        "Carry out the agreed plan",
        Medium,
        5,
        &["Assign responsibilities"],
    ),
    TaskTemplate::new(
        "Review quality",
        "Review output, identify issues",
        Medium,
        1,
        &["Execute the plan"],
    ),
    TaskTemplate::new(
        "Finalize and hand over",
        "Wrap up and hand over deliverables",
        Low,
        1,
        &["Review quality"],
    ),
];

pub(super) fn templates_for(bucket: &DepartmentBucket) -> &'static [TaskTemplate] {
    match bucket {
        DepartmentBucket::Logistics => LOGISTICS,
        DepartmentBucket::Marketing => MARKETING,
        DepartmentBucket::Technical => TECHNICAL,
        DepartmentBucket::Finance => FINANCE,
        DepartmentBucket::ExternalRelations => EXTERNAL_RELATIONS,
        DepartmentBucket::Other(_) => GENERIC_TEMPLATES,
    }
}
