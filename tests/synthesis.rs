use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use u_wbs::allocation::{available_workers, distribute};
use u_wbs::catalog::{TaskCatalog, TaskTemplate};
use u_wbs::models::{DepartmentBucket, Level, SynthesisWarning, Task, VenueTier};
use u_wbs::retrieval::{similarity, SimilarityQuery};
use u_wbs::scheduler::{critical_path, BackwardScheduler, FeasibilityReport, FeasibilityStatus};
use u_wbs::{EventFacts, Synthesizer, WbsPlan};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 9, 1)
}

fn synthesizer() -> Synthesizer {
    Synthesizer::default().with_today(today())
}

fn festival() -> EventFacts {
    EventFacts::new("concert_opening", "2025-12-20")
        .with_name("Campus Music Festival")
        .with_venue("Outdoor stadium, east campus")
        .with_headcount(40)
        .with_department("hau can")
        .with_department("Truyền thông")
        .with_department("IT")
        .with_department("Kế toán")
        .with_department("Đối ngoại")
        .with_requirement("Drone permit")
}

fn assert_dependencies_precede(plan: &WbsPlan, skip: &HashSet<String>) {
    let by_id: HashMap<&str, &Task> = plan.tasks().map(|t| (t.task_id.as_str(), t)).collect();
    for task in plan.tasks().filter(|t| !skip.contains(&t.task_id)) {
        for dep in &task.depends_on {
            let dep = by_id[dep.as_str()];
            assert!(
                dep.deadline < task.start_date,
                "{} ends {} but {} starts {}",
                dep.task_id,
                dep.deadline,
                task.task_id,
                task.start_date
            );
        }
    }
}

#[test]
fn every_task_fits_before_the_event() {
    let plan = synthesizer().synthesize(&festival());
    let event = date(2025, 12, 20);

    assert_eq!(plan.venue_tier, VenueTier::Xl);
    assert!(plan.task_count() > 20);
    for task in plan.tasks() {
        assert!(task.start_date <= task.deadline, "{}", task.task_id);
        assert!(task.deadline <= event, "{}", task.task_id);
        assert!(task.duration_days >= 1);
    }
    assert!(plan.warnings.is_empty(), "{:?}", plan.warnings);
}

#[test]
fn dependencies_finish_before_dependents_start() {
    let plan = synthesizer().synthesize(&festival());
    assert_dependencies_precede(&plan, &HashSet::new());
}

#[test]
fn anchored_milestones_are_pulled_early() {
    let plan = synthesizer().synthesize(&festival());
    let event = date(2025, 12, 20);

    let site_ready = plan
        .tasks()
        .find(|t| t.name.to_lowercase().contains("site ready"))
        .expect("site ready task");
    assert!(site_ready.start_date <= event - Days::new(2));

    let permits = plan
        .tasks()
        .find(|t| t.name.to_lowercase().contains("permits approved"))
        .expect("permits task");
    assert!(permits.start_date <= event - Days::new(8));
}

#[test]
fn allocation_sums_to_pool() {
    let buckets = DepartmentBucket::CANONICAL.to_vec();
    for tier in VenueTier::ALL {
        for headcount in [6, 7, 10, 17, 40, 123] {
            for n in 1..=buckets.len() {
                let pool = available_workers(headcount, n);
                if (pool as usize) < n {
                    continue;
                }
                let allocation = distribute(pool, &buckets[..n], tier);
                assert_eq!(allocation.total_allocated(), pool, "{tier} {headcount} {n}");
                assert!(allocation.departments.iter().all(|d| d.workers >= 1));
            }
        }
    }
}

#[test]
fn tiny_pools_still_staff_every_department() {
    let pool = available_workers(3, 5);
    assert_eq!(pool, 1);
    let allocation = distribute(pool, &DepartmentBucket::CANONICAL, VenueTier::M);
    assert!(allocation.departments.iter().all(|d| d.workers >= 1));
}

#[test]
fn available_workers_reserves_leads() {
    assert_eq!(available_workers(10, 4), 5);
}

#[test]
fn three_task_chain_is_the_critical_path() {
    let event = date(2025, 3, 20);
    let start = event - Days::new(10);
    let mut tasks = vec![
        Task::new("A", "EP-001", start).with_duration(1),
        Task::new("B", "EP-001", start).with_duration(1).with_dependency("A"),
        Task::new("C", "EP-001", start).with_duration(1).with_dependency("B"),
    ];
    let warnings = BackwardScheduler::new(event, VenueTier::M).schedule(&mut tasks);

    assert!(warnings.is_empty());
    assert_eq!(critical_path(&tasks), vec!["A", "B", "C"]);
    assert_eq!(tasks[2].deadline, event);
    assert_eq!(tasks[1].deadline, event - Days::new(1));
    assert_eq!(tasks[0].deadline, event - Days::new(2));
}

#[test]
fn bump_is_clamped_at_critical() {
    assert_eq!(VenueTier::Xl.bump(Level::Medium), Level::High);
    assert_eq!(VenueTier::Xl.bump(Level::Critical), Level::Critical);
    assert_eq!(VenueTier::M.bump(Level::Medium), Level::Medium);
}

#[test]
fn identical_record_scores_exactly_one() {
    let record = u_wbs::models::HistoricalEventRecord::new("E", "conference", VenueTier::S, 25)
        .with_departments(["marketing", "technical"]);
    let query = SimilarityQuery {
        event_type: "conference".into(),
        venue_tier: VenueTier::S,
        headcount_total: 25,
        departments: vec![DepartmentBucket::Marketing, DepartmentBucket::Technical],
    };
    assert_eq!(similarity(&query, &record), 1.0);
}

#[test]
fn feasibility_of_three_task_fixture() {
    let day = today();
    let tasks = vec![
        Task::new("T-001", "EP-001", day).with_priority(Level::Critical),
        Task::new("T-002", "EP-001", day).with_priority(Level::High),
        Task::new("T-003", "EP-001", day).with_priority(Level::Medium),
    ];
    let report = FeasibilityReport::calculate(&tasks, 1, day);
    assert!((report.total_effort - 6.5).abs() < 1e-12);
    assert_eq!(report.min_required_headcount, 1);
    assert_eq!(report.status, FeasibilityStatus::Feasible);
    assert!(report.recommended_merges.is_empty());
    assert!(report.dropped_optional_tasks.is_empty());
}

#[test]
fn understaffed_event_is_infeasible() {
    let facts = EventFacts::new("expo", "2025-10-01")
        .with_headcount(1)
        .with_department("Logistics")
        .with_department("Marketing")
        .with_department("Technical")
        .with_department("Finance")
        .with_department("External relations");
    let plan = synthesizer().synthesize(&facts);

    assert_eq!(plan.task_count(), 15);
    let report = &plan.feasibility;
    assert_eq!(report.status, FeasibilityStatus::Infeasible);
    assert!(report.min_required_headcount > 1);
    let days = report.required_days.expect("required days");
    assert!(days >= 7);
    assert_eq!(report.earliest_feasible_date, Some(today() + Days::new(u64::from(days))));
}

#[test]
fn departments_round_trip_through_the_normalizer() {
    let first = synthesizer().synthesize(&festival().with_department("Sound crew"));

    let mut again = festival();
    again.departments = first.facts.departments.clone();
    let second = synthesizer().synthesize(&again);

    let buckets = |plan: &WbsPlan| -> Vec<DepartmentBucket> {
        plan.epics.iter().map(|e| e.bucket.clone()).collect()
    };
    assert_eq!(buckets(&first), buckets(&second));
    assert_eq!(first.epics.len(), 6);
}

#[test]
fn duplicate_departments_collapse() {
    let facts = EventFacts::new("conference", "2025-11-11")
        .with_headcount(12)
        .with_department("Marketing")
        .with_department("maketing")
        .with_department("Truyền thông");
    let plan = synthesizer().synthesize(&facts);
    assert_eq!(plan.epics.len(), 1);
}

#[test]
fn insights_merge_caller_requirements() {
    let plan = synthesizer().synthesize(&festival());
    let insights = &plan.insights;

    assert_eq!(insights.similar_events.len(), 3);
    assert_eq!(insights.similar_events[0].event_id, "EVT-2024-001");
    assert_eq!(insights.special_requirements[0], "Drone permit");
    assert!(insights.key_learnings.len() <= 5);
    assert_eq!(insights.venue_requirements.len(), 8);
}

#[test]
fn risks_are_bumped_for_large_venues() {
    let plan = synthesizer().synthesize(&festival());
    assert_eq!(plan.risks.by_department.len(), 5);
    assert_eq!(plan.risks.overall.len(), 7);
    assert!(plan.risks.all().all(|r| r.level >= Level::Medium));
    assert!(plan.risks.overall.iter().all(|r| r.owner.is_none()));
}

#[test]
fn plan_serializes_to_json() {
    let plan = synthesizer().synthesize(&festival());
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["venue_tier"], "XL");
    assert_eq!(value["facts"]["event_date"], "2025-12-20");
    assert_eq!(value["epics"][0]["epic_id"], "EP-001");
    assert_eq!(value["departments"][0]["tasks"][0]["task_id"], "T-001");
    assert!(value["departments"][0]["tasks"][0]["start-date"].is_string());
    assert_eq!(value["feasibility"]["status"], "feasible");

    let back: WbsPlan = serde_json::from_value(value).unwrap();
    assert_eq!(back.critical_path, plan.critical_path);
}

#[test]
fn concurrent_synthesis_shares_one_engine() {
    let engine = Arc::new(synthesizer());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.synthesize(&festival()))
        })
        .collect();
    let plans: Vec<WbsPlan> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(plans.windows(2).all(|w| w[0] == w[1]));
}

fn assert_empty_plan(plan: &WbsPlan) {
    assert!(plan.epics.is_empty());
    assert!(plan.departments.is_empty());
    assert!(plan.facts.departments.is_empty());
    assert_eq!(plan.task_count(), 0);
    assert!(plan.milestones.is_empty());
    assert!(plan.critical_path.is_empty());
    assert_eq!(plan.allocation.pool, 9);
    assert!(plan.allocation.departments.is_empty());
    assert_eq!(plan.feasibility.status, FeasibilityStatus::Feasible);
    assert_eq!(plan.feasibility.min_required_headcount, 1);
    assert!(plan.risks.by_department.is_empty());
    assert_eq!(plan.risks.overall.len(), 7);
    assert!(plan.warnings.is_empty(), "{:?}", plan.warnings);
}

#[test]
fn empty_department_list_yields_empty_plan() {
    let facts = EventFacts::new("concert", "2026-01-15").with_headcount(10);
    let plan = synthesizer().synthesize(&facts);

    assert_eq!(plan.facts.event_date, date(2026, 1, 15));
    assert_empty_plan(&plan);
}

#[test]
fn blank_department_names_are_ignored() {
    let facts = EventFacts::new("concert", "2026-01-15")
        .with_headcount(10)
        .with_department("   ")
        .with_department("");
    let plan = synthesizer().synthesize(&facts);
    assert_empty_plan(&plan);

    let mixed = EventFacts::new("concert", "2026-01-15")
        .with_headcount(10)
        .with_department(" ")
        .with_department("Finance");
    let plan = synthesizer().synthesize(&mixed);
    assert_eq!(plan.facts.departments, vec!["Finance"]);
    assert!(plan.tasks().all(|t| !t.name.ends_with(" - ")));
}

#[derive(Debug)]
struct CyclicCatalog;

const CYCLE: &[TaskTemplate] = &[
    TaskTemplate::new("Plan", "", Level::High, 2, &["Review"]),
    TaskTemplate::new("Build", "", Level::Medium, 3, &["Plan"]),
    TaskTemplate::new("Review", "", Level::Medium, 1, &["Build"]),
    TaskTemplate::new("Wrap up", "", Level::Low, 1, &[]),
];

impl TaskCatalog for CyclicCatalog {
    fn templates(&self, _bucket: &DepartmentBucket) -> &[TaskTemplate] {
        CYCLE
    }
}

#[test]
fn cyclic_catalog_falls_back_without_failing() {
    let facts = EventFacts::new("workshop", "2025-10-10")
        .with_venue("Stadium")
        .with_headcount(10)
        .with_department("Finance");
    let plan = synthesizer()
        .with_catalog(Arc::new(CyclicCatalog))
        .synthesize(&facts);
    let event = date(2025, 10, 10);

    assert_eq!(plan.task_count(), 4);
    assert!(plan
        .warnings
        .iter()
        .any(|w| matches!(w, SynthesisWarning::CycleEdgeSkipped { .. })));

    let fallback: HashSet<String> = plan
        .warnings
        .iter()
        .filter_map(|w| match w {
            SynthesisWarning::FallbackScheduled { task_id } => Some(task_id.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(fallback.len(), 3);

    for task in plan.tasks() {
        assert!(task.start_date <= task.deadline);
        assert!(task.deadline <= event);
    }

    // Fallback tasks keep their nominal duration and end on the event date.
    let build = plan.tasks().find(|t| t.name == "Build").unwrap();
    assert!(fallback.contains(&build.task_id));
    assert_eq!(build.deadline, event);
    assert_eq!(build.duration_days, 3);

    // Tasks outside the cycle are scheduled normally and tier-scaled.
    let wrap = plan.tasks().find(|t| t.name == "Wrap up").unwrap();
    assert!(!fallback.contains(&wrap.task_id));
    assert_eq!(wrap.duration_days, 2);

    assert_dependencies_precede(&plan, &fallback);
}

#[derive(Debug)]
struct SplitCatalog;

const VENUE: &[TaskTemplate] = &[
    TaskTemplate::new("Book venue", "", Level::High, 2, &[]),
    TaskTemplate::new("Set up venue", "", Level::High, 1, &["Book venue"]),
    TaskTemplate::new("Hand back venue", "", Level::Low, 1, &["Set up venue"]),
];

const PAYMENTS: &[TaskTemplate] = &[
    TaskTemplate::new("Pay deposit", "", Level::High, 1, &["Book venue"]),
    TaskTemplate::new("Pay balance", "", Level::Medium, 1, &["Pay deposit"]),
    TaskTemplate::new("Close books", "", Level::Low, 1, &["Pay balance"]),
];

impl TaskCatalog for SplitCatalog {
    fn templates(&self, bucket: &DepartmentBucket) -> &[TaskTemplate] {
        match bucket {
            DepartmentBucket::Finance => PAYMENTS,
            _ => VENUE,
        }
    }
}

#[test]
fn dependencies_never_cross_epics() {
    let facts = EventFacts::new("expo", "2025-10-10")
        .with_headcount(10)
        .with_department("Logistics")
        .with_department("Finance");
    let plan = synthesizer()
        .with_catalog(Arc::new(SplitCatalog))
        .synthesize(&facts);

    let deposit = plan.tasks().find(|t| t.name == "Pay deposit").unwrap();
    assert!(deposit.depends_on.is_empty());
    assert!(plan.warnings.iter().any(|w| matches!(
        w,
        SynthesisWarning::UnresolvedDependency { task_id, dependency }
            if *task_id == deposit.task_id && dependency == "Book venue"
    )));

    let epic_of: HashMap<&str, &str> = plan
        .tasks()
        .map(|t| (t.task_id.as_str(), t.epic_id.as_str()))
        .collect();
    for task in plan.tasks() {
        for dep in &task.depends_on {
            assert_eq!(epic_of[dep.as_str()], task.epic_id);
        }
    }
}

#[test]
fn duplicate_names_are_skipped_plan_wide() {
    let facts = EventFacts::new("expo", "2025-10-10")
        .with_headcount(10)
        .with_department("Logistics")
        .with_department("Marketing");
    let plan = synthesizer()
        .with_catalog(Arc::new(SplitCatalog))
        .synthesize(&facts);

    assert_eq!(plan.departments[0].tasks.len(), 3);
    assert!(plan.departments[1].tasks.is_empty());
    assert!(plan.epics[1].date_range.is_none());
    let skipped = plan
        .warnings
        .iter()
        .filter(|w| matches!(w, SynthesisWarning::DuplicateTaskName { .. }))
        .count();
    assert_eq!(skipped, 3);
}
