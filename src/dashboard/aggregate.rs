//! Reporting over in-memory snapshots of developers, projects and entries.
//!
//! Every function here is pure: it reads the slices it is given and
//! allocates its result. Dangling references, zero-hour budgets and
//! malformed numbers or dates never fail a computation; the offending
//! record simply contributes nothing to the affected figure.

use std::collections::HashMap;

use time::Date;

use crate::{
    dashboard::dto::{
        ChartData, DailyHours, DashboardStats, DeveloperHours, ProjectChartPoint, ProjectStatus,
        ProjectStatusRow,
    },
    developers::Developer,
    projects::Project,
    time_entries::{dto::LabeledTimeEntry, TimeEntry},
    validation::parse_day_month_year,
};

const NAME_LIMIT: usize = 15;
pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const DEVELOPER_NOT_FOUND: &str = "Developer not found";

/// Everything the dashboard reads, fetched in one go.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub developers: Vec<Developer>,
    pub projects: Vec<Project>,
    pub entries: Vec<TimeEntry>,
}

/// The projects and entries visible under an optional developer scope.
#[derive(Debug)]
pub struct Scoped<'a> {
    pub projects: Vec<&'a Project>,
    pub entries: Vec<&'a TimeEntry>,
}

/// Restricts entries to `developer_id` and projects to those the
/// remaining entries touch. Without a developer everything is in scope.
///
/// A developer with no entries yields two empty sets.
pub fn scope<'a>(
    projects: &'a [Project],
    entries: &'a [TimeEntry],
    developer_id: Option<i64>,
) -> Scoped<'a> {
    let Some(developer_id) = developer_id else {
        return Scoped {
            projects: projects.iter().collect(),
            entries: entries.iter().collect(),
        };
    };

    let entries: Vec<&TimeEntry> = entries
        .iter()
        .filter(|e| e.developer_id == developer_id)
        .collect();
    let touched: std::collections::HashSet<i64> = entries.iter().map(|e| e.project_id).collect();
    let projects = projects
        .iter()
        .filter(|p| touched.contains(&p.id))
        .collect();

    Scoped { projects, entries }
}

/// Hours an entry may contribute to a sum; `None` for NaN, infinite or
/// negative values.
fn usable_hours(entry: &TimeEntry) -> Option<f64> {
    Some(entry.hours).filter(|h| h.is_finite() && *h >= 0.0)
}

fn hours_of(entry: &TimeEntry) -> f64 {
    usable_hours(entry).unwrap_or(0.0)
}

fn developers_by_id(developers: &[Developer]) -> HashMap<i64, &Developer> {
    let mut by_id = HashMap::with_capacity(developers.len());
    for dev in developers {
        by_id.entry(dev.id).or_insert(dev);
    }
    by_id
}

fn used_hours_by_project(entries: &[&TimeEntry]) -> HashMap<i64, f64> {
    let mut used = HashMap::new();
    for entry in entries {
        *used.entry(entry.project_id).or_insert(0.0) += hours_of(entry);
    }
    used
}

pub fn summary(scoped: &Scoped<'_>, developers: &[Developer]) -> DashboardStats {
    let total_hours: i64 = scoped.projects.iter().map(|p| i64::from(p.total_hours)).sum();
    // An empty `f64` sum is -0.0; fold from +0.0 instead.
    let used_hours = scoped.entries.iter().fold(0.0, |acc, e| acc + hours_of(e));

    let by_id = developers_by_id(developers);
    let total_value = scoped
        .entries
        .iter()
        .map(|entry| {
            let rate = by_id
                .get(&entry.developer_id)
                .map(|dev| dev.hourly_rate)
                .filter(|r| r.is_finite() && *r >= 0.0);
            match rate {
                Some(rate) => hours_of(entry) * rate,
                None => 0.0,
            }
        })
        .fold(0.0, |acc, value| acc + value);

    DashboardStats {
        total_projects: scoped.projects.len(),
        total_hours,
        used_hours,
        remaining_hours: total_hours as f64 - used_hours,
        total_value,
    }
}

/// Percentage of `total` consumed by `used`, zero for an empty budget.
pub fn progress_percent(used: f64, total: i32) -> f64 {
    if total > 0 {
        used / f64::from(total) * 100.0
    } else {
        0.0
    }
}

/// Half-up rounding to a whole percent (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_progress(percent: f64) -> i64 {
    (percent + 0.5).floor() as i64
}

pub fn classify(percent: f64) -> ProjectStatus {
    if percent <= 0.0 {
        ProjectStatus::NotStarted
    } else if percent >= 100.0 {
        ProjectStatus::Completed
    } else if percent >= 80.0 {
        ProjectStatus::NearlyComplete
    } else {
        ProjectStatus::InProgress
    }
}

/// Shortens a project name for chart axes.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let mut short: String = name.chars().take(NAME_LIMIT).collect();
        short.push_str("...");
        short
    } else {
        name.to_string()
    }
}

pub fn project_series(scoped: &Scoped<'_>) -> Vec<ProjectChartPoint> {
    let used = used_hours_by_project(&scoped.entries);
    scoped
        .projects
        .iter()
        .map(|project| {
            let used_hours = used.get(&project.id).copied().unwrap_or(0.0);
            ProjectChartPoint {
                name: truncate_name(&project.name),
                total_hours: project.total_hours,
                used_hours,
                remaining_hours: f64::from(project.total_hours) - used_hours,
                progress: round_progress(progress_percent(used_hours, project.total_hours)),
            }
        })
        .collect()
}

pub fn project_statuses(scoped: &Scoped<'_>) -> Vec<ProjectStatusRow> {
    let used = used_hours_by_project(&scoped.entries);
    scoped
        .projects
        .iter()
        .map(|project| {
            let used_hours = used.get(&project.id).copied().unwrap_or(0.0);
            let percent = progress_percent(used_hours, project.total_hours);
            ProjectStatusRow {
                id: project.id,
                name: project.name.clone(),
                total_hours: project.total_hours,
                used_hours,
                remaining_hours: f64::from(project.total_hours) - used_hours,
                progress: round_progress(percent),
                status: classify(percent),
            }
        })
        .collect()
}

/// Scoped hours per developer, in developer order, omitting anyone at zero.
pub fn developer_distribution(scoped: &Scoped<'_>, developers: &[Developer]) -> Vec<DeveloperHours> {
    let mut by_developer: HashMap<i64, f64> = HashMap::new();
    for entry in &scoped.entries {
        *by_developer.entry(entry.developer_id).or_insert(0.0) += hours_of(entry);
    }

    developers
        .iter()
        .filter_map(|dev| {
            let hours = by_developer.get(&dev.id).copied().unwrap_or(0.0);
            (hours > 0.0).then(|| DeveloperHours {
                name: dev.name.clone(),
                hours,
                value: hours,
            })
        })
        .collect()
}

/// Hours per display date, ordered by calendar day.
///
/// Entries are merged only when their date strings are identical. Days
/// that do not parse as `day/month/year` are dropped, as are entries with
/// unusable hours. Buckets falling on the same calendar day keep their
/// first-seen order.
pub fn daily_series(scoped: &Scoped<'_>) -> Vec<DailyHours> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut days: Vec<(Date, DailyHours)> = Vec::new();

    for entry in &scoped.entries {
        let Some(hours) = usable_hours(entry) else {
            continue;
        };
        if let Some(&i) = index.get(entry.date.as_str()) {
            days[i].1.hours += hours;
            continue;
        }
        let Some(day) = parse_day_month_year(&entry.date) else {
            continue;
        };
        index.insert(entry.date.as_str(), days.len());
        days.push((
            day,
            DailyHours {
                date: entry.date.clone(),
                hours,
            },
        ));
    }

    days.sort_by_key(|(day, _)| *day);
    days.into_iter().map(|(_, point)| point).collect()
}

pub fn chart_data(scoped: &Scoped<'_>, developers: &[Developer]) -> ChartData {
    ChartData {
        projects_data: project_series(scoped),
        developers_data: developer_distribution(scoped, developers),
        line_data: daily_series(scoped),
    }
}

/// Resolves names for an entry listing, substituting placeholders for
/// references that no longer exist.
pub fn label_entries(
    entries: &[TimeEntry],
    projects: &[Project],
    developers: &[Developer],
) -> Vec<LabeledTimeEntry> {
    let mut project_names: HashMap<i64, &str> = HashMap::with_capacity(projects.len());
    for project in projects {
        project_names.entry(project.id).or_insert(project.name.as_str());
    }
    let by_id = developers_by_id(developers);

    entries
        .iter()
        .map(|entry| LabeledTimeEntry {
            id: entry.id,
            project_id: entry.project_id,
            project_name: project_names
                .get(&entry.project_id)
                .copied()
                .unwrap_or(PROJECT_NOT_FOUND)
                .to_string(),
            developer_id: entry.developer_id,
            developer_name: by_id
                .get(&entry.developer_id)
                .map(|dev| dev.name.as_str())
                .unwrap_or(DEVELOPER_NOT_FOUND)
                .to_string(),
            description: entry.description.clone(),
            hours: entry.hours,
            date: entry.date.clone(),
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn ids<T, F: Fn(&T) -> i64>(items: &[&T], f: F) -> Vec<i64> {
        items.iter().map(|i| f(i)).collect()
    }

    #[test]
    fn over_budget_scenario() {
        let snap = over_budget();
        let scoped = scope(&snap.projects, &snap.entries, None);

        let stats = summary(&scoped, &snap.developers);
        assert_eq!(stats.total_projects, 1);
        assert_eq!(stats.total_hours, 10);
        assert_eq!(stats.used_hours, 12.0);
        assert_eq!(stats.remaining_hours, -2.0);
        assert_eq!(stats.total_value, 1200.0);

        let rows = project_statuses(&scoped);
        assert_eq!(rows[0].progress, 120);
        assert_eq!(rows[0].status, ProjectStatus::Completed);
        assert_eq!(project_series(&scoped)[0].progress, 120);
    }

    #[test]
    fn unknown_developer_scope_is_empty_not_unfiltered() {
        let snap = over_budget();
        let scoped = scope(&snap.projects, &snap.entries, Some(99));
        assert!(scoped.projects.is_empty());
        assert!(scoped.entries.is_empty());

        let stats = summary(&scoped, &snap.developers);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(chart_data(&scoped, &snap.developers), ChartData::default());
    }

    #[test]
    fn empty_scope_serializes_positive_zero() {
        let snap = over_budget();
        for developer_id in [Some(99), None] {
            let entries: &[TimeEntry] = if developer_id.is_some() { &snap.entries[..] } else { &[] };
            let scoped = scope(&snap.projects, entries, developer_id);
            let stats = summary(&scoped, &snap.developers);
            assert!(stats.used_hours.is_sign_positive());
            assert!(stats.total_value.is_sign_positive());
            assert!(stats.remaining_hours.is_sign_positive());
        }

        let scoped = scope(&snap.projects, &snap.entries, Some(99));
        let json = serde_json::to_string(&summary(&scoped, &snap.developers)).unwrap();
        assert_eq!(
            json,
            r#"{"totalProjects":0,"totalHours":0,"usedHours":0.0,"remainingHours":0.0,"totalValue":0.0}"#
        );
    }

    #[test]
    fn scope_keeps_only_projects_touched_by_developer() {
        let projects = vec![project(1, "A", 10), project(2, "B", 20), project(3, "C", 30)];
        let entries = vec![
            entry(1, 1, 1, 1.0, "01/01/2025"),
            entry(2, 3, 2, 2.0, "01/01/2025"),
            entry(3, 3, 1, 3.0, "02/01/2025"),
        ];
        let scoped = scope(&projects, &entries, Some(1));
        assert_eq!(ids(&scoped.projects, |p: &Project| p.id), vec![1, 3]);
        assert_eq!(ids(&scoped.entries, |e: &TimeEntry| e.id), vec![1, 3]);

        let stats = summary(&scoped, &[]);
        assert_eq!(stats.total_hours, 40);
        assert_eq!(stats.used_hours, 4.0);
    }

    #[test]
    fn remaining_is_exact_difference() {
        let projects = vec![project(1, "A", 10), project(2, "B", 5)];
        let entries = vec![entry(1, 1, 1, 7.5, "01/01/2025"), entry(2, 2, 1, 0.25, "01/01/2025")];
        let scoped = scope(&projects, &entries, None);
        let stats = summary(&scoped, &[]);
        assert_eq!(stats.remaining_hours, stats.total_hours as f64 - stats.used_hours);
        assert_eq!(stats.used_hours, 7.75);
    }

    #[test]
    fn missing_developer_contributes_no_value() {
        let developers = vec![developer(1, "Ana", 100.0)];
        let projects = vec![project(1, "A", 10)];
        let entries = vec![entry(1, 1, 1, 2.0, "01/01/2025"), entry(2, 1, 42, 5.0, "01/01/2025")];
        let scoped = scope(&projects, &entries, None);
        let stats = summary(&scoped, &developers);
        assert_eq!(stats.used_hours, 7.0);
        assert_eq!(stats.total_value, 200.0);
    }

    #[test]
    fn malformed_numbers_are_excluded_from_sums() {
        let developers = vec![developer(1, "Ana", f64::NAN), developer(2, "Bia", 50.0)];
        let projects = vec![project(1, "A", 10)];
        let entries = vec![
            entry(1, 1, 1, 2.0, "01/01/2025"),
            entry(2, 1, 2, f64::NAN, "01/01/2025"),
            entry(3, 1, 2, -3.0, "02/01/2025"),
            entry(4, 1, 2, 1.0, "02/01/2025"),
        ];
        let scoped = scope(&projects, &entries, None);
        let stats = summary(&scoped, &developers);
        assert_eq!(stats.used_hours, 3.0);
        assert_eq!(stats.total_value, 50.0);
        assert!(stats.remaining_hours.is_finite());

        let line = daily_series(&scoped);
        assert_eq!(
            line,
            vec![
                DailyHours { date: "01/01/2025".into(), hours: 2.0 },
                DailyHours { date: "02/01/2025".into(), hours: 1.0 },
            ]
        );
    }

    #[test]
    fn zero_budget_project_has_zero_progress() {
        let projects = vec![project(1, "Unplanned", 0)];
        let entries = vec![entry(1, 1, 1, 6.0, "01/01/2025")];
        let scoped = scope(&projects, &entries, None);
        let point = &project_series(&scoped)[0];
        assert_eq!(point.progress, 0);
        assert_eq!(point.remaining_hours, -6.0);
        assert_eq!(project_statuses(&scoped)[0].status, ProjectStatus::NotStarted);
    }

    #[test]
    fn exact_budget_is_completed() {
        let projects = vec![project(1, "A", 8)];
        let entries = vec![entry(1, 1, 1, 8.0, "01/01/2025")];
        let scoped = scope(&projects, &entries, None);
        let row = &project_statuses(&scoped)[0];
        assert_eq!(row.progress, 100);
        assert_eq!(row.status, ProjectStatus::Completed);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(classify(0.0), ProjectStatus::NotStarted);
        assert_eq!(classify(0.4), ProjectStatus::InProgress);
        assert_eq!(classify(79.9), ProjectStatus::InProgress);
        assert_eq!(classify(80.0), ProjectStatus::NearlyComplete);
        assert_eq!(classify(99.9), ProjectStatus::NearlyComplete);
        assert_eq!(classify(100.0), ProjectStatus::Completed);
        assert_eq!(classify(250.0), ProjectStatus::Completed);
    }

    #[test]
    fn progress_rounds_half_up() {
        assert_eq!(round_progress(progress_percent(1.0, 8)), 13); // 12.5
        assert_eq!(round_progress(progress_percent(1.0, 3)), 33);
        assert_eq!(round_progress(progress_percent(2.0, 3)), 67);
        assert_eq!(round_progress(-2.5), -2);
    }

    #[test]
    fn long_names_are_truncated_for_charts_only() {
        let projects = vec![
            project(1, "Sistema E-commerce", 10),
            project(2, "Exactly fifteen", 10),
            project(3, "Portal do Cliente Ágil", 10),
        ];
        let scoped = scope(&projects, &[], None);
        let names: Vec<_> = project_series(&scoped).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Sistema E-comme...", "Exactly fifteen", "Portal do Clien..."]);
        assert_eq!(project_statuses(&scoped)[0].name, "Sistema E-commerce");
    }

    #[test]
    fn distribution_skips_idle_developers() {
        let developers = vec![
            developer(1, "Ana", 100.0),
            developer(2, "Bia", 80.0),
            developer(3, "Caio", 60.0),
        ];
        let projects = vec![project(1, "A", 10)];
        let entries = vec![
            entry(1, 1, 3, 2.0, "01/01/2025"),
            entry(2, 1, 1, 1.5, "01/01/2025"),
            entry(3, 1, 3, 0.5, "02/01/2025"),
        ];
        let scoped = scope(&projects, &entries, None);
        assert_eq!(
            developer_distribution(&scoped, &developers),
            vec![
                DeveloperHours { name: "Ana".into(), hours: 1.5, value: 1.5 },
                DeveloperHours { name: "Caio".into(), hours: 2.5, value: 2.5 },
            ]
        );
    }

    #[test]
    fn distribution_respects_scope() {
        let developers = vec![developer(1, "Ana", 100.0), developer(2, "Bia", 80.0)];
        let projects = vec![project(1, "A", 10)];
        let entries = vec![entry(1, 1, 1, 2.0, "01/01/2025"), entry(2, 1, 2, 3.0, "01/01/2025")];
        let scoped = scope(&projects, &entries, Some(2));
        let dist = developer_distribution(&scoped, &developers);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].name, "Bia");
    }

    #[test]
    fn daily_series_sorts_by_calendar_day() {
        let projects = vec![project(1, "A", 100)];
        let entries = vec![
            entry(1, 1, 1, 3.0, "05/01/2025"),
            entry(2, 1, 1, 2.0, "20/12/2024"),
            entry(3, 1, 1, 1.0, "15/01/2025"),
            entry(4, 1, 1, 4.0, "01/02/2025"),
            entry(5, 1, 1, 0.5, "05/01/2025"),
        ];
        let scoped = scope(&projects, &entries, None);
        let line = daily_series(&scoped);
        let dates: Vec<_> = line.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["20/12/2024", "05/01/2025", "15/01/2025", "01/02/2025"]);
        assert_eq!(line[1].hours, 3.5);
    }

    #[test]
    fn daily_series_merges_only_identical_strings() {
        let projects = vec![project(1, "A", 100)];
        let entries = vec![
            entry(1, 1, 1, 1.0, "05/01/2025"),
            entry(2, 1, 1, 2.0, "5/1/2025"),
            entry(3, 1, 1, 4.0, "04/01/2025"),
        ];
        let scoped = scope(&projects, &entries, None);
        let line = daily_series(&scoped);
        assert_eq!(
            line,
            vec![
                DailyHours { date: "04/01/2025".into(), hours: 4.0 },
                DailyHours { date: "05/01/2025".into(), hours: 1.0 },
                DailyHours { date: "5/1/2025".into(), hours: 2.0 },
            ]
        );
    }

    #[test]
    fn unparsable_dates_leave_line_but_still_count() {
        let developers = vec![developer(1, "Ana", 10.0)];
        let projects = vec![project(1, "A", 100)];
        let entries = vec![
            entry(1, 1, 1, 1.0, "2025-01-05"),
            entry(2, 1, 1, 2.0, "31/02/2025"),
            entry(3, 1, 1, 3.0, "06/01/2025"),
        ];
        let scoped = scope(&projects, &entries, None);
        let line = daily_series(&scoped);
        assert_eq!(line.len(), 1);
        assert_eq!(line[0].date, "06/01/2025");
        assert_eq!(summary(&scoped, &developers).used_hours, 6.0);
    }

    #[test]
    fn labels_dangling_references() {
        let developers = vec![developer(1, "Ana", 100.0)];
        let projects = vec![project(1, "Portal", 10)];
        let entries = vec![
            entry(1, 1, 1, 1.0, "01/01/2025"),
            entry(2, 9, 1, 1.0, "01/01/2025"),
            entry(3, 1, 9, 1.0, "01/01/2025"),
        ];
        let labeled = label_entries(&entries, &projects, &developers);
        assert_eq!(labeled[0].project_name, "Portal");
        assert_eq!(labeled[0].developer_name, "Ana");
        assert_eq!(labeled[1].project_name, PROJECT_NOT_FOUND);
        assert_eq!(labeled[2].developer_name, DEVELOPER_NOT_FOUND);
    }
}
