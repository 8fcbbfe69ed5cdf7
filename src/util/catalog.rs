//! Pure derivations over the fetched project catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list screens fetch once and derive everything else locally: filter
//! results, filter options, dashboard statistics, card previews, and the
//! explore-modal slider position. Keeping these as plain functions lets the
//! pages stay thin and the behavior stay table-testable.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Project;

/// Sentinel option value disabling a filter dimension.
pub const ALL_OPTION: &str = "all";
/// How many projects count as "recent" on the dashboard.
pub const RECENT_LIMIT: usize = 3;

/// Apply search, category, and year filters.
///
/// Search is a case-insensitive substring match on title or location;
/// [`ALL_OPTION`] disables the category/year dimensions.
pub fn filter_projects(
    projects: &[Project],
    search: &str,
    category: &str,
    year: &str,
) -> Vec<Project> {
    let needle = search.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| {
            let search_hit = needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.location.to_lowercase().contains(&needle);
            let category_hit = category == ALL_OPTION || p.category == category;
            let year_hit = year == ALL_OPTION || p.year.to_string() == year;
            search_hit && category_hit && year_hit
        })
        .cloned()
        .collect()
}

/// Distinct category options in first-seen order, [`ALL_OPTION`] first.
pub fn category_options(projects: &[Project]) -> Vec<String> {
    let mut options = vec![ALL_OPTION.to_owned()];
    for p in projects {
        if !p.category.is_empty() && !options.iter().any(|c| c == &p.category) {
            options.push(p.category.clone());
        }
    }
    options
}

/// Distinct year options in first-seen order, [`ALL_OPTION`] first.
pub fn year_options(projects: &[Project]) -> Vec<String> {
    let mut options = vec![ALL_OPTION.to_owned()];
    for p in projects {
        let year = p.year.to_string();
        if !options.contains(&year) {
            options.push(year);
        }
    }
    options
}

/// Number of distinct non-empty categories, for the dashboard stat card.
pub fn distinct_category_count(projects: &[Project]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for p in projects {
        if !p.category.is_empty() && !seen.contains(&p.category.as_str()) {
            seen.push(p.category.as_str());
        }
    }
    seen.len()
}

/// The most recent uploads (the backend lists newest first).
pub fn recent_projects(projects: &[Project]) -> Vec<Project> {
    projects.iter().take(RECENT_LIMIT).cloned().collect()
}

/// Card preview text: truncated description, or a placeholder when empty.
pub fn description_preview(description: &str, max_chars: usize) -> String {
    if description.is_empty() {
        return "No description".to_owned();
    }
    let mut preview: String = description.chars().take(max_chars).collect();
    if description.chars().count() > max_chars {
        preview.push_str("...");
    }
    preview
}

/// Next slider position, wrapping past the last image.
pub fn next_image_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len { 0 } else { current + 1 }
}

/// Previous slider position, wrapping before the first image.
pub fn prev_image_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Drop a deleted project from the locally held list.
pub fn remove_project(projects: &mut Vec<Project>, id: &str) {
    projects.retain(|p| p.id != id);
}
