//! Job query engine: AND-combined filters over an ordered catalog, then a
//! page slice. Pure with respect to its inputs and never fails.

use serde::{Deserialize, Serialize};

use crate::jobs::salary::salary_floor;
use crate::models::job::Job;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Filter value meaning "no filtering" for `type` and `experience`.
const ALL: &str = "all";

/// Normalized filter set. `None` means the predicate is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub keyword: Option<String>,
    pub location: Option<String>,
    /// Compared verbatim against the job's wire type name.
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub min_salary: Option<u64>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Raw query-string form. Every value arrives as text so that malformed
/// optional filters degrade to "absent" instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct JobQueryParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub min_salary: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One page of query results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPage {
    pub items: Vec<Job>,
    /// Matches before pagination.
    pub total: usize,
    pub page: usize,
    /// `ceil(total / limit)`, 0 when nothing matches.
    pub total_pages: usize,
}

impl JobQueryParams {
    /// Folds decoded query pairs. The first value of a repeated key wins and
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = JobQueryParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "keyword" => &mut params.keyword,
                "location" => &mut params.location,
                "type" => &mut params.job_type,
                "experience" => &mut params.experience,
                "min_salary" => &mut params.min_salary,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl From<JobQueryParams> for JobFilters {
    fn from(params: JobQueryParams) -> Self {
        JobFilters {
            keyword: non_blank(params.keyword),
            location: non_blank(params.location),
            job_type: non_blank(params.job_type).filter(|t| t != ALL),
            experience: non_blank(params.experience).filter(|e| e != ALL),
            min_salary: params.min_salary.as_deref().and_then(salary_floor),
            page: params.page.as_deref().and_then(positive),
            limit: params.limit.as_deref().and_then(positive),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl JobFilters {
    pub fn page(&self) -> usize {
        self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)
    }

    /// True when every active predicate holds for `job`.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !(contains_ignore_case(&job.title, &keyword)
                || contains_ignore_case(&job.company, &keyword)
                || contains_ignore_case(&job.description, &keyword))
            {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !contains_ignore_case(&job.location, &location.to_lowercase()) {
                return false;
            }
        }

        if let Some(job_type) = &self.job_type {
            if job.job_type.as_str() != job_type {
                return false;
            }
        }

        if let Some(experience) = &self.experience {
            if job.experience.as_str() != experience {
                return false;
            }
        }

        if let Some(min) = self.min_salary {
            // Salaries without a number never satisfy a minimum.
            if !salary_floor(&job.salary).is_some_and(|floor| floor >= min) {
                return false;
            }
        }

        true
    }
}

/// Filters `jobs` in order and returns the requested page.
/// Pages past the end come back with empty `items`.
pub fn query_jobs(jobs: &[Job], filters: &JobFilters) -> JobPage {
    let page = filters.page();
    let limit = filters.limit();

    let matching: Vec<&Job> = jobs.iter().filter(|job| filters.matches(job)).collect();
    let total = matching.len();
    let start = (page - 1).saturating_mul(limit);

    let items = matching
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    JobPage {
        items,
        total,
        page,
        total_pages: total.div_ceil(limit),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::job::{ExperienceLevel, JobType};

    fn make_job(id: usize, title: &str, salary: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: format!("Company {id}"),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            experience: ExperienceLevel::MidLevel,
            salary: salary.to_string(),
            description: "Build things.".to_string(),
            requirements: vec![],
            posted_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    /// Twelve jobs, three of which have "Engineer" in the title.
    fn catalog() -> Vec<Job> {
        (1..=12)
            .map(|i| {
                let title = if i % 4 == 0 {
                    format!("Software Engineer {i}")
                } else {
                    format!("Designer {i}")
                };
                make_job(i, &title, "$90,000 - $100,000")
            })
            .collect()
    }

    fn filters(pairs: &[(&str, &str)]) -> JobFilters {
        let mut params = JobQueryParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "keyword" => params.keyword = v,
                "location" => params.location = v,
                "type" => params.job_type = v,
                "experience" => params.experience = v,
                "min_salary" => params.min_salary = v,
                "page" => params.page = v,
                "limit" => params.limit = v,
                other => panic!("unknown filter {other}"),
            }
        }
        params.into()
    }

    #[test]
    fn test_keyword_engineer_matches_three() {
        let result = query_jobs(&catalog(), &filters(&[("keyword", "engineer")]));
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.total, 3);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_keyword_matches_company_and_description() {
        let mut jobs = catalog();
        jobs[0].company = "Rustacean Labs".to_string();
        jobs[1].description = "Work on our RUST services".to_string();
        let result = query_jobs(&jobs, &filters(&[("keyword", "rust")]));
        let ids: Vec<_> = result.items.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_min_salary_uses_lower_bound() {
        let jobs = vec![
            make_job(1, "Analyst", "$80,000 - $95,000"),
            make_job(2, "Lead", "$110,000 - $130,000"),
            make_job(3, "Consultant", "Competitive"),
        ];
        let result = query_jobs(&jobs, &filters(&[("min_salary", "100000")]));
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, "2");
    }

    #[test]
    fn test_unparseable_min_salary_is_ignored() {
        let jobs = vec![
            make_job(1, "Analyst", "$80,000"),
            make_job(2, "Consultant", "Competitive"),
        ];
        let result = query_jobs(&jobs, &filters(&[("min_salary", "lots")]));
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_page_two_of_twelve() {
        let result = query_jobs(&catalog(), &filters(&[("page", "2"), ("limit", "5")]));
        let ids: Vec<_> = result.items.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "7", "8", "9", "10"]);
        assert_eq!(result.total, 12);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_clipped() {
        let result = query_jobs(&catalog(), &filters(&[("page", "3"), ("limit", "5")]));
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let result = query_jobs(&catalog(), &filters(&[("page", "9")]));
        assert!(result.items.is_empty());
        assert_eq!(result.total, 12);
        assert_eq!(result.page, 9);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_no_matches_has_zero_pages() {
        let result = query_jobs(&catalog(), &filters(&[("keyword", "astronaut")]));
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_malformed_page_and_limit_fall_back_to_defaults() {
        let f = filters(&[("page", "first"), ("limit", "0")]);
        assert_eq!(f.page(), DEFAULT_PAGE);
        assert_eq!(f.limit(), DEFAULT_LIMIT);
        let result = query_jobs(&catalog(), &f);
        assert_eq!(result.items.len(), 10);
    }

    #[test]
    fn test_type_and_experience_all_disable_filter() {
        let f = filters(&[("type", "all"), ("experience", "all")]);
        assert_eq!(f.job_type, None);
        assert_eq!(f.experience, None);
        assert_eq!(query_jobs(&catalog(), &f).total, 12);
    }

    #[test]
    fn test_type_exact_match_and_unknown_type_matches_nothing() {
        let mut jobs = catalog();
        jobs[3].job_type = JobType::Contract;
        jobs[7].job_type = JobType::Contract;
        assert_eq!(query_jobs(&jobs, &filters(&[("type", "contract")])).total, 2);
        assert_eq!(query_jobs(&jobs, &filters(&[("type", "freelance")])).total, 0);
    }

    #[test]
    fn test_experience_exact_match() {
        let mut jobs = catalog();
        jobs[0].experience = ExperienceLevel::Senior;
        let result = query_jobs(&jobs, &filters(&[("experience", "senior")]));
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, "1");
    }

    #[test]
    fn test_location_case_insensitive_substring() {
        let mut jobs = catalog();
        jobs[2].location = "San Francisco, CA".to_string();
        let result = query_jobs(&jobs, &filters(&[("location", "san fran")]));
        assert_eq!(result.total, 1);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut jobs = catalog();
        jobs[3].location = "Austin, TX".to_string(); // "Software Engineer 4"
        jobs[4].location = "Austin, TX".to_string(); // "Designer 5"
        let result = query_jobs(
            &jobs,
            &filters(&[("keyword", "engineer"), ("location", "austin")]),
        );
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, "4");
    }

    #[test]
    fn test_results_preserve_catalog_order() {
        let jobs = catalog();
        let result = query_jobs(&jobs, &filters(&[("keyword", "designer"), ("limit", "50")]));
        let positions: Vec<usize> = result
            .items
            .iter()
            .map(|item| jobs.iter().position(|j| j.id == item.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_page_size_bounds_hold_for_every_page() {
        let jobs = catalog();
        for limit in 1..=13 {
            for page in 1..=14 {
                let f = JobFilters {
                    page: Some(page),
                    limit: Some(limit),
                    ..Default::default()
                };
                let result = query_jobs(&jobs, &f);
                assert!(result.items.len() <= limit);
                assert!(result.items.len() <= result.total);
                assert_eq!(result.total_pages, result.total.div_ceil(limit));
            }
        }
    }

    #[test]
    fn test_query_is_deterministic_and_does_not_mutate() {
        let jobs = catalog();
        let before = jobs.clone();
        let f = filters(&[("keyword", "engineer"), ("limit", "2")]);
        let first = query_jobs(&jobs, &f);
        let second = query_jobs(&jobs, &f);
        assert_eq!(first, second);
        assert_eq!(jobs, before);
    }

    #[test]
    fn test_from_pairs_first_value_wins_and_unknown_keys_ignored() {
        let pairs = [
            ("type", "remote"),
            ("type", "contract"),
            ("page", "2"),
            ("page", "3"),
            ("utm_source", "newsletter"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));
        let params = JobQueryParams::from_pairs(pairs);
        assert_eq!(params.job_type.as_deref(), Some("remote"));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert!(params.keyword.is_none());
    }
}
