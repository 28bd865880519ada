//! Validation engine for candidate records.
//!
//! `validate_record` is pure and total: it never mutates its input and can be
//! re-run after every edit. Failures come back in field-declaration order
//! (personal details, degrees, jobs, projects, skills), at most one per field.

pub mod links;
pub mod path;
mod rules;

use serde::Serialize;

use crate::models::CandidateRecord;

pub use path::FieldPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Required field is blank after trimming.
    MissingValue,
    /// Email does not look like an address.
    InvalidFormat,
    /// Profile link does not start with `https://`.
    InvalidScheme,
    /// Profile link points somewhere other than the expected site.
    InvalidDomain,
    /// A list that must hold at least one item is empty.
    EmptyCollection,
}

/// A single user-facing problem attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub path: FieldPath,
    pub kind: FailureKind,
    pub message: String,
}

pub fn validate_record(record: &CandidateRecord) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    rules::personal(record, &mut failures);
    rules::degrees(&record.degrees, &mut failures);
    rules::jobs(&record.jobs, &mut failures);
    rules::projects(record.project_list(), &mut failures);
    rules::skills(record.skill_list(), &mut failures);

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_record;
    use crate::models::{BulletLine, Degree, Job, Project, SkillCategory};

    fn valid_record() -> CandidateRecord {
        let mut record = CandidateRecord::empty();
        record.name = "Jane Roe".to_string();
        record.phone_number = "5551234567".to_string();
        record.email = "jane@example.com".to_string();
        record.address = "Austin, TX".to_string();
        record.linked_in = "https://www.linkedin.com/in/jane".to_string();
        record.degrees[0].degree = "B.A. Mathematics".to_string();
        record.degrees[0].institution = "UT Austin".to_string();
        record.degrees[0].grad_date = "May 2020".to_string();
        let job = &mut record.jobs[0];
        job.company = "Initech".to_string();
        job.position = "Engineer".to_string();
        job.location = "Austin, TX".to_string();
        job.start_date = "June 2020".to_string();
        job.end_date = "Present".to_string();
        job.description[0].value = "Shipped the TPS report service".to_string();
        record
    }

    fn paths(failures: &[ValidationFailure]) -> Vec<String> {
        failures.iter().map(|f| f.path.to_string()).collect()
    }

    #[test]
    fn test_valid_record_has_no_failures() {
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn test_empty_record_reports_every_required_field_in_order() {
        let record = CandidateRecord::empty();
        let failures = validate_record(&record);
        assert_eq!(
            paths(&failures),
            vec![
                "name",
                "phone_number",
                "email",
                "address",
                "linkedIn",
                "degrees[0].degree",
                "degrees[0].institution",
                "degrees[0].gradDate",
                "jobs[0].company",
                "jobs[0].position",
                "jobs[0].location",
                "jobs[0].startDate",
                "jobs[0].endDate",
                "jobs[0].description[0].value",
            ]
        );
        assert!(failures.iter().all(|f| f.kind == FailureKind::MissingValue));
        assert_eq!(failures[0].message, "Name is required");
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut record = valid_record();
        record.address = "   \t".to_string();
        let failures = validate_record(&record);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path.to_string(), "address");
        assert_eq!(failures[0].kind, FailureKind::MissingValue);
    }

    #[test]
    fn test_invalid_email_format() {
        let mut record = valid_record();
        record.email = "jane.example.com".to_string();
        let failures = validate_record(&record);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind, FailureKind::InvalidFormat);
        assert_eq!(failures[0].path.to_string(), "email");
    }

    #[test]
    fn test_linkedin_rules() {
        let mut record = valid_record();

        record.linked_in = "http://linkedin.com/x".to_string();
        assert_eq!(validate_record(&record)[0].kind, FailureKind::InvalidScheme);

        record.linked_in = "https://notlinkedin.com/x".to_string();
        assert_eq!(validate_record(&record)[0].kind, FailureKind::InvalidDomain);

        record.linked_in = "https://www.linkedin.com/x".to_string();
        assert!(validate_record(&record).is_empty());

        record.linked_in = String::new();
        let failures = validate_record(&record);
        assert_eq!(failures[0].kind, FailureKind::MissingValue);
        assert_eq!(failures[0].path.to_string(), "linkedIn");
    }

    #[test]
    fn test_github_is_optional_but_checked_when_present() {
        let mut record = valid_record();
        record.git_hub = String::new();
        assert!(validate_record(&record).is_empty());

        record.git_hub = "http://github.com/jane".to_string();
        let failures = validate_record(&record);
        assert_eq!(failures[0].kind, FailureKind::InvalidScheme);
        assert_eq!(failures[0].path.to_string(), "gitHub");

        record.git_hub = "https://bitbucket.org/jane".to_string();
        assert_eq!(validate_record(&record)[0].kind, FailureKind::InvalidDomain);

        record.git_hub = "https://www.github.com/jane".to_string();
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_padded_profile_links_are_rejected() {
        let mut record = valid_record();
        record.git_hub = "   ".to_string();
        record.linked_in = " https://www.linkedin.com/x".to_string();

        let failures: Vec<(String, FailureKind)> = validate_record(&record)
            .into_iter()
            .map(|f| (f.path.to_string(), f.kind))
            .collect();
        assert_eq!(
            failures,
            vec![
                ("linkedIn".to_string(), FailureKind::InvalidScheme),
                ("gitHub".to_string(), FailureKind::InvalidScheme),
            ]
        );

        record.linked_in = "https://www.linkedin.com/x ".to_string();
        record.git_hub = String::new();
        assert_eq!(validate_record(&record)[0].kind, FailureKind::InvalidDomain);

        record.linked_in = "   ".to_string();
        assert_eq!(validate_record(&record)[0].kind, FailureKind::MissingValue);
    }

    #[test]
    fn test_empty_degree_and_job_lists() {
        let mut record = valid_record();
        record.degrees.clear();
        record.jobs.clear();
        let failures = validate_record(&record);
        assert_eq!(paths(&failures), vec!["degrees", "jobs"]);
        assert!(failures
            .iter()
            .all(|f| f.kind == FailureKind::EmptyCollection));
    }

    #[test]
    fn test_bullet_floor_for_jobs_and_projects() {
        let mut record = valid_record();
        record.jobs[0].description.clear();
        let mut project = Project::new();
        project.title = "Compiler".to_string();
        project.start_date = "2021".to_string();
        project.end_date = "2022".to_string();
        project.description.clear();
        record.projects = Some(vec![project]);

        let failures = validate_record(&record);
        assert_eq!(
            paths(&failures),
            vec!["jobs[0].description", "projects[0].description"]
        );
        assert!(failures
            .iter()
            .all(|f| f.kind == FailureKind::EmptyCollection));
    }

    #[test]
    fn test_optional_sections_absent_or_empty_are_valid() {
        let mut record = valid_record();
        record.projects = Some(Vec::new());
        record.skills = Some(Vec::new());
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_skill_value_optional_category_required() {
        let mut record = valid_record();
        let mut skill = SkillCategory::new();
        skill.category = "Languages".to_string();
        let blank = SkillCategory::new();
        let blank_id = blank.id;
        record.skills = Some(vec![skill, blank]);

        let failures = validate_record(&record);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path.to_string(), "skills[1].category");
        assert!(failures[0].path.touches(blank_id));
    }

    #[test]
    fn test_failure_paths_use_current_positions() {
        let mut record = valid_record();
        let mut second = Degree::new();
        second.degree = "M.S.".to_string();
        second.institution = "MIT".to_string();
        record.degrees.push(second);
        let mut job = record.jobs[0].clone();
        job.id = crate::models::ItemId::new();
        job.start_date = " ".to_string();
        job.description.push(BulletLine::new());
        record.jobs.push(job);

        let failures = validate_record(&record);
        assert_eq!(
            paths(&failures),
            vec![
                "degrees[1].gradDate",
                "jobs[1].startDate",
                "jobs[1].description[1].value",
            ]
        );
    }

    #[test]
    fn test_validation_does_not_mutate_and_is_repeatable() {
        let record = sample_record();
        let before = record.clone();
        let first = validate_record(&record);
        let second = validate_record(&record);
        assert_eq!(first, second);
        assert_eq!(record, before);
    }

    #[test]
    fn test_failure_serializes_with_string_path() {
        let mut record = valid_record();
        record.jobs.push(Job::new());
        let failures = validate_record(&record);
        let json = serde_json::to_value(&failures[0]).unwrap();
        assert_eq!(json["path"], "jobs[1].company");
        assert_eq!(json["kind"], "missing_value");
    }
}
