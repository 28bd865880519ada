//! Per-entity rule functions. Each appends failures in field-declaration order.

use crate::models::{BulletLine, CandidateRecord, Degree, Job, Project, SkillCategory};
use crate::validation::links::{
    check_profile_url, is_valid_email, LinkProblem, GITHUB_HOST, LINKEDIN_HOST,
};
use crate::validation::path::FieldPath;
use crate::validation::{FailureKind, ValidationFailure};

fn push(out: &mut Vec<ValidationFailure>, path: FieldPath, kind: FailureKind, message: &str) {
    out.push(ValidationFailure {
        path,
        kind,
        message: message.to_string(),
    });
}

/// Pushes `MissingValue` when `value` is blank. Returns true if the value is present.
fn required(out: &mut Vec<ValidationFailure>, path: FieldPath, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        push(out, path, FailureKind::MissingValue, message);
        false
    } else {
        true
    }
}

fn profile_link(
    out: &mut Vec<ValidationFailure>,
    path: FieldPath,
    value: &str,
    host: &str,
    label: &str,
) {
    match check_profile_url(value, host) {
        Ok(()) => {}
        Err(LinkProblem::Scheme) => push(
            out,
            path,
            FailureKind::InvalidScheme,
            &format!("{label} URL must start with https://"),
        ),
        Err(LinkProblem::Domain) => push(
            out,
            path,
            FailureKind::InvalidDomain,
            &format!("{label} URL must point to {host}"),
        ),
    }
}

pub fn personal(record: &CandidateRecord, out: &mut Vec<ValidationFailure>) {
    let root = FieldPath::root();

    required(out, root.field("name"), &record.name, "Name is required");
    required(
        out,
        root.field("phone_number"),
        &record.phone_number,
        "Phone number is required",
    );

    let email = record.email.trim();
    if required(out, root.field("email"), email, "Email is required") && !is_valid_email(email) {
        push(
            out,
            root.field("email"),
            FailureKind::InvalidFormat,
            "Email must be a valid email address",
        );
    }

    required(out, root.field("address"), &record.address, "Address is required");

    // Presence is checked trimmed, format on the raw value the document links to.
    if required(
        out,
        root.field("linkedIn"),
        &record.linked_in,
        "LinkedIn URL is required",
    ) {
        profile_link(
            out,
            root.field("linkedIn"),
            &record.linked_in,
            LINKEDIN_HOST,
            "LinkedIn",
        );
    }

    // Only an empty GitHub means "not provided"; whitespace is a bad link.
    if !record.git_hub.is_empty() {
        profile_link(out, root.field("gitHub"), &record.git_hub, GITHUB_HOST, "GitHub");
    }
}

pub fn degrees(degrees: &[Degree], out: &mut Vec<ValidationFailure>) {
    let list = FieldPath::root().field("degrees");
    if degrees.is_empty() {
        push(
            out,
            list.clone(),
            FailureKind::EmptyCollection,
            "At least one degree is required",
        );
    }

    for (index, degree) in degrees.iter().enumerate() {
        let item = list.item(index, degree.id);
        required(out, item.field("degree"), &degree.degree, "Degree is required");
        required(
            out,
            item.field("institution"),
            &degree.institution,
            "Institution is required",
        );
        required(
            out,
            item.field("gradDate"),
            &degree.grad_date,
            "Graduation date is required",
        );
    }
}

pub fn jobs(jobs: &[Job], out: &mut Vec<ValidationFailure>) {
    let list = FieldPath::root().field("jobs");
    if jobs.is_empty() {
        push(
            out,
            list.clone(),
            FailureKind::EmptyCollection,
            "At least one job is required",
        );
    }

    for (index, job) in jobs.iter().enumerate() {
        let item = list.item(index, job.id);
        required(out, item.field("company"), &job.company, "Company is required");
        required(out, item.field("position"), &job.position, "Position is required");
        required(out, item.field("location"), &job.location, "Location is required");
        required(out, item.field("startDate"), &job.start_date, "Start date is required");
        required(out, item.field("endDate"), &job.end_date, "End date is required");
        bullets(
            &job.description,
            item.field("description"),
            "Each job needs at least one bullet point",
            out,
        );
    }
}

pub fn projects(projects: &[Project], out: &mut Vec<ValidationFailure>) {
    let list = FieldPath::root().field("projects");
    for (index, project) in projects.iter().enumerate() {
        let item = list.item(index, project.id);
        required(out, item.field("title"), &project.title, "Project title is required");
        required(
            out,
            item.field("startDate"),
            &project.start_date,
            "Start date is required",
        );
        required(out, item.field("endDate"), &project.end_date, "End date is required");
        bullets(
            &project.description,
            item.field("description"),
            "Each project needs at least one bullet point",
            out,
        );
    }
}

pub fn skills(skills: &[SkillCategory], out: &mut Vec<ValidationFailure>) {
    let list = FieldPath::root().field("skills");
    for (index, skill) in skills.iter().enumerate() {
        required(
            out,
            list.item(index, skill.id).field("category"),
            &skill.category,
            "Skill category is required",
        );
    }
}

fn bullets(
    lines: &[BulletLine],
    list: FieldPath,
    empty_message: &str,
    out: &mut Vec<ValidationFailure>,
) {
    if lines.is_empty() {
        push(out, list.clone(), FailureKind::EmptyCollection, empty_message);
    }
    for (index, line) in lines.iter().enumerate() {
        required(
            out,
            list.item(index, line.id).field("value"),
            &line.value,
            "Bullet point cannot be empty",
        );
    }
}
