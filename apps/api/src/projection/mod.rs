//! Document projection: maps a committed record onto a [`Document`].
//!
//! Pure and total: the same snapshot always yields the same tree. Optional
//! sections that are absent or empty are left out entirely, and every list keeps
//! its editing order.

pub mod document;

use crate::models::snapshot::Snapshot;
use crate::models::{BulletLine, CandidateRecord, Degree, Job, Project, SkillCategory};

pub use document::{
    Block, ContactItem, ContactLine, Document, Header, Line, Section, SectionKind, Span, Style,
};

pub const CONTACT_SEPARATOR: &str = " | ";

const AREA_CODE_LEN: usize = 3;

pub fn project(snapshot: &Snapshot) -> Document {
    project_record(snapshot.record())
}

pub fn project_record(record: &CandidateRecord) -> Document {
    let mut sections = vec![
        section(SectionKind::Education, record.degrees.iter().map(degree_block)),
        section(SectionKind::WorkExperience, record.jobs.iter().map(job_block)),
    ];

    let projects = record.project_list();
    if !projects.is_empty() {
        sections.push(section(SectionKind::Projects, projects.iter().map(project_block)));
    }
    let skills = record.skill_list();
    if !skills.is_empty() {
        sections.push(section(SectionKind::Skills, skills.iter().map(skill_block)));
    }

    Document {
        header: header(record),
        sections,
    }
}

/// Formats a phone number as `(XXX)rest` by splitting at the third character.
///
/// Positional only: digit count and characters are not checked. An empty input
/// stays empty; inputs shorter than three characters are wrapped whole.
pub fn format_phone(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let split = raw
        .char_indices()
        .nth(AREA_CODE_LEN)
        .map(|(index, _)| index)
        .unwrap_or(raw.len());
    let (area, rest) = raw.split_at(split);
    format!("({area}){rest}")
}

pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

fn header(record: &CandidateRecord) -> Header {
    let mut items = vec![
        ContactItem::Text {
            span: Span::new(record.address.as_str(), Style::ContactItem),
        },
        ContactItem::Text {
            span: Span::new(format_phone(&record.phone_number), Style::ContactItem),
        },
        ContactItem::Text {
            span: Span::new(record.email.as_str(), Style::ContactItem),
        },
        ContactItem::Link {
            label: Span::new("LinkedIn", Style::ContactLink),
            href: record.linked_in.clone(),
        },
    ];

    if !record.git_hub.is_empty() {
        items.push(ContactItem::Link {
            label: Span::new("GitHub", Style::ContactLink),
            href: record.git_hub.clone(),
        });
    }

    Header {
        name: Span::new(record.name.as_str(), Style::Name),
        contact: ContactLine {
            separator: CONTACT_SEPARATOR,
            items,
        },
    }
}

fn section(kind: SectionKind, blocks: impl Iterator<Item = Block>) -> Section {
    Section {
        kind,
        heading: Span::new(kind.title(), Style::SectionHeading),
        blocks: blocks.collect(),
    }
}

fn degree_block(degree: &Degree) -> Block {
    Block {
        source_id: degree.id,
        lines: vec![Line::Split {
            left: Span::new(
                format!("{} - {}", degree.degree, degree.institution),
                Style::EntryTitle,
            ),
            right: Span::new(degree.grad_date.as_str(), Style::EntryDates),
        }],
    }
}

fn job_block(job: &Job) -> Block {
    let mut lines = vec![
        Line::Split {
            left: Span::new(job.company.as_str(), Style::EntryTitle),
            right: Span::new(
                format_date_range(&job.start_date, &job.end_date),
                Style::EntryDates,
            ),
        },
        Line::Split {
            left: Span::new(job.position.as_str(), Style::EntrySubtitle),
            right: Span::new(job.location.as_str(), Style::EntryLocation),
        },
    ];
    lines.extend(job.description.iter().map(bullet_line));
    Block {
        source_id: job.id,
        lines,
    }
}

fn project_block(project: &Project) -> Block {
    let mut lines = vec![Line::Split {
        left: Span::new(project.title.as_str(), Style::EntryTitle),
        right: Span::new(
            format_date_range(&project.start_date, &project.end_date),
            Style::EntryDates,
        ),
    }];
    lines.extend(project.description.iter().map(bullet_line));
    Block {
        source_id: project.id,
        lines,
    }
}

fn skill_block(skill: &SkillCategory) -> Block {
    Block {
        source_id: skill.id,
        lines: vec![Line::LabelValue {
            label: Span::new(skill.category.as_str(), Style::SkillLabel),
            value: Span::new(skill.value.as_str(), Style::SkillValue),
        }],
    }
}

fn bullet_line(bullet: &BulletLine) -> Line {
    Line::Bullet {
        id: bullet.id,
        text: Span::new(bullet.value.as_str(), Style::BulletText),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_record;
    use crate::models::ItemId;

    fn minimal_record() -> CandidateRecord {
        let mut record = CandidateRecord::empty();
        record.name = "Jane Roe".to_string();
        record.phone_number = "1234567809".to_string();
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

    // ── phone formatting ────────────────────────────────────────────────────

    #[test]
    fn test_format_phone_splits_after_area_code() {
        assert_eq!(format_phone("1234567809"), "(123)4567809");
    }

    #[test]
    fn test_format_phone_is_positional() {
        assert_eq!(format_phone("123-456-7809"), "(123)-456-7809");
        assert_eq!(format_phone("12"), "(12)");
        assert_eq!(format_phone("123"), "(123)");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("ab€defg"), "(ab€)defg");
    }

    // ── header ──────────────────────────────────────────────────────────────

    #[test]
    fn test_contact_line_order_and_phone() {
        let document = project_record(&minimal_record());
        let contact = &document.header.contact;
        assert_eq!(
            contact.joined_text(),
            "Austin, TX | (123)4567809 | jane@example.com | LinkedIn"
        );
        assert!(matches!(
            &contact.items[3],
            ContactItem::Link { href, .. } if href == "https://www.linkedin.com/in/jane"
        ));
        assert_eq!(document.header.name.text, "Jane Roe");
        assert_eq!(document.header.name.style, Style::Name);
    }

    #[test]
    fn test_github_link_only_when_present() {
        let mut record = minimal_record();
        assert_eq!(project_record(&record).header.contact.items.len(), 4);

        record.git_hub = "https://github.com/jane".to_string();
        let document = project_record(&record);
        assert_eq!(document.header.contact.items.len(), 5);
        assert_eq!(
            document.header.contact.items[4],
            ContactItem::Link {
                label: Span::new("GitHub", Style::ContactLink),
                href: "https://github.com/jane".to_string(),
            }
        );
    }

    // ── sections ────────────────────────────────────────────────────────────

    #[test]
    fn test_minimal_record_has_exactly_two_sections() {
        let document = project_record(&minimal_record());
        assert_eq!(
            document.section_kinds(),
            vec![SectionKind::Education, SectionKind::WorkExperience]
        );
        assert!(document.section(SectionKind::Projects).is_none());
        assert!(document.section(SectionKind::Skills).is_none());
    }

    #[test]
    fn test_empty_optional_sections_are_omitted() {
        let mut record = minimal_record();
        record.projects = Some(Vec::new());
        record.skills = Some(Vec::new());
        assert_eq!(project_record(&record).sections.len(), 2);
    }

    #[test]
    fn test_sample_record_has_all_sections_in_order() {
        let record = sample_record();
        let document = project_record(&record);
        assert_eq!(
            document.section_kinds(),
            vec![
                SectionKind::Education,
                SectionKind::WorkExperience,
                SectionKind::Projects,
                SectionKind::Skills,
            ]
        );
        let skills = document.section(SectionKind::Skills).unwrap();
        let labels: Vec<&str> = skills
            .blocks
            .iter()
            .map(|block| match &block.lines[0] {
                Line::LabelValue { label, .. } => label.text.as_str(),
                other => panic!("unexpected line {other:?}"),
            })
            .collect();
        assert_eq!(labels, vec!["Languages", "Frameworks", "Software"]);
    }

    #[test]
    fn test_job_block_lines() {
        let record = minimal_record();
        let document = project_record(&record);
        let work = document.section(SectionKind::WorkExperience).unwrap();
        assert_eq!(work.heading.text, "Work Experience");
        let block = &work.blocks[0];
        assert_eq!(block.source_id, record.jobs[0].id);
        assert_eq!(
            block.lines[0],
            Line::Split {
                left: Span::new("Initech", Style::EntryTitle),
                right: Span::new("June 2020 - Present", Style::EntryDates),
            }
        );
        assert_eq!(
            block.lines[1],
            Line::Split {
                left: Span::new("Engineer", Style::EntrySubtitle),
                right: Span::new("Austin, TX", Style::EntryLocation),
            }
        );
        assert_eq!(
            block.lines[2],
            Line::Bullet {
                id: record.jobs[0].description[0].id,
                text: Span::new("Shipped the TPS report service", Style::BulletText),
            }
        );
    }

    #[test]
    fn test_degree_line() {
        let document = project_record(&minimal_record());
        let education = document.section(SectionKind::Education).unwrap();
        assert_eq!(
            education.blocks[0].lines,
            vec![Line::Split {
                left: Span::new("B.A. Mathematics - UT Austin", Style::EntryTitle),
                right: Span::new("May 2020", Style::EntryDates),
            }]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let mut record = minimal_record();
        let mut later = record.jobs[0].clone();
        later.id = ItemId::new();
        later.company = "Aardvark Inc".to_string();
        record.jobs.push(later.clone());
        let document = project_record(&record);
        let work = document.section(SectionKind::WorkExperience).unwrap();
        let ids: Vec<ItemId> = work.blocks.iter().map(|b| b.source_id).collect();
        assert_eq!(ids, vec![record.jobs[0].id, later.id]);
    }

    #[test]
    fn test_projects_keep_editing_order() {
        let mut record = minimal_record();
        let titles = ["Zeta Tracker", "Alpha Notes", "Mid Planner"];
        let projects: Vec<Project> = titles
            .iter()
            .map(|title| {
                let mut project = Project::new();
                project.title = title.to_string();
                project.start_date = "2021".to_string();
                project.end_date = "2022".to_string();
                project.description[0].value = format!("Built {title}");
                project
            })
            .collect();
        let expected_ids: Vec<ItemId> = projects.iter().map(|p| p.id).collect();
        record.projects = Some(projects);

        let document = project_record(&record);
        let section = document.section(SectionKind::Projects).unwrap();
        let ids: Vec<ItemId> = section.blocks.iter().map(|b| b.source_id).collect();
        assert_eq!(ids, expected_ids);

        let rendered_titles: Vec<&str> = section
            .blocks
            .iter()
            .map(|block| match &block.lines[0] {
                Line::Split { left, .. } => left.text.as_str(),
                other => panic!("unexpected line {other:?}"),
            })
            .collect();
        assert_eq!(rendered_titles, titles);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let record = sample_record();
        assert_eq!(project_record(&record), project_record(&record));
    }

    #[test]
    fn test_document_serializes_with_type_tags() {
        let document = project_record(&minimal_record());
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["sections"][0]["kind"], "education");
        assert_eq!(json["sections"][1]["blocks"][0]["lines"][2]["type"], "bullet");
        assert_eq!(json["header"]["contact"]["items"][3]["type"], "link");
    }
}
