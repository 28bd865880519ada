//! Pre-filled example resume offered as a starting template.

use crate::models::record::{
    BulletLine, CandidateRecord, Degree, ItemId, Job, Project, SkillCategory,
};

/// Returns a complete, valid record with freshly minted ids.
pub fn sample_record() -> CandidateRecord {
    CandidateRecord {
        name: "John Doe".to_string(),
        phone_number: "1234567809".to_string(),
        email: "john_doe@gmail.com".to_string(),
        address: "Los Angeles, CA".to_string(),
        linked_in: "https://www.linkedin.com/".to_string(),
        git_hub: "https://www.github.com/".to_string(),
        degrees: vec![Degree {
            id: ItemId::new(),
            degree: "B.S. in Computer Science".to_string(),
            institution: "University of California, Los Angeles".to_string(),
            grad_date: "June 2023".to_string(),
        }],
        jobs: vec![Job {
            id: ItemId::new(),
            company: "Google".to_string(),
            position: "Software Engineer Intern".to_string(),
            location: "Mountain View, CA".to_string(),
            start_date: "June 2022".to_string(),
            end_date: "August 2022".to_string(),
            description: vec![
                BulletLine::with_value(
                    "Worked on the Google Search team to improve search algorithms.",
                ),
                BulletLine::with_value(
                    "Implemented a new feature that increased user engagement by 20%.",
                ),
            ],
        }],
        projects: Some(vec![Project {
            id: ItemId::new(),
            title: "TherapyGPT".to_string(),
            start_date: "January 2023".to_string(),
            end_date: "March 2023".to_string(),
            description: vec![
                BulletLine::with_value(
                    "Developed an AI model finetuned for therapeutic conversations",
                ),
                BulletLine::with_value(
                    "Implemented voice-to-text and text-to-speech interface using React and Node js",
                ),
                BulletLine::with_value("Secured users' data using AWS"),
            ],
        }]),
        skills: Some(vec![
            skill("Languages", "Javascript, Typescript, Python"),
            skill("Frameworks", "React, Zod, Flask"),
            skill("Software", "Figma, Git, Docker, Vite"),
        ]),
    }
}

fn skill(category: &str, value: &str) -> SkillCategory {
    SkillCategory {
        id: ItemId::new(),
        category: category.to_string(),
        value: value.to_string(),
    }
}
