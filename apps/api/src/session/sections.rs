use serde::{Deserialize, Serialize};

/// Collapsible groups of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    Personal,
    Education,
    Work,
    Projects,
    Skills,
}

/// Expanded/collapsed state per form section. View-only; carries no data rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    pub personal: bool,
    pub education: bool,
    pub work: bool,
    pub projects: bool,
    pub skills: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            personal: true,
            education: false,
            work: false,
            projects: false,
            skills: false,
        }
    }
}

impl SectionVisibility {
    fn flag(&mut self, section: FormSection) -> &mut bool {
        match section {
            FormSection::Personal => &mut self.personal,
            FormSection::Education => &mut self.education,
            FormSection::Work => &mut self.work,
            FormSection::Projects => &mut self.projects,
            FormSection::Skills => &mut self.skills,
        }
    }

    /// Flips a section and returns its new state.
    pub fn toggle(&mut self, section: FormSection) -> bool {
        let flag = self.flag(section);
        *flag = !*flag;
        self.is_expanded(section)
    }

    pub fn is_expanded(&self, section: FormSection) -> bool {
        match section {
            FormSection::Personal => self.personal,
            FormSection::Education => self.education,
            FormSection::Work => self.work,
            FormSection::Projects => self.projects,
            FormSection::Skills => self.skills,
        }
    }
}
