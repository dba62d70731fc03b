use crate::bank::QuestionBank;
use crate::types::question::Category;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Introduction,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Introduction,
        Self::Psychometric,
        Self::Technical,
        Self::Wiscar,
        Self::Results,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical",
            Self::Wiscar => "WISCAR",
            Self::Results => "Results",
        }
    }

    fn of(category: Category) -> Self {
        match category {
            Category::Psychometric => Self::Psychometric,
            Category::Technical => Self::Technical,
            Category::Wiscar => Self::Wiscar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current_step: usize,
    pub completed: usize,
    /// Introduction, one step per question, and results.
    pub total: usize,
    pub percent: f64,
    pub section: Section,
}

impl Progress {
    pub fn compute(current_step: usize, is_complete: bool, bank: &QuestionBank) -> Self {
        let total = bank.len() + 2;
        let (completed, section) = if is_complete {
            (total, Section::Results)
        } else {
            let section = match current_step {
                0 | 1 => Section::Introduction,
                step => bank
                    .questions()
                    .get(step - 2)
                    .map(|question| Section::of(question.category))
                    .unwrap_or(Section::Results),
            };
            (current_step.saturating_sub(1).min(total), section)
        };

        Self {
            current_step,
            completed,
            total,
            percent: completed as f64 / total as f64 * 100.0,
            section,
        }
    }

    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.percent / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} of {} completed ({:.0}%)",
            self.bar(20),
            self.completed,
            self.total,
            self.percent
        )?;
        let trail = Section::ALL
            .iter()
            .map(|section| {
                if *section == self.section {
                    format!("[{}]", section.label())
                } else {
                    section.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" > ");
        write!(f, "\n{trail}")
    }
}
