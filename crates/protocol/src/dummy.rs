//! Demo data for running the board without a backend.
//!
//! This module provides a sample hiring pipeline with realistic applicants,
//! used by the binary when no snapshot file is configured and by tests.
//!
//! # Examples
//!
//! ```
//! use pipeboard_protocol::dummy::demo_board;
//!
//! let board = demo_board();
//! assert_eq!(board.columns.len(), 4);
//! assert_eq!(board.total_cards(), 9);
//! ```

use chrono::{DateTime, Utc};

use crate::board::{Board, Column};
use crate::card::{Applicant, Card};

/// 2025-03-01T00:00:00Z, the first application date of the demo pipeline.
const DEMO_EPOCH: i64 = 1_740_787_200;

/// A builder for demo applicants.
///
/// Internal helper to keep the sample data readable.
struct ApplicantBuilder {
    id: &'static str,
    applicant: Applicant,
}

impl ApplicantBuilder {
    /// Creates a builder for an applicant who applied `day` days after the
    /// demo epoch.
    fn new(id: &'static str, name: &str, day: i64) -> Self {
        let applied_at =
            DateTime::<Utc>::from_timestamp(DEMO_EPOCH + day * 86_400, 0).unwrap_or_default();
        Self {
            id,
            applicant: Applicant::new(name, applied_at),
        }
    }

    fn origin(mut self, gender: &str, nationality: &str) -> Self {
        self.applicant.gender = Some(gender.to_string());
        self.applicant.nationality = Some(nationality.to_string());
        self
    }

    fn background(mut self, education: &str, experience: &str) -> Self {
        self.applicant.education = Some(education.to_string());
        self.applicant.experience = Some(experience.to_string());
        self
    }

    fn job_type(mut self, job_type: &str) -> Self {
        self.applicant.job_type = Some(job_type.to_string());
        self
    }

    /// Builds the card, deriving avatar and CV locations from the id.
    fn build(mut self) -> Card {
        self.applicant.avatar_url = Some(format!("https://files.example/avatars/{}.png", self.id));
        self.applicant.cv_url = Some(format!("https://files.example/cv/{}.pdf", self.id));
        Card::with_applicant(self.id, self.applicant)
    }
}

/// Generates a sample hiring pipeline.
///
/// - **All applicants**: 4 new applications
/// - **Shortlisted**: 2 applications
/// - **Interview**: 2 applications
/// - **Hired**: 1 application
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::dummy::demo_board;
/// use pipeboard_protocol::ColumnId;
///
/// let board = demo_board();
/// let all = board.column(&ColumnId::from("all")).unwrap();
/// assert_eq!(all.count(), 4);
/// ```
#[must_use]
pub fn demo_board() -> Board {
    Board::new(vec![
        Column::new("all", "All applicants").with_cards(vec![
            ApplicantBuilder::new("app-101", "Amina Diallo", 0)
                .origin("Female", "Senegalese")
                .background("MSc Computer Science", "3 years")
                .job_type("Full-time")
                .build(),
            ApplicantBuilder::new("app-102", "Lucas Moreau", 1)
                .origin("Male", "French")
                .background("BSc Mathematics", "1 year")
                .job_type("Internship")
                .build(),
            ApplicantBuilder::new("app-103", "Priya Raman", 3)
                .origin("Female", "Indian")
                .background("BEng Software Engineering", "5 years")
                .job_type("Full-time")
                .build(),
            ApplicantBuilder::new("app-104", "Tomasz Nowak", 4)
                .origin("Male", "Polish")
                .background("Bootcamp", "2 years")
                .job_type("Part-time")
                .build(),
        ]),
        Column::new("shortlisted", "Shortlisted").with_cards(vec![
            ApplicantBuilder::new("app-091", "Chen Wei", 0)
                .origin("Male", "Chinese")
                .background("PhD Physics", "4 years")
                .job_type("Full-time")
                .build(),
            ApplicantBuilder::new("app-095", "Sofia Rossi", 2)
                .origin("Female", "Italian")
                .background("MBA", "7 years")
                .job_type("Contract")
                .build(),
        ]),
        Column::new("interview", "Interview").with_cards(vec![
            ApplicantBuilder::new("app-080", "Kwame Mensah", 1)
                .origin("Male", "Ghanaian")
                .background("BSc Information Systems", "6 years")
                .job_type("Full-time")
                .build(),
            ApplicantBuilder::new("app-084", "Elena Petrova", 2)
                .origin("Female", "Bulgarian")
                .background("MSc Data Science", "2 years")
                .job_type("Remote")
                .build(),
        ]),
        Column::new("hired", "Hired").with_cards(vec![
            ApplicantBuilder::new("app-072", "Diego Alvarez", 0)
                .origin("Male", "Mexican")
                .background("BSc Computer Engineering", "8 years")
                .job_type("Full-time")
                .build(),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_board_is_valid() {
        let board = demo_board();
        assert!(board.validate().is_ok());
    }

    #[test]
    fn demo_cards_have_cv_links() {
        let board = demo_board();
        for column in &board.columns {
            for card in &column.cards {
                let cv = card.applicant.cv_url.as_deref().expect("cv url");
                assert!(cv.ends_with(&format!("{}.pdf", card.id)));
            }
        }
    }

    #[test]
    fn demo_dates_start_at_epoch() {
        let board = demo_board();
        let earliest = board
            .columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .map(|c| c.applicant.applied_at)
            .min()
            .expect("cards");
        assert_eq!(earliest.timestamp(), DEMO_EPOCH);
    }
}
