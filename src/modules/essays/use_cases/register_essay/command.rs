// Command data type for registering a graded essay.
//
// Responsibilities
// - Carry the grader's input for the decider to validate.
// - Stay independent of the transport (HTTP or GraphQL).

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEssay {
    pub essay_id: String,
    pub theme: String,
    pub date: NaiveDate,
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub c4: u32,
    pub c5: u32,
    /// Optional; when present it must equal the competency sum.
    pub total_score: Option<u32>,
}
