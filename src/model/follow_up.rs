/// Follow-up information block shown under a generated batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub question: String,
    pub answer: String,
    pub contact: String,
}
