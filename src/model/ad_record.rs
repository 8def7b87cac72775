/// One parsed advertisement. The number is kept as the label the model
/// emitted, which is not guaranteed to be numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdRecord {
    pub number: String,
    pub headline: String,
    pub description: String,
}
