/// The authenticated requester, already verified by the auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    /// Id of the person making the request (token subject)
    pub subject_id: i64,
}

impl Caller {
    pub fn new(subject_id: i64) -> Self {
        Self { subject_id }
    }
}

impl std::fmt::Display for Caller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "caller#{}", self.subject_id)
    }
}
