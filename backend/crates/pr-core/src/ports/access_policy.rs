use crate::{Caller, Person};

/// Decides whether a caller may mutate or delete a person record.
pub trait AccessPolicy: Send + Sync {
    fn is_authorized(&self, caller: &Caller, person: &Person) -> bool;
}

/// Default policy: a caller may only act on their own record.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnly;

impl AccessPolicy for OwnerOnly {
    fn is_authorized(&self, caller: &Caller, person: &Person) -> bool {
        person.is_owned_by(caller)
    }
}
