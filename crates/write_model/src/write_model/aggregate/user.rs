use crate::value_object::UserId;

/// The authenticated caller of a use case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    id: UserId,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }
}
