mod contact;
mod id;
mod name;
mod national_id;

pub use self::{contact::*, id::*, name::*, national_id::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use time::Date;

/// A registered customer. `id` stays `None` until the store persists
/// the user; workflows that reference a user require it to be present.
#[derive(Debug, Clone, Eq, Serialize, Deserialize, Destructure)]
pub struct User {
    id: Option<UserId>,
    firstname: Firstname,
    lastname: Lastname,
    national_id: NationalId,
    phone: Phone,
    email: Email,
    date_of_birth: Date,
}

impl User {
    pub fn new(
        id: Option<UserId>,
        firstname: Firstname,
        lastname: Lastname,
        national_id: NationalId,
        phone: Phone,
        email: Email,
        date_of_birth: Date,
    ) -> Self {
        Self {
            id,
            firstname,
            lastname,
            national_id,
            phone,
            email,
            date_of_birth,
        }
    }

    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    pub fn firstname(&self) -> &Firstname {
        &self.firstname
    }

    pub fn lastname(&self) -> &Lastname {
        &self.lastname
    }

    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname.as_ref(), self.lastname.as_ref())
    }
}

// Identity-only equality, matching the store's view of a user.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
