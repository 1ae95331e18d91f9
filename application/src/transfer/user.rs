use error_stack::Report;
use kernel::prelude::entity::{
    DestructUser, Email, Firstname, Lastname, NationalId, Phone, User, UserId,
};
use kernel::KernelError;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: Date,
    pub full_name: String,
}

impl TryFrom<User> for UserDto {
    type Error = Report<KernelError>;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        let full_name = value.full_name();
        let DestructUser {
            id,
            firstname,
            lastname,
            national_id,
            phone,
            email,
            date_of_birth,
        } = value.into_destruct();
        let id = id.ok_or_else(|| {
            Report::new(KernelError::Validation(
                "user has not been persisted".to_string(),
            ))
        })?;
        Ok(Self {
            user_id: id.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            national_id: national_id.into(),
            phone: phone.into(),
            email: email.into(),
            date_of_birth,
            full_name,
        })
    }
}

/// `user_id` is `None` for a first-time registration and present for an
/// edit of an existing user.
pub struct SaveUserDto {
    pub user_id: Option<i32>,
    pub firstname: String,
    pub lastname: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: Date,
}

impl From<SaveUserDto> for User {
    fn from(value: SaveUserDto) -> Self {
        User::new(
            value.user_id.map(UserId::new),
            Firstname::new(value.firstname),
            Lastname::new(value.lastname),
            NationalId::new(value.national_id),
            Phone::new(value.phone),
            Email::new(value.email),
            value.date_of_birth,
        )
    }
}
