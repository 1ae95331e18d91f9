use destructure::Destructure;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entity::{CreatedAt, SkiPassId, UserId};

/// Time-bounded assignment of one ski pass to one user. Rentals are
/// append-only history; the core never updates or deletes them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure)]
pub struct Rental {
    user_id: UserId,
    ski_pass_id: SkiPassId,
    rental_date: CreatedAt<Rental>,
    valid_from: OffsetDateTime,
    valid_to: OffsetDateTime,
}

impl Rental {
    pub fn new(
        user_id: UserId,
        ski_pass_id: SkiPassId,
        rental_date: CreatedAt<Rental>,
        valid_from: OffsetDateTime,
        valid_to: OffsetDateTime,
    ) -> Self {
        Self {
            user_id,
            ski_pass_id,
            rental_date,
            valid_from,
            valid_to,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn ski_pass_id(&self) -> &SkiPassId {
        &self.ski_pass_id
    }

    pub fn rental_date(&self) -> &CreatedAt<Rental> {
        &self.rental_date
    }

    pub fn valid_from(&self) -> &OffsetDateTime {
        &self.valid_from
    }

    pub fn valid_to(&self) -> &OffsetDateTime {
        &self.valid_to
    }
}
