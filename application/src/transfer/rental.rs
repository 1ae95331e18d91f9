use time::OffsetDateTime;

/// Issuance request as the UI submits it. `user_id` is `None` when the
/// selected user was never saved; the workflow reports that as a
/// validation failure.
pub struct IssueRentalDto {
    pub date_from: OffsetDateTime,
    pub date_to: OffsetDateTime,
    pub package_id: i32,
    pub user_id: Option<i32>,
}

pub struct SelectPriceDto {
    pub ski_pass_id: i32,
}
