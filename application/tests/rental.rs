mod common;

use application::service::{
    CreatePackageService, IssueRentalService, SaveUserService, SelectPriceService,
};
use application::transfer::{CreatePackageDto, IssueRentalDto, RegionDto, SaveUserDto, SelectPriceDto};
use common::TestModule;
use rust_decimal::Decimal;
use time::macros::{date, datetime};

async fn saved_user(module: &TestModule) -> i32 {
    let outcome = module
        .save_user(SaveUserDto {
            user_id: None,
            firstname: "Ana".to_string(),
            lastname: "Petrovic".to_string(),
            national_id: "0101990123456".to_string(),
            phone: "+381601234567".to_string(),
            email: "ana@example.com".to_string(),
            date_of_birth: date!(1990 - 01 - 01),
        })
        .await;
    assert!(outcome.is_success(), "{}", outcome.message());
    i32::from(outcome.into_value().unwrap())
}

async fn saved_package(module: &TestModule) -> i32 {
    module.database.insert_region(1, "Kopaonik");
    let outcome = module
        .create_package(CreatePackageDto {
            name: "Alpine".to_string(),
            regions: vec![RegionDto {
                region_id: 1,
                name: "Kopaonik".to_string(),
                checked: true,
            }],
        })
        .await;
    assert!(outcome.is_success(), "{}", outcome.message());
    i32::from(outcome.into_value().unwrap())
}

#[tokio::test]
async fn issuing_a_rental_creates_one_pass_and_one_rental_row() {
    let module = TestModule::new();
    let user_id = saved_user(&module).await;
    let package_id = saved_package(&module).await;
    module
        .database
        .set_package_price(package_id, Decimal::new(12_500, 2));

    let outcome = module
        .issue_rental(IssueRentalDto {
            date_from: datetime!(2024-01-10 0:00 UTC),
            date_to: datetime!(2024-01-17 0:00 UTC),
            package_id,
            user_id: Some(user_id),
        })
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "Rental saved successfully.");
    let ski_pass_id = outcome.into_value().unwrap();

    assert_eq!(module.database.ski_pass_count(), 1);
    let rentals = module.database.rentals();
    assert_eq!(rentals.len(), 1);
    assert_eq!(*rentals[0].ski_pass_id(), ski_pass_id);
    assert_eq!(i32::from(*rentals[0].user_id()), user_id);
    assert_eq!(*rentals[0].valid_from(), datetime!(2024-01-10 0:00 UTC));
    assert_eq!(*rentals[0].valid_to(), datetime!(2024-01-17 0:00 UTC));

    let price = module
        .select_price(SelectPriceDto {
            ski_pass_id: i32::from(ski_pass_id),
        })
        .await;
    assert!(price.is_success());
    assert_eq!(price.into_value().unwrap(), Decimal::new(12_500, 2));
}

#[tokio::test]
async fn issuing_for_an_unsaved_user_writes_nothing() {
    let module = TestModule::new();
    let package_id = saved_package(&module).await;

    let outcome = module
        .issue_rental(IssueRentalDto {
            date_from: datetime!(2024-01-10 0:00 UTC),
            date_to: datetime!(2024-01-17 0:00 UTC),
            package_id,
            user_id: None,
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "user must be saved before rental");
    assert_eq!(module.database.ski_pass_count(), 0);
    assert!(module.database.rentals().is_empty());
}

#[tokio::test]
async fn inverted_validity_range_is_rejected() {
    let module = TestModule::new();
    let user_id = saved_user(&module).await;
    let package_id = saved_package(&module).await;

    let outcome = module
        .issue_rental(IssueRentalDto {
            date_from: datetime!(2024-01-17 0:00 UTC),
            date_to: datetime!(2024-01-10 0:00 UTC),
            package_id,
            user_id: Some(user_id),
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "rental period may not end before it starts");
    assert!(module.database.rentals().is_empty());
}

#[tokio::test]
async fn issuing_for_a_missing_package_leaves_no_rental_behind() {
    let module = TestModule::new();
    let user_id = saved_user(&module).await;

    let outcome = module
        .issue_rental(IssueRentalDto {
            date_from: datetime!(2024-01-10 0:00 UTC),
            date_to: datetime!(2024-01-17 0:00 UTC),
            package_id: 404,
            user_id: Some(user_id),
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(module.database.ski_pass_count(), 0);
    assert!(module.database.rentals().is_empty());
}

#[tokio::test]
async fn every_issuance_produces_a_fresh_pass() {
    let module = TestModule::new();
    let user_id = saved_user(&module).await;
    let package_id = saved_package(&module).await;

    let dto = || IssueRentalDto {
        date_from: datetime!(2024-01-10 0:00 UTC),
        date_to: datetime!(2024-01-17 0:00 UTC),
        package_id,
        user_id: Some(user_id),
    };
    let first = module.issue_rental(dto()).await.into_value().unwrap();
    let second = module.issue_rental(dto()).await.into_value().unwrap();

    assert_ne!(first, second);
    assert_eq!(module.database.ski_pass_count(), 2);
    assert_eq!(module.database.rentals().len(), 2);
}
