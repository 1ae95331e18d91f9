mod common;

use application::service::{GetUserService, SaveUserService};
use application::transfer::SaveUserDto;
use common::TestModule;
use time::macros::date;

fn registration(firstname: &str, lastname: &str) -> SaveUserDto {
    SaveUserDto {
        user_id: None,
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        national_id: "0101990123456".to_string(),
        phone: "+381601234567".to_string(),
        email: "user@example.com".to_string(),
        date_of_birth: date!(1990 - 01 - 01),
    }
}

#[tokio::test]
async fn registering_a_user_assigns_an_id() {
    let module = TestModule::new();

    let outcome = module.save_user(registration("Ana", "Petrovic")).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "User saved successfully.");
    assert!(outcome.into_value().is_some());

    let users = module.get_all_users().await.into_value().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "Ana Petrovic");
}

#[tokio::test]
async fn saving_with_an_id_updates_in_place() {
    let module = TestModule::new();
    let user_id = module
        .save_user(registration("Ana", "Petrovic"))
        .await
        .into_value()
        .unwrap();

    let outcome = module
        .save_user(SaveUserDto {
            user_id: Some(i32::from(user_id)),
            firstname: "Ana".to_string(),
            lastname: "Jovanovic".to_string(),
            national_id: "0101990123456".to_string(),
            phone: "+381601234567".to_string(),
            email: "user@example.com".to_string(),
            date_of_birth: date!(1990 - 01 - 01),
        })
        .await;

    assert!(outcome.is_success(), "{}", outcome.message());
    assert_eq!(outcome.into_value(), Some(user_id));

    let users = module.get_all_users().await.into_value().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user_id, i32::from(user_id));
    assert_eq!(users[0].lastname, "Jovanovic");
}

#[tokio::test]
async fn saving_with_an_unknown_id_fails() {
    let module = TestModule::new();

    let outcome = module
        .save_user(SaveUserDto {
            user_id: Some(404),
            firstname: "Ana".to_string(),
            lastname: "Petrovic".to_string(),
            national_id: "0101990123456".to_string(),
            phone: "+381601234567".to_string(),
            email: "user@example.com".to_string(),
            date_of_birth: date!(1990 - 01 - 01),
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "store operation failed: no user with id 404");
    assert!(module.get_all_users().await.into_value().unwrap().is_empty());
}
