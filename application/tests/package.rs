mod common;

use application::service::{CreatePackageService, GetPackageService, UpdatePackageService};
use application::transfer::{CreatePackageDto, RegionDto, UpdatePackageDto};
use common::TestModule;

fn region_dto(region_id: i32, name: &str) -> RegionDto {
    RegionDto {
        region_id,
        name: name.to_string(),
        checked: true,
    }
}

#[tokio::test]
async fn create_package_associates_every_submitted_region() {
    let module = TestModule::new();
    module.database.insert_region(1, "Kopaonik");
    module.database.insert_region(2, "Zlatibor");

    let outcome = module
        .create_package(CreatePackageDto {
            name: "Alpine".to_string(),
            regions: vec![region_dto(1, "Kopaonik"), region_dto(2, "Zlatibor")],
        })
        .await;

    assert!(outcome.is_success(), "{}", outcome.message());
    let package_id = outcome.into_value().unwrap();

    let packages = module.get_all_packages().await.into_value().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].package_id, i32::from(package_id));
    assert_eq!(packages[0].name, "Alpine");
    let mut region_ids = packages[0]
        .regions
        .iter()
        .map(|region| region.region_id)
        .collect::<Vec<_>>();
    region_ids.sort_unstable();
    assert_eq!(region_ids, vec![1, 2]);
}

#[tokio::test]
async fn create_package_without_regions_is_rejected_before_any_write() {
    let module = TestModule::new();

    let outcome = module
        .create_package(CreatePackageDto {
            name: "Empty".to_string(),
            regions: Vec::new(),
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "package must contain at least one region");
    assert!(module.get_all_packages().await.into_value().unwrap().is_empty());
}

#[tokio::test]
async fn update_package_reconciles_membership_to_the_submitted_set() {
    let module = TestModule::new();
    module.database.insert_region(1, "Kopaonik");
    module.database.insert_region(2, "Zlatibor");
    module.database.insert_region(3, "Tara");

    let package_id = module
        .create_package(CreatePackageDto {
            name: "Alpine".to_string(),
            regions: vec![region_dto(1, "Kopaonik"), region_dto(2, "Zlatibor")],
        })
        .await
        .into_value()
        .unwrap();

    let outcome = module
        .update_package(UpdatePackageDto {
            package_id: i32::from(package_id),
            name: "Alpine extended".to_string(),
            regions: vec![region_dto(2, "Zlatibor"), region_dto(3, "Tara")],
        })
        .await;
    assert!(outcome.is_success(), "{}", outcome.message());

    let packages = module.get_all_packages().await.into_value().unwrap();
    assert_eq!(packages[0].name, "Alpine extended");
    let mut region_ids = packages[0]
        .regions
        .iter()
        .map(|region| region.region_id)
        .collect::<Vec<_>>();
    region_ids.sort_unstable();
    assert_eq!(region_ids, vec![2, 3]);
}

#[tokio::test]
async fn update_package_to_zero_regions_leaves_membership_untouched() {
    let module = TestModule::new();
    module.database.insert_region(1, "Kopaonik");

    let package_id = module
        .create_package(CreatePackageDto {
            name: "Alpine".to_string(),
            regions: vec![region_dto(1, "Kopaonik")],
        })
        .await
        .into_value()
        .unwrap();

    let outcome = module
        .update_package(UpdatePackageDto {
            package_id: i32::from(package_id),
            name: "Alpine".to_string(),
            regions: Vec::new(),
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "package must contain at least one region");

    let packages = module.get_all_packages().await.into_value().unwrap();
    assert_eq!(packages[0].regions.len(), 1);
}

#[tokio::test]
async fn update_with_identical_membership_changes_nothing_but_the_name() {
    let module = TestModule::new();
    module.database.insert_region(1, "Kopaonik");
    module.database.insert_region(2, "Zlatibor");

    let package_id = module
        .create_package(CreatePackageDto {
            name: "Alpine".to_string(),
            regions: vec![region_dto(1, "Kopaonik"), region_dto(2, "Zlatibor")],
        })
        .await
        .into_value()
        .unwrap();

    let outcome = module
        .update_package(UpdatePackageDto {
            package_id: i32::from(package_id),
            name: "Renamed".to_string(),
            regions: vec![region_dto(1, "Kopaonik"), region_dto(2, "Zlatibor")],
        })
        .await;
    assert!(outcome.is_success(), "{}", outcome.message());

    let packages = module.get_all_packages().await.into_value().unwrap();
    assert_eq!(packages[0].name, "Renamed");
    assert_eq!(packages[0].regions.len(), 2);
}
