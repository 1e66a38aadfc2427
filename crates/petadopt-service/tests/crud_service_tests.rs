// Integration tests for the CRUD service over a scratch database.
// Covers create, list, get, edit and remove for every record type.

use petadopt_core::{Adopter, Adoption, ExErrorKind, FormFields, Payment, Pet};
use petadopt_service::CrudService;
use petadopt_store::StoreConfig;
use tempfile::TempDir;

fn setup_service() -> (TempDir, CrudService) {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("service.db"));
    let service = CrudService::open(config).unwrap();
    (temp_dir, service)
}

fn pet_form() -> FormFields {
    FormFields::new()
        .with("PetID", "P1")
        .with("PetName", "Rex")
        .with("Breed", "Lab")
        .with("Age", "3")
        .with("HealthStatus", "Healthy")
}

fn adopter_form() -> FormFields {
    FormFields::new()
        .with("AdopterID", "A1")
        .with("FirstName", "Jane")
        .with("LastName", "Doe")
        .with("Contact", "555-0100")
        .with("Address", "12 Elm Street")
        .with("City", "Springfield")
        .with("State", "IL")
        .with("Country", "USA")
}

// ---------------------------------------------------------------------------
// create / list
// ---------------------------------------------------------------------------

#[test]
fn test_create_pet_then_list() {
    let (_tmp, service) = setup_service();

    let key = service.create::<Pet>(&pet_form()).unwrap();
    assert_eq!(key, "P1");

    let pets = service.list::<Pet>().unwrap();
    assert_eq!(
        pets,
        vec![Pet {
            pet_id: "P1".to_string(),
            pet_name: "Rex".to_string(),
            breed: "Lab".to_string(),
            age: 3,
            health_status: "Healthy".to_string(),
        }]
    );
}

#[test]
fn test_create_missing_field_names_it() {
    let (_tmp, service) = setup_service();
    let mut form = pet_form();
    form.remove("Breed");

    let err = service.create::<Pet>(&form).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MissingField);
    assert_eq!(err.field(), Some("Breed"));
    assert_eq!(err.op(), Some("record_create"));
    assert!(service.list::<Pet>().unwrap().is_empty());
}

#[test]
fn test_create_with_non_integer_age_is_rejected() {
    let (_tmp, service) = setup_service();
    let form = pet_form().with("Age", "three");

    let err = service.create::<Pet>(&form).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidField);
    assert_eq!(err.field(), Some("Age"));
}

#[test]
fn test_create_duplicate_pet_keeps_first() {
    let (_tmp, service) = setup_service();
    service.create::<Pet>(&pet_form()).unwrap();

    let err = service
        .create::<Pet>(&pet_form().with("PetName", "Max"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::DuplicateKey);

    let stored = service.get::<Pet>("P1").unwrap();
    assert_eq!(stored.pet_name, "Rex");
}

#[test]
fn test_create_adoption_with_unknown_references_is_allowed() {
    let (_tmp, service) = setup_service();
    let form = FormFields::new()
        .with("PetID", "P1")
        .with("AdopterID", "A1")
        .with("AdoptionDate", "2024-01-01");

    let id = service.create::<Adoption>(&form).unwrap();

    let adoptions = service.list::<Adoption>().unwrap();
    assert_eq!(
        adoptions,
        vec![Adoption {
            adoption_id: id,
            pet_id: "P1".to_string(),
            adopter_id: "A1".to_string(),
            adoption_date: "2024-01-01".to_string(),
        }]
    );
}

#[test]
fn test_create_payment_parses_amount() {
    let (_tmp, service) = setup_service();
    let form = FormFields::new()
        .with("AdoptionID", "1")
        .with("Amount", "75.25")
        .with("PaymentDate", "2024-01-03");

    let id = service.create::<Payment>(&form).unwrap();
    let payment = service.get::<Payment>(&id.to_string()).unwrap();
    assert_eq!(payment.adoption_id, 1);
    assert!((payment.amount - 75.25).abs() < f64::EPSILON);
}

#[test]
fn test_adopter_round_trip() {
    let (_tmp, service) = setup_service();
    service.create::<Adopter>(&adopter_form()).unwrap();

    let adopter = service.get::<Adopter>("A1").unwrap();
    assert_eq!(adopter.full_name(), "Jane Doe");
    assert_eq!(adopter.contact, "555-0100");
    assert_eq!(adopter.country, "USA");
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn test_get_missing_pet_is_not_found() {
    let (_tmp, service) = setup_service();
    let err = service.get::<Pet>("P404").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("P404"));
}

#[test]
fn test_get_adoption_with_text_key_is_invalid() {
    let (_tmp, service) = setup_service();
    let err = service.get::<Adoption>("abc").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidField);
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[test]
fn test_edit_pet_health_status_only() {
    let (_tmp, service) = setup_service();
    service.create::<Pet>(&pet_form()).unwrap();

    let mut form = pet_form().with("HealthStatus", "Recovering");
    form.remove("PetID");
    let affected = service.edit::<Pet>("P1", &form).unwrap();
    assert_eq!(affected, 1);

    let pet = service.get::<Pet>("P1").unwrap();
    assert_eq!(pet.health_status, "Recovering");
    assert_eq!(pet.pet_name, "Rex");
    assert_eq!(pet.breed, "Lab");
    assert_eq!(pet.age, 3);
}

#[test]
fn test_edit_requires_every_editable_field() {
    let (_tmp, service) = setup_service();
    service.create::<Pet>(&pet_form()).unwrap();

    let form = FormFields::new().with("HealthStatus", "Recovering");
    let err = service.edit::<Pet>("P1", &form).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MissingField);
    assert_eq!(service.get::<Pet>("P1").unwrap().health_status, "Healthy");
}

#[test]
fn test_edit_missing_key_is_silent() {
    let (_tmp, service) = setup_service();
    let affected = service.edit::<Pet>("ghost", &pet_form()).unwrap();
    assert_eq!(affected, 0);
    assert!(service.list::<Pet>().unwrap().is_empty());
}

#[test]
fn test_edit_adoption_date() {
    let (_tmp, service) = setup_service();
    let form = FormFields::new()
        .with("PetID", "P1")
        .with("AdopterID", "A1")
        .with("AdoptionDate", "2024-01-01");
    let id = service.create::<Adoption>(&form).unwrap();

    let edited = form.with("AdoptionDate", "2024-02-02");
    service.edit::<Adoption>(&id.to_string(), &edited).unwrap();

    let adoption = service.get::<Adoption>(&id.to_string()).unwrap();
    assert_eq!(adoption.adoption_date, "2024-02-02");
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

#[test]
fn test_remove_pet() {
    let (_tmp, service) = setup_service();
    service.create::<Pet>(&pet_form()).unwrap();

    assert_eq!(service.remove::<Pet>("P1").unwrap(), 1);
    assert!(service.list::<Pet>().unwrap().is_empty());
}

#[test]
fn test_remove_missing_pet_is_noop() {
    let (_tmp, service) = setup_service();
    service.create::<Pet>(&pet_form()).unwrap();

    assert_eq!(service.remove::<Pet>("P404").unwrap(), 0);
    assert_eq!(service.list::<Pet>().unwrap().len(), 1);
}

#[test]
fn test_remove_with_enforced_references() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("fk.db")).with_foreign_keys(true);
    let service = CrudService::open(config).unwrap();

    service.create::<Pet>(&pet_form()).unwrap();
    service.create::<Adopter>(&adopter_form()).unwrap();
    let adoption = FormFields::new()
        .with("PetID", "P1")
        .with("AdopterID", "A1")
        .with("AdoptionDate", "2024-01-01");
    service.create::<Adoption>(&adoption).unwrap();

    let err = service.remove::<Pet>("P1").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ReferenceViolation);

    let dangling = adoption.with("PetID", "P2");
    let err = service.create::<Adoption>(&dangling).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ReferenceViolation);
}

#[test]
fn test_connections_return_to_pool() {
    let (_tmp, service) = setup_service();
    for _ in 0..5 {
        service.list::<Pet>().unwrap();
        let _ = service.get::<Pet>("missing");
    }
    assert_eq!(service.pool().idle_count(), 1);
}
