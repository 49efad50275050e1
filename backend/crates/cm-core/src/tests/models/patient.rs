use crate::{NewPatient, Patient};

#[test]
fn test_patient_debug_redacts_password_hash() {
    let patient = Patient {
        id: 1,
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password_hash: "$argon2id$v=19$secret".to_string(),
    };

    let debug = format!("{:?}", patient);

    assert!(debug.contains("ana@example.com"));
    assert!(!debug.contains("secret"));
}

#[test]
fn test_new_patient_debug_redacts_password_hash() {
    let patient = NewPatient::new(
        "Ana".to_string(),
        "ana@example.com".to_string(),
        "$argon2id$v=19$secret".to_string(),
    );

    assert!(!format!("{:?}", patient).contains("secret"));
}

#[test]
fn test_patient_serialization_skips_password_hash() {
    let patient = Patient {
        id: 3,
        name: "Luis".to_string(),
        email: "luis@example.com".to_string(),
        password_hash: "$argon2id$v=19$secret".to_string(),
    };

    let json = serde_json::to_value(&patient).unwrap();

    assert_eq!(json["id"], 3);
    assert!(json.get("password_hash").is_none());
}
