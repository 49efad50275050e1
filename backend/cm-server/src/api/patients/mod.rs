pub mod login_request;
pub mod login_response;
pub mod patients;
pub mod register_patient_request;
pub mod register_patient_response;
