//! Client-facing response messages (Spanish, as the frontend displays them).

pub const REGISTRATION_SUCCEEDED: &str = "Registro exitoso";
pub const MISSING_REGISTRATION_DATA: &str = "Faltan datos requeridos";
pub const EMAIL_TAKEN: &str = "El email ya está registrado";

pub const LOGIN_SUCCEEDED: &str = "Login exitoso";
pub const INVALID_CREDENTIALS: &str = "Email o contraseña incorrectos";

pub const APPOINTMENT_BOOKED: &str = "Cita agendada exitosamente";
pub const MISSING_APPOINTMENT_DATA: &str = "Faltan datos para la cita";
pub const INVALID_TIMESTAMP: &str = "Formato de fecha/hora inválido. Use YYYY-MM-DD HH:MM:SS";
pub const SLOT_TAKEN: &str = "Ese horario ya está reservado con el doctor";
pub const UNKNOWN_PATIENT_OR_DOCTOR: &str = "El paciente o el doctor no existe";

pub const INVALID_JSON_BODY: &str = "El cuerpo de la solicitud no es un JSON válido";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";
