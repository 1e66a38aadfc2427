use crate::model::EntityKind;
use petadopt_core_types::RequestId;
use thiserror::Error;

/// Result type alias using PetAdoptError
pub type Result<T> = std::result::Result<T, PetAdoptError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events, tests and the
/// JSON error bodies returned by the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    MissingField,
    InvalidField,

    // Record state
    NotFound,
    DuplicateKey,
    ReferenceViolation,
    ConstraintViolation,

    // Schema
    MigrationFailed,
    ChecksumMismatch,

    // Integration/IO
    Io,
    Persistence,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidField => "ERR_INVALID_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateKey => "ERR_DUPLICATE_KEY",
            ExErrorKind::ReferenceViolation => "ERR_REFERENCE_VIOLATION",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::MigrationFailed => "ERR_MIGRATION_FAILED",
            ExErrorKind::ChecksumMismatch => "ERR_CHECKSUM_MISMATCH",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the failure was caused by the caller's input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput
                | ExErrorKind::MissingField
                | ExErrorKind::InvalidField
                | ExErrorKind::NotFound
                | ExErrorKind::DuplicateKey
                | ExErrorKind::ReferenceViolation
                | ExErrorKind::ConstraintViolation
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, entity, key, offending field, request id) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<EntityKind>,
    entity_id: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            field: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity type context
    pub fn with_entity(mut self, entity: EntityKind) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add primary key context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add offending form field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity type context, if any
    pub fn entity(&self) -> Option<EntityKind> {
        self.entity
    }

    /// Get the primary key context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the offending field, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (key: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for record operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PetAdoptError {
    /// A required form field was not submitted
    #[error("Missing required field {field} for {entity}")]
    MissingField { entity: EntityKind, field: String },

    /// A submitted value does not fit the field's declared type
    #[error("Invalid value for {entity}.{field}: {reason}")]
    InvalidField {
        entity: EntityKind,
        field: String,
        reason: String,
    },

    /// A field name outside the entity's editable set was named in an update
    #[error("Unknown field {field} for {entity}")]
    UnknownField { entity: EntityKind, field: String },

    /// Insert collided with an existing primary key
    #[error("{entity} with key {key} already exists")]
    DuplicateKey { entity: EntityKind, key: String },

    /// No record with the given key
    #[error("{entity} with key {key} not found")]
    NotFound { entity: EntityKind, key: String },

    /// Referenced row missing, or row still referenced (only when enforcement is on)
    #[error("Reference violation on {entity}: {reason}")]
    ReferenceViolation { entity: EntityKind, reason: String },

    /// Any other schema constraint (e.g. NOT NULL)
    #[error("Constraint violation on {entity}: {reason}")]
    ConstraintViolation { entity: EntityKind, reason: String },
}

impl From<PetAdoptError> for ExError {
    fn from(err: PetAdoptError) -> Self {
        let message = err.to_string();
        match err {
            PetAdoptError::MissingField { entity, field } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_entity(entity)
                    .with_field(field)
                    .with_message(message)
            }
            PetAdoptError::InvalidField { entity, field, .. } => {
                ExError::new(ExErrorKind::InvalidField)
                    .with_entity(entity)
                    .with_field(field)
                    .with_message(message)
            }
            PetAdoptError::UnknownField { entity, field } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity(entity)
                    .with_field(field)
                    .with_message(message)
            }
            PetAdoptError::DuplicateKey { entity, key } => ExError::new(ExErrorKind::DuplicateKey)
                .with_entity(entity)
                .with_entity_id(key)
                .with_message(message),
            PetAdoptError::NotFound { entity, key } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_entity_id(key)
                .with_message(message),
            PetAdoptError::ReferenceViolation { entity, .. } => {
                ExError::new(ExErrorKind::ReferenceViolation)
                    .with_entity(entity)
                    .with_message(message)
            }
            PetAdoptError::ConstraintViolation { entity, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity(entity)
                    .with_message(message)
            }
        }
    }
}
