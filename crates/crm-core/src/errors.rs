use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced to the operator maps to exactly one kind, and every
/// kind maps to a stable code. Callers branch on the kind, never on message
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Store
    /// The store file could not be opened or is not a database
    ConnectionFailure,
    Persistence,

    // Integration/IO
    Io,
    Serialization,

    // Auth
    Unauthorised,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::ConnectionFailure => "ERR_CONNECTION_FAILURE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this failure must abort the session
    ///
    /// Constraint violations and bad input are reported and the menu loop
    /// continues; a broken store is not recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ConnectionFailure | ExErrorKind::Persistence | ExErrorKind::Internal
        )
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add entity ID context (row id, username, file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

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
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised above the store layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrmError {
    /// A user with this username already exists
    #[error("Username already taken: {username}")]
    DuplicateUsername { username: String },

    /// Username/password pair did not match any user row
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The store file could not be opened
    #[error("Store unavailable at {path}: {reason}")]
    StoreUnavailable { path: String, reason: String },

    /// Bootstrap is only allowed against an empty user table
    #[error("Refusing to bootstrap: {existing_users} user(s) already exist")]
    BootstrapRefused { existing_users: i64 },

    /// A menu choice outside the offered options
    #[error("Invalid menu choice: {choice:?}")]
    InvalidMenuChoice { choice: String },
}

impl From<CrmError> for ExError {
    fn from(err: CrmError) -> Self {
        match err {
            CrmError::DuplicateUsername { username } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_op("add_user")
                    .with_table("user")
                    .with_entity_id(username)
                    .with_message("Username already taken")
            }

            CrmError::InvalidCredentials => ExError::new(ExErrorKind::Unauthorised)
                .with_op("login")
                .with_message("Invalid username or password"),

            CrmError::StoreUnavailable { path, reason } => {
                ExError::new(ExErrorKind::ConnectionFailure)
                    .with_op("open_store")
                    .with_entity_id(path)
                    .with_message(reason)
            }

            CrmError::BootstrapRefused { existing_users } => {
                ExError::new(ExErrorKind::Unauthorised)
                    .with_op("bootstrap_user")
                    .with_table("user")
                    .with_message(format!("{} user(s) already exist", existing_users))
            }

            CrmError::InvalidMenuChoice { choice } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("menu")
                .with_message(format!("Invalid menu choice: {:?}", choice)),
        }
    }
}
