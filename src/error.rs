use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upload::UploadError;

/// Declares a closed set of sentinel errors, each with a stable snake_case
/// code and one fixed message.
macro_rules! sentinel_catalogue {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $code:literal, $message:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            thiserror::Error,
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $(
                #[error("{}", $message)]
                $variant,
            )+
        }

        impl $name {
            /// Every entry, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn message(&self) -> &'static str {
                match self {
                    $($name::$variant => $message,)+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|entry| entry.code() == code)
            }
        }
    };
}

pub(crate) use sentinel_catalogue;

sentinel_catalogue! {
    /// Sentinel errors shared by every staff-management handler.
    ///
    /// Callers compare these by value; the message text is part of the
    /// contract and must not change.
    pub enum SharedError {
        MissingEnvVar => "missing_env_var", "environment variable is not set";
        InvalidEnvVar => "invalid_env_var", "environment variable has an invalid value";
        DatabaseConnection => "database_connection", "could not connect to the database";
        DatabaseQuery => "database_query", "database query failed";
        RecordNotFound => "record_not_found", "record not found";
        DuplicateRecord => "duplicate_record", "record already exists";
        TransactionFailed => "transaction_failed", "database transaction failed";
        InvalidRequestBody => "invalid_request_body", "request body is invalid";
        MissingRequiredField => "missing_required_field", "a required field is missing";
        InvalidId => "invalid_id", "id must be a positive integer";
        InvalidDate => "invalid_date", "date must be in YYYY-MM-DD format";
        InvalidDateRange => "invalid_date_range", "start date must not be after end date";
        InvalidEmail => "invalid_email", "email address is invalid";
        InvalidPhoneNumber => "invalid_phone_number", "phone number is invalid";
        InvalidPagination => "invalid_pagination", "page and limit must be positive integers";
        Unauthorized => "unauthorized", "authentication required";
        Forbidden => "forbidden", "you do not have permission to perform this action";
        MissingToken => "missing_token", "authorization token is missing";
        InvalidToken => "invalid_token", "authorization token is invalid";
        ExpiredToken => "expired_token", "authorization token has expired";
        InvalidCredentials => "invalid_credentials", "invalid username or password";
        AccountDisabled => "account_disabled", "account is disabled";
        PolicyNotFound => "policy_not_found", "no policy matches the requested path";
        PolicyLoadFailed => "policy_load_failed", "failed to load authorization policies";
        StaffNotFound => "staff_not_found", "staff member not found";
        StaffAlreadyExists => "staff_already_exists", "staff member already exists";
        StaffInactive => "staff_inactive", "staff member is inactive";
        InvalidStaffRole => "invalid_staff_role", "staff role is invalid";
        DepartmentNotFound => "department_not_found", "department not found";
        PositionNotFound => "position_not_found", "position not found";
        QualificationNotFound => "qualification_not_found", "qualification not found";
        QualificationExpired => "qualification_expired", "qualification has expired";
        DuplicateQualification => "duplicate_qualification", "qualification is already assigned to this staff member";
        InvalidQualificationType => "invalid_qualification_type", "qualification type is invalid";
        ShiftNotFound => "shift_not_found", "shift not found";
        ShiftConflict => "shift_conflict", "shift overlaps an existing shift";
        LeaveRequestNotFound => "leave_request_not_found", "leave request not found";
        InsufficientLeaveBalance => "insufficient_leave_balance", "insufficient leave balance";
        InvalidLeaveStatus => "invalid_leave_status", "leave request status is invalid";
        ContractNotFound => "contract_not_found", "contract not found";
        ContractExpired => "contract_expired", "contract has expired";
        InternalServer => "internal_server", "internal server error";
        ServiceUnavailable => "service_unavailable", "service is temporarily unavailable";
        RateLimited => "rate_limited", "too many requests";
        NotImplemented => "not_implemented", "not implemented";
    }
}

/// User-facing remediation hints paired with [`SharedError`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fix {
    SetEnvVar,
    CheckDatabase,
    CheckRequestBody,
    UseIsoDate,
    LoginAgain,
    ContactAdmin,
    CheckId,
    RenewQualification,
    RetryLater,
    ReportIssue,
}

impl Fix {
    pub const ALL: &'static [Fix] = &[
        Fix::SetEnvVar,
        Fix::CheckDatabase,
        Fix::CheckRequestBody,
        Fix::UseIsoDate,
        Fix::LoginAgain,
        Fix::ContactAdmin,
        Fix::CheckId,
        Fix::RenewQualification,
        Fix::RetryLater,
        Fix::ReportIssue,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Fix::SetEnvVar => "set_env_var",
            Fix::CheckDatabase => "check_database",
            Fix::CheckRequestBody => "check_request_body",
            Fix::UseIsoDate => "use_iso_date",
            Fix::LoginAgain => "login_again",
            Fix::ContactAdmin => "contact_admin",
            Fix::CheckId => "check_id",
            Fix::RenewQualification => "renew_qualification",
            Fix::RetryLater => "retry_later",
            Fix::ReportIssue => "report_issue",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Fix::SetEnvVar => "Set the required environment variable and restart the service.",
            Fix::CheckDatabase => {
                "Check that the database is running and the connection settings are correct."
            }
            Fix::CheckRequestBody => {
                "Check the request body against the API documentation and try again."
            }
            Fix::UseIsoDate => "Use dates in YYYY-MM-DD format, for example 2024-03-05.",
            Fix::LoginAgain => "Log in again to obtain a new token.",
            Fix::ContactAdmin => "Contact an administrator to request access.",
            Fix::CheckId => "Check that the id exists and try again.",
            Fix::RenewQualification => "Renew the qualification before assigning it.",
            Fix::RetryLater => "Wait a moment and try the request again.",
            Fix::ReportIssue => "Report this issue to the support team with the request details.",
        }
    }
}

impl std::fmt::Display for Fix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl SharedError {
    /// Suggested remediation, if one applies.
    pub fn fix(&self) -> Option<Fix> {
        use SharedError::*;
        match self {
            MissingEnvVar | InvalidEnvVar => Some(Fix::SetEnvVar),
            DatabaseConnection | DatabaseQuery | TransactionFailed => Some(Fix::CheckDatabase),
            InvalidRequestBody | MissingRequiredField | InvalidEmail | InvalidPhoneNumber
            | InvalidPagination | InvalidStaffRole | InvalidQualificationType
            | InvalidLeaveStatus => Some(Fix::CheckRequestBody),
            InvalidDate | InvalidDateRange => Some(Fix::UseIsoDate),
            Unauthorized | MissingToken | InvalidToken | ExpiredToken | InvalidCredentials => {
                Some(Fix::LoginAgain)
            }
            Forbidden | AccountDisabled | PolicyNotFound => Some(Fix::ContactAdmin),
            InvalidId | RecordNotFound | StaffNotFound | DepartmentNotFound | PositionNotFound
            | QualificationNotFound | ShiftNotFound | LeaveRequestNotFound | ContractNotFound => {
                Some(Fix::CheckId)
            }
            QualificationExpired => Some(Fix::RenewQualification),
            ServiceUnavailable | RateLimited => Some(Fix::RetryLater),
            InternalServer | PolicyLoadFailed => Some(Fix::ReportIssue),
            DuplicateRecord | StaffAlreadyExists | StaffInactive | DuplicateQualification
            | ShiftConflict | InsufficientLeaveBalance | ContractExpired | NotImplemented => None,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        use SharedError::*;
        match self {
            MissingEnvVar | InvalidEnvVar | DatabaseConnection | PolicyLoadFailed
            | InternalServer => ErrorSeverity::Critical,
            DatabaseQuery | TransactionFailed | Unauthorized | Forbidden | MissingToken
            | InvalidToken | ExpiredToken | InvalidCredentials | AccountDisabled
            | ServiceUnavailable => ErrorSeverity::High,
            NotImplemented | RateLimited => ErrorSeverity::Low,
            _ => ErrorSeverity::Medium,
        }
    }
}

/// Wire form of a sentinel, for handing across a process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl From<SharedError> for ErrorBody {
    fn from(err: SharedError) -> Self {
        ErrorBody {
            code: err.code().to_string(),
            message: err.message().to_string(),
            fix: err.fix().map(|fix| fix.text().to_string()),
        }
    }
}

impl From<UploadError> for ErrorBody {
    fn from(err: UploadError) -> Self {
        ErrorBody {
            code: err.code().to_string(),
            message: err.message().to_string(),
            fix: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Shared(#[from] SharedError),
    #[error("UploadError: {0}")]
    Upload(#[from] UploadError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown error code: {code}")]
    UnknownCode { code: String },
    #[error("Output serialization failed: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Shared(shared) => shared.severity(),
            AppError::Upload(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Cli(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Shared(shared) => shared.fix().map(|fix| fix.text().to_string()),
            AppError::Upload(UploadError::FileTooLarge) => {
                Some("config set max_upload_bytes <n> to raise the limit".to_string())
            }
            AppError::Upload(UploadError::UnsupportedFileType) => Some(
                "config set allowed_extensions <ext,ext> to allow more file types".to_string(),
            ),
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(
                "valid keys are placeholder, max_upload_bytes, allowed_extensions".to_string(),
            ),
            AppError::Cli(CliError::UnknownCode { .. }) => {
                Some("'staff-shared errors list' to see every code".to_string())
            }
            _ => None,
        }
    }
}
