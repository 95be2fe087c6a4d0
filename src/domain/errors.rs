use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Ui(UiError),
    Validation(ValidationError),
    Rendering(RenderingError),
    Configuration(ConfigurationError),
}

/// Failures resolving the page elements the dashboard is wired to
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    DocumentUnavailable,
    DashboardDestroyed,
    ElementNotFound(String),
    ElementTypeMismatch { id: String, expected: &'static str },
}

/// Rejected domain values
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidDate { year: i32, month: u32, day: u32 },
    InvalidTarget(f64),
    InvalidFactor(f64),
}

/// Failures handing a figure to the chart library
#[derive(Debug, Clone, PartialEq)]
pub enum RenderingError {
    Serialization(String),
    ChartLibraryFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidConfig(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Ui(e) => write!(f, "UI Error: {}", e),
            AppError::Validation(e) => write!(f, "Validation Error: {}", e),
            AppError::Rendering(e) => write!(f, "Rendering Error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration Error: {}", e),
        }
    }
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UiError::DocumentUnavailable => write!(f, "document not available"),
            UiError::DashboardDestroyed => write!(f, "dashboard already destroyed"),
            UiError::ElementNotFound(id) => write!(f, "element '#{}' not found", id),
            UiError::ElementTypeMismatch { id, expected } => {
                write!(f, "element '#{}' is not a {}", id, expected)
            }
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {:04}-{:02}-{:02}", year, month, day)
            }
            ValidationError::InvalidTarget(value) => {
                write!(f, "monthly target must be finite and positive, got {}", value)
            }
            ValidationError::InvalidFactor(value) => {
                write!(f, "actual factor must be in (0, 1], got {}", value)
            }
        }
    }
}

impl Display for RenderingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RenderingError::Serialization(msg) => write!(f, "serialization failed: {}", msg),
            RenderingError::ChartLibraryFailed(msg) => write!(f, "chart library failed: {}", msg),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<UiError> for AppError {
    fn from(error: UiError) -> Self {
        AppError::Ui(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Rendering(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Configuration(error)
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub type AppResult<T> = Result<T, AppError>;
