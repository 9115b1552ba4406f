/// Small error surface: the page has no recoverable failure modes beyond these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The browser refused a geometry query.
    Measurement(String),
    /// Fixture data violates a structural invariant.
    Fixture(String),
    /// A browser API (window, document, Intl) was unavailable.
    Browser(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Measurement(msg) => write!(f, "Measurement Error: {}", msg),
            AppError::Fixture(msg) => write!(f, "Fixture Error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
