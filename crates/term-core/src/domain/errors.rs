use super::HalfInteger;

pub type TermResult<T> = Result<T, TermError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
}

impl TermErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermError {
    #[error("malformed configuration '{config}' at position {position}: {reason}")]
    Parse {
        config: String,
        position: usize,
        reason: String,
    },
    #[error("unknown orbital symbol '{symbol}'")]
    UnknownSymbol { symbol: char },
    #[error("L = {l} has no spectroscopic letter (largest representable L is {max})")]
    Range { l: u32, max: u32 },
    #[error("configuration contains no electrons")]
    EmptyConfiguration,
    #[error("invalid J = {j} for {electron_count} electrons: {reason}")]
    InvalidJ {
        j: String,
        electron_count: usize,
        reason: String,
    },
    #[error("invalid configuration value: {0}")]
    Config(String),
    #[error("{0}")]
    Io(String),
}

impl TermError {
    pub fn parse(config: &str, position: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            config: config.to_owned(),
            position,
            reason: reason.into(),
        }
    }

    pub fn invalid_j(j: HalfInteger, electron_count: usize, reason: impl Into<String>) -> Self {
        Self::InvalidJ {
            j: j.to_string(),
            electron_count,
            reason: reason.into(),
        }
    }

    pub const fn category(&self) -> TermErrorCategory {
        match self {
            Self::Io(_) => TermErrorCategory::IoSystemError,
            _ => TermErrorCategory::InputValidationError,
        }
    }

    /// Stable diagnostic code shown in brackets on the CLI.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "INPUT.CONFIG_PARSE",
            Self::UnknownSymbol { .. } => "INPUT.UNKNOWN_SYMBOL",
            Self::Range { .. } => "INPUT.L_RANGE",
            Self::EmptyConfiguration => "INPUT.EMPTY_CONFIG",
            Self::InvalidJ { .. } => "INPUT.INVALID_J",
            Self::Config(_) => "INPUT.SETTINGS",
            Self::Io(_) => "IO.FILE",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category().is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code(), self)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category()
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}
