#[derive(Debug)]
pub enum IconError {
    InvalidSize(u32),
    InvalidColor(String),
    Encode(String),
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::InvalidSize(size) => write!(f, "Invalid icon size: {size}"),
            IconError::InvalidColor(value) => write!(f, "Invalid color, expected #RRGGBB: {value}"),
            IconError::Encode(err) => write!(f, "Failed to encode icon: {err}"),
        }
    }
}

impl std::error::Error for IconError {}
