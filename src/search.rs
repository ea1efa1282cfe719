/// Shape-based classification of free-text search input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// 40 hex chars, optionally prefixed with 0x
    Address,
    /// 0x + 64 hex chars
    Tx,
    /// Decimal digits only
    Block,
    NotFound,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Tx => "tx",
            Self::Block => "block",
            Self::NotFound => "not found",
        }
    }
}

/// Classify a search string by its shape alone.
///
/// Total over arbitrary input: never panics and never trims.
pub fn classify(input: &str) -> SearchKind {
    let is_hex = |s: &str| s.bytes().all(|b| b.is_ascii_hexdigit());

    match input.strip_prefix("0x") {
        Some(hex) if hex.len() == 40 && is_hex(hex) => return SearchKind::Address,
        Some(hex) if hex.len() == 64 && is_hex(hex) => return SearchKind::Tx,
        _ => {}
    }

    if input.len() == 40 && is_hex(input) {
        // Bare 40-char hex also matches the digits rule; address wins
        return SearchKind::Address;
    }

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return SearchKind::Block;
    }

    SearchKind::NotFound
}

/// A classified query carrying the normalised value for the view it routes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Lowercase, 0x-prefixed address
    Address(String),
    /// Lowercase transaction hash
    Tx(String),
    /// Block height
    Block(u64),
    /// Unrecognised query with a reason
    NotFound(String),
}

impl SearchQuery {
    /// Parse a search string into a typed query
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        match classify(trimmed) {
            SearchKind::Address => {
                let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
                Self::Address(format!("0x{}", hex.to_lowercase()))
            }
            SearchKind::Tx => Self::Tx(trimmed.to_lowercase()),
            SearchKind::Block => match trimmed.parse::<u64>() {
                Ok(height) => Self::Block(height),
                Err(_) => Self::NotFound(format!("Block height too large: {trimmed}")),
            },
            SearchKind::NotFound => {
                Self::NotFound(format!("Unrecognized query format: {trimmed}"))
            }
        }
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            Self::Address(_) => SearchKind::Address,
            Self::Tx(_) => SearchKind::Tx,
            Self::Block(_) => SearchKind::Block,
            Self::NotFound(_) => SearchKind::NotFound,
        }
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::Address(addr) => format!("Address: {addr}"),
            Self::Tx(hash) => format!("Transaction: {hash}"),
            Self::Block(height) => format!("Block: {height}"),
            Self::NotFound(reason) => format!("Not found: {reason}"),
        }
    }
}
