use std::cmp::Ordering;

/// A run of decimal digits, ordered by value with unbounded precision.
///
/// The digits are kept exactly as they appeared so a fragment can be
/// rebuilt from its tokens, while equality and ordering only look at the
/// significant digits: `009` and `9` are the same number.
#[derive(Debug, Clone)]
pub struct Number {
    digits: String,
}

impl Number {
    /// Build a number from a run of ASCII digits. Returns `None` when the
    /// input is empty or contains anything else.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            digits: digits.to_string(),
        })
    }

    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value() == "0"
    }

    /// The digits without leading zeros, keeping at least one digit.
    pub fn value(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() {
            &self.digits[self.digits.len() - 1..]
        } else {
            trimmed
        }
    }

    /// The digits as written in the source fragment.
    pub fn source(&self) -> &str {
        &self.digits
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Number {}

impl std::hash::Hash for Number {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.value(), other.value());
        // Without leading zeros, a longer run is always the larger number.
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(Number),
    Text(String),
}

impl Token {
    pub fn zero() -> Self {
        Self::Number(Number::zero())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The text this token is compared as when it meets a textual token.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Number(n) => n.value(),
            Token::Text(s) => s,
        }
    }

    /// The exact characters this token was scanned from.
    pub fn source(&self) -> &str {
        match self {
            Token::Number(n) => n.source(),
            Token::Text(s) => s,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a version fragment into alternating runs of digits and non-digits.
///
/// An empty fragment is read as `"0"`, so every fragment yields at least one
/// token.
pub fn tokenize(fragment: &str) -> Vec<Token> {
    let fragment = if fragment.is_empty() { "0" } else { fragment };

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (index, ch) in fragment.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if index > start && is_digit != in_digits {
            tokens.push(make_token(&fragment[start..index], in_digits));
            start = index;
        }
        in_digits = is_digit;
    }

    tokens.push(make_token(&fragment[start..], in_digits));
    tokens
}

fn make_token(run: &str, digits: bool) -> Token {
    match Number::from_digits(run) {
        Some(number) if digits => Token::Number(number),
        _ => Token::Text(run.to_string()),
    }
}
