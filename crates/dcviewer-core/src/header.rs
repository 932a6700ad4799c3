use std::fmt;

/// One 80-column header card.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCard {
    pub keyword: String,
    /// Value field exactly as written (string values keep their quotes).
    pub value: Option<String>,
    pub comment: Option<String>,
}

impl HeaderCard {
    /// Parse a single card. Cards without a `= ` value indicator
    /// (COMMENT, HISTORY, blank) keep their text as the comment.
    pub fn parse(raw: &[u8]) -> Self {
        let text: String = raw
            .iter()
            .map(|&b| if b.is_ascii() && !b.is_ascii_control() { b as char } else { ' ' })
            .collect();
        let keyword = text.get(..8).unwrap_or(&text).trim_end().to_string();
        let rest = text.get(8..).unwrap_or("");

        let Some(field) = rest.strip_prefix("= ") else {
            let comment = rest.trim();
            return Self {
                keyword,
                value: None,
                comment: (!comment.is_empty()).then(|| comment.to_string()),
            };
        };

        let (value, comment) = split_value_comment(field);
        Self {
            keyword,
            value: (!value.is_empty()).then(|| value.to_string()),
            comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }

    /// The value with string quoting removed (`''` unescaped, trailing blanks trimmed).
    pub fn text_value(&self) -> Option<String> {
        let raw = self.value.as_deref()?;
        match raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
            Some(inner) => Some(inner.replace("''", "'").trim_end().to_string()),
            None => Some(raw.to_string()),
        }
    }
}

/// Split a value field into value and comment, respecting quoted strings.
fn split_value_comment(field: &str) -> (&str, Option<&str>) {
    let trimmed = field.trim_start();
    let offset = field.len() - trimmed.len();

    let search_from = if trimmed.starts_with('\'') {
        // Skip to the closing quote; '' is an escaped quote.
        let bytes = trimmed.as_bytes();
        let mut i = 1;
        loop {
            match bytes.get(i) {
                Some(b'\'') if bytes.get(i + 1) == Some(&b'\'') => i += 2,
                Some(b'\'') => break i + 1,
                Some(_) => i += 1,
                None => break bytes.len(),
            }
        }
    } else {
        0
    };

    match trimmed[search_from..].find('/') {
        Some(pos) => {
            let split = offset + search_from + pos;
            (field[..split].trim(), Some(field[split + 1..].trim()))
        }
        None => (field.trim(), None),
    }
}

/// Ordered metadata record of one FITS HDU.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitsHeader {
    pub cards: Vec<HeaderCard>,
}

impl FitsHeader {
    pub fn new(cards: Vec<HeaderCard>) -> Self {
        Self { cards }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// First card with the given keyword.
    pub fn card(&self, keyword: &str) -> Option<&HeaderCard> {
        self.cards.iter().find(|c| c.keyword == keyword)
    }

    pub fn get_str(&self, keyword: &str) -> Option<String> {
        self.card(keyword)?.text_value()
    }

    pub fn get_int(&self, keyword: &str) -> Option<i64> {
        self.card(keyword)?.value.as_deref()?.trim().parse().ok()
    }

    /// Float value; accepts Fortran-style `D` exponents.
    pub fn get_float(&self, keyword: &str) -> Option<f64> {
        let raw = self.card(keyword)?.value.as_deref()?.trim();
        raw.replace(['D', 'd'], "E").parse().ok()
    }

    pub fn get_bool(&self, keyword: &str) -> Option<bool> {
        match self.card(keyword)?.value.as_deref()?.trim() {
            "T" => Some(true),
            "F" => Some(false),
            _ => None,
        }
    }
}

impl fmt::Display for FitsHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match (&card.value, &card.comment) {
                (Some(v), Some(c)) => write!(f, "{:<8}= {:>20} / {}", card.keyword, v, c)?,
                (Some(v), None) => write!(f, "{:<8}= {:>20}", card.keyword, v)?,
                (None, Some(c)) => write!(f, "{:<8}{}", card.keyword, c)?,
                (None, None) => write!(f, "{}", card.keyword)?,
            }
        }
        Ok(())
    }
}
