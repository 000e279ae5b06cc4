//! Anchor scanner for the legacy concatenated format.
//!
//! Legacy cards pack sex, birth date and issuing place into one fixed-width
//! block: a gender letter followed by 13 digits.
//!
//! ```text
//! M 1990 01 15 01 112
//! │ │    │  │  │  └─ department code
//! │ │    │  │  └──── municipality code
//! │ │    │  └─────── day
//! │ │    └────────── month
//! │ └─────────────── year
//! └───────────────── gender
//! ```

/// Anchor width in bytes
pub const ANCHOR_LEN: usize = 14;

/// Accepted birth years
const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1900..=2100;

/// One anchor match, borrowing its digit groups from the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Anchor<'a> {
    /// Byte offset of the gender letter
    pub start: usize,
    pub gender: char,
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub municipality: &'a str,
    pub department: &'a str,
}

impl<'a> Anchor<'a> {
    /// Find the leftmost anchor in the payload
    pub fn find(payload: &'a str) -> Option<Self> {
        let last_start = payload.len().checked_sub(ANCHOR_LEN)?;
        (0..=last_start).find_map(|start| Self::at(payload, start))
    }

    fn at(payload: &'a str, start: usize) -> Option<Self> {
        let window = payload.as_bytes().get(start..start + ANCHOR_LEN)?;
        let (&gender, digits) = window.split_first()?;
        if !matches!(gender, b'M' | b'F') || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }

        // The whole window is ASCII, so every offset below is a char boundary
        let block = &payload[start..start + ANCHOR_LEN];
        Some(Self {
            start,
            gender: char::from(gender),
            year: &block[1..5],
            month: &block[5..7],
            day: &block[7..9],
            municipality: &block[9..11],
            department: &block[11..14],
        })
    }

    /// `YYYY-MM-DD` built from the captured groups, or empty when out of range.
    ///
    /// Month lengths are not checked, so `1990-02-31` is accepted.
    pub fn date_of_birth(&self) -> String {
        let year = parse_group(self.year);
        let month = parse_group(self.month);
        let day = parse_group(self.day);

        if YEAR_RANGE.contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day) {
            format!("{}-{}-{}", self.year, self.month, self.day)
        } else {
            String::new()
        }
    }

    /// `"M"` for an `M` gender letter, `"F"` for anything else.
    ///
    /// The scanner only admits `M` and `F` today, but a non-`M` letter still
    /// falls through to `"F"` rather than being rejected.
    pub fn sex(&self) -> &'static str {
        if self.gender.eq_ignore_ascii_case(&'M') {
            "M"
        } else {
            "F"
        }
    }

    /// `"<department>-<municipality>"`, dropping the dash when a side is missing
    pub fn place_of_issuance(&self) -> String {
        if self.department.is_empty() && self.municipality.is_empty() {
            return String::new();
        }
        format!("{}-{}", self.department, self.municipality)
            .trim_matches('-')
            .to_string()
    }
}

fn parse_group(group: &str) -> u32 {
    group.parse().unwrap_or(0)
}
