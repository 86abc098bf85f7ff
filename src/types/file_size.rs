use serde::Serialize;
use std::fmt;

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Size of an uploaded file in bytes, displayed in 1024-based units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    pub fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0 Bytes");
        }
        let mut value = self.0 as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        let rounded = format!("{value:.2}");
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{} {}", trimmed, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(bytes: u64) -> String {
        FileSize::from_bytes(bytes).to_string()
    }

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(show(0), "0 Bytes");
    }

    #[test]
    fn small_sizes_stay_in_bytes() {
        assert_eq!(show(1), "1 Bytes");
        assert_eq!(show(1000), "1000 Bytes");
        assert_eq!(show(1023), "1023 Bytes");
    }

    #[test]
    fn picks_largest_unit_and_trims_trailing_zeros() {
        assert_eq!(show(1024), "1 KB");
        assert_eq!(show(1536), "1.5 KB");
        assert_eq!(show(850 * 1024), "850 KB");
        assert_eq!(show(1_258_291), "1.2 MB");
        assert_eq!(show(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn caps_at_terabytes() {
        let petabyte = 1024u64.pow(5);
        assert_eq!(show(petabyte), "1024 TB");
    }
}
