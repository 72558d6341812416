use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Identifies a kernel strategy in the [`KernelRegistry`](super::registry::KernelRegistry).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum KernelKind {
    #[default]
    Software,
    Native,
}

impl KernelKind {
    pub const ALL: [KernelKind; 2] = [KernelKind::Software, KernelKind::Native];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelKindParseError {
    pub input: String,
}

impl fmt::Display for KernelKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown kernel `{}`, expected one of: software, native",
            self.input
        )
    }
}

impl Error for KernelKindParseError {}

impl FromStr for KernelKind {
    type Err = KernelKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KernelKindParseError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("software".parse::<KernelKind>(), Ok(KernelKind::Software));
        assert_eq!(" Native ".parse::<KernelKind>(), Ok(KernelKind::Native));
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        let err = "gpu".parse::<KernelKind>().unwrap_err();

        assert_eq!(err.input, "gpu");
        assert_eq!(
            err.to_string(),
            "unknown kernel `gpu`, expected one of: software, native"
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in KernelKind::ALL {
            assert_eq!(kind.to_string().parse::<KernelKind>(), Ok(kind));
        }
    }
}
