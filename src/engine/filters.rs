//! Filter configuration: which rewrite rules are enabled.
//!
//! The configuration is an unordered set of rule names drawn from a closed
//! vocabulary. Order in the configuration string never affects the order in
//! which rules run; the pipeline applies them in its own fixed order.

use crate::error::RewriteError;
use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// Enabled rewrite rules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Filters: u8 {
        const THERE_BE        = 1 << 0;
        const AT_LEAST_A_FEW  = 1 << 1;
        const MODS            = 1 << 2;
        const ROOTED_Q        = 1 << 3;
        const DROP_DET        = 1 << 4;
        const HAS             = 1 << 5;
    }
}

/// Configuration names in pipeline order.
const NAMES: [(&str, Filters); 6] = [
    ("therebe", Filters::THERE_BE),
    ("atleastafew", Filters::AT_LEAST_A_FEW),
    ("mods", Filters::MODS),
    ("rootedq", Filters::ROOTED_Q),
    ("dropdet", Filters::DROP_DET),
    ("has", Filters::HAS),
];

impl Filters {
    /// Everything except `dropdet`.
    pub const DEFAULT: Filters = Filters::THERE_BE
        .union(Filters::AT_LEAST_A_FEW)
        .union(Filters::MODS)
        .union(Filters::ROOTED_Q)
        .union(Filters::HAS);

    /// Configuration name of a single filter.
    pub fn config_name(self) -> Option<&'static str> {
        NAMES.iter().find(|(_, f)| *f == self).map(|(name, _)| *name)
    }

    /// Parse a single configuration name.
    pub fn from_config_name(name: &str) -> Option<Filters> {
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }
}

impl Default for Filters {
    fn default() -> Self {
        Filters::DEFAULT
    }
}

impl FromStr for Filters {
    type Err = RewriteError;

    /// Parse a comma-separated list such as `"therebe,mods,rootedq"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut filters = Filters::empty();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            filters |= Filters::from_config_name(item).ok_or_else(|| RewriteError::UnknownFilter(item.to_string()))?;
        }
        Ok(filters)
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = NAMES.iter().filter(|(_, flag)| self.contains(*flag)).map(|(name, _)| *name).collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_names() {
        let filters: Filters = " mods, therebe ,,has".parse().unwrap();
        assert_eq!(filters, Filters::MODS | Filters::THERE_BE | Filters::HAS);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "therebe,alot".parse::<Filters>().unwrap_err();
        assert_eq!(err, RewriteError::UnknownFilter("alot".to_string()));
    }

    #[test]
    fn default_leaves_dropdet_off() {
        assert!(!Filters::DEFAULT.contains(Filters::DROP_DET));
        assert_eq!(Filters::DEFAULT.to_string(), "therebe,atleastafew,mods,rootedq,has");
        assert_eq!("therebe,atleastafew,mods,rootedq,has".parse::<Filters>().unwrap(), Filters::default());
    }

    #[test]
    fn display_uses_pipeline_order() {
        let filters: Filters = "has,dropdet,therebe".parse().unwrap();
        assert_eq!(filters.to_string(), "therebe,dropdet,has");
        assert_eq!(Filters::ROOTED_Q.config_name(), Some("rootedq"));
        assert!("".parse::<Filters>().unwrap().is_empty());
    }
}
