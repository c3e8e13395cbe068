//! Common types for upstream providers

/// Kind of upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    /// CPAN (search.cpan.org)
    Cpan,
}

impl ProviderType {
    /// Returns the string representation of the provider type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Cpan => "cpan",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpan" => Ok(ProviderType::Cpan),
            _ => Err(format!("unknown provider '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cpan", Ok(ProviderType::Cpan))]
    #[case("CPAN", Err("unknown provider 'CPAN'".to_string()))]
    #[case("npm", Err("unknown provider 'npm'".to_string()))]
    fn from_str_returns_expected(
        #[case] input: &str,
        #[case] expected: Result<ProviderType, String>,
    ) {
        assert_eq!(input.parse::<ProviderType>(), expected);
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        let provider_type = ProviderType::Cpan;
        assert_eq!(provider_type.as_str().parse(), Ok(provider_type));
    }
}
