use chrono::SubsecRound;

#[derive(Debug, thiserror::Error)]
#[error("error {0}")]
pub struct Error(String);

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn checked_add_days(&self, days: u32) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(i64::from(days)))
            .map(Self)
    }

    pub fn now() -> Self {
        Self(SubsecRound::trunc_subsecs(chrono::Utc::now(), 3))
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self(SubsecRound::trunc_subsecs(value, 3))
    }
}

impl From<DateTime> for chrono::DateTime<chrono::Utc> {
    fn from(value: DateTime) -> Self {
        value.0
    }
}

impl std::str::FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.to_utc())
            .map_err(|e| Error(e.to_string()))
            .and_then(|dt| {
                if dt == SubsecRound::trunc_subsecs(dt, 3) {
                    Ok(dt)
                } else {
                    Err(Error("invalid subsec".to_string()))
                }
            })
            .map(Self)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_string_conversion() -> anyhow::Result<()> {
        let dt = DateTime::now();
        assert_eq!(dt, DateTime::from_str(&dt.to_string())?);
        assert!(DateTime::from_str("2024-01-01T00:00:00.1234Z").is_err());
        assert!(DateTime::from_str("2024-01-01").is_err());
        for (s, expected) in [
            ("2024-01-01T00:00:00.006Z", "2024-01-01T00:00:00.006Z"),
            ("2024-01-01T00:00:00Z", "2024-01-01T00:00:00.000Z"),
            ("2024-01-01T09:00:00.000+09:00", "2024-01-01T00:00:00.000Z"),
        ] {
            assert_eq!(DateTime::from_str(s)?.to_string(), expected);
        }
        Ok(())
    }

    #[test]
    fn test_chrono_conversion() -> anyhow::Result<()> {
        let chrono_dt = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00.123456Z")?
            .to_utc();
        let dt = DateTime::from(chrono_dt);
        assert_eq!(dt.to_string(), "2024-01-01T00:00:00.123Z");
        assert_eq!(
            chrono::DateTime::<chrono::Utc>::from(dt),
            SubsecRound::trunc_subsecs(chrono_dt, 3)
        );
        Ok(())
    }

    #[test]
    fn test_checked_add_days() -> anyhow::Result<()> {
        let dt = DateTime::from_str("2024-01-01T00:00:00.000Z")?;
        assert_eq!(
            dt.checked_add_days(3).map(|dt| dt.to_string()),
            Some("2024-01-04T00:00:00.000Z".to_string())
        );
        Ok(())
    }
}
