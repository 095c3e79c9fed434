#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("seats must be at least {min}", min = Seats::MIN)]
    TooFew,
    #[error("seats must be at most {max}", max = Seats::MAX)]
    TooMany,
}

/// Capacity of a webinar (1..=1000)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Seats(u16);

impl Seats {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 1000;
}

impl TryFrom<u32> for Seats {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < u32::from(Self::MIN) {
            return Err(Error::TooFew);
        }
        u16::try_from(value)
            .ok()
            .filter(|n| *n <= Self::MAX)
            .map(Self)
            .ok_or(Error::TooMany)
    }
}

impl TryFrom<i32> for Seats {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map_err(|_| Error::TooFew)
            .and_then(Self::try_from)
    }
}

impl From<Seats> for u32 {
    fn from(value: Seats) -> Self {
        u32::from(value.0)
    }
}

impl From<Seats> for i32 {
    fn from(value: Seats) -> Self {
        i32::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_conversion() -> anyhow::Result<()> {
        assert_eq!(Seats::try_from(0_u32), Err(Error::TooFew));
        assert_eq!(u32::from(Seats::try_from(1_u32)?), 1);
        assert_eq!(u32::from(Seats::try_from(1000_u32)?), 1000);
        assert_eq!(Seats::try_from(1001_u32), Err(Error::TooMany));
        assert_eq!(Seats::try_from(u32::MAX), Err(Error::TooMany));
        Ok(())
    }

    #[test]
    fn test_i32_conversion() -> anyhow::Result<()> {
        assert_eq!(Seats::try_from(-1_i32), Err(Error::TooFew));
        assert_eq!(i32::from(Seats::try_from(100_i32)?), 100);
        assert_eq!(Seats::try_from(i32::MAX), Err(Error::TooMany));
        Ok(())
    }

    #[test]
    fn test_ord() -> anyhow::Result<()> {
        assert!(Seats::try_from(100_u32)? < Seats::try_from(200_u32)?);
        Ok(())
    }
}
