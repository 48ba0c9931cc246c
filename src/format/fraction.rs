/// A fraction over the sixteenth-inch denominator, reduced to lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    /// Reduce `sixteenths/16` to lowest terms
    pub fn from_sixteenths(sixteenths: u32) -> Self {
        let d = gcd(sixteenths, 16);
        Fraction {
            numerator: sixteenths / d,
            denominator: 16 / d,
        }
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Euclidean greatest common divisor
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 16), 4);
        assert_eq!(gcd(8, 16), 8);
        assert_eq!(gcd(15, 16), 1);
        assert_eq!(gcd(16, 16), 16);
    }

    #[test]
    fn test_reduction() {
        assert_eq!(Fraction::from_sixteenths(8).to_string(), "1/2");
        assert_eq!(Fraction::from_sixteenths(12).to_string(), "3/4");
        assert_eq!(Fraction::from_sixteenths(4).to_string(), "1/4");
        assert_eq!(Fraction::from_sixteenths(2).to_string(), "1/8");
        assert_eq!(Fraction::from_sixteenths(15).to_string(), "15/16");
        assert_eq!(Fraction::from_sixteenths(1).to_string(), "1/16");
    }
}
