//! Scalar codecs: integers, floats, booleans and plain strings.

use super::PropertyValue;
use crate::error::{PropertyError, Result};

macro_rules! impl_from_str_value {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl PropertyValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn to_property_string(&self) -> String {
                    self.to_string()
                }

                fn from_property_string(text: &str) -> Result<Self> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|_| PropertyError::malformed(Self::TYPE_NAME, text))
                }
            }
        )*
    };
}

// `Display` for floats already gives the shortest text that parses back to
// the same value, without an exponent.
impl_from_str_value! {
    i32 => "int",
    u32 => "uint",
    f32 => "float",
    f64 => "double",
}

impl PropertyValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn to_property_string(&self) -> String {
        if *self { "true" } else { "false" }.to_owned()
    }

    fn from_property_string(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(PropertyError::malformed(Self::TYPE_NAME, text))
        }
    }
}

impl PropertyValue for String {
    const TYPE_NAME: &'static str = "String";

    fn to_property_string(&self) -> String {
        self.clone()
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::helper::{format, parse};

    #[test]
    fn test_int_format_and_parse() {
        assert_eq!(format(&0_i32), "0");
        assert_eq!(format(&-1230_i32), "-1230");
        assert_eq!(parse::<i32>(" 42 ").unwrap(), 42);
        assert!(parse::<i32>("").is_err());
        assert!(parse::<i32>("12px").is_err());
        assert!(parse::<i32>("99999999999").is_err());
    }

    #[test]
    fn test_uint_rejects_negative() {
        assert_eq!(parse::<u32>("4000000000").unwrap(), 4_000_000_000);
        assert!(parse::<u32>("-1").is_err());
    }

    #[test]
    fn test_float_has_no_trailing_zeros() {
        assert_eq!(format(&1.0_f32), "1");
        assert_eq!(format(&0.5_f32), "0.5");
        assert_eq!(format(&123.1_f64), "123.1");
        assert_eq!(format(&1e10_f32), "10000000000");
    }

    #[test]
    fn test_float_shortest_round_trip() {
        for value in [0.1_f32, 1.0 / 3.0, -7.25, f32::MAX, f32::MIN_POSITIVE] {
            assert_eq!(parse::<f32>(&format(&value)).unwrap(), value);
        }
        for value in [0.1_f64, 1.0 / 3.0, -123.1, 1e-300] {
            assert_eq!(parse::<f64>(&format(&value)).unwrap(), value);
        }
    }

    #[test]
    fn test_bool_is_case_insensitive() {
        assert_eq!(format(&true), "true");
        assert_eq!(format(&false), "false");
        assert!(parse::<bool>("TRUE").unwrap());
        assert!(parse::<bool>("True").unwrap());
        assert!(!parse::<bool>("false").unwrap());
        assert!(parse::<bool>("yes").is_err());
        assert!(parse::<bool>("1").is_err());
        assert!(parse::<bool>("").is_err());
    }

    #[test]
    fn test_string_is_identity() {
        assert_eq!(parse::<String>("  spaced  ").unwrap(), "  spaced  ");
        assert_eq!(format(&String::from("{1,2}")), "{1,2}");
    }
}
