use core::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A duration that serializes as a compact string such as `"2s"` or `"1m30s"`.
///
/// The text form is the one Go's `time.Duration` prints and parses: units
/// run together without spaces, and a sub-unit remainder is written as a
/// decimal fraction (`"1.5s"`). When deserializing, any humantime string
/// is accepted, as is a plain integer interpreted as a number of nanoseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(std::time::Duration);

impl Duration {
    pub const fn new(inner: std::time::Duration) -> Self {
        Self(inner)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(std::time::Duration::from_secs(secs))
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self(std::time::Duration::from_millis(millis))
    }

    pub const fn as_std(&self) -> std::time::Duration {
        self.0
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self(value)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MICROS: u128 = 1_000;
        const MILLIS: u128 = 1_000_000;
        const SECOND: u128 = 1_000_000_000;

        let nanos = self.0.as_nanos();

        if nanos == 0 {
            return f.write_str("0s");
        }

        if nanos < MICROS {
            return write!(f, "{nanos}ns");
        }

        if nanos < MILLIS {
            return write!(f, "{}{}µs", nanos / MICROS, fraction(nanos % MICROS, 3));
        }

        if nanos < SECOND {
            return write!(f, "{}{}ms", nanos / MILLIS, fraction(nanos % MILLIS, 6));
        }

        let frac = fraction(nanos % SECOND, 9);
        let secs = nanos / SECOND;
        let (hours, mins, secs) = (secs / 3600, secs / 60 % 60, secs % 60);

        if hours > 0 {
            write!(f, "{hours}h{mins}m{secs}{frac}s")
        } else if mins > 0 {
            write!(f, "{mins}m{secs}{frac}s")
        } else {
            write!(f, "{secs}{frac}s")
        }
    }
}

/// `.` followed by the `digits`-wide remainder with trailing zeros removed,
/// or nothing when the remainder is zero.
fn fraction(remainder: u128, digits: usize) -> String {
    if remainder == 0 {
        return String::new();
    }

    let padded = format!("{remainder:0digits$}");
    format!(".{}", padded.trim_end_matches('0'))
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DurationVisitor;

        impl de::Visitor<'_> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a duration string or an integer number of nanoseconds"
                )
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Duration(std::time::Duration::from_nanos(v)))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(v)
                    .map(|v| Duration(std::time::Duration::from_nanos(v)))
                    .map_err(|_| E::custom(format!("negative duration: {v}")))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if !v.is_finite() || v < 0.0 {
                    return Err(E::custom(format!("invalid duration: {v}")));
                }

                Ok(Duration(std::time::Duration::from_nanos(v as u64)))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                humantime::parse_duration(v)
                    .map(Duration)
                    .map_err(|e| E::custom(format!("invalid duration `{v}`: {e}")))
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}
