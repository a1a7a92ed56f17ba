// rosterview/rosterview-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a `String` newtype that can be used as a map key and compared against `&str`.
/// The declaring crate needs `serde` with the `derive` feature.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Hash, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    crate::id_string!(
        /// A name used in tests.
        Name
    );

    #[test]
    fn test_borrows_as_str() {
        let names = HashSet::from([Name::from("Work"), Name::from("Friends")]);
        assert!(names.contains("Work"));
        assert!(!names.contains("work"));
    }

    #[test]
    fn test_serializes_transparently() {
        let name = Name::from("Work");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Work\"");
        assert_eq!(serde_json::from_str::<Name>("\"Work\"").unwrap(), name);
        assert!(&name == "Work");
    }
}
