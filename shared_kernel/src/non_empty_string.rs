/// Declares a `String` newtype that can only be built from non blank text.
/// The generated type deserializes through the same check, so settings files
/// holding an empty value fail to load.
#[macro_export]
macro_rules! non_empty_string {
    ($TypeName: ident) => {
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl PartialEq<str> for $TypeName {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $TypeName {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl TryFrom<String> for $TypeName {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.trim().is_empty() {
                    return Err(format!("{} cannot be empty", stringify!($TypeName)));
                }
                Ok($TypeName(value))
            }
        }

        impl TryFrom<&str> for $TypeName {
            type Error = String;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                $TypeName::try_from(value.to_string())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $TypeName {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                $TypeName::try_from(value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}
