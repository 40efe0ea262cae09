//! Internal macros.

/// Generates the shared surface of an array column newtype: parsing from a
/// literal (`FromStr`, `from_bytes`), rendering one (`Display`,
/// `to_literal`), and the usual vector conversions.
macro_rules! array_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($elem:ty),
        decode_str = $decode_str:path,
        decode_bytes = $decode_bytes:path,
        encode = $encode:path $(,)?
    ) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$elem>);

        impl $name {
            /// Creates an empty array.
            #[must_use]
            pub fn new() -> Self {
                $name(Vec::new())
            }

            /// Decodes raw column bytes.
            ///
            /// # Errors
            ///
            /// Returns an error if `src` is not a valid literal for this element type.
            pub fn from_bytes(src: &[u8]) -> $crate::Result<Self> {
                $decode_bytes(src).map($name)
            }

            /// Encodes the array as a literal.
            #[must_use]
            pub fn to_literal(&self) -> String {
                $encode(&self.0)
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                $decode_str(s).map($name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_literal())
            }
        }

        impl std::ops::Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(values: Vec<$elem>) -> Self {
                $name(values)
            }
        }

        impl From<$name> for Vec<$elem> {
            fn from(array: $name) -> Self {
                array.0
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                $name(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $elem;
            type IntoIter = std::vec::IntoIter<$elem>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }
    };
}
