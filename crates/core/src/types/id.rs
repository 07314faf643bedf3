//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. New IDs are minted by
//! [`IdGenerator`].

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use catalogo_core::define_id;
/// define_id!(BrandId);
/// define_id!(TagId);
///
/// let brand_id = BrandId::new("b1");
/// let tag_id = TagId::new("b1");
///
/// // These are different types, so this won't compile:
/// // let _: BrandId = tag_id;
/// assert_eq!(brand_id.as_str(), tag_id.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ProductId);

/// Prefix for generated category IDs.
pub const CATEGORY_ID_PREFIX: &str = "cat_";
/// Prefix for generated product IDs.
pub const PRODUCT_ID_PREFIX: &str = "prod_";

/// Timestamp-based ID source.
///
/// IDs look like `cat_1718000000000` (Unix milliseconds). Values are strictly
/// increasing for the lifetime of the generator: when the clock has not moved
/// past the last issued stamp, the next stamp is the last one plus one.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last_stamp: i64,
}

impl IdGenerator {
    /// Create a generator that has not issued any IDs yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_stamp: 0 }
    }

    /// Next category ID for which `is_taken` returns false.
    pub fn next_category_id(&mut self, is_taken: impl Fn(&CategoryId) -> bool) -> CategoryId {
        loop {
            let id = CategoryId::new(format!("{CATEGORY_ID_PREFIX}{}", self.next_stamp()));
            if !is_taken(&id) {
                return id;
            }
        }
    }

    /// Next product ID for which `is_taken` returns false.
    pub fn next_product_id(&mut self, is_taken: impl Fn(&ProductId) -> bool) -> ProductId {
        loop {
            let id = ProductId::new(format!("{PRODUCT_ID_PREFIX}{}", self.next_stamp()));
            if !is_taken(&id) {
                return id;
            }
        }
    }

    fn next_stamp(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_stamp = if now > self.last_stamp {
            now
        } else {
            self.last_stamp.saturating_add(1)
        };
        self.last_stamp
    }
}
