//! Declarative macros shared by the options and model modules

/// Generate `with_*` setters and a `header` method for an options struct.
///
/// Every listed field must be declared as `Option<T>` on the struct and the
/// struct must carry a `headers: HeaderList` field.
///
/// ```rust,ignore
/// options_setters!(ListPoliciesOptions {
///     with_iam_id => iam_id: String,
///     with_limit => limit: i64,
/// });
/// ```
macro_rules! options_setters {
    (
        $Options:ident {
            $( $setter:ident => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        impl $Options {
            $(
                #[doc = concat!("Set `", stringify!($field), "`")]
                #[must_use]
                pub fn $setter(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Add a custom request header.
            ///
            /// Headers are sent in insertion order and passed through verbatim.
            #[must_use]
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.push((name.into(), value.into()));
                self
            }

            /// Replace all custom request headers
            #[must_use]
            pub fn with_headers(mut self, headers: $crate::types::HeaderList) -> Self {
                self.headers = headers;
                self
            }
        }
    };
}

/// Implement [`crate::pagination::Page`] for a list envelope.
macro_rules! impl_page {
    ($Collection:ty, $items:ident, $Item:ty) => {
        impl $crate::pagination::Page for $Collection {
            type Item = $Item;

            fn next_start(&self) -> Option<String> {
                self.next.as_ref().and_then($crate::models::Next::cursor)
            }

            fn into_items(self) -> Vec<Self::Item> {
                self.$items
            }
        }
    };
}

/// Implement [`crate::pagination::ListOperation`] for an options struct
/// with a `start: Option<String>` field.
macro_rules! impl_list_operation {
    ($Options:ty) => {
        impl $crate::pagination::ListOperation for $Options {
            fn start(&self) -> Option<&str> {
                self.start.as_deref()
            }

            fn set_start(&mut self, start: Option<String>) {
                self.start = start;
            }
        }
    };
}
