//! Macros for declaring validators and paths with minimal boilerplate.
//!
//! - [`validator!`]: a validator struct, its `Validate` impl and a factory fn
//! - [`path!`]: a `Vec<PathSegment>` from keys and indices

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a validator over [`Value`](crate::value::Value): struct
/// definition, `Validate` implementation and factory function.
///
/// The rule sees the (already converted) value; the expected kind and the
/// options are not bound.
///
/// **Unit validator**:
/// ```rust,ignore
/// validator! {
///     pub NotNull;
///     rule(input) { !input.is_null() }
///     error(input) { ValidationError::new("not_null", "Value must not be null") }
///     fn not_null();
/// }
/// ```
///
/// **Struct with fields** (constructor written out):
/// ```rust,ignore
/// validator! {
///     pub Equals { value: Value };
///     rule(self, input) { *input == self.value }
///     error(self, input) { ValidationError::new("equals", "Value differs") }
///     new(value: impl Into<Value>) { Self { value: value.into() } }
///     fn equals(value: impl Into<Value>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &$crate::value::Value,
                _expected: ::std::option::Option<$crate::value::ValueKind>,
                _options: &$crate::foundation::CoerceOptions,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &$crate::value::Value,
                _expected: ::std::option::Option<$crate::value::ValueKind>,
                _options: &$crate::foundation::CoerceOptions,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// PATH MACRO
// ============================================================================

/// Builds a `Vec<PathSegment>` from string keys and integer indices.
///
/// # Examples
///
/// ```
/// use strata_validator::path;
/// use strata_validator::path::PathSegment;
///
/// let p = path!["second", 0];
/// assert_eq!(p, vec![PathSegment::key("second"), PathSegment::Index(0)]);
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        ::std::vec::Vec::<$crate::path::PathSegment>::new()
    };
    ($($segment:expr),+ $(,)?) => {
        ::std::vec![$($crate::path::PathSegment::from($segment)),+]
    };
}
