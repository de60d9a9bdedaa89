//! Declarative choice sets.
//!
//! A choice set is declared as an ordered list of `NAME = value` entries,
//! each with an optional label, and built once into an immutable
//! [`ChoiceSet`]: an ordered sequence of `(value, label)` pairs whose values
//! can also be looked up by their declared name.
//!
//! This crate contains pure domain types with no IO and no async.
//!
//! ```
//! use choices_types::choices;
//!
//! let status = choices! {
//!     ACTIVE = 1,
//!     DISABLED = 0 => "Disabled",
//! }
//! .unwrap();
//!
//! assert_eq!(status.get("ACTIVE"), Ok(&1));
//! assert_eq!(status, [(1, "ACTIVE"), (0, "Disabled")]);
//! ```

mod declaration;
pub mod reserved;
mod set;

pub use declaration::{Collected, Declaration, DeclarationError, RawChoice, collect};
pub use reserved::{RESERVED_NAMES, is_reserved};
pub use set::{ChoiceEntry, ChoiceSet, Iter, LookupError};

/// Declare and build a [`ChoiceSet`] in one step.
///
/// Each entry is `NAME = value` or `NAME = value => label`. Entries keep
/// the order they are written in. Expands to
/// `Result<ChoiceSet<_>, DeclarationError>`.
#[macro_export]
macro_rules! choices {
    ($($name:ident = $value:expr $(=> $label:expr)?),* $(,)?) => {
        $crate::Declaration::new()
            $(.entry(
                ::core::stringify!($name),
                $crate::RawChoice::Value($value)$(.with_label($label))?,
            ))*
            .build()
    };
}
