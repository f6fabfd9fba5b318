//! # charstep: character stepping and typed echo arithmetic
//!
//! Backs two small console programs:
//! - the **range printer** ([`RangeSpec`]), which validates one character
//!   against an inclusive range and lists the characters after it
//! - the **echo calculator** ([`EchoSpec`]), which reads a type selector and
//!   a value of that type, then prints a short progression and the type's
//!   storage size
//!
//! # Example
//!
//! ```
//! use charstep::{EchoSpec, RangeSpec, TypedValue};
//!
//! let successors = RangeSpec::default().successors('b').unwrap();
//! assert_eq!(successors.to_string(), "The next 6 characters are: C D E F G H ");
//!
//! let report = EchoSpec::default().report(TypedValue::Integer(5)).unwrap();
//! assert_eq!(report.successors(), ["8", "11", "14", "17"]);
//! ```

pub mod echo;
pub mod error;
pub mod range;
pub mod scanner;
pub mod session;

pub use echo::{EchoReport, EchoSpec, SELECTOR_PROMPT, TypeSelector, TypedValue};
pub use error::{CharstepError, Result};
pub use range::{RangeSpec, Successors};
pub use scanner::Scanner;
pub use session::{run_echo_calculator, run_range_printer};
