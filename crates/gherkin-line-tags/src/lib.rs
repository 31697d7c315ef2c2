//! Tag expressions used to select Gherkin statements by their tags.
//!
//! An expression is compiled from a list of clauses. Each clause is a
//! comma-separated OR-group of tag terms and the clauses are combined with
//! AND, so `["@fast,@smoke", "~@wip"]` reads as
//! `(fast or smoke) and not wip`. Terms may carry an execution limit
//! (`@smoke:3`); limits are recorded for the selection layer rather than
//! enforced here.

mod error;
mod expression;
mod sets;
mod term;

pub use error::TagExprError;
pub use expression::TagExpression;
pub use sets::{extend_tag_set, merge_tag_sets};
pub use term::Term;
