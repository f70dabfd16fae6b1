//! Domain model for the formforge form builder.
//!
//! Everything in this crate is pure, synchronous state: the typed question
//! list and its mutation operations, form/theme entities and their publish
//! lifecycle, the editor session state machine, and respondent answer
//! collection. Persistence lives in `formforge-store`; HTTP in
//! `formforge-api`.

pub mod editor;
pub mod error;
pub mod form;
pub mod question;
pub mod respond;
pub mod theme;
pub mod types;
