//! complang IR - shared syntax types
//!
//! This crate contains the data structures every phase of complang agrees on:
//! - `Name` for interned symbols, backed by a sharded `StringInterner`
//! - `Span` for byte ranges in a source line
//! - `Token`, `TokenKind` and `TokenList` for lexer output
//! - `Expr`, `Stmt` and `Query` for parser output
//!
//! # Design Philosophy
//!
//! - **Intern symbols**: identifier text becomes `Name(u32)`, so symbol
//!   equality is identity equality.
//! - **Share trees**: sub-expressions live behind `Arc`, so a closure can hold
//!   on to its body without copying it.

mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{Expr, ExprKind, Query, Stmt};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

