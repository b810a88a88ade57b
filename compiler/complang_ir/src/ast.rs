//! Syntax trees: expressions, statements and completion queries.
//!
//! Trees are immutable once built. Children sit behind `Arc` so closures can
//! share their body with the tree that produced them.

use std::fmt::Write as _;
use std::sync::Arc;

use super::{Name, Span, StringLookup};

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// String literal; contents are never resolved as references.
    String(Arc<str>),
    /// Plain symbol literal, evaluates to a symbol value.
    Symbol(Name),
    /// `$name`, looked up in the environment.
    Ref(Name),
    /// `receiver message`: evaluate both, send the message to the receiver.
    Message {
        receiver: Arc<Expr>,
        message: Arc<Expr>,
    },
    /// `[p1 p2 | body]` or `[body]`.
    Lambda { params: Arc<[Name]>, body: Arc<Expr> },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Build a message send spanning both operands.
    pub fn message(receiver: Expr, message: Expr) -> Self {
        let span = receiver.span.merge(message.span);
        Expr {
            kind: ExprKind::Message {
                receiver: Arc::new(receiver),
                message: Arc::new(message),
            },
            span,
        }
    }

    /// Render the tree in constructor notation, e.g.
    /// `Message(Ref($a), Sym(b))`.
    pub fn pretty(&self, names: &impl StringLookup) -> String {
        let mut out = String::new();
        self.pretty_into(names, &mut out);
        out
    }

    fn pretty_into(&self, names: &impl StringLookup, out: &mut String) {
        match &self.kind {
            ExprKind::Null => out.push_str("Null"),
            ExprKind::Bool(b) => {
                let _ = write!(out, "Bool({b})");
            }
            ExprKind::Int(n) => {
                let _ = write!(out, "Int({n})");
            }
            ExprKind::String(s) => {
                let _ = write!(out, "String({s:?})");
            }
            ExprKind::Symbol(s) => {
                let _ = write!(out, "Sym({})", names.lookup(*s));
            }
            ExprKind::Ref(r) => {
                let _ = write!(out, "Ref({})", names.lookup(*r));
            }
            ExprKind::Message { receiver, message } => {
                out.push_str("Message(");
                receiver.pretty_into(names, out);
                out.push_str(", ");
                message.pretty_into(names, out);
                out.push(')');
            }
            ExprKind::Lambda { params, body } => {
                out.push_str("Lambda([");
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(names.lookup(*p));
                }
                out.push_str("], ");
                body.pretty_into(names, out);
                out.push(')');
            }
        }
    }
}

/// Statement: one REPL line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// Evaluate, run, and display.
    Expr(Expr),
    /// `$ref = expr`: evaluate, run, and bind at top level.
    Assign { name: Name, span: Span, value: Expr },
}

impl Stmt {
    /// The expression evaluated by this statement.
    pub fn expr(&self) -> &Expr {
        match self {
            Stmt::Expr(expr) | Stmt::Assign { value: expr, .. } => expr,
        }
    }
}

/// Parse of an incomplete line at the point completion was requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Complete a message name sent to `receiver`.
    Symbol {
        receiver: Expr,
        /// Partial symbol text; `Name::EMPTY` when nothing was typed yet.
        symbol: Name,
        offset: usize,
    },
    /// Complete a reference bound in the environment.
    Ref { name: Name, offset: usize },
}

impl Query {
    /// Byte offset where the lexeme being completed starts.
    pub fn offset(&self) -> usize {
        match self {
            Query::Symbol { offset, .. } | Query::Ref { offset, .. } => *offset,
        }
    }

    /// The partial lexeme being completed.
    pub fn partial(&self) -> Name {
        match self {
            Query::Symbol { symbol, .. } => *symbol,
            Query::Ref { name, .. } => *name,
        }
    }
}
